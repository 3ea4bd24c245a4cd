// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The Worldview Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A country record carries no geometry at all.
    MissingGeometry { id: String },
    /// The geometry of a country record is neither a bare geometry nor a
    /// feature wrapping one.
    InvalidGeometry { id: String, reason: String },
    /// The geometry has no coordinates to compute bounds from.
    EmptyGeometry { id: String },
    /// A pin was addressed by an index outside of the pin list.
    PinIndexOutOfRange { index: usize, len: usize },
    /// The country rows could not be parsed.
    InvalidRecords(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGeometry { id } => write!(f, "country {id} has no geometry"),
            Self::InvalidGeometry { id, reason } => {
                write!(f, "country {id} has an invalid geometry: {reason}")
            }
            Self::EmptyGeometry { id } => write!(f, "geometry of country {id} is empty"),
            Self::PinIndexOutOfRange { index, len } => {
                write!(f, "pin {index} does not exist (only {len} pin(s) placed)")
            }
            Self::InvalidRecords(e) => write!(f, "invalid country records: {e}"),
        }
    }
}

impl error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidRecords(e.to_string())
    }
}
