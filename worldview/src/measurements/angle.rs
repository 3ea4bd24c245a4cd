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

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A true bearing in degrees, measured clockwise from north.
///
/// The value is always within `[0, 360)`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Creates a true bearing, wrapping the degrees into `[0, 360)`.
    pub fn t(degrees: f64) -> Self {
        let mut normalized = (degrees % 360.0 + 360.0) % 360.0;
        // (-tiny + 360) may round up to exactly 360
        if normalized >= 360.0 {
            normalized = 0.0;
        }
        Self {
            degrees: normalized,
        }
    }

    pub fn value(&self) -> f64 {
        self.degrees
    }

    /// Returns the reciprocal bearing.
    pub fn reciprocal(&self) -> Self {
        Self::t(self.degrees + 180.0)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rounded = self.degrees.round() as u16 % 360;
        write!(f, "{rounded:03}°")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_into_range() {
        assert_eq!(Angle::t(-90.0).value(), 270.0);
        assert_eq!(Angle::t(360.0).value(), 0.0);
        assert_eq!(Angle::t(725.0).value(), 5.0);
        assert_eq!(Angle::t(-1e-20).value(), 0.0);
    }

    #[test]
    fn reciprocal() {
        assert_eq!(Angle::t(90.0).reciprocal().value(), 270.0);
        assert_eq!(Angle::t(270.0).reciprocal().value(), 90.0);
    }

    #[test]
    fn display() {
        assert_eq!(Angle::t(7.4).to_string(), "007°");
        assert_eq!(Angle::t(359.7).to_string(), "000°");
    }
}
