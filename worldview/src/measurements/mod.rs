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

//! Physical quantities with their unit of measure.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod angle;
pub mod constants;
mod length;

pub use angle::Angle;
pub use length::{Length, LengthUnit};

/// A unit in which a quantity can be expressed.
pub trait UnitOfMeasure: Copy {
    /// Returns the SI unit of the quantity.
    fn si() -> Self;

    fn symbol(&self) -> &'static str;

    /// Number of decimals printed when displaying a value in this unit.
    fn precision(&self) -> usize {
        1
    }

    /// Converts a value in SI unit to the unit `to`.
    fn from_si(value: f64, to: &Self) -> f64;

    /// Converts a value in this unit to the SI unit.
    fn to_si(&self, value: &f64) -> f64;
}

/// A value together with the unit it is expressed in.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Measurement<U> {
    value: f64,
    unit: U,
}

impl<U: UnitOfMeasure> Measurement<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// Returns the value converted to the SI unit.
    pub fn to_si(&self) -> f64 {
        self.unit.to_si(&self.value)
    }

    /// Returns the measurement expressed in the unit `to`.
    pub fn convert_to(self, to: U) -> Self {
        Self {
            value: U::from_si(self.to_si(), &to),
            unit: to,
        }
    }
}

impl<U: UnitOfMeasure> PartialEq for Measurement<U> {
    fn eq(&self, other: &Self) -> bool {
        self.to_si() == other.to_si()
    }
}

impl<U: UnitOfMeasure> PartialOrd for Measurement<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_si().partial_cmp(&other.to_si())
    }
}

impl<U: UnitOfMeasure> Display for Measurement<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.*} {}",
            self.unit.precision(),
            self.value,
            self.unit.symbol()
        )
    }
}
