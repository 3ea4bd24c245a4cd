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

use serde::{Deserialize, Serialize};

use super::{constants, Measurement, UnitOfMeasure};

/// Length unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum LengthUnit {
    Meters,
    Kilometers,
    StatuteMiles,
    NauticalMiles,
}

impl UnitOfMeasure for LengthUnit {
    fn si() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::StatuteMiles => "mi",
            Self::NauticalMiles => "NM",
        }
    }

    fn precision(&self) -> usize {
        match self {
            Self::Meters => 0,
            _ => 1,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Meters => value,
            Self::Kilometers => value / constants::KILOMETER_IN_METER,
            Self::StatuteMiles => value / constants::STATUTE_MILE_IN_METER,
            Self::NauticalMiles => value / constants::NAUTICAL_MILE_IN_METER,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Meters => *value,
            Self::Kilometers => value * constants::KILOMETER_IN_METER,
            Self::StatuteMiles => value * constants::STATUTE_MILE_IN_METER,
            Self::NauticalMiles => value * constants::NAUTICAL_MILE_IN_METER,
        }
    }
}

pub type Length = Measurement<LengthUnit>;

impl Length {
    pub fn m(value: f64) -> Self {
        Self::new(value, LengthUnit::Meters)
    }

    pub fn km(value: f64) -> Self {
        Self::new(value, LengthUnit::Kilometers)
    }

    pub fn mi(value: f64) -> Self {
        Self::new(value, LengthUnit::StatuteMiles)
    }

    pub fn nm(value: f64) -> Self {
        Self::new(value, LengthUnit::NauticalMiles)
    }

    /// Returns the length in the unit a map label reads best in: meters
    /// below one kilometer and kilometers above.
    pub fn humanize(self) -> Self {
        if self.to_si() < constants::KILOMETER_IN_METER {
            self.convert_to(LengthUnit::Meters)
        } else {
            self.convert_to(LengthUnit::Kilometers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        let one_nm = Length::nm(1.0);
        assert_eq!(one_nm.convert_to(LengthUnit::Meters).value(), 1852.0);
        assert_eq!(Length::km(2.0), Length::m(2000.0));
    }

    #[test]
    fn humanize() {
        assert_eq!(Length::m(850.4).humanize().to_string(), "850 m");
        assert_eq!(Length::m(111_195.08).humanize().to_string(), "111.2 km");
        assert_eq!(Length::mi(2.0).humanize().unit(), LengthUnit::Kilometers);
    }
}
