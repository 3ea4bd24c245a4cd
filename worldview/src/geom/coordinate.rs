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

use geo::{Bearing, Distance, Haversine};

use crate::measurements::{Angle, Length};

/// Coordinate value on the WGS84 datum.
///
/// A pin placed on the map is a coordinate as well.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the initial bearing from this point toward the `other`.
    ///
    /// The bearing follows the great circle on a sphere and is measured
    /// clockwise from true north within `[0, 360)`.
    pub fn bearing(&self, other: &Coordinate) -> Angle {
        let bearing = Haversine.bearing((*self).into(), (*other).into());
        Angle::t(bearing)
    }

    /// Returns the great-circle distance from this point to the `other`.
    ///
    /// Uses the haversine formula on the mean Earth radius.
    pub fn dist(&self, other: &Coordinate) -> Length {
        let distance_m = Haversine.distance((*self).into(), (*other).into());
        Length::m(distance_m)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}
