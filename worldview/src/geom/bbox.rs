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

use super::Coordinate;

/// Axis aligned box in geographic space.
///
/// No projection is applied: the bounds are the plain minimum and maximum of
/// the latitudes and longitudes the box was computed from.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Creates the box spanned by two corners in any order.
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        Self {
            min_lat: a.latitude.min(b.latitude),
            min_lng: a.longitude.min(b.longitude),
            max_lat: a.latitude.max(b.latitude),
            max_lng: a.longitude.max(b.longitude),
        }
    }

    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.min_lat, self.min_lng)
    }

    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(self.max_lat, self.max_lng)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&c.latitude)
            && (self.min_lng..=self.max_lng).contains(&c.longitude)
    }

    /// Returns the smallest box containing this and the `other` box.
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min_lat: self.min_lat.min(other.min_lat),
            min_lng: self.min_lng.min(other.min_lng),
            max_lat: self.max_lat.max(other.max_lat),
            max_lng: self.max_lng.max(other.max_lng),
        }
    }

    /// Returns the box in GeoJSON `bbox` order `[west, south, east, north]`.
    pub fn to_geojson_bbox(&self) -> ::geojson::Bbox {
        vec![self.min_lng, self.min_lat, self.max_lng, self.max_lat]
    }
}

impl From<geo::Rect<f64>> for BoundingBox {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::new(rect.min().into(), rect.max().into())
    }
}
