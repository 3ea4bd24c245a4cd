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

//! Camera placement for fitting a map to bounds.
//!
//! The viewport itself belongs to the renderer. What it needs from the core
//! are the exact bounds and the settings to fit them with, which are kept in
//! [`FitBoundsOptions`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geom::{BoundingBox, Coordinate};

/// Latitude limit of the Web Mercator projection.
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// Settings used when the map flies to a country.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FitBoundsOptions {
    /// Margin in pixels kept free on every side of the bounds.
    pub padding: f64,
    pub min_zoom: f64,
    /// Upper zoom limit so small countries are not zoomed in too far.
    pub max_zoom: f64,
    /// Edge length of a map tile in pixels.
    pub tile_size: f64,
}

impl Default for FitBoundsOptions {
    fn default() -> Self {
        Self {
            padding: 20.0,
            min_zoom: 0.0,
            max_zoom: 5.0,
            tile_size: 256.0,
        }
    }
}

/// Where the camera should look at and how far it should zoom in.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CameraTarget {
    pub center: Coordinate,
    pub zoom: f64,
}

impl FitBoundsOptions {
    /// Returns the largest integral zoom at which the bounds fit into a
    /// viewport of `width` × `height` pixels.
    ///
    /// The zoom is limited to `[min_zoom, max_zoom]`. If the bounds don't fit
    /// at any zoom, e.g. since the viewport is smaller than the padding, the
    /// minimum zoom is returned.
    pub fn zoom_for(&self, bounds: &BoundingBox, width: f64, height: f64) -> f64 {
        let available_width = width - 2.0 * self.padding;
        let available_height = height - 2.0 * self.padding;

        let (x_min, y_max) = project(&bounds.south_west());
        let (x_max, y_min) = project(&bounds.north_east());
        let (dx, dy) = (x_max - x_min, y_max - y_min);

        if available_width <= 0.0 || available_height <= 0.0 {
            return self.min_zoom;
        }

        // scale of the world size against the tile size at which the bounds
        // just fit; infinite along an axis without extent
        let scale = (available_width / dx).min(available_height / dy) / self.tile_size;
        let zoom = scale.log2().floor().min(self.max_zoom.floor());

        if zoom < self.min_zoom.ceil() {
            self.min_zoom
        } else {
            zoom
        }
    }

    /// Returns the camera target that frames the bounds.
    pub fn camera_for(&self, bounds: &BoundingBox, width: f64, height: f64) -> CameraTarget {
        CameraTarget {
            center: bounds.center(),
            zoom: self.zoom_for(bounds, width, height),
        }
    }
}

/// Projects the coordinate into Web Mercator world space with both axes in
/// `[0, 1]` and y growing southward.
fn project(c: &Coordinate) -> (f64, f64) {
    let lat = c
        .latitude
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    let x = (c.longitude + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;

    (x, y)
}
