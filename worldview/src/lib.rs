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

//! Computational core of the world-data map explorer.
//!
//! The crate turns country records into a GeoJSON [`FeatureCollection`] ready
//! for rendering, computes the bounds a map camera flies to for a single
//! country and annotates the pins a user drops on the map with great-circle
//! distances and initial bearings.
//!
//! Everything in here is pure and synchronous. Fetching the records, drawing
//! the shapes and animating the camera is left to the presentation layer.
//!
//! ```
//! use worldview::coord;
//! use worldview::pins::pairwise_distances;
//!
//! let pins = [coord!(0.0, 0.0), coord!(0.0, 1.0), coord!(1.0, 0.0)];
//! let distances = pairwise_distances(&pins);
//!
//! assert_eq!(distances.len(), 3);
//! ```
//!
//! [`FeatureCollection`]: ::geojson::FeatureCollection

#[macro_use]
mod macros;
mod error;

pub mod country;
pub mod geojson;
pub mod geom;
pub mod measurements;
pub mod pins;
pub mod viewport;

pub use error::Error;

pub mod prelude {
    pub use crate::country::{find_country, parse_countries, CountryRecord};
    pub use crate::geojson::{fit_bounds, to_feature_collection, transform, GeometryFallback};
    pub use crate::geom::{BoundingBox, Coordinate};
    pub use crate::measurements::{Angle, Length, LengthUnit};
    pub use crate::pins::{pairwise_distances, PinDistance, Pins};
    pub use crate::viewport::{CameraTarget, FitBoundsOptions};
    pub use crate::Error;
}
