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

use geo::BoundingRect;
use geojson::Geometry;

use crate::error::Error;
use crate::geom::BoundingBox;

/// Returns the bounds over every position of the geometry.
///
/// The `id` of the country the geometry belongs to is only used to report
/// errors.
pub fn geometry_bounds(id: &str, geometry: &Geometry) -> Result<BoundingBox, Error> {
    let value = geometry.value.clone();
    let geometry = geo::Geometry::<f64>::try_from(value).map_err(|e| Error::InvalidGeometry {
        id: id.to_string(),
        reason: e.to_string(),
    })?;

    geometry
        .bounding_rect()
        .map(BoundingBox::from)
        .ok_or_else(|| Error::EmptyGeometry { id: id.to_string() })
}
