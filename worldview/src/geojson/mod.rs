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

//! GeoJSON output for the map renderer.

use std::fmt::{Display, Formatter};

use geojson::{FeatureCollection, Geometry, Value};
use log::{debug, warn};

use crate::country::CountryRecord;
use crate::error::Error;
use crate::geom::BoundingBox;

mod country;
mod geom;

pub use geom::geometry_bounds;

/// A country that was rendered with an empty geometry since its own could
/// not be resolved.
#[derive(Clone, PartialEq, Debug)]
pub struct GeometryFallback {
    /// Index of the record in the input.
    pub index: usize,
    pub id: String,
    pub error: Error,
}

impl Display for GeometryFallback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "record {} ({}): {}", self.index, self.id, self.error)
    }
}

/// Result of turning country records into a feature collection.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Transform {
    /// The collection, `None` if there were no records.
    pub collection: Option<FeatureCollection>,
    /// Records that fell back to an empty geometry.
    pub fallbacks: Vec<GeometryFallback>,
}

/// Returns the empty polygon substituted for unresolvable geometries.
pub fn empty_geometry() -> Geometry {
    Geometry::new(Value::Polygon(Vec::new()))
}

/// Turns the countries into a feature collection and reports the records
/// whose geometry had to be replaced.
///
/// Every record yields exactly one feature, in input order. A record whose
/// geometry can't be resolved gets an [empty geometry](empty_geometry)
/// instead, so a single broken record never prevents the others from being
/// rendered.
pub fn transform(countries: &[CountryRecord]) -> Transform {
    if countries.is_empty() {
        debug!("no countries to transform");
        return Transform::default();
    }

    let mut features = Vec::with_capacity(countries.len());
    let mut fallbacks = Vec::new();
    let mut bbox: Option<BoundingBox> = None;

    for (index, country) in countries.iter().enumerate() {
        let geometry = match country.resolve_geometry() {
            Ok(geometry) => {
                if let Ok(b) = geometry_bounds(&country.id, &geometry) {
                    bbox = Some(bbox.map_or(b, |acc| acc.union(&b)));
                }
                geometry
            }
            Err(error) => {
                warn!(
                    "using empty geometry for country {} ({}): {}",
                    country.id, country.name, error
                );
                fallbacks.push(GeometryFallback {
                    index,
                    id: country.id.clone(),
                    error,
                });
                empty_geometry()
            }
        };

        features.push(country.to_feature(geometry));
    }

    debug!(
        "transformed {} countries, {} without geometry",
        features.len(),
        fallbacks.len()
    );

    Transform {
        collection: Some(FeatureCollection {
            bbox: bbox.map(|b| b.to_geojson_bbox()),
            features,
            foreign_members: None,
        }),
        fallbacks,
    }
}

/// Returns the countries as feature collection or `None` if there are none.
///
/// See [`transform`] for how unresolvable geometries are handled.
pub fn to_feature_collection(countries: &[CountryRecord]) -> Option<FeatureCollection> {
    transform(countries).collection
}

/// Returns the bounds the map should fit to show the `country`.
///
/// Fails if the geometry can't be resolved or has no coordinates; the camera
/// should stay where it is in that case.
pub fn fit_bounds(country: &CountryRecord) -> Result<BoundingBox, Error> {
    let geometry = country.resolve_geometry()?;
    geometry_bounds(&country.id, &geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country(id: &str, geometry: Option<serde_json::Value>) -> CountryRecord {
        CountryRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            population: 1000,
            area_km2: Some(10.0),
            gdp_per_capita: Some(1.5),
            population_density: None,
            geometry,
        }
    }

    fn square(lat: f64, lng: f64) -> serde_json::Value {
        json!({
            "type": "Polygon",
            "coordinates": [[
                [lng, lat], [lng + 1.0, lat], [lng + 1.0, lat + 1.0], [lng, lat + 1.0], [lng, lat]
            ]]
        })
    }

    #[test]
    fn empty_input() {
        let t = transform(&[]);
        assert!(t.collection.is_none());
        assert!(t.fallbacks.is_empty());
    }

    #[test]
    fn broken_record_does_not_abort() {
        let countries = [
            country("aa", Some(square(0.0, 0.0))),
            country("bb", Some(json!("not a geometry"))),
            country("cc", Some(square(10.0, 20.0))),
        ];
        let t = transform(&countries);
        let fc = t.collection.unwrap();

        assert_eq!(fc.features.len(), 3);
        assert_eq!(fc.features[1].geometry, Some(empty_geometry()));
        assert_eq!(t.fallbacks.len(), 1);
        assert_eq!(t.fallbacks[0].index, 1);
        assert_eq!(t.fallbacks[0].id, "bb");

        // collection bbox covers the resolvable countries only
        assert_eq!(fc.bbox, Some(vec![0.0, 0.0, 21.0, 11.0]));
    }

    #[test]
    fn fit_bounds_of_multipolygon() {
        let geometry = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[-5.5, 50.0], [1.5, 50.0], [1.5, 58.5], [-5.5, 50.0]]],
                [[[-8.0, 54.0], [-6.0, 54.0], [-6.0, 55.25], [-8.0, 54.0]]]
            ]
        });
        let bounds = fit_bounds(&country("gb", Some(geometry))).unwrap();

        assert_eq!(bounds.min_lat, 50.0);
        assert_eq!(bounds.max_lat, 58.5);
        assert_eq!(bounds.min_lng, -8.0);
        assert_eq!(bounds.max_lng, 1.5);
    }

    #[test]
    fn fit_bounds_fails_without_coordinates() {
        assert!(matches!(
            fit_bounds(&country("xx", None)),
            Err(Error::MissingGeometry { .. })
        ));
        assert!(matches!(
            fit_bounds(&country("xx", Some(json!({"type": "Polygon", "coordinates": []})))),
            Err(Error::EmptyGeometry { .. })
        ));
    }
}
