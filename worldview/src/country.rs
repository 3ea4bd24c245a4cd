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

//! Country records as delivered by the data source.

use geojson::{Feature, GeoJson, Geometry};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::error::Error;

/// A row of the countries table.
///
/// The record is read-only input. Its geometry is kept as raw JSON since the
/// data source delivers it either as a bare geometry or wrapped into a
/// feature; see [`CountryRecord::resolve_geometry`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Lowercase ISO 3166-1 alpha-2 code.
    pub id: String,
    pub name: String,
    /// Number of inhabitants. A missing or unusable value reads as 0.
    #[serde(default, deserialize_with = "deserialize_population")]
    pub population: u64,
    #[serde(default)]
    pub area_km2: Option<f64>,
    #[serde(default)]
    pub gdp_per_capita: Option<f64>,
    /// Density supplied by the data source, used when no area is known.
    #[serde(default)]
    pub population_density: Option<f64>,
    #[serde(default)]
    pub geometry: Option<JsonValue>,
}

impl CountryRecord {
    /// Returns the bare geometry of the country.
    ///
    /// A geometry wrapped into a GeoJSON feature is unwrapped. A record
    /// without geometry, or with a feature that has none, fails with
    /// [`Error::MissingGeometry`]. Anything that isn't valid GeoJSON, or is a
    /// whole feature collection, fails with [`Error::InvalidGeometry`].
    pub fn resolve_geometry(&self) -> Result<Geometry, Error> {
        let value = match &self.geometry {
            None | Some(JsonValue::Null) => return Err(self.missing_geometry()),
            Some(value) => value.clone(),
        };

        let geojson =
            GeoJson::from_json_value(value).map_err(|e| self.invalid_geometry(e.to_string()))?;

        match geojson {
            GeoJson::Geometry(geometry) => Ok(geometry),
            GeoJson::Feature(Feature {
                geometry: Some(geometry),
                ..
            }) => Ok(geometry),
            GeoJson::Feature(_) => Err(self.missing_geometry()),
            GeoJson::FeatureCollection(_) => {
                Err(self.invalid_geometry("expected a geometry but found a feature collection"))
            }
        }
    }

    /// Returns the inhabitants per km².
    ///
    /// With a positive area the density is computed. Otherwise the density
    /// supplied with the record is used, or 0 if there is none.
    pub fn population_density(&self) -> f64 {
        match self.area_km2 {
            Some(area) if area > 0.0 => self.population as f64 / area,
            _ => self.population_density.unwrap_or(0.0),
        }
    }

    /// Returns the upper-case country code.
    pub fn code(&self) -> String {
        self.id.to_uppercase()
    }

    fn missing_geometry(&self) -> Error {
        Error::MissingGeometry {
            id: self.id.clone(),
        }
    }

    fn invalid_geometry(&self, reason: impl Into<String>) -> Error {
        Error::InvalidGeometry {
            id: self.id.clone(),
            reason: reason.into(),
        }
    }
}

/// Reads the population of a row without failing the whole table.
///
/// Numeric columns may deliver the count as float, e.g. `83200000.0`, and a
/// row may have no population at all. Null, negative and non-finite values
/// read as 0; fractions are rounded.
fn deserialize_population<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(0),
        Some(population) if population.is_finite() && population >= 0.0 => {
            Ok(population.round() as u64)
        }
        Some(population) => {
            warn!("ignoring invalid population {}", population);
            Ok(0)
        }
    }
}

/// Parses the JSON array of country rows returned by the data source.
pub fn parse_countries(s: &str) -> Result<Vec<CountryRecord>, Error> {
    Ok(serde_json::from_str(s)?)
}

/// Returns the country with the `id`, ignoring the case of the id.
///
/// Used to join a feature the user hovered or clicked back to its record.
pub fn find_country<'a>(countries: &'a [CountryRecord], id: &str) -> Option<&'a CountryRecord> {
    countries.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country(geometry: Option<JsonValue>) -> CountryRecord {
        CountryRecord {
            id: "ch".to_string(),
            name: "Switzerland".to_string(),
            population: 1000,
            area_km2: Some(10.0),
            gdp_per_capita: None,
            population_density: None,
            geometry,
        }
    }

    #[test]
    fn unwraps_feature() {
        let geometry = json!({"type": "Point", "coordinates": [8.2, 46.8]});
        let wrapped = json!({"type": "Feature", "properties": null, "geometry": geometry});

        assert_eq!(
            country(Some(wrapped)).resolve_geometry(),
            country(Some(geometry)).resolve_geometry()
        );
    }

    #[test]
    fn missing_geometry() {
        assert_eq!(
            country(None).resolve_geometry(),
            Err(Error::MissingGeometry { id: "ch".into() })
        );
        assert_eq!(
            country(Some(JsonValue::Null)).resolve_geometry(),
            Err(Error::MissingGeometry { id: "ch".into() })
        );

        let empty_feature = json!({"type": "Feature", "properties": null, "geometry": null});
        assert!(matches!(
            country(Some(empty_feature)).resolve_geometry(),
            Err(Error::MissingGeometry { .. })
        ));
    }

    #[test]
    fn invalid_geometry() {
        let not_geojson = json!({"kind": "Polygon"});
        assert!(matches!(
            country(Some(not_geojson)).resolve_geometry(),
            Err(Error::InvalidGeometry { .. })
        ));

        let collection = json!({"type": "FeatureCollection", "features": []});
        assert!(matches!(
            country(Some(collection)).resolve_geometry(),
            Err(Error::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn density() {
        let mut ch = country(None);
        assert_eq!(ch.population_density(), 100.0);

        ch.area_km2 = Some(0.0);
        assert_eq!(ch.population_density(), 0.0);

        ch.area_km2 = None;
        ch.population_density = Some(42.5);
        assert_eq!(ch.population_density(), 42.5);
    }

    #[test]
    fn parse_rows() {
        let rows = r#"[
            {"id": "de", "name": "Germany", "population": 83200000, "area_km2": 357588.0,
             "gdp_per_capita": 48717.0, "geometry": null},
            {"id": "va", "name": "Vatican City", "population": 800}
        ]"#;
        let countries = parse_countries(rows).unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[1].area_km2, None);
        assert_eq!(find_country(&countries, "DE").map(|c| c.name.as_str()), Some("Germany"));
        assert!(find_country(&countries, "fr").is_none());
    }

    #[test]
    fn parse_rows_with_unusual_population() {
        let rows = r#"[
            {"id": "de", "name": "Germany", "population": 83200000.0},
            {"id": "aq", "name": "Antarctica", "population": null},
            {"id": "fr", "name": "France", "population": 68000000},
            {"id": "xx", "name": "Nowhere", "population": -5}
        ]"#;
        let countries = parse_countries(rows).unwrap();
        let populations: Vec<u64> = countries.iter().map(|c| c.population).collect();

        assert_eq!(populations, vec![83_200_000, 0, 68_000_000, 0]);
    }

    #[test]
    fn parse_rows_rejects_garbage() {
        assert!(matches!(
            parse_countries("{\"id\": 1}"),
            Err(Error::InvalidRecords(_))
        ));
    }
}
