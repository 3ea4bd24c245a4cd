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

use geojson::feature::Id;
use geojson::{Feature, Geometry, JsonObject, JsonValue};

use crate::country::CountryRecord;

impl CountryRecord {
    /// Returns the country as a feature with the given geometry.
    ///
    /// The feature id and the `id` property are the record's id so that map
    /// events can be joined back to the record. A missing GDP is reported as
    /// 0, a missing area as `null`.
    pub fn to_feature(&self, geometry: Geometry) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("id".to_string(), JsonValue::from(self.id.as_str()));
        properties.insert("name".to_string(), JsonValue::from(self.name.as_str()));
        properties.insert("code".to_string(), JsonValue::from(self.code()));
        properties.insert("population".to_string(), JsonValue::from(self.population));
        properties.insert("area_km2".to_string(), JsonValue::from(self.area_km2));
        properties.insert(
            "gdp_per_capita".to_string(),
            JsonValue::from(self.gdp_per_capita.unwrap_or(0.0)),
        );
        properties.insert(
            "population_density".to_string(),
            JsonValue::from(self.population_density()),
        );

        Feature {
            bbox: None,
            geometry: Some(geometry),
            id: Some(Id::String(self.id.clone())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}
