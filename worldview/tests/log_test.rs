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

//! Checks the warnings logged while building the feature collection.
//!
//! The logger is process wide, so this file holds a single test.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use worldview::prelude::*;

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("worldview")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn record(id: &str, geometry: Option<serde_json::Value>) -> CountryRecord {
    CountryRecord {
        id: id.to_string(),
        name: id.to_uppercase(),
        population: 1000,
        area_km2: Some(10.0),
        gdp_per_capita: None,
        population_density: None,
        geometry,
    }
}

#[test]
fn one_warning_per_fallback() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let square = json!({
        "type": "Polygon",
        "coordinates": [[[0.5, 0.5], [1.5, 0.5], [1.5, 1.5], [0.5, 0.5]]]
    });
    let countries = [
        record("ok", Some(square.clone())),
        record("nogeom", None),
        record("fine", Some(square)),
        record("broken", Some(json!({"type": "Nonsense"}))),
    ];

    let t = transform(&countries);
    assert_eq!(t.fallbacks.len(), 2);

    let warnings: Vec<String> = LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg.clone())
        .collect();

    assert_eq!(warnings.len(), 2, "{warnings:?}");
    assert_eq!(warnings.iter().filter(|w| w.contains("nogeom")).count(), 1);
    assert_eq!(warnings.iter().filter(|w| w.contains("broken")).count(), 1);
    assert!(!warnings.iter().any(|w| w.contains("country ok ") || w.contains("fine")));
}
