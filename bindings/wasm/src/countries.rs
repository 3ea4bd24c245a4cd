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

use log::warn;
use wasm_bindgen::prelude::*;
use worldview::prelude::*;

use crate::to_js;

/// Returns the countries as GeoJSON feature collection or `null` if there are
/// no countries.
#[wasm_bindgen(js_name = toFeatureCollection)]
pub fn js_to_feature_collection(countries: JsValue) -> Result<JsValue, JsError> {
    let countries: Vec<CountryRecord> = serde_wasm_bindgen::from_value(countries)?;

    match to_feature_collection(&countries) {
        Some(collection) => to_js(&collection),
        None => Ok(JsValue::NULL),
    }
}

/// Returns the bounds to fly to for the country or `null` if the country has
/// no usable geometry.
#[wasm_bindgen(js_name = fitBounds)]
pub fn js_fit_bounds(country: JsValue) -> Result<JsValue, JsError> {
    let country: CountryRecord = serde_wasm_bindgen::from_value(country)?;

    match fit_bounds(&country) {
        Ok(bounds) => to_js(&bounds),
        Err(e) => {
            warn!("can't fit map to country {}: {}", country.id, e);
            Ok(JsValue::NULL)
        }
    }
}

/// Returns center and zoom to frame the bounds in a viewport of the given
/// size. Options not given fall back to a padding of 20 px and a maximum
/// zoom of 5.
#[wasm_bindgen(js_name = cameraFor)]
pub fn js_camera_for(
    bounds: JsValue,
    width: f64,
    height: f64,
    options: JsValue,
) -> Result<JsValue, JsError> {
    let bounds: BoundingBox = serde_wasm_bindgen::from_value(bounds)?;
    let options: FitBoundsOptions = if options.is_undefined() || options.is_null() {
        FitBoundsOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };

    to_js(&options.camera_for(&bounds, width, height))
}
