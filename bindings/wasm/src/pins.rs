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
use wasm_bindgen::prelude::*;
use worldview::coord;
use worldview::prelude::*;

use crate::to_js;

/// A line between two pins as handed to the line renderer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPinDistance {
    from_pin: usize,
    to_pin: usize,
    /// Distance in meters.
    distance: f64,
    bearing: f64,
    label: String,
}

impl From<PinDistance> for JsPinDistance {
    fn from(d: PinDistance) -> Self {
        Self {
            from_pin: d.from_pin,
            to_pin: d.to_pin,
            distance: d.distance.to_si(),
            bearing: d.bearing.value(),
            label: d.label(),
        }
    }
}

#[derive(Deserialize)]
struct JsPin {
    lat: f64,
    lng: f64,
}

fn distances_to_js(distances: Vec<PinDistance>) -> Result<JsValue, JsError> {
    let distances: Vec<JsPinDistance> = distances.into_iter().map(Into::into).collect();
    to_js(&distances)
}

/// Returns the lines between all pairs of `{lat, lng}` pins.
#[wasm_bindgen(js_name = pairwiseDistances)]
pub fn js_pairwise_distances(pins: JsValue) -> Result<JsValue, JsError> {
    let pins: Vec<JsPin> = serde_wasm_bindgen::from_value(pins)?;
    let pins: Vec<Coordinate> = pins.iter().map(|p| coord!(p.lat, p.lng)).collect();

    distances_to_js(pairwise_distances(&pins))
}

#[wasm_bindgen(js_name = Pins)]
#[derive(Default)]
pub struct JsPins {
    inner: Pins,
}

#[wasm_bindgen(js_class = Pins)]
impl JsPins {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a pin and returns its index.
    pub fn add(&mut self, lat: f64, lng: f64) -> usize {
        self.inner.add(coord!(lat, lng))
    }

    pub fn remove(&mut self, index: usize) -> Result<(), JsError> {
        self.inner.remove(index)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    pub fn distances(&self) -> Result<JsValue, JsError> {
        distances_to_js(self.inner.distances())
    }
}
