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

//! Pins dropped on the map and the lines connecting them.
//!
//! Every pair of pins is connected by a line annotated with the great-circle
//! distance and the initial bearing between them. Pin counts are small, so
//! the annotations are recomputed in full whenever a pin is added or removed.

use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geom::Coordinate;
use crate::measurements::{Angle, Length};

/// Distance and bearing between two pins of a pin list.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PinDistance {
    /// Index of the pin the line starts at.
    pub from_pin: usize,
    /// Index of the pin the line ends at. Always greater than `from_pin`.
    pub to_pin: usize,
    /// Great-circle distance in meters.
    pub distance: Length,
    /// Initial bearing at `from_pin` toward `to_pin`.
    pub bearing: Angle,
}

impl PinDistance {
    fn between(pins: &[Coordinate], from_pin: usize, to_pin: usize) -> Self {
        let (from, to) = (&pins[from_pin], &pins[to_pin]);

        Self {
            from_pin,
            to_pin,
            distance: from.dist(to),
            bearing: from.bearing(to),
        }
    }

    /// Returns the text the line between both pins is annotated with.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Display for PinDistance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} · {}", self.distance.humanize(), self.bearing)
    }
}

/// Returns the distance and bearing for every pair of pins.
///
/// The pairs are ordered by the index of their first pin and then by the
/// index of their second pin, i.e. `(0, 1), (0, 2), …, (1, 2), …`. Less than
/// two pins yield no pair.
pub fn pairwise_distances(pins: &[Coordinate]) -> Vec<PinDistance> {
    let n = pins.len();
    let mut distances = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for from_pin in 0..n {
        for to_pin in (from_pin + 1)..n {
            distances.push(PinDistance::between(pins, from_pin, to_pin));
        }
    }

    distances
}

/// An ordered list of pins.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Pins {
    pins: Vec<Coordinate>,
}

impl Pins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pin and returns its index.
    pub fn add(&mut self, pin: Coordinate) -> usize {
        self.pins.push(pin);
        debug!("pin {} placed at {}", self.pins.len() - 1, pin);
        self.pins.len() - 1
    }

    /// Removes the pin at `index`, shifting all following pins down by one.
    pub fn remove(&mut self, index: usize) -> Result<Coordinate, Error> {
        if index >= self.pins.len() {
            return Err(Error::PinIndexOutOfRange {
                index,
                len: self.pins.len(),
            });
        }

        let pin = self.pins.remove(index);
        debug!("pin {} at {} removed", index, pin);
        Ok(pin)
    }

    pub fn clear(&mut self) {
        self.pins.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.pins.get(index)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.pins.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.pins
    }

    /// Returns the distances between all pairs of pins.
    pub fn distances(&self) -> Vec<PinDistance> {
        pairwise_distances(&self.pins)
    }
}

impl From<Vec<Coordinate>> for Pins {
    fn from(pins: Vec<Coordinate>) -> Self {
        Self { pins }
    }
}

impl FromIterator<Coordinate> for Pins {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            pins: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Pins {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.pins.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_in_index_order() {
        let pins = [
            coord!(0.0, 0.0),
            coord!(0.0, 1.0),
            coord!(1.0, 0.0),
            coord!(1.0, 1.0),
        ];
        let pairs: Vec<(usize, usize)> = pairwise_distances(&pins)
            .iter()
            .map(|d| (d.from_pin, d.to_pin))
            .collect();

        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn less_than_two_pins() {
        assert!(pairwise_distances(&[]).is_empty());
        assert!(pairwise_distances(&[coord!(0.0, 0.0)]).is_empty());
    }

    #[test]
    fn label() {
        let d = pairwise_distances(&[coord!(0.0, 0.0), coord!(0.0, 1.0)]);
        assert_eq!(d[0].label(), "111.2 km · 090°");
    }

    #[test]
    fn remove_recomputes() {
        let mut pins: Pins = [coord!(0.0, 0.0), coord!(0.0, 1.0), coord!(1.0, 0.0)]
            .into_iter()
            .collect();
        assert_eq!(pins.distances().len(), 3);

        assert_eq!(pins.remove(1), Ok(coord!(0.0, 1.0)));
        let distances = pins.distances();
        assert_eq!(distances.len(), 1);
        assert_eq!(distances[0].bearing.value(), 0.0);
    }

    #[test]
    fn remove_out_of_range() {
        let mut pins = Pins::new();
        pins.add(coord!(0.0, 0.0));

        assert_eq!(
            pins.remove(3),
            Err(Error::PinIndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(pins.len(), 1);
    }
}
