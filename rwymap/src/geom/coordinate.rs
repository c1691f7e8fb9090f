// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The rwymap Authors
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

use std::fmt::{Display, Formatter};

use geo::{Distance, Haversine};

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the distance from this point to the `other` in metres.
    ///
    /// Uses the great-circle distance on the mean Earth radius.
    pub fn dist(&self, other: &Coordinate) -> f64 {
        Haversine.distance((*self).into(), (*other).into())
    }
}

/// Fixed-width position as consumed by the map renderer.
///
/// The format is `±DD.DDDD±DDD.DDDD`: both angles are rounded to four
/// decimals, always signed and zero padded to a total width of 8 characters
/// for the latitude and 9 for the longitude. The width is a wire contract;
/// values outside the valid coordinate ranges are formatted as-is and left
/// for the caller to worry about.
impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let lat_sign = if self.latitude >= 0.0 { '+' } else { '-' };
        let lon_sign = if self.longitude >= 0.0 { '+' } else { '-' };

        write!(
            f,
            "{lat_sign}{:07.4}{lon_sign}{:08.4}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fixed_width_position() {
        assert_eq!(Coordinate::new(12.5, -98.25).to_string(), "+12.5000-098.2500");
    }

    #[test]
    fn zero_pads_after_the_sign() {
        assert_eq!(Coordinate::new(5.25, 8.5).to_string(), "+05.2500+008.5000");
        assert_eq!(Coordinate::new(-0.5, -170.0).to_string(), "-00.5000-170.0000");
    }

    #[test]
    fn rounds_to_four_decimals() {
        assert_eq!(Coordinate::new(53.630397, 9.988228).to_string(), "+53.6304+009.9882");
    }

    #[test]
    fn dist() {
        // Hamburg to Luebeck is some 52 km as the crow flies
        let eddh = Coordinate::new(53.63040, 9.98823);
        let edhl = Coordinate::new(53.80543, 10.71951);

        assert_eq!((eddh.dist(&edhl) / 1000.0).round(), 52.0);
    }
}
