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

use geo::{Destination, Haversine, Point};

use super::Coordinate;

const METRES_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Circular arc around a centre point on the sphere.
///
/// The arc is traced from the start radial towards the end radial in
/// whichever direction is the shorter; when both directions are equally
/// long, it runs clockwise. Radials are degrees true, the radius is in
/// nautical miles.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Arc {
    center: Coordinate,
    start_radial: f64,
    end_radial: f64,
    radius: f64,
    step: f64,
}

impl Arc {
    /// Creates an arc of `radius` nautical miles around the `center`,
    /// running from the start to the end radial in 10° steps.
    pub fn new(center: Coordinate, start_radial: f64, end_radial: f64, radius: f64) -> Self {
        Self {
            center,
            start_radial,
            end_radial,
            radius,
            step: 10.0,
        }
    }

    /// Overrides the angular step width in degrees.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step.abs();
        self
    }

    /// Returns the points tracing the arc.
    ///
    /// The sequence is a pure function of the arc parameters; calling
    /// `points` again restarts an identical sequence. The end radial is
    /// included once the stepping bearing reaches or passes it, so an arc
    /// with equal radials yields exactly one point.
    pub fn points(&self) -> Points {
        let clockwise = (self.end_radial - self.start_radial).rem_euclid(360.0);
        let counterclockwise = (self.start_radial - self.end_radial).rem_euclid(360.0);

        // ties, including the zero-length arc, go clockwise
        let (step, end) = if clockwise <= counterclockwise {
            (self.step, self.start_radial + clockwise)
        } else {
            (-self.step, self.start_radial - counterclockwise)
        };

        Points {
            center: self.center.into(),
            radius: self.radius * METRES_PER_NAUTICAL_MILE,
            bearing: self.start_radial,
            end,
            step,
        }
    }
}

/// Iterator over the points of an [`Arc`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Points {
    center: Point<f64>,
    radius: f64,
    bearing: f64,
    end: f64,
    step: f64,
}

impl Iterator for Points {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let within = (self.step > 0.0 && self.bearing <= self.end)
            || (self.step < 0.0 && self.bearing >= self.end);

        if !within {
            return None;
        }

        let point = Haversine.destination(self.center, self.bearing, self.radius);
        self.bearing += self.step;

        Some(point.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Coordinate = Coordinate {
        latitude: 40.0,
        longitude: -75.0,
    };

    #[test]
    fn quarter_circle_clockwise() {
        let points: Vec<_> = Arc::new(CENTER, 0.0, 90.0, 20.0).points().collect();

        // one point per 10° from 0 through 90 inclusive
        assert_eq!(points.len(), 10);

        for point in &points {
            let off = (point.dist(&CENTER) - 20.0 * METRES_PER_NAUTICAL_MILE).abs();
            assert!(off < 1e-3, "point {point} is {off} m off the arc");
        }
    }

    #[test]
    fn quarter_circle_counterclockwise() {
        let points: Vec<_> = Arc::new(CENTER, 90.0, 0.0, 20.0).points().collect();
        assert_eq!(points.len(), 10);

        // first point lies east, last north of the centre
        assert!(points[0].longitude > CENTER.longitude);
        assert!(points[9].latitude > CENTER.latitude);
    }

    #[test]
    fn equal_radials_yield_a_single_point() {
        let points: Vec<_> = Arc::new(CENTER, 180.0, 180.0, 5.0).points().collect();

        assert_eq!(points.len(), 1);
        assert!(points[0].latitude < CENTER.latitude);
    }

    #[test]
    fn half_circle_tie_runs_clockwise() {
        let points: Vec<_> = Arc::new(CENTER, 0.0, 180.0, 5.0).points().collect();

        assert_eq!(points.len(), 19);
        // clockwise through east
        assert!(points[9].longitude > CENTER.longitude);
    }

    #[test]
    fn crosses_north_through_zero() {
        let points: Vec<_> = Arc::new(CENTER, 330.0, 30.0, 5.0).points().collect();

        // 330 through 360/0 to 30 clockwise
        assert_eq!(points.len(), 7);
        assert!(points[0].longitude < CENTER.longitude);
        assert!(points[6].longitude > CENTER.longitude);
    }

    #[test]
    fn restarts_identically() {
        let arc = Arc::new(CENTER, 45.0, 225.0, 12.0).with_step(5.0);

        let first: Vec<_> = arc.points().collect();
        let second: Vec<_> = arc.points().collect();

        assert_eq!(first, second);
    }
}
