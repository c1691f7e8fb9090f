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

use navtxt::fields::MagneticHeading;
use navtxt::records;

use crate::geom::Coordinate;

/// One runway end with its threshold position.
///
/// The designator is kept as written in the database and parsed into a
/// [`Designator`] only where pairing needs it. A value that does not parse
/// then degrades the single runway built from it instead of the whole
/// airport.
///
/// [`Designator`]: navtxt::fields::Designator
#[derive(Clone, PartialEq, Debug)]
pub struct RunwayEnd {
    pub(crate) designator: String,
    pub(crate) heading: MagneticHeading,
    pub(crate) threshold: Coordinate,
}

impl RunwayEnd {
    pub fn designator(&self) -> &str {
        &self.designator
    }

    pub fn heading(&self) -> MagneticHeading {
        self.heading
    }

    pub fn threshold(&self) -> Coordinate {
        self.threshold
    }

    /// The suffix-stripped base designator.
    pub(crate) fn base(&self) -> &str {
        self.designator.trim_end_matches(['L', 'R', 'C'])
    }
}

impl From<records::Runway<'_>> for RunwayEnd {
    fn from(rwy: records::Runway) -> Self {
        Self {
            designator: rwy.designator.to_string(),
            heading: rwy.heading,
            threshold: Coordinate::new(rwy.latitude, rwy.longitude),
        }
    }
}
