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

use navtxt::records;

use super::RunwayEnd;
use crate::geom::Coordinate;

/// An airport with its runway ends as loaded from the database.
#[derive(Clone, PartialEq, Debug)]
pub struct Airport {
    pub(crate) icao: String,
    pub(crate) coordinate: Coordinate,
    pub(crate) ends: Vec<RunwayEnd>,
    pub(crate) bases: Vec<String>,
}

impl Airport {
    pub fn icao(&self) -> &str {
        &self.icao
    }

    /// The airport's reference point.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// All runway ends in database order.
    pub fn ends(&self) -> &[RunwayEnd] {
        &self.ends
    }

    /// The distinct suffix-stripped runway designators, in the order their
    /// first end appears in the database. One map is generated per base.
    pub fn bases(&self) -> &[String] {
        &self.bases
    }
}

impl From<records::Airport<'_>> for Airport {
    fn from(arpt: records::Airport) -> Self {
        Self {
            icao: arpt.icao.to_string(),
            coordinate: Coordinate::new(arpt.latitude, arpt.longitude),
            ends: Vec::new(),
            bases: Vec::new(),
        }
    }
}
