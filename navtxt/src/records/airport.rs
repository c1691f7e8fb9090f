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

use super::{field, numeric};
use crate::Error;

/// An `A` record with the airport's reference point.
///
/// The ICAO code sits at field 1 and the reference point's coordinates in
/// decimal degrees at fields 3 and 4.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Airport<'a> {
    pub icao: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> TryFrom<&'a str> for Airport<'a> {
    type Error = Error;

    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = line.split(',').collect();

        Ok(Self {
            icao: field(&fields, 1, "airport ident")?.trim(),
            latitude: numeric(&fields, 3, "latitude")?,
            longitude: numeric(&fields, 4, "longitude")?,
        })
    }
}
