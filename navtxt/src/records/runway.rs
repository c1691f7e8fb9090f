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
use crate::fields::MagneticHeading;
use crate::Error;

/// An `R` record with one runway end.
///
/// The designator sits at field 1 and the magnetic heading at field 2; the
/// threshold coordinates in decimal degrees follow at fields 8 and 9.
///
/// The designator is kept verbatim. Not every value found in the wild parses
/// into a [`Designator`] (helipads are designated `N` or `S` for example),
/// and whether that matters depends on what the record is used for.
///
/// [`Designator`]: crate::fields::Designator
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Runway<'a> {
    pub designator: &'a str,
    pub heading: MagneticHeading,
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> TryFrom<&'a str> for Runway<'a> {
    type Error = Error;

    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = line.split(',').collect();

        Ok(Self {
            designator: field(&fields, 1, "runway designator")?.trim(),
            heading: field(&fields, 2, "heading")?.parse()?,
            latitude: numeric(&fields, 8, "latitude")?,
            longitude: numeric(&fields, 9, "longitude")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNWAY: &str = "R,04L,044,12079,144,550,0.0,0.0,40.62021,-73.78608,13";

    #[test]
    fn runway_record() {
        let rwy = Runway::try_from(RUNWAY).expect("runway should parse");

        assert_eq!(rwy.designator, "04L");
        assert_eq!(rwy.heading, MagneticHeading::new(44));
        assert_eq!(rwy.latitude, 40.62021);
        assert_eq!(rwy.longitude, -73.78608);
    }

    #[test]
    fn fails_on_bad_heading() {
        let line = "R,04L,XXX,12079,144,550,0.0,0.0,40.62021,-73.78608,13";

        assert_eq!(
            Runway::try_from(line),
            Err(Error::NotANumber {
                field: "heading",
                value: "XXX".to_string()
            })
        );
    }
}
