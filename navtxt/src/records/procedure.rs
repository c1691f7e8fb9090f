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

/// A `SID` or `STAR` record starting a procedure.
///
/// The procedure name sits at field 1; field 2 names the runway the
/// procedure applies to, or `ALL` for arrivals serving every runway.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ProcedureHeader<'a> {
    pub name: &'a str,
    pub runway: &'a str,
}

impl<'a> TryFrom<&'a str> for ProcedureHeader<'a> {
    type Error = Error;

    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = line.split(',').collect();

        Ok(Self {
            name: field(&fields, 1, "procedure name")?.trim(),
            runway: field(&fields, 2, "runway")?.trim(),
        })
    }
}

/// An `AF` leg following a DME or VOR arc.
///
/// The radials in degrees and the radius in nautical miles sit at fixed
/// fields: the end radial at 6, the radius at 7 and the start radial at 8.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ArcLeg {
    pub start_radial: f64,
    pub end_radial: f64,
    pub radius: f64,
}

impl TryFrom<&str> for ArcLeg {
    type Error = Error;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = line.split(',').collect();

        Ok(Self {
            start_radial: numeric(&fields, 8, "start radial")?,
            end_radial: numeric(&fields, 6, "end radial")?,
            radius: numeric(&fields, 7, "arc radius")?,
        })
    }
}

/// A leg towards a fix.
///
/// Written as `VA`, `DF`, `TF` or `CF` records in departures; in arrivals
/// every record that is not an arc is read as a fix leg.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FixLeg<'a> {
    ident: &'a str,
}

impl<'a> FixLeg<'a> {
    /// The fix the leg navigates to.
    ///
    /// Returns `None` for the `0` sentinel the upstream format uses on legs
    /// without a fix, like an altitude-terminated climb.
    pub fn fix(&self) -> Option<&'a str> {
        (self.ident != "0").then_some(self.ident)
    }
}

impl<'a> TryFrom<&'a str> for FixLeg<'a> {
    type Error = Error;

    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = line.split(',').collect();

        Ok(Self {
            ident: field(&fields, 1, "fix ident")?.trim(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procedure_header() {
        let header =
            ProcedureHeader::try_from("SID,DEEZZ5,04L,5").expect("header should parse");

        assert_eq!(header.name, "DEEZZ5");
        assert_eq!(header.runway, "04L");
    }

    #[test]
    fn arc_leg_field_order() {
        let leg = ArcLeg::try_from("AF,0,0,0,CRI,0,185,11,036").expect("leg should parse");

        assert_eq!(leg.start_radial, 36.0);
        assert_eq!(leg.end_radial, 185.0);
        assert_eq!(leg.radius, 11.0);
    }

    #[test]
    fn fix_leg() {
        let leg = FixLeg::try_from("DF,CANDR,0,0").expect("leg should parse");
        assert_eq!(leg.fix(), Some("CANDR"));
    }

    #[test]
    fn no_fix_sentinel() {
        let leg = FixLeg::try_from("VA,0,0,0").expect("leg should parse");
        assert_eq!(leg.fix(), None);
    }

    #[test]
    fn fix_leg_needs_two_fields() {
        assert!(FixLeg::try_from("DF").is_err());
    }
}
