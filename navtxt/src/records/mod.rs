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

use std::str::FromStr;

use crate::Error;

mod airport;
mod procedure;
mod runway;

pub use airport::Airport;
pub use procedure::{ArcLeg, FixLeg, ProcedureHeader};
pub use runway::Runway;

/// The record kind derived from a line's type tag.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RecordKind {
    /// An `A` record with the airport's reference point.
    Airport,
    /// An `R` record with one runway end.
    Runway,
    /// A `SID` header starting a departure procedure.
    Sid,
    /// A `STAR` header starting an arrival procedure.
    Star,
    /// An `AF` leg following a DME or VOR arc.
    ArcLeg,
    /// A `VA`, `DF`, `TF` or `CF` leg towards a fix.
    FixLeg,
    /// An `END`, `APPTR` or `FINAL` record ending arrival leg scanning.
    Terminator,
    /// An empty line.
    Blank,
    /// Any other record; skipped by all consumers of this crate.
    Other,
}

impl RecordKind {
    /// Classifies a line by its first comma-delimited field.
    ///
    /// Tags are matched verbatim except for the arrival terminators, which
    /// the upstream format writes in varying case.
    pub fn of(line: &str) -> Self {
        if line.trim().is_empty() {
            return Self::Blank;
        }

        let tag = line.split(',').next().unwrap_or_default();

        match tag {
            "A" => Self::Airport,
            "R" => Self::Runway,
            "SID" => Self::Sid,
            "STAR" => Self::Star,
            "AF" => Self::ArcLeg,
            "VA" | "DF" | "TF" | "CF" => Self::FixLeg,
            _ => {
                let tag = tag.trim();
                if ["STAR", "END", "APPTR", "FINAL"]
                    .iter()
                    .any(|t| tag.eq_ignore_ascii_case(t))
                {
                    Self::Terminator
                } else {
                    Self::Other
                }
            }
        }
    }
}

/// Iterator over the classified records of one flat file.
///
/// # Examples
///
/// ```
/// # use navtxt::records::{Airport, RecordKind, Records};
/// # use navtxt::Error;
/// #
/// # fn parse_records(data: &str) -> Result<(), Error> {
/// for (kind, line) in Records::new(data) {
///     match kind {
///         RecordKind::Airport => {
///             let arpt = Airport::try_from(line)?;
///             // now you can read the airport's fields or convert it
///             // to some other type
///         }
///         _ => {}
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Records<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> Records<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            lines: data.lines(),
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (RecordKind, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some((RecordKind::of(line), line))
    }
}

/// Returns the comma-delimited field at `index`.
pub(crate) fn field<'a>(
    fields: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, Error> {
    fields
        .get(index)
        .copied()
        .ok_or(Error::MissingField { field: name, index })
}

/// Parses the field at `index` as a number.
pub(crate) fn numeric<T: FromStr>(
    fields: &[&str],
    index: usize,
    name: &'static str,
) -> Result<T, Error> {
    let value = field(fields, index, name)?;

    value.trim().parse().map_err(|_| Error::NotANumber {
        field: name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_tags() {
        assert_eq!(RecordKind::of("A,KJFK,JOHN F KENNEDY INTL,40.6,-73.8"), RecordKind::Airport);
        assert_eq!(RecordKind::of("R,04L,044"), RecordKind::Runway);
        assert_eq!(RecordKind::of("SID,DEEZZ5,04L"), RecordKind::Sid);
        assert_eq!(RecordKind::of("STAR,CAMRN4,ALL"), RecordKind::Star);
        assert_eq!(RecordKind::of("AF,0,0,0,CRI,0,185,11,005"), RecordKind::ArcLeg);
        assert_eq!(RecordKind::of("DF,CANDR,0,0"), RecordKind::FixLeg);
        assert_eq!(RecordKind::of("X,UNKNOWN"), RecordKind::Other);
        assert_eq!(RecordKind::of(""), RecordKind::Blank);
        assert_eq!(RecordKind::of("   "), RecordKind::Blank);
    }

    #[test]
    fn terminators_match_case_insensitively() {
        assert_eq!(RecordKind::of("END"), RecordKind::Terminator);
        assert_eq!(RecordKind::of("EnD,0"), RecordKind::Terminator);
        assert_eq!(RecordKind::of("APPTR,ILS04L"), RecordKind::Terminator);
        assert_eq!(RecordKind::of("Final,04L"), RecordKind::Terminator);
        // the canonical STAR tag starts a procedure instead
        assert_eq!(RecordKind::of("Star,CAMRN4,ALL"), RecordKind::Terminator);
        assert_eq!(RecordKind::of("STAR,CAMRN4,ALL"), RecordKind::Star);
    }
}
