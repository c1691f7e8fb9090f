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

//! Terminal procedure extraction.
//!
//! A procedure file holds `SID` and `STAR` header records, each followed by
//! its leg records. The two kinds terminate differently: departure legs run
//! up to the next `SID` header or a blank line, arrival legs up to the next
//! `STAR`, `END`, `APPTR` or `FINAL` record. Within an arrival, every record
//! that is not an arc counts as a fix leg and repeated fixes are dropped;
//! departures keep repeated fixes. Both quirks come with the upstream format
//! and are preserved here.

use log::debug;

use navtxt::fields::Designator;
use navtxt::records::{ArcLeg, FixLeg, ProcedureHeader, RecordKind, Records};

use crate::error::Error;
use crate::geom::{Arc, Coordinate};

/// The kind of a terminal procedure.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ProcedureKind {
    /// Standard Instrument Departure.
    Sid,
    /// Standard Terminal Arrival Route.
    Star,
}

/// One procedure resolved for a runway.
#[derive(Clone, PartialEq, Debug)]
pub struct Procedure {
    kind: ProcedureKind,
    name: String,
    track: Vec<String>,
    fixes: Vec<String>,
}

impl Procedure {
    pub fn kind(&self) -> ProcedureKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The track rendered into the map line: all tokens joined with a slash
    /// and no trailing separator. Arc legs contribute one position token per
    /// arc point, fix legs the fix ident.
    pub fn track(&self) -> String {
        self.track.join("/")
    }

    /// The fixes referenced by the track, in first-seen order.
    pub fn fixes(&self) -> &[String] {
        &self.fixes
    }

    fn new(kind: ProcedureKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            track: Vec::new(),
            fixes: Vec::new(),
        }
    }

    /// Expands an arc leg into one track token per arc point.
    fn push_arc(&mut self, leg: ArcLeg, center: Coordinate) {
        let arc = Arc::new(center, leg.start_radial, leg.end_radial, leg.radius);
        self.track.extend(arc.points().map(|point| point.to_string()));
    }

    fn push_fix(&mut self, fix: &str) {
        self.track.push(fix.to_string());
        self.fixes.push(fix.to_string());
    }
}

/// Extracts all procedures of `kind` that serve the `runway`.
///
/// `source` is the content of the airport's procedure file and `center` the
/// airport reference point around which arc legs are generated. Every
/// matching header yields its own [`Procedure`], so a runway served by three
/// departures gets three separate tracks.
pub fn procedures(
    source: &str,
    center: Coordinate,
    kind: ProcedureKind,
    runway: &Designator,
) -> Result<Vec<Procedure>, Error> {
    let records: Vec<(RecordKind, &str)> = Records::new(source).collect();
    let mut found = Vec::new();

    for (index, (record_kind, line)) in records.iter().enumerate() {
        let matches_kind = match kind {
            ProcedureKind::Sid => *record_kind == RecordKind::Sid,
            ProcedureKind::Star => *record_kind == RecordKind::Star,
        };
        if !matches_kind {
            continue;
        }

        let header = ProcedureHeader::try_from(*line)?;
        if !applies(kind, header.runway, runway) {
            continue;
        }

        let mut procedure = Procedure::new(kind, header.name);
        let legs = &records[index + 1..];
        match kind {
            ProcedureKind::Sid => departure_legs(&mut procedure, legs, center)?,
            ProcedureKind::Star => arrival_legs(&mut procedure, legs, center)?,
        }

        found.push(procedure);
    }

    debug!(
        "{} {} procedure(s) for runway {runway}",
        found.len(),
        match kind {
            ProcedureKind::Sid => "departure",
            ProcedureKind::Star => "arrival",
        },
    );

    Ok(found)
}

/// A departure serves exactly its runway; an arrival also matches the `ALL`
/// wildcard. Designators are compared in parsed form, so `9` and `09` name
/// the same runway, and a runway field that is no designator at all matches
/// nothing.
fn applies(kind: ProcedureKind, field: &str, runway: &Designator) -> bool {
    if kind == ProcedureKind::Star && field == "ALL" {
        return true;
    }

    field
        .parse::<Designator>()
        .map_or(false, |designator| designator == *runway)
}

/// Collects departure legs up to the next `SID` record or a blank line.
fn departure_legs(
    procedure: &mut Procedure,
    records: &[(RecordKind, &str)],
    center: Coordinate,
) -> Result<(), Error> {
    for (kind, line) in records {
        match kind {
            RecordKind::Sid | RecordKind::Blank => break,
            RecordKind::ArcLeg => procedure.push_arc(ArcLeg::try_from(*line)?, center),
            RecordKind::FixLeg => {
                if let Some(fix) = FixLeg::try_from(*line)?.fix() {
                    procedure.push_fix(fix);
                }
            }
            _ => continue,
        }
    }

    Ok(())
}

/// Collects arrival legs up to the next `STAR`, `END`, `APPTR` or `FINAL`
/// record or the end of input. Any record that is not an arc contributes its
/// fix; repeated fixes are dropped.
fn arrival_legs(
    procedure: &mut Procedure,
    records: &[(RecordKind, &str)],
    center: Coordinate,
) -> Result<(), Error> {
    for (kind, line) in records {
        match kind {
            RecordKind::Star | RecordKind::Terminator => break,
            RecordKind::ArcLeg => procedure.push_arc(ArcLeg::try_from(*line)?, center),
            RecordKind::Blank => continue,
            _ => {
                // fix legs of arrivals are not restricted to the leg tags
                let Ok(leg) = FixLeg::try_from(*line) else {
                    continue;
                };

                if let Some(fix) = leg.fix() {
                    if !procedure.fixes.iter().any(|seen| seen == fix) {
                        procedure.push_fix(fix);
                    }
                }
            }
        }
    }

    Ok(())
}
