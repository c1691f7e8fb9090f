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

//! Navigation Data.

use log::debug;

use navtxt::records::{self, RecordKind, Records};

use crate::error::Error;

mod airport;
mod runway;

pub use airport::Airport;
pub use runway::RunwayEnd;

/// One loaded airport flat file.
///
/// The file content is read once and scanned per airport. Records are parsed
/// into typed values at this boundary, so nothing downstream indexes raw
/// text.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Database {
    data: String,
}

impl Database {
    /// Creates a database from the flat-file content.
    pub fn new<S: Into<String>>(data: S) -> Self {
        Self { data: data.into() }
    }

    /// Returns the ICAO codes of all airport records in file order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        Records::new(&self.data).filter_map(|(kind, line)| match kind {
            RecordKind::Airport => records::Airport::try_from(line).ok().map(|arpt| arpt.icao),
            _ => None,
        })
    }

    /// Returns the airport with all its runway ends.
    ///
    /// The runway block is every `R` record immediately following the
    /// airport record; it ends at the first record of any other kind. This
    /// contiguity is a structural contract of the upstream file and not
    /// validated further.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AirportNotFound`] when no airport record matches the
    /// `icao` code, which tells the caller to skip this airport.
    pub fn airport(&self, icao: &str) -> Result<Airport, Error> {
        let mut rows = Records::new(&self.data);

        let mut airport: Airport = loop {
            match rows.next() {
                Some((RecordKind::Airport, line)) => {
                    let arpt = records::Airport::try_from(line)?;
                    if arpt.icao == icao {
                        break arpt.into();
                    }
                }
                Some(_) => continue,
                None => return Err(Error::AirportNotFound(icao.to_string())),
            }
        };

        for (kind, line) in rows {
            if kind != RecordKind::Runway {
                break;
            }

            let end: RunwayEnd = records::Runway::try_from(line)?.into();
            if !airport.bases.iter().any(|base| base == end.base()) {
                airport.bases.push(end.base().to_string());
            }
            airport.ends.push(end);
        }

        debug!(
            "{}: {} runway end(s) forming {} runway(s)",
            airport.icao(),
            airport.ends().len(),
            airport.bases().len()
        );

        Ok(airport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRPORTS: &str = "\
A,KJFK,JOHN F KENNEDY INTL,40.63993,-73.77869,13,18000
R,04L,044,12079,144,550,0.0,0.0,40.62021,-73.78608,13
R,22R,224,12079,144,550,0.0,0.0,40.64406,-73.76288,13
A,KLGA,LA GUARDIA,40.77724,-73.87261,21,18000
R,04,044,7001,144,550,0.0,0.0,40.77242,-73.88698,21
X,SOMETHING ELSE
R,22,224,7001,144,550,0.0,0.0,40.78233,-73.86255,21
";

    #[test]
    fn finds_airport_with_runway_block() {
        let db = Database::new(AIRPORTS);
        let arpt = db.airport("KJFK").expect("KJFK should be found");

        assert_eq!(arpt.icao(), "KJFK");
        assert_eq!(arpt.coordinate().latitude, 40.63993);
        assert_eq!(arpt.ends().len(), 2);
        assert_eq!(arpt.bases(), ["04", "22"]);
    }

    #[test]
    fn runway_block_ends_at_first_other_record() {
        let db = Database::new(AIRPORTS);
        let arpt = db.airport("KLGA").expect("KLGA should be found");

        // the 22 end sits behind a non-runway record and is not part of
        // the block
        assert_eq!(arpt.ends().len(), 1);
        assert_eq!(arpt.ends()[0].designator(), "04");
    }

    #[test]
    fn not_found_signals_skippable_airport() {
        let db = Database::new(AIRPORTS);

        assert!(matches!(
            db.airport("EDDH"),
            Err(Error::AirportNotFound(icao)) if icao == "EDDH"
        ));
    }

    #[test]
    fn lists_codes_in_file_order() {
        let db = Database::new(AIRPORTS);
        let codes: Vec<_> = db.codes().collect();

        assert_eq!(codes, ["KJFK", "KLGA"]);
    }
}
