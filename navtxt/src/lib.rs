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

//! Navigation data flat-file parser.
//!
//! This crate parses the comma-delimited text format used by flight simulator
//! navigation databases: an `Airports.txt` with airport and runway records
//! and one procedure file per airport holding SID and STAR definitions. Each
//! line is one record whose first field is the record's type tag. The parser
//! borrows from the input wherever possible; fields can be copied into owned
//! values when needed.
//!
//! # Examples
//!
//! Lets parse an airport record and print its coordinates:
//!
//! ```
//! use navtxt::records::Airport;
//!
//! # fn main() -> Result<(), navtxt::Error> {
//! let line = "A,KJFK,JOHN F KENNEDY INTL,40.63993,-73.77869,13,18000";
//! let airport = Airport::try_from(line)?;
//!
//! println!("{} at {:.4}, {:.4}", airport.icao, airport.latitude, airport.longitude);
//! #     Ok(())
//! # }
//! ```
//!
//! An entire file is scanned with the [`Records`] iterator, which classifies
//! each line by its tag so callers only parse the records they care about:
//!
//! ```
//! use navtxt::records::{Airport, RecordKind, Records};
//!
//! # fn main() -> Result<(), navtxt::Error> {
//! let data = "A,EDDH,HAMBURG,53.63040,9.98823,53,18000\nR,05,049,12024,154,547,0.0,0.0,53.61731,9.97255,53";
//!
//! for (kind, line) in Records::new(data) {
//!     if let RecordKind::Airport = kind {
//!         let arpt = Airport::try_from(line)?;
//!         println!("{}", arpt.icao);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`Records`]: crate::records::Records

mod error;

pub mod fields;
pub mod records;

pub use error::Error;
