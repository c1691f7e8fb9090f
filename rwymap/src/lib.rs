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

//! Per-runway overlay map generation.
//!
//! This library turns a flight simulator navigation database into vatSys
//! overlay maps: one document per runway with the runway geometry, the
//! departure and arrival tracks serving it and the waypoints they reference.
//!
//! The pipeline runs through three stages:
//!
//! 1. [`nd::Database`] loads the airport file and yields an [`nd::Airport`]
//!    with its runway ends.
//! 2. [`procedure::procedures`] resolves the SIDs and STARs applying to one
//!    runway into renderable tracks, expanding arc legs through
//!    [`geom::Arc`].
//! 3. [`map::build_runway_maps`] composes the map document, which
//!    [`map::Maps::to_xml`] serializes.
//!
//! # Examples
//!
//! ```
//! use rwymap::map::build_runway_maps;
//! use rwymap::nd::Database;
//! use rwymap::Config;
//!
//! # fn main() -> Result<(), rwymap::Error> {
//! let db = Database::new("A,EDDH,HAMBURG,53.63040,9.98823,53,18000\nR,15,148,12024,154,547,0.0,0.0,53.64250,9.98099,53");
//! let airport = db.airport("EDDH")?;
//!
//! for base in airport.bases() {
//!     let maps = build_runway_maps(&airport, base, None, &Config::default())?;
//!     // write the document wherever it belongs
//!     let document = maps.to_xml()?;
//!     assert!(document.starts_with(b"<?xml"));
//! }
//! # Ok(())
//! # }
//! ```

mod error;

pub mod geom;
pub mod map;
pub mod nd;
pub mod procedure;

pub use error::Error;
pub use navtxt::fields::{Designator, MagneticHeading};

/// Rendering options of one generation run.
///
/// The configuration is built once by the caller and passed by reference
/// into every build; nothing reads ambient state.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Config {
    /// Alternate runway designator switching all generated map names to the
    /// `_RECIP` suffix. The caller is expected to remove the map previously
    /// generated under the opposite designator's reciprocal name after the
    /// run.
    pub reciprocal: Option<Designator>,
    /// Render procedure lines and waypoint symbols in their named colours.
    pub colourful: bool,
}
