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

//! Overlay map documents.
//!
//! A document is a `Maps` root holding one or two `Map` elements: the map
//! with the runway geometry and procedure lines, and a second `_NAMES` map
//! labelling the waypoints when there are any. The model is built once per
//! runway by [`build_runway_maps`] and read-only afterwards;
//! [`Maps::to_xml`] turns it into the renderer's document bytes.

use crate::geom::Coordinate;

mod builder;
mod xml;

pub use builder::{build_runway_maps, map_name};

/// Attribute value of `Type` on every generated map.
pub(crate) const MAP_TYPE: &str = "System";

/// Display priority of every generated map.
pub(crate) const MAP_PRIORITY: &str = "3";

/// Symbol shape marking a waypoint.
pub(crate) const SYMBOL_TYPE: &str = "SolidTriangle";

/// Named colours from the renderer's colour profile.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Colour {
    NoiseTurquoise,
    MellowYellow,
    LoonyMaroons,
}

impl Colour {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::NoiseTurquoise => "NoiseTurquoise",
            Self::MellowYellow => "MellowYellow",
            Self::LoonyMaroons => "LoonyMaroons",
        }
    }
}

/// Line rendering pattern.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Pattern {
    /// Departure tracks.
    Dotted,
    /// Arrival tracks.
    Dashed,
}

impl Pattern {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Dotted => "Dotted",
            Self::Dashed => "Dashed",
        }
    }
}

/// Root collection of one map document.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Maps {
    pub(crate) maps: Vec<Map>,
}

impl Maps {
    pub fn maps(&self) -> &[Map] {
        &self.maps
    }
}

/// One map with its ordered child elements.
#[derive(Clone, PartialEq, Debug)]
pub struct Map {
    pub(crate) name: String,
    pub(crate) center: Coordinate,
    pub(crate) colour: Option<Colour>,
    pub(crate) nodes: Vec<Node>,
}

impl Map {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Child element of a [`Map`] in document order.
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    Runway(Runway),
    Comment(String),
    Line(Line),
    Symbol(Symbol),
    Label(Label),
}

/// A runway with its two thresholds.
#[derive(Clone, PartialEq, Debug)]
pub struct Runway {
    pub(crate) name: String,
    pub(crate) thresholds: Vec<Threshold>,
}

/// Threshold position, optionally with an extended centreline hint.
#[derive(Clone, PartialEq, Debug)]
pub struct Threshold {
    pub(crate) name: String,
    /// `None` when the end is missing from the database; rendered as an
    /// empty Position attribute.
    pub(crate) position: Option<Coordinate>,
    pub(crate) centreline: Option<Centreline>,
}

/// Extended centreline drawn outwards from a threshold.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Centreline {
    /// Track of the centreline away from the runway, which is the
    /// reciprocal of the threshold's own heading.
    pub(crate) track: u16,
}

impl Centreline {
    /// Display length in nautical miles.
    pub(crate) const LENGTH: u16 = 12;
    /// Display width.
    pub(crate) const WIDTH: u16 = 1;
    /// Distance between tick marks in nautical miles.
    pub(crate) const TICK_INTERVAL: u16 = 1;
}

/// Procedure track line.
#[derive(Clone, PartialEq, Debug)]
pub struct Line {
    pub(crate) pattern: Pattern,
    pub(crate) colour: Option<Colour>,
    pub(crate) track: String,
}

/// Point markers of a runway's waypoints.
#[derive(Clone, PartialEq, Debug)]
pub struct Symbol {
    pub(crate) colour: Option<Colour>,
    pub(crate) points: Vec<String>,
}

/// Waypoint name labels of the `_NAMES` map.
#[derive(Clone, PartialEq, Debug)]
pub struct Label {
    pub(crate) points: Vec<String>,
}
