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

use indexmap::IndexSet;
use log::{debug, warn};

use navtxt::fields::Designator;

use super::*;
use crate::nd;
use crate::procedure::{procedures, ProcedureKind};
use crate::{Config, Error};

/// Returns the name of the map generated for a runway.
///
/// Reciprocal mode appends the `_RECIP` suffix. Output files carry the map
/// name plus the `.xml` extension, so callers derive the file to write or
/// clean up from this name.
pub fn map_name(icao: &str, base: &str, reciprocal: bool) -> String {
    if reciprocal {
        format!("{icao}_RW{base}_RECIP")
    } else {
        format!("{icao}_RW{base}")
    }
}

/// Builds the map document for one runway of an airport.
///
/// `base` is one of the airport's suffix-stripped designators and
/// `procedures_source` the content of its procedure file, or `None` when no
/// procedures are defined — a valid state that simply yields no lines.
///
/// The document carries the geometry of every runway end at the airport, one
/// dotted line per departure and one dashed line per arrival serving the
/// runway, and, when those lines reference any waypoints, a symbol listing
/// plus a second `_NAMES` map labelling them.
///
/// # Errors
///
/// A designator that does not parse fails the build of this runway; the
/// caller is expected to log and continue with the airport's remaining
/// runways. A missing opposite end is not an error and degrades to an empty
/// threshold position.
pub fn build_runway_maps(
    airport: &nd::Airport,
    base: &str,
    procedures_source: Option<&str>,
    config: &Config,
) -> Result<Maps, Error> {
    let runway: Designator = base.parse().map_err(|e| {
        warn!("{}: runway {base}: {e}", airport.icao());
        e
    })?;

    let name = map_name(airport.icao(), base, config.reciprocal.is_some());
    debug!("{}: building {name}", airport.icao());

    let mut map = Map {
        name: name.clone(),
        center: airport.coordinate(),
        colour: None,
        nodes: Vec::new(),
    };

    for end in airport.ends() {
        map.nodes.push(Node::Runway(runway_node(end, airport)?));
    }

    let mut waypoints = IndexSet::new();
    let source = procedures_source.unwrap_or_default();

    for sid in procedures(source, airport.coordinate(), ProcedureKind::Sid, &runway)? {
        map.nodes
            .push(Node::Comment(format!("SID: {}, Runway: {base}", sid.name())));
        map.nodes.push(Node::Line(Line {
            pattern: Pattern::Dotted,
            colour: config.colourful.then_some(Colour::NoiseTurquoise),
            track: sid.track(),
        }));
        waypoints.extend(sid.fixes().iter().cloned());
    }

    for star in procedures(source, airport.coordinate(), ProcedureKind::Star, &runway)? {
        map.nodes
            .push(Node::Comment(format!("STAR: {}, Runway: {base}", star.name())));
        map.nodes.push(Node::Line(Line {
            pattern: Pattern::Dashed,
            colour: config.colourful.then_some(Colour::MellowYellow),
            track: star.track(),
        }));
        waypoints.extend(star.fixes().iter().cloned());
    }

    if waypoints.is_empty() {
        return Ok(Maps { maps: vec![map] });
    }

    map.nodes.push(Node::Symbol(Symbol {
        colour: config.colourful.then_some(Colour::LoonyMaroons),
        points: waypoints.iter().cloned().collect(),
    }));

    let names = Map {
        name: format!("{name}_NAMES"),
        center: airport.coordinate(),
        colour: config.colourful.then_some(Colour::LoonyMaroons),
        nodes: vec![Node::Label(Label {
            points: waypoints.into_iter().collect(),
        })],
    };

    Ok(Maps {
        maps: vec![map, names],
    })
}

/// One runway node: the end's own threshold with the extended centreline
/// hint plus the opposite threshold resolved from the loaded ends.
fn runway_node(end: &nd::RunwayEnd, airport: &nd::Airport) -> Result<Runway, Error> {
    let opposite = end
        .designator()
        .parse::<Designator>()
        .map_err(|e| {
            warn!("{}: runway end {}: {e}", airport.icao(), end.designator());
            e
        })?
        .opposite();

    let own = Threshold {
        name: end.designator().to_string(),
        position: Some(end.threshold()),
        centreline: Some(Centreline {
            track: end.heading().reciprocal().degrees(),
        }),
    };

    // an absent opposite end degrades to an empty position
    let position = airport
        .ends()
        .iter()
        .find(|other| other.designator().parse::<Designator>().ok() == Some(opposite))
        .map(|other| other.threshold());

    if position.is_none() {
        debug!(
            "{}: no opposite end {opposite} for runway end {}",
            airport.icao(),
            end.designator()
        );
    }

    let far = Threshold {
        name: opposite.to_string(),
        position,
        centreline: None,
    };

    Ok(Runway {
        name: end.designator().to_string(),
        thresholds: vec![own, far],
    })
}
