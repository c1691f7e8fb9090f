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

//! Document serialization.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::*;
use crate::error::Error;

impl Maps {
    /// Serializes the document into the renderer's byte format: an XML
    /// declaration followed by the element tree indented with four spaces.
    ///
    /// Serialization is a pure function of the document, so rebuilding an
    /// unchanged document reproduces the bytes exactly.
    pub fn to_xml(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        let mut writer = Writer::new_with_indent(&mut buf, b' ', 4);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new("Maps")))?;

        for map in &self.maps {
            write_map(&mut writer, map)?;
        }

        writer.write_event(Event::End(BytesEnd::new("Maps")))?;

        Ok(buf)
    }
}

fn write_map<W: Write>(writer: &mut Writer<W>, map: &Map) -> Result<(), Error> {
    let mut elem = BytesStart::new("Map");
    elem.push_attribute(("Type", MAP_TYPE));
    elem.push_attribute(("Name", map.name.as_str()));
    elem.push_attribute(("Priority", MAP_PRIORITY));
    elem.push_attribute(("Center", map.center.to_string().as_str()));
    if let Some(colour) = map.colour {
        elem.push_attribute(("CustomColourName", colour.name()));
    }
    writer.write_event(Event::Start(elem))?;

    for node in &map.nodes {
        match node {
            Node::Runway(runway) => write_runway(writer, runway)?,
            Node::Comment(text) => writer.write_event(Event::Comment(BytesText::new(text)))?,
            Node::Line(line) => write_line(writer, line)?,
            Node::Symbol(symbol) => write_symbol(writer, symbol)?,
            Node::Label(label) => write_points(writer, "Label", &label.points)?,
        }
    }

    writer.write_event(Event::End(BytesEnd::new("Map")))?;
    Ok(())
}

fn write_runway<W: Write>(writer: &mut Writer<W>, runway: &Runway) -> Result<(), Error> {
    let mut elem = BytesStart::new("Runway");
    elem.push_attribute(("Name", runway.name.as_str()));
    writer.write_event(Event::Start(elem))?;

    for threshold in &runway.thresholds {
        let mut elem = BytesStart::new("Threshold");
        elem.push_attribute(("Name", threshold.name.as_str()));

        let position = threshold
            .position
            .map(|position| position.to_string())
            .unwrap_or_default();
        elem.push_attribute(("Position", position.as_str()));

        if let Some(centreline) = threshold.centreline {
            let track = centreline.track.to_string();
            elem.push_attribute(("ExtendedCentrelineTrack", track.as_str()));
            elem.push_attribute((
                "ExtendedCentrelineLength",
                Centreline::LENGTH.to_string().as_str(),
            ));
            elem.push_attribute((
                "ExtendedCentrelineWidth",
                Centreline::WIDTH.to_string().as_str(),
            ));
            elem.push_attribute((
                "ExtendedCentrelineTickInterval",
                Centreline::TICK_INTERVAL.to_string().as_str(),
            ));
        }

        writer.write_event(Event::Empty(elem))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Runway")))?;
    Ok(())
}

fn write_line<W: Write>(writer: &mut Writer<W>, line: &Line) -> Result<(), Error> {
    let mut elem = BytesStart::new("Line");
    elem.push_attribute(("Pattern", line.pattern.name()));
    if let Some(colour) = line.colour {
        elem.push_attribute(("CustomColourName", colour.name()));
    }

    if line.track.is_empty() {
        writer.write_event(Event::Empty(elem))?;
        return Ok(());
    }

    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(&line.track)))?;
    writer.write_event(Event::End(BytesEnd::new("Line")))?;
    Ok(())
}

fn write_symbol<W: Write>(writer: &mut Writer<W>, symbol: &Symbol) -> Result<(), Error> {
    let mut elem = BytesStart::new("Symbol");
    elem.push_attribute(("Type", SYMBOL_TYPE));
    if let Some(colour) = symbol.colour {
        elem.push_attribute(("CustomColourName", colour.name()));
    }
    writer.write_event(Event::Start(elem))?;

    for point in &symbol.points {
        write_point(writer, point)?;
    }

    writer.write_event(Event::End(BytesEnd::new("Symbol")))?;
    Ok(())
}

fn write_points<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    points: &[String],
) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;

    for point in points {
        write_point(writer, point)?;
    }

    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_point<W: Write>(writer: &mut Writer<W>, point: &str) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new("Point")))?;
    writer.write_event(Event::Text(BytesText::new(point)))?;
    writer.write_event(Event::End(BytesEnd::new("Point")))?;
    Ok(())
}
