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

use rwymap::map::{build_runway_maps, map_name};
use rwymap::nd::Database;
use rwymap::Config;

const AIRPORTS: &str = "\
A,KXYZ,TESTFIELD,40.0,-75.0,100,18000
R,09,090,8000,150,550,0.0,0.0,40.0,-75.01,100
R,27,270,8000,150,550,0.0,0.0,40.0,-74.99,100
";

const PROCEDURES: &str = "\
SID,TEST1,09,1
DF,ALPHA,0,0
DF,BRAVO,0,0
";

fn build(config: &Config) -> String {
    let db = Database::new(AIRPORTS);
    let airport = db.airport("KXYZ").expect("KXYZ should be found");

    let maps = build_runway_maps(&airport, "09", Some(PROCEDURES), config)
        .expect("map should build");
    let xml = maps.to_xml().expect("document should serialize");

    String::from_utf8(xml).expect("document should be UTF-8")
}

#[test]
fn sid_line_and_waypoint_symbols() {
    let xml = build(&Config::default());

    assert!(
        xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Maps>"),
        "{xml}"
    );

    // the departure track is exactly its two fixes
    assert!(xml.contains("<!--SID: TEST1, Runway: 09-->"), "{xml}");
    assert!(xml.contains("<Line Pattern=\"Dotted\">ALPHA/BRAVO</Line>"), "{xml}");

    // both fixes appear as symbol points and again as labels
    assert!(xml.contains("<Point>ALPHA</Point>"), "{xml}");
    assert!(xml.contains("<Point>BRAVO</Point>"), "{xml}");
    assert_eq!(xml.matches("<Point>").count(), 4, "{xml}");

    assert!(xml.contains("<Symbol Type=\"SolidTriangle\">"), "{xml}");
    assert!(xml.contains("Name=\"KXYZ_RW09\""), "{xml}");
    assert!(xml.contains("Name=\"KXYZ_RW09_NAMES\""), "{xml}");
}

#[test]
fn runway_geometry_with_paired_thresholds() {
    let xml = build(&Config::default());

    // the 09 end carries its centreline on the reciprocal of its heading,
    // the 27 end is resolved as its opposite
    assert!(xml.contains("<Runway Name=\"09\">"), "{xml}");
    assert!(
        xml.contains(
            "<Threshold Name=\"09\" Position=\"+40.0000-075.0100\" \
             ExtendedCentrelineTrack=\"270\" ExtendedCentrelineLength=\"12\" \
             ExtendedCentrelineWidth=\"1\" ExtendedCentrelineTickInterval=\"1\"/>"
        ),
        "{xml}"
    );
    assert!(
        xml.contains("<Threshold Name=\"27\" Position=\"+40.0000-074.9900\"/>"),
        "{xml}"
    );

    // every end of the airport is drawn on every runway map
    assert!(xml.contains("<Runway Name=\"27\">"), "{xml}");

    assert!(xml.contains("Center=\"+40.0000-075.0000\""), "{xml}");
}

#[test]
fn rebuild_is_byte_identical() {
    assert_eq!(build(&Config::default()), build(&Config::default()));
}

#[test]
fn colourful_mode_names_the_colours() {
    let config = Config {
        colourful: true,
        ..Config::default()
    };
    let xml = build(&config);

    assert!(
        xml.contains("<Line Pattern=\"Dotted\" CustomColourName=\"NoiseTurquoise\">"),
        "{xml}"
    );
    assert!(
        xml.contains("<Symbol Type=\"SolidTriangle\" CustomColourName=\"LoonyMaroons\">"),
        "{xml}"
    );
    // the names map is coloured as a whole
    assert!(
        xml.contains("Name=\"KXYZ_RW09_NAMES\" CustomColourName=\"LoonyMaroons\""),
        "{xml}"
    );
}

#[test]
fn reciprocal_mode_renames_the_maps() {
    let config = Config {
        reciprocal: Some("09".parse().expect("designator should parse")),
        ..Config::default()
    };
    let xml = build(&config);

    assert!(xml.contains("Name=\"KXYZ_RW09_RECIP\""), "{xml}");
    assert!(xml.contains("Name=\"KXYZ_RW09_RECIP_NAMES\""), "{xml}");

    assert_eq!(map_name("KXYZ", "09", true), "KXYZ_RW09_RECIP");
    assert_eq!(map_name("KXYZ", "09", false), "KXYZ_RW09");
}

#[test]
fn missing_opposite_end_degrades_to_empty_position() {
    let db = Database::new(
        "A,KONE,ONE SIDED,40.0,-75.0,100,18000\nR,09,090,8000,150,550,0.0,0.0,40.0,-75.01,100",
    );
    let airport = db.airport("KONE").expect("KONE should be found");

    let maps = build_runway_maps(&airport, "09", None, &Config::default())
        .expect("map should build");
    let xml = String::from_utf8(maps.to_xml().expect("document should serialize"))
        .expect("document should be UTF-8");

    assert!(
        xml.contains("<Threshold Name=\"27\" Position=\"\"/>"),
        "{xml}"
    );
    // without procedures there is no symbol and no names map
    assert!(!xml.contains("<Symbol"), "{xml}");
    assert!(!xml.contains("_NAMES"), "{xml}");
}

#[test]
fn malformed_designator_fails_only_that_runway() {
    let db = Database::new(
        "A,KBAD,BAD DATA,40.0,-75.0,100,18000\n\
         R,XX,090,8000,150,550,0.0,0.0,40.0,-75.01,100\n\
         R,18,180,8000,150,550,0.0,0.0,40.01,-75.0,100",
    );
    let airport = db.airport("KBAD").expect("KBAD should be found");

    // the malformed end poisons every map that draws it
    assert!(build_runway_maps(&airport, "XX", None, &Config::default()).is_err());
    assert!(build_runway_maps(&airport, "18", None, &Config::default()).is_err());
}

#[test]
fn shared_waypoints_are_listed_once() {
    let procedures = "\
SID,DEP1,09,1
DF,SHARE,0,0
DF,ALPHA,0,0

STAR,ARR1,ALL,1
TF,SHARE,0,0
TF,DELTA,0,0
";

    let db = Database::new(AIRPORTS);
    let airport = db.airport("KXYZ").expect("KXYZ should be found");
    let maps = build_runway_maps(&airport, "09", Some(procedures), &Config::default())
        .expect("map should build");
    let xml = String::from_utf8(maps.to_xml().expect("document should serialize"))
        .expect("document should be UTF-8");

    // SHARE is on both tracks but only one symbol point and one label
    assert_eq!(xml.matches("<Point>SHARE</Point>").count(), 2, "{xml}");
    assert_eq!(xml.matches("<Point>").count(), 6, "{xml}");
    assert!(xml.contains("<Line Pattern=\"Dashed\">SHARE/DELTA</Line>"), "{xml}");
}
