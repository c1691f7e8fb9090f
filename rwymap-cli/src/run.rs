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

//! The generation drive loop.
//!
//! Airports and their runways are processed strictly in sequence. A failing
//! airport or runway is logged and skipped; only an empty match set fails
//! the whole run.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{info, warn};

use rwymap::map::{build_runway_maps, map_name};
use rwymap::nd::{Airport, Database};
use rwymap::{Config, Designator};

use crate::filter::IcaoFilter;
use crate::Args;

pub fn run(args: &Args) -> Result<()> {
    let airports_path = args.navdata.join("Airports.txt");
    let data = fs::read_to_string(&airports_path)
        .with_context(|| format!("failed to read {}", airports_path.display()))?;
    let db = Database::new(data);

    let filter = IcaoFilter::new(&args.icao);
    let matched: Vec<String> = db
        .codes()
        .filter(|code| filter.matches(code))
        .map(str::to_string)
        .collect();

    if matched.is_empty() {
        bail!("no ICAO codes found matching: {}", args.icao);
    }

    let config = Config {
        reciprocal: args
            .reciprocal
            .as_deref()
            .map(str::parse)
            .transpose()
            .context("invalid --reciprocal designator")?,
        colourful: args.colourful,
    };

    for icao in &matched {
        info!("processing {icao}");
        if let Err(e) = generate_airport(&db, icao, args, &config) {
            warn!("{icao}: {e:#}");
        }
    }

    Ok(())
}

fn generate_airport(db: &Database, icao: &str, args: &Args, config: &Config) -> Result<()> {
    let airport = db.airport(icao)?;

    // a missing procedure file just means no procedures are defined
    let proc_path = args.navdata.join("Proc").join(format!("{icao}.txt"));
    let procedures = match fs::read_to_string(&proc_path) {
        Ok(source) => Some(source),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", proc_path.display()))
        }
    };

    let out_dir = args.output.join(icao);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for base in airport.bases() {
        // a bad designator aborts this runway only
        if let Err(e) = generate_runway(&airport, base, procedures.as_deref(), config, &out_dir) {
            warn!("{icao}: runway {base}: {e:#}");
        }
    }

    if let Some(designator) = &config.reciprocal {
        remove_reciprocal(&out_dir, airport.icao(), designator)?;
    }

    Ok(())
}

fn generate_runway(
    airport: &Airport,
    base: &str,
    procedures: Option<&str>,
    config: &Config,
    out_dir: &Path,
) -> Result<()> {
    let maps = build_runway_maps(airport, base, procedures, config)?;
    let document = maps.to_xml()?;

    let name = map_name(airport.icao(), base, config.reciprocal.is_some());
    let path = out_dir.join(format!("{name}.xml"));

    // delete before write so a rerun reproduces the file byte for byte
    if path.exists() {
        fs::remove_file(&path)?;
    }
    fs::write(&path, document).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());

    Ok(())
}

/// Reciprocal mode removes the map generated under the opposite end's
/// reciprocal name.
fn remove_reciprocal(out_dir: &Path, icao: &str, designator: &Designator) -> Result<()> {
    let name = map_name(icao, &designator.opposite().to_string(), true);
    let path = out_dir.join(format!("{name}.xml"));

    if path.exists() {
        fs::remove_file(&path)
            .with_context(|| format!("failed to remove {}", path.display()))?;
        info!("removed {}", path.display());
    }

    Ok(())
}
