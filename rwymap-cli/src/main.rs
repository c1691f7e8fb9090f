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

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

mod filter;
mod run;

/// Generates one vatSys overlay map per runway from a navigation database.
#[derive(Parser, Debug)]
#[command(name = "rwymap", version, about)]
struct Args {
    /// Exact ICAO code or wildcard pattern (`*` and `?`), e.g. `EDD*`.
    #[arg(long)]
    icao: String,

    /// Runway designator switching the output to reciprocal naming. The map
    /// generated under the opposite designator's reciprocal name is removed
    /// after the run.
    #[arg(long)]
    reciprocal: Option<String>,

    /// Colour procedure lines and waypoint symbols.
    #[arg(long)]
    colourful: bool,

    /// Directory holding `Airports.txt` and the `Proc` folder.
    #[arg(long, default_value = "Navdata")]
    navdata: PathBuf,

    /// Directory the maps are written to, one subdirectory per airport.
    #[arg(long, default_value = "Output")]
    output: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    run::run(&args)
}
