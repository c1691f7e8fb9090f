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

use std::error;
use std::fmt;
use std::io;

#[derive(Clone, Debug)]
pub enum Error {
    /// The requested airport has no record in the loaded database. The
    /// caller should skip the airport and continue with the remaining ones.
    AirportNotFound(String),
    /// A record or field could not be parsed.
    Navdata(navtxt::Error),
    /// The document writer failed.
    Xml(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AirportNotFound(icao) => write!(f, "no airport record for {icao}"),
            Self::Navdata(e) => write!(f, "navigation data error: {e}"),
            Self::Xml(e) => write!(f, "failed to write map document: {e}"),
        }
    }
}

impl error::Error for Error {}

impl From<navtxt::Error> for Error {
    fn from(e: navtxt::Error) -> Self {
        Self::Navdata(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}
