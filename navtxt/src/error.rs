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

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// A record has fewer comma-delimited fields than its type requires.
    MissingField {
        field: &'static str,
        index: usize,
    },
    /// A field that should be numeric could not be parsed.
    NotANumber {
        field: &'static str,
        value: String,
    },
    /// A runway designator without a numeric base in the range from 1 to 36.
    InvalidDesignator {
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field, index } => {
                write!(f, "record has no {field} at field {index}")
            }
            Self::NotANumber { field, value } => {
                write!(f, "{field} should be a number but is \"{value}\"")
            }
            Self::InvalidDesignator { value } => {
                write!(
                    f,
                    "\"{value}\" is not a runway designator in the range from 01 to 36"
                )
            }
        }
    }
}

impl error::Error for Error {}
