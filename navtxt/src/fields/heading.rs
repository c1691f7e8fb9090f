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

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Magnetic heading in whole degrees.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct MagneticHeading(u16);

impl MagneticHeading {
    pub fn new(degrees: u16) -> Self {
        Self(degrees)
    }

    pub fn degrees(&self) -> u16 {
        self.0
    }

    /// Returns the reciprocal heading.
    ///
    /// ```
    /// use navtxt::fields::MagneticHeading;
    ///
    /// assert_eq!(MagneticHeading::new(90).reciprocal().degrees(), 270);
    /// ```
    pub fn reciprocal(&self) -> Self {
        if self.0 < 180 {
            Self(self.0 + 180)
        } else {
            Self(self.0 - 180)
        }
    }
}

impl FromStr for MagneticHeading {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| Error::NotANumber {
                field: "heading",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for MagneticHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
