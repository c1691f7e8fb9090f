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

/// Side of a parallel runway.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
    Centre,
}

impl Side {
    /// The side seen from the opposite runway end. Left and right swap while
    /// the centre stays.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Centre => Self::Centre,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
            Self::Centre => write!(f, "C"),
        }
    }
}

/// A runway designator like `09` or `27R`.
///
/// The numeric base is the magnetic heading rounded to tens of degrees and
/// must be in the range from 1 to 36; parallel runways carry an L, R or C
/// suffix.
///
/// # Examples
///
/// ```
/// use navtxt::fields::Designator;
///
/// # fn main() -> Result<(), navtxt::Error> {
/// let designator: Designator = "09L".parse()?;
/// assert_eq!(designator.opposite().to_string(), "27R");
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Designator {
    base: u8,
    side: Option<Side>,
}

impl Designator {
    /// The numeric base in the range from 1 to 36.
    pub fn base(&self) -> u8 {
        self.base
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// Returns the designator of the opposite runway end.
    ///
    /// The base is rotated by 18 and the side swaps from left to right and
    /// vice versa. Taking the opposite twice yields the designator itself.
    pub fn opposite(&self) -> Self {
        let base = if self.base <= 18 {
            self.base + 18
        } else {
            self.base - 18
        };

        Self {
            base,
            side: self.side.map(Side::opposite),
        }
    }
}

impl FromStr for Designator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.trim_end_matches(['L', 'R', 'C']);

        let side = match &s[digits.len()..] {
            "" => None,
            "L" => Some(Side::Left),
            "R" => Some(Side::Right),
            "C" => Some(Side::Centre),
            _ => {
                return Err(Error::InvalidDesignator {
                    value: s.to_string(),
                })
            }
        };

        match digits.parse() {
            Ok(base) if (1..=36).contains(&base) => Ok(Self { base, side }),
            _ => Err(Error::InvalidDesignator {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.base)?;

        match self.side {
            Some(side) => write!(f, "{side}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opposite(s: &str) -> String {
        s.parse::<Designator>()
            .expect("designator should parse")
            .opposite()
            .to_string()
    }

    #[test]
    fn opposite_designators() {
        assert_eq!(opposite("09"), "27");
        assert_eq!(opposite("09L"), "27R");
        assert_eq!(opposite("36"), "18");
        assert_eq!(opposite("18C"), "36C");
    }

    #[test]
    fn opposite_is_an_involution() {
        for base in 1..=36u8 {
            for suffix in ["", "L", "R", "C"] {
                let designator: Designator = format!("{base:02}{suffix}")
                    .parse()
                    .expect("designator should parse");

                assert_eq!(designator.opposite().opposite(), designator);
            }
        }
    }

    #[test]
    fn normalizes_single_digit_base() {
        let designator: Designator = "9".parse().expect("designator should parse");
        assert_eq!(designator.to_string(), "09");
    }

    #[test]
    fn fails_on_invalid_designators() {
        for value in ["", "00", "37", "RW", "9X", "L"] {
            assert!(value.parse::<Designator>().is_err(), "{value:?} should fail");
        }
    }
}
