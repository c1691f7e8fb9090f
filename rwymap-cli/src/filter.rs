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

//! ICAO wildcard filter.

use regex::Regex;

/// Matches ICAO codes against a glob-style pattern.
///
/// `*` matches any run of characters and `?` exactly one; everything else
/// matches literally and case-insensitively.
pub struct IcaoFilter {
    pattern: Regex,
}

impl IcaoFilter {
    pub fn new(pattern: &str) -> Self {
        let mut expr = String::from("(?i)^");
        for c in pattern.chars() {
            match c {
                '*' => expr.push_str(".*"),
                '?' => expr.push('.'),
                _ => expr.push_str(&regex::escape(&c.to_string())),
            }
        }
        expr.push('$');

        // the expression is anchored and built from escaped literals
        let pattern = Regex::new(&expr).expect("glob expression should be valid");
        Self { pattern }
    }

    pub fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_case() {
        let filter = IcaoFilter::new("eddh");

        assert!(filter.matches("EDDH"));
        assert!(!filter.matches("EDDHX"));
        assert!(!filter.matches("EDD"));
    }

    #[test]
    fn star_matches_any_run() {
        let filter = IcaoFilter::new("EDD*");

        assert!(filter.matches("EDDH"));
        assert!(filter.matches("EDDF"));
        assert!(filter.matches("EDD"));
        assert!(!filter.matches("ETDH"));
    }

    #[test]
    fn question_mark_matches_one_character() {
        let filter = IcaoFilter::new("K?FK");

        assert!(filter.matches("KJFK"));
        assert!(!filter.matches("KFK"));
    }

    #[test]
    fn literal_characters_are_escaped() {
        let filter = IcaoFilter::new("A.B");

        assert!(filter.matches("A.B"));
        assert!(!filter.matches("AXB"));
    }
}
