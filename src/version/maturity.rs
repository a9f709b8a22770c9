// Copyright 2025 dentsusoken
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

/// Release maturity carried by the letters of a rank.
///
/// Each class shifts the rank's number by a fixed number of quarter units.
/// Every shift stays strictly inside (-1, 1) so the integer part of a rank
/// always dominates its maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maturity {
    Alpha,
    Beta,
    ReleaseCandidate,
    ServiceRelease,
}

impl Maturity {
    /// All classes, least mature first.
    pub const ALL: [Maturity; 4] = [
        Maturity::Alpha,
        Maturity::Beta,
        Maturity::ReleaseCandidate,
        Maturity::ServiceRelease,
    ];

    /// Accepted spellings, shortest first. Matching is case-insensitive.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Maturity::Alpha => &["a", "alpha"],
            Maturity::Beta => &["b", "beta"],
            Maturity::ReleaseCandidate => &["rc", "release-candidate", "release_candidate"],
            Maturity::ServiceRelease => &["sr", "service-release", "service_release"],
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Maturity::Alpha => "alpha",
            Maturity::Beta => "beta",
            Maturity::ReleaseCandidate => "release-candidate",
            Maturity::ServiceRelease => "service-release",
        }
    }

    /// Offset in quarter units added to the rank number.
    pub fn offset_quarters(self) -> i8 {
        match self {
            Maturity::Alpha => -3,
            Maturity::Beta => -2,
            Maturity::ReleaseCandidate => -1,
            Maturity::ServiceRelease => 1,
        }
    }

    pub fn offset(self) -> f64 {
        f64::from(self.offset_quarters()) / 4.0
    }

    /// Look up the letter run of a rank.
    ///
    /// Letters are collected without the separators, so `release-candidate`
    /// reaches this function as `releasecandidate`; separators are ignored on
    /// both sides of the comparison.
    pub fn from_marker(marker: &str) -> Option<Self> {
        let wanted = normalize(marker);
        if wanted.is_empty() {
            return None;
        }

        Self::ALL
            .into_iter()
            .find(|m| m.names().iter().any(|name| normalize(name) == wanted))
    }
}

fn normalize(marker: &str) -> String {
    marker
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
