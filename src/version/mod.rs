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

use crate::error::{RankverError, Result};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub mod maturity;
pub mod rank;
pub mod relation;
pub mod sort;

pub use maturity::Maturity;
pub use rank::RankValue;
pub use relation::Relation;
pub use sort::{SortOptions, SortedVersion, latest, sort_versions};

/// A parsed version: one [`RankValue`] per dot-separated rank, in input order.
///
/// Missing trailing ranks count as zero, so `1.0` and `1.0.0` are equal.
/// Every comparison operator goes through [`compare`].
#[derive(Debug, Clone)]
pub struct Version {
    ranks: Vec<RankValue>,
}

impl Version {
    pub fn new(ranks: Vec<RankValue>) -> Self {
        Self { ranks }
    }

    pub fn ranks(&self) -> &[RankValue] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Ranks with trailing zero ranks removed.
    pub fn significant_ranks(&self) -> &[RankValue] {
        let end = self
            .ranks
            .iter()
            .rposition(|rank| !rank.is_zero())
            .map_or(0, |i| i + 1);
        &self.ranks[..end]
    }

    /// Fused rank values, e.g. `[1.0, 0.0, -0.25, 1.0]` for `1.0.0-rc.1`.
    pub fn values(&self) -> Vec<f64> {
        self.ranks.iter().map(RankValue::as_f64).collect()
    }
}

/// Split a version string into its rank tokens.
///
/// Surrounding whitespace is ignored. Every token must be non-empty.
pub fn split_ranks(input: &str) -> Result<Vec<&str>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RankverError::EmptyVersionString);
    }

    trimmed
        .split('.')
        .enumerate()
        .map(|(position, token)| {
            if token.is_empty() {
                Err(RankverError::EmptyRank {
                    version: trimmed.to_string(),
                    position,
                })
            } else {
                Ok(token)
            }
        })
        .collect()
}

/// Parse a version string such as `1.0.0-rc.1` or `1.0.1b`.
pub fn parse(input: &str) -> Result<Version> {
    let ranks = split_ranks(input)?
        .into_iter()
        .map(RankValue::parse)
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Parsed version '{}' into {} ranks", input.trim(), ranks.len());
    Ok(Version::new(ranks))
}

/// Order two versions rank by rank, padding the shorter one with zeros.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    let zero = RankValue::zero();
    let len = a.ranks.len().max(b.ranks.len());
    (0..len)
        .map(|i| {
            let left = a.ranks.get(i).unwrap_or(&zero);
            let right = b.ranks.get(i).unwrap_or(&zero);
            left.cmp(right)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Parse both strings and compare them.
pub fn compare_str(a: &str, b: &str) -> Result<Ordering> {
    let ordering = compare(&parse(a)?, &parse(b)?);
    log::trace!("compare('{a}', '{b}') = {ordering:?}");
    Ok(ordering)
}

impl FromStr for Version {
    type Err = RankverError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Version {
    // Trailing zeros are dropped so that equal versions hash equally.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_ranks().hash(state);
    }
}
