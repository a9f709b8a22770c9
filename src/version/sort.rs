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

use crate::error::Result;
use crate::version::{Version, compare, parse};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Newest first.
    pub reverse: bool,
    /// Keep only the first input of each group of equal versions.
    pub unique: bool,
}

/// An input string together with its parsed value.
#[derive(Debug, Clone)]
pub struct SortedVersion {
    pub raw: String,
    pub version: Version,
}

fn parse_all<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<SortedVersion>> {
    inputs
        .iter()
        .map(|input| {
            let raw = input.as_ref().trim().to_string();
            let version = parse(&raw)?;
            Ok(SortedVersion { raw, version })
        })
        .collect()
}

/// Sort version strings, parsing each one exactly once.
///
/// The sort is stable: inputs that compare equal keep their input order,
/// in both directions.
pub fn sort_versions<S: AsRef<str>>(
    inputs: &[S],
    options: SortOptions,
) -> Result<Vec<SortedVersion>> {
    let mut entries = parse_all(inputs)?;

    if options.unique {
        let mut kept: Vec<SortedVersion> = Vec::with_capacity(entries.len());
        for entry in entries {
            if kept.iter().any(|k| k.version == entry.version) {
                log::debug!("Dropping duplicate version '{}'", entry.raw);
            } else {
                kept.push(entry);
            }
        }
        entries = kept;
    }

    if options.reverse {
        entries.sort_by(|a, b| compare(&b.version, &a.version));
    } else {
        entries.sort_by(|a, b| compare(&a.version, &b.version));
    }

    log::debug!("Sorted {} versions", entries.len());
    Ok(entries)
}

/// The greatest version; on ties the earliest input wins.
pub fn latest<S: AsRef<str>>(inputs: &[S]) -> Result<Option<SortedVersion>> {
    let entries = parse_all(inputs)?;
    Ok(entries.into_iter().reduce(|best, candidate| {
        if compare(&candidate.version, &best.version).is_gt() {
            candidate
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankverError;

    fn raws(entries: &[SortedVersion]) -> Vec<&str> {
        entries.iter().map(|e| e.raw.as_str()).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let inputs = [
            "1.0.0",
            "1.0.0-rc.1",
            "1.0.0-alpha",
            "0.9",
            "1.0.0-beta",
            "1.0.0-sr",
        ];
        let sorted = sort_versions(&inputs, SortOptions::default()).unwrap();
        assert_eq!(
            raws(&sorted),
            vec![
                "0.9",
                "1.0.0-alpha",
                "1.0.0-beta",
                "1.0.0-rc.1",
                "1.0.0",
                "1.0.0-sr"
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_versions() {
        let inputs = ["1.0.0", "1", "0.5", "1.0"];
        let sorted = sort_versions(&inputs, SortOptions::default()).unwrap();
        assert_eq!(raws(&sorted), vec!["0.5", "1.0.0", "1", "1.0"]);

        let options = SortOptions {
            reverse: true,
            unique: false,
        };
        let sorted = sort_versions(&inputs, options).unwrap();
        assert_eq!(raws(&sorted), vec!["1.0.0", "1", "1.0", "0.5"]);
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let inputs = vec!["2.0".to_string(), "1.0".to_string(), "2.0.0".to_string()];
        let options = SortOptions {
            reverse: false,
            unique: true,
        };
        let sorted = sort_versions(&inputs, options).unwrap();
        assert_eq!(raws(&sorted), vec!["1.0", "2.0"]);
    }

    #[test]
    fn test_invalid_input_fails_whole_sort() {
        let result = sort_versions(&["1.0", "1.0-foo"], SortOptions::default());
        assert!(matches!(
            result,
            Err(RankverError::UnrecognizedMaturity { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let inputs: [&str; 0] = [];
        assert!(sort_versions(&inputs, SortOptions::default()).unwrap().is_empty());
        assert!(latest(&inputs).unwrap().is_none());
    }

    #[test]
    fn test_latest() {
        let best = latest(&["1.2", "1.10-rc", "1.10.0", "1.9"]).unwrap().unwrap();
        assert_eq!(best.raw, "1.10.0");

        let best = latest(&["3.0", "3", "2.9"]).unwrap().unwrap();
        assert_eq!(best.raw, "3.0");
    }
}
