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

use crate::config::RankverConfig;
use crate::error::Result;
use crate::version::{SortedVersion, latest, sort_versions};
use log::debug;
use serde::Serialize;
use std::io::{self, BufRead};

#[derive(Serialize)]
struct SortedOutput<'a> {
    version: &'a str,
    values: Vec<f64>,
}

impl<'a> From<&'a SortedVersion> for SortedOutput<'a> {
    fn from(entry: &'a SortedVersion) -> Self {
        Self {
            version: &entry.raw,
            values: entry.version.values(),
        }
    }
}

pub struct SortCommand<'a> {
    config: &'a RankverConfig,
}

impl<'a> SortCommand<'a> {
    pub fn new(config: &'a RankverConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        versions: &[String],
        reverse: bool,
        unique: bool,
        latest_only: bool,
        json: bool,
    ) -> Result<()> {
        let inputs = if versions.is_empty() {
            debug!("No versions given, reading from stdin");
            read_versions(io::stdin().lock())?
        } else {
            versions.to_vec()
        };

        let entries: Vec<SortedVersion> = if latest_only {
            latest(&inputs)?.into_iter().collect()
        } else {
            sort_versions(&inputs, self.config.sort_options(reverse, unique))?
        };

        if json {
            let output: Vec<SortedOutput> = entries.iter().map(SortedOutput::from).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for entry in &entries {
                println!("{}", entry.raw);
            }
        }
        Ok(())
    }
}

/// Collect whitespace-separated versions, one or more per line.
fn read_versions<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in reader.lines() {
        versions.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(versions)
}
