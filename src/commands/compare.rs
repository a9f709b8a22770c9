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

use crate::commands::ordering_name;
use crate::config::RankverConfig;
use crate::error::Result;
use crate::version::compare_str;
use colored::Colorize;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Serialize)]
struct CompareOutput<'a> {
    left: &'a str,
    right: &'a str,
    ordering: &'static str,
}

pub struct CompareCommand<'a> {
    config: &'a RankverConfig,
}

impl<'a> CompareCommand<'a> {
    pub fn new(config: &'a RankverConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, left: &str, right: &str, json: bool) -> Result<()> {
        let ordering = compare_str(left, right)?;
        debug!("'{left}' vs '{right}': {ordering:?}");

        if json {
            let output = CompareOutput {
                left,
                right,
                ordering: ordering_name(ordering),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        let symbol = ordering_symbol(ordering);
        if self.config.output.color {
            println!("{left} {} {right}", symbol.bold());
        } else {
            println!("{left} {symbol} {right}");
        }
        Ok(())
    }
}

pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
