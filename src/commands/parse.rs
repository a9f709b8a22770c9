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
use crate::version::{RankValue, split_ranks};
use comfy_table::{Cell, CellAlignment, Color, Table};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RankRow<'a> {
    position: usize,
    token: &'a str,
    // Digits as text so numbers of any size survive JSON.
    number: String,
    maturity: Option<&'static str>,
    value: f64,
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    version: &'a str,
    ranks: Vec<RankRow<'a>>,
}

pub struct ParseCommand<'a> {
    config: &'a RankverConfig,
}

impl<'a> ParseCommand<'a> {
    pub fn new(config: &'a RankverConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, version: &str, json: bool) -> Result<()> {
        let rows = rank_rows(version)?;

        if json {
            let output = ParseOutput {
                version: version.trim(),
                ranks: rows,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", self.render_table(&rows));
        }
        Ok(())
    }

    fn render_table(&self, rows: &[RankRow]) -> Table {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("Rank"),
            Cell::new("Token"),
            Cell::new("Number"),
            Cell::new("Maturity"),
            Cell::new("Value"),
        ]);

        for row in rows {
            let mut maturity = Cell::new(row.maturity.unwrap_or("-"));
            if self.config.output.color && row.maturity.is_some() {
                maturity = maturity.fg(Color::Yellow);
            }
            table.add_row(vec![
                Cell::new(row.position).set_alignment(CellAlignment::Right),
                Cell::new(row.token),
                Cell::new(&row.number).set_alignment(CellAlignment::Right),
                maturity,
                Cell::new(row.value).set_alignment(CellAlignment::Right),
            ]);
        }
        table
    }
}

fn rank_rows(version: &str) -> Result<Vec<RankRow<'_>>> {
    split_ranks(version)?
        .into_iter()
        .enumerate()
        .map(|(position, token)| {
            let rank = RankValue::parse(token)?;
            Ok(RankRow {
                position,
                token,
                number: rank.number().to_string(),
                maturity: rank.maturity().map(|m| m.canonical_name()),
                value: rank.as_f64(),
            })
        })
        .collect()
}
