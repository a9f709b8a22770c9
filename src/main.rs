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

use clap::{Parser, Subcommand};
use rankver::commands::check::CheckCommand;
use rankver::commands::compare::CompareCommand;
use rankver::commands::parse::ParseCommand;
use rankver::commands::sort::SortCommand;
use rankver::config::new_rankver_config;
use rankver::error::{Result, format_error_for_stderr, get_exit_code};
use rankver::logging;
use rankver::version::Relation;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "rankver")]
#[command(author, version, about = "Compare and sort dotted version strings", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two versions
    #[command(visible_alias = "cmp")]
    Compare {
        /// Left-hand version (e.g., "1.0.0-rc.1")
        left: String,
        /// Right-hand version (e.g., "1.0.0")
        right: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check a relation between two versions through the exit status
    #[command(
        visible_alias = "test",
        long_about = "Check a relation between two versions through the exit status

Exits 0 when the relation holds and 1 when it does not.

Examples:
  rankver check 1.0.0-rc.1 lt 1.0.0
  if rankver check \"$CURRENT\" ge 2.3; then echo up to date; fi"
    )]
    Check {
        /// Left-hand version
        left: String,
        /// Relation: lt, le, eq, ne, ge, gt (or <, <=, ==, !=, >=, >)
        #[arg(value_enum)]
        relation: Relation,
        /// Right-hand version
        right: String,
    },

    /// Sort versions, oldest first (reads stdin when none are given)
    Sort {
        /// Versions to sort
        versions: Vec<String>,
        /// Newest first
        #[arg(short, long)]
        reverse: bool,
        /// Drop versions equal to an earlier one
        #[arg(short, long)]
        unique: bool,
        /// Print only the newest version
        #[arg(long, conflicts_with_all = ["reverse", "unique"])]
        latest: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show how a version is broken into ranks
    Parse {
        /// Version to inspect
        version: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn exit_with_error(e: &rankver::RankverError, use_color: bool) -> ! {
    eprint!("{}", format_error_for_stderr(e, use_color));
    std::process::exit(get_exit_code(e));
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    // Load configuration once at startup
    let mut config = match new_rankver_config() {
        Ok(config) => config,
        Err(e) => exit_with_error(&e, false),
    };

    let stdout_color = config.output.color && std::io::stdout().is_terminal();
    let stderr_color = config.output.color && std::io::stderr().is_terminal();
    config.output.color = stdout_color;
    colored::control::set_override(stdout_color);

    let result: Result<i32> = (|| match cli.command {
        Commands::Compare { left, right, json } => {
            let command = CompareCommand::new(&config)?;
            command.execute(&left, &right, json)?;
            Ok(0)
        }
        Commands::Check {
            left,
            relation,
            right,
        } => {
            let command = CheckCommand::new()?;
            let holds = command.execute(&left, relation, &right)?;
            Ok(if holds { 0 } else { 1 })
        }
        Commands::Sort {
            versions,
            reverse,
            unique,
            latest,
            json,
        } => {
            let command = SortCommand::new(&config)?;
            command.execute(&versions, reverse, unique, latest, json)?;
            Ok(0)
        }
        Commands::Parse { version, json } => {
            let command = ParseCommand::new(&config)?;
            command.execute(&version, json)?;
            Ok(0)
        }
    })();

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => exit_with_error(&e, stderr_color),
    }
}
