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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_for_stderr, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankverError {
    #[error("Version string cannot be empty")]
    EmptyVersionString,

    #[error("Empty rank at position {position} in version '{version}'")]
    EmptyRank { version: String, position: usize },

    #[error("Unrecognized maturity marker '{marker}' in rank '{rank}'")]
    UnrecognizedMaturity { rank: String, marker: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RankverError {
    /// True for errors caused by a malformed version string.
    pub fn is_version_error(&self) -> bool {
        matches!(
            self,
            RankverError::EmptyVersionString
                | RankverError::EmptyRank { .. }
                | RankverError::UnrecognizedMaturity { .. }
        )
    }
}

impl From<::config::ConfigError> for RankverError {
    fn from(err: ::config::ConfigError) -> Self {
        RankverError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RankverError>;
