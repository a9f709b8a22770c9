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

use crate::error::RankverError;
use crate::version::Maturity;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a RankverError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a RankverError) -> Self {
        let (suggestion, details) = match error {
            RankverError::EmptyVersionString => {
                let suggestion = Some(
                    "Provide at least one rank, e.g. '1', '1.0' or '2.3.0-rc.1'.".to_string(),
                );
                (suggestion, None)
            }
            RankverError::EmptyRank { version, position } => {
                let suggestion = Some(
                    "Remove leading, trailing or doubled dots from the version.".to_string(),
                );
                let details = Some(format!(
                    "Rank {position} of '{version}' has nothing between its dots."
                ));
                (suggestion, details)
            }
            RankverError::UnrecognizedMaturity { rank, marker } => {
                let suggestion = Some(format!(
                    "Recognized maturity markers:\n{}",
                    Maturity::ALL
                        .iter()
                        .map(|m| format!("  - {}", m.names().join(", ")))
                        .collect::<Vec<_>>()
                        .join("\n")
                ));
                let details = if marker.is_empty() {
                    Some(format!(
                        "Rank '{rank}' mixes digits with symbols but carries no maturity letters."
                    ))
                } else {
                    Some(format!("Rank '{rank}' carries the letters '{marker}'."))
                };
                (suggestion, details)
            }
            RankverError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check config.toml in RANKVER_HOME and any RANKVER_* environment variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            RankverError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check file permissions and try again.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
