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

use crate::error::{ErrorContext, RankverError};
use colored::Colorize;

pub fn format_error_chain(error: &RankverError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}

/// Render an error for the terminal. With `use_color` off the output is the
/// same layout with no escape sequences.
pub fn format_error_with_color(error: &RankverError, use_color: bool) -> String {
    let context = ErrorContext::new(error);
    let paint = |text: &str, styled: colored::ColoredString| {
        if use_color {
            styled.to_string()
        } else {
            text.to_string()
        }
    };

    let mut output = format!("{} {error}\n", paint("Error:", "Error:".red().bold()));

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!(
            "\n{}\n",
            paint("Suggestions:", "Suggestions:".yellow().bold())
        ));
        for line in suggestion.lines().filter(|l| !l.trim().is_empty()) {
            let bullet = format!("• {line}");
            output.push_str(&paint(&bullet, bullet.as_str().cyan()));
            output.push('\n');
        }
    }

    output
}

/// Render an error for stderr. `use_color` is stderr's own choice and replaces
/// any colour override set for stdout output.
pub fn format_error_for_stderr(error: &RankverError, use_color: bool) -> String {
    colored::control::set_override(use_color);
    if use_color {
        format_error_with_color(error, true)
    } else {
        format!("{}\n", format_error_chain(error))
    }
}
