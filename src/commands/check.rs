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
use crate::version::{Relation, parse};
use log::info;

/// Evaluates `LEFT OP RIGHT` and reports the outcome only through the exit
/// status, for use in shell conditionals.
#[derive(Default)]
pub struct CheckCommand;

impl CheckCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn execute(&self, left: &str, relation: Relation, right: &str) -> Result<bool> {
        let holds = relation.evaluate(&parse(left)?, &parse(right)?);
        info!("{left} {relation} {right} is {holds}");
        Ok(holds)
    }
}
