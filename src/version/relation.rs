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

use crate::version::{Version, compare};
use clap::ValueEnum;
use std::cmp::Ordering;
use std::fmt;

/// A relational operator between two versions, named so it can be passed
/// around as data (for example on the command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Relation {
    #[value(alias = "<")]
    Lt,
    #[value(alias = "<=")]
    Le,
    #[value(aliases = ["=", "=="])]
    Eq,
    #[value(alias = "!=")]
    Ne,
    #[value(alias = ">=")]
    Ge,
    #[value(alias = ">")]
    Gt,
}

impl Relation {
    /// Whether an ordering produced by [`compare`] satisfies this relation.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Relation::Lt => ordering.is_lt(),
            Relation::Le => ordering.is_le(),
            Relation::Eq => ordering.is_eq(),
            Relation::Ne => ordering.is_ne(),
            Relation::Ge => ordering.is_ge(),
            Relation::Gt => ordering.is_gt(),
        }
    }

    pub fn evaluate(self, left: &Version, right: &Version) -> bool {
        self.holds(compare(left, right))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Lt => "<",
            Relation::Le => "<=",
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Ge => ">=",
            Relation::Gt => ">",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
