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

use crate::error::{RankverError, Result};
use crate::version::Maturity;
use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

const QUARTERS_PER_UNIT: u32 = 4;

/// Value of one dot-separated rank: its number shifted by its maturity.
///
/// Numbers have no size limit. Equality, ordering and hashing only look at
/// the fused value, so two ranks spelled differently compare equal when they
/// land on the same quarter.
#[derive(Debug, Clone)]
pub struct RankValue {
    number: BigUint,
    maturity: Option<Maturity>,
    quarters: BigInt,
}

impl RankValue {
    pub fn new(number: BigUint, maturity: Option<Maturity>) -> Self {
        let mut quarters = BigInt::from(number.clone()) * QUARTERS_PER_UNIT;
        if let Some(maturity) = maturity {
            quarters += BigInt::from(maturity.offset_quarters());
        }
        Self {
            number,
            maturity,
            quarters,
        }
    }

    /// The implicit value of a missing trailing rank.
    pub fn zero() -> Self {
        Self::new(BigUint::zero(), None)
    }

    pub fn number(&self) -> &BigUint {
        &self.number
    }

    pub fn maturity(&self) -> Option<Maturity> {
        self.maturity
    }

    /// Fused value as an exact count of quarter units.
    pub fn quarters(&self) -> &BigInt {
        &self.quarters
    }

    /// Fused value as a float. Lossy for large numbers; ordering never goes
    /// through this.
    pub fn as_f64(&self) -> f64 {
        self.quarters
            .to_f64()
            .map_or(f64::NAN, |q| q / f64::from(QUARTERS_PER_UNIT))
    }

    pub fn is_zero(&self) -> bool {
        self.quarters.is_zero()
    }

    /// Parse a single rank token such as `"0"`, `"1b"`, `"0-rc"` or `"alpha"`.
    ///
    /// A token made only of ASCII digits is a plain number. Anything else has
    /// all of its digits and all of its letters collected independently, in
    /// token order, and the letters must name a [`Maturity`].
    pub fn parse(token: &str) -> Result<Self> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::new(parse_number(token), None));
        }

        let digits: String = token.chars().filter(char::is_ascii_digit).collect();
        let letters: String = token.chars().filter(|c| c.is_alphabetic()).collect();

        let maturity = Maturity::from_marker(&letters).ok_or_else(|| {
            RankverError::UnrecognizedMaturity {
                rank: token.to_string(),
                marker: letters.clone(),
            }
        })?;

        let number = parse_number(&digits);
        log::trace!("Rank '{token}' -> number {number}, maturity {maturity}");
        Ok(Self::new(number, Some(maturity)))
    }
}

// No digits at all means 0.
fn parse_number(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
}

impl PartialEq for RankValue {
    fn eq(&self, other: &Self) -> bool {
        self.quarters == other.quarters
    }
}

impl Eq for RankValue {}

impl PartialOrd for RankValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.quarters.cmp(&other.quarters)
    }
}

impl Hash for RankValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quarters.hash(state);
    }
}

impl fmt::Display for RankValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.quarters < BigInt::zero() { "-" } else { "" };
        let magnitude = self.quarters.magnitude();
        let whole = magnitude / QUARTERS_PER_UNIT;
        let fraction = match (magnitude % QUARTERS_PER_UNIT).to_u32() {
            Some(1) => ".25",
            Some(2) => ".5",
            Some(3) => ".75",
            _ => "",
        };
        write!(f, "{sign}{whole}{fraction}")
    }
}
