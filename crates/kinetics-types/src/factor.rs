// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Stoichiometric Factor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rational stoichiometric coefficients.
//!
//! A factor scales how much a bound quantity changes per unit of reaction
//! rate. Factors built in `const` items are checked at compile time:
//!
//! ```
//! use kinetics_types::factor::Factor;
//! const HALF: Factor = Factor::new(1, 2);
//! assert_eq!(HALF.value(), 0.5);
//! ```
//!
//! ```compile_fail
//! use kinetics_types::factor::Factor;
//! const BROKEN: Factor = Factor::new(1, 0);
//! let _ = BROKEN;
//! ```

use crate::error::{KineticsError, KineticsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rational coefficient `numerator / denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Factor {
    pub numerator: u32,
    #[serde(default = "default_denominator")]
    pub denominator: u32,
}

fn default_denominator() -> u32 {
    1
}

impl Factor {
    /// Unit coefficient, 1/1.
    pub const ONE: Factor = Factor::new(1, 1);

    /// Panics on a zero denominator. In a `const` context that panic is a
    /// compile error.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        assert!(denominator != 0, "stoichiometric denominator must be non-zero");
        Factor {
            numerator,
            denominator,
        }
    }

    /// Integer coefficient `n/1`.
    pub const fn whole(numerator: u32) -> Self {
        Factor::new(numerator, 1)
    }

    /// Runtime-checked constructor for factors that come from configuration.
    pub fn try_new(numerator: u32, denominator: u32) -> KineticsResult<Self> {
        if denominator == 0 {
            return Err(KineticsError::ZeroDenominator { numerator });
        }
        Ok(Factor {
            numerator,
            denominator,
        })
    }

    #[inline]
    pub fn value(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// `self / other` as a float, the exchange ratio between two forms.
    #[inline]
    pub fn ratio(self, other: Factor) -> f64 {
        self.value() / other.value()
    }
}

impl Default for Factor {
    fn default() -> Self {
        Factor::ONE
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
