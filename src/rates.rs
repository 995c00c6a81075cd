// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Property insurance rate bands keyed on loan-to-value and term.
//!
//! The bands are kept exactly as the rate sheet lists them, including the
//! exact-81 row and the unlisted slivers between rows (`80.99..81`,
//! `81..81.01`, `90..90.01`, `95..=95.01`, below 70). Anything not listed is
//! [`InsuranceRate::NotApplicable`].

use crate::models::InsuranceRate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Terms up to and including this many years take the short-term rate.
pub const SHORT_TERM_MAX_YEARS: u32 = 25;

/// Loan-to-value above which no band applies at all.
pub const LTV_CEILING: Decimal = dec!(95.01);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LtvMatch {
    /// Inclusive on both ends.
    Between(Decimal, Decimal),
    Exactly(Decimal),
}

impl LtvMatch {
    pub fn contains(self, ltv: Decimal) -> bool {
        match self {
            LtvMatch::Between(lo, hi) => lo <= ltv && ltv <= hi,
            LtvMatch::Exactly(v) => ltv == v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateBand {
    pub ltv: LtvMatch,
    pub short_term: Decimal,
    pub long_term: Decimal,
}

impl RateBand {
    pub fn rate_for(&self, loan_period: u32) -> Decimal {
        if loan_period <= SHORT_TERM_MAX_YEARS {
            self.short_term
        } else {
            self.long_term
        }
    }
}

/// Checked in order; the first match wins.
pub const RATE_BANDS: [RateBand; 4] = [
    RateBand {
        ltv: LtvMatch::Between(dec!(70), dec!(80.99)),
        short_term: dec!(0.0032),
        long_term: dec!(0.0032),
    },
    RateBand {
        ltv: LtvMatch::Exactly(dec!(81)),
        short_term: dec!(0.0021),
        long_term: dec!(0.0032),
    },
    RateBand {
        ltv: LtvMatch::Between(dec!(81.01), dec!(90)),
        short_term: dec!(0.0041),
        long_term: dec!(0.0052),
    },
    RateBand {
        ltv: LtvMatch::Between(dec!(90.01), dec!(95)),
        short_term: dec!(0.0067),
        long_term: dec!(0.0078),
    },
];

pub fn compute_insurance_rate(loan_percentage: Decimal, loan_period: u32) -> InsuranceRate {
    if loan_percentage > LTV_CEILING {
        return InsuranceRate::NotApplicable;
    }
    RATE_BANDS
        .iter()
        .find(|band| band.ltv.contains(loan_percentage))
        .map(|band| InsuranceRate::Rate(band.rate_for(loan_period)))
        .unwrap_or(InsuranceRate::NotApplicable)
}
