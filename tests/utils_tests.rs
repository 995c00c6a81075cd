// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use loansheet::utils::{fmt_amount, fmt_money, fmt_percent, parse_decimal, round_cents};
use rust_decimal_macros::dec;

#[test]
fn amounts_get_thousands_separators() {
    assert_eq!(fmt_amount(&dec!(0)), "0.00");
    assert_eq!(fmt_amount(&dec!(100)), "100.00");
    assert_eq!(fmt_amount(&dec!(123456)), "123,456.00");
    assert_eq!(fmt_amount(&dec!(1234567.891)), "1,234,567.89");
    assert_eq!(fmt_amount(&dec!(-1234.5)), "-1,234.50");
}

#[test]
fn cents_round_half_to_even() {
    assert_eq!(round_cents(dec!(0.125)), dec!(0.12));
    assert_eq!(round_cents(dec!(0.135)), dec!(0.14));
    assert_eq!(fmt_amount(&dec!(999.995)), "1,000.00");
}

#[test]
fn money_and_percent_labels() {
    assert_eq!(fmt_money(&dec!(1000.43302998912)), "$  1,000.43");
    assert_eq!(fmt_percent(&dec!(29)), "29%");
    assert_eq!(fmt_percent(&dec!(8.70)), "8.7%");
    assert_eq!(fmt_percent(&dec!(0)), "0%");
}

#[test]
fn parse_decimal_trims_and_reports() {
    assert_eq!(parse_decimal(" 80.99 ").unwrap(), dec!(80.99));
    let err = parse_decimal("eighty").unwrap_err();
    assert!(err.to_string().contains("eighty"));
}
