// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::rates::compute_insurance_rate;
use crate::utils::{maybe_print_json, parse_decimal};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::{Value, json};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let ltv = parse_decimal(m.get_one::<String>("ltv").context("--ltv is required")?)?;
    let years = *m.get_one::<u32>("years").context("--years is required")?;

    let out = rate_report(ltv, years);
    if maybe_print_json(m.get_flag("json"), &out)? {
        return Ok(());
    }
    println!("{}", compute_insurance_rate(ltv, years));
    Ok(())
}

/// The lookup as printed by `rate --json`.
pub fn rate_report(ltv: Decimal, years: u32) -> Value {
    json!({
        "loan_percentage": ltv,
        "loan_period": years,
        "rate": compute_insurance_rate(ltv, years),
    })
}
