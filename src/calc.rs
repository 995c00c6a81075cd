// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The per-record formula pipeline.
//!
//! Each figure depends only on the ones computed before it. Everything is
//! `Decimal`, and every step is checked so bad magnitudes surface as
//! [`LoanError::Overflow`] instead of a panic.

use crate::error::{LoanError, LoanResult};
use crate::models::{HUNDRED, LoanFigures, LoanInput, LoanOutputRow};
use crate::rates::compute_insurance_rate;
use crate::utils::{fmt_amount, fmt_money, fmt_percent, round_cents};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);

fn checked(value: Option<Decimal>, context: &str) -> LoanResult<Decimal> {
    value.ok_or_else(|| LoanError::Overflow {
        context: context.to_string(),
    })
}

/// `value × pct / 100`
fn pct_of(value: Decimal, pct: Decimal, context: &str) -> LoanResult<Decimal> {
    checked(
        value.checked_mul(pct).and_then(|v| v.checked_div(HUNDRED)),
        context,
    )
}

/// `value − value × pct / 100`
fn less_pct(value: Decimal, pct: Decimal, context: &str) -> LoanResult<Decimal> {
    let cut = pct_of(value, pct, context)?;
    checked(value.checked_sub(cut), context)
}

pub fn calculate_figures(input: &LoanInput) -> LoanResult<LoanFigures> {
    let purchase_value = pct_of(
        input.base_value,
        input.purchase_value_reduction,
        "purchase_value",
    )?;
    let loan_amount = pct_of(purchase_value, input.down_payment, "loan_amount")?;

    if input.loan_period == 0 {
        return Err(LoanError::DivisionByZero {
            context: "monthly principal: loan_period is 0".into(),
        });
    }
    let years = Decimal::from(input.loan_period);
    let base_principal = checked(
        loan_amount
            .checked_div(years)
            .and_then(|v| v.checked_div(MONTHS_PER_YEAR)),
        "base_principal",
    )?;
    let principal = less_pct(
        base_principal,
        input.monthly_principal_reduction,
        "principal",
    )?;

    let base_interest = checked(loan_amount.checked_mul(years), "base_interest")?;
    let interest_value = pct_of(base_interest, input.annuity_interest, "interest_value")?;
    let total_interest = less_pct(
        interest_value,
        input.total_interest_reduction,
        "total_interest",
    )?;

    let loan_percentage = checked(HUNDRED.checked_sub(input.down_payment), "loan_percentage")?;
    let rate = compute_insurance_rate(loan_percentage, input.loan_period);
    let insurance_monthly = rate
        .value()
        .map(|r| {
            checked(
                loan_amount
                    .checked_mul(r)
                    .and_then(|v| v.checked_div(MONTHS_PER_YEAR)),
                "insurance_monthly",
            )
            .map(round_cents)
        })
        .transpose()?;

    Ok(LoanFigures {
        purchase_value,
        loan_amount,
        principal,
        total_interest,
        loan_percentage,
        rate,
        insurance_monthly,
    })
}

pub fn process_record(input: &LoanInput) -> LoanResult<LoanOutputRow> {
    let f = calculate_figures(input)?;
    Ok(LoanOutputRow {
        sample_no: input.sample_no.clone(),
        customer_reference: input.customer_reference.clone(),
        customer_name: input.customer_name.clone(),
        city_state: input.city_state.clone(),
        purchase_value_and_down_payment: format!(
            "{} and {}",
            fmt_money(&f.purchase_value),
            fmt_percent(&input.down_payment)
        ),
        loan_period_and_annuity_interest: format!(
            "{} Years and {}",
            input.loan_period,
            fmt_percent(&input.annuity_interest)
        ),
        guarantor_name: input.guarantor_name.clone(),
        guarantor_reference: input.guarantor_reference.clone(),
        loan_amount_and_principal: format!(
            "{} , {}",
            fmt_money(&f.loan_amount),
            fmt_amount(&f.principal)
        ),
        total_interest: fmt_money(&f.total_interest),
        insurance_per_month: match f.insurance_monthly {
            Some(ref m) => fmt_money(m),
            None => "NA".to_string(),
        },
    })
}

/// Processes records in order; the first failure aborts the batch.
pub fn process_batch(records: &[LoanInput]) -> LoanResult<Vec<LoanOutputRow>> {
    if records.is_empty() {
        return Err(LoanError::EmptyBatch);
    }
    records
        .iter()
        .enumerate()
        .map(|(i, r)| process_record(r).map_err(|e| e.for_record(i, &r.sample_no)))
        .collect()
}
