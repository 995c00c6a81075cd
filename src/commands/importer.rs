// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{LoanInput, sample_records};
use crate::utils::parse_decimal;
use anyhow::{Context, Result, anyhow};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Records from `--input`, or the built-in sample when the flag is absent.
pub fn records_from_args(m: &clap::ArgMatches) -> Result<Vec<LoanInput>> {
    match m.get_one::<String>("input") {
        Some(path) => load_records(Path::new(path.trim())),
        None => {
            log::info!("No --input given, using the built-in sample record");
            Ok(sample_records())
        }
    }
}

pub fn load_records(path: &Path) -> Result<Vec<LoanInput>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let records = match ext.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        _ => {
            return Err(anyhow!(
                "Unsupported input '{}' (expected .json or .csv)",
                path.display()
            ));
        }
    };
    log::debug!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// A JSON array of records; a lone object is read as a batch of one.
pub fn load_json(path: &Path) -> Result<Vec<LoanInput>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Open JSON {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Parse JSON {}", path.display()))?;
    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value::<LoanInput>(item)
                    .with_context(|| format!("Invalid record {} in {}", i + 1, path.display()))
            })
            .collect::<Result<Vec<_>>>()?,
        obj @ Value::Object(_) => vec![
            serde_json::from_value::<LoanInput>(obj)
                .with_context(|| format!("Invalid record in {}", path.display()))?,
        ],
        _ => {
            return Err(anyhow!(
                "Expected an array of records in {}",
                path.display()
            ));
        }
    };
    Ok(records)
}

/// A CSV line with every cell kept as written. Identifiers such as `007`
/// stay text, and amounts are parsed straight from the cell into `Decimal`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    sample_no: String,
    customer_reference: String,
    customer_name: String,
    city_state: String,
    #[serde(rename = "A")]
    base_value: String,
    down_payment: String,
    loan_period: String,
    annuity_interest: String,
    purchase_value_reduction: String,
    monthly_principal_reduction: String,
    total_interest_reduction: String,
    guarantor_name: String,
    guarantor_reference: String,
}

fn decimal_cell(field: &str, raw: &str) -> Result<Decimal> {
    parse_decimal(raw).with_context(|| format!("{} must be a decimal", field))
}

impl CsvRow {
    fn into_input(self) -> Result<LoanInput> {
        let loan_period = self
            .loan_period
            .parse::<u32>()
            .with_context(|| format!("Invalid loan_period '{}'", self.loan_period))?;
        Ok(LoanInput {
            base_value: decimal_cell("A", &self.base_value)?,
            down_payment: decimal_cell("down_payment", &self.down_payment)?,
            loan_period,
            annuity_interest: decimal_cell("annuity_interest", &self.annuity_interest)?,
            purchase_value_reduction: decimal_cell(
                "purchase_value_reduction",
                &self.purchase_value_reduction,
            )?,
            monthly_principal_reduction: decimal_cell(
                "monthly_principal_reduction",
                &self.monthly_principal_reduction,
            )?,
            total_interest_reduction: decimal_cell(
                "total_interest_reduction",
                &self.total_interest_reduction,
            )?,
            sample_no: self.sample_no,
            customer_reference: self.customer_reference,
            customer_name: self.customer_name,
            city_state: self.city_state,
            guarantor_name: self.guarantor_name,
            guarantor_reference: self.guarantor_reference,
        })
    }
}

pub fn load_csv(path: &Path) -> Result<Vec<LoanInput>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path.display()))?;

    let mut records = Vec::new();
    for (i, result) in rdr.deserialize::<CsvRow>().enumerate() {
        let rec = result
            .map_err(anyhow::Error::from)
            .and_then(CsvRow::into_input)
            .with_context(|| format!("Invalid record {} in {}", i + 1, path.display()))?;
        records.push(rec);
    }
    Ok(records)
}
