// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LoanError, LoanResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Longest term the HTTP service accepts, in years.
pub const MAX_SERVICE_LOAN_PERIOD: u32 = 40;

pub(crate) const HUNDRED: Decimal = dec!(100);

/// Display labels of an output row, in sheet column order.
pub const COLUMNS: [&str; 11] = [
    "Sample no,record no",
    "Customer Reference Number",
    "Customer Name",
    "City , State",
    "Purchase Value & Down Payment",
    "Loan Period AND Annuity Interest",
    "Guarantor Name",
    "Guarantor Reference Number",
    "Loan Amount AND Principal",
    "Total Interest for Loan",
    "Period & Property Insurance per Month",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    #[serde(deserialize_with = "string_or_number")]
    pub sample_no: String,
    pub customer_reference: String,
    pub customer_name: String,
    pub city_state: String,
    /// Base asset value.
    #[serde(rename = "A")]
    pub base_value: Decimal,
    pub down_payment: Decimal,
    pub loan_period: u32,
    pub annuity_interest: Decimal,
    pub purchase_value_reduction: Decimal,
    pub monthly_principal_reduction: Decimal,
    pub total_interest_reduction: Decimal,
    pub guarantor_name: String,
    pub guarantor_reference: String,
}

impl LoanInput {
    /// Checks every field constraint except the upper bound on `loan_period`.
    ///
    /// A zero `loan_period` passes here; the pipeline reports it as
    /// [`LoanError::DivisionByZero`].
    pub fn validate(&self) -> LoanResult<()> {
        for (field, value) in [
            ("sample_no", &self.sample_no),
            ("customer_reference", &self.customer_reference),
            ("customer_name", &self.customer_name),
            ("city_state", &self.city_state),
            ("guarantor_name", &self.guarantor_name),
            ("guarantor_reference", &self.guarantor_reference),
        ] {
            if value.trim().is_empty() {
                return Err(LoanError::invalid(field, "must not be empty"));
            }
        }
        if self.base_value <= Decimal::ZERO {
            return Err(LoanError::invalid("A", "must be greater than zero"));
        }
        for (field, value) in [
            ("down_payment", self.down_payment),
            ("annuity_interest", self.annuity_interest),
            ("purchase_value_reduction", self.purchase_value_reduction),
            ("monthly_principal_reduction", self.monthly_principal_reduction),
            ("total_interest_reduction", self.total_interest_reduction),
        ] {
            if value < Decimal::ZERO || value > HUNDRED {
                return Err(LoanError::invalid(
                    field,
                    format!("{} is outside 0..=100", value),
                ));
            }
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus the service's term limits.
    pub fn validate_for_service(&self) -> LoanResult<()> {
        self.validate()?;
        if self.loan_period == 0 || self.loan_period > MAX_SERVICE_LOAN_PERIOD {
            return Err(LoanError::invalid(
                "loan_period",
                format!(
                    "{} is outside 1..={}",
                    self.loan_period, MAX_SERVICE_LOAN_PERIOD
                ),
            ));
        }
        Ok(())
    }

    pub fn validate_with(&self, limits: Limits) -> LoanResult<()> {
        match limits {
            Limits::Script => self.validate(),
            Limits::Service => self.validate_for_service(),
        }
    }
}

/// Which set of field limits applies at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limits {
    /// Local runs: no upper bound on the term.
    Script,
    /// HTTP requests: term must be within `1..=40` years.
    Service,
}

/// Validates a whole batch up front so nothing is computed for a bad request.
pub fn validate_records(records: &[LoanInput], limits: Limits) -> LoanResult<()> {
    if records.is_empty() {
        return Err(LoanError::EmptyBatch);
    }
    for (i, record) in records.iter().enumerate() {
        record
            .validate_with(limits)
            .map_err(|e| e.for_record(i, &record.sample_no))?;
    }
    Ok(())
}

// JSON sample numbers arrive as text from the service and as integers from scripts.
// CSV input never reaches this; its cells are read as text by the importer.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

/// Annual insurance rate for a loan, or a definite "no band applies".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rate", rename_all = "snake_case")]
pub enum InsuranceRate {
    Rate(Decimal),
    NotApplicable,
}

impl InsuranceRate {
    pub fn value(self) -> Option<Decimal> {
        match self {
            InsuranceRate::Rate(r) => Some(r),
            InsuranceRate::NotApplicable => None,
        }
    }
}

impl fmt::Display for InsuranceRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsuranceRate::Rate(r) => write!(f, "{}", r),
            InsuranceRate::NotApplicable => f.write_str("NA"),
        }
    }
}

/// Unformatted results of the pipeline for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanFigures {
    pub purchase_value: Decimal,
    pub loan_amount: Decimal,
    pub principal: Decimal,
    pub total_interest: Decimal,
    pub loan_percentage: Decimal,
    pub rate: InsuranceRate,
    /// Rounded to cents; `None` when no rate band applies.
    pub insurance_monthly: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanOutputRow {
    pub sample_no: String,
    pub customer_reference: String,
    pub customer_name: String,
    pub city_state: String,
    pub purchase_value_and_down_payment: String,
    pub loan_period_and_annuity_interest: String,
    pub guarantor_name: String,
    pub guarantor_reference: String,
    pub loan_amount_and_principal: String,
    pub total_interest: String,
    pub insurance_per_month: String,
}

impl LoanOutputRow {
    /// Cell values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 11] {
        [
            &self.sample_no,
            &self.customer_reference,
            &self.customer_name,
            &self.city_state,
            &self.purchase_value_and_down_payment,
            &self.loan_period_and_annuity_interest,
            &self.guarantor_name,
            &self.guarantor_reference,
            &self.loan_amount_and_principal,
            &self.total_interest,
            &self.insurance_per_month,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        COLUMNS.into_iter().zip(self.values())
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == label).map(|(_, v)| v)
    }
}

impl Serialize for LoanOutputRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMNS.len()))?;
        for (label, value) in self.iter() {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// The record the one-shot script mode runs when no input file is given.
pub fn sample_records() -> Vec<LoanInput> {
    vec![LoanInput {
        sample_no: "1".into(),
        customer_reference: "CR12345".into(),
        customer_name: "John Doe".into(),
        city_state: "New York, NY".into(),
        base_value: dec!(88850508.30),
        down_payment: dec!(29),
        loan_period: 16,
        annuity_interest: dec!(8.7),
        purchase_value_reduction: dec!(14.56),
        monthly_principal_reduction: dec!(9.76),
        total_interest_reduction: dec!(15.42),
        guarantor_name: "Mark Doe".into(),
        guarantor_reference: "GR98765".into(),
    }]
}
