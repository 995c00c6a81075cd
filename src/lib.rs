// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calc;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod rates;
pub mod sheet;
pub mod utils;

pub use calc::{calculate_figures, process_batch, process_record};
pub use error::{LoanError, LoanResult};
pub use models::{InsuranceRate, LoanInput, LoanOutputRow};
pub use rates::compute_insurance_rate;
