// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::process_batch;
use crate::commands::importer::records_from_args;
use crate::models::{COLUMNS, Limits, validate_records};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let limits = if m.get_flag("strict") {
        Limits::Service
    } else {
        Limits::Script
    };
    let records = records_from_args(m)?;
    validate_records(&records, limits)?;
    let rows = process_batch(&records)?;

    if maybe_print_json(m.get_flag("json"), &rows)? {
        return Ok(());
    }
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.values().iter().map(|v| v.to_string()).collect())
        .collect();
    println!("{}", pretty_table(&COLUMNS, data));
    Ok(())
}
