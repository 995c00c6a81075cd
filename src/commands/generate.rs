// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::process_batch;
use crate::commands::importer::records_from_args;
use crate::models::{Limits, validate_records};
use crate::sheet::{ExportFormat, SheetStyle, timestamped_file_name, write_rows};
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let format = ExportFormat::parse(
        m.get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("xlsx"),
    )?;
    let style = SheetStyle::from_name(
        m.get_one::<String>("style")
            .map(String::as_str)
            .unwrap_or("large"),
    )?;
    let limits = if m.get_flag("strict") {
        Limits::Service
    } else {
        Limits::Script
    };

    let records = records_from_args(m)?;
    validate_records(&records, limits)?;
    let rows = process_batch(&records)?;

    let out = match m.get_one::<String>("out") {
        Some(p) => PathBuf::from(p.trim()),
        None => PathBuf::from(timestamped_file_name(Utc::now(), format)),
    };
    write_rows(&rows, format, &style, &out)?;
    log::info!(
        "Wrote {} row(s) as {} to {}",
        rows.len(),
        format.extension(),
        out.display()
    );
    println!("Generated {}", out.display());
    Ok(())
}
