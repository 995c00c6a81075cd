// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rendering of output rows to `.xlsx`, CSV and JSON.

use crate::models::{COLUMNS, LoanOutputRow};
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Workbook};
use std::path::Path;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Column widths of the service layout, columns A through J. K keeps the default.
const STANDARD_WIDTHS: [f64; 10] = [
    25.71, 64.86, 39.71, 27.14, 47.14, 39.29, 38.43, 94.43, 46.86, 26.14,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidths {
    Uniform(f64),
    PerColumn(&'static [f64]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStyle {
    pub column_widths: ColumnWidths,
    pub row_height: f64,
    pub header_font_size: f64,
    pub data_font_size: f64,
}

impl SheetStyle {
    /// Layout used by the HTTP service.
    pub fn standard() -> Self {
        SheetStyle {
            column_widths: ColumnWidths::PerColumn(&STANDARD_WIDTHS),
            row_height: 18.75,
            header_font_size: 14.0,
            data_font_size: 14.0,
        }
    }

    /// Big fonts and big cells, for printing.
    pub fn large() -> Self {
        SheetStyle {
            column_widths: ColumnWidths::Uniform(34.0),
            row_height: 34.0,
            header_font_size: 16.0,
            data_font_size: 14.0,
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "large" => Ok(Self::large()),
            other => Err(anyhow!("Unknown style: {} (use standard|large)", other)),
        }
    }

    pub fn width_of(&self, col: usize) -> Option<f64> {
        match self.column_widths {
            ColumnWidths::Uniform(w) => Some(w),
            ColumnWidths::PerColumn(ws) => ws.get(col).copied(),
        }
    }
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(anyhow!("Unknown format: {} (use xlsx|csv|json)", other)),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// `loan_calculation_<unix seconds>.<ext>`
pub fn timestamped_file_name(now: DateTime<Utc>, format: ExportFormat) -> String {
    format!("loan_calculation_{}.{}", now.timestamp(), format.extension())
}

/// One header row of [`COLUMNS`], one styled data row per record, header frozen.
pub fn build_workbook(rows: &[LoanOutputRow], style: &SheetStyle) -> Result<Workbook> {
    let header = Format::new()
        .set_bold()
        .set_font_size(style.header_font_size)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();
    let data = Format::new()
        .set_font_size(style.data_font_size)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();

    for (col, label) in COLUMNS.iter().enumerate() {
        let col = col as ColNum;
        ws.write_string_with_format(0, col, *label, &header)?;
        if let Some(width) = style.width_of(col as usize) {
            ws.set_column_width(col, width)?;
        }
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as RowNum;
        for (col, value) in row.values().iter().enumerate() {
            ws.write_string_with_format(r, col as ColNum, *value, &data)?;
        }
    }
    for r in 0..=rows.len() {
        ws.set_row_height(r as RowNum, style.row_height)?;
    }
    ws.set_freeze_panes(1, 0)?;

    Ok(workbook)
}

pub fn xlsx_bytes(rows: &[LoanOutputRow], style: &SheetStyle) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(rows, style)?;
    let buf = workbook
        .save_to_buffer()
        .context("Failed to serialise workbook")?;
    Ok(buf)
}

pub fn write_xlsx(rows: &[LoanOutputRow], style: &SheetStyle, out: &Path) -> Result<()> {
    let mut workbook = build_workbook(rows, style)?;
    workbook
        .save(out)
        .with_context(|| format!("Write workbook {}", out.display()))?;
    Ok(())
}

pub fn write_csv(rows: &[LoanOutputRow], out: &Path) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(out).with_context(|| format!("Create CSV {}", out.display()))?;
    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.write_record(row.values())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(rows: &[LoanOutputRow], out: &Path) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(rows)?)
        .with_context(|| format!("Write JSON {}", out.display()))?;
    Ok(())
}

pub fn write_rows(
    rows: &[LoanOutputRow],
    format: ExportFormat,
    style: &SheetStyle,
    out: &Path,
) -> Result<()> {
    match format {
        ExportFormat::Xlsx => write_xlsx(rows, style, out),
        ExportFormat::Csv => write_csv(rows, out),
        ExportFormat::Json => write_json(rows, out),
    }
}
