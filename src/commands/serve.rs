// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! HTTP front end: a health check and a single workbook endpoint.
//!
//! Workbooks are built in memory and streamed back, so nothing touches disk.

use crate::calc::process_batch;
use crate::error::LoanError;
use crate::models::{Limits, LoanInput, validate_records};
use crate::sheet::{SheetStyle, XLSX_MIME, xlsx_bytes};
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tokio::net::TcpListener;

pub const DOWNLOAD_NAME: &str = "loan_calculation.xlsx";

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let host = m
        .get_one::<String>("host")
        .map(String::as_str)
        .unwrap_or("0.0.0.0")
        .to_string();
    let port = m.get_one::<u16>("port").copied().unwrap_or(10000);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(run(&host, port))
}

pub fn router() -> Router {
    // `get` also answers HEAD.
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/generate-excel", post(generate_excel_handler))
        .fallback(not_found_handler)
}

pub async fn run(host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Bind {}:{}", host, port))?;
    log::info!("Loan workbook API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

async fn ping_handler() -> Response {
    json_response(StatusCode::OK, json!({ "status": "alive" }))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn generate_excel_handler(Json(records): Json<Vec<LoanInput>>) -> Response {
    if let Err(err) = validate_records(&records, Limits::Service) {
        log::warn!("Rejected request: {}", err);
        return error_response(StatusCode::BAD_REQUEST, &err.to_string());
    }
    let rows = match process_batch(&records) {
        Ok(rows) => rows,
        Err(err) => {
            log::warn!("Computation failed: {}", err);
            return error_response(status_for(&err), &err.to_string());
        }
    };
    match xlsx_bytes(&rows, &SheetStyle::standard()) {
        Ok(bytes) => {
            log::info!(
                "Generated workbook: {} row(s), {} bytes",
                rows.len(),
                bytes.len()
            );
            (
                [
                    (header::CONTENT_TYPE, XLSX_MIME.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", DOWNLOAD_NAME),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            log::error!("Workbook generation failed: {:#}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &format!("{:#}", err))
        }
    }
}

fn status_for(err: &LoanError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(status, json!({ "detail": msg }))
}
