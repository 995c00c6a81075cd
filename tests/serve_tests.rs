// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use loansheet::commands::serve;
use loansheet::sheet::XLSX_MIME;
use serde_json::{Value, json};
use tower::ServiceExt;

fn record(loan_period: u32) -> Value {
    json!({
        "sample_no": "1",
        "customer_reference": "CR12345",
        "customer_name": "John Doe",
        "city_state": "New York, NY",
        "A": 88850508.30,
        "down_payment": 29,
        "loan_period": loan_period,
        "annuity_interest": 8.7,
        "purchase_value_reduction": 14.56,
        "monthly_principal_reduction": 9.76,
        "total_interest_reduction": 15.42,
        "guarantor_name": "Mark Doe",
        "guarantor_reference": "GR98765"
    })
}

async fn post_records(body: Value) -> Response {
    serve::router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-excel")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn ping_reports_alive() {
    let resp = serve::router()
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!({ "status": "alive" }));
}

#[tokio::test]
async fn ping_answers_head() {
    let resp = serve::router()
        .oneshot(
            Request::builder()
                .method("HEAD")
                .uri("/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_batch_is_bad_request() {
    let resp = post_records(json!([])).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await, json!({ "detail": "No records provided" }));
}

#[tokio::test]
async fn out_of_range_term_is_bad_request() {
    let resp = post_records(json!([record(41)])).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("loan_period"), "{}", detail);
}

#[tokio::test]
async fn unrepresentable_figures_are_unprocessable() {
    let mut huge = record(40);
    huge["A"] = json!("79228162514264337593543950335");
    huge["purchase_value_reduction"] = json!(100);
    huge["down_payment"] = json!(100);
    huge["annuity_interest"] = json!(100);

    let resp = post_records(json!([huge])).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(resp).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Arithmetic overflow"), "{}", detail);
    assert!(detail.contains("record 1 (sample 1)"), "{}", detail);
}

#[tokio::test]
async fn malformed_payload_is_rejected() {
    let resp = post_records(json!({ "not": "a list" })).await;
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn valid_batch_returns_workbook() {
    let resp = post_records(json!([record(16), record(30)])).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        XLSX_MIME
    );
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("loan_calculation.xlsx"), "{}", disposition);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = serve::router()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "detail": "Not found" }));
}
