// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use loansheet::commands::rates::rate_report;
use loansheet::{cli, commands};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn rate_command_accepts_ltv_and_years() {
    let matches = cli::build_cli().get_matches_from([
        "loansheet", "rate", "--ltv", "81", "--years", "20", "--json",
    ]);
    if let Some(("rate", sub)) = matches.subcommand() {
        commands::rates::handle(sub).unwrap();
    } else {
        panic!("no rate subcommand");
    }
}

#[test]
fn rate_report_names_band_or_na() {
    let exact = rate_report(dec!(81), 20);
    assert_eq!(exact["loan_period"], json!(20));
    assert_eq!(exact["rate"], json!({ "kind": "rate", "rate": "0.0021" }));

    assert_eq!(
        rate_report(dec!(81), 30)["rate"],
        json!({ "kind": "rate", "rate": "0.0032" })
    );
    assert_eq!(
        rate_report(dec!(80.995), 20)["rate"],
        json!({ "kind": "not_applicable" })
    );
}

#[test]
fn rate_command_rejects_bad_ltv() {
    let matches =
        cli::build_cli().get_matches_from(["loansheet", "rate", "--ltv", "x", "--years", "20"]);
    if let Some(("rate", sub)) = matches.subcommand() {
        assert!(commands::rates::handle(sub).is_err());
    } else {
        panic!("no rate subcommand");
    }
}

#[test]
fn rate_years_must_be_numeric() {
    let res = cli::build_cli().try_get_matches_from([
        "loansheet", "rate", "--ltv", "80", "--years", "ten",
    ]);
    assert!(res.is_err());
}

#[test]
fn compute_command_runs_builtin_sample() {
    let matches = cli::build_cli().get_matches_from(["loansheet", "compute", "--strict"]);
    if let Some(("compute", sub)) = matches.subcommand() {
        commands::compute::handle(sub).unwrap();
    } else {
        panic!("no compute subcommand");
    }
}

#[test]
fn serve_defaults_to_port_10000() {
    let matches = cli::build_cli().get_matches_from(["loansheet", "serve"]);
    let (_, sub) = matches.subcommand().unwrap();
    assert_eq!(sub.get_one::<u16>("port").copied(), Some(10000));
    assert_eq!(
        sub.get_one::<String>("host").map(String::as_str),
        Some("0.0.0.0")
    );
}
