// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .help("Records to process (.json array or .csv with a header row); defaults to the built-in sample")
}

fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Apply the HTTP service limits (loan_period within 1..=40)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

pub fn build_cli() -> Command {
    command!()
        .about("Loan amortization figures, insurance rate bands and styled spreadsheets")
        .subcommand(
            Command::new("generate")
                .about("Compute records and write a spreadsheet")
                .arg(input_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .default_value("xlsx")
                        .help("xlsx|csv|json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output path; defaults to loan_calculation_<unix time>.<ext>"),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .default_value("large")
                        .help("Workbook layout: standard|large"),
                )
                .arg(strict_arg()),
        )
        .subcommand(
            Command::new("compute")
                .about("Compute records and print the output rows")
                .arg(input_arg())
                .arg(strict_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("rate")
                .about("Look up the annual property insurance rate")
                .arg(
                    Arg::new("ltv")
                        .long("ltv")
                        .required(true)
                        .help("Loan-to-value percentage, i.e. 100 - down payment"),
                )
                .arg(
                    Arg::new("years")
                        .long("years")
                        .required(true)
                        .value_parser(value_parser!(u32))
                        .help("Loan period in years"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP service")
                .arg(
                    Arg::new("host")
                        .long("host")
                        .env("LOANSHEET_HOST")
                        .default_value("0.0.0.0"),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .env("LOANSHEET_PORT")
                        .default_value("10000")
                        .value_parser(value_parser!(u16)),
                ),
        )
}
