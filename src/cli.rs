// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("salvadanaio")
        .about("Local-first personal finance tracker: income, expenses, investments, PAC plans")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the store"))
        .subcommand(tx_cmd())
        .subcommand(expense_cmd())
        .subcommand(invest_cmd())
        .subcommand(pac_cmd())
        .subcommand(budget_cmd())
        .subcommand(json_flags(
            Command::new("summary").about("Portfolio summary: income, expenses, investments, net worth"),
        ))
        .subcommand(export_cmd())
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Income/expense transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(Arg::new("amount").required(true).help("Non-negative amount"))
                .arg(Arg::new("category").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("income")
                        .help("income|expense"),
                )
                .arg(Arg::new("description").long("description").default_value(""))
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions, most recent first")
                .arg(Arg::new("type").long("type").help("income|expense"))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("from").long("from").help("YYYY-MM-DD inclusive"))
                .arg(Arg::new("to").long("to").help("YYYY-MM-DD inclusive")),
        ))
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Categorized expenses")
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(Arg::new("amount").required(true).help("Non-negative amount"))
                .arg(
                    Arg::new("category")
                        .required(true)
                        .help("casa|trasporti|cibo|shopping|intrattenimento|salute|educazione|utenze|altro"),
                )
                .arg(Arg::new("description").required(true))
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                .arg(
                    Arg::new("recurring")
                        .long("recurring")
                        .action(ArgAction::SetTrue)
                        .help("Mark as recurring (informational only)"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List expenses, most recent first")
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("recurring").long("recurring").help("true|false"))
                .arg(Arg::new("from").long("from").help("YYYY-MM-DD inclusive"))
                .arg(Arg::new("to").long("to").help("YYYY-MM-DD inclusive")),
        ))
}

fn invest_cmd() -> Command {
    Command::new("invest")
        .about("Investment positions")
        .subcommand(
            Command::new("add")
                .about("Record a position; current value starts at cost basis")
                .arg(Arg::new("name").required(true))
                .arg(Arg::new("symbol").required(true))
                .arg(
                    Arg::new("type")
                        .required(true)
                        .help("azione|etf|crypto|obbligazione|commodity"),
                )
                .arg(Arg::new("quantity").required(true).help("Positive quantity"))
                .arg(Arg::new("price").required(true).help("Positive purchase price"))
                .arg(Arg::new("date").long("date").help("Purchase date, default today")),
        )
        .subcommand(json_flags(Command::new("list").about("List positions")))
        .subcommand(
            Command::new("reprice")
                .about("Update a position's current price")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("price").required(true)),
        )
        .subcommand(
            Command::new("remove")
                .about("Delete a position")
                .arg(Arg::new("id").required(true)),
        )
}

fn pac_cmd() -> Command {
    Command::new("pac")
        .about("PAC recurring accumulation plans")
        .subcommand(
            Command::new("add")
                .about("Create a plan")
                .arg(Arg::new("asset-name").required(true))
                .arg(Arg::new("symbol").required(true))
                .arg(Arg::new("amount").required(true).help("Positive per-period contribution"))
                .arg(Arg::new("frequency").required(true).help("weekly|monthly|quarterly"))
                .arg(Arg::new("start").long("start").help("Start date, default today"))
                .arg(
                    Arg::new("initial-capital")
                        .long("initial-capital")
                        .default_value("0")
                        .help("Capital already invested at start"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list").about("List plans with live accrued totals"),
        ))
        .subcommand(
            Command::new("pause")
                .about("Exclude a plan from summary totals")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("resume")
                .about("Re-include a paused plan")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("remove")
                .about("Delete a plan")
                .arg(Arg::new("id").required(true)),
        )
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Spending budgets")
        .subcommand(
            Command::new("add")
                .about("Create a budget")
                .arg(Arg::new("category").required(true))
                .arg(Arg::new("limit").required(true)),
        )
        .subcommand(json_flags(Command::new("list").about("List budgets")))
        .subcommand(
            Command::new("spend")
                .about("Accumulate spending against a budget")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("amount").required(true)),
        )
}

fn export_cmd() -> Command {
    Command::new("export")
        .about("Backup, restore, and tabular export")
        .subcommand(
            Command::new("backup")
                .about("Write the full store (all six collections) as one JSON document")
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("restore")
                .about("Load a backup document; merges by id unless --replace")
                .arg(Arg::new("in").long("in").required(true))
                .arg(
                    Arg::new("replace")
                        .long("replace")
                        .action(ArgAction::SetTrue)
                        .help("Overwrite each collection instead of merging"),
                ),
        )
        .subcommand(
            Command::new("transactions")
                .about("Export transactions as csv or json")
                .arg(Arg::new("format").long("format").default_value("json"))
                .arg(Arg::new("out").long("out").required(true)),
        )
}
