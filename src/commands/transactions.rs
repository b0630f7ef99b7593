// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::models::{NewTransaction, TransactionFilter, TransactionKind};
use crate::utils::{
    end_of_day, fmt_money, maybe_print_json, parse_date, parse_non_negative_decimal, pretty_table,
    start_of_day,
};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_non_negative_decimal(sub.get_one::<String>("amount").unwrap())?;
    let kind: TransactionKind = sub.get_one::<String>("type").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let date = sub
        .get_one::<String>("date")
        .map(|s| parse_date(s))
        .transpose()?
        .map(start_of_day);

    let rec = store.add_transaction(NewTransaction {
        kind,
        amount,
        category,
        description,
        date,
    })?;
    println!(
        "Recorded {} {} in '{}' (id {})",
        rec.kind, rec.amount, rec.category, rec.id
    );
    Ok(())
}

pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<TransactionFilter> {
    let mut filter = TransactionFilter::default();
    if let Some(kind) = sub.get_one::<String>("type") {
        filter.kind = Some(kind.parse()?);
    }
    filter.category = sub.get_one::<String>("category").cloned();
    if let Some(from) = sub.get_one::<String>("from") {
        filter.date_from = Some(start_of_day(parse_date(from)?));
    }
    if let Some(to) = sub.get_one::<String>("to") {
        filter.date_to = Some(end_of_day(parse_date(to)?));
    }
    Ok(filter)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store.transactions(&filter_from_matches(sub)?)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.date.date_naive().to_string(),
                    t.kind.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    fmt_money(&t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Category", "Description", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}
