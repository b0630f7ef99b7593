// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::models::{ExpenseCategory, ExpenseFilter, NewExpense};
use crate::utils::{
    end_of_day, fmt_money, maybe_print_json, parse_date, parse_non_negative_decimal, pretty_table,
    start_of_day,
};
use anyhow::{Context, Result};

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
    let category: ExpenseCategory = sub.get_one::<String>("category").unwrap().parse()?;
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let date = sub
        .get_one::<String>("date")
        .map(|s| parse_date(s))
        .transpose()?
        .map(start_of_day);
    let recurring = sub.get_flag("recurring");

    let rec = store.add_expense(NewExpense {
        description,
        amount,
        category,
        date,
        recurring,
    })?;
    println!(
        "Recorded expense {} in '{}' (id {})",
        rec.amount, rec.category, rec.id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut filter = ExpenseFilter::default();
    if let Some(category) = sub.get_one::<String>("category") {
        filter.category = Some(category.parse()?);
    }
    if let Some(recurring) = sub.get_one::<String>("recurring") {
        filter.recurring = Some(
            recurring
                .parse()
                .with_context(|| format!("Invalid --recurring '{}', expected true|false", recurring))?,
        );
    }
    if let Some(from) = sub.get_one::<String>("from") {
        filter.date_from = Some(start_of_day(parse_date(from)?));
    }
    if let Some(to) = sub.get_one::<String>("to") {
        filter.date_to = Some(end_of_day(parse_date(to)?));
    }

    let data = store.expenses(&filter)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.clone(),
                    e.date.date_naive().to_string(),
                    e.category.to_string(),
                    e.description.clone(),
                    fmt_money(&e.amount),
                    if e.recurring { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Category", "Description", "Amount", "Recurring"],
                rows,
            )
        );
    }
    Ok(())
}
