// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::models::NewBudget;
use crate::utils::{fmt_money, maybe_print_json, parse_non_negative_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("spend", sub)) => spend(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let limit = parse_non_negative_decimal(sub.get_one::<String>("limit").unwrap())?;
    let rec = store.add_budget(NewBudget { category, limit })?;
    println!("Budget '{}' = {} (id {})", rec.category, rec.limit, rec.id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store.budgets()?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|b| {
                vec![
                    b.id.clone(),
                    b.category.clone(),
                    fmt_money(&b.limit),
                    fmt_money(&b.spent),
                    fmt_money(&(b.limit - b.spent)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Category", "Limit", "Spent", "Remaining"], rows)
        );
    }
    Ok(())
}

fn spend(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let amount = parse_non_negative_decimal(sub.get_one::<String>("amount").unwrap())?;
    store.update_budget_spent(id, amount)?;
    println!("Added {} spent to {}", amount, id);
    Ok(())
}
