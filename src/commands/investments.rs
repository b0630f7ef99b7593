// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::models::{InvestmentKind, NewInvestment};
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_positive_decimal, pretty_table,
};
use anyhow::Result;
use chrono::Utc;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("reprice", sub)) => reprice(store, sub)?,
        Some(("remove", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let symbol = sub.get_one::<String>("symbol").unwrap().trim().to_string();
    let kind: InvestmentKind = sub.get_one::<String>("type").unwrap().parse()?;
    let quantity = parse_positive_decimal(sub.get_one::<String>("quantity").unwrap())?;
    let purchase_price = parse_positive_decimal(sub.get_one::<String>("price").unwrap())?;
    let purchase_date = match sub.get_one::<String>("date") {
        Some(raw) => parse_date(raw)?,
        None => Utc::now().date_naive(),
    };

    let rec = store.add_investment(NewInvestment {
        name,
        symbol,
        kind,
        quantity,
        purchase_price,
        purchase_date,
    })?;
    println!(
        "Added {} x {} @ {} (id {})",
        rec.quantity, rec.symbol, rec.purchase_price, rec.id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store.investments()?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|i| {
                vec![
                    i.id.clone(),
                    i.symbol.clone(),
                    i.kind.to_string(),
                    i.quantity.to_string(),
                    fmt_money(&i.purchase_price),
                    fmt_money(&i.market_value()),
                    i.performance
                        .map(|p| format!("{:.2}%", p))
                        .unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Symbol", "Type", "Qty", "Buy Price", "Value", "Perf"],
                rows,
            )
        );
    }
    Ok(())
}

fn reprice(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let price = parse_positive_decimal(sub.get_one::<String>("price").unwrap())?;
    store.update_investment_price(id, price)?;
    println!("Repriced {} at {}", id, price);
    Ok(())
}

fn remove(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.remove_investment(id)?;
    println!("Removed {}", id);
    Ok(())
}
