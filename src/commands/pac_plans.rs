// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::models::{Frequency, NewPacPlan};
use crate::pac;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_non_negative_decimal, parse_positive_decimal,
    pretty_table,
};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("pause", sub)) => set_active(store, sub, false)?,
        Some(("resume", sub)) => set_active(store, sub, true)?,
        Some(("remove", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let asset_name = sub.get_one::<String>("asset-name").unwrap().to_string();
    let asset_symbol = sub.get_one::<String>("symbol").unwrap().trim().to_string();
    let amount = parse_positive_decimal(sub.get_one::<String>("amount").unwrap())?;
    let frequency: Frequency = sub.get_one::<String>("frequency").unwrap().parse()?;
    let start_date = sub
        .get_one::<String>("start")
        .map(|s| parse_date(s))
        .transpose()?;
    let initial_capital =
        parse_non_negative_decimal(sub.get_one::<String>("initial-capital").unwrap())?;

    let rec = store.add_pac_plan(NewPacPlan {
        asset_name,
        asset_symbol,
        amount,
        frequency,
        start_date,
        initial_capital,
    })?;
    println!(
        "Created PAC {} ({} {} from {}), next execution {} (id {})",
        rec.asset_name, rec.amount, rec.frequency, rec.start_date, rec.next_execution_date, rec.id
    );
    Ok(())
}

/// Listing row with live-recomputed figures; the stored snapshot fields
/// are never shown.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PacPlanRow {
    id: String,
    asset_name: String,
    asset_symbol: String,
    amount: Decimal,
    frequency: Frequency,
    monthly_amount: Decimal,
    start_date: NaiveDate,
    next_execution_date: NaiveDate,
    total_invested: Decimal,
    is_active: bool,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = Utc::now().date_naive();
    let data: Vec<PacPlanRow> = store
        .pac_plans()?
        .into_iter()
        .map(|p| PacPlanRow {
            monthly_amount: pac::monthly_amount(p.amount, p.frequency),
            next_execution_date: pac::next_execution(p.start_date, p.frequency, today),
            total_invested: pac::total_invested(
                p.start_date,
                p.amount,
                p.frequency,
                p.initial_capital,
                today,
            ),
            id: p.id,
            asset_name: p.asset_name,
            asset_symbol: p.asset_symbol,
            amount: p.amount,
            frequency: p.frequency,
            start_date: p.start_date,
            is_active: p.is_active,
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    p.asset_name.clone(),
                    p.frequency.to_string(),
                    fmt_money(&p.amount),
                    fmt_money(&p.monthly_amount),
                    p.start_date.to_string(),
                    p.next_execution_date.to_string(),
                    fmt_money(&p.total_invested),
                    if p.is_active { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Id", "Asset", "Freq", "Amount", "Monthly", "Start", "Next", "Invested",
                    "Active",
                ],
                rows,
            )
        );
    }
    Ok(())
}

fn set_active(store: &Store, sub: &clap::ArgMatches, active: bool) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.set_pac_plan_active(id, active)?;
    println!("{} {}", if active { "Resumed" } else { "Paused" }, id);
    Ok(())
}

fn remove(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.remove_pac_plan(id)?;
    println!("Removed {}", id);
    Ok(())
}
