// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{Collection, Store};
use crate::models::TransactionFilter;
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{Value, json};
use std::collections::HashSet;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("backup", sub)) => backup(store, sub),
        Some(("restore", sub)) => restore(store, sub),
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

/// Full-state backup: the six collection arrays plus an export timestamp,
/// as one JSON document. This is the entire durable state of the system.
fn backup(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let mut doc = serde_json::Map::new();
    doc.insert("exportedAt".to_string(), json!(Utc::now()));
    for c in Collection::ALL {
        doc.insert(c.name().to_string(), store.raw_get(c)?);
    }
    std::fs::write(out, serde_json::to_string_pretty(&Value::Object(doc))?)?;
    println!("Backup written to {}", out);
    Ok(())
}

fn restore(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("in").unwrap();
    let replace = sub.get_flag("replace");
    let raw = std::fs::read_to_string(path).with_context(|| format!("Read backup {}", path))?;
    let doc: Value =
        serde_json::from_str(&raw).with_context(|| format!("Parse backup {}", path))?;

    for c in Collection::ALL {
        let Some(incoming) = doc.get(c.name()).and_then(Value::as_array) else {
            continue;
        };
        if replace {
            store.raw_put(c, &serde_json::to_string(incoming)?)?;
        } else {
            merge_collection(store, c, incoming)?;
        }
    }
    println!(
        "Restored from {} ({})",
        path,
        if replace { "replace" } else { "merge" }
    );
    Ok(())
}

/// Merge by id: records already present win, incoming records with a new
/// (or no) id are appended.
fn merge_collection(store: &Store, c: Collection, incoming: &[Value]) -> Result<()> {
    let mut current = match store.raw_get(c)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    let ids: HashSet<String> = current
        .iter()
        .filter_map(|v| v.get("id").and_then(Value::as_str).map(str::to_string))
        .collect();
    for item in incoming {
        match item.get("id").and_then(Value::as_str) {
            Some(id) if ids.contains(id) => {}
            _ => current.push(item.clone()),
        }
    }
    store.raw_put(c, &serde_json::to_string(&current)?)
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let data = store.transactions(&TransactionFilter::default())?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "type", "category", "description", "amount"])?;
            for t in &data {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_rfc3339(),
                    t.kind.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    t.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&data)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
