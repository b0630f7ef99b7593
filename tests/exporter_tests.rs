// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use salvadanaio::db::Store;
use salvadanaio::models::{NewTransaction, TransactionFilter, TransactionKind};
use salvadanaio::{cli, commands::exporter};
use serde_json::json;
use tempfile::tempdir;

fn setup() -> Store {
    Store::open_in_memory().unwrap()
}

fn add_income(store: &Store, amount: i64) -> String {
    store
        .add_transaction(NewTransaction {
            kind: TransactionKind::Income,
            amount: Decimal::from(amount),
            category: "Stipendio".to_string(),
            description: String::new(),
            date: None,
        })
        .unwrap()
        .id
}

fn run_export(store: &Store, args: &[&str]) {
    let mut argv = vec!["salvadanaio", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn backup_contains_all_six_collections_and_timestamp() {
    let store = setup();
    add_income(&store, 3000);

    let dir = tempdir().unwrap();
    let out = dir.path().join("backup.json");
    run_export(&store, &["backup", "--out", &out.to_string_lossy()]);

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(doc.get("exportedAt").is_some());
    for key in [
        "users",
        "transactions",
        "investments",
        "pac_plans",
        "expenses",
        "budgets",
    ] {
        assert!(doc.get(key).unwrap().is_array(), "missing {}", key);
    }
    assert_eq!(doc["transactions"].as_array().unwrap().len(), 1);
    assert_eq!(doc["transactions"][0]["amount"], json!("3000"));
}

#[test]
fn restore_replace_round_trips_the_store() {
    let source = setup();
    let id = add_income(&source, 1234);

    let dir = tempdir().unwrap();
    let out = dir.path().join("backup.json");
    run_export(&source, &["backup", "--out", &out.to_string_lossy()]);

    let target = setup();
    add_income(&target, 999);
    run_export(
        &target,
        &["restore", "--in", &out.to_string_lossy(), "--replace"],
    );

    let listed = target.transactions(&TransactionFilter::default()).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].amount, Decimal::from(1234));
}

#[test]
fn restore_merge_keeps_existing_record_on_id_conflict() {
    let store = setup();
    let existing_id = add_income(&store, 100);

    // A backup carrying a conflicting copy of the existing record plus a
    // genuinely new one.
    let listed = store.transactions(&TransactionFilter::default()).unwrap();
    let mut conflicting = serde_json::to_value(&listed[0]).unwrap();
    conflicting["amount"] = json!("999");
    let mut incoming_new = conflicting.clone();
    incoming_new["id"] = json!("fresh-id");

    let doc = json!({
        "exportedAt": "2025-06-01T00:00:00Z",
        "transactions": [conflicting, incoming_new],
    });
    let dir = tempdir().unwrap();
    let path = dir.path().join("merge.json");
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

    run_export(&store, &["restore", "--in", &path.to_string_lossy()]);

    let after = store.transactions(&TransactionFilter::default()).unwrap();
    assert_eq!(after.len(), 2);
    let kept = after.iter().find(|t| t.id == existing_id).unwrap();
    assert_eq!(kept.amount, Decimal::from(100));
    let added = after.iter().find(|t| t.id == "fresh-id").unwrap();
    assert_eq!(added.amount, Decimal::from(999));
}

#[test]
fn transactions_export_as_json_array() {
    let store = setup();
    add_income(&store, 10);
    add_income(&store, 20);

    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.json");
    run_export(
        &store,
        &[
            "transactions",
            "--format",
            "json",
            "--out",
            &out.to_string_lossy(),
        ],
    );

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn transactions_export_as_csv_with_header() {
    let store = setup();
    add_income(&store, 10);

    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.csv");
    run_export(
        &store,
        &[
            "transactions",
            "--format",
            "csv",
            "--out",
            &out.to_string_lossy(),
        ],
    );

    let contents = std::fs::read_to_string(&out).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,type,category,description,amount"
    );
    assert_eq!(lines.count(), 1);
}
