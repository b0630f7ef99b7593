// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salvadanaio::db::Store;
use salvadanaio::models::{
    ExpenseCategory, Frequency, InvestmentKind, NewExpense, NewInvestment, NewPacPlan,
    NewTransaction, TransactionKind,
};
use salvadanaio::pac;
use salvadanaio::summary::{portfolio_summary, portfolio_summary_as_of};

fn setup() -> Store {
    Store::open_in_memory().unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn add_income(store: &Store, amount: i64) {
    store
        .add_transaction(NewTransaction {
            kind: TransactionKind::Income,
            amount: Decimal::from(amount),
            category: "Stipendio".to_string(),
            description: String::new(),
            date: None,
        })
        .unwrap();
}

fn add_expense(store: &Store, amount: i64) {
    store
        .add_expense(NewExpense {
            description: "spesa".to_string(),
            amount: Decimal::from(amount),
            category: ExpenseCategory::Cibo,
            date: None,
            recurring: false,
        })
        .unwrap();
}

fn add_pac(store: &Store, amount: i64, start: NaiveDate) -> String {
    store
        .add_pac_plan(NewPacPlan {
            asset_name: "MSCI World ETF".to_string(),
            asset_symbol: "SWDA".to_string(),
            amount: Decimal::from(amount),
            frequency: Frequency::Monthly,
            start_date: Some(start),
            initial_capital: Decimal::ZERO,
        })
        .unwrap()
        .id
}

#[test]
fn empty_store_yields_all_zero_summary() {
    let store = setup();
    let s = portfolio_summary(&store).unwrap();
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expenses, Decimal::ZERO);
    assert_eq!(s.total_direct_investments, Decimal::ZERO);
    assert_eq!(s.total_pac_investments, Decimal::ZERO);
    assert_eq!(s.total_investments, Decimal::ZERO);
    assert_eq!(s.net_worth, Decimal::ZERO);
    assert_eq!(s.cash_flow, Decimal::ZERO);
}

#[test]
fn net_worth_adds_investments_on_top_of_cash_flow() {
    let store = setup();
    add_income(&store, 3000);
    add_expense(&store, 500);

    let s = portfolio_summary(&store).unwrap();
    assert_eq!(s.cash_flow, Decimal::from(2500));
    assert_eq!(s.net_worth, Decimal::from(2500));

    store
        .add_investment(NewInvestment {
            name: "Apple Inc.".to_string(),
            symbol: "AAPL".to_string(),
            kind: InvestmentKind::Azione,
            quantity: Decimal::from(10),
            purchase_price: Decimal::from(150),
            purchase_date: d(2024, 1, 15),
        })
        .unwrap();

    // Invested capital is counted in full on top of cash flow; it is not
    // deducted from a cash bucket.
    let s = portfolio_summary(&store).unwrap();
    assert_eq!(s.total_direct_investments, Decimal::from(1500));
    assert_eq!(s.cash_flow, Decimal::from(2500));
    assert_eq!(s.net_worth, Decimal::from(4000));
}

#[test]
fn only_income_transactions_count_as_income() {
    let store = setup();
    add_income(&store, 1000);
    store
        .add_transaction(NewTransaction {
            kind: TransactionKind::Expense,
            amount: Decimal::from(400),
            category: "varie".to_string(),
            description: String::new(),
            date: None,
        })
        .unwrap();

    let s = portfolio_summary(&store).unwrap();
    assert_eq!(s.total_income, Decimal::from(1000));
    // Expense-like transactions sit outside the expense collection and do
    // not move any total.
    assert_eq!(s.total_expenses, Decimal::ZERO);
}

#[test]
fn active_pac_plan_accrues_into_summary() {
    let store = setup();
    let today = d(2025, 6, 10);
    add_pac(&store, 100, d(2025, 3, 10));

    let s = portfolio_summary_as_of(&store, today).unwrap();
    assert_eq!(s.total_pac_investments, Decimal::from(300));
    assert_eq!(s.total_investments, Decimal::from(300));
    assert_eq!(s.net_worth, Decimal::from(300));
}

#[test]
fn inactive_plan_contributes_zero_even_though_accrual_is_nonzero() {
    let store = setup();
    let today = d(2025, 6, 10);
    let id = add_pac(&store, 100, d(2025, 3, 10));
    store.set_pac_plan_active(&id, false).unwrap();

    // Standalone accrual still computes for the paused plan.
    let plan = &store.pac_plans().unwrap()[0];
    assert_eq!(
        pac::total_invested(
            plan.start_date,
            plan.amount,
            plan.frequency,
            plan.initial_capital,
            today,
        ),
        Decimal::from(300)
    );

    let s = portfolio_summary_as_of(&store, today).unwrap();
    assert_eq!(s.total_pac_investments, Decimal::ZERO);

    store.set_pac_plan_active(&id, true).unwrap();
    let s = portfolio_summary_as_of(&store, today).unwrap();
    assert_eq!(s.total_pac_investments, Decimal::from(300));
}

#[test]
fn direct_and_pac_investments_compose() {
    let store = setup();
    let today = d(2025, 6, 10);
    add_income(&store, 3000);
    add_expense(&store, 500);
    add_pac(&store, 100, d(2025, 3, 10));
    store
        .add_investment(NewInvestment {
            name: "BTC".to_string(),
            symbol: "BTC".to_string(),
            kind: InvestmentKind::Crypto,
            quantity: Decimal::from(2),
            purchase_price: Decimal::from(400),
            purchase_date: d(2025, 1, 1),
        })
        .unwrap();

    let s = portfolio_summary_as_of(&store, today).unwrap();
    assert_eq!(s.total_direct_investments, Decimal::from(800));
    assert_eq!(s.total_pac_investments, Decimal::from(300));
    assert_eq!(s.total_investments, Decimal::from(1100));
    assert_eq!(s.net_worth, Decimal::from(3600));
}

#[test]
fn summary_is_idempotent_without_writes() {
    let store = setup();
    add_income(&store, 3000);
    add_expense(&store, 500);
    add_pac(&store, 100, d(2025, 3, 10));

    let today = d(2025, 6, 10);
    let first = portfolio_summary_as_of(&store, today).unwrap();
    let second = portfolio_summary_as_of(&store, today).unwrap();
    assert_eq!(first, second);
}
