// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Portfolio aggregation: one pass over a fresh snapshot of every
//! collection, folded into a single summary. No caching anywhere; two
//! back-to-back calls with no intervening writes return identical output.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::db::Store;
use crate::models::{PortfolioSummary, TransactionFilter, TransactionKind};
use crate::pac;

pub fn portfolio_summary(store: &Store) -> Result<PortfolioSummary> {
    portfolio_summary_as_of(store, Utc::now().date_naive())
}

pub fn portfolio_summary_as_of(store: &Store, today: NaiveDate) -> Result<PortfolioSummary> {
    let total_income: Decimal = store
        .transactions(&TransactionFilter {
            kind: Some(TransactionKind::Income),
            ..Default::default()
        })?
        .iter()
        .map(|t| t.amount)
        .sum();

    let total_expenses: Decimal = store
        .expenses(&Default::default())?
        .iter()
        .map(|e| e.amount)
        .sum();

    let total_direct_investments: Decimal = store
        .investments()?
        .iter()
        .map(|i| i.market_value())
        .sum();

    // Inactive plans are skipped entirely, whatever their accrual would be.
    let total_pac_investments: Decimal = store
        .pac_plans()?
        .iter()
        .filter(|p| p.is_active)
        .map(|p| pac::total_invested(p.start_date, p.amount, p.frequency, p.initial_capital, today))
        .sum();

    let total_investments = total_direct_investments + total_pac_investments;
    let cash_flow = total_income - total_expenses;

    // Invested capital is added on top of cash flow without being deducted
    // from it; this is the figure users have always seen, not a balance
    // sheet. Changing it needs a product decision.
    let net_worth = cash_flow + total_investments;

    Ok(PortfolioSummary {
        total_income,
        total_expenses,
        total_direct_investments,
        total_pac_investments,
        total_investments,
        net_worth,
        cash_flow,
    })
}
