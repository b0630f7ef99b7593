// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

use crate::models::{
    Budget, Expense, ExpenseFilter, Investment, NewBudget, NewExpense, NewInvestment, NewPacPlan,
    NewTransaction, PacPlan, Transaction, TransactionFilter,
};
use crate::pac;
use crate::utils::generate_id;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Salvadanaio", "salvadanaio"));

/// Key namespace shared with the original app's exports; backups produced
/// there restore here unchanged.
const DB_PREFIX: &str = "finance_app_";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("salvadanaio.sqlite"))
}

/// The six named record collections. Each persists independently as one
/// JSON array under its own key; together they are the entire durable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Transactions,
    Investments,
    PacPlans,
    Expenses,
    Budgets,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Users,
        Collection::Transactions,
        Collection::Investments,
        Collection::PacPlans,
        Collection::Expenses,
        Collection::Budgets,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Transactions => "transactions",
            Collection::Investments => "investments",
            Collection::PacPlans => "pac_plans",
            Collection::Expenses => "expenses",
            Collection::Budgets => "budgets",
        }
    }

    pub fn key(self) -> String {
        format!("{}{}", DB_PREFIX, self.name())
    }
}

/// Glue letting the generic store operations work per collection.
trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;
    fn id(&self) -> &str;
}

impl Record for Transaction {
    const COLLECTION: Collection = Collection::Transactions;
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Expense {
    const COLLECTION: Collection = Collection::Expenses;
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Investment {
    const COLLECTION: Collection = Collection::Investments;
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for PacPlan {
    const COLLECTION: Collection = Collection::PacPlans;
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Budget {
    const COLLECTION: Collection = Collection::Budgets;
    fn id(&self) -> &str {
        &self.id
    }
}

/// The record store. Constructed once at startup and passed by reference
/// into every command handler; tests build one over an in-memory database.
///
/// The store trusts its callers: field validation happens at the CLI
/// boundary, and the only errors surfaced here are environment failures
/// from the persistence layer.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open() -> Result<Self> {
        let path = db_path()?;
        let conn = Connection::open(&path)
            .with_context(|| format!("Open store at {}", path.display()))?;
        let store = Store { conn };
        store.init()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let store = Store {
            conn: Connection::open_in_memory()?,
        };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS collections(
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        for c in Collection::ALL {
            self.conn.execute(
                "INSERT OR IGNORE INTO collections(key, value) VALUES(?1, '[]')",
                params![c.key()],
            )?;
        }
        Ok(())
    }

    fn get_value(&self, c: Collection) -> Result<Option<String>> {
        let v = self
            .conn
            .query_row(
                "SELECT value FROM collections WHERE key=?1",
                params![c.key()],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    /// Stores a collection value verbatim. Also the restore path for the
    /// untyped `users` collection.
    pub fn raw_put(&self, c: Collection, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO collections(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![c.key(), value],
        )?;
        Ok(())
    }

    /// Collection contents as raw JSON, for backup. An unparsable or
    /// missing snapshot reads as an empty array, like every other read.
    pub fn raw_get(&self, c: Collection) -> Result<serde_json::Value> {
        let raw = self.get_value(c)?.unwrap_or_else(|| "[]".to_string());
        Ok(serde_json::from_str(&raw).unwrap_or_else(|_| serde_json::Value::Array(Vec::new())))
    }

    fn load<T: Record>(&self) -> Result<Vec<T>> {
        let raw = self
            .get_value(T::COLLECTION)?
            .unwrap_or_else(|| "[]".to_string());
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(_) => {
                // A corrupt snapshot reads as empty and is reset in place;
                // callers cannot distinguish the two.
                self.raw_put(T::COLLECTION, "[]")?;
                Ok(Vec::new())
            }
        }
    }

    fn save<T: Record>(&self, items: &[T]) -> Result<()> {
        self.raw_put(T::COLLECTION, &serde_json::to_string(items)?)
    }

    fn append<T: Record>(&self, item: T) -> Result<T> {
        let mut items = self.load::<T>()?;
        items.push(item.clone());
        self.save(&items)?;
        Ok(item)
    }

    /// Removing an absent id is a no-op success; the bool reports whether
    /// anything was actually dropped.
    fn remove_record<T: Record>(&self, id: &str) -> Result<bool> {
        let mut items = self.load::<T>()?;
        let before = items.len();
        items.retain(|i| i.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items)?;
        Ok(true)
    }

    fn update_record<T: Record>(&self, id: &str, mutate: impl FnOnce(&mut T)) -> Result<()> {
        let mut items = self.load::<T>()?;
        if let Some(item) = items.iter_mut().find(|i| i.id() == id) {
            mutate(item);
            self.save(&items)?;
        }
        Ok(())
    }

    // Transactions

    pub fn add_transaction(&self, new: NewTransaction) -> Result<Transaction> {
        let now = Utc::now();
        self.append(Transaction {
            id: generate_id(),
            kind: new.kind,
            amount: new.amount,
            category: new.category,
            description: new.description,
            date: new.date.unwrap_or(now),
            created_at: now,
        })
    }

    /// Transactions narrowed by the filter, most recent `date` first.
    pub fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut items = self.load::<Transaction>()?;
        if let Some(kind) = filter.kind {
            items.retain(|t| t.kind == kind);
        }
        if let Some(category) = &filter.category {
            items.retain(|t| &t.category == category);
        }
        if let Some(from) = filter.date_from {
            items.retain(|t| t.date >= from);
        }
        if let Some(to) = filter.date_to {
            items.retain(|t| t.date <= to);
        }
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }

    // Expenses

    pub fn add_expense(&self, new: NewExpense) -> Result<Expense> {
        let now = Utc::now();
        self.append(Expense {
            id: generate_id(),
            description: new.description,
            amount: new.amount,
            category: new.category,
            date: new.date.unwrap_or(now),
            recurring: new.recurring,
            created_at: now,
        })
    }

    pub fn expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let mut items = self.load::<Expense>()?;
        if let Some(category) = filter.category {
            items.retain(|e| e.category == category);
        }
        if let Some(recurring) = filter.recurring {
            items.retain(|e| e.recurring == recurring);
        }
        if let Some(from) = filter.date_from {
            items.retain(|e| e.date >= from);
        }
        if let Some(to) = filter.date_to {
            items.retain(|e| e.date <= to);
        }
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }

    // Investments

    pub fn add_investment(&self, new: NewInvestment) -> Result<Investment> {
        self.append(Investment {
            id: generate_id(),
            current_value: Some(new.quantity * new.purchase_price),
            name: new.name,
            symbol: new.symbol,
            kind: new.kind,
            quantity: new.quantity,
            purchase_price: new.purchase_price,
            purchase_date: new.purchase_date,
            current_price: None,
            performance: None,
            last_updated: None,
            created_at: Utc::now(),
        })
    }

    /// Insertion order; no ordering contract beyond that.
    pub fn investments(&self) -> Result<Vec<Investment>> {
        self.load()
    }

    pub fn update_investment_price(&self, id: &str, price: rust_decimal::Decimal) -> Result<()> {
        self.update_record::<Investment>(id, |inv| {
            inv.current_price = Some(price);
            inv.current_value = Some(inv.quantity * price);
            if !inv.purchase_price.is_zero() {
                inv.performance = Some(
                    (price - inv.purchase_price) / inv.purchase_price
                        * rust_decimal::Decimal::from(100),
                );
            }
            inv.last_updated = Some(Utc::now());
        })
    }

    pub fn remove_investment(&self, id: &str) -> Result<bool> {
        self.remove_record::<Investment>(id)
    }

    // PAC plans

    pub fn add_pac_plan(&self, new: NewPacPlan) -> Result<PacPlan> {
        let now = Utc::now();
        let today = now.date_naive();
        let start = new.start_date.unwrap_or(today);
        self.append(PacPlan {
            id: generate_id(),
            asset_name: new.asset_name,
            asset_symbol: new.asset_symbol,
            amount: new.amount,
            frequency: new.frequency,
            start_date: start,
            initial_capital: new.initial_capital,
            is_active: true,
            created_at: now,
            next_execution_date: pac::next_execution(start, new.frequency, today),
            // Snapshot at creation time only; see the type's docs.
            total_invested: pac::total_invested(
                start,
                new.amount,
                new.frequency,
                new.initial_capital,
                today,
            ),
        })
    }

    pub fn pac_plans(&self) -> Result<Vec<PacPlan>> {
        self.load()
    }

    pub fn set_pac_plan_active(&self, id: &str, active: bool) -> Result<()> {
        self.update_record::<PacPlan>(id, |plan| plan.is_active = active)
    }

    pub fn remove_pac_plan(&self, id: &str) -> Result<bool> {
        self.remove_record::<PacPlan>(id)
    }

    // Budgets

    pub fn add_budget(&self, new: NewBudget) -> Result<Budget> {
        self.append(Budget {
            id: generate_id(),
            category: new.category,
            limit: new.limit,
            spent: rust_decimal::Decimal::ZERO,
            created_at: Utc::now(),
        })
    }

    pub fn budgets(&self) -> Result<Vec<Budget>> {
        self.load()
    }

    pub fn update_budget_spent(&self, id: &str, amount: rust_decimal::Decimal) -> Result<()> {
        self.update_record::<Budget>(id, |b| b.spent += amount)
    }
}
