// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a CLI argument names an enum variant that does not exist.
#[derive(Debug, thiserror::Error)]
#[error("unknown {what} '{value}'")]
pub struct ParseEnumError {
    what: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(ParseEnumError {
                what: "transaction type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    /// Defaults to the current instant when absent.
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Casa,
    Trasporti,
    Cibo,
    Shopping,
    Intrattenimento,
    Salute,
    Educazione,
    Utenze,
    Altro,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Casa,
        ExpenseCategory::Trasporti,
        ExpenseCategory::Cibo,
        ExpenseCategory::Shopping,
        ExpenseCategory::Intrattenimento,
        ExpenseCategory::Salute,
        ExpenseCategory::Educazione,
        ExpenseCategory::Utenze,
        ExpenseCategory::Altro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Casa => "casa",
            ExpenseCategory::Trasporti => "trasporti",
            ExpenseCategory::Cibo => "cibo",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Intrattenimento => "intrattenimento",
            ExpenseCategory::Salute => "salute",
            ExpenseCategory::Educazione => "educazione",
            ExpenseCategory::Utenze => "utenze",
            ExpenseCategory::Altro => "altro",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| ParseEnumError {
                what: "expense category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub date: DateTime<Utc>,
    /// Informational flag only; recurring expenses never spawn future records.
    pub recurring: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub date: Option<DateTime<Utc>>,
    pub recurring: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategory>,
    pub recurring: Option<bool>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentKind {
    Azione,
    Etf,
    Crypto,
    Obbligazione,
    Commodity,
}

impl InvestmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentKind::Azione => "azione",
            InvestmentKind::Etf => "etf",
            InvestmentKind::Crypto => "crypto",
            InvestmentKind::Obbligazione => "obbligazione",
            InvestmentKind::Commodity => "commodity",
        }
    }
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvestmentKind {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "azione" => Ok(InvestmentKind::Azione),
            "etf" => Ok(InvestmentKind::Etf),
            "crypto" => Ok(InvestmentKind::Crypto),
            "obbligazione" => Ok(InvestmentKind::Obbligazione),
            "commodity" => Ok(InvestmentKind::Commodity),
            other => Err(ParseEnumError {
                what: "investment type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: NaiveDate,
    /// Defaults to cost basis at creation; refreshed only by explicit repricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    /// Percent gain over purchase price, set on repricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Investment {
    /// Market value with the cost-basis fallback used everywhere a total is shown.
    pub fn market_value(&self) -> Decimal {
        self.current_value
            .unwrap_or(self.quantity * self.purchase_price)
    }
}

#[derive(Debug, Clone)]
pub struct NewInvestment {
    pub name: String,
    pub symbol: String,
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Quarterly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Quarterly => write!(f, "quarterly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            other => Err(ParseEnumError {
                what: "frequency",
                value: other.to_string(),
            }),
        }
    }
}

fn default_true() -> bool {
    true
}

/// A PAC (Piano di Accumulo Capitale) recurring contribution plan.
///
/// Only the declarative parameters are stored; there is no ledger of
/// individual contributions. `total_invested` is a snapshot taken at
/// creation and is never refreshed — live figures always come from
/// `pac::total_invested`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacPlan {
    pub id: String,
    pub asset_name: String,
    pub asset_symbol: String,
    /// Contribution per period.
    pub amount: Decimal,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub initial_capital: Decimal,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub next_execution_date: NaiveDate,
    pub total_invested: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewPacPlan {
    pub asset_name: String,
    pub asset_symbol: String,
    pub amount: Decimal,
    pub frequency: Frequency,
    /// Defaults to today when absent.
    pub start_date: Option<NaiveDate>,
    pub initial_capital: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBudget {
    pub category: String,
    pub limit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_direct_investments: Decimal,
    pub total_pac_investments: Decimal,
    pub total_investments: Decimal,
    pub net_worth: Decimal,
    pub cash_flow: Decimal,
}
