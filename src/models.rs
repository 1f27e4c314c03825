// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The singleton account profile; `setup` replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bank: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub savings: Decimal,
}

fn default_currency() -> String {
    "CAD".to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            bank: String::new(),
            currency: default_currency(),
            balance: Decimal::ZERO,
            savings: Decimal::ZERO,
        }
    }
}

/// Which side of a debt the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    TheyOweMe,
    IOwe,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TheyOweMe => write!(f, "they-owe-me"),
            Direction::IOwe => write!(f, "i-owe"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "they-owe-me" => Ok(Direction::TheyOweMe),
            "i-owe" => Ok(Direction::IOwe),
            other => Err(format!(
                "Unknown direction '{}' (use they-owe-me|i-owe)",
                other
            )),
        }
    }
}

/// Which way a history entry moves money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn sign(&self) -> &'static str {
        match self {
            EntryKind::Income => "+",
            EntryKind::Expense => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: i64,
    pub desc: String,
    pub amount: Decimal,
    pub date: String, // YYYY-MM-DD
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub desc: String,
    pub category: String,
    pub amount: Decimal,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwingRecord {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub direction: Direction,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingRecord {
    pub id: i64,
    pub desc: String,
    pub amount: Decimal,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub id: i64,
    pub desc: String,
    pub target: Decimal,
    pub current: Decimal,
}

/// Audit-log mirror of a financial record's creation. Shares the id of the
/// record that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub kind: EntryKind,
    pub desc: String,
    pub amount: Decimal,
    pub date: String,
}

/// The full persisted snapshot. Every field defaults independently so that
/// snapshots written by older versions shallow-merge onto current defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub user: UserProfile,
    #[serde(default)]
    pub income: Vec<IncomeRecord>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub owing: Vec<OwingRecord>,
    #[serde(default)]
    pub upcoming: Vec<UpcomingRecord>,
    #[serde(default)]
    pub goals: Vec<GoalRecord>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Names a removable record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Income,
    Expenses,
    Owing,
    Upcoming,
    Goals,
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Collection::Income),
            "expenses" => Ok(Collection::Expenses),
            "owing" => Ok(Collection::Owing),
            "upcoming" => Ok(Collection::Upcoming),
            "goals" => Ok(Collection::Goals),
            other => Err(format!("Unknown collection '{}'", other)),
        }
    }
}
