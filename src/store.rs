// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{
    Collection, Direction, EntryKind, ExpenseRecord, GoalRecord, HistoryEntry, IncomeRecord,
    Ledger, OwingRecord, UpcomingRecord, UserProfile,
};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "FinFlow", "finflow"));

pub const STORAGE_FILE: &str = "finflow.json";
pub const THEME_FILE: &str = "theme";

/// The original dashboard pins its clock; defaults and report months follow it.
pub const REFERENCE_DATE: &str = "2025-09-09";
pub const REFERENCE_MONTH: &str = "2025-09";

/// Input-validation failure. Never fatal: the store is unchanged when one is
/// returned.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{0}")]
    Validation(String),
}

fn require_text(field: &str, value: &str) -> Result<String, LedgerError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(LedgerError::Validation(format!(
            "Please enter a {}",
            field
        )));
    }
    Ok(v.to_string())
}

fn require_positive(field: &str, amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::Validation(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(())
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir();
    fs::create_dir_all(dir).context("Failed to create data dir")?;
    Ok(dir.to_path_buf())
}

pub fn data_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(STORAGE_FILE))
}

pub fn theme_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(THEME_FILE))
}

/// Theme preference lives in its own slot, independent of the ledger data.
pub fn load_theme(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(s) if s.trim() == "dark" => "dark".to_string(),
        _ => "light".to_string(),
    }
}

pub fn save_theme(path: &Path, theme: &str) -> Result<()> {
    fs::write(path, theme).with_context(|| format!("Write {}", path.display()))
}

/// The canonical financial state plus its persistence slot.
pub struct Store {
    path: PathBuf,
    pub data: Ledger,
}

/// Open the store at the platform data path, seeding the demo dataset on
/// first run.
pub fn open_or_seed() -> Result<Store> {
    Store::open_at(data_path()?)
}

impl Store {
    /// Load the snapshot at `path`, or seed and persist the demonstration
    /// dataset when no snapshot exists yet. Loading deserializes with
    /// per-field defaults, so older snapshots shallow-merge onto the current
    /// shape.
    pub fn open_at(path: PathBuf) -> Result<Store> {
        if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Read {}", path.display()))?;
            let data: Ledger = serde_json::from_str(&raw)
                .with_context(|| format!("Parse {}", path.display()))?;
            Ok(Store { path, data })
        } else {
            let store = Store {
                path,
                data: demo_ledger(),
            };
            store.save()?;
            Ok(store)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json).with_context(|| format!("Write {}", self.path.display()))
    }

    /// Save, but never fail the session over it: in-memory state stays
    /// authoritative and the failure is reported on stderr.
    pub fn persist(&self) {
        if let Err(e) = self.save() {
            eprintln!("warning: could not persist data: {:#}", e);
        }
    }

    // Monotonic over everything in the snapshot, so ids stay unique across
    // collections and across sessions.
    fn next_id(&self) -> i64 {
        let d = &self.data;
        let max = d
            .income
            .iter()
            .map(|r| r.id)
            .chain(d.expenses.iter().map(|r| r.id))
            .chain(d.owing.iter().map(|r| r.id))
            .chain(d.upcoming.iter().map(|r| r.id))
            .chain(d.goals.iter().map(|r| r.id))
            .chain(d.history.iter().map(|h| h.id))
            .max()
            .unwrap_or(0);
        max + 1
    }

    pub fn add_income(
        &mut self,
        desc: &str,
        amount: Decimal,
        date: &str,
    ) -> Result<i64, LedgerError> {
        let desc = require_text("description", desc)?;
        require_positive("Amount", amount)?;
        let id = self.next_id();
        let date = date.to_string();
        self.data.income.push(IncomeRecord {
            id,
            desc: desc.clone(),
            amount,
            date: date.clone(),
        });
        self.data.history.push(HistoryEntry {
            id,
            kind: EntryKind::Income,
            desc,
            amount,
            date,
        });
        Ok(id)
    }

    pub fn add_expense(
        &mut self,
        desc: &str,
        category: Option<&str>,
        amount: Decimal,
        date: &str,
    ) -> Result<i64, LedgerError> {
        let desc = require_text("description", desc)?;
        require_positive("Amount", amount)?;
        let category = match category.map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => "Other".to_string(),
        };
        let id = self.next_id();
        let date = date.to_string();
        self.data.expenses.push(ExpenseRecord {
            id,
            desc: desc.clone(),
            category,
            amount,
            date: date.clone(),
        });
        self.data.history.push(HistoryEntry {
            id,
            kind: EntryKind::Expense,
            desc,
            amount,
            date,
        });
        Ok(id)
    }

    pub fn add_owing(
        &mut self,
        name: &str,
        amount: Decimal,
        direction: Direction,
        date: &str,
    ) -> Result<i64, LedgerError> {
        let name = require_text("name", name)?;
        require_positive("Amount", amount)?;
        let id = self.next_id();
        let date = date.to_string();
        let (kind, desc) = match direction {
            Direction::TheyOweMe => (EntryKind::Income, format!("Owed by {}", name)),
            Direction::IOwe => (EntryKind::Expense, format!("Owe to {}", name)),
        };
        self.data.owing.push(OwingRecord {
            id,
            name,
            amount,
            direction,
            date: date.clone(),
        });
        self.data.history.push(HistoryEntry {
            id,
            kind,
            desc,
            amount,
            date,
        });
        Ok(id)
    }

    pub fn add_upcoming(
        &mut self,
        desc: &str,
        amount: Decimal,
        date: Option<&str>,
    ) -> Result<i64, LedgerError> {
        let desc = require_text("description", desc)?;
        require_positive("Amount", amount)?;
        let id = self.next_id();
        let date = date.unwrap_or(REFERENCE_DATE).to_string();
        self.data.upcoming.push(UpcomingRecord {
            id,
            desc: desc.clone(),
            amount,
            date: date.clone(),
        });
        self.data.history.push(HistoryEntry {
            id,
            kind: EntryKind::Expense,
            desc,
            amount,
            date,
        });
        Ok(id)
    }

    pub fn add_goal(
        &mut self,
        desc: &str,
        target: Decimal,
        current: Option<Decimal>,
    ) -> Result<i64, LedgerError> {
        let desc = require_text("description", desc)?;
        require_positive("Target", target)?;
        let current = current.unwrap_or(Decimal::ZERO);
        if current < Decimal::ZERO {
            return Err(LedgerError::Validation(
                "Current progress cannot be negative".to_string(),
            ));
        }
        let id = self.next_id();
        self.data.goals.push(GoalRecord {
            id,
            desc,
            target,
            current,
        });
        Ok(id)
    }

    pub fn update_goal(&mut self, id: i64, current: Decimal) -> Result<(), LedgerError> {
        if current < Decimal::ZERO {
            return Err(LedgerError::Validation(
                "Current progress cannot be negative".to_string(),
            ));
        }
        match self.data.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.current = current;
                Ok(())
            }
            None => Err(LedgerError::Validation(format!("No goal with id {}", id))),
        }
    }

    /// Remove a record by id. Returns false (a no-op, not an error) when the
    /// id is absent. Income and expense removals cascade to the mirrored
    /// history entry; owing and upcoming removals do not.
    pub fn remove(&mut self, collection: Collection, id: i64) -> bool {
        let removed = match collection {
            Collection::Income => remove_by_id(&mut self.data.income, |r| r.id, id),
            Collection::Expenses => remove_by_id(&mut self.data.expenses, |r| r.id, id),
            Collection::Owing => remove_by_id(&mut self.data.owing, |r| r.id, id),
            Collection::Upcoming => remove_by_id(&mut self.data.upcoming, |r| r.id, id),
            Collection::Goals => remove_by_id(&mut self.data.goals, |r| r.id, id),
        };
        if removed && matches!(collection, Collection::Income | Collection::Expenses) {
            self.data.history.retain(|h| h.id != id);
        }
        removed
    }

    pub fn replace_profile(&mut self, profile: UserProfile) {
        self.data.user = profile;
    }

    /// Clear everything to empty defaults (not the demo dataset) and discard
    /// the persisted snapshot.
    pub fn reset(&mut self) -> Result<()> {
        self.data = Ledger::default();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(anyhow::Error::new(e).context(format!("Remove {}", self.path.display())))
            }
        }
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, key: impl Fn(&T) -> i64, id: i64) -> bool {
    let before = items.len();
    items.retain(|r| key(r) != id);
    items.len() != before
}

impl Ledger {
    pub fn total_income(&self) -> Decimal {
        self.income.iter().map(|r| r.amount).sum()
    }

    pub fn total_expenses(&self) -> Decimal {
        self.expenses.iter().map(|r| r.amount).sum()
    }

    pub fn owed_to_user(&self) -> Decimal {
        self.owing
            .iter()
            .filter(|o| o.direction == Direction::TheyOweMe)
            .map(|o| o.amount)
            .sum()
    }

    pub fn user_owes(&self) -> Decimal {
        self.owing
            .iter()
            .filter(|o| o.direction == Direction::IOwe)
            .map(|o| o.amount)
            .sum()
    }

    pub fn total_upcoming(&self) -> Decimal {
        self.upcoming.iter().map(|r| r.amount).sum()
    }

    pub fn net_worth(&self) -> Decimal {
        self.user.balance + self.user.savings + self.owed_to_user() - self.user_owes()
            - self.total_upcoming()
            + self.total_income()
            - self.total_expenses()
    }

    pub fn monthly_income(&self, month: &str) -> Decimal {
        self.income
            .iter()
            .filter(|r| r.date.starts_with(month))
            .map(|r| r.amount)
            .sum()
    }

    pub fn monthly_expenses(&self, month: &str) -> Decimal {
        self.expenses
            .iter()
            .filter(|r| r.date.starts_with(month))
            .map(|r| r.amount)
            .sum()
    }

    pub fn monthly_net(&self, month: &str) -> Decimal {
        self.monthly_income(month) - self.monthly_expenses(month)
    }

    /// Category label to summed amount over every expense. Blank categories
    /// (possible in old snapshots) land in the "Other" bucket.
    pub fn expense_breakdown(&self) -> BTreeMap<String, Decimal> {
        breakdown(self.expenses.iter())
    }

    /// Like `expense_breakdown`, restricted to one `YYYY-MM` month.
    pub fn monthly_expense_breakdown(&self, month: &str) -> BTreeMap<String, Decimal> {
        breakdown(self.expenses.iter().filter(|e| e.date.starts_with(month)))
    }

    /// Expenses as a share of income, unclamped. Zero when there is no income.
    pub fn budget_used_percent(&self) -> Decimal {
        let income = self.total_income();
        if income.is_zero() {
            return Decimal::ZERO;
        }
        self.total_expenses() / income * Decimal::ONE_HUNDRED
    }
}

fn breakdown<'a>(expenses: impl Iterator<Item = &'a ExpenseRecord>) -> BTreeMap<String, Decimal> {
    let mut map = BTreeMap::new();
    for e in expenses {
        let cat = if e.category.trim().is_empty() {
            "Other"
        } else {
            e.category.as_str()
        };
        *map.entry(cat.to_string()).or_insert(Decimal::ZERO) += e.amount;
    }
    map
}

/// First-run dataset, mirrored into history the way live additions are.
pub fn demo_ledger() -> Ledger {
    let mut data = Ledger {
        user: UserProfile {
            name: String::new(),
            bank: "CIBC".to_string(),
            currency: "CAD".to_string(),
            balance: Decimal::new(525_075, 2),
            savings: Decimal::new(12_400, 0),
        },
        income: vec![
            IncomeRecord {
                id: 1,
                desc: "Salary".to_string(),
                amount: Decimal::new(5_000, 0),
                date: "2025-09-01".to_string(),
            },
            IncomeRecord {
                id: 2,
                desc: "Freelance Work".to_string(),
                amount: Decimal::new(500, 0),
                date: "2025-09-05".to_string(),
            },
        ],
        expenses: vec![
            ExpenseRecord {
                id: 3,
                desc: "Rent".to_string(),
                category: "Housing".to_string(),
                amount: Decimal::new(1_500, 0),
                date: "2025-09-02".to_string(),
            },
            ExpenseRecord {
                id: 4,
                desc: "Groceries".to_string(),
                category: "Food".to_string(),
                amount: Decimal::new(45_025, 2),
                date: "2025-09-07".to_string(),
            },
        ],
        owing: vec![
            OwingRecord {
                id: 5,
                name: "John".to_string(),
                amount: Decimal::new(150, 0),
                direction: Direction::TheyOweMe,
                date: "2025-09-03".to_string(),
            },
            OwingRecord {
                id: 6,
                name: "Sarah".to_string(),
                amount: Decimal::new(200, 0),
                direction: Direction::IOwe,
                date: "2025-09-04".to_string(),
            },
        ],
        upcoming: vec![
            UpcomingRecord {
                id: 7,
                desc: "Car Payment".to_string(),
                amount: Decimal::new(300, 0),
                date: "2025-09-15".to_string(),
            },
            UpcomingRecord {
                id: 8,
                desc: "Internet Bill".to_string(),
                amount: Decimal::new(85, 0),
                date: "2025-09-20".to_string(),
            },
        ],
        goals: vec![
            GoalRecord {
                id: 9,
                desc: "Emergency Fund".to_string(),
                target: Decimal::new(10_000, 0),
                current: Decimal::new(12_400, 0),
            },
            GoalRecord {
                id: 10,
                desc: "Vacation".to_string(),
                target: Decimal::new(5_000, 0),
                current: Decimal::new(1_000, 0),
            },
        ],
        history: Vec::new(),
    };
    data.history = data
        .income
        .iter()
        .map(|i| HistoryEntry {
            id: i.id,
            kind: EntryKind::Income,
            desc: i.desc.clone(),
            amount: i.amount,
            date: i.date.clone(),
        })
        .chain(data.expenses.iter().map(|e| HistoryEntry {
            id: e.id,
            kind: EntryKind::Expense,
            desc: e.desc.clone(),
            amount: e.amount,
            date: e.date.clone(),
        }))
        .chain(data.owing.iter().map(|o| HistoryEntry {
            id: o.id,
            kind: match o.direction {
                Direction::TheyOweMe => EntryKind::Income,
                Direction::IOwe => EntryKind::Expense,
            },
            desc: match o.direction {
                Direction::TheyOweMe => format!("Owed by {}", o.name),
                Direction::IOwe => format!("Owe to {}", o.name),
            },
            amount: o.amount,
            date: o.date.clone(),
        }))
        .chain(data.upcoming.iter().map(|u| HistoryEntry {
            id: u.id,
            kind: EntryKind::Expense,
            desc: u.desc.clone(),
            amount: u.amount,
            date: u.date.clone(),
        }))
        .collect();
    data
}
