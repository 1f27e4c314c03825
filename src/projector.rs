// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure projection of a ledger snapshot into every displayed value. No
//! caching, no incremental updates: the collections are tiny, so each call
//! re-derives everything from scratch.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Direction, GoalRecord, Ledger};
use crate::utils::{format_currency, month_label};

#[derive(Debug, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct GoalView {
    pub id: i64,
    pub desc: String,
    pub current: String,
    pub target: String,
    pub percent: Decimal,
    pub line: String,
}

/// The two-bar income/expense series for one month.
#[derive(Debug, Serialize)]
pub struct MonthlySeries {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub welcome: String,
    pub bank: String,
    pub currency: String,
    pub balance: String,
    pub savings: String,
    pub owed_to_me: String,
    pub i_owe: String,
    pub upcoming_total: String,
    pub net_worth: String,
    pub total_income: String,
    pub total_expenses: String,
    /// Unclamped, as reported in text.
    pub budget_used_percent: Decimal,
    /// Clamped to [0, 100] for the bar.
    pub budget_bar_percent: Decimal,
    pub budget_text: String,
    pub income_lines: Vec<String>,
    pub expense_lines: Vec<String>,
    pub owing_lines: Vec<String>,
    pub upcoming_lines: Vec<String>,
    pub goals: Vec<GoalView>,
    pub pie: Vec<PieSlice>,
    pub monthly: MonthlySeries,
    pub monthly_summary: String,
}

/// `current/target × 100`; zero when the target is zero (possible only in
/// hand-edited or legacy snapshots, since entry validation requires > 0).
pub fn goal_percent(goal: &GoalRecord) -> Decimal {
    if goal.target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    goal.current / goal.target * Decimal::ONE_HUNDRED
}

pub fn clamp_percent(p: Decimal) -> Decimal {
    p.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

pub fn project(data: &Ledger, month: &str) -> DashboardView {
    let ccy = data.user.currency.as_str();
    let f = |amount: Decimal| format_currency(amount, ccy);

    let welcome = if data.user.name.is_empty() {
        "Your Smart Budget Companion".to_string()
    } else {
        format!(
            "Welcome, {}! Your Financial Journey Awaits!",
            data.user.name
        )
    };
    let display_or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };

    let total_income = data.total_income();
    let total_expenses = data.total_expenses();
    let budget_used_percent = data.budget_used_percent();
    let budget_text = format!(
        "{:.1}% used (Income: {} | Expenses: {})",
        budget_used_percent,
        f(total_income),
        f(total_expenses)
    );

    let income_lines = data
        .income
        .iter()
        .map(|r| format!("{} - {}", r.desc, f(r.amount)))
        .collect();
    let expense_lines = data
        .expenses
        .iter()
        .map(|r| format!("{} [{}] - {}", r.desc, r.category, f(r.amount)))
        .collect();
    let owing_lines = data
        .owing
        .iter()
        .map(|r| {
            let sign = match r.direction {
                Direction::TheyOweMe => "+",
                Direction::IOwe => "-",
            };
            format!("{} - {} ({})", r.name, f(r.amount), sign)
        })
        .collect();
    let upcoming_lines = data
        .upcoming
        .iter()
        .map(|r| format!("{} - {} (due {})", r.desc, f(r.amount), r.date))
        .collect();

    let goals = data
        .goals
        .iter()
        .map(|g| {
            let percent = goal_percent(g);
            GoalView {
                id: g.id,
                desc: g.desc.clone(),
                current: f(g.current),
                target: f(g.target),
                percent,
                line: format!(
                    "{}: {} / {} ({:.1}% complete)",
                    g.desc,
                    f(g.current),
                    f(g.target),
                    percent
                ),
            }
        })
        .collect();

    let pie = data
        .expense_breakdown()
        .into_iter()
        .map(|(label, amount)| PieSlice { label, amount })
        .collect();

    let monthly_income = data.monthly_income(month);
    let monthly_expenses = data.monthly_expenses(month);
    let monthly_summary = format!(
        "{}: Income {} | Expenses {} | Net {}",
        month_label(month),
        f(monthly_income),
        f(monthly_expenses),
        f(monthly_income - monthly_expenses)
    );

    DashboardView {
        welcome,
        bank: display_or_dash(&data.user.bank),
        currency: display_or_dash(ccy),
        balance: f(data.user.balance),
        savings: f(data.user.savings),
        owed_to_me: f(data.owed_to_user()),
        i_owe: f(data.user_owes()),
        upcoming_total: f(data.total_upcoming()),
        net_worth: f(data.net_worth()),
        total_income: f(total_income),
        total_expenses: f(total_expenses),
        budget_used_percent,
        budget_bar_percent: clamp_percent(budget_used_percent),
        budget_text,
        income_lines,
        expense_lines,
        owing_lines,
        upcoming_lines,
        goals,
        pie,
        monthly: MonthlySeries {
            month: month.to_string(),
            income: monthly_income,
            expenses: monthly_expenses,
        },
        monthly_summary,
    }
}
