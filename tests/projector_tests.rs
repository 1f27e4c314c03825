// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finflow::models::{GoalRecord, Ledger, UserProfile};
use finflow::projector::{clamp_percent, goal_percent, project};
use finflow::store::{demo_ledger, Store, REFERENCE_MONTH};
use rust_decimal::Decimal;
use tempfile::{tempdir, TempDir};

fn empty_store(dir: &TempDir) -> Store {
    let path = dir.path().join("finflow.json");
    std::fs::write(&path, "{}").unwrap();
    Store::open_at(path).unwrap()
}

#[test]
fn demo_dashboard_formats_every_card() {
    let data = demo_ledger();
    let view = project(&data, REFERENCE_MONTH);

    assert_eq!(view.welcome, "Your Smart Budget Companion");
    assert_eq!(view.bank, "CIBC");
    assert_eq!(view.currency, "CAD");
    assert_eq!(view.balance, "CA$5,250.75");
    assert_eq!(view.savings, "CA$12,400.00");
    assert_eq!(view.owed_to_me, "CA$150.00");
    assert_eq!(view.i_owe, "CA$200.00");
    assert_eq!(view.upcoming_total, "CA$385.00");
    assert_eq!(view.total_income, "CA$5,500.00");
    assert_eq!(view.total_expenses, "CA$1,950.25");
    // 5250.75 + 12400 + 150 - 200 - 385 + 5500 - 1950.25
    assert_eq!(view.net_worth, "CA$20,765.50");
    assert_eq!(
        view.monthly_summary,
        "September 2025: Income CA$5,500.00 | Expenses CA$1,950.25 | Net CA$3,549.75"
    );
}

#[test]
fn welcome_is_personalized_when_the_profile_has_a_name() {
    let mut data = demo_ledger();
    data.user.name = "Ada".to_string();
    let view = project(&data, REFERENCE_MONTH);
    assert_eq!(view.welcome, "Welcome, Ada! Your Financial Journey Awaits!");
}

#[test]
fn budget_text_reports_unclamped_while_bar_is_clamped() {
    let dir = tempdir().unwrap();
    let mut store = empty_store(&dir);
    store
        .add_income("Gig", Decimal::from(100), "2025-09-01")
        .unwrap();
    store
        .add_expense("Rent", None, Decimal::from(250), "2025-09-02")
        .unwrap();

    let view = project(&store.data, REFERENCE_MONTH);
    assert_eq!(view.budget_used_percent, Decimal::from(250));
    assert_eq!(view.budget_bar_percent, Decimal::from(100));
    assert!(view.budget_text.starts_with("250.0% used"));
}

#[test]
fn goal_percent_guards_a_zero_target() {
    let goal = GoalRecord {
        id: 1,
        desc: "Broken".to_string(),
        target: Decimal::ZERO,
        current: Decimal::from(10),
    };
    assert_eq!(goal_percent(&goal), Decimal::ZERO);

    let over = GoalRecord {
        id: 2,
        desc: "Emergency Fund".to_string(),
        target: Decimal::from(10000),
        current: Decimal::from(12400),
    };
    assert_eq!(goal_percent(&over), Decimal::from(124));
    assert_eq!(clamp_percent(goal_percent(&over)), Decimal::from(100));
}

#[test]
fn pie_slices_cover_the_breakdown() {
    let data = demo_ledger();
    let view = project(&data, REFERENCE_MONTH);
    let total: Decimal = view.pie.iter().map(|s| s.amount).sum();
    assert_eq!(total, data.total_expenses());
    assert!(view.pie.iter().any(|s| s.label == "Housing"));
    assert!(view.pie.iter().any(|s| s.label == "Food"));
}

#[test]
fn monthly_series_matches_the_month() {
    let dir = tempdir().unwrap();
    let mut store = empty_store(&dir);
    store
        .add_income("Salary", Decimal::from(5000), "2025-09-01")
        .unwrap();
    store
        .add_income("Bonus", Decimal::from(1000), "2025-10-01")
        .unwrap();

    let view = project(&store.data, "2025-10");
    assert_eq!(view.monthly.month, "2025-10");
    assert_eq!(view.monthly.income, Decimal::from(1000));
    assert_eq!(view.monthly.expenses, Decimal::ZERO);
    assert_eq!(
        view.monthly_summary,
        "October 2025: Income CA$1,000.00 | Expenses CA$0.00 | Net CA$1,000.00"
    );
}

#[test]
fn unknown_currency_falls_back_to_the_raw_code() {
    let view = project(
        &Ledger {
            user: UserProfile {
                currency: "CHF".to_string(),
                ..UserProfile::default()
            },
            ..Ledger::default()
        },
        REFERENCE_MONTH,
    );
    assert_eq!(view.balance, "CHF0.00");
    assert_eq!(view.bank, "-");
}

#[test]
fn empty_sections_project_as_empty() {
    let view = project(&Ledger::default(), REFERENCE_MONTH);
    assert!(view.income_lines.is_empty());
    assert!(view.goals.is_empty());
    assert!(view.pie.is_empty());
    assert_eq!(view.budget_used_percent, Decimal::ZERO);
}
