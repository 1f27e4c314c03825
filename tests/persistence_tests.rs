// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finflow::models::Direction;
use finflow::store::{load_theme, save_theme, Store};
use rust_decimal::Decimal;
use tempfile::tempdir;

#[test]
fn first_run_seeds_the_demo_dataset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("finflow.json");

    let store = Store::open_at(path.clone()).unwrap();
    assert!(path.exists());
    assert_eq!(store.data.user.bank, "CIBC");
    assert_eq!(store.data.user.currency, "CAD");
    assert_eq!(store.data.income.len(), 2);
    assert_eq!(store.data.expenses.len(), 2);
    assert_eq!(store.data.owing.len(), 2);
    assert_eq!(store.data.upcoming.len(), 2);
    assert_eq!(store.data.goals.len(), 2);
    // Every non-goal record is mirrored into history.
    assert_eq!(store.data.history.len(), 8);
    assert_eq!(store.data.total_income(), Decimal::from(5500));
    assert_eq!(store.data.total_expenses(), "1950.25".parse().unwrap());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("finflow.json");
    std::fs::write(&path, "{}").unwrap();

    let mut store = Store::open_at(path.clone()).unwrap();
    store
        .add_income("Salary", Decimal::from(5000), "2025-09-01")
        .unwrap();
    store
        .add_expense("Groceries", Some("Food"), "450.25".parse().unwrap(), "2025-09-07")
        .unwrap();
    store
        .add_owing("Sarah", Decimal::from(200), Direction::IOwe, "2025-09-04")
        .unwrap();
    store
        .add_upcoming("Internet Bill", Decimal::from(85), Some("2025-09-20"))
        .unwrap();
    store
        .add_goal("Vacation", Decimal::from(5000), Some(Decimal::from(1000)))
        .unwrap();
    store.save().unwrap();

    let reloaded = Store::open_at(path).unwrap();
    assert_eq!(reloaded.data, store.data);
}

#[test]
fn old_snapshots_shallow_merge_onto_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("finflow.json");
    // A snapshot written before most fields existed.
    std::fs::write(&path, r#"{"user":{"name":"Ada","balance":"12.50"}}"#).unwrap();

    let store = Store::open_at(path).unwrap();
    assert_eq!(store.data.user.name, "Ada");
    assert_eq!(store.data.user.balance, "12.50".parse().unwrap());
    // Missing fields come from defaults, not the demo dataset.
    assert_eq!(store.data.user.currency, "CAD");
    assert_eq!(store.data.user.bank, "");
    assert!(store.data.income.is_empty());
    assert!(store.data.history.is_empty());
}

#[test]
fn direction_round_trips_in_kebab_case() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("finflow.json");
    std::fs::write(&path, "{}").unwrap();

    let mut store = Store::open_at(path.clone()).unwrap();
    store
        .add_owing("John", Decimal::from(150), Direction::TheyOweMe, "2025-09-03")
        .unwrap();
    store.save().unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("they-owe-me"));

    let reloaded = Store::open_at(path).unwrap();
    assert_eq!(reloaded.data.owing[0].direction, Direction::TheyOweMe);
}

#[test]
fn theme_slot_is_independent_and_defaults_to_light() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme");

    assert_eq!(load_theme(&path), "light");
    save_theme(&path, "dark").unwrap();
    assert_eq!(load_theme(&path), "dark");

    // Unrecognized contents fall back to the default.
    std::fs::write(&path, "solarized").unwrap();
    assert_eq!(load_theme(&path), "light");
}
