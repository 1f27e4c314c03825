// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finflow::commands::history;
use finflow::models::Direction;
use finflow::store::Store;
use finflow::{cli, store};
use rust_decimal::Decimal;
use tempfile::{tempdir, TempDir};

fn empty_store(dir: &TempDir) -> Store {
    let path = dir.path().join("finflow.json");
    std::fs::write(&path, "{}").unwrap();
    Store::open_at(path).unwrap()
}

fn populated_store(dir: &TempDir) -> Store {
    let mut store = empty_store(dir);
    store
        .add_income("Salary", Decimal::from(5000), "2025-09-01")
        .unwrap();
    store
        .add_expense("Rent", Some("Housing"), Decimal::from(1500), "2025-09-02")
        .unwrap();
    store
        .add_owing("John", Decimal::from(150), Direction::TheyOweMe, "2025-09-03")
        .unwrap();
    store
}

#[test]
fn export_lines_follow_the_plain_text_format() {
    let dir = tempdir().unwrap();
    let store = populated_store(&dir);

    let lines = history::export_lines(&store.data);
    assert_eq!(
        lines,
        vec![
            "2025-09-01: Salary CA$5,000.00",
            "2025-09-02: Rent CA$1,500.00",
            "2025-09-03: Owed by John CA$150.00",
        ]
    );
}

#[test]
fn export_file_is_named_for_the_month() {
    assert_eq!(
        history::export_file_name(store::REFERENCE_MONTH),
        "finflow-history-2025-09.txt"
    );
}

#[test]
fn export_command_writes_the_file() {
    let dir = tempdir().unwrap();
    let store = populated_store(&dir);
    let out_dir = dir.path().to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "finflow", "history", "export", "--dir", &out_dir, "--month", "2025-09",
    ]);
    if let Some(("history", hist_m)) = matches.subcommand() {
        history::handle(&store, hist_m).unwrap();
    } else {
        panic!("no history subcommand");
    }

    let path = dir.path().join("finflow-history-2025-09.txt");
    let contents = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        contents,
        "2025-09-01: Salary CA$5,000.00\n\
         2025-09-02: Rent CA$1,500.00\n\
         2025-09-03: Owed by John CA$150.00"
    );
}

#[test]
fn view_rows_filter_by_exact_date() {
    let dir = tempdir().unwrap();
    let store = populated_store(&dir);

    let all = history::rows(&store, None);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].sign, "+");
    assert_eq!(all[1].sign, "-");

    let one = history::rows(&store, Some("2025-09-02"));
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].desc, "Rent");

    assert!(history::rows(&store, Some("2025-12-25")).is_empty());
}
