// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::store::Store;
use crate::utils::{
    format_currency, maybe_print_json, month_label, parse_month, pretty_table,
};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let data = &store.data;
    let ccy = &data.user.currency;
    println!(
        "{}: Income {} | Expenses {} | Net {}",
        month_label(&month),
        format_currency(data.monthly_income(&month), ccy),
        format_currency(data.monthly_expenses(&month), ccy),
        format_currency(data.monthly_net(&month), ccy)
    );
    Ok(())
}

#[derive(Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub spent: String,
}

fn categories(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;

    let data = &store.data;
    let breakdown = match &month {
        Some(m) => data.monthly_expense_breakdown(m),
        None => data.expense_breakdown(),
    };
    let rows: Vec<CategoryRow> = breakdown
        .into_iter()
        .map(|(category, amount)| CategoryRow {
            category,
            spent: format_currency(amount, &data.user.currency),
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let table_rows = rows
            .iter()
            .map(|r| vec![r.category.clone(), r.spent.clone()])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], table_rows));
    }
    Ok(())
}
