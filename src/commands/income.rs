// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::models::Collection;
use crate::store::Store;
use crate::utils::{format_currency, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("remove", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let desc = sub.get_one::<String>("desc").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = sub.get_one::<String>("date").unwrap();
    parse_date(date)?;

    let id = store.add_income(desc, amount, date)?;
    store.persist();
    println!(
        "Recorded income '{}' of {} on {} (id: {})",
        desc.trim(),
        format_currency(amount, &store.data.user.currency),
        date,
        id
    );
    Ok(())
}

#[derive(Serialize)]
pub struct IncomeRow {
    pub id: i64,
    pub desc: String,
    pub amount: String,
    pub date: String,
}

pub fn rows(store: &Store) -> Vec<IncomeRow> {
    let ccy = &store.data.user.currency;
    store
        .data
        .income
        .iter()
        .map(|r| IncomeRow {
            id: r.id,
            desc: r.desc.clone(),
            amount: format_currency(r.amount, ccy),
            date: r.date.clone(),
        })
        .collect()
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = rows(store);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.desc.clone(),
                    r.amount.clone(),
                    r.date.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Description", "Amount", "Date"], rows)
        );
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.remove(Collection::Income, id) {
        store.persist();
        println!("Removed income {}", id);
    } else {
        println!("No income record with id {}", id);
    }
    Ok(())
}
