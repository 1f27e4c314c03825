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
    let date = sub.get_one::<String>("date").map(|s| s.as_str());
    if let Some(d) = date {
        parse_date(d)?;
    }

    let id = store.add_upcoming(desc, amount, date)?;
    store.persist();
    let due = store
        .data
        .upcoming
        .last()
        .map(|u| u.date.clone())
        .unwrap_or_default();
    println!(
        "Recorded upcoming payment '{}' of {} due {} (id: {})",
        desc.trim(),
        format_currency(amount, &store.data.user.currency),
        due,
        id
    );
    Ok(())
}

#[derive(Serialize)]
pub struct UpcomingRow {
    pub id: i64,
    pub desc: String,
    pub amount: String,
    pub due: String,
}

pub fn rows(store: &Store) -> Vec<UpcomingRow> {
    let ccy = &store.data.user.currency;
    store
        .data
        .upcoming
        .iter()
        .map(|r| UpcomingRow {
            id: r.id,
            desc: r.desc.clone(),
            amount: format_currency(r.amount, ccy),
            due: r.date.clone(),
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
                    r.due.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Description", "Amount", "Due"], rows)
        );
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.remove(Collection::Upcoming, id) {
        store.persist();
        println!("Removed upcoming payment {}", id);
    } else {
        println!("No upcoming payment with id {}", id);
    }
    Ok(())
}
