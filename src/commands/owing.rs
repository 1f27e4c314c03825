// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::models::{Collection, Direction};
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
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let direction: Direction = sub
        .get_one::<String>("direction")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let date = sub.get_one::<String>("date").unwrap();
    parse_date(date)?;

    let id = store.add_owing(name, amount, direction, date)?;
    store.persist();
    let who = match direction {
        Direction::TheyOweMe => format!("{} owes you", name.trim()),
        Direction::IOwe => format!("you owe {}", name.trim()),
    };
    println!(
        "Recorded that {} {} (id: {})",
        who,
        format_currency(amount, &store.data.user.currency),
        id
    );
    Ok(())
}

#[derive(Serialize)]
pub struct OwingRow {
    pub id: i64,
    pub name: String,
    pub amount: String,
    pub direction: String,
    pub date: String,
}

pub fn rows(store: &Store) -> Vec<OwingRow> {
    let ccy = &store.data.user.currency;
    store
        .data
        .owing
        .iter()
        .map(|r| OwingRow {
            id: r.id,
            name: r.name.clone(),
            amount: format_currency(r.amount, ccy),
            direction: r.direction.to_string(),
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
                    r.name.clone(),
                    r.amount.clone(),
                    r.direction.clone(),
                    r.date.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Amount", "Direction", "Date"], rows)
        );
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.remove(Collection::Owing, id) {
        store.persist();
        println!("Removed owing record {}", id);
    } else {
        println!("No owing record with id {}", id);
    }
    Ok(())
}
