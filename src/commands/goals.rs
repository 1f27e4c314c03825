// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Collection;
use crate::projector::goal_percent;
use crate::store::Store;
use crate::utils::{format_currency, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("remove", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let desc = sub.get_one::<String>("desc").unwrap();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    let current = sub
        .get_one::<String>("current")
        .map(|s| parse_decimal(s))
        .transpose()?;

    let id = store.add_goal(desc, target, current)?;
    store.persist();
    println!(
        "Added goal '{}' with target {} (id: {})",
        desc.trim(),
        format_currency(target, &store.data.user.currency),
        id
    );
    Ok(())
}

fn update(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let current = parse_decimal(sub.get_one::<String>("current").unwrap())?;
    store.update_goal(id, current)?;
    store.persist();
    let goal = store.data.goals.iter().find(|g| g.id == id);
    if let Some(g) = goal {
        println!(
            "Goal '{}' now at {} of {} ({:.1}% complete)",
            g.desc,
            format_currency(g.current, &store.data.user.currency),
            format_currency(g.target, &store.data.user.currency),
            goal_percent(g)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct GoalRow {
    pub id: i64,
    pub desc: String,
    pub current: String,
    pub target: String,
    pub percent: Decimal,
}

pub fn rows(store: &Store) -> Vec<GoalRow> {
    let ccy = &store.data.user.currency;
    store
        .data
        .goals
        .iter()
        .map(|g| GoalRow {
            id: g.id,
            desc: g.desc.clone(),
            current: format_currency(g.current, ccy),
            target: format_currency(g.target, ccy),
            percent: goal_percent(g).round_dp(1),
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
            .map(|g| {
                vec![
                    g.id.to_string(),
                    g.desc.clone(),
                    g.current.clone(),
                    g.target.clone(),
                    format!("{}%", g.percent),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Goal", "Current", "Target", "Progress"], rows)
        );
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.remove(Collection::Goals, id) {
        store.persist();
        println!("Removed goal {}", id);
    } else {
        println!("No goal with id {}", id);
    }
    Ok(())
}
