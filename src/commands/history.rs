// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::models::Ledger;
use crate::store::Store;
use crate::utils::{format_currency, maybe_print_json, parse_date, parse_month, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("view", sub)) => view(store, sub)?,
        Some(("export", sub)) => export(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct HistoryRow {
    pub id: i64,
    pub date: String,
    pub desc: String,
    pub amount: String,
    pub sign: String,
}

pub fn rows(store: &Store, date: Option<&str>) -> Vec<HistoryRow> {
    let ccy = &store.data.user.currency;
    store
        .data
        .history
        .iter()
        .filter(|h| date.map_or(true, |d| h.date == d))
        .map(|h| HistoryRow {
            id: h.id,
            date: h.date.clone(),
            desc: h.desc.clone(),
            amount: format_currency(h.amount, ccy),
            sign: h.kind.sign().to_string(),
        })
        .collect()
}

fn view(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let date = sub.get_one::<String>("date").map(|s| s.as_str());
    if let Some(d) = date {
        parse_date(d)?;
    }
    let data = rows(store, date);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|h| {
                vec![
                    h.date.clone(),
                    h.desc.clone(),
                    h.amount.clone(),
                    h.sign.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Amount", "+/-"], rows)
        );
    }
    Ok(())
}

/// One plain-text line per history entry: `date: desc amount`.
pub fn export_lines(data: &Ledger) -> Vec<String> {
    data.history
        .iter()
        .map(|h| {
            format!(
                "{}: {} {}",
                h.date,
                h.desc,
                format_currency(h.amount, &data.user.currency)
            )
        })
        .collect()
}

pub fn export_file_name(month: &str) -> String {
    format!("finflow-history-{}.txt", month)
}

fn export(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let dir = sub
        .get_one::<String>("dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let path = write_export(&store.data, &dir, &month)?;
    println!("Exported history to {}", path.display());
    Ok(())
}

pub fn write_export(data: &Ledger, dir: &Path, month: &str) -> Result<PathBuf> {
    let path = dir.join(export_file_name(month));
    let body = export_lines(data).join("\n");
    std::fs::write(&path, body).with_context(|| format!("Write {}", path.display()))?;
    Ok(path)
}
