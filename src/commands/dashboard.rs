// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::projector::{project, DashboardView};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_month, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let month = parse_month(m.get_one::<String>("month").unwrap())?;

    let view = project(&store.data, &month);
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }
    render(&view);
    Ok(())
}

fn bar(percent: Decimal, width: usize) -> String {
    let filled = (percent * Decimal::from(width as i64) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

fn render(view: &DashboardView) {
    println!("{}", view.welcome);
    println!();

    println!(
        "{}",
        pretty_table(
            &["Card", "Value"],
            vec![
                vec!["Bank".to_string(), view.bank.clone()],
                vec!["Currency".to_string(), view.currency.clone()],
                vec!["Balance".to_string(), view.balance.clone()],
                vec!["Savings".to_string(), view.savings.clone()],
                vec!["Owed to Me".to_string(), view.owed_to_me.clone()],
                vec!["I Owe".to_string(), view.i_owe.clone()],
                vec!["Upcoming".to_string(), view.upcoming_total.clone()],
                vec!["Net Worth".to_string(), view.net_worth.clone()],
                vec!["Total Income".to_string(), view.total_income.clone()],
                vec!["Total Expenses".to_string(), view.total_expenses.clone()],
            ],
        )
    );

    println!("Budget {} {}", bar(view.budget_bar_percent, 20), view.budget_text);
    println!();

    section("Income", &view.income_lines);
    section("Expenses", &view.expense_lines);
    section("Owing", &view.owing_lines);
    section("Upcoming", &view.upcoming_lines);

    if !view.goals.is_empty() {
        println!("Goals:");
        for g in &view.goals {
            println!(
                "  {} {}",
                bar(g.percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED), 20),
                g.line
            );
        }
        println!();
    }

    if !view.pie.is_empty() {
        let rows = view
            .pie
            .iter()
            .map(|s| vec![s.label.clone(), s.amount.round_dp(2).to_string()])
            .collect();
        println!("{}", pretty_table(&["Category", "Amount"], rows));
    }

    println!("{}", view.monthly_summary);
}

fn section(title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("{}:", title);
    for line in lines {
        println!("  {}", line);
    }
    println!();
}
