// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Ledger;
use crate::store::{Store, REFERENCE_MONTH};
use crate::utils::{currency_symbol, format_currency, month_label};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let words: Vec<&String> = m.get_many::<String>("message").unwrap().collect();
    let text = words
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", reply(&store.data, REFERENCE_MONTH, &text));
    Ok(())
}

/// First keyword rule that matches (case-insensitive substring) wins; the
/// fallback closes the table. Order matters: "budget" must come before
/// "zero-based" so tip requests land on the tip.
pub fn reply(data: &Ledger, month: &str, text: &str) -> String {
    let t = text.to_lowercase();
    let ccy = data.user.currency.as_str();
    let f = |amount| format_currency(amount, ccy);

    let body = if t.contains("income") {
        format!(
            "Your total income is {}. Monthly: {}. Keep earning!",
            f(data.total_income()),
            f(data.monthly_income(month))
        )
    } else if t.contains("expense") {
        format!(
            "Current expenses total: {}. Monthly: {}. Categorize to save more.",
            f(data.total_expenses()),
            f(data.monthly_expenses(month))
        )
    } else if t.contains("tip") || t.contains("advice") || t.contains("budget") {
        "Pro Tip: Use zero-based budgeting - assign every dollar a job. \
         Track needs (50%), wants (30%), savings (20%)."
            .to_string()
    } else if t.contains("goal") {
        format!(
            "You have {} goals set. Add one in the Goals section to track progress \
             toward financial dreams like saving for a house or vacation.",
            data.goals.len()
        )
    } else if t.contains("report") || t.contains("summary") {
        format!(
            "{} Summary: Income {}, Expenses {}, Net {}. Check the Reports section for details.",
            month_label(month),
            f(data.monthly_income(month)),
            f(data.monthly_expenses(month)),
            f(data.monthly_net(month))
        )
    } else if t.contains("net") || t.contains("worth") {
        format!(
            "Your net worth is {}. Track investments and savings to grow it.",
            f(data.net_worth())
        )
    } else if t.contains("currency") {
        format!(
            "You're using {} ({}). Change in Account Setup if needed.",
            ccy,
            currency_symbol(ccy)
        )
    } else if t.contains("bank") {
        format!(
            "Your bank is set to {}. Supports Canadian, Nigerian, and more.",
            data.user.bank
        )
    } else if t.contains("save") || t.contains("savings") {
        format!(
            "Your savings: {}. Aim for 3-6 months of expenses in an emergency fund.",
            f(data.user.savings)
        )
    } else if t.contains("zero-based") {
        "Zero-based budgeting means your income minus expenses equals zero. \
         Every dollar is planned - great for control!"
            .to_string()
    } else {
        "I can help with income, expenses, goals, reports, tips, or summaries. \
         What else about your budget?"
            .to_string()
    };
    format!("Got it! {}", body)
}
