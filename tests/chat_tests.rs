// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finflow::commands::chat::reply;
use finflow::store::{demo_ledger, REFERENCE_MONTH};

#[test]
fn income_questions_quote_the_totals() {
    let data = demo_ledger();
    let r = reply(&data, REFERENCE_MONTH, "What is my income right now?");
    assert!(r.starts_with("Got it! "));
    assert!(r.contains("Your total income is CA$5,500.00"));
    assert!(r.contains("Monthly: CA$5,500.00"));
}

#[test]
fn expense_questions_quote_the_totals() {
    let data = demo_ledger();
    let r = reply(&data, REFERENCE_MONTH, "how bad are my EXPENSES?");
    assert!(r.contains("Current expenses total: CA$1,950.25"));
}

#[test]
fn tip_requests_get_the_budgeting_tip() {
    let data = demo_ledger();
    let r = reply(&data, REFERENCE_MONTH, "any tip for me?");
    assert!(r.contains("Pro Tip"));
    // "budget" routes to the same tip, ahead of the zero-based rule.
    let r = reply(&data, REFERENCE_MONTH, "help me budget");
    assert!(r.contains("Pro Tip"));
}

#[test]
fn zero_based_rule_fires_when_no_tip_keyword_matches() {
    let data = demo_ledger();
    let r = reply(&data, REFERENCE_MONTH, "explain zero-based please");
    assert!(r.contains("Zero-based budgeting means"));
}

#[test]
fn goal_questions_count_goals() {
    let data = demo_ledger();
    let r = reply(&data, REFERENCE_MONTH, "show my goals");
    assert!(r.contains("You have 2 goals set"));
}

#[test]
fn summary_questions_quote_the_month() {
    let data = demo_ledger();
    let r = reply(&data, REFERENCE_MONTH, "give me a summary");
    assert!(r.contains("September 2025 Summary"));
    assert!(r.contains("Net CA$3,549.75"));
}

#[test]
fn net_worth_currency_and_bank_rules() {
    let data = demo_ledger();
    assert!(reply(&data, REFERENCE_MONTH, "what is my net worth")
        .contains("Your net worth is CA$20,765.50"));
    assert!(reply(&data, REFERENCE_MONTH, "which currency am I using")
        .contains("You're using CAD (CA$)"));
    assert!(reply(&data, REFERENCE_MONTH, "what bank am I with")
        .contains("Your bank is set to CIBC"));
    assert!(reply(&data, REFERENCE_MONTH, "how much did I save")
        .contains("Your savings: CA$12,400.00"));
}

#[test]
fn unknown_messages_get_the_fallback() {
    let data = demo_ledger();
    let r = reply(&data, REFERENCE_MONTH, "hello there");
    assert!(r.contains("I can help with income, expenses, goals, reports, tips, or summaries."));
}
