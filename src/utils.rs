// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Display symbol for a currency code. Unknown codes fall back to the raw
/// code; an empty code falls back to the CAD symbol.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "CAD" => "CA$",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        "NGN" => "₦",
        "" => "CA$",
        other => other,
    }
}

/// Grouped en-US style number with exactly two decimals, e.g. `12,400.00`.
pub fn format_amount(d: Decimal) -> String {
    let s = format!("{:.2}", d);
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s.as_str()),
    };
    let (int_part, frac) = rest.split_once('.').unwrap_or((rest, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, frac)
}

/// Currency symbol plus grouped amount, e.g. `CA$5,250.75`.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    format!("{}{}", currency_symbol(currency), format_amount(amount))
}

/// Human month label for a `YYYY-MM` string, e.g. `September 2025`. Falls
/// back to the raw input when it does not parse.
pub fn month_label(month: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d") {
        Ok(d) => d.format("%B %Y").to_string(),
        Err(_) => month.to_string(),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(Decimal::new(525075, 2)), "5,250.75");
        assert_eq!(format_amount(Decimal::new(1234567, 0)), "1,234,567.00");
        assert_eq!(format_amount(Decimal::new(-150000, 2)), "-1,500.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn symbols_fall_back_to_raw_code() {
        assert_eq!(currency_symbol("CAD"), "CA$");
        assert_eq!(currency_symbol("NGN"), "₦");
        assert_eq!(currency_symbol("CHF"), "CHF");
        assert_eq!(currency_symbol(""), "CA$");
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label("2025-09"), "September 2025");
        assert_eq!(month_label("not-a-month"), "not-a-month");
    }
}
