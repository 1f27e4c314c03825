// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::UserProfile;
use crate::store::Store;
use crate::utils::parse_decimal;

/// Wholesale profile replacement, the terminal version of the setup form.
pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    let name = m.get_one::<String>("name").cloned().unwrap_or_default();
    let bank = m.get_one::<String>("bank").cloned().unwrap_or_default();
    let currency = m.get_one::<String>("currency").unwrap().to_uppercase();
    let balance = parse_decimal(m.get_one::<String>("balance").unwrap())?;
    let savings = parse_decimal(m.get_one::<String>("savings").unwrap())?;

    store.replace_profile(UserProfile {
        name: name.trim().to_string(),
        bank: bank.trim().to_string(),
        currency,
        balance,
        savings,
    });
    store.persist();
    println!("Account setup saved! Dashboard updated with new settings.");
    Ok(())
}
