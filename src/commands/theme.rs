// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store;

/// The theme preference is its own slot, independent of the ledger snapshot,
/// so a data reset leaves it alone.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = store::theme_path()?;
    match m.get_one::<String>("set") {
        Some(theme) => {
            store::save_theme(&path, theme)?;
            println!("Theme set to {}", theme);
        }
        None => println!("{}", store::load_theme(&path)),
    }
    Ok(())
}
