// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finflow::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = store::open_or_seed()?;

    match matches.subcommand() {
        Some(("setup", sub)) => commands::setup::handle(&mut store, sub)?,
        Some(("income", sub)) => commands::income::handle(&mut store, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut store, sub)?,
        Some(("owing", sub)) => commands::owing::handle(&mut store, sub)?,
        Some(("upcoming", sub)) => commands::upcoming::handle(&mut store, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut store, sub)?,
        Some(("history", sub)) => commands::history::handle(&store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("chat", sub)) => commands::chat::handle(&store, sub)?,
        Some(("theme", sub)) => commands::theme::handle(sub)?,
        Some(("reset", sub)) => {
            if sub.get_flag("yes") {
                store.reset()?;
                println!("All data cleared.");
            } else {
                println!(
                    "This deletes every record and the saved snapshot. Re-run with --yes to confirm."
                );
            }
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
