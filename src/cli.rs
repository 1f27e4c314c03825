// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

use crate::store::{REFERENCE_DATE, REFERENCE_MONTH};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(clap::value_parser!(i64))
        .help("Record id")
}

fn amount_arg() -> Arg {
    Arg::new("amount")
        .long("amount")
        .required(true)
        .help("Amount (must be greater than zero)")
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .default_value(REFERENCE_DATE)
        .help("Date as YYYY-MM-DD")
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .default_value(REFERENCE_MONTH)
        .help("Month as YYYY-MM")
}

fn remove_cmd(noun: &'static str) -> Command {
    Command::new("remove")
        .about(format!("Remove a {} record by id", noun))
        .arg(id_arg())
}

pub fn build_cli() -> Command {
    Command::new("finflow")
        .about("FinFlow: a personal finance dashboard for the terminal")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("setup")
                .about("Save the account profile (replaces the previous one)")
                .arg(Arg::new("name").long("name").help("Your name"))
                .arg(Arg::new("bank").long("bank").help("Bank name"))
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .default_value("CAD")
                        .help("Currency code (CAD, USD, EUR, GBP, INR, NGN, ...)"),
                )
                .arg(
                    Arg::new("balance")
                        .long("balance")
                        .default_value("0")
                        .help("Starting balance"),
                )
                .arg(
                    Arg::new("savings")
                        .long("savings")
                        .default_value("0")
                        .help("Starting savings"),
                ),
        )
        .subcommand(
            Command::new("income")
                .about("Income records")
                .subcommand(
                    Command::new("add")
                        .about("Record income")
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .required(true)
                                .help("Description"),
                        )
                        .arg(amount_arg())
                        .arg(date_arg()),
                )
                .subcommand(json_flags(Command::new("list").about("List income records")))
                .subcommand(remove_cmd("income")),
        )
        .subcommand(
            Command::new("expense")
                .about("Expense records")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .required(true)
                                .help("Description"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category (defaults to Other)"),
                        )
                        .arg(amount_arg())
                        .arg(date_arg()),
                )
                .subcommand(json_flags(Command::new("list").about("List expense records")))
                .subcommand(remove_cmd("expense")),
        )
        .subcommand(
            Command::new("owing")
                .about("Money owed to you or by you")
                .subcommand(
                    Command::new("add")
                        .about("Record a debt")
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .required(true)
                                .help("Counterparty name"),
                        )
                        .arg(amount_arg())
                        .arg(
                            Arg::new("direction")
                                .long("direction")
                                .required(true)
                                .help("they-owe-me or i-owe"),
                        )
                        .arg(date_arg()),
                )
                .subcommand(json_flags(Command::new("list").about("List owing records")))
                .subcommand(remove_cmd("owing")),
        )
        .subcommand(
            Command::new("upcoming")
                .about("Upcoming payments")
                .subcommand(
                    Command::new("add")
                        .about("Record an upcoming payment")
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .required(true)
                                .help("Description"),
                        )
                        .arg(amount_arg())
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Due date as YYYY-MM-DD (defaults to the reference date)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List upcoming payments"),
                ))
                .subcommand(remove_cmd("upcoming")),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Add a savings goal")
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .required(true)
                                .help("Description"),
                        )
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .required(true)
                                .help("Target amount (must be greater than zero)"),
                        )
                        .arg(
                            Arg::new("current")
                                .long("current")
                                .help("Current progress amount (defaults to 0)"),
                        ),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update a goal's progress amount")
                        .arg(id_arg())
                        .arg(
                            Arg::new("current")
                                .long("current")
                                .required(true)
                                .help("New progress amount"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List savings goals")))
                .subcommand(remove_cmd("goal")),
        )
        .subcommand(
            Command::new("history")
                .about("The audit log of recorded transactions")
                .subcommand(json_flags(
                    Command::new("view").about("View history").arg(
                        Arg::new("date")
                            .long("date")
                            .help("Only entries dated exactly YYYY-MM-DD"),
                    ),
                ))
                .subcommand(
                    Command::new("export")
                        .about("Export history as a plain-text file")
                        .arg(
                            Arg::new("dir")
                                .long("dir")
                                .help("Directory to write into (defaults to the current one)"),
                        )
                        .arg(month_arg()),
                ),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Render the full dashboard")
                .arg(month_arg()),
        ))
        .subcommand(
            Command::new("report")
                .about("Monthly reports")
                .subcommand(
                    Command::new("summary")
                        .about("One-line monthly summary")
                        .arg(month_arg()),
                )
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Spend by category")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Restrict to a YYYY-MM month (all time when omitted)"),
                        ),
                )),
        )
        .subcommand(
            Command::new("chat")
                .about("Ask the budget advisor")
                .arg(
                    Arg::new("message")
                        .num_args(1..)
                        .required(true)
                        .help("Your message"),
                ),
        )
        .subcommand(
            Command::new("theme").about("Show or set the theme preference").arg(
                Arg::new("set")
                    .long("set")
                    .value_parser(["light", "dark"])
                    .help("Set the theme"),
            ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete all data and the saved snapshot")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the reset"),
                ),
        )
}
