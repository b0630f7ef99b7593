// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::summary::portfolio_summary;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let s = portfolio_summary(store)?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &s)? {
        let rows = vec![
            vec!["Income".to_string(), fmt_money(&s.total_income)],
            vec!["Expenses".to_string(), fmt_money(&s.total_expenses)],
            vec![
                "Direct investments".to_string(),
                fmt_money(&s.total_direct_investments),
            ],
            vec![
                "PAC invested".to_string(),
                fmt_money(&s.total_pac_investments),
            ],
            vec![
                "Total investments".to_string(),
                fmt_money(&s.total_investments),
            ],
            vec!["Cash flow".to_string(), fmt_money(&s.cash_flow)],
            vec!["Net worth".to_string(), fmt_money(&s.net_worth)],
        ];
        println!("{}", pretty_table(&["", "Amount"], rows));
    }
    Ok(())
}
