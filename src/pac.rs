// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Accrual math for PAC (recurring contribution) plans.
//!
//! Nothing here touches the store: every function is pure over the plan's
//! declarative parameters and an explicit `today`, so callers recompute on
//! every read instead of trusting any cached figure.

use chrono::{Duration, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Frequency;

/// Average period lengths used for elapsed-period counting.
///
/// NOTE: `next_execution` steps by true calendar months while
/// `elapsed_periods` divides by these averages, so the two can disagree
/// near month boundaries (a plan whose next execution just passed may
/// still count zero elapsed periods). That mismatch is long-standing
/// user-visible behavior; do not reconcile one side to the other without
/// a product decision. Pinned by
/// `pac_tests::calendar_and_average_math_disagree_near_month_boundaries`.
pub const AVG_DAYS_PER_MONTH: f64 = 30.44;
pub const AVG_DAYS_PER_QUARTER: f64 = 91.31;

fn advance(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        // Fixed seven-day stride.
        Frequency::Weekly => date
            .checked_add_signed(Duration::days(7))
            .unwrap_or(NaiveDate::MAX),
        // Calendar months, clamped: Jan 31 + 1 month = Feb 28/29.
        Frequency::Monthly => date
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX),
        Frequency::Quarterly => date
            .checked_add_months(Months::new(3))
            .unwrap_or(NaiveDate::MAX),
    }
}

/// First scheduled contribution date strictly after `today`.
///
/// Steps forward from `start` one period at a time; a start date in the
/// future is returned as-is. The overflow clamp in `advance` keeps the
/// loop finite for any input.
pub fn next_execution(start: NaiveDate, frequency: Frequency, today: NaiveDate) -> NaiveDate {
    let mut date = start;
    while date <= today {
        date = advance(date, frequency);
    }
    date
}

/// Whole contribution periods elapsed between `start` and `today`.
///
/// Month-based frequencies divide by the average period length rather
/// than stepping the calendar (see the note on the constants above).
pub fn elapsed_periods(start: NaiveDate, frequency: Frequency, today: NaiveDate) -> i64 {
    let days = (today - start).num_days();
    if days <= 0 {
        return 0;
    }
    match frequency {
        Frequency::Weekly => days / 7,
        Frequency::Monthly => (days as f64 / AVG_DAYS_PER_MONTH).floor() as i64,
        Frequency::Quarterly => (days as f64 / AVG_DAYS_PER_QUARTER).floor() as i64,
    }
}

/// Capital contributed to a plan as of `today`:
/// initial capital plus one `amount` per elapsed whole period.
pub fn total_invested(
    start: NaiveDate,
    amount: Decimal,
    frequency: Frequency,
    initial_capital: Decimal,
    today: NaiveDate,
) -> Decimal {
    initial_capital + Decimal::from(elapsed_periods(start, frequency, today)) * amount
}

/// Per-month contribution equivalent shown in plan listings.
pub fn monthly_amount(amount: Decimal, frequency: Frequency) -> Decimal {
    match frequency {
        Frequency::Weekly => amount * Decimal::from(52) / Decimal::from(12),
        Frequency::Monthly => amount,
        Frequency::Quarterly => amount / Decimal::from(3),
    }
}
