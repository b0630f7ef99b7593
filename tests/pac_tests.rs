// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salvadanaio::models::Frequency;
use salvadanaio::pac;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn monthly_next_execution_clamps_to_short_month_end() {
    // Jan 31 + 1 month lands on the last day of February, not March 3.
    let next = pac::next_execution(d(2025, 1, 31), Frequency::Monthly, d(2025, 2, 10));
    assert_eq!(next, d(2025, 2, 28));

    let leap = pac::next_execution(d(2024, 1, 31), Frequency::Monthly, d(2024, 2, 10));
    assert_eq!(leap, d(2024, 2, 29));
}

#[test]
fn weekly_next_execution_steps_seven_days() {
    let next = pac::next_execution(d(2025, 1, 1), Frequency::Weekly, d(2025, 1, 15));
    assert_eq!(next, d(2025, 1, 22));
}

#[test]
fn quarterly_next_execution_steps_three_calendar_months() {
    let next = pac::next_execution(d(2024, 11, 30), Frequency::Quarterly, d(2025, 1, 10));
    assert_eq!(next, d(2025, 2, 28));
}

#[test]
fn future_start_date_is_returned_unchanged() {
    let start = d(2030, 5, 1);
    let next = pac::next_execution(start, Frequency::Monthly, d(2025, 6, 10));
    assert_eq!(next, start);
}

#[test]
fn start_today_schedules_one_period_out() {
    let next = pac::next_execution(d(2025, 6, 10), Frequency::Monthly, d(2025, 6, 10));
    assert_eq!(next, d(2025, 7, 10));
}

#[test]
fn far_past_start_walks_forward_to_first_future_date() {
    let next = pac::next_execution(d(2015, 1, 1), Frequency::Weekly, d(2025, 1, 1));
    assert!(next > d(2025, 1, 1));
    assert!(next <= d(2025, 1, 8));
}

#[test]
fn monthly_periods_floor_on_average_days() {
    // 92 days / 30.44 = 3.02 -> 3 periods.
    assert_eq!(
        pac::elapsed_periods(d(2025, 3, 10), Frequency::Monthly, d(2025, 6, 10)),
        3
    );
    // 89 days / 30.44 = 2.92 -> still 2, never rounded up.
    assert_eq!(
        pac::elapsed_periods(d(2025, 3, 10), Frequency::Monthly, d(2025, 6, 7)),
        2
    );
}

#[test]
fn weekly_and_quarterly_period_counts() {
    assert_eq!(
        pac::elapsed_periods(d(2025, 1, 1), Frequency::Weekly, d(2025, 1, 21)),
        2
    );
    // 91 days is just short of one average quarter (91.31).
    assert_eq!(
        pac::elapsed_periods(d(2025, 1, 1), Frequency::Quarterly, d(2025, 4, 2)),
        0
    );
    assert_eq!(
        pac::elapsed_periods(d(2025, 1, 1), Frequency::Quarterly, d(2025, 7, 2)),
        1
    );
}

#[test]
fn total_invested_after_three_months_is_three_contributions() {
    let total = pac::total_invested(
        d(2025, 3, 10),
        Decimal::from(100),
        Frequency::Monthly,
        Decimal::ZERO,
        d(2025, 6, 10),
    );
    assert_eq!(total, Decimal::from(300));
}

#[test]
fn future_start_accrues_only_initial_capital() {
    let total = pac::total_invested(
        d(2030, 1, 1),
        Decimal::from(500),
        Frequency::Weekly,
        Decimal::from(250),
        d(2025, 6, 10),
    );
    assert_eq!(total, Decimal::from(250));
}

#[test]
fn zero_amount_is_valid_and_contributes_nothing() {
    let total = pac::total_invested(
        d(2024, 1, 1),
        Decimal::ZERO,
        Frequency::Monthly,
        Decimal::from(100),
        d(2025, 1, 1),
    );
    assert_eq!(total, Decimal::from(100));
}

// Pins the intentional mismatch between the two date strategies: by the
// calendar a Jan 31 monthly plan has already executed once on Feb 28, but
// the average-days count still says zero whole periods have elapsed.
// Both sides are load-bearing; a change here needs a product decision.
#[test]
fn calendar_and_average_math_disagree_near_month_boundaries() {
    let start = d(2025, 1, 31);
    let today = d(2025, 3, 1);

    // Calendar stepping has consumed the Feb 28 execution already.
    assert_eq!(
        pac::next_execution(start, Frequency::Monthly, today),
        d(2025, 3, 28)
    );
    // 29 elapsed days / 30.44 floors to zero periods.
    assert_eq!(pac::elapsed_periods(start, Frequency::Monthly, today), 0);
}

#[test]
fn monthly_amount_normalizes_each_frequency() {
    assert_eq!(
        pac::monthly_amount(Decimal::from(12), Frequency::Weekly),
        Decimal::from(52)
    );
    assert_eq!(
        pac::monthly_amount(Decimal::from(300), Frequency::Monthly),
        Decimal::from(300)
    );
    assert_eq!(
        pac::monthly_amount(Decimal::from(300), Frequency::Quarterly),
        Decimal::from(100)
    );
}
