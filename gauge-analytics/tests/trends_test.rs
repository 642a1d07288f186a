//! Time bucketizer tests.

use chrono::NaiveDate;
use gauge_analytics::trends::{monthly_average, TrendPoint};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_orders_across_year_boundary() {
    // "Dec" > "Jan" lexically; chronology must win.
    let series = monthly_average(vec![
        (date(2024, 1, 5), 100.0),
        (date(2023, 12, 20), 80.0),
    ]);

    assert_eq!(
        series,
        vec![
            TrendPoint {
                period: "Dec '23".to_string(),
                value: 80,
            },
            TrendPoint {
                period: "Jan '24".to_string(),
                value: 100,
            },
        ]
    );
}

#[test]
fn test_averages_within_bucket_and_rounds() {
    let series = monthly_average(vec![
        (date(2024, 3, 1), 10.0),
        (date(2024, 3, 15), 15.0),
        (date(2024, 3, 30), 20.0),
    ]);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].value, 15);

    // 10 and 15 average to 12.5 → rounds away from zero to 13.
    let series = monthly_average(vec![(date(2024, 4, 1), 10.0), (date(2024, 4, 2), 15.0)]);
    assert_eq!(series[0].value, 13);
}

#[test]
fn test_same_month_different_years_stay_separate() {
    let series = monthly_average(vec![
        (date(2023, 6, 1), 30.0),
        (date(2024, 6, 1), 90.0),
    ]);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].period, "Jun '23");
    assert_eq!(series[1].period, "Jun '24");
}

#[test]
fn test_empty_input_yields_empty_series() {
    assert!(monthly_average(Vec::new()).is_empty());
}

#[test]
fn test_multi_month_chronological_order() {
    let series = monthly_average(vec![
        (date(2024, 2, 1), 1.0),
        (date(2023, 11, 1), 2.0),
        (date(2024, 1, 1), 3.0),
        (date(2023, 12, 1), 4.0),
    ]);
    let periods: Vec<&str> = series.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(periods, vec!["Nov '23", "Dec '23", "Jan '24", "Feb '24"]);
}
