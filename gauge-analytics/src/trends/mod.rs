//! Time bucketing — month/year series with chronological ordering.

use chrono::{Datelike, NaiveDate};
use gauge_core::types::collections::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

/// A month bucket key. `Ord` is (year, month), so sorting is
/// chronological, never label-textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Bucket key of a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Raw display key, e.g. `Jan '24`. Localization is presentation-side.
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b '%y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }

    /// Months since year zero; window arithmetic across year boundaries.
    fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

/// One point of an ordered trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub period: String,
    pub value: i64,
}

/// Bucket `(date, value)` records by month and average each bucket.
///
/// Output is ordered by the reconstructed first-of-month date: `Dec '23`
/// sorts before `Jan '24` even though the labels compare the other way.
/// Bucket values are means rounded to the nearest integer; empty input
/// yields an empty series for the caller's empty-state.
pub fn monthly_average<I>(records: I) -> Vec<TrendPoint>
where
    I: IntoIterator<Item = (NaiveDate, f64)>,
{
    let mut buckets: FxHashMap<Period, SmallVec<[f64; 8]>> = FxHashMap::default();
    for (date, value) in records {
        buckets.entry(Period::from_date(date)).or_default().push(value);
    }

    let mut periods: Vec<Period> = buckets.keys().copied().collect();
    periods.sort_unstable();

    periods
        .into_iter()
        .map(|period| {
            let values = &buckets[&period];
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            TrendPoint {
                period: period.label(),
                value: mean.round() as i64,
            }
        })
        .collect()
}

/// True when `date` falls inside the `months`-wide window ending at
/// `evaluated_at`'s month (inclusive). Future months are outside.
pub fn within_window(date: NaiveDate, evaluated_at: NaiveDate, months: u32) -> bool {
    let diff = Period::from_date(evaluated_at).index() - Period::from_date(date).index();
    diff >= 0 && diff < i64::from(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_orders_chronologically() {
        let dec = Period::from_date(date(2023, 12, 31));
        let jan = Period::from_date(date(2024, 1, 1));
        assert!(dec < jan, "Dec '23 must precede Jan '24");
    }

    #[test]
    fn test_period_label_format() {
        assert_eq!(Period { year: 2024, month: 1 }.label(), "Jan '24");
        assert_eq!(Period { year: 2023, month: 12 }.label(), "Dec '23");
    }

    #[test]
    fn test_window_spans_year_boundary() {
        let eval = date(2024, 2, 10);
        assert!(within_window(date(2023, 12, 1), eval, 3));
        assert!(!within_window(date(2023, 11, 30), eval, 3));
        // Future months are outside the window.
        assert!(!within_window(date(2024, 3, 1), eval, 3));
    }
}
