//! Pure functions turning fetched series and a `Selection` into what the UI
//! shows.

use derive_new::new;

use crate::{
    record::{DailyRecord, Jurisdiction},
    selection::{Metric, TimeWindow},
    series::GroupedSeries,
};

/// Output format of dates, e.g. "Mar 02, 2020".
pub const LABEL_DATE_FORMAT: &str = "%b %d, %Y";

/// Formatted value and date of a single record.
#[derive(Clone, Debug, Eq, PartialEq, new)]
pub struct Label {
    pub value: String,
    pub date: String,
}

/// The trailing `window` of `series`. Series shorter than the window are
/// returned whole.
pub fn visible_slice(series: &[DailyRecord], window: TimeWindow) -> &[DailyRecord] {
    match window.num_days() {
        Some(days) if days < series.len() => &series[series.len() - days..],
        _ => series,
    }
}

pub fn metric_value(record: &DailyRecord, metric: Metric) -> i64 {
    match metric {
        Metric::Negative => record.negative_increase,
        Metric::Positive => record.positive_increase,
        Metric::Death => record.death_increase,
    }
}

pub fn metric_series(records: &[DailyRecord], metric: Metric) -> Vec<i64> {
    records.iter().map(|r| metric_value(r, metric)).collect()
}

pub fn format_label(record: &DailyRecord, metric: Metric) -> Label {
    Label::new(
        format_count(metric_value(record, metric)),
        format_date(record),
    )
}

pub fn format_date(record: &DailyRecord) -> String {
    record.date.format(LABEL_DATE_FORMAT).to_string()
}

/// Format an integer with `,` as thousands separator. The grouping is
/// fixed to en-US, the same locale the date labels use.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Series to show for `jurisdiction`. Falls back to `national` for the
/// nationwide sentinel and for codes missing in `grouped`.
pub fn resolve_series<'a>(
    national: &'a [DailyRecord],
    grouped: &'a GroupedSeries,
    jurisdiction: &Jurisdiction,
) -> &'a [DailyRecord] {
    match jurisdiction {
        Jurisdiction::Nationwide => national,
        Jurisdiction::State(_) => grouped.get(jurisdiction).unwrap_or(national),
    }
}

/// Choices for the jurisdiction selector: the nationwide sentinel first,
/// then all state codes in ascending order.
pub fn jurisdiction_options(grouped: &GroupedSeries) -> Vec<Jurisdiction> {
    std::iter::once(Jurisdiction::Nationwide)
        .chain(
            grouped
                .jurisdictions()
                .filter(|j| **j != Jurisdiction::Nationwide)
                .cloned(),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::series::oldest_first;

    fn record(day: u32, state: Option<&str>, counts: [i64; 3]) -> DailyRecord {
        let date = NaiveDate::from_ymd_opt(2020, 3, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let [positive, negative, death] = counts;
        DailyRecord::new(
            date,
            positive,
            negative,
            death,
            state.map(str::to_string).into(),
        )
    }

    fn series(len: u32) -> Vec<DailyRecord> {
        (1..=len).map(|d| record(d, None, [d as i64, 0, 0])).collect()
    }

    #[test]
    fn test_week_of_ten_days() {
        let data = series(10);
        let visible = visible_slice(&data, TimeWindow::Week);
        assert_eq!(visible.len(), 7);
        assert_eq!(visible, &data[3..]);
        assert_eq!(visible.first().unwrap().positive_increase, 4);
    }

    #[test]
    fn test_window_longer_than_series() {
        let data = series(3);
        assert_eq!(visible_slice(&data, TimeWindow::Week), &data[..]);
        assert_eq!(visible_slice(&data, TimeWindow::Month), &data[..]);
        assert!(visible_slice(&[], TimeWindow::Week).is_empty());
    }

    #[test]
    fn test_all_time_is_unchanged() {
        let data = series(45);
        assert_eq!(visible_slice(&data, TimeWindow::All), &data[..]);
        assert_eq!(visible_slice(&data, TimeWindow::Month).len(), 30);
    }

    #[test]
    fn test_metric_value_per_metric() {
        let r = record(1, None, [10, 50, 1]);
        assert_eq!(metric_value(&r, Metric::Positive), 10);
        assert_eq!(metric_value(&r, Metric::Negative), 50);
        assert_eq!(metric_value(&r, Metric::Death), 1);
        assert_eq!(
            metric_series(&[r.clone(), r], Metric::Death),
            vec![1, 1]
        );
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(15), "15");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(78_427), "78,427");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-4_200), "-4,200");
    }

    #[test]
    fn test_format_label() {
        let r = record(2, None, [61_054, 1_200_000, 0]);
        assert_eq!(
            format_label(&r, Metric::Negative),
            Label::new("1,200,000".into(), "Mar 02, 2020".into())
        );
    }

    #[test]
    fn test_resolve_falls_back_to_national() {
        let national = series(5);
        let grouped = GroupedSeries::from_oldest_first(vec![
            record(1, Some("NY"), [1, 0, 0]),
            record(2, Some("NY"), [2, 0, 0]),
        ]);
        let ny = Jurisdiction::State("NY".into());
        assert_eq!(resolve_series(&national, &grouped, &ny).len(), 2);
        let missing = Jurisdiction::State("XX".into());
        assert_eq!(resolve_series(&national, &grouped, &missing), &national[..]);
        assert_eq!(
            resolve_series(&national, &grouped, &Jurisdiction::Nationwide),
            &national[..]
        );
    }

    #[test]
    fn test_jurisdiction_options_sentinel_first() {
        let grouped = GroupedSeries::from_oldest_first(vec![
            record(1, Some("WA"), [0; 3]),
            record(1, Some("AL"), [0; 3]),
            record(1, None, [0; 3]),
        ]);
        let options = jurisdiction_options(&grouped);
        assert_eq!(
            options,
            vec![
                Jurisdiction::Nationwide,
                Jurisdiction::State("AL".into()),
                Jurisdiction::State("WA".into()),
            ]
        );
        assert_eq!(
            jurisdiction_options(&GroupedSeries::default()),
            vec![Jurisdiction::Nationwide]
        );
    }

    #[test]
    fn test_two_day_scenario() {
        // The API lists the newest day first.
        let newest_first: Vec<DailyRecord> = serde_json::from_str(
            r#"[
                {"date": "2020-03-02T00:00:00", "positiveIncrease": 15, "negativeIncrease": 60, "deathIncrease": 2},
                {"date": "2020-03-01T00:00:00", "positiveIncrease": 10, "negativeIncrease": 50, "deathIncrease": 1}
            ]"#,
        )
        .unwrap();
        let national = oldest_first(newest_first);
        assert_eq!(national[0].day(), NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
        assert_eq!(national[0].positive_increase, 10);
        assert_eq!(national[1].positive_increase, 15);

        let visible = visible_slice(&national, TimeWindow::All);
        let label = format_label(visible.last().unwrap(), Metric::Positive);
        assert_eq!(label.value, "15");
        assert_eq!(label.date, "Mar 02, 2020");
    }
}
