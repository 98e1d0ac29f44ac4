use covid_data::{projector::metric_series, DailyRecord, Metric};

/// One point per record, x being the position within `records`.
pub fn plot_points(records: &[DailyRecord], metric: Metric) -> Vec<[f64; 2]> {
    metric_series(records, metric)
        .into_iter()
        .enumerate()
        .map(|(i, value)| [i as f64, value as f64])
        .collect()
}

/// Record closest to plot coordinate `x`, clamped to the series.
pub fn index_at(x: f64, len: usize) -> Option<usize> {
    if len == 0 || !x.is_finite() {
        return None;
    }
    let index = x.round().max(0.0) as usize;
    Some(index.min(len - 1))
}

/// Axis label for grid mark `x`: the date of the record there, nothing
/// between records or outside the series.
pub fn date_at(dates: &[String], x: f64) -> String {
    if x < 0.0 || x.fract() != 0.0 {
        return String::new();
    }
    dates.get(x as usize).cloned().unwrap_or_default()
}
