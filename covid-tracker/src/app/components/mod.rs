mod chart;
mod selector;

pub use chart::Chart;
pub use selector::{render_jurisdiction_selector, render_metric_selector, render_window_selector};
