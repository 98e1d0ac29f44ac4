use crate::record::Jurisdiction;

/// The quantity plotted.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Metric {
    Negative,
    #[default]
    Positive,
    Death,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Negative, Metric::Positive, Metric::Death];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Negative => "Negative",
            Metric::Positive => "Positive",
            Metric::Death => "Death",
        }
    }
}

/// Trailing number of days shown.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimeWindow {
    Week,
    Month,
    #[default]
    All,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [TimeWindow::Week, TimeWindow::Month, TimeWindow::All];

    /// `None` means the whole series.
    pub fn num_days(&self) -> Option<usize> {
        match self {
            TimeWindow::Week => Some(7),
            TimeWindow::Month => Some(30),
            TimeWindow::All => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Week => "Week",
            TimeWindow::Month => "Month",
            TimeWindow::All => "Max",
        }
    }
}

/// What the user currently looks at. Defaults to nationwide positive cases
/// over the whole time range.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub jurisdiction: Jurisdiction,
    pub metric: Metric,
    pub window: TimeWindow,
}
