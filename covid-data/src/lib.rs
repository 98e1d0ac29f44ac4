#![warn(clippy::all, rust_2018_idioms)]

//! Daily COVID-19 statistics: decoding, grouping and projecting them for
//! display.

pub mod client;
pub mod projector;
pub mod record;
pub mod selection;
pub mod series;

pub use client::{CovidClient, Endpoint, FetchError, DEFAULT_BASE_URL};
pub use projector::Label;
pub use record::{DailyRecord, Jurisdiction, NATIONWIDE_LABEL};
pub use selection::{Metric, Selection, TimeWindow};
pub use series::GroupedSeries;
