#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod tracker;

pub use app::config::Config;
pub use app::EguiApp;
pub use tracker::Tracker;
