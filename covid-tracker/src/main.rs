#![warn(clippy::all, rust_2018_idioms)]

use covid_data::CovidClient;
use covid_tracker::{Config, EguiApp, Tracker};

const WINDOW_NAME: &str = "COVID-19 Tracker";
const WINDOW_WIDTH: f32 = 420.0;
const WINDOW_HEIGHT: f32 = 640.0;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match Config::from_config_file() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("unable to load config file, using defaults: {}", err);
            Config::default()
        }
    };

    let client = match CovidClient::new(&config.base_url) {
        Ok(client) => client,
        Err(err) => {
            log::error!("unable to create HTTP client: {}", err);
            return Ok(());
        }
    };
    // Both requests start right away, the window shows a spinner until the
    // national data arrived.
    let mut tracker = Tracker::new(client);
    tracker.fetch_all();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT / 2.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(EguiApp::new(cc, config, tracker)))),
    )
}
