mod components;
pub mod config;

use std::time::Duration;

use self::components::{
    render_jurisdiction_selector, render_metric_selector, render_window_selector, Chart,
};
use crate::Tracker;
use config::Config;

/// How often to look for finished fetches while nothing else triggers a
/// repaint.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct EguiApp {
    config: Config,
    tracker: Tracker,
    chart: Chart,
    request_redraw: Option<()>,
}

impl EguiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config, tracker: Tracker) -> Self {
        Self {
            config,
            tracker,
            chart: Chart::new(),
            request_redraw: None,
        }
    }

    fn update_state(&mut self) {
        let fetched = self.tracker.try_update();
        let selected = self.tracker.run_events();
        if fetched || selected {
            self.request_redraw();
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }
        if self.tracker.is_loading() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        self.update_state();

        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Close app.
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("COVID-19 Tracker");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_buttons(ui);
                    ui.separator();
                    render_jurisdiction_selector(&mut self.tracker, ui);
                });
            });
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            self.chart.render_label(&self.tracker, &self.config, ui);
            ui.separator();
            ui.columns(2, |columns| {
                render_window_selector(&mut self.tracker, &mut columns[0]);
                render_metric_selector(&mut self.tracker, &mut columns[1]);
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart.render(&mut self.tracker, &self.config, ui);
        });

        // Apply what was selected this frame without waiting for more input.
        if self.tracker.has_queued_events() {
            ctx.request_repaint();
        }

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
