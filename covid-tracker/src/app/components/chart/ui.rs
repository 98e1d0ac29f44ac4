use std::ops::RangeInclusive;

use covid_data::projector::format_date;
use egui::{Color32, RichText};
use egui_plot::{GridMark, Line, Plot, VLine};

use super::logic::{date_at, index_at, plot_points};
use crate::{app::config::Config, tracker::events::ScrubTo, Tracker};

impl super::Chart {
    pub fn render(&mut self, tracker: &mut Tracker, config: &Config, ui: &mut egui::Ui) {
        let visible = tracker.visible();
        if visible.is_empty() {
            ui.centered_and_justified(|ui| {
                if tracker.is_loading() {
                    ui.spinner();
                } else {
                    ui.label("No data available");
                }
            });
            return;
        }

        let metric = tracker.selection().metric;
        let color = config.metric_color(metric);
        let points = plot_points(visible, metric);
        let dates: Vec<String> = visible.iter().map(format_date).collect();
        let len = visible.len();
        let highlighted = tracker.highlighted_visible_index();

        let response = Plot::new("daily_chart")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_grid([false, true])
            .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                date_at(&dates, mark.value)
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(points)
                        .color(color)
                        .width(2.0)
                        .name(metric.label()),
                );
                if let Some(x) = highlighted {
                    plot_ui.vline(VLine::new(x as f64).color(Color32::GRAY).width(1.0));
                }
                if plot_ui.response().hovered() {
                    plot_ui
                        .pointer_coordinate()
                        .and_then(|point| index_at(point.x, len))
                } else {
                    None
                }
            });

        // Scrubbing: the label follows the pointer and stays on the last
        // day hovered.
        if let Some(index) = response.inner {
            if self.hovered_index != Some(index) {
                tracker.queue_event(Box::new(ScrubTo::new(index)));
            }
        }
        self.hovered_index = response.inner;
    }

    pub fn render_label(&self, tracker: &Tracker, config: &Config, ui: &mut egui::Ui) {
        let color = config.metric_color(tracker.selection().metric);
        ui.vertical_centered(|ui| match tracker.label() {
            Some(label) => {
                ui.label(RichText::new(label.value).size(40.0).color(color).strong());
                ui.label(RichText::new(label.date).size(16.0));
            }
            None => {
                ui.label(RichText::new("-").size(40.0).color(color));
            }
        });
    }
}
