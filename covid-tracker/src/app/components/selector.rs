use covid_data::{Metric, TimeWindow};

use crate::{
    tracker::events::{SelectJurisdiction, SelectMetric, SelectTimeWindow},
    Tracker,
};

pub fn render_jurisdiction_selector(tracker: &mut Tracker, ui: &mut egui::Ui) {
    let current = tracker.selection().jurisdiction.clone();
    let mut picked = None;
    egui::ComboBox::from_label("State")
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            for option in tracker.jurisdiction_options() {
                if ui
                    .selectable_label(*option == current, option.to_string())
                    .clicked()
                {
                    picked = Some(option.clone());
                }
            }
        });
    if let Some(jurisdiction) = picked {
        tracker.queue_event(Box::new(SelectJurisdiction::new(jurisdiction)));
    }
}

pub fn render_metric_selector(tracker: &mut Tracker, ui: &mut egui::Ui) {
    let current = tracker.selection().metric;
    ui.horizontal(|ui| {
        for metric in Metric::ALL {
            if ui.radio(metric == current, metric.label()).clicked() && metric != current {
                tracker.queue_event(Box::new(SelectMetric::new(metric)));
            }
        }
    });
}

pub fn render_window_selector(tracker: &mut Tracker, ui: &mut egui::Ui) {
    let current = tracker.selection().window;
    ui.horizontal(|ui| {
        for window in TimeWindow::ALL {
            if ui.radio(window == current, window.label()).clicked() && window != current {
                tracker.queue_event(Box::new(SelectTimeWindow::new(window)));
            }
        }
    });
}
