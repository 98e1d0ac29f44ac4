use derive_new::new;

use app_core::event::AppEvent;
use covid_data::{Jurisdiction, Metric, TimeWindow};

use super::Tracker;

// ---------------------------------------------------------------------------
//
//
// EventQueue
//
//
// ---------------------------------------------------------------------------

/// The EventQueue stores events that are processed each iteration
/// of the application GUI event loop.
pub struct EventQueue<App> {
    queue: Vec<Box<dyn AppEvent<App = App>>>,
}

impl<App> EventQueue<App> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = App>>) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn discard_events(&mut self) {
        self.queue.clear();
    }

    /// Take all queued events, oldest first.
    fn take(&mut self) -> Vec<Box<dyn AppEvent<App = App>>> {
        std::mem::take(&mut self.queue)
    }
}

impl<App> Default for EventQueue<App> {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker {
    /// Apply all queued events in the order they were queued. Returns true
    /// if there was anything to apply.
    pub fn run_events(&mut self) -> bool {
        let events = self.event_queue.take();
        let any_events = !events.is_empty();
        for event in events {
            if let Err(err) = event.apply(self) {
                log::error!("event failed: {:?}", err)
            }
        }
        any_events
    }
}

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

/// Show another jurisdiction, starting over with the default metric and
/// time window.
#[derive(new)]
pub struct SelectJurisdiction {
    jurisdiction: Jurisdiction,
}

#[derive(new)]
pub struct SelectMetric {
    metric: Metric,
}

#[derive(new)]
pub struct SelectTimeWindow {
    window: TimeWindow,
}

/// Highlight the record at `index` of the visible slice.
#[derive(new)]
pub struct ScrubTo {
    index: usize,
}

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

impl AppEvent for SelectJurisdiction {
    type App = Tracker;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        log::debug!("selected jurisdiction '{}'", self.jurisdiction);
        app.selection.jurisdiction = self.jurisdiction.clone();
        app.selection.metric = Metric::default();
        app.selection.window = TimeWindow::default();
        app.highlighted = None;
        Ok(())
    }
}

impl AppEvent for SelectMetric {
    type App = Tracker;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        log::debug!("selected metric {:?}", self.metric);
        app.selection.metric = self.metric;
        // The label jumps back to the most recent day.
        app.highlighted = None;
        Ok(())
    }
}

impl AppEvent for SelectTimeWindow {
    type App = Tracker;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        log::debug!("selected time window {:?}", self.window);
        app.selection.window = self.window;
        if app.highlighted_visible_index().is_none() {
            app.highlighted = None;
        }
        Ok(())
    }
}

impl AppEvent for ScrubTo {
    type App = Tracker;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        let active_len = app.active_series().len();
        let visible_len = app.visible().len();
        if self.index >= visible_len {
            return Err(format!(
                "cannot scrub to record {} of {} visible records",
                self.index, visible_len
            ));
        }
        app.highlighted = Some(active_len - visible_len + self.index);
        Ok(())
    }
}
