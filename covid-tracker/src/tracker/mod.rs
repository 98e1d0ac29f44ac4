pub mod events;

use app_core::{backend::BackendLink, event::AppEvent, frontend::UIParameter};
use covid_data::{
    projector::{format_label, jurisdiction_options, resolve_series, visible_slice},
    CovidClient, DailyRecord, FetchError, GroupedSeries, Jurisdiction, Label, Selection,
};

use events::EventQueue;

/// Owns the fetched series and what the user selected.
///
/// Fetches run on worker threads; their results are picked up by
/// `try_update`, which like everything else here runs on the UI thread.
pub struct Tracker {
    client: CovidClient,
    national: UIParameter<Option<Vec<DailyRecord>>>,
    states: UIParameter<Option<GroupedSeries>>,
    options: Vec<Jurisdiction>,
    selection: Selection,
    /// Index into the active series, `None` means the latest record.
    highlighted: Option<usize>,
    event_queue: EventQueue<Tracker>,
}

impl Tracker {
    pub fn new(client: CovidClient) -> Self {
        Self {
            client,
            national: Default::default(),
            states: Default::default(),
            options: vec![Jurisdiction::Nationwide],
            selection: Selection::default(),
            highlighted: None,
            event_queue: EventQueue::new(),
        }
    }

    /// Issue both requests. They do not depend on each other and may
    /// complete in any order.
    pub fn fetch_all(&mut self) {
        let client = self.client.clone();
        BackendLink::request_parameter_update(
            &mut self.national,
            "fetch nationwide daily data",
            move || log_failure(client.fetch_national()),
        );
        let client = self.client.clone();
        BackendLink::request_parameter_update(
            &mut self.states,
            "fetch per-state daily data",
            move || log_failure(client.fetch_states()),
        );
    }

    /// Pick up finished fetches. A failed fetch leaves the data held so far
    /// untouched. Returns true if anything changed.
    pub fn try_update(&mut self) -> bool {
        let mut changed = false;
        if self.national.try_update_if(Option::is_some) {
            log::info!("update chart with national data");
            self.selection = Selection::default();
            self.highlighted = None;
            self.event_queue.discard_events();
            changed = true;
        }
        if self.states.try_update_if(Option::is_some) {
            if let Some(grouped) = self.states.value() {
                log::info!("update selector with {} jurisdictions", grouped.len());
                self.options = jurisdiction_options(grouped);
            }
            changed = true;
        }
        changed
    }

    pub fn is_loading(&self) -> bool {
        !(self.national.is_up_to_date() && self.states.is_up_to_date())
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = Tracker>>) {
        self.event_queue.queue_event(event);
    }

    /// Events queued this frame are applied at the start of the next one.
    pub fn has_queued_events(&self) -> bool {
        !self.event_queue.is_empty()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Sentinel first, then the state codes in ascending order.
    pub fn jurisdiction_options(&self) -> &[Jurisdiction] {
        &self.options
    }

    pub fn national(&self) -> &[DailyRecord] {
        self.national.value().as_deref().unwrap_or_default()
    }

    /// Oldest-first series of the selected jurisdiction.
    pub fn active_series(&self) -> &[DailyRecord] {
        let national = self.national();
        match self.states.value() {
            Some(grouped) => resolve_series(national, grouped, &self.selection.jurisdiction),
            None => national,
        }
    }

    pub fn visible(&self) -> &[DailyRecord] {
        visible_slice(self.active_series(), self.selection.window)
    }

    /// Position of the highlighted record within `visible`, if it is shown.
    pub fn highlighted_visible_index(&self) -> Option<usize> {
        let offset = self.active_series().len() - self.visible().len();
        self.highlighted
            .and_then(|index| index.checked_sub(offset))
            .filter(|index| *index < self.visible().len())
    }

    /// The scrubbed record, or the most recent one.
    pub fn highlighted(&self) -> Option<&DailyRecord> {
        let series = self.active_series();
        match self.highlighted {
            Some(index) => series.get(index),
            None => series.last(),
        }
    }

    pub fn label(&self) -> Option<Label> {
        self.highlighted()
            .map(|record| format_label(record, self.selection.metric))
    }
}

fn log_failure<T>(result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("{}", err);
            None
        }
    }
}
