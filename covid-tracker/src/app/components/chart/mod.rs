mod logic;
mod ui;

#[derive(Default)]
pub struct Chart {
    /// Index within the visible slice the pointer was over last frame, so
    /// scrubbing only queues an event when it moves to another day.
    hovered_index: Option<usize>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            hovered_index: None,
        }
    }
}
