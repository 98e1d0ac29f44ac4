use std::sync::mpsc::TryRecvError;

use log::warn;

use crate::backend::LinkReceiver;

/// A value shown by the UI that may be replaced by the result of a pending
/// background request.
#[derive(Debug)]
pub struct UIParameter<T> {
    pending_update_rx: Option<LinkReceiver<T>>,
    value: T,
}

impl<T: Clone> Clone for UIParameter<T> {
    fn clone(&self) -> Self {
        Self {
            pending_update_rx: None,
            value: self.value.clone(),
        }
    }
}

impl<T: Default + Clone> Default for UIParameter<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> UIParameter<T> {
    pub fn new(val: T) -> Self {
        UIParameter {
            pending_update_rx: None,
            value: val,
        }
    }

    pub fn try_update(&mut self) -> bool {
        self.try_update_if(|_| true)
    }

    /// Like `try_update`, but the received value only replaces the current
    /// one if `accept` returns true for it. A rejected value is dropped and
    /// the request counts as done.
    ///
    /// Returns true if the value was replaced.
    pub fn try_update_if(&mut self, accept: impl FnOnce(&T) -> bool) -> bool {
        let Some(rx) = &self.pending_update_rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(val) => {
                self.pending_update_rx = None;
                if accept(&val) {
                    self.value = val;
                    true
                } else {
                    false
                }
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                warn!("Tried to receive message from closed channel.");
                self.pending_update_rx = None;
                false
            }
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        self.pending_update_rx.is_none()
    }

    pub fn set_recv(&mut self, rx: LinkReceiver<T>) {
        self.pending_update_rx = Some(rx);
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}
