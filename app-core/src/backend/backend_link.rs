use log::{debug, warn};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering::SeqCst},
        mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError},
        Arc,
    },
    thread::JoinHandle,
};

use crate::frontend::UIParameter;

/// The linker is moved to a worker thread and replies
/// once the action ran there.
pub struct BackendLink<T, F>
where
    F: FnOnce() -> T,
{
    backchannel: Sender<T>,
    action: F,
    is_cancelled: Arc<AtomicBool>,
    description: String,
}

impl<T, F> BackendLink<T, F>
where
    F: FnOnce() -> T,
{
    pub fn new(description: &str, action: F) -> (LinkReceiver<T>, Self) {
        let (tx, rx) = channel();
        let is_cancelled = Arc::new(AtomicBool::new(false));
        let rx = LinkReceiver {
            rx,
            is_cancelled: is_cancelled.clone(),
        };
        (
            rx,
            Self {
                backchannel: tx,
                action,
                description: description.to_owned(),
                is_cancelled,
            },
        )
    }

    pub fn is_cancelled(&self) -> bool {
        self.is_cancelled.load(SeqCst)
    }

    pub fn describe(&self) -> &str {
        &self.description
    }

    /// Run the action on the current thread and send the result back.
    pub fn run(self) {
        if self.is_cancelled() {
            debug!("skipping cancelled request '{}'", self.description);
            return;
        }
        let result = (self.action)();
        // The receiver might have been dropped while `action` was running.
        if self.is_cancelled.load(SeqCst) {
            debug!(
                "request '{}' was cancelled while running, dropping result",
                self.description
            );
            return;
        }
        let _ = self.backchannel.send(result).map_err(|_| {
            warn!(
                "Trying to send message for request '{}' on closed channel.",
                self.description
            )
        });
    }
}

impl<T, F> BackendLink<T, F>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    /// Run the action on its own worker thread. Links spawned this way do
    /// not wait for each other.
    pub fn spawn(self) -> JoinHandle<()> {
        debug!("spawning worker for request '{}'", self.description);
        std::thread::spawn(move || self.run())
    }

    /// Spawn `action` and let `param` pick up its result on a later
    /// `try_update`.
    pub fn request_parameter_update(param: &mut UIParameter<T>, description: &str, action: F)
    where
        T: Clone,
    {
        let (rx, linker) = Self::new(description, action);
        linker.spawn();
        param.set_recv(rx);
    }
}

pub struct LinkReceiver<T> {
    rx: Receiver<T>,
    is_cancelled: Arc<AtomicBool>,
}

impl<T> std::fmt::Debug for LinkReceiver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkReceiver")
            .field("is_cancelled", &self.is_cancelled.load(SeqCst))
            .finish()
    }
}

impl<T> LinkReceiver<T> {
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        self.rx.try_recv()
    }
    pub fn recv_timeout(&self, duration: std::time::Duration) -> Result<T, RecvTimeoutError> {
        self.rx.recv_timeout(duration)
    }
}

impl<T> Drop for LinkReceiver<T> {
    fn drop(&mut self) {
        debug!("dropping link receiver");
        self.is_cancelled.store(true, SeqCst);
    }
}
