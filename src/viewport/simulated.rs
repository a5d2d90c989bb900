use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use leptos::logging::log;

use super::{ListenerId, ResizeCallback, ViewportHost};

#[derive(Default)]
struct State {
    width: Option<f64>,
    width_reads: usize,
    next_id: u64,
    listeners: Vec<(ListenerId, ResizeCallback)>,
}

/// In-memory viewport for hosts without a window, and for driving resizes by hand.
#[derive(Clone, Default)]
pub struct SimulatedViewport {
    state: Arc<Mutex<State>>,
}

impl SimulatedViewport {
    pub fn new(width: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                width: Some(width),
                ..Default::default()
            })),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        // A panicking observer must not wedge the host for everyone else.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sets the width and notifies every registered observer.
    pub fn resize(&self, width: f64) {
        self.state().width = Some(width);
        self.notify();
    }

    /// Drops the width, as if the viewport went away, and notifies observers.
    pub fn set_unavailable(&self) {
        self.state().width = None;
        self.notify();
    }

    /// How many times `width` has been queried.
    pub fn width_reads(&self) -> usize {
        self.state().width_reads
    }

    fn notify(&self) {
        // Observers read the width back, so the lock is released first.
        let listeners: Vec<ResizeCallback> = self
            .state()
            .listeners
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in listeners {
            callback();
        }
    }
}

impl ViewportHost for SimulatedViewport {
    fn width(&self) -> Option<f64> {
        let mut state = self.state();
        state.width_reads += 1;
        state.width
    }

    fn subscribe(&self, on_resize: ResizeCallback) -> Result<ListenerId> {
        let mut state = self.state();
        let id = ListenerId(state.next_id);
        state.next_id += 1;
        state.listeners.push((id, on_resize));
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        let mut state = self.state();
        let before = state.listeners.len();
        state.listeners.retain(|(listener, _)| *listener != id);
        if state.listeners.len() == before {
            log!("[WARN] [Viewport] Unsubscribe: unknown listener {:?}.", id);
        }
    }

    fn listener_count(&self) -> usize {
        self.state().listeners.len()
    }
}
