//! The platform facility the classifier consumes: a synchronous width query
//! plus a resize notification channel with explicitly revocable observers.

mod browser;
mod simulated;

pub use browser::BrowserViewport;
pub use simulated::SimulatedViewport;

use std::sync::Arc;

/// Invoked on every resize notification. Reads the new width from the host.
pub type ResizeCallback = Arc<dyn Fn() + Send + Sync>;

/// Token for one registered resize observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

pub trait ViewportHost: Clone + Send + Sync + 'static {
    /// Current width in logical pixels, `None` if the host has no viewport.
    fn width(&self) -> Option<f64>;

    fn subscribe(&self, on_resize: ResizeCallback) -> anyhow::Result<ListenerId>;

    /// Removes the observer registered under `id`. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);

    fn listener_count(&self) -> usize;
}
