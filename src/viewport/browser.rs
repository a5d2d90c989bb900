use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use anyhow::{anyhow, Result};
use leptos::logging::log;
use wasm_bindgen::{closure::Closure, JsCast};

use super::{ListenerId, ResizeCallback, ViewportHost};

const RESIZE_EVENT: &str = "resize";

thread_local! {
    // Closures must outlive their registration on `window`, so they are kept
    // here until unsubscribed instead of being forgotten.
    static LISTENERS: RefCell<HashMap<ListenerId, Closure<dyn Fn()>>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// The browser window: `innerWidth` and `resize` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl ViewportHost for BrowserViewport {
    fn width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    fn subscribe(&self, on_resize: ResizeCallback) -> Result<ListenerId> {
        let window = web_sys::window().ok_or_else(|| anyhow!("[Viewport] Subscribe: no window"))?;
        let closure = Closure::<dyn Fn()>::new(move || on_resize());
        window
            .add_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("[Viewport] Subscribe: failed to add resize listener: {:?}", e))?;

        let id = ListenerId(NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        }));
        LISTENERS.with(|listeners| listeners.borrow_mut().insert(id, closure));
        log!("[DEBUG] [Viewport] Registered resize listener {:?}.", id);
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        let Some(closure) = LISTENERS.with(|listeners| listeners.borrow_mut().remove(&id)) else {
            log!("[WARN] [Viewport] Unsubscribe: unknown listener {:?}.", id);
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
            {
                log!("[ERROR] [Viewport] Failed to remove resize listener {:?}: {:?}", id, e);
            }
        }
        log!("[DEBUG] [Viewport] Removed resize listener {:?}.", id);
    }

    fn listener_count(&self) -> usize {
        LISTENERS.with(|listeners| listeners.borrow().len())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use wasm_bindgen_test::*;
    use web_sys::Event;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_resize() {
        let window = web_sys::window().unwrap();
        let event = Event::new(RESIZE_EVENT).unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn reads_inner_width() {
        let width = BrowserViewport.width().unwrap();
        assert!(width >= 0.0);
    }

    #[wasm_bindgen_test]
    fn resize_events_reach_listener_until_unsubscribed() {
        let host = BrowserViewport;
        let before = host.listener_count();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let id = host
            .subscribe(Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();
        assert_eq!(host.listener_count(), before + 1);

        fire_resize();
        fire_resize();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        host.unsubscribe(id);
        assert_eq!(host.listener_count(), before);

        fire_resize();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[wasm_bindgen_test]
    fn unsubscribe_twice_is_harmless() {
        let host = BrowserViewport;
        let before = host.listener_count();
        let id = host.subscribe(Arc::new(|| {})).unwrap();
        host.unsubscribe(id);
        host.unsubscribe(id);
        assert_eq!(host.listener_count(), before);
    }
}
