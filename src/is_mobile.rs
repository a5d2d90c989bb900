use std::sync::Arc;

use leptos::logging::log;
use leptos::prelude::*;

use crate::breakpoint::{classify, MOBILE_BREAKPOINT};
use crate::viewport::{BrowserViewport, ViewportHost};

/// Reactive `width < breakpoint` for the current owner.
///
/// The value is computed right away from the current width and recomputed on
/// every resize notification. The resize observer is removed when the owner
/// is cleaned up, so an unmounted component never sees another update.
pub fn use_viewport_below<H: ViewportHost>(host: H, breakpoint: f64) -> Signal<bool> {
    let (below, set_below) = signal(classify(host.width(), breakpoint));

    let on_resize = {
        let host = host.clone();
        Arc::new(move || set_below.set(classify(host.width(), breakpoint)))
    };

    match host.subscribe(on_resize) {
        Ok(id) => on_cleanup(move || host.unsubscribe(id)),
        Err(e) => {
            log!("[ERROR] [Viewport] Resize updates disabled, keeping initial value: {:?}", e);
        }
    }

    below.into()
}

pub fn use_is_mobile_with<H: ViewportHost>(host: H) -> Signal<bool> {
    use_viewport_below(host, MOBILE_BREAKPOINT)
}

/// Whether the browser viewport is narrower than [`MOBILE_BREAKPOINT`].
pub fn use_is_mobile() -> Signal<bool> {
    use_is_mobile_with(BrowserViewport)
}

/// Shared classification for a component subtree, so descendants reuse one observer.
#[derive(Clone, Copy, Debug)]
pub struct IsMobile(pub Signal<bool>);

impl IsMobile {
    #[track_caller]
    pub fn expect_context() -> Signal<bool> {
        expect_context::<Self>().0
    }

    pub fn use_context() -> Option<Signal<bool>> {
        use_context::<Self>().map(|is_mobile| is_mobile.0)
    }
}

pub fn provide_is_mobile_with<H: ViewportHost>(host: H) -> Signal<bool> {
    let is_mobile = use_is_mobile_with(host);
    provide_context(IsMobile(is_mobile));
    is_mobile
}

pub fn provide_is_mobile() -> Signal<bool> {
    provide_is_mobile_with(BrowserViewport)
}
