use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

/// Enter submits on desktop. On mobile there is no Shift+Enter, so Enter
/// has to insert a newline and submitting goes through the button.
pub fn enter_submits(is_mobile: bool, shift_key: bool) -> bool {
    !is_mobile && !shift_key
}

pub fn create_textarea_enter_handler(
    is_mobile: Signal<bool>,
    on_submit: Callback<()>,
) -> impl Fn(KeyboardEvent) {
    move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }

        if !enter_submits(is_mobile.get_untracked(), ev.shift_key()) {
            return;
        }

        ev.prevent_default();
        on_submit.run(());
    }
}
