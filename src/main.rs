use codee::string::FromToStringCodec;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use viewport_class::textarea::create_textarea_enter_handler;
use viewport_class::{provide_is_mobile, IsMobile, MOBILE_BREAKPOINT};

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let is_mobile = provide_is_mobile();

    Effect::new(move |_| {
        log!("[DEBUG] [App] is_mobile changed to: {}", is_mobile.get());
    });

    view! {
        <header data-layout=move || if is_mobile.get() { "mobile" } else { "desktop" }>
            {move || {
                if is_mobile.get() {
                    format!("Mobile layout (narrower than {MOBILE_BREAKPOINT}px)")
                } else {
                    format!("Desktop layout ({MOBILE_BREAKPOINT}px or wider)")
                }
            }}
        </header>
        <NoteComposer />
    }
}

#[component]
fn NoteComposer() -> impl IntoView {
    let is_mobile = IsMobile::expect_context();
    let (notes, set_notes) = signal::<Vec<String>>(vec![]);
    let (draft, set_draft, _) = use_local_storage::<String, FromToStringCodec>("note_draft");

    let submit = Callback::new(move |_: ()| {
        let note = draft.get_untracked();
        if note.trim().is_empty() {
            return;
        }
        set_notes.update(|notes| notes.push(note));
        set_draft.set(String::new());
    });
    let on_keydown = create_textarea_enter_handler(is_mobile, submit);

    view! {
        <ul>
            {move || {
                notes
                    .get()
                    .into_iter()
                    .map(|note| view! { <li style:white-space="break-spaces">{note}</li> })
                    .collect_view()
            }}
        </ul>
        <textarea
            prop:value=move || draft.get()
            on:input:target=move |ev| set_draft.set(ev.target().value())
            on:keydown=on_keydown
            placeholder=move || {
                if is_mobile.get() { "Note (tap Add to save)" } else { "Note (Enter to save, Shift+Enter for newline)" }
            }
        />
        <button data-role="primary" on:click=move |_| submit.run(())>"Add"</button>
    }
}
