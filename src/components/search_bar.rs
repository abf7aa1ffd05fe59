use crate::app::GroceryCtx;
use crate::config::DEBOUNCE_DELAY_MS;
use crate::debounce::Debouncer;
use crate::theme::palette;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

/// Search box. Keystrokes update the field at once but reach the session only
/// after `DEBOUNCE_DELAY_MS` of quiet.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();
    let initial = ctx.session.with_untracked(|s| s.view_parameters().search_term.clone());
    let (text, set_text) = signal(initial);
    let debouncer = Arc::new(Debouncer::new());

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_text.set(value.clone());

        let ticket = debouncer.ticket();
        let debouncer = debouncer.clone();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DEBOUNCE_DELAY_MS).await;
            if debouncer.is_current(ticket) {
                ctx.set_session.update(|s| s.set_search_term(value));
            }
        });
    };

    view! {
        <input
            type="search"
            placeholder="Search products..."
            style=move || format!("{} width: 100%;", palette(ctx.dark_mode.get()).input_style())
            prop:value=move || text.get()
            on:input=on_input
        />
    }
}
