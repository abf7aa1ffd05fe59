use crate::app::GroceryCtx;
use crate::state::SortKey;
use crate::theme::palette;
use leptos::prelude::*;

#[component]
pub fn SortSelect() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();
    let selected = move || ctx.session.with(|s| s.view_parameters().sort_key.as_str());

    view! {
        <select
            style=move || format!("{} flex: 1;", palette(ctx.dark_mode.get()).input_style())
            prop:value=selected
            on:change=move |ev| {
                if let Some(key) = SortKey::parse(&event_target_value(&ev)) {
                    ctx.set_session.update(|s| s.set_sort_key(key));
                }
            }
        >
            {SortKey::ALL
                .into_iter()
                .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                .collect_view()}
        </select>
    }
}
