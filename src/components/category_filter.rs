use crate::app::GroceryCtx;
use crate::theme::palette;
use leptos::prelude::*;

/// Filter by one of the categories currently in use.
#[component]
pub fn CategoryFilter() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();
    let selected = move || ctx.session.with(|s| s.view_parameters().filter_category.clone());

    view! {
        <select
            style=move || format!("{} flex: 1;", palette(ctx.dark_mode.get()).input_style())
            prop:value=selected
            on:change=move |ev| {
                let category = event_target_value(&ev);
                ctx.set_session.update(|s| s.set_filter_category(category));
            }
        >
            <option value="">"All categories"</option>
            <For
                each=move || ctx.used_categories.get()
                key=|c| c.clone()
                children=move |c| {
                    let value = c.clone();
                    view! { <option value=value>{c}</option> }
                }
            />
        </select>
    }
}
