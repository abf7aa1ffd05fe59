use crate::app::GroceryCtx;
use crate::theme::palette;
use leptos::prelude::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();

    view! {
        <button
            style=move || {
                let p = palette(ctx.dark_mode.get());
                format!(
                    "padding: 6px 12px; border: 1px solid {}; border-radius: 4px; background: {}; color: {}; cursor: pointer;",
                    p.border, p.surface, p.text
                )
            }
            on:click=move |_| ctx.toggle_theme()
        >
            {move || if ctx.dark_mode.get() { "Light mode" } else { "Dark mode" }}
        </button>
    }
}
