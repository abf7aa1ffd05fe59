use crate::app::{GroceryCtx, HistoryAction};
use crate::theme::palette;
use leptos::prelude::*;

#[component]
pub fn HistoryControls() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();

    let style = move |enabled: bool| {
        let p = palette(ctx.dark_mode.get());
        let color = if enabled { p.accent } else { p.border };
        format!("{} cursor: {};", p.button_style(color), if enabled { "pointer" } else { "not-allowed" })
    };

    view! {
        <div style="display: flex; gap: 8px; margin-top: 16px; align-items: center;">
            <button
                title="Undo (Ctrl+Z)"
                disabled=move || !ctx.list_view.with(|v| v.can_undo)
                style=move || style(ctx.list_view.with(|v| v.can_undo))
                on:click=move |_| ctx.run_history(HistoryAction::Undo)
            >
                "Undo"
            </button>
            <button
                title="Redo (Ctrl+Shift+Z)"
                disabled=move || !ctx.list_view.with(|v| v.can_redo)
                style=move || style(ctx.list_view.with(|v| v.can_redo))
                on:click=move |_| ctx.run_history(HistoryAction::Redo)
            >
                "Redo"
            </button>
        </div>
    }
}
