use crate::app::{GroceryCtx, Toast, ToastKind};
use crate::theme::palette;
use leptos::prelude::*;

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();

    view! {
        <div style="position: fixed; bottom: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1000;">
            <For
                each=move || ctx.toasts.get()
                key=|t: &Toast| t.id.clone()
                children=move |toast: Toast| {
                    let p = palette(ctx.dark_mode.get_untracked());
                    let background = match toast.kind {
                        ToastKind::Success => p.success,
                        ToastKind::Error => p.danger,
                        ToastKind::Info => p.info,
                    };
                    let id = toast.id.clone();
                    view! {
                        <div style=format!(
                            "background: {}; color: #ffffff; padding: 8px 16px; border-radius: 4px; \
                             box-shadow: 0 4px 12px rgba(0,0,0,0.25); display: flex; align-items: center; gap: 16px;",
                            background
                        )>
                            <span>{toast.message}</span>
                            <button
                                style="background: transparent; border: none; color: #ffffff; cursor: pointer;"
                                on:click=move |_| ctx.dismiss(&id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
