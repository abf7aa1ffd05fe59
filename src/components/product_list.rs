use crate::app::{GroceryCtx, ToastKind};
use crate::state::{Product, SortKey};
use crate::theme::palette;
use leptos::prelude::*;

#[component]
fn ProductItem(product: Product) -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();
    let id = product.id.clone();
    let manual = move || ctx.session.with(|s| s.view_parameters().sort_key == SortKey::Manual);

    let on_drag_start = {
        let id = id.clone();
        move |ev: web_sys::DragEvent| {
            if let Some(transfer) = ev.data_transfer() {
                let _ = transfer.set_data("text/plain", id.as_str());
            }
            ctx.dragging.set(Some(id.clone()));
        }
    };

    let on_drop = {
        let id = id.clone();
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            if let Some(dragged) = ctx.dragging.get_untracked() {
                if dragged != id {
                    ctx.mutate(|s| s.move_product(&dragged, &id));
                }
            }
            ctx.dragging.set(None);
        }
    };

    let on_delete = {
        let id = id.clone();
        let name = product.name.clone();
        move |_: web_sys::MouseEvent| {
            if ctx.mutate(|s| s.delete_product(&id)) == Some(true) {
                ctx.notify(format!("Deleted {name}"), ToastKind::Info);
            }
        }
    };

    let is_dragging = {
        let id = id.clone();
        move || ctx.dragging.with(|d| d.as_ref() == Some(&id))
    };

    let item_style = move || {
        let p = palette(ctx.dark_mode.get());
        format!(
            "padding: 12px; border: 1px solid {}; border-radius: 4px; margin-bottom: 8px; \
             display: flex; justify-content: space-between; align-items: center; opacity: {}; cursor: {};",
            p.border,
            if is_dragging() { "0.5" } else { "1" },
            if manual() { "grab" } else { "default" },
        )
    };

    let dim = move || format!("font-size: 14px; margin: 2px 0; color: {};", palette(ctx.dark_mode.get()).text_dim);
    let category = if product.is_uncategorized() {
        "Uncategorized".to_string()
    } else {
        product.category.clone()
    };

    view! {
        <div
            style=item_style
            draggable=move || if manual() { "true" } else { "false" }
            on:dragstart=on_drag_start
            on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
            on:drop=on_drop
            on:dragend=move |_| ctx.dragging.set(None)
        >
            <div>
                <h3 style="font-weight: 600; margin: 0 0 4px 0; font-size: 16px;">{product.name.clone()}</h3>
                <p style=dim>"Category: " {category}</p>
                <p style=dim>"Quantity: " {product.quantity}</p>
            </div>
            <button
                style=move || {
                    let p = palette(ctx.dark_mode.get());
                    format!("background: transparent; border: none; cursor: pointer; color: {};", p.danger)
                }
                on:click=on_delete
            >
                "Delete"
            </button>
        </div>
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();
    let products = move || ctx.list_view.get().products;
    let empty_style = move || format!("color: {};", palette(ctx.dark_mode.get()).text_dim);

    view! {
        <div style="margin-top: 16px;">
            <Show
                when=move || !ctx.list_view.with(|v| v.products.is_empty())
                fallback=move || view! { <p style=empty_style>"No products found"</p> }
            >
                <For
                    each=products
                    key=|p| (p.id.clone(), p.name.clone(), p.category.clone(), p.quantity)
                    children=move |product| view! { <ProductItem product=product /> }
                />
            </Show>
        </div>
    }
}
