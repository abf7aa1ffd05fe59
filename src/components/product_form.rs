use crate::app::{GroceryCtx, ToastKind};
use crate::error::CatalogError;
use crate::state::ProductDraft;
use crate::theme::palette;
use leptos::prelude::*;

#[component]
pub fn ProductForm() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (quantity, set_quantity) = signal("1".to_string());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ProductDraft::new(
            name.get_untracked(),
            category.get_untracked(),
            quantity.get_untracked().trim().parse::<i64>().unwrap_or(0),
        );

        match ctx.mutate(|s| s.add_product(&draft)) {
            Some(Ok(_)) => {
                set_name.set(String::new());
                set_category.set(String::new());
                set_quantity.set("1".to_string());
                set_error.set(None);
                ctx.notify(format!("Added {}", draft.name.trim()), ToastKind::Success);
            }
            Some(Err(CatalogError::Validation(err))) => set_error.set(Some(err.to_string())),
            Some(Err(err)) => {
                tracing::warn!(%err, "add product failed");
                ctx.notify(err.to_string(), ToastKind::Error);
            }
            None => {}
        }
    };

    let label_style = "display: block; margin-bottom: 4px; font-size: 14px; font-weight: 500;";
    let field_style = move || format!("{} width: 100%;", palette(ctx.dark_mode.get()).input_style());

    view! {
        <form on:submit=on_submit style="display: flex; flex-direction: column; gap: 16px;">
            <div>
                <label for="productName" style=label_style>"Product Name"</label>
                <input
                    id="productName"
                    type="text"
                    placeholder="Enter product name"
                    style=field_style
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>

            <div>
                <label for="productCategory" style=label_style>"Category"</label>
                <select
                    id="productCategory"
                    style=field_style
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="">"Select category"</option>
                    <For
                        each=move || ctx.list_view.get().categories
                        key=|c| c.clone()
                        children=move |c| {
                            let value = c.clone();
                            view! { <option value=value>{c}</option> }
                        }
                    />
                </select>
            </div>

            <div>
                <label for="productQuantity" style=label_style>"Quantity"</label>
                <input
                    id="productQuantity"
                    type="number"
                    min="1"
                    style=field_style
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|message| {
                let color = palette(ctx.dark_mode.get()).danger;
                view! { <p style=format!("color: {}; margin: 0; font-size: 14px;", color)>{message}</p> }
            })}

            <button
                type="submit"
                style=move || {
                    let p = palette(ctx.dark_mode.get());
                    format!("{} width: 100%; padding: 8px;", p.button_style(p.accent))
                }
            >
                "Add Product"
            </button>
        </form>
    }
}
