use crate::app::{GroceryCtx, ToastKind};
use crate::theme::palette;
use leptos::prelude::*;

#[component]
fn CategoryRow(name: String, editing: RwSignal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();
    let edit_value = RwSignal::new(name.clone());

    let save = {
        let old = name.clone();
        move || {
            let new = edit_value.get_untracked();
            let new = new.trim();
            if !new.is_empty() && new != old {
                if ctx.mutate(|s| s.rename_category(&old, new)) == Some(true) {
                    ctx.notify(format!("Renamed {old} to {new}"), ToastKind::Success);
                } else {
                    ctx.notify(format!("A category named {new} already exists"), ToastKind::Error);
                }
            }
            editing.set(None);
        }
    };

    let on_delete = {
        let name = name.clone();
        move |_: web_sys::MouseEvent| {
            if ctx.mutate(|s| s.delete_category(&name)) == Some(true) {
                ctx.notify(format!("Deleted {name}, its products are now uncategorized"), ToastKind::Info);
            }
        }
    };

    let is_editing = {
        let name = name.clone();
        move || editing.with(|e| e.as_deref() == Some(name.as_str()))
    };

    let start_edit = {
        let name = name.clone();
        move |_: web_sys::MouseEvent| {
            edit_value.set(name.clone());
            editing.set(Some(name.clone()));
        }
    };

    let input_style = move || format!("{} flex: 1;", palette(ctx.dark_mode.get()).input_style());
    let button = move |color: fn(&crate::theme::Palette) -> &'static str| {
        move || {
            let p = palette(ctx.dark_mode.get());
            format!("{} padding: 4px 12px;", p.button_style(color(&p)))
        }
    };

    let display_name = name.clone();
    let save_on_click = save.clone();

    view! {
        <div style="display: flex; align-items: center; gap: 8px;">
            <Show
                when=is_editing
                fallback=move || view! {
                    <span style="flex: 1;">{display_name.clone()}</span>
                    <button style=button(|p| p.accent) on:click=start_edit.clone()>"Edit"</button>
                    <button style=button(|p| p.danger) on:click=on_delete.clone()>"Delete"</button>
                }
            >
                <input
                    type="text"
                    autofocus=true
                    style=input_style
                    prop:value=move || edit_value.get()
                    on:input=move |ev| edit_value.set(event_target_value(&ev))
                    on:keydown={
                        let save = save.clone();
                        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => save(),
                            "Escape" => editing.set(None),
                            _ => {}
                        }
                    }
                />
                <button style=button(|p| p.success) on:click={
                    let save = save_on_click.clone();
                    move |_| save()
                }>"Save"</button>
                <button style=button(|p| p.text_dim) on:click=move |_| editing.set(None)>"Cancel"</button>
            </Show>
        </div>
    }
}

#[component]
pub fn CategoryManager() -> impl IntoView {
    let ctx = use_context::<GroceryCtx>().unwrap();
    let (new_category, set_new_category) = signal(String::new());
    let editing = RwSignal::new(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_category.get_untracked();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if ctx.mutate(|s| s.add_category(name)) == Some(true) {
            ctx.notify(format!("Added category {name}"), ToastKind::Success);
        } else {
            ctx.notify(format!("{name} already exists"), ToastKind::Info);
        }
        set_new_category.set(String::new());
    };

    let panel_style = move || {
        format!(
            "margin-top: 16px; padding: 16px; border: 1px solid {}; border-radius: 4px;",
            palette(ctx.dark_mode.get()).border
        )
    };

    view! {
        <div style=panel_style>
            <h2 style="font-size: 18px; font-weight: 600; margin: 0 0 16px 0;">"Manage Categories"</h2>

            <form on:submit=on_submit style="display: flex; gap: 8px; margin-bottom: 16px;">
                <input
                    type="text"
                    placeholder="New category name"
                    style=move || format!("{} flex: 1;", palette(ctx.dark_mode.get()).input_style())
                    prop:value=move || new_category.get()
                    on:input=move |ev| set_new_category.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    style=move || {
                        let p = palette(ctx.dark_mode.get());
                        p.button_style(p.accent)
                    }
                >
                    "Add"
                </button>
            </form>

            <div style="display: flex; flex-direction: column; gap: 8px;">
                <For
                    each=move || ctx.list_view.get().categories
                    key=|c| c.clone()
                    children=move |name| view! { <CategoryRow name=name editing=editing /> }
                />
            </div>
        </div>
    }
}
