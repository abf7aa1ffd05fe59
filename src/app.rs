use crate::components::{
    CategoryFilter, CategoryManager, HistoryControls, ProductForm, ProductList, SearchBar, SortSelect, ThemeToggle,
    Toasts,
};
use crate::config::{SessionOptions, DARK_MODE_KEY, TOAST_DURATION_MS};
use crate::session::{GrocerySession, ListView};
use crate::state::ProductId;
use crate::storage::{self, BrowserStorage};
use crate::theme::{palette, FONT};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub type Session = GrocerySession<BrowserStorage>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

/// Maps Ctrl/Cmd+Z to undo and Ctrl/Cmd+Shift+Z to redo.
pub fn history_shortcut(key: &str, ctrl: bool, meta: bool, shift: bool) -> Option<HistoryAction> {
    if !(ctrl || meta) || !key.eq_ignore_ascii_case("z") {
        return None;
    }
    Some(if shift { HistoryAction::Redo } else { HistoryAction::Undo })
}

/// Shared handles for every component under [`App`].
#[derive(Clone, Copy)]
pub struct GroceryCtx {
    pub session: ReadSignal<Session>,
    pub set_session: WriteSignal<Session>,
    pub list_view: Memo<ListView>,
    pub used_categories: Memo<Vec<String>>,
    pub dark_mode: ReadSignal<bool>,
    pub set_dark_mode: WriteSignal<bool>,
    pub toasts: ReadSignal<Vec<Toast>>,
    pub set_toasts: WriteSignal<Vec<Toast>>,
    pub dragging: RwSignal<Option<ProductId>>,
}

impl GroceryCtx {
    /// Runs `f` against the session and reports a failed save to the user.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let was_pending = self.session.with_untracked(|s| s.save_pending());
        let result = self.set_session.try_update(f);
        let is_pending = self.session.with_untracked(|s| s.save_pending());
        if is_pending && !was_pending {
            self.notify("Changes could not be saved to this browser", ToastKind::Error);
        }
        result
    }

    pub fn run_history(&self, action: HistoryAction) {
        let moved = self.mutate(|s| match action {
            HistoryAction::Undo => s.undo(),
            HistoryAction::Redo => s.redo(),
        });
        if moved == Some(true) {
            let message = match action {
                HistoryAction::Undo => "Undone",
                HistoryAction::Redo => "Redone",
            };
            self.notify(message, ToastKind::Info);
        }
    }

    /// Shows a toast that dismisses itself after `TOAST_DURATION_MS`.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = uuid::Uuid::new_v4().to_string();
        self.set_toasts.update(|t| {
            t.push(Toast {
                id: id.clone(),
                message: message.into(),
                kind,
            })
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }

    pub fn dismiss(&self, id: &str) {
        self.set_toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    pub fn toggle_theme(&self) {
        let dark = !self.dark_mode.get_untracked();
        self.set_dark_mode.set(dark);
        if let Err(err) = storage::save(&BrowserStorage, DARK_MODE_KEY, &dark) {
            tracing::warn!(%err, "failed to save theme preference");
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(GrocerySession::load(BrowserStorage, SessionOptions::default()));
    let dark = storage::load::<bool>(&BrowserStorage, DARK_MODE_KEY).unwrap_or(false);
    let (dark_mode, set_dark_mode) = signal(dark);
    let (toasts, set_toasts) = signal::<Vec<Toast>>(Vec::new());

    let list_view = Memo::new(move |_| session.with(|s| s.list_view()));
    let used_categories = Memo::new(move |_| session.with(|s| s.used_categories()));

    let ctx = GroceryCtx {
        session,
        set_session,
        list_view,
        used_categories,
        dark_mode,
        set_dark_mode,
        toasts,
        set_toasts,
        dragging: RwSignal::new(None),
    };
    provide_context(ctx);

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if let Some(action) = history_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key(), ev.shift_key()) {
            ev.prevent_default();
            ctx.run_history(action);
        }
    });
    on_cleanup(move || keydown.remove());

    let root_style = move || {
        let p = palette(dark_mode.get());
        format!(
            "min-height: 100vh; padding: 16px; box-sizing: border-box; background: {}; color: {}; \
             font-family: {};",
            p.background, p.text, FONT
        )
    };

    view! {
        <div style=root_style>
            <div style="max-width: 960px; margin: 0 auto;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;">
                    <h1 style="font-size: 24px; font-weight: bold; margin: 0;">"Grocery App"</h1>
                    <ThemeToggle />
                </div>

                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 24px;">
                    <div>
                        <ProductForm />
                        <HistoryControls />
                        <CategoryManager />
                    </div>

                    <div>
                        <SearchBar />
                        <div style="display: flex; gap: 8px; margin-top: 8px;">
                            <CategoryFilter />
                            <SortSelect />
                        </div>
                        <ProductList />
                    </div>
                </div>
            </div>
            <Toasts />
        </div>
    }
}
