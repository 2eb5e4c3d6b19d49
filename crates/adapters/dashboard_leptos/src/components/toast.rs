//! Toast notification overlay.

use std::collections::HashMap;
use std::time::Duration;

use devicebox_app::ports::Notifier;
use devicebox_app::toast::{Toast, ToastId, ToastOptions, ToastQueue};
use leptos::prelude::*;

/// Handle for pushing and dismissing toasts.
///
/// Each toast is inserted hidden, revealed on the next animation frame, and
/// dismissed by its auto-dismiss timer or its close button, whichever comes
/// first.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    toasts: RwSignal<ToastQueue>,
    timers: StoredValue<HashMap<ToastId, TimeoutHandle>>,
    hide_fallback: Duration,
}

impl ToastProvider {
    /// Toasts pushed without a duration stay for `default_duration`.
    pub fn new(hide_fallback: Duration, default_duration: Duration) -> Self {
        Self {
            toasts: RwSignal::new(ToastQueue::with_default_duration(default_duration)),
            timers: StoredValue::new(HashMap::new()),
            hide_fallback,
        }
    }

    /// Push a new toast. It auto-dismisses after its duration.
    pub fn push(&self, message: String, options: ToastOptions) {
        let pushed = self.toasts.try_update(|queue| {
            let id = queue.push(message, options);
            queue.get(id).map(|toast| (id, toast.duration))
        });
        let Some((id, duration)) = pushed.flatten() else {
            return;
        };

        let toasts = self.toasts;
        request_animation_frame(move || {
            toasts.update(|queue| {
                queue.reveal(id);
            });
        });

        let provider = *self;
        match set_timeout_with_handle(move || provider.dismiss(id), duration) {
            Ok(handle) => self.timers.update_value(|timers| {
                timers.insert(id, handle);
            }),
            Err(err) => leptos::logging::warn!("failed to schedule toast {id} removal: {err:?}"),
        }
    }

    /// Start hiding a toast and cancel its pending timer. Dismissing twice
    /// is a no-op.
    pub fn dismiss(&self, id: ToastId) {
        let mut pending = None;
        self.timers.update_value(|timers| pending = timers.remove(&id));
        if let Some(handle) = pending {
            handle.clear();
        }

        let hiding = self.toasts.try_update(|queue| queue.dismiss(id)).unwrap_or(false);
        if hiding {
            let provider = *self;
            set_timeout(move || provider.finish(id), self.hide_fallback);
        }
    }

    /// Ids of the live toasts, oldest first.
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.with(ToastQueue::ids)
    }

    /// Detach a toast whose exit transition ended.
    pub fn finish(&self, id: ToastId) {
        self.toasts.update(|queue| {
            queue.finish(id);
        });
    }
}

impl Notifier for ToastProvider {
    fn notify(&self, message: String, options: ToastOptions) {
        self.push(message, options);
    }
}

/// Renders the active toasts into the overlay container.
#[component]
pub fn ToastContainer(provider: ToastProvider) -> impl IntoView {
    view! {
        <For
            each=move || provider.ids()
            key=|id| *id
            children=move |toast_id| view! { <ToastCard provider toast_id/> }
        />
    }
}

/// A single notification card.
#[component]
fn ToastCard(provider: ToastProvider, toast_id: ToastId) -> impl IntoView {
    let toasts = provider.toasts;
    let class = move || {
        toasts.with(|queue| queue.get(toast_id).map(Toast::class_name).unwrap_or_default())
    };
    let message = toasts.with_untracked(|queue| {
        queue.get(toast_id).map(Toast::message_html).unwrap_or_default()
    });

    view! {
        <div class=class on:transitionend=move |_| provider.finish(toast_id)>
            <span inner_html=message></span>
            <button class="close" aria-label="close" on:click=move |_| provider.dismiss(toast_id)>
                "\u{00D7}"
            </button>
        </div>
    }
}
