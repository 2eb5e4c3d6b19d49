//! The singleton popup dialog.

use std::time::Duration;

use devicebox_app::popup::{Confirmation, Popup, PopupAction};
use devicebox_app::ports::Dialogs;
use leptos::prelude::*;

/// Handle driving the one popup instance of the page.
#[derive(Clone, Copy)]
pub struct PopupHandle {
    popup: RwSignal<Popup>,
    hide_fallback: Duration,
}

impl PopupHandle {
    pub fn new(hide_fallback: Duration) -> Self {
        Self {
            popup: RwSignal::new(Popup::new()),
            hide_fallback,
        }
    }

    fn reveal_next_frame(&self) {
        let popup = self.popup;
        request_animation_frame(move || {
            popup.update(|popup| {
                popup.reveal();
            });
        });
    }

    /// Start hiding the dialog; no-op when it is not shown.
    pub fn hide(&self) {
        if let Some(ticket) = self.popup.try_update(Popup::hide).flatten() {
            let popup = self.popup;
            set_timeout(
                move || {
                    popup.update(|popup| {
                        popup.finish_hide_for(ticket);
                    });
                },
                self.hide_fallback,
            );
        }
    }

    /// Complete the exit: `display: none` and no buttons left.
    pub fn finish_hide(&self) {
        self.popup.update(|popup| {
            popup.finish_hide();
        });
    }

    /// Handle a click on action button `index`.
    pub fn click(&self, index: usize) {
        let Some(action) = self
            .popup
            .with_untracked(|popup| popup.clickable_action(index))
        else {
            return;
        };
        action.invoke();
        if action.auto_hides() {
            self.hide();
        }
    }
}

impl Dialogs for PopupHandle {
    fn show(&self, title: &str, content: &str, actions: Vec<PopupAction>) {
        self.popup.update(|popup| popup.show(title, content, actions));
        self.reveal_next_frame();
    }

    fn confirm(&self, title: &str, content: &str) -> Confirmation {
        let confirmation = self
            .popup
            .try_update(|popup| popup.confirm(title, content))
            .unwrap_or_else(Confirmation::dismissed);
        self.reveal_next_frame();
        confirmation
    }
}

/// Markup of the dialog. Mounted once; every `show` re-renders its content.
#[component]
pub fn PopupBox(handle: PopupHandle) -> impl IntoView {
    let popup = handle.popup;
    let display = move || {
        if popup.with(|popup| popup.phase().is_displayed()) {
            "block"
        } else {
            "none"
        }
    };
    let buttons = move || {
        popup.with(|popup| {
            popup
                .actions()
                .iter()
                .enumerate()
                .map(|(index, action)| (index, action.label().to_string(), action.class_name()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class="popup-box"
            class:show=move || popup.with(|popup| popup.phase().is_visible())
            style:display=display
            on:transitionend=move |_| handle.finish_hide()
        >
            <button class="popup-close" aria-label="Close" on:click=move |_| handle.hide()>
                "\u{00D7}"
            </button>
            <h3 class="popup-title">{move || popup.with(|popup| popup.title().to_string())}</h3>
            <div class="popup-content" inner_html=move || popup.with(Popup::content_html)></div>
            <div class="popup-actions">
                {move || {
                    buttons()
                        .into_iter()
                        .map(|(index, label, class)| {
                            view! {
                                <button class=class on:click=move |_| handle.click(index)>
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn should_keep_second_exit_running_when_first_fallback_fires() {
        let owner = Owner::new();
        let handle = owner.with(|| PopupHandle::new(Duration::from_millis(100)));

        handle.show("First", "one", vec![PopupAction::new("OK")]);
        handle.hide();
        TimeoutFuture::new(60).await;
        handle.show("Second", "two", vec![PopupAction::new("Close")]);
        handle.hide();

        TimeoutFuture::new(70).await;
        handle.popup.with_untracked(|popup| {
            assert!(popup.phase().is_displayed());
            assert_eq!(popup.title(), "Second");
            assert_eq!(popup.actions().len(), 1);
        });

        TimeoutFuture::new(120).await;
        handle.popup.with_untracked(|popup| {
            assert!(!popup.phase().is_displayed());
            assert!(popup.actions().is_empty());
        });
    }
}
