//! The singleton popup dialog: title, content, action buttons, and an async
//! confirmation built on top of them.

use std::fmt;
use std::sync::{Arc, Mutex};

use devicebox_domain::sanitize::escape_multiline;
use devicebox_domain::visibility::Phase;
use tokio::sync::oneshot;

/// Label used by actions created without text.
pub const DEFAULT_ACTION_LABEL: &str = "OK";

/// Error reported by a popup action handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ActionError(String);

impl ActionError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Outcome of a popup action handler.
pub type ActionResult = Result<(), ActionError>;

type ActionHandler = Arc<dyn Fn() -> ActionResult + Send + Sync>;

/// One button of the dialog.
#[derive(Clone)]
pub struct PopupAction {
    text: String,
    class: String,
    handler: Option<ActionHandler>,
    auto_hide: bool,
}

impl fmt::Debug for PopupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupAction")
            .field("text", &self.text)
            .field("class", &self.class)
            .field("has_handler", &self.handler.is_some())
            .field("auto_hide", &self.auto_hide)
            .finish()
    }
}

impl PopupAction {
    /// A button that closes the dialog when clicked.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: String::new(),
            handler: None,
            auto_hide: true,
        }
    }

    /// Extra CSS class, e.g. `danger`.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    #[must_use]
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Leave the dialog open after the click.
    #[must_use]
    pub fn keep_open(mut self) -> Self {
        self.auto_hide = false;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        if self.text.is_empty() {
            DEFAULT_ACTION_LABEL
        } else {
            &self.text
        }
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        format!("popup-action {}", self.class).trim_end().to_string()
    }

    #[must_use]
    pub fn auto_hides(&self) -> bool {
        self.auto_hide
    }

    /// Run the handler. A failure is logged and swallowed so that a faulty
    /// action never prevents the dialog from closing.
    pub fn invoke(&self) {
        let Some(handler) = &self.handler else {
            return;
        };
        if let Err(err) = handler() {
            tracing::error!(action = self.label(), %err, "popup action handler failed");
        }
    }
}

/// Pending answer of a [`Popup::confirm`] dialog.
#[derive(Debug)]
pub struct Confirmation {
    answer: oneshot::Receiver<bool>,
}

impl Confirmation {
    /// A confirmation whose dialog could not be shown; it answers `false`.
    #[must_use]
    pub fn dismissed() -> Self {
        let (_, answer) = oneshot::channel();
        Self { answer }
    }

    /// Wait for the user. Resolves `true` for "Remove", `false` for
    /// "Cancel", and `false` if the dialog goes away without either.
    pub async fn answer(self) -> bool {
        self.answer.await.unwrap_or(false)
    }
}

/// Identifies one exit of the dialog, so a fallback timer scheduled for an
/// earlier exit cannot complete a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

/// State of the singleton dialog. Every `show` replaces the title, content
/// and actions of the same instance.
#[derive(Debug, Default)]
pub struct Popup {
    title: String,
    content: String,
    actions: Vec<PopupAction>,
    phase: Phase,
    shown: u64,
}

impl Popup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dialog contents and put it on screen. The adapter reveals
    /// it on the next animation frame.
    pub fn show(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        actions: Vec<PopupAction>,
    ) {
        self.title = title.into();
        self.content = content.into();
        self.actions = actions;
        self.phase.insert();
        self.shown = self.shown.wrapping_add(1);
        tracing::debug!(title = %self.title, actions = self.actions.len(), "popup shown");
    }

    /// Show a "Remove" / "Cancel" dialog and return the pending answer.
    pub fn confirm(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Confirmation {
        let (sender, answer) = oneshot::channel();
        let sender = Arc::new(Mutex::new(Some(sender)));
        let respond = |value: bool| {
            let sender = Arc::clone(&sender);
            move || -> ActionResult {
                let pending = sender.lock().ok().and_then(|mut slot| slot.take());
                if let Some(pending) = pending {
                    // the receiver is gone when nobody awaits the answer
                    let _ = pending.send(value);
                }
                Ok(())
            }
        };

        let actions = vec![
            PopupAction::new("Remove")
                .with_class("danger")
                .on_click(respond(true)),
            PopupAction::new("Cancel").on_click(respond(false)),
        ];
        self.show(title, content, actions);
        Confirmation { answer }
    }

    pub fn reveal(&mut self) -> bool {
        self.phase.reveal()
    }

    /// Start hiding. Returns `None` when the dialog is not on screen,
    /// otherwise the ticket to pass to [`Popup::finish_hide_for`].
    pub fn hide(&mut self) -> Option<HideTicket> {
        self.phase.hide().then_some(HideTicket(self.shown))
    }

    /// Complete the exit transition and drop the actions so that no button
    /// survives while hidden.
    pub fn finish_hide(&mut self) -> bool {
        if !self.phase.finish() {
            return false;
        }
        self.actions.clear();
        true
    }

    /// Like [`Popup::finish_hide`], but only for the exit `ticket` was
    /// issued for. Stale once the dialog has been shown again.
    pub fn finish_hide_for(&mut self, ticket: HideTicket) -> bool {
        ticket == HideTicket(self.shown) && self.finish_hide()
    }

    /// The action behind button `index`, if the dialog still accepts clicks.
    #[must_use]
    pub fn clickable_action(&self, index: usize) -> Option<PopupAction> {
        if !self.phase.is_interactive() {
            return None;
        }
        self.actions.get(index).cloned()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content escaped and with newlines turned into `<br>`.
    #[must_use]
    pub fn content_html(&self) -> String {
        escape_multiline(&self.content)
    }

    #[must_use]
    pub fn actions(&self) -> &[PopupAction] {
        &self.actions
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn click(popup: &mut Popup, index: usize) {
        let action = popup.clickable_action(index).unwrap();
        action.invoke();
        if action.auto_hides() {
            popup.hide();
        }
    }

    #[test]
    fn should_default_empty_label_to_ok() {
        let action = PopupAction::new("");
        assert_eq!(action.label(), "OK");
        assert_eq!(action.class_name(), "popup-action");
        assert!(action.auto_hides());
    }

    #[test]
    fn should_append_custom_class() {
        let action = PopupAction::new("Remove").with_class("danger");
        assert_eq!(action.class_name(), "popup-action danger");
    }

    #[test]
    fn should_escape_content_and_keep_title_verbatim() {
        let mut popup = Popup::new();
        popup.show("<i>Details</i>", "Name: <R>\nType: \"x\"", vec![]);

        assert_eq!(popup.title(), "<i>Details</i>");
        assert_eq!(
            popup.content_html(),
            "Name: &lt;R&gt;<br>Type: &quot;x&quot;"
        );
    }

    #[test]
    fn should_replace_contents_on_consecutive_shows() {
        let mut popup = Popup::new();
        popup.show("First", "one", vec![PopupAction::new("A"), PopupAction::new("B")]);
        popup.reveal();
        popup.show("Second", "two", vec![PopupAction::new("Close")]);

        assert_eq!(popup.title(), "Second");
        assert_eq!(popup.content(), "two");
        assert_eq!(popup.actions().len(), 1);
        assert_eq!(popup.phase(), Phase::Visible);
    }

    #[test]
    fn should_clear_actions_once_hidden() {
        let mut popup = Popup::new();
        popup.show("Validation", "Please enter a device name and type.", vec![PopupAction::new("OK")]);
        popup.reveal();

        assert!(popup.hide().is_some());
        assert_eq!(popup.actions().len(), 1);
        assert!(popup.finish_hide());
        assert!(popup.actions().is_empty());
        assert!(!popup.phase().is_displayed());
    }

    #[test]
    fn should_ignore_hide_before_first_show() {
        let mut popup = Popup::new();
        assert!(popup.hide().is_none());
        assert!(!popup.finish_hide());
    }

    #[test]
    fn should_ignore_stale_fallback_when_shown_again() {
        let mut popup = Popup::new();
        popup.show("First", "one", vec![PopupAction::new("OK")]);
        popup.reveal();
        let first = popup.hide().unwrap();

        popup.show("Second", "two", vec![PopupAction::new("Close")]);
        popup.reveal();
        let second = popup.hide().unwrap();

        assert!(!popup.finish_hide_for(first));
        assert_eq!(popup.phase(), Phase::Hiding);
        assert_eq!(popup.actions().len(), 1);
        assert!(popup.finish_hide_for(second));
        assert!(popup.actions().is_empty());
    }

    #[test]
    fn should_ignore_clicks_while_hiding() {
        let mut popup = Popup::new();
        popup.show("Details", "", vec![PopupAction::new("Close")]);
        popup.hide();
        assert!(popup.clickable_action(0).is_none());
    }

    #[test]
    fn should_run_handler_and_hide_on_click() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut popup = Popup::new();
        popup.show(
            "Details",
            "",
            vec![PopupAction::new("Close").on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })],
        );
        popup.reveal();

        click(&mut popup, 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(popup.phase(), Phase::Hiding);
    }

    #[test]
    fn should_still_hide_when_handler_fails() {
        let mut popup = Popup::new();
        popup.show(
            "Broken",
            "",
            vec![PopupAction::new("Go").on_click(|| Err(ActionError::new("boom")))],
        );
        popup.reveal();

        click(&mut popup, 0);
        assert_eq!(popup.phase(), Phase::Hiding);
    }

    #[test]
    fn should_stay_open_when_action_keeps_it_open() {
        let mut popup = Popup::new();
        popup.show("Stay", "", vec![PopupAction::new("Next").keep_open()]);
        popup.reveal();

        click(&mut popup, 0);
        assert_eq!(popup.phase(), Phase::Visible);
    }

    #[tokio::test]
    async fn should_resolve_true_when_remove_clicked() {
        let mut popup = Popup::new();
        let confirmation = popup.confirm("Confirm Remove", "Remove device \"Lamp\"?");
        popup.reveal();

        assert_eq!(popup.actions()[0].label(), "Remove");
        assert_eq!(popup.actions()[0].class_name(), "popup-action danger");
        click(&mut popup, 0);
        assert!(confirmation.answer().await);
    }

    #[tokio::test]
    async fn should_resolve_false_when_cancel_clicked() {
        let mut popup = Popup::new();
        let confirmation = popup.confirm("Confirm Remove", "Remove device \"Lamp\"?");
        popup.reveal();

        click(&mut popup, 1);
        assert!(!confirmation.answer().await);
    }

    #[tokio::test]
    async fn should_resolve_false_when_closed_without_answer() {
        let mut popup = Popup::new();
        let confirmation = popup.confirm("Confirm Remove", "Remove device \"Lamp\"?");
        popup.reveal();
        popup.hide();
        popup.finish_hide();

        assert!(!confirmation.answer().await);
    }

    #[tokio::test]
    async fn should_answer_false_when_dismissed_up_front() {
        assert!(!Confirmation::dismissed().answer().await);
    }

    #[tokio::test]
    async fn should_resolve_false_when_replaced_by_another_popup() {
        let mut popup = Popup::new();
        let confirmation = popup.confirm("Confirm Remove", "Remove device \"Lamp\"?");
        popup.show("Device Details", "Name: Router\nType: Wi-Fi", vec![PopupAction::new("Close")]);

        assert!(!confirmation.answer().await);
    }
}
