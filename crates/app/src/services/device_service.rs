//! Device service: the widget's use-cases: add, inspect, and remove devices.

use std::future::Future;
use std::sync::Arc;

use devicebox_domain::device::Device;

use crate::config::WidgetConfig;
use crate::feedback;
use crate::popup::PopupAction;
use crate::ports::{DeviceRepository, Dialogs, Notifier};
use crate::services::form_service::{DeviceDraft, SubmitError, parse_draft};
use crate::toast::ToastOptions;

/// Application service wiring the device store to its user feedback.
#[derive(Debug, Clone)]
pub struct DeviceService<R, N, D> {
    repo: R,
    notifier: N,
    dialogs: D,
    config: Arc<WidgetConfig>,
}

impl<R: DeviceRepository, N: Notifier, D: Dialogs> DeviceService<R, N, D> {
    /// Create a new service backed by the given ports.
    pub fn new(repo: R, notifier: N, dialogs: D, config: Arc<WidgetConfig>) -> Self {
        Self {
            repo,
            notifier,
            dialogs,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Handle a form submission.
    ///
    /// Missing inputs raise an error toast, blank fields open the validation
    /// dialog. On success the device is stored and announced with a toast.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] that was reported to the user. Nothing is
    /// stored in that case.
    #[tracing::instrument(skip_all)]
    pub fn submit(&self, draft: DeviceDraft) -> Result<Device, SubmitError> {
        let device = parse_draft(draft).map_err(|err| self.reject(err))?;
        let device = self
            .repo
            .add(device)
            .map_err(|err| self.reject(err.into()))?;

        self.notifier.notify(
            feedback::device_added(&device),
            ToastOptions::success(self.config.toasts.added()),
        );
        Ok(device)
    }

    /// Open the details dialog for `device`.
    pub fn show_details(&self, device: &Device) {
        self.dialogs.show(
            feedback::DETAILS_TITLE,
            &device.details(),
            vec![PopupAction::new("Close")],
        );
    }

    fn reject(&self, err: SubmitError) -> SubmitError {
        match &err {
            SubmitError::MissingInputs => {
                tracing::error!(
                    name_input = %self.config.elements.name_input,
                    type_input = %self.config.elements.type_input,
                    "device form inputs not found"
                );
                self.notifier.notify(
                    feedback::inputs_missing(&self.config.elements),
                    ToastOptions::error(self.config.toasts.error()),
                );
            }
            SubmitError::Invalid(reason) => {
                tracing::debug!(%reason, "device form rejected");
                self.dialogs.show(
                    feedback::VALIDATION_TITLE,
                    feedback::VALIDATION_MESSAGE,
                    vec![PopupAction::new("OK")],
                );
            }
            SubmitError::Rejected(reason) => {
                tracing::error!(%reason, "device store rejected device");
                self.notifier.notify(
                    err.to_string(),
                    ToastOptions::error(self.config.toasts.error()),
                );
            }
        }
        err
    }
}

impl<R, N, D> DeviceService<R, N, D>
where
    R: DeviceRepository + Clone,
    N: Notifier + Clone,
    D: Dialogs,
{
    /// Ask for confirmation, then remove `device`.
    ///
    /// The dialog is shown immediately; the returned future resolves once the
    /// user answered, to `true` if the device was removed. The removal
    /// targets the device id, so entries added or removed meanwhile do not
    /// change which device goes away.
    pub fn remove(&self, device: Device) -> impl Future<Output = bool> + use<R, N, D> {
        let confirmation = self.dialogs.confirm(
            feedback::CONFIRM_REMOVE_TITLE,
            &feedback::confirm_remove(&device),
        );
        let repo = self.repo.clone();
        let notifier = self.notifier.clone();
        let duration = self.config.toasts.removed();

        async move {
            if !confirmation.answer().await {
                tracing::debug!(device_id = %device.id, "removal cancelled");
                return false;
            }
            match repo.remove(device.id) {
                Ok(removed) => {
                    notifier.notify(
                        feedback::device_removed(&removed),
                        ToastOptions::success(duration),
                    );
                    true
                }
                Err(err) => {
                    tracing::warn!(device_id = %device.id, %err, "device already removed");
                    false
                }
            }
        }
    }
}
