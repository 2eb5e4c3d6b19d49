//! Application state shared by every mounted part of the widget.

use std::sync::Arc;

use devicebox_app::config::WidgetConfig;
use devicebox_app::ports::DeviceRepository;
use devicebox_app::services::device_service::DeviceService;
use devicebox_app::services::device_store::DeviceStore;
use devicebox_domain::device::Device;
use devicebox_domain::error::{DeviceBoxError, NotFoundError};
use devicebox_domain::id::DeviceId;
use leptos::prelude::*;

use crate::components::{PopupHandle, ToastProvider};

/// The device service as wired in the browser.
pub type WidgetService = DeviceService<StoreHandle, ToastProvider, PopupHandle>;

/// Device store held in a signal; every mutation re-renders the list.
#[derive(Clone, Copy)]
pub struct StoreHandle(RwSignal<DeviceStore>);

impl StoreHandle {
    pub fn devices(&self) -> Vec<Device> {
        self.0.with(|store| store.devices().to_vec())
    }
}

fn disposed(id: impl ToString) -> DeviceBoxError {
    NotFoundError {
        entity: "DeviceStore",
        id: id.to_string(),
    }
    .into()
}

impl DeviceRepository for StoreHandle {
    fn add(&self, device: Device) -> Result<Device, DeviceBoxError> {
        let id = device.id;
        self.0
            .try_update(|store| store.add(device))
            .unwrap_or_else(|| Err(disposed(id)))
    }

    fn remove(&self, id: DeviceId) -> Result<Device, DeviceBoxError> {
        self.0
            .try_update(|store| store.remove(id))
            .unwrap_or_else(|| Err(disposed(id)))
    }
}

/// Explicitly constructed state object, passed to each mount point and
/// provided as context inside them.
#[derive(Clone, Copy)]
pub struct AppState {
    pub store: StoreHandle,
    pub toasts: ToastProvider,
    pub popup: PopupHandle,
    pub service: StoredValue<WidgetService>,
}

impl AppState {
    /// Create the state. Must run under the reactive owner that outlives the
    /// widget.
    pub fn new(config: Arc<WidgetConfig>) -> Self {
        let hide_fallback = config.animation.hide_fallback();
        let store = StoreHandle(RwSignal::new(DeviceStore::new()));
        let toasts = ToastProvider::new(hide_fallback, config.toasts.default_duration());
        let popup = PopupHandle::new(hide_fallback);
        let service = StoredValue::new(DeviceService::new(store, toasts, popup, config));

        Self {
            store,
            toasts,
            popup,
            service,
        }
    }

    pub fn config(&self) -> WidgetConfig {
        self.service.with_value(|service| service.config().clone())
    }
}

/// Access the widget state from Leptos context.
///
/// Must be called within a tree mounted by [`crate::start`].
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found in context")
}
