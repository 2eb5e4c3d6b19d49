//! # devicebox-dashboard
//!
//! Leptos (CSR) adapter of the device widget.
//!
//! [`start`] hooks into a host page that already contains the device form
//! and list, creates the toast overlay and popup host under `<body>` when
//! missing, and mounts one Leptos view into each of them. All three share a
//! single [`AppState`](state::AppState).

use std::sync::Arc;

use devicebox_app::config::{CONFIG_ELEMENT_ID, WidgetConfig};
use leptos::mount::mount_to;
use leptos::prelude::*;
use web_sys::{HtmlElement, HtmlFormElement};

mod components;
pub mod dom;
pub mod error;
mod form;
pub mod state;
mod styles;

use components::{DeviceList, PopupBox, ToastContainer};
use error::WidgetError;
use form::FormBinding;
use state::AppState;

/// A running widget.
///
/// Dropping it detaches the form listener and disposes the shared state;
/// call [`Widget::forget`] to keep it alive for the lifetime of the page.
pub struct Widget {
    _form: FormBinding,
    _owner: Owner,
}

impl Widget {
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Read the optional JSON configuration block of the page.
///
/// # Errors
///
/// Returns [`WidgetError::Config`] when the block is malformed or invalid.
pub fn load_config() -> Result<WidgetConfig, WidgetError> {
    let json = dom::text_of(CONFIG_ELEMENT_ID);
    Ok(WidgetConfig::load(json.as_deref())?)
}

/// Start the widget.
///
/// # Errors
///
/// Returns [`WidgetError::MissingElement`] when the form or the list is not
/// in the page, in which case nothing is mounted, or a DOM error if the
/// overlay elements cannot be created.
pub fn start(config: WidgetConfig) -> Result<Widget, WidgetError> {
    let ids = &config.elements;
    let form = dom::find::<HtmlFormElement>(&ids.form)
        .ok_or_else(|| WidgetError::MissingElement(ids.form.clone()))?;
    let list = dom::find::<HtmlElement>(&ids.list)
        .ok_or_else(|| WidgetError::MissingElement(ids.list.clone()))?;

    dom::inject_styles(&ids.styles, styles::STYLESHEET)?;
    let toast_host = dom::ensure_body_element(&ids.toast_container)?;
    let popup_host = dom::ensure_body_element(&ids.popup)?;

    let owner = Owner::new();
    let state = owner.with(|| AppState::new(Arc::new(config)));

    list.set_inner_html("");
    mount_to(list, move || {
        provide_context(state);
        view! { <DeviceList/> }
    })
    .forget();
    mount_to(toast_host, move || view! { <ToastContainer provider=state.toasts/> }).forget();
    mount_to(popup_host, move || view! { <PopupBox handle=state.popup/> }).forget();

    let form = form::bind(form, state)?;
    leptos::logging::log!("device widget started");

    Ok(Widget {
        _form: form,
        _owner: owner,
    })
}
