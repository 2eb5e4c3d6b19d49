//! Submit handling for the host page's device form.

use devicebox_app::services::form_service::DeviceDraft;
use leptos::prelude::WithValue;
use wasm_bindgen::prelude::*;
use web_sys::HtmlFormElement;

use crate::dom::Field;
use crate::error::WidgetError;
use crate::state::AppState;

/// Guard that removes the `submit` listener on drop.
pub struct FormBinding {
    form: HtmlFormElement,
    on_submit: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for FormBinding {
    fn drop(&mut self) {
        let _ = self
            .form
            .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref());
    }
}

/// Attach the submit handler to `form`.
///
/// The browser's own submission is always suppressed. The name and type
/// fields are looked up again on every submit, so a page that swaps them
/// out keeps working.
pub fn bind(form: HtmlFormElement, state: AppState) -> Result<FormBinding, WidgetError> {
    let target = form.clone();
    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        event.prevent_default();
        submit(&target, state);
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;

    Ok(FormBinding { form, on_submit })
}

fn submit(form: &HtmlFormElement, state: AppState) {
    let ids = state.config().elements;
    let name_field = Field::find(&ids.name_input);
    let type_field = Field::find(&ids.type_input);

    let draft = DeviceDraft {
        name: name_field.as_ref().map(Field::value),
        kind: type_field.as_ref().map(Field::value),
    };
    if state.service.with_value(|service| service.submit(draft)).is_err() {
        return;
    }

    form.reset();
    if let Some(field) = name_field {
        field.focus();
    }
}
