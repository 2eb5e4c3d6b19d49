//! Thin helpers over `web_sys` for the elements the widget hooks into.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::error::WidgetError;

pub fn document() -> Result<Document, WidgetError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(WidgetError::NoDocument)
}

/// Look up an element by id and cast it, `None` if absent or of another type.
pub fn find<T: JsCast>(id: &str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

/// Text content of the element with `id`, if any.
pub fn text_of(id: &str) -> Option<String> {
    document().ok()?.get_element_by_id(id)?.text_content()
}

/// Return the element with `id`, creating an empty `<div>` under `<body>`
/// when it does not exist yet. Calling it again never creates a second one.
pub fn ensure_body_element(id: &str) -> Result<HtmlElement, WidgetError> {
    let document = document()?;
    if let Some(existing) = document.get_element_by_id(id) {
        return existing
            .dyn_into::<HtmlElement>()
            .map_err(|_| WidgetError::Dom(format!("#{id} is not an HTML element")));
    }

    let body = document
        .body()
        .ok_or_else(|| WidgetError::MissingElement("body".to_string()))?;
    let element = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::Dom("created <div> is not an HTML element".to_string()))?;
    element.set_id(id);
    body.append_child(&element)?;
    Ok(element)
}

/// Add a `<style id=…>` block to `<head>` unless one with that id exists.
pub fn inject_styles(id: &str, css: &str) -> Result<(), WidgetError> {
    let document = document()?;
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    let head = document
        .head()
        .ok_or_else(|| WidgetError::MissingElement("head".to_string()))?;
    head.append_child(&style)?;
    Ok(())
}

/// A form control whose value the widget reads.
pub enum Field {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl Field {
    /// Find the control with `id`, whichever kind it is.
    pub fn find(id: &str) -> Option<Self> {
        let element = document().ok()?.get_element_by_id(id)?;
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::Select(select)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea)
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::Select(select) => select.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    pub fn focus(&self) {
        let focused = match self {
            Self::Input(input) => input.focus(),
            Self::Select(select) => select.focus(),
            Self::TextArea(area) => area.focus(),
        };
        if let Err(err) = focused {
            leptos::logging::warn!("failed to focus field: {err:?}");
        }
    }
}
