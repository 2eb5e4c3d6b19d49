//! Stylesheet injected once into `<head>`.
//!
//! Only the rules the phase classes depend on: the `show` and `entered`
//! classes drive the transitions, and `transitionend` detaches hidden toasts
//! and closes the popup.

pub const STYLESHEET: &str = r"
#toast-container { position: fixed; top: 1rem; right: 1rem; z-index: 1000; }
.toast { opacity: 0; transform: translateY(-0.5rem); transition: opacity 200ms, transform 200ms; }
.toast.show { opacity: 1; transform: none; }
.popup-box { opacity: 0; transition: opacity 200ms; }
.popup-box.show { opacity: 1; }
.device-item { opacity: 0; transition: opacity 200ms; }
.device-item.entered { opacity: 1; }
";
