//! # devicebox-domain
//!
//! Pure domain model for the devicebox widget.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Devices** (a user-entered name and type)
//! - Escape untrusted text before it is interpolated into HTML
//! - Describe the **visibility lifecycle** shared by toasts and the popup
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser APIs.

pub mod error;
pub mod id;
pub mod sanitize;
pub mod visibility;

pub mod device;
