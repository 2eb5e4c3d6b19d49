//! Application services: use-case implementations.
//!
//! [`device_service::DeviceService`] accepts port implementations via generic
//! parameters (constructor injection), keeping this layer decoupled from the
//! DOM adapter.

pub mod device_service;
pub mod device_store;
pub mod form_service;
