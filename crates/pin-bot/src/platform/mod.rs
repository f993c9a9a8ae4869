//! Chat platform adapters

pub mod rest;

pub use rest::{RestPlatform, PIN_LIMIT_ERROR_CODE};
