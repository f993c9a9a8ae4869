//! Pin authorization engine
//!
//! Pure decision functions. Every fact they depend on (whitelist membership,
//! capability grant, mute status) is passed in by the caller; nothing here
//! performs I/O or reads ambient state.

mod authorization;
mod decision;

pub use authorization::{decide_on_add, decide_on_clear_all, decide_on_remove, PIN_EMOJI};
pub use decision::{Decision, Outcome};
