//! Photovoltaic module electrical model
//!
//! Single-diode approximation of a module's current/voltage characteristic,
//! fitted from datasheet points or set directly, with a maximum power point
//! search for regulators that track it.

pub mod electrical;
pub mod error;
pub mod parameters;

pub use electrical::ModuleModel;
pub use error::ModuleError;
pub use parameters::{Datasheet, ModuleParameters};
