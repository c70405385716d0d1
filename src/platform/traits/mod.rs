//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod gpio;

pub use gpio::{PinValidator, StaticPinMap};
