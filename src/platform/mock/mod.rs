//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be
//! used for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "mock")]
//! # {
//! use pico_rpm::platform::mock::{MockPinValidator, MockRpmSources};
//! use pico_rpm::platform::traits::PinValidator;
//!
//! let pins = MockPinValidator::with_pins(&[50, 51]);
//! assert!(pins.is_valid_pin(50));
//!
//! let mut sources = MockRpmSources::new();
//! sources.set_esc_rpm(0, Some(4500.0));
//! # }
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod sources;

pub use gpio::MockPinValidator;
pub use sources::MockRpmSources;
