//! Platform abstraction layer
//!
//! Hardware-facing seams consumed by the libraries in this crate. Board
//! support implements these traits; the mock module provides host test
//! doubles.

pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use traits::{PinValidator, StaticPinMap};
