//! Core autopilot functionality
//!
//! Logging infrastructure and the pre-arm check framework shared by every
//! library in this crate.

pub mod arming;
pub mod logging;
