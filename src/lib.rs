#![cfg_attr(not(test), no_std)]

//! pico_rpm - RPM sensor frontend for embedded autopilots
//!
//! This library owns the per-instance RPM configuration, selects a sensing
//! backend for each configured instance, drives those backends once per
//! control cycle and gates their output on signal quality.
//!
//! # Modules
//!
//! - [`core`]: Logging macros and the pre-arm check framework
//! - [`parameters`]: Parameter store and the `RPM*` parameter group
//! - [`platform`]: Hardware abstraction seams (pin validity) and mocks
//! - [`libraries`]: ArduPilot `libraries/` equivalents (the RPM manager)
//!
//! # Example
//!
//! ```
//! use pico_rpm::libraries::rpm::{RpmManager, RpmSources, RpmType};
//!
//! struct Telemetry;
//!
//! impl RpmSources for Telemetry {
//!     fn now_ms(&self) -> u32 {
//!         1_000
//!     }
//!
//!     fn esc_rpm(&self, _channel: u8) -> Option<f32> {
//!         Some(4500.0)
//!     }
//! }
//!
//! let mut rpm = RpmManager::new();
//! rpm.params_mut().instances[0].sensor_type = RpmType::EscTelem;
//! rpm.params_mut().instances[0].esc_mask = 0b0001;
//! rpm.initialize();
//! rpm.update(&mut Telemetry);
//!
//! assert_eq!(rpm.get_rpm(0), Some(4500.0));
//! ```

// Core systems (logging, arming checks)
pub mod core;

// Parameter storage and parameter groups
pub mod parameters;

// Platform abstraction layer
pub mod platform;

// Common libraries (ArduPilot libraries/ equivalent)
pub mod libraries;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
