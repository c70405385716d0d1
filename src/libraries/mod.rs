//! Common libraries
//!
//! Vehicle-agnostic libraries shared across vehicle types, following
//! ArduPilot's library architecture.
//!
//! ## Libraries
//!
//! - `rpm`: RPM sensor frontend (AP_RPM equivalent)

pub mod rpm;

pub use rpm::{RpmManager, RpmSources};
