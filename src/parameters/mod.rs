//! Parameter Storage System
//!
//! In-memory parameter store plus the parameter groups that register their
//! schema into it. Persistence and the MAVLink parameter protocol sit on
//! top of the store and live outside this crate.
//!
//! # Parameter Types
//!
//! - `Bool` - Boolean value
//! - `Int` - 32-bit signed integer
//! - `Float` - 32-bit floating point
//!
//! # Groups
//!
//! - [`rpm`]: `RPM_*` / `RPM2_*` sensor configuration

pub mod error;
pub mod rpm;
pub mod storage;

pub use error::ParameterError;
pub use rpm::{RpmInstanceParams, RpmParams, RpmType, RPM_MAX_INSTANCES};
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
