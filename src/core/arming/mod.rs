//! Arming system types and logic
//!
//! Pre-arm check framework: error types, check categories and the checker
//! that runs registered checks before arming.

pub mod checks;
pub mod error;

pub use checks::{ArmingChecker, CheckResult, PreArmCheck, MAX_ARMING_CHECKS};
pub use error::{
    format_bounded, ArmingError, ArmingMessage, CheckCategory, TruncatingWriter, ARMING_MSG_LEN,
};
