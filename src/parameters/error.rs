//! Parameter error types

use core::fmt;

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterError {
    /// Unknown parameter or name longer than `PARAM_NAME_LEN`
    InvalidConfig,
    /// Store is full
    StoreFull,
    /// Value type does not match the registered type
    TypeMismatch,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::InvalidConfig => write!(f, "invalid parameter configuration"),
            ParameterError::StoreFull => write!(f, "parameter store full"),
            ParameterError::TypeMismatch => write!(f, "parameter type mismatch"),
        }
    }
}
