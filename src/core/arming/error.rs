//! Arming System Error Types
//!
//! Defines error types for pre-arm validation and the bounded message buffer
//! used to report why arming was refused.

use core::fmt;

/// Maximum pre-arm failure message length (MAVLink STATUSTEXT payload)
pub const ARMING_MSG_LEN: usize = 50;

/// Bounded pre-arm failure message
pub type ArmingMessage = heapless::String<ARMING_MSG_LEN>;

/// Errors that can occur during arming operations
#[derive(Debug, Clone, PartialEq)]
pub enum ArmingError {
    /// Pre-arm check failed
    CheckFailed {
        /// Human-readable reason for failure
        message: ArmingMessage,
        /// Check category that failed
        category: CheckCategory,
    },
    /// Check registry is full
    TooManyChecks,
}

impl fmt::Display for ArmingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmingError::CheckFailed { message, category } => {
                write!(f, "PreArm ({}): {}", category, message)
            }
            ArmingError::TooManyChecks => write!(f, "Too many pre-arm checks registered"),
        }
    }
}

/// Pre-arm check categories (ArduPilot ARMING_CHECK bitmask values)
///
/// These categories allow selective enabling/disabling of pre-arm checks
/// via the ARMING_CHECK parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum CheckCategory {
    /// All checks (bitmask: 0xFFFF)
    All = 0xFFFF,
    /// Parameters check (bitmask: 0x0010)
    Parameters = 0x0010,
    /// System check (bitmask: 0x1000)
    System = 0x1000,
}

impl CheckCategory {
    /// Check if this category is enabled in the given bitmask
    pub fn is_enabled(self, bitmask: u16) -> bool {
        (bitmask & (self as u16)) != 0
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::All => write!(f, "All"),
            CheckCategory::Parameters => write!(f, "Parameters"),
            CheckCategory::System => write!(f, "System"),
        }
    }
}

/// `fmt::Write` adapter that silently truncates at the buffer capacity
///
/// Mirrors `snprintf` semantics: output past the end is dropped, never an
/// error, and truncation always lands on a UTF-8 character boundary.
pub struct TruncatingWriter<'a, const N: usize> {
    buf: &'a mut heapless::String<N>,
}

impl<'a, const N: usize> TruncatingWriter<'a, N> {
    /// Wrap a buffer, clearing any previous contents
    pub fn new(buf: &'a mut heapless::String<N>) -> Self {
        buf.clear();
        Self { buf }
    }
}

impl<const N: usize> fmt::Write for TruncatingWriter<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format into a bounded buffer, truncating if the output does not fit
pub fn format_bounded<const N: usize>(buf: &mut heapless::String<N>, args: fmt::Arguments<'_>) {
    let mut writer = TruncatingWriter::new(buf);
    // TruncatingWriter never fails; a Display impl error just ends the message early
    let _ = fmt::write(&mut writer, args);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_category_is_enabled() {
        let bitmask = 0x0010;

        assert!(CheckCategory::Parameters.is_enabled(bitmask));
        assert!(!CheckCategory::System.is_enabled(bitmask));
        assert!(CheckCategory::Parameters.is_enabled(CheckCategory::All as u16));
        assert!(!CheckCategory::Parameters.is_enabled(0));
    }

    #[test]
    fn test_arming_error_display() {
        let mut message = ArmingMessage::new();
        format_bounded(&mut message, format_args!("RPM[{}] no pin set", 1));
        let error = ArmingError::CheckFailed {
            message,
            category: CheckCategory::Parameters,
        };
        assert_eq!(format!("{}", error), "PreArm (Parameters): RPM[1] no pin set");
    }

    #[test]
    fn test_format_bounded_truncates() {
        let mut buf = heapless::String::<8>::new();
        format_bounded(&mut buf, format_args!("RPM[{}] pin {} invalid", 2, 99));
        assert_eq!(buf.as_str(), "RPM[2] p");
    }

    #[test]
    fn test_format_bounded_replaces_previous_contents() {
        let mut buf = heapless::String::<32>::new();
        format_bounded(&mut buf, format_args!("first"));
        format_bounded(&mut buf, format_args!("second"));
        assert_eq!(buf.as_str(), "second");
    }

    #[test]
    fn test_format_bounded_zero_capacity() {
        let mut buf = heapless::String::<0>::new();
        format_bounded(&mut buf, format_args!("anything"));
        assert!(buf.is_empty());
    }
}
