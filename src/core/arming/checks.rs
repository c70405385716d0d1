//! Pre-Arm Checks
//!
//! Defines the PreArmCheck trait and the checker that runs registered
//! checks before the vehicle is allowed to arm.

use super::error::{ArmingError, CheckCategory};

/// Maximum number of checks an [`ArmingChecker`] can hold
pub const MAX_ARMING_CHECKS: usize = 16;

/// Result of a pre-arm check execution
pub type CheckResult = Result<(), ArmingError>;

/// Pre-arm check trait
///
/// Implement this trait to create custom pre-arm checks that validate
/// system health before allowing arming. Checks hold references to whatever
/// subsystem they validate, so `check` takes no external state.
///
/// # Example
///
/// ```
/// use pico_rpm::core::arming::{ArmingError, CheckCategory, CheckResult, PreArmCheck};
///
/// struct AlwaysPass;
///
/// impl PreArmCheck for AlwaysPass {
///     fn check(&self) -> CheckResult {
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "Always Pass"
///     }
///
///     fn category(&self) -> CheckCategory {
///         CheckCategory::System
///     }
/// }
///
/// assert!(AlwaysPass.check().is_ok());
/// ```
pub trait PreArmCheck {
    /// Execute the check
    ///
    /// Returns Ok if the check passes, or Err with reason if it fails.
    fn check(&self) -> CheckResult;

    /// Get the check name for logging and error reporting
    fn name(&self) -> &'static str;

    /// Get the check category for selective enabling via ARMING_CHECK
    fn category(&self) -> CheckCategory;
}

/// Arming checker that orchestrates pre-arm check execution
///
/// Manages a collection of pre-arm checks and executes them based on
/// the ARMING_CHECK parameter bitmask.
pub struct ArmingChecker<'a> {
    /// Registered checks
    checks: heapless::Vec<&'a dyn PreArmCheck, MAX_ARMING_CHECKS>,
    /// Enabled categories bitmask (from ARMING_CHECK parameter)
    enabled_categories: u16,
}

impl<'a> ArmingChecker<'a> {
    /// Create a new arming checker with the given enabled categories bitmask
    pub fn new(enabled_categories: u16) -> Self {
        Self {
            checks: heapless::Vec::new(),
            enabled_categories,
        }
    }

    /// Register a pre-arm check
    pub fn register(&mut self, check: &'a dyn PreArmCheck) -> Result<(), ArmingError> {
        self.checks
            .push(check)
            .map_err(|_| ArmingError::TooManyChecks)
    }

    /// Number of registered checks
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if no checks are registered
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run all enabled pre-arm checks
    ///
    /// Executes checks in registration order, short-circuiting on the first
    /// failure. Only runs checks whose category is enabled in the bitmask.
    pub fn run_checks(&self) -> CheckResult {
        // If ARMING_CHECK is 0, all checks are disabled (bench testing only)
        if self.enabled_categories == 0 {
            crate::log_warn!("ARMING_CHECK=0: All pre-arm checks disabled (bench testing only)");
            return Ok(());
        }

        let mut _executed_count = 0;
        for check in &self.checks {
            if !check.category().is_enabled(self.enabled_categories) {
                crate::log_debug!("Pre-arm check skipped (disabled): {}", check.name());
                continue;
            }

            crate::log_debug!("Pre-arm check: {}", check.name());
            if let Err(err) = check.check() {
                if let ArmingError::CheckFailed { message, .. } = &err {
                    crate::log_warn!("PreArm: {}", message.as_str());
                }
                return Err(err);
            }
            _executed_count += 1;
        }

        crate::log_info!("All pre-arm checks passed ({} executed)", _executed_count);
        Ok(())
    }
}
