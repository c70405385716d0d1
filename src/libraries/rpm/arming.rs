//! RPM pre-arm check
//!
//! Adapts [`RpmManager::arming_checks`] to the [`PreArmCheck`] framework so
//! pin misconfiguration blocks arming under the `Parameters` category.

use super::manager::RpmManager;
use crate::core::arming::{ArmingError, ArmingMessage, CheckCategory, CheckResult, PreArmCheck};
use crate::platform::traits::PinValidator;

/// Pre-arm check validating RPM pin configuration
pub struct RpmArmingCheck<'a, P: PinValidator + ?Sized> {
    rpm: &'a RpmManager,
    pins: &'a P,
}

impl<'a, P: PinValidator + ?Sized> RpmArmingCheck<'a, P> {
    pub fn new(rpm: &'a RpmManager, pins: &'a P) -> Self {
        Self { rpm, pins }
    }
}

impl<P: PinValidator + ?Sized> PreArmCheck for RpmArmingCheck<'_, P> {
    fn check(&self) -> CheckResult {
        let mut message = ArmingMessage::new();
        if self.rpm.arming_checks(self.pins, &mut message) {
            return Ok(());
        }
        Err(ArmingError::CheckFailed {
            message,
            category: self.category(),
        })
    }

    fn name(&self) -> &'static str {
        "RPM"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Parameters
    }
}
