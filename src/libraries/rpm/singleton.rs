//! Process-wide RPM manager
//!
//! At most one [`RpmManager`] may be installed per process. Vehicle code
//! installs it once at boot and reaches it afterwards through [`with_rpm`]
//! from any task.

use core::cell::RefCell;
use critical_section::Mutex;

use super::manager::RpmManager;

static RPM: Mutex<RefCell<Option<RpmManager>>> = Mutex::new(RefCell::new(None));

/// Install the process-wide RPM manager
///
/// # Panics
///
/// Panics if a manager is already installed.
pub fn install(manager: RpmManager) {
    let installed = critical_section::with(|cs| {
        let mut slot = RPM.borrow_ref_mut(cs);
        if slot.is_some() {
            return false;
        }
        *slot = Some(manager);
        true
    });

    if !installed {
        panic!("RpmManager must be singleton");
    }
    crate::log_debug!("RPM manager installed");
}

/// Whether the process-wide manager has been installed
pub fn is_installed() -> bool {
    critical_section::with(|cs| RPM.borrow_ref(cs).is_some())
}

/// Run `f` against the process-wide manager
///
/// Returns `None` if no manager has been installed. `f` runs inside a
/// critical section and must not call back into this module.
pub fn with_rpm<R>(f: impl FnOnce(&mut RpmManager) -> R) -> Option<R> {
    critical_section::with(|cs| RPM.borrow_ref_mut(cs).as_mut().map(f))
}
