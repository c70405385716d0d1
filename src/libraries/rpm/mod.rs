//! RPM sensor library
//!
//! Multi-instance rotational speed measurement. Each configured instance is
//! bound to one backend (pulse input, ESC telemetry, EFI, harmonic notch or
//! simulation) at initialization; the manager refreshes the backends every
//! control cycle and only reports readings whose signal quality meets the
//! configured floor.
//!
//! # Usage
//!
//! ```
//! use pico_rpm::libraries::rpm::{RpmManager, RpmType};
//! use pico_rpm::platform::traits::StaticPinMap;
//!
//! static PINS: [i16; 2] = [50, 51];
//!
//! let mut rpm = RpmManager::new();
//! rpm.params_mut().instances[0].sensor_type = RpmType::Pin;
//! rpm.params_mut().instances[0].pin = 52;
//!
//! let mut msg = heapless::String::<50>::new();
//! assert!(!rpm.arming_checks(&StaticPinMap::new(&PINS), &mut msg));
//! assert_eq!(msg.as_str(), "RPM[1] pin 52 invalid");
//! ```

pub mod arming;
pub mod backend;
pub mod manager;
pub mod singleton;
pub mod sources;
pub mod state;

pub use arming::RpmArmingCheck;
pub use backend::RpmBackend;
pub use manager::RpmManager;
pub use singleton::{install, is_installed, with_rpm};
pub use sources::{PulseSample, RpmSources};
pub use state::{RpmState, RPM_TIMEOUT_MS};

pub use crate::parameters::rpm::{RpmInstanceParams, RpmParams, RpmType, RPM_MAX_INSTANCES};
