//! RPM Sensor Parameter Definitions
//!
//! Defines the `RPM*` parameter group following ArduPilot naming.
//!
//! # Parameters
//!
//! First instance:
//! - `RPM_TYPE` - Sensor type (see [`RpmType`])
//! - `RPM_SCALING` - Scaling factor between sensor reading and RPM
//! - `RPM_MAX` - Maximum RPM to report
//! - `RPM_MIN` - Minimum RPM to report
//! - `RPM_MIN_QUAL` - Minimum signal quality to be considered healthy
//! - `RPM_PIN` - Input pin number (-1 = disabled)
//! - `RPM_ESC_MASK` - ESC telemetry channels to average (bit 0 = channel 1)
//!
//! Second instance:
//! - `RPM2_TYPE`, `RPM2_SCALING`, `RPM2_PIN`, `RPM2_ESC_MASK`
//!
//! The second instance has no bound or quality parameters. Its bounds stay
//! at 0 (unbounded) and the quality floor is always taken from
//! `RPM_MIN_QUAL`, which is shared by every instance.

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

/// Number of RPM instances supported
pub const RPM_MAX_INSTANCES: usize = 2;

/// RPM sensor type (ArduPilot `RPM_TYPE` values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum RpmType {
    /// Instance disabled
    #[default]
    None = 0,
    /// Pulse input on a pin (legacy name, same backend as `Pin`)
    Pwm = 1,
    /// Pulse input on an AUX pin
    Pin = 2,
    /// Engine management unit reported RPM
    Efi = 3,
    /// RPM derived from the dynamic harmonic notch centre frequency
    HarmonicNotch = 4,
    /// Average of ESC telemetry RPM over `esc_mask`
    EscTelem = 5,
    /// Simulated sensor (SITL only)
    Sitl = 10,
}

impl RpmType {
    /// Decode a raw parameter value
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(RpmType::None),
            1 => Some(RpmType::Pwm),
            2 => Some(RpmType::Pin),
            3 => Some(RpmType::Efi),
            4 => Some(RpmType::HarmonicNotch),
            5 => Some(RpmType::EscTelem),
            10 => Some(RpmType::Sitl),
            _ => None,
        }
    }

    /// Whether this type reads pulses from a physical input pin
    pub fn requires_pin(self) -> bool {
        matches!(self, RpmType::Pwm | RpmType::Pin)
    }

    /// Short name for logs and status text
    pub fn name(self) -> &'static str {
        match self {
            RpmType::None => "None",
            RpmType::Pwm => "PWM",
            RpmType::Pin => "AUXPIN",
            RpmType::Efi => "EFI",
            RpmType::HarmonicNotch => "HNTCH",
            RpmType::EscTelem => "ESC",
            RpmType::Sitl => "SITL",
        }
    }
}

/// Configuration of a single RPM instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RpmInstanceParams {
    /// Sensor type, `RpmType::None` disables the instance
    pub sensor_type: RpmType,
    /// Multiplier from backend units to RPM
    pub scaling: f32,
    /// Readings above this are discarded (0 = no upper bound)
    pub maximum: f32,
    /// Readings below this are discarded (0 = no lower bound)
    pub minimum: f32,
    /// Quality floor; only the first instance's value is used
    pub quality_min: f32,
    /// Input pin (-1 = unset)
    pub pin: i16,
    /// ESC telemetry channels to average
    pub esc_mask: u32,
}

impl RpmInstanceParams {
    /// Defaults of the first instance
    pub const PRIMARY: Self = Self {
        sensor_type: RpmType::None,
        scaling: 1.0,
        maximum: 100_000.0,
        minimum: 10.0,
        quality_min: 0.5,
        pin: -1,
        esc_mask: 0,
    };

    /// Defaults of instances without bound/quality parameters
    pub const SECONDARY: Self = Self {
        sensor_type: RpmType::None,
        scaling: 1.0,
        maximum: 0.0,
        minimum: 0.0,
        quality_min: 0.0,
        pin: -1,
        esc_mask: 0,
    };
}

/// Parameter names of one instance; `None` means not exposed
struct InstanceNames {
    sensor_type: &'static str,
    scaling: &'static str,
    maximum: Option<&'static str>,
    minimum: Option<&'static str>,
    quality_min: Option<&'static str>,
    pin: &'static str,
    esc_mask: &'static str,
}

const NAMES: [InstanceNames; RPM_MAX_INSTANCES] = [
    InstanceNames {
        sensor_type: "RPM_TYPE",
        scaling: "RPM_SCALING",
        maximum: Some("RPM_MAX"),
        minimum: Some("RPM_MIN"),
        quality_min: Some("RPM_MIN_QUAL"),
        pin: "RPM_PIN",
        esc_mask: "RPM_ESC_MASK",
    },
    InstanceNames {
        sensor_type: "RPM2_TYPE",
        scaling: "RPM2_SCALING",
        maximum: None,
        minimum: None,
        quality_min: None,
        pin: "RPM2_PIN",
        esc_mask: "RPM2_ESC_MASK",
    },
];

/// RPM parameters for all instances
#[derive(Debug, Clone, PartialEq)]
pub struct RpmParams {
    /// Per-instance configuration
    pub instances: [RpmInstanceParams; RPM_MAX_INSTANCES],
}

impl Default for RpmParams {
    fn default() -> Self {
        Self {
            instances: [RpmInstanceParams::PRIMARY, RpmInstanceParams::SECONDARY],
        }
    }
}

impl RpmParams {
    /// Shared quality floor (`RPM_MIN_QUAL`)
    pub fn quality_min(&self) -> f32 {
        self.instances[0].quality_min
    }

    /// Register RPM parameters with default values
    ///
    /// Parameters are only registered if they don't already exist.
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        let defaults = Self::default();

        for (names, params) in NAMES.iter().zip(defaults.instances.iter()) {
            // Backends are bound at initialization only
            store.register(
                names.sensor_type,
                ParamValue::Int(params.sensor_type as i32),
                ParamFlags::REBOOT_REQUIRED,
            )?;
            store.register(
                names.scaling,
                ParamValue::Float(params.scaling),
                ParamFlags::empty(),
            )?;
            if let Some(name) = names.maximum {
                store.register(name, ParamValue::Float(params.maximum), ParamFlags::empty())?;
            }
            if let Some(name) = names.minimum {
                store.register(name, ParamValue::Float(params.minimum), ParamFlags::empty())?;
            }
            if let Some(name) = names.quality_min {
                store.register(
                    name,
                    ParamValue::Float(params.quality_min),
                    ParamFlags::empty(),
                )?;
            }
            store.register(
                names.pin,
                ParamValue::Int(params.pin as i32),
                ParamFlags::empty(),
            )?;
            store.register(
                names.esc_mask,
                ParamValue::Int(params.esc_mask as i32),
                ParamFlags::empty(),
            )?;
        }

        Ok(())
    }

    /// Load RPM parameters from parameter store
    ///
    /// Missing parameters fall back to their defaults. Unknown type codes
    /// load as `RpmType::None`.
    pub fn from_store(store: &ParameterStore) -> Self {
        let mut params = Self::default();

        for (index, (names, instance)) in NAMES.iter().zip(params.instances.iter_mut()).enumerate()
        {
            let raw_type = read_i32(store, names.sensor_type, instance.sensor_type as i32);
            instance.sensor_type = match RpmType::from_i32(raw_type) {
                Some(sensor_type) => sensor_type,
                None => {
                    crate::log_warn!("RPM[{}]: unknown type {}, disabled", index + 1, raw_type);
                    RpmType::None
                }
            };
            instance.scaling = read_f32(store, names.scaling, instance.scaling);
            if let Some(name) = names.maximum {
                instance.maximum = read_f32(store, name, instance.maximum);
            }
            if let Some(name) = names.minimum {
                instance.minimum = read_f32(store, name, instance.minimum);
            }
            if let Some(name) = names.quality_min {
                instance.quality_min = read_f32(store, name, instance.quality_min);
            }
            let raw_pin = read_i32(store, names.pin, instance.pin as i32);
            instance.pin = raw_pin.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
            instance.esc_mask = read_i32(store, names.esc_mask, instance.esc_mask as i32) as u32;
        }

        params
    }
}

fn read_i32(store: &ParameterStore, name: &str, default: i32) -> i32 {
    store.get(name).map(ParamValue::as_i32).unwrap_or(default)
}

fn read_f32(store: &ParameterStore, name: &str, default: f32) -> f32 {
    store.get(name).map(ParamValue::as_f32).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpm_type_from_i32() {
        assert_eq!(RpmType::from_i32(0), Some(RpmType::None));
        assert_eq!(RpmType::from_i32(2), Some(RpmType::Pin));
        assert_eq!(RpmType::from_i32(5), Some(RpmType::EscTelem));
        assert_eq!(RpmType::from_i32(10), Some(RpmType::Sitl));
        assert_eq!(RpmType::from_i32(6), None);
        assert_eq!(RpmType::from_i32(-1), None);
    }

    #[test]
    fn test_rpm_type_requires_pin() {
        assert!(RpmType::Pwm.requires_pin());
        assert!(RpmType::Pin.requires_pin());
        assert!(!RpmType::EscTelem.requires_pin());
        assert!(!RpmType::None.requires_pin());
    }

    #[test]
    fn test_register_defaults() {
        let mut store = ParameterStore::new();
        RpmParams::register_defaults(&mut store).unwrap();

        assert_eq!(store.get("RPM_TYPE"), Some(&ParamValue::Int(0)));
        assert_eq!(store.get("RPM_SCALING"), Some(&ParamValue::Float(1.0)));
        assert_eq!(store.get("RPM_MAX"), Some(&ParamValue::Float(100_000.0)));
        assert_eq!(store.get("RPM_MIN"), Some(&ParamValue::Float(10.0)));
        assert_eq!(store.get("RPM_MIN_QUAL"), Some(&ParamValue::Float(0.5)));
        assert_eq!(store.get("RPM_PIN"), Some(&ParamValue::Int(-1)));
        assert_eq!(store.get("RPM_ESC_MASK"), Some(&ParamValue::Int(0)));
        assert_eq!(store.get("RPM2_TYPE"), Some(&ParamValue::Int(0)));
        assert_eq!(store.get("RPM2_PIN"), Some(&ParamValue::Int(-1)));

        // Second instance has no bound or quality parameters
        assert!(store.get("RPM2_MAX").is_none());
        assert!(store.get("RPM2_MIN_QUAL").is_none());
        assert_eq!(store.len(), 11);
    }

    #[test]
    fn test_only_type_requires_reboot() {
        let mut store = ParameterStore::new();
        RpmParams::register_defaults(&mut store).unwrap();

        assert!(store.requires_reboot("RPM_TYPE"));
        assert!(store.requires_reboot("RPM2_TYPE"));
        // Pin changes are picked up by the running backend
        assert!(!store.requires_reboot("RPM_PIN"));
        assert!(!store.requires_reboot("RPM2_PIN"));
        assert!(!store.requires_reboot("RPM_SCALING"));

        store.set("RPM_PIN", ParamValue::Int(50)).unwrap();
        assert!(!store.reboot_pending());
        store
            .set("RPM_TYPE", ParamValue::Int(RpmType::Pin as i32))
            .unwrap();
        assert!(store.reboot_pending());
    }

    #[test]
    fn test_from_store_defaults() {
        let mut store = ParameterStore::new();
        RpmParams::register_defaults(&mut store).unwrap();

        let params = RpmParams::from_store(&store);
        assert_eq!(params, RpmParams::default());
        assert!((params.quality_min() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_store_custom_values() {
        let mut store = ParameterStore::new();
        RpmParams::register_defaults(&mut store).unwrap();

        store
            .set("RPM_TYPE", ParamValue::Int(RpmType::EscTelem as i32))
            .unwrap();
        store.set("RPM_ESC_MASK", ParamValue::Int(0b0011)).unwrap();
        store.set("RPM_MIN_QUAL", ParamValue::Float(0.8)).unwrap();
        store.set("RPM2_TYPE", ParamValue::Float(2.0)).unwrap();
        store.set("RPM2_PIN", ParamValue::Int(54)).unwrap();
        store.set("RPM2_SCALING", ParamValue::Float(0.5)).unwrap();

        let params = RpmParams::from_store(&store);
        assert_eq!(params.instances[0].sensor_type, RpmType::EscTelem);
        assert_eq!(params.instances[0].esc_mask, 0b0011);
        assert!((params.quality_min() - 0.8).abs() < f32::EPSILON);
        assert_eq!(params.instances[1].sensor_type, RpmType::Pin);
        assert_eq!(params.instances[1].pin, 54);
        assert!((params.instances[1].scaling - 0.5).abs() < f32::EPSILON);
        assert_eq!(params.instances[1].maximum, 0.0);
    }

    #[test]
    fn test_from_store_unknown_type_disables() {
        let mut store = ParameterStore::new();
        RpmParams::register_defaults(&mut store).unwrap();
        store.set("RPM_TYPE", ParamValue::Int(42)).unwrap();

        let params = RpmParams::from_store(&store);
        assert_eq!(params.instances[0].sensor_type, RpmType::None);
    }

    #[test]
    fn test_from_store_empty_uses_defaults() {
        let store = ParameterStore::new();
        assert_eq!(RpmParams::from_store(&store), RpmParams::default());
    }
}
