//! Parameter Storage Types
//!
//! Provides the in-memory `ParameterStore` that parameter groups register
//! their schema into. Persistence is owned by the platform and is not part
//! of this crate.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length (MAVLink param_id)
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters (must be a power of two)
pub const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter change takes effect only after reboot
        const REBOOT_REQUIRED = 0b00000100;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    /// Get type discriminant
    pub fn type_id(&self) -> u8 {
        match self {
            ParamValue::Bool(_) => 1,
            ParamValue::Int(_) => 2,
            ParamValue::Float(_) => 3,
        }
    }

    /// Read the value as an integer, truncating floats
    pub fn as_i32(&self) -> i32 {
        match *self {
            ParamValue::Bool(v) => v as i32,
            ParamValue::Int(v) => v,
            ParamValue::Float(v) => v as i32,
        }
    }

    /// Read the value as a float
    pub fn as_f32(&self) -> f32 {
        match *self {
            ParamValue::Bool(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            }
            ParamValue::Int(v) => v as f32,
            ParamValue::Float(v) => v,
        }
    }
}

/// Parameter metadata
#[derive(Debug, Clone)]
pub struct ParamMetadata {
    /// Parameter flags
    pub flags: ParamFlags,
}

/// Parameter store for configuration management
///
/// Stores parameters as key-value pairs with metadata (flags).
pub struct ParameterStore {
    /// Parameter values
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
    /// Parameter metadata
    metadata: FnvIndexMap<String<PARAM_NAME_LEN>, ParamMetadata, MAX_PARAMS>,
    /// A `REBOOT_REQUIRED` parameter changed since boot
    reboot_pending: bool,
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
            metadata: FnvIndexMap::new(),
            reboot_pending: false,
        }
    }

    fn key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
        let mut key = String::<PARAM_NAME_LEN>::new();
        key.push_str(name)
            .map_err(|_| ParameterError::InvalidConfig)?;
        Ok(key)
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = Self::key(name).ok()?;
        self.parameters.get(&key)
    }

    /// Set parameter value
    ///
    /// The value must keep the registered type, except that `Int` and
    /// `Float` are interchangeable (ground stations send both as floats).
    /// Changing a `REBOOT_REQUIRED` parameter marks a reboot as pending.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = Self::key(name)?;

        let current = self
            .parameters
            .get(&key)
            .ok_or(ParameterError::InvalidConfig)?;

        let value = match (*current, value) {
            (ParamValue::Int(_), ParamValue::Float(v)) => ParamValue::Int(v as i32),
            (ParamValue::Float(_), ParamValue::Int(v)) => ParamValue::Float(v as f32),
            (current, value) if current.type_id() == value.type_id() => value,
            _ => return Err(ParameterError::TypeMismatch),
        };

        let changed = *current != value;
        let reboot = self
            .metadata
            .get(&key)
            .is_some_and(|meta| meta.flags.contains(ParamFlags::REBOOT_REQUIRED));
        if changed && reboot {
            crate::log_info!("{} changed, reboot required", name);
            self.reboot_pending = true;
        }

        self.parameters
            .insert(key, value)
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = Self::key(name)?;

        if self.parameters.contains_key(&key) {
            // Already exists, don't overwrite
            return Ok(());
        }

        self.parameters
            .insert(key.clone(), default_value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.metadata
            .insert(key, ParamMetadata { flags })
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Whether `name` only takes full effect after a reboot
    pub fn requires_reboot(&self, name: &str) -> bool {
        self.get_metadata(name)
            .is_some_and(|meta| meta.flags.contains(ParamFlags::REBOOT_REQUIRED))
    }

    /// Whether a `REBOOT_REQUIRED` parameter changed since boot
    pub fn reboot_pending(&self) -> bool {
        self.reboot_pending
    }

    /// Get total parameter count
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Get metadata for a parameter by name
    pub fn get_metadata(&self, name: &str) -> Option<&ParamMetadata> {
        let key = Self::key(name).ok()?;
        self.metadata.get(&key)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_store_register_and_get() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("TEST"), Some(&ParamValue::Int(42)));
        assert!(!store.reboot_pending());
    }

    #[test]
    fn test_parameter_store_set_unknown() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.set("UNKNOWN", ParamValue::Int(1)),
            Err(ParameterError::InvalidConfig)
        );
    }

    #[test]
    fn test_parameter_store_register_idempotent() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        store.set("TEST", ParamValue::Int(100)).unwrap();
        // Re-register should not overwrite
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("TEST"), Some(&ParamValue::Int(100)));
    }

    #[test]
    fn test_parameter_store_set_coerces_numeric_types() {
        let mut store = ParameterStore::new();
        store
            .register("TYPE", ParamValue::Int(0), ParamFlags::empty())
            .unwrap();
        store
            .register("SCALE", ParamValue::Float(1.0), ParamFlags::empty())
            .unwrap();

        store.set("TYPE", ParamValue::Float(5.0)).unwrap();
        store.set("SCALE", ParamValue::Int(2)).unwrap();

        assert_eq!(store.get("TYPE"), Some(&ParamValue::Int(5)));
        assert_eq!(store.get("SCALE"), Some(&ParamValue::Float(2.0)));
    }

    #[test]
    fn test_parameter_store_set_type_mismatch() {
        let mut store = ParameterStore::new();
        store
            .register("FLAG", ParamValue::Bool(false), ParamFlags::empty())
            .unwrap();
        assert_eq!(
            store.set("FLAG", ParamValue::Float(1.0)),
            Err(ParameterError::TypeMismatch)
        );
    }

    #[test]
    fn test_parameter_store_name_too_long() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register(
                "THIS_NAME_IS_TOO_LONG",
                ParamValue::Int(0),
                ParamFlags::empty()
            ),
            Err(ParameterError::InvalidConfig)
        );
        assert!(store.get("THIS_NAME_IS_TOO_LONG").is_none());
    }

    #[test]
    fn test_parameter_reboot_required() {
        let mut store = ParameterStore::new();
        store
            .register("TYPE", ParamValue::Int(0), ParamFlags::REBOOT_REQUIRED)
            .unwrap();
        store
            .register("SCALE", ParamValue::Float(1.0), ParamFlags::empty())
            .unwrap();
        assert!(store.requires_reboot("TYPE"));
        assert!(!store.requires_reboot("SCALE"));
        assert!(!store.requires_reboot("UNKNOWN"));

        store.set("SCALE", ParamValue::Float(2.0)).unwrap();
        assert!(!store.reboot_pending());

        // Writing the current value back is not a change
        store.set("TYPE", ParamValue::Int(0)).unwrap();
        assert!(!store.reboot_pending());

        store.set("TYPE", ParamValue::Int(5)).unwrap();
        assert!(store.reboot_pending());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_param_value_conversions() {
        assert_eq!(ParamValue::Float(5.9).as_i32(), 5);
        assert_eq!(ParamValue::Int(-1).as_f32(), -1.0);
        assert_eq!(ParamValue::Bool(true).as_i32(), 1);
        assert_eq!(ParamValue::Bool(false).as_f32(), 0.0);
    }
}
