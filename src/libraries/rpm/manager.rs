//! RPM manager
//!
//! Owns the RPM configuration and per-instance state, binds a backend to
//! each configured instance at initialization and drives those backends once
//! per control cycle.
//!
//! # Instance count
//!
//! `num_instances` is a high-water mark: the index of the highest instance
//! that got a backend, plus one. Disabled instances below the mark are still
//! visited (and skipped) on every update.

use super::backend::RpmBackend;
use super::sources::RpmSources;
use super::state::RpmState;
use crate::core::arming::format_bounded;
use crate::parameters::rpm::{RpmParams, RpmType, RPM_MAX_INSTANCES};
use crate::parameters::ParameterStore;
use crate::platform::traits::PinValidator;

/// Multi-instance RPM sensor manager
#[derive(Debug)]
pub struct RpmManager {
    params: RpmParams,
    state: [RpmState; RPM_MAX_INSTANCES],
    drivers: [Option<RpmBackend>; RPM_MAX_INSTANCES],
    num_instances: usize,
}

impl RpmManager {
    /// Create a manager with default parameters and no backends
    pub fn new() -> Self {
        Self::with_params(RpmParams::default())
    }

    /// Create a manager with the given parameters and no backends
    pub fn with_params(params: RpmParams) -> Self {
        Self {
            params,
            state: [RpmState::new(); RPM_MAX_INSTANCES],
            drivers: core::array::from_fn(|_| None),
            num_instances: 0,
        }
    }

    /// Create a manager configured from the parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self::with_params(RpmParams::from_store(store))
    }

    /// Current parameters
    pub fn params(&self) -> &RpmParams {
        &self.params
    }

    /// Mutable parameters
    ///
    /// Changes apply on the next update. Backends are never re-selected:
    /// setting a type to `None` disables polling, any other change only
    /// takes effect for instances that already have a backend.
    pub fn params_mut(&mut self) -> &mut RpmParams {
        &mut self.params
    }

    /// Reload parameters after a parameter store change
    ///
    /// Backends stay as bound at initialization. When the store reports a
    /// pending reboot, instances whose type no longer matches their backend
    /// are logged.
    pub fn reload_params(&mut self, store: &ParameterStore) {
        self.params = RpmParams::from_store(store);
        if !store.reboot_pending() {
            return;
        }

        for (instance, (params, driver)) in self
            .params
            .instances
            .iter()
            .zip(self.drivers.iter())
            .enumerate()
        {
            let wanted = match params.sensor_type {
                RpmType::None => continue,
                RpmType::Pwm => RpmType::Pin,
                other => other,
            };
            if driver.as_ref().map(RpmBackend::kind) != Some(wanted) {
                crate::log_warn!(
                    "RPM[{}]: {} takes effect after reboot",
                    instance + 1,
                    params.sensor_type.name()
                );
            }
        }
    }

    /// Bind a backend to every configured instance
    ///
    /// Idempotent: once any backend exists, further calls do nothing.
    pub fn initialize(&mut self) {
        if self.num_instances != 0 {
            // initialize called a second time
            return;
        }

        for (instance, (params, driver)) in self
            .params
            .instances
            .iter()
            .zip(self.drivers.iter_mut())
            .enumerate()
        {
            *driver = RpmBackend::probe(instance, params);
            match driver {
                Some(_) => {
                    crate::log_info!(
                        "RPM[{}]: {} backend",
                        instance + 1,
                        params.sensor_type.name()
                    );
                    self.num_instances = instance + 1;
                }
                None if params.sensor_type != RpmType::None => {
                    crate::log_warn!(
                        "RPM[{}]: {} not supported in this build",
                        instance + 1,
                        params.sensor_type.name()
                    );
                }
                None => {}
            }
        }
    }

    /// Refresh every instance below the high-water mark
    ///
    /// Call once per control cycle.
    pub fn update<S: RpmSources + ?Sized>(&mut self, sources: &mut S) {
        for instance in 0..self.num_instances {
            let Some(driver) = self.drivers[instance].as_mut() else {
                continue;
            };
            let params = &self.params.instances[instance];
            let state = &mut self.state[instance];

            if params.sensor_type == RpmType::None {
                // Disabled at runtime: quality must be re-learned if re-enabled
                if state.signal_quality != 0.0 {
                    crate::log_debug!("RPM[{}]: disabled, quality reset", instance + 1);
                }
                state.signal_quality = 0.0;
                driver.reset();
                continue;
            }

            driver.update(params, sources, state);
        }
    }

    /// High-water mark of instances with a backend
    pub fn num_sensors(&self) -> usize {
        self.num_instances
    }

    /// Whether a backend was bound to `instance` at initialization
    pub fn has_backend(&self, instance: usize) -> bool {
        instance < self.num_instances && self.drivers[instance].is_some()
    }

    /// Whether `instance` is within the high-water mark and not set to `None`
    pub fn enabled(&self, instance: usize) -> bool {
        if instance >= self.num_instances {
            return false;
        }
        self.params.instances[instance].sensor_type != RpmType::None
    }

    /// Whether `instance` is enabled, backed, and above the quality floor
    ///
    /// An enabled instance without a backend (type not compiled into this
    /// build) is never healthy. The quality floor is `RPM_MIN_QUAL` for all
    /// instances; a quality equal to the floor is healthy.
    pub fn healthy(&self, instance: usize) -> bool {
        if !self.enabled(instance) || self.drivers[instance].is_none() {
            return false;
        }

        // check that data quality is above minimum required
        if self.state[instance].signal_quality < self.params.quality_min() {
            return false;
        }

        true
    }

    /// Latest RPM of `instance`, if healthy
    pub fn get_rpm(&self, instance: usize) -> Option<f32> {
        if !self.healthy(instance) {
            return None;
        }
        Some(self.state[instance].rate_rpm)
    }

    /// Signal quality of `instance` (below the high-water mark only)
    pub fn signal_quality(&self, instance: usize) -> Option<f32> {
        self.instance_state(instance).map(|state| state.signal_quality)
    }

    /// Time of the last accepted reading of `instance`
    pub fn last_reading_ms(&self, instance: usize) -> Option<u32> {
        self.instance_state(instance)
            .map(|state| state.last_reading_ms)
    }

    /// Full state record of `instance` (below the high-water mark only)
    pub fn instance_state(&self, instance: usize) -> Option<&RpmState> {
        if instance >= self.num_instances {
            return None;
        }
        self.state.get(instance)
    }

    /// Validate pin configuration before arming
    ///
    /// Checks every pin-based instance in ascending order. On the first
    /// problem, writes a message naming the 1-based instance into `buffer`
    /// (truncated to its capacity) and returns `false`.
    pub fn arming_checks<P: PinValidator + ?Sized, const N: usize>(
        &self,
        pins: &P,
        buffer: &mut heapless::String<N>,
    ) -> bool {
        for (instance, params) in self.params.instances.iter().enumerate() {
            if !params.sensor_type.requires_pin() {
                continue;
            }
            if params.pin == -1 {
                format_bounded(buffer, format_args!("RPM[{}] no pin set", instance + 1));
                return false;
            }
            if !pins.is_valid_pin(params.pin) {
                format_bounded(
                    buffer,
                    format_args!("RPM[{}] pin {} invalid", instance + 1, params.pin),
                );
                return false;
            }
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self, instance: usize) -> &mut RpmState {
        &mut self.state[instance]
    }
}

impl Default for RpmManager {
    fn default() -> Self {
        Self::new()
    }
}
