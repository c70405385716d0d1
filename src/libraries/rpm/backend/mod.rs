//! RPM backends
//!
//! One variant per sensing technology. A backend is selected once per
//! instance by [`RpmBackend::probe`] and then refreshed every control cycle
//! through [`RpmBackend::update`]. Backends never return errors: a missing
//! or rejected reading simply lets the instance state age out, which drives
//! `signal_quality` to zero.

mod esc_telem;
mod harmonic_notch;

#[cfg(feature = "efi")]
mod efi;
#[cfg(not(feature = "sitl"))]
mod pin;
#[cfg(feature = "sitl")]
mod sitl;

pub use esc_telem::{EscTelemBackend, MAX_ESC_CHANNELS};
pub use harmonic_notch::HarmonicNotchBackend;

#[cfg(feature = "efi")]
pub use efi::EfiBackend;
#[cfg(not(feature = "sitl"))]
pub use pin::PinBackend;
#[cfg(feature = "sitl")]
pub use sitl::SitlBackend;

use super::sources::RpmSources;
use super::state::RpmState;
use crate::parameters::rpm::{RpmInstanceParams, RpmType};

/// Quality reported by backends whose source carries no confidence of its own
pub const SOURCE_QUALITY: f32 = 1.0;

/// Backend bound to one RPM instance
#[derive(Debug)]
pub enum RpmBackend {
    /// Pulse input on a GPIO pin
    #[cfg(not(feature = "sitl"))]
    Pin(PinBackend),
    /// ESC telemetry average
    EscTelem(EscTelemBackend),
    /// Engine management unit
    #[cfg(feature = "efi")]
    Efi(EfiBackend),
    /// Dynamic harmonic notch frequency
    HarmonicNotch(HarmonicNotchBackend),
    /// Simulated sensor
    #[cfg(feature = "sitl")]
    Sitl(SitlBackend),
}

impl RpmBackend {
    /// Select the backend for `instance` from its configured type
    ///
    /// Returns `None` for `RpmType::None` and for types whose backend is not
    /// compiled into this build.
    pub fn probe(instance: usize, params: &RpmInstanceParams) -> Option<Self> {
        match params.sensor_type {
            // PWM is kept as an alias of PIN for parameter compatibility
            #[cfg(not(feature = "sitl"))]
            RpmType::Pwm | RpmType::Pin => Some(RpmBackend::Pin(PinBackend::new(instance, params))),
            RpmType::EscTelem => Some(RpmBackend::EscTelem(EscTelemBackend::new(instance))),
            #[cfg(feature = "efi")]
            RpmType::Efi => Some(RpmBackend::Efi(EfiBackend::new(instance))),
            // Harmonic notch last: it exposes whatever drives the dynamic
            // notch as an ordinary RPM source
            RpmType::HarmonicNotch => Some(RpmBackend::HarmonicNotch(HarmonicNotchBackend::new(
                instance,
            ))),
            #[cfg(feature = "sitl")]
            RpmType::Sitl => Some(RpmBackend::Sitl(SitlBackend::new(instance))),
            _ => None,
        }
    }

    /// Refresh `state` from this backend's source
    pub fn update<S: RpmSources + ?Sized>(
        &mut self,
        params: &RpmInstanceParams,
        sources: &mut S,
        state: &mut RpmState,
    ) {
        match self {
            #[cfg(not(feature = "sitl"))]
            RpmBackend::Pin(backend) => backend.update(params, sources, state),
            RpmBackend::EscTelem(backend) => backend.update(params, sources, state),
            #[cfg(feature = "efi")]
            RpmBackend::Efi(backend) => backend.update(params, sources, state),
            RpmBackend::HarmonicNotch(backend) => backend.update(params, sources, state),
            #[cfg(feature = "sitl")]
            RpmBackend::Sitl(backend) => backend.update(params, sources, state),
        }
    }

    /// Drop anything learned from past samples
    ///
    /// Called while the instance is disabled, so a re-enabled instance has
    /// to earn its signal quality again from fresh readings.
    pub fn reset(&mut self) {
        match self {
            #[cfg(not(feature = "sitl"))]
            RpmBackend::Pin(backend) => backend.reset(),
            _ => {}
        }
    }

    /// Sensor type this backend was created for
    pub fn kind(&self) -> RpmType {
        match self {
            #[cfg(not(feature = "sitl"))]
            RpmBackend::Pin(_) => RpmType::Pin,
            RpmBackend::EscTelem(_) => RpmType::EscTelem,
            #[cfg(feature = "efi")]
            RpmBackend::Efi(_) => RpmType::Efi,
            RpmBackend::HarmonicNotch(_) => RpmType::HarmonicNotch,
            #[cfg(feature = "sitl")]
            RpmBackend::Sitl(_) => RpmType::Sitl,
        }
    }
}

/// Check a reading against the configured bounds (0 disables a bound)
pub(crate) fn within_bounds(params: &RpmInstanceParams, rpm: f32) -> bool {
    if !rpm.is_finite() {
        return false;
    }
    if params.maximum > 0.0 && rpm > params.maximum {
        return false;
    }
    if params.minimum > 0.0 && rpm < params.minimum {
        return false;
    }
    true
}

/// Record `reading` if present and within bounds, otherwise age the state
pub(crate) fn apply_reading(
    params: &RpmInstanceParams,
    state: &mut RpmState,
    reading: Option<f32>,
    quality: f32,
    now_ms: u32,
) {
    match reading {
        Some(rpm) if within_bounds(params, rpm) => state.record(rpm, quality, now_ms),
        _ => {
            state.expire(now_ms);
        }
    }
}
