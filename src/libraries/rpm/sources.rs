//! Sensor data sources consumed by RPM backends
//!
//! Each backend reads exactly one kind of raw measurement. The platform
//! implements [`RpmSources`] once and the manager hands it to every backend
//! on each update. Every reading is optional: `None` means "nothing new this
//! cycle" and leaves the backend to age its state out.

/// Pulses captured on an input pin since the previous poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseSample {
    /// Number of pulses captured
    pub count: u32,
    /// Mean interval between consecutive pulses (microseconds)
    pub interval_us: u32,
}

/// Raw measurement providers for every backend type
///
/// Only `now_ms` is mandatory; the other readings default to "not
/// available" so a platform implements just the sources it has.
pub trait RpmSources {
    /// Milliseconds since boot
    fn now_ms(&self) -> u32;

    /// Take the pulses captured on `pin` since the last call
    fn pin_pulse(&mut self, _pin: i16) -> Option<PulseSample> {
        None
    }

    /// Latest RPM reported by ESC telemetry on `channel` (0-based)
    fn esc_rpm(&self, _channel: u8) -> Option<f32> {
        None
    }

    /// Engine speed reported by the EFI unit
    fn efi_rpm(&self) -> Option<f32> {
        None
    }

    /// Current centre frequency of the dynamic harmonic notch (Hz)
    fn notch_frequency_hz(&self) -> Option<f32> {
        None
    }

    /// Simulated rotor speed for `instance`
    fn sim_rpm(&self, _instance: usize) -> Option<f32> {
        None
    }
}
