//! Per-instance RPM state record

/// Readings older than this are considered lost (milliseconds)
pub const RPM_TIMEOUT_MS: u32 = 1000;

/// Latest measurement of one RPM instance
///
/// Written by the instance's backend every update. The manager only ever
/// touches `signal_quality`, to zero it when the instance is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RpmState {
    /// Rotational speed (RPM)
    pub rate_rpm: f32,
    /// Backend confidence in [0, 1]; 0 = no confidence or not yet learned
    pub signal_quality: f32,
    /// Time of the last accepted reading (ms since boot)
    pub last_reading_ms: u32,
}

impl RpmState {
    /// Zeroed state
    pub const fn new() -> Self {
        Self {
            rate_rpm: 0.0,
            signal_quality: 0.0,
            last_reading_ms: 0,
        }
    }

    /// Store an accepted reading
    pub fn record(&mut self, rate_rpm: f32, signal_quality: f32, now_ms: u32) {
        self.rate_rpm = rate_rpm;
        self.signal_quality = signal_quality.clamp(0.0, 1.0);
        self.last_reading_ms = now_ms;
    }

    /// Drop rate and quality to zero once the last reading has timed out
    ///
    /// Returns `true` if the state was stale.
    pub fn expire(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_reading_ms) > RPM_TIMEOUT_MS {
            self.rate_rpm = 0.0;
            self.signal_quality = 0.0;
            true
        } else {
            false
        }
    }
}
