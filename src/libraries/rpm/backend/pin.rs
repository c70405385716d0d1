//! Pulse input backend
//!
//! Converts the mean interval between pulses captured on a GPIO pin into
//! RPM (one pulse per revolution before scaling). Quality is the agreement
//! between consecutive intervals, so a new or re-attached input starts at
//! zero and has to earn its confidence.

use super::apply_reading;
use crate::libraries::rpm::sources::RpmSources;
use crate::libraries::rpm::state::RpmState;
use crate::parameters::rpm::RpmInstanceParams;

const MICROS_PER_MINUTE: f32 = 60_000_000.0;

/// Pulse-counting backend bound to one input pin
#[derive(Debug)]
pub struct PinBackend {
    instance: usize,
    /// Pin currently being read
    pin: i16,
    /// Interval of the previous sample, for the consistency estimate
    last_interval_us: Option<u32>,
}

impl PinBackend {
    /// Create a backend reading the instance's configured pin
    pub fn new(instance: usize, params: &RpmInstanceParams) -> Self {
        Self {
            instance,
            pin: params.pin,
            last_interval_us: None,
        }
    }

    /// Pin this backend reads from
    pub fn pin(&self) -> i16 {
        self.pin
    }

    /// Forget the previous interval; the next sample starts at zero quality
    pub(super) fn reset(&mut self) {
        self.last_interval_us = None;
    }

    pub(super) fn update<S: RpmSources + ?Sized>(
        &mut self,
        params: &RpmInstanceParams,
        sources: &mut S,
        state: &mut RpmState,
    ) {
        let now_ms = sources.now_ms();

        if params.pin != self.pin {
            crate::log_info!(
                "RPM[{}]: pin changed {} -> {}",
                self.instance + 1,
                self.pin,
                params.pin
            );
            self.pin = params.pin;
            self.last_interval_us = None;
        }

        if self.pin < 0 {
            state.expire(now_ms);
            return;
        }

        let sample = match sources.pin_pulse(self.pin) {
            Some(sample) if sample.count > 0 && sample.interval_us > 0 => sample,
            _ => {
                state.expire(now_ms);
                return;
            }
        };

        let rpm = params.scaling * MICROS_PER_MINUTE / sample.interval_us as f32;
        let quality = match self.last_interval_us {
            Some(previous) => consistency(previous, sample.interval_us),
            None => 0.0,
        };
        self.last_interval_us = Some(sample.interval_us);

        apply_reading(params, state, Some(rpm), quality, now_ms);
    }
}

/// Ratio of the shorter to the longer interval, in [0, 1]
fn consistency(a: u32, b: u32) -> f32 {
    let (short, long) = if a < b { (a, b) } else { (b, a) };
    if long == 0 {
        return 0.0;
    }
    short as f32 / long as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::rpm::sources::PulseSample;
    use crate::parameters::rpm::RpmType;
    use crate::platform::mock::MockRpmSources;

    fn pin_params(pin: i16) -> RpmInstanceParams {
        RpmInstanceParams {
            sensor_type: RpmType::Pin,
            pin,
            ..RpmInstanceParams::PRIMARY
        }
    }

    fn pulse(interval_us: u32) -> PulseSample {
        PulseSample {
            count: 10,
            interval_us,
        }
    }

    #[test]
    fn test_first_sample_has_zero_quality() {
        let params = pin_params(50);
        let mut backend = PinBackend::new(0, &params);
        let mut sources = MockRpmSources::new();
        let mut state = RpmState::new();

        // 20 ms per revolution = 3000 RPM
        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);

        assert!((state.rate_rpm - 3000.0).abs() < 0.01);
        assert_eq!(state.signal_quality, 0.0);
    }

    #[test]
    fn test_consistent_samples_raise_quality() {
        let params = pin_params(50);
        let mut backend = PinBackend::new(0, &params);
        let mut sources = MockRpmSources::new();
        let mut state = RpmState::new();

        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        assert_eq!(state.signal_quality, 1.0);

        sources.push_pulse(50, pulse(25_000));
        backend.update(&params, &mut sources, &mut state);
        assert!((state.signal_quality - 0.8).abs() < 1e-6);
        assert!((state.rate_rpm - 2400.0).abs() < 0.01);
    }

    #[test]
    fn test_scaling_applied() {
        let params = RpmInstanceParams {
            scaling: 0.5,
            ..pin_params(50)
        };
        let mut backend = PinBackend::new(0, &params);
        let mut sources = MockRpmSources::new();
        let mut state = RpmState::new();

        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        assert!((state.rate_rpm - 1500.0).abs() < 0.01);
    }

    #[test]
    fn test_out_of_range_reading_ignored() {
        let params = RpmInstanceParams {
            maximum: 1000.0,
            ..pin_params(50)
        };
        let mut backend = PinBackend::new(0, &params);
        let mut sources = MockRpmSources::new();
        let mut state = RpmState::new();

        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        assert_eq!(state.rate_rpm, 0.0);
        assert_eq!(state.last_reading_ms, 0);
    }

    #[test]
    fn test_no_pulses_times_out() {
        let params = pin_params(50);
        let mut backend = PinBackend::new(0, &params);
        let mut sources = MockRpmSources::new();
        let mut state = RpmState::new();

        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        assert_eq!(state.signal_quality, 1.0);

        sources.advance_ms(1_500);
        backend.update(&params, &mut sources, &mut state);
        assert_eq!(state.signal_quality, 0.0);
        assert_eq!(state.rate_rpm, 0.0);
    }

    #[test]
    fn test_pin_change_restarts_learning() {
        let params = pin_params(50);
        let mut backend = PinBackend::new(0, &params);
        let mut sources = MockRpmSources::new();
        let mut state = RpmState::new();

        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);

        let moved = pin_params(51);
        sources.push_pulse(51, pulse(20_000));
        backend.update(&moved, &mut sources, &mut state);

        assert_eq!(backend.pin(), 51);
        assert_eq!(state.signal_quality, 0.0);
    }

    #[test]
    fn test_reset_restarts_learning() {
        let params = pin_params(50);
        let mut backend = PinBackend::new(0, &params);
        let mut sources = MockRpmSources::new();
        let mut state = RpmState::new();

        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        backend.reset();

        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        assert_eq!(state.signal_quality, 0.0);

        sources.push_pulse(50, pulse(20_000));
        backend.update(&params, &mut sources, &mut state);
        assert_eq!(state.signal_quality, 1.0);
    }

    #[test]
    fn test_consistency() {
        assert_eq!(consistency(100, 100), 1.0);
        assert_eq!(consistency(50, 100), 0.5);
        assert_eq!(consistency(100, 50), 0.5);
        assert_eq!(consistency(0, 0), 0.0);
    }
}
