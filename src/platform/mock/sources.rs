//! Mock RPM sensor sources for testing

use crate::libraries::rpm::backend::MAX_ESC_CHANNELS;
use crate::libraries::rpm::sources::{PulseSample, RpmSources};
use crate::parameters::rpm::RPM_MAX_INSTANCES;

/// Maximum number of pins with pending pulses
const MAX_PULSE_PINS: usize = 8;

/// Mock implementation of [`RpmSources`]
///
/// Holds one canned reading per source. Pin pulses are consumed when read,
/// the other readings persist until changed.
#[derive(Debug)]
pub struct MockRpmSources {
    now_ms: u32,
    pulses: heapless::Vec<(i16, PulseSample), MAX_PULSE_PINS>,
    esc: [Option<f32>; MAX_ESC_CHANNELS as usize],
    efi: Option<f32>,
    notch_hz: Option<f32>,
    sim: [Option<f32>; RPM_MAX_INSTANCES],
}

impl MockRpmSources {
    /// Create sources with no readings at time 0
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            pulses: heapless::Vec::new(),
            esc: [None; MAX_ESC_CHANNELS as usize],
            efi: None,
            notch_hz: None,
            sim: [None; RPM_MAX_INSTANCES],
        }
    }

    /// Set the current time
    pub fn set_time_ms(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
    }

    /// Advance the current time
    pub fn advance_ms(&mut self, ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(ms);
    }

    /// Queue a pulse sample for `pin`, replacing any unread one
    pub fn push_pulse(&mut self, pin: i16, sample: PulseSample) {
        if let Some(entry) = self.pulses.iter_mut().find(|(p, _)| *p == pin) {
            entry.1 = sample;
        } else {
            let _ = self.pulses.push((pin, sample));
        }
    }

    /// Set the telemetry RPM of an ESC channel (out-of-range channels are ignored)
    pub fn set_esc_rpm(&mut self, channel: u8, rpm: Option<f32>) {
        if let Some(slot) = self.esc.get_mut(channel as usize) {
            *slot = rpm;
        }
    }

    /// Set the EFI engine speed
    pub fn set_efi_rpm(&mut self, rpm: Option<f32>) {
        self.efi = rpm;
    }

    /// Set the harmonic notch centre frequency
    pub fn set_notch_frequency_hz(&mut self, hz: Option<f32>) {
        self.notch_hz = hz;
    }

    /// Set the simulated rotor speed of an instance
    pub fn set_sim_rpm(&mut self, instance: usize, rpm: Option<f32>) {
        if let Some(slot) = self.sim.get_mut(instance) {
            *slot = rpm;
        }
    }
}

impl Default for MockRpmSources {
    fn default() -> Self {
        Self::new()
    }
}

impl RpmSources for MockRpmSources {
    fn now_ms(&self) -> u32 {
        self.now_ms
    }

    fn pin_pulse(&mut self, pin: i16) -> Option<PulseSample> {
        let index = self.pulses.iter().position(|(p, _)| *p == pin)?;
        Some(self.pulses.swap_remove(index).1)
    }

    fn esc_rpm(&self, channel: u8) -> Option<f32> {
        self.esc.get(channel as usize).copied().flatten()
    }

    fn efi_rpm(&self) -> Option<f32> {
        self.efi
    }

    fn notch_frequency_hz(&self) -> Option<f32> {
        self.notch_hz
    }

    fn sim_rpm(&self, instance: usize) -> Option<f32> {
        self.sim.get(instance).copied().flatten()
    }
}
