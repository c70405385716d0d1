//! Harmonic notch backend
//!
//! Exposes the centre frequency tracked by the dynamic harmonic notch as an
//! RPM value: `rpm = frequency_hz * 60 * scaling`.

use super::{apply_reading, SOURCE_QUALITY};
use crate::libraries::rpm::sources::RpmSources;
use crate::libraries::rpm::state::RpmState;
use crate::parameters::rpm::RpmInstanceParams;

/// Harmonic notch frequency backend
#[derive(Debug)]
pub struct HarmonicNotchBackend {
    instance: usize,
}

impl HarmonicNotchBackend {
    pub fn new(instance: usize) -> Self {
        Self { instance }
    }

    pub(super) fn update<S: RpmSources + ?Sized>(
        &mut self,
        params: &RpmInstanceParams,
        sources: &mut S,
        state: &mut RpmState,
    ) {
        let now_ms = sources.now_ms();
        let reading = sources
            .notch_frequency_hz()
            .map(|hz| hz * 60.0 * params.scaling);
        if reading.is_none() {
            crate::log_trace!("RPM[{}]: notch not tracking", self.instance + 1);
        }
        apply_reading(params, state, reading, SOURCE_QUALITY, now_ms);
    }
}
