//! Simulated RPM backend
//!
//! Reads the rotor speed published by the simulator for this instance.

use super::{apply_reading, SOURCE_QUALITY};
use crate::libraries::rpm::sources::RpmSources;
use crate::libraries::rpm::state::RpmState;
use crate::parameters::rpm::RpmInstanceParams;

/// Simulator backend
#[derive(Debug)]
pub struct SitlBackend {
    instance: usize,
}

impl SitlBackend {
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
            .sim_rpm(self.instance)
            .map(|rpm| rpm * params.scaling);
        apply_reading(params, state, reading, SOURCE_QUALITY, now_ms);
    }
}
