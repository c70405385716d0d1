//! EFI backend
//!
//! Reports the engine speed published by the engine management unit.

use super::{apply_reading, SOURCE_QUALITY};
use crate::libraries::rpm::sources::RpmSources;
use crate::libraries::rpm::state::RpmState;
use crate::parameters::rpm::RpmInstanceParams;

/// Engine management unit backend
#[derive(Debug)]
pub struct EfiBackend {
    instance: usize,
}

impl EfiBackend {
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
        let reading = sources.efi_rpm().map(|rpm| rpm * params.scaling);
        if reading.is_none() {
            crate::log_trace!("RPM[{}]: no EFI data", self.instance + 1);
        }
        apply_reading(params, state, reading, SOURCE_QUALITY, now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::rpm::RpmType;
    use crate::platform::mock::MockRpmSources;

    #[test]
    fn test_reports_scaled_engine_speed() {
        let params = RpmInstanceParams {
            sensor_type: RpmType::Efi,
            scaling: 2.0,
            ..RpmInstanceParams::PRIMARY
        };
        let mut backend = EfiBackend::new(0);
        let mut sources = MockRpmSources::new();
        let mut state = RpmState::new();

        sources.set_efi_rpm(Some(3100.0));
        backend.update(&params, &mut sources, &mut state);

        assert!((state.rate_rpm - 6200.0).abs() < 0.01);
        assert_eq!(state.signal_quality, SOURCE_QUALITY);
    }
}
