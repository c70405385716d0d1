//! ESC telemetry backend
//!
//! Averages the RPM reported by every ESC channel selected in `esc_mask`.
//! Quality is the fraction of selected channels that reported this cycle.

use super::apply_reading;
use crate::libraries::rpm::sources::RpmSources;
use crate::libraries::rpm::state::RpmState;
use crate::parameters::rpm::RpmInstanceParams;

/// Number of channels addressable by `esc_mask`
pub const MAX_ESC_CHANNELS: u8 = 32;

/// ESC telemetry averaging backend
#[derive(Debug)]
pub struct EscTelemBackend {
    instance: usize,
}

impl EscTelemBackend {
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

        let mut selected = 0u32;
        let mut reporting = 0u32;
        let mut sum = 0.0f32;
        for channel in 0..MAX_ESC_CHANNELS {
            if params.esc_mask & (1 << channel) == 0 {
                continue;
            }
            selected += 1;
            if let Some(rpm) = sources.esc_rpm(channel) {
                sum += rpm;
                reporting += 1;
            }
        }

        if reporting == 0 {
            if selected == 0 {
                crate::log_trace!("RPM[{}]: empty ESC mask", self.instance + 1);
            }
            state.expire(now_ms);
            return;
        }

        let rpm = params.scaling * sum / reporting as f32;
        let quality = reporting as f32 / selected as f32;
        apply_reading(params, state, Some(rpm), quality, now_ms);
    }
}
