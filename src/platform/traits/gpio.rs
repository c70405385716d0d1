//! GPIO interface traits
//!
//! Pin validity checking consumed by subsystems that take a pin number from
//! a parameter (e.g. pulse-input RPM sensors).

/// Pin validity check provided by the board support
///
/// Pin numbers follow the ArduPilot convention: a signed identifier where
/// `-1` means "not configured". Implementations decide which identifiers map
/// to a usable input on the board.
pub trait PinValidator {
    /// Returns `true` if `pin` can be used as a digital input
    fn is_valid_pin(&self, pin: i16) -> bool;
}

/// Pin validator backed by a static list of usable input pins
///
/// # Example
///
/// ```
/// use pico_rpm::platform::traits::{PinValidator, StaticPinMap};
///
/// // AUX1..AUX6
/// static AUX_PINS: [i16; 6] = [50, 51, 52, 53, 54, 55];
/// let pins = StaticPinMap::new(&AUX_PINS);
///
/// assert!(pins.is_valid_pin(52));
/// assert!(!pins.is_valid_pin(-1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticPinMap {
    pins: &'static [i16],
}

impl StaticPinMap {
    /// Create a validator accepting exactly `pins`
    pub const fn new(pins: &'static [i16]) -> Self {
        Self { pins }
    }
}

impl PinValidator for StaticPinMap {
    fn is_valid_pin(&self, pin: i16) -> bool {
        pin >= 0 && self.pins.contains(&pin)
    }
}

impl<T: PinValidator + ?Sized> PinValidator for &T {
    fn is_valid_pin(&self, pin: i16) -> bool {
        (**self).is_valid_pin(pin)
    }
}
