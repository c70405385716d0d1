//! Mock pin validator for testing

use crate::platform::traits::PinValidator;

/// Maximum number of pins a mock validator can accept
const MAX_MOCK_PINS: usize = 16;

/// Mock pin validator
///
/// Accepts exactly the pins it was configured with and counts queries for
/// test verification.
#[derive(Debug, Default)]
pub struct MockPinValidator {
    pins: heapless::Vec<i16, MAX_MOCK_PINS>,
    queries: core::cell::Cell<u32>,
}

impl MockPinValidator {
    /// Create a validator that rejects every pin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator accepting `pins` (extra pins beyond capacity are ignored)
    pub fn with_pins(pins: &[i16]) -> Self {
        let mut validator = Self::new();
        for &pin in pins {
            validator.add_pin(pin);
        }
        validator
    }

    /// Mark `pin` as valid
    pub fn add_pin(&mut self, pin: i16) {
        if !self.pins.contains(&pin) {
            let _ = self.pins.push(pin);
        }
    }

    /// Number of `is_valid_pin` calls so far
    pub fn queries(&self) -> u32 {
        self.queries.get()
    }
}

impl PinValidator for MockPinValidator {
    fn is_valid_pin(&self, pin: i16) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.pins.contains(&pin)
    }
}
