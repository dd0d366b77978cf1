//! Compile-time settings shared by the library and the micro:bit firmware.

/// Number of slots in the ring, and of LEDs in the bar.
pub const SLOT_COUNT: usize = 4;

/// Settle time before the buttons are sampled.
pub const DEBOUNCE_MS: u32 = 5;

/// Running-light step period: an 8-bit timer with a 1:256 prescaler
/// rolling over on a 125 kHz instruction clock.
pub const CHASE_PERIOD_MS: u32 = 524;

/// Matrix row used as the LED bar (top row).
pub const BAR_ROW: usize = 0;

/// Greyscale brightness of a lit bar LED (0-9).
pub const LED_BRIGHTNESS: u8 = 9;
