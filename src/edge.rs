//! Falling-edge detection for active-low push buttons.

use embedded_hal::digital::InputPin;

/// Debounced level of a button input. Buttons pull their line low when
/// pressed, so `Asserted` is the low level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Asserted,
    Deasserted,
}

impl Level {
    pub fn from_low(is_low: bool) -> Self {
        if is_low {
            Level::Asserted
        } else {
            Level::Deasserted
        }
    }

    /// Reads the current level of an active-low input.
    pub fn read<P: InputPin>(pin: &mut P) -> Result<Self, P::Error> {
        Ok(Level::from_low(pin.is_low()?))
    }
}

/// Remembers the level seen at the previous observation of one input.
///
/// The history starts out `Asserted`, so a button already held down at
/// reset fires nothing until it has been seen released.
#[derive(Clone, Debug)]
pub struct EdgeDetector {
    previous: Level,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        EdgeDetector {
            previous: Level::Asserted,
        }
    }

    /// Records `level` and reports whether it completes a deasserted to
    /// asserted transition. The stored level is updated whether or not the
    /// edge fired.
    pub fn observe(&mut self, level: Level) -> bool {
        let fired = level == Level::Asserted && self.previous == Level::Deasserted;
        self.previous = level;
        fired
    }

    /// Reads `pin` and feeds the level to [`EdgeDetector::observe`].
    pub fn sample<P: InputPin>(&mut self, pin: &mut P) -> Result<bool, P::Error> {
        let level = Level::read(pin)?;
        Ok(self.observe(level))
    }

    pub fn previous(&self) -> Level {
        self.previous
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        EdgeDetector::new()
    }
}
