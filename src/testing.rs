//! Host-side stand-ins for the board: buttons, a delay that only counts,
//! and an LED bar that remembers what it was shown.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};

use crate::render::{Frame, LedBar};

/// Active-low button whose pressed state is driven from the test.
pub struct FakeButton<'a> {
    pressed: &'a Cell<bool>,
}

impl<'a> FakeButton<'a> {
    pub fn new(pressed: &'a Cell<bool>) -> Self {
        FakeButton { pressed }
    }
}

impl ErrorType for FakeButton<'_> {
    type Error = Infallible;
}

impl InputPin for FakeButton<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed.get())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Button whose reads always fail.
pub struct BrokenButton;

impl ErrorType for BrokenButton {
    type Error = PinFault;
}

impl InputPin for BrokenButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

/// Active-low button whose reads fail while `broken` is set.
pub struct FlakyButton<'a> {
    pressed: &'a Cell<bool>,
    broken: &'a Cell<bool>,
}

impl<'a> FlakyButton<'a> {
    pub fn new(pressed: &'a Cell<bool>, broken: &'a Cell<bool>) -> Self {
        FlakyButton { pressed, broken }
    }
}

impl ErrorType for FlakyButton<'_> {
    type Error = PinFault;
}

impl InputPin for FlakyButton<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        if self.broken.get() {
            Err(PinFault)
        } else {
            Ok(self.pressed.get())
        }
    }
}

/// Delay that returns immediately and adds the requested time to a counter.
pub struct FakeDelay<'a> {
    elapsed_ns: &'a Cell<u64>,
}

impl<'a> FakeDelay<'a> {
    pub fn new(elapsed_ns: &'a Cell<u64>) -> Self {
        FakeDelay { elapsed_ns }
    }
}

impl DelayNs for FakeDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns.set(self.elapsed_ns.get() + u64::from(ns));
    }
}

#[derive(Default)]
pub struct RecordingBar {
    pub frames: Vec<Frame>,
}

impl LedBar for RecordingBar {
    fn show(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }
}
