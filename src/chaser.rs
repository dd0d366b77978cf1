//! Running-light demo: one lit LED walks along the bar on every timer tick
//! and a button press reverses its direction.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{DEBOUNCE_MS, SLOT_COUNT};
use crate::edge::{EdgeDetector, Level};
use crate::render::{Frame, single};

/// Direction the lit LED travels. `Right` walks towards LED 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chaser {
    lit: usize,
    direction: Direction,
    switch: EdgeDetector,
}

impl Chaser {
    /// Starts with the last LED lit, travelling right.
    pub const fn new() -> Self {
        Chaser {
            lit: SLOT_COUNT - 1,
            direction: Direction::Right,
            switch: EdgeDetector::new(),
        }
    }

    /// Steps the lit LED one position, wrapping at either end of the bar.
    pub fn tick(&mut self) -> Frame {
        self.lit = match self.direction {
            Direction::Right => {
                if self.lit == 0 {
                    SLOT_COUNT - 1
                } else {
                    self.lit - 1
                }
            }
            Direction::Left => (self.lit + 1) % SLOT_COUNT,
        };
        self.frame()
    }

    /// Reverses direction on a falling edge of the switch. Returns whether
    /// it did.
    pub fn on_switch(&mut self, level: Level) -> bool {
        let fired = self.switch.observe(level);
        if fired {
            self.direction = self.direction.reversed();
        }
        fired
    }

    /// Debounces, reads the switch and passes the level to
    /// [`Chaser::on_switch`].
    pub fn sample<P, D>(&mut self, pin: &mut P, delay: &mut D) -> Result<bool, P::Error>
    where
        P: InputPin,
        D: DelayNs,
    {
        delay.delay_ms(DEBOUNCE_MS);
        let level = Level::read(pin)?;
        Ok(self.on_switch(level))
    }

    pub fn frame(&self) -> Frame {
        single(self.lit)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for Chaser {
    fn default() -> Self {
        Chaser::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeButton, FakeDelay};
    use core::cell::Cell;

    fn lit_position(frame: Frame) -> usize {
        frame.iter().position(|lit| *lit).unwrap()
    }

    #[test]
    fn starts_on_last_led_moving_right() {
        let chaser = Chaser::new();
        assert_eq!(chaser.frame(), [false, false, false, true]);
        assert_eq!(chaser.direction(), Direction::Right);
    }

    #[test]
    fn right_wraps_from_first_to_last() {
        let mut chaser = Chaser::new();
        let positions: Vec<usize> = (0..5).map(|_| lit_position(chaser.tick())).collect();
        assert_eq!(positions, vec![2, 1, 0, 3, 2]);
    }

    #[test]
    fn left_wraps_from_last_to_first() {
        let mut chaser = Chaser::new();
        chaser.on_switch(Level::Deasserted);
        chaser.on_switch(Level::Asserted);
        assert_eq!(chaser.direction(), Direction::Left);

        let positions: Vec<usize> = (0..3).map(|_| lit_position(chaser.tick())).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn only_presses_reverse_direction() {
        let mut chaser = Chaser::new();
        assert!(!chaser.on_switch(Level::Deasserted));
        assert!(chaser.on_switch(Level::Asserted));
        assert!(!chaser.on_switch(Level::Asserted));
        assert!(!chaser.on_switch(Level::Deasserted));
        assert_eq!(chaser.direction(), Direction::Left);

        assert!(chaser.on_switch(Level::Asserted));
        assert_eq!(chaser.direction(), Direction::Right);
    }

    #[test]
    fn switch_held_from_reset_keeps_direction() {
        let mut chaser = Chaser::new();
        assert!(!chaser.on_switch(Level::Asserted));
        assert!(!chaser.on_switch(Level::Asserted));
        assert_eq!(chaser.direction(), Direction::Right);
    }

    #[test]
    fn sample_debounces_before_reading() {
        let pressed = Cell::new(false);
        let elapsed_ns = Cell::new(0);
        let mut pin = FakeButton::new(&pressed);
        let mut delay = FakeDelay::new(&elapsed_ns);
        let mut chaser = Chaser::default();

        assert_eq!(chaser.sample(&mut pin, &mut delay), Ok(false));
        pressed.set(true);
        assert_eq!(chaser.sample(&mut pin, &mut delay), Ok(true));
        assert_eq!(elapsed_ns.get(), 2 * u64::from(DEBOUNCE_MS) * 1_000_000);
        assert_eq!(chaser.direction(), Direction::Left);
    }
}
