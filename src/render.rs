//! Mapping from ring contents to LED bar state.

use crate::config::SLOT_COUNT;
use crate::ring::{RingBuffer, Slot};

/// One on/off value per bar LED; index 0 is the first LED.
pub type Frame = [bool; SLOT_COUNT];

/// Anything that can light a row of `SLOT_COUNT` LEDs.
pub trait LedBar {
    fn show(&mut self, frame: &Frame);
}

/// Occupied slots light their LED, empty slots leave it dark.
pub fn render(ring: &RingBuffer) -> Frame {
    ring.slots().map(Slot::is_occupied)
}

/// Frame with only the LED at `position` lit.
pub fn single(position: usize) -> Frame {
    let mut frame = [false; SLOT_COUNT];
    frame[position % SLOT_COUNT] = true;
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ring_renders_dark_bar() {
        assert_eq!(render(&RingBuffer::new()), [false; SLOT_COUNT]);
    }

    #[test]
    fn frame_matches_occupancy_after_every_mutation() {
        let mut ring = RingBuffer::new();
        let ops: [fn(&mut RingBuffer); 9] = [
            RingBuffer::push,
            RingBuffer::push,
            RingBuffer::pop,
            RingBuffer::push,
            RingBuffer::push,
            RingBuffer::push,
            RingBuffer::push,
            RingBuffer::pop,
            RingBuffer::pop,
        ];

        for op in ops {
            op(&mut ring);
            let frame = render(&ring);
            for (lit, slot) in frame.iter().zip(ring.slots()) {
                assert_eq!(*lit, slot.is_occupied());
            }
        }
    }

    #[test]
    fn single_lights_one_led() {
        assert_eq!(single(0), [true, false, false, false]);
        assert_eq!(single(3), [false, false, false, true]);
    }
}
