//! The button-driven ring buffer: one [`Scheduler::service`] call per
//! button interrupt.
//!
//! Button A pops the oldest marker, button B pushes a new one. Both buttons
//! share one interrupt, so every call debounces once and then runs edge
//! detection for both of them, whichever one actually changed.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::DEBOUNCE_MS;
use crate::edge::{EdgeDetector, Level};
use crate::render::{Frame, LedBar, render};
use crate::ring::RingBuffer;

/// What a single service call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub popped: bool,
    pub pushed: bool,
    pub frame: Frame,
}

/// Scheduler<P, D> struct declaration: Note all fields are private
///
/// <P> is the button pin type, <D> the blocking delay used to debounce.
///
/// 1. ring: the four-slot ring buffer
/// 2. pop_edge / push_edge: edge history of button A / button B
/// 3. pop_input / push_input: button A / button B pins
/// 4. delay: debounce delay source
pub struct Scheduler<P, D> {
    ring: RingBuffer,
    pop_edge: EdgeDetector,
    push_edge: EdgeDetector,
    pop_input: P,
    push_input: P,
    delay: D,
}

impl<P, D> Scheduler<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    /// Takes ownership of the two button pins and the debounce delay. The
    /// ring starts empty.
    pub fn new(pop_input: P, push_input: P, delay: D) -> Self {
        Scheduler {
            ring: RingBuffer::new(),
            pop_edge: EdgeDetector::new(),
            push_edge: EdgeDetector::new(),
            pop_input,
            push_input,
            delay,
        }
    }

    /// Handles one button interrupt: waits `DEBOUNCE_MS`, pops on a falling
    /// edge of button A, pushes on a falling edge of button B, then shows
    /// the ring on `bar`. The bar is redrawn even when nothing fired.
    pub fn service<B: LedBar>(&mut self, bar: &mut B) -> Result<Outcome, P::Error> {
        self.delay.delay_ms(DEBOUNCE_MS);

        // read both buttons before touching any state so a failed read
        // leaves the edge history and the ring as they were
        let pop_level = Level::read(&mut self.pop_input)?;
        let push_level = Level::read(&mut self.push_input)?;

        let popped = self.pop_edge.observe(pop_level);
        if popped {
            self.ring.pop();
        }

        let pushed = self.push_edge.observe(push_level);
        if pushed {
            self.ring.push();
        }

        let frame = render(&self.ring);
        bar.show(&frame);

        Ok(Outcome {
            popped,
            pushed,
            frame,
        })
    }

    pub fn ring(&self) -> &RingBuffer {
        &self.ring
    }
}
