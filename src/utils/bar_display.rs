//! bar_display.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! The bar_display module contains the BarDisplay<T> struct which is a wrapper around the
//! microbit::display::nonblocking::Display module and uses the first SLOT_COUNT LEDs of one row
//! of the MB2 5x5 LED array as the LED bar that the ring buffer and running light are drawn on.

use microbit::{
    display::nonblocking::{Display, GreyscaleImage},
    hal::timer::Instance,
};
use ringbar::{
    config::{BAR_ROW, LED_BRIGHTNESS},
    render::{Frame, LedBar},
};

/// Constants
pub const LED_SIZE: usize = 5; // MB2 LED is 5x5 grid
pub type LEDState = [[u8; LED_SIZE]; LED_SIZE]; // convenience typedef

/// BarDisplay<T> struct declaration: Note all fields are private
///
/// <T> template contains the TIMER instance used by the nonblocking Display.
/// Note that the nonblocking display requires a TIMER peripheral which must have interrupts enabled
/// both within the TIMER peripheral and via the NVIC
///
/// 1. display: display::nonblocking::Display struct containing TIMER peripheral <T>
/// 2. image: the current GreyscaleImage being rendered by the nonblocking display
pub struct BarDisplay<T>
where
    T: Instance,
{
    display: Display<T>,
    image: GreyscaleImage,
}

impl<T> BarDisplay<T>
where
    T: Instance,
{
    /// PUBLIC
    /// Generate a new BarDisplay<T> instance with every LED dark. The display field should be a
    /// display::nonblocking::Display struct instance where <T> is the TIMER peripheral used to
    /// initialize the nonblocking Display.
    pub fn new(display: Display<T>) -> Self {
        BarDisplay {
            display,
            image: GreyscaleImage::blank(),
        }
    }

    /// PRIVATE
    /// Lay a Frame out along BAR_ROW, everything else dark
    fn layout(frame: &Frame) -> LEDState {
        let mut leds = [[0; LED_SIZE]; LED_SIZE];
        for (col, lit) in frame.iter().enumerate() {
            if *lit {
                leds[BAR_ROW][col] = LED_BRIGHTNESS;
            }
        }
        leds
    }

    /// PUBLIC
    /// Thin wrapper around the nonblocking Display::handle_display_event() method which must be
    /// called on the nonblocking Display timer interrupt to physically updated the LED pin voltage states
    /// and display the image.
    pub fn handle_display_event(&mut self) {
        self.display.handle_display_event();
    }
}

impl<T> LedBar for BarDisplay<T>
where
    T: Instance,
{
    /// Updates self.image with the new bar and passes it to the nonblocking Display.show()
    /// method for rendering
    fn show(&mut self, frame: &Frame) {
        self.image = GreyscaleImage::new(&BarDisplay::<T>::layout(frame));
        self.display.show(&self.image);
    }
}
