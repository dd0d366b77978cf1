//! Button A / button B pin setup and GPIOTE wiring.
//!
//! With the `pull-ups` feature the nRF52833 internal pull-ups hold both
//! buttons high; without it the pins float and rely on the board's external
//! resistors.

use microbit::{
    board::Buttons,
    hal::{
        gpio::{Input, Pin},
        gpiote::Gpiote,
    },
};

#[cfg(feature = "pull-ups")]
use microbit::hal::gpio::PullUp as ButtonPull;
#[cfg(not(feature = "pull-ups"))]
use microbit::hal::gpio::Floating as ButtonPull;

pub type ButtonPin = Pin<Input<ButtonPull>>;

/// Turn the board buttons into degraded input pins: (A, B).
pub fn configure(buttons: Buttons) -> (ButtonPin, ButtonPin) {
    #[cfg(feature = "pull-ups")]
    let pins = (
        buttons.button_a.into_pullup_input().degrade(),
        buttons.button_b.into_pullup_input().degrade(),
    );
    #[cfg(not(feature = "pull-ups"))]
    let pins = (
        buttons.button_a.into_floating_input().degrade(),
        buttons.button_b.into_floating_input().degrade(),
    );

    pins
}

/// Raise the GPIOTE interrupt on both press and release of `a` (channel 0)
/// and, when given, `b` (channel 1). Edge direction is decided in software.
pub fn watch(gpiote: &Gpiote, a: &ButtonPin, b: Option<&ButtonPin>) {
    let channel0 = gpiote.channel0();
    channel0.input_pin(a).toggle().enable_interrupt();
    channel0.reset_events();

    if let Some(b) = b {
        let channel1 = gpiote.channel1();
        channel1.input_pin(b).toggle().enable_interrupt();
        channel1.reset_events();
    }
}

/// Clear pending button events so the interrupt can fire again.
pub fn acknowledge(gpiote: &Gpiote) {
    gpiote.channel0().reset_events();
    gpiote.channel1().reset_events();
}
