//! micro:bit v2 firmware entry point.
//!
//! The default build runs the ring buffer demo (button B pushes a marker onto
//! the LED bar, button A pops the oldest one). Building with the `chaser`
//! feature runs the running-light demo instead.
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod utils;

#[cfg(all(target_os = "none", not(feature = "chaser")))]
mod buffer_demo;
#[cfg(all(target_os = "none", feature = "chaser"))]
mod chaser_demo;

#[cfg(not(target_os = "none"))]
fn main() {
    println!("ringbar runs on the micro:bit v2: cargo run --release --target thumbv7em-none-eabihf");
}
