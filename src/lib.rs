//! lib.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Board-independent logic of the ringbar firmware: a four-slot ring buffer
//! filled and drained by two debounced push buttons and shown on a four-LED
//! bar, plus a running-light demo built from the same pieces. Everything here
//! talks to hardware only through embedded-hal traits so it can be tested on
//! the host.

#![cfg_attr(not(test), no_std)]

pub mod chaser;
pub mod config;
pub mod edge;
pub mod render;
pub mod ring;
pub mod scheduler;

#[cfg(test)]
mod testing;
