//! Ring buffer demo: button B pushes, button A pops, the top row of the LED
//! matrix shows the four slots.

use cortex_m_rt::entry;
use critical_section_lock_mut::LockMut;
use microbit::{
    board::Board,
    display::nonblocking::Display,
    hal::{Timer, gpiote::Gpiote},
    pac::{Interrupt, NVIC, TIMER0, TIMER1, interrupt},
};
use panic_rtt_target as _;
use ringbar::{
    render::{LedBar, render},
    scheduler::Scheduler,
};
use rtt_target::{rprintln, rtt_init_print};

use crate::utils::bar_display::BarDisplay;
use crate::utils::buttons::{self, ButtonPin};

/// types
type DebounceTimer = Timer<TIMER1>;
type ButtonScheduler = Scheduler<ButtonPin, DebounceTimer>;

/// globals
static GPIOTE_PERIPHERAL: LockMut<Gpiote> = LockMut::new();
static DISPLAY: LockMut<BarDisplay<TIMER0>> = LockMut::new();
static SCHEDULER: LockMut<ButtonScheduler> = LockMut::new();

/// Non-Blocking Display Timer event handler
#[interrupt]
fn TIMER0() {
    DISPLAY.with_lock(|display| {
        display.handle_display_event();
    });
}

/// Buttons event handler: both buttons share this interrupt, so the
/// scheduler looks at both of them every time.
#[interrupt]
fn GPIOTE() {
    GPIOTE_PERIPHERAL.with_lock(|gpiote| {
        buttons::acknowledge(gpiote);
    });

    SCHEDULER.with_lock(|scheduler| {
        DISPLAY.with_lock(|display| {
            let Ok(outcome) = scheduler.service(display);
            if outcome.popped {
                rprintln!("pop  -> {:?}", outcome.frame);
            }
            if outcome.pushed {
                rprintln!("push -> {:?}", outcome.frame);
            }
        });
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let board = Board::take().unwrap();

    // setup display
    let display = Display::new(board.TIMER0, board.display_pins);
    let mut display = BarDisplay::new(display);

    // setup buttons and gpiote interrupts
    let (a_btn, b_btn) = buttons::configure(board.buttons);
    let gpiote = Gpiote::new(board.GPIOTE);
    buttons::watch(&gpiote, &a_btn, Some(&b_btn));
    GPIOTE_PERIPHERAL.init(gpiote);

    let scheduler: ButtonScheduler = Scheduler::new(a_btn, b_btn, Timer::new(board.TIMER1));
    display.show(&render(scheduler.ring()));
    SCHEDULER.init(scheduler);
    DISPLAY.init(display);

    // Set up the NVIC to handle interrupts.
    unsafe {
        NVIC::unmask(Interrupt::GPIOTE); // btns
        NVIC::unmask(Interrupt::TIMER0); // non-blocking display timer
    };
    //clear any currently pending GPIOTE state
    NVIC::unpend(Interrupt::GPIOTE);
    NVIC::unpend(Interrupt::TIMER0);

    rprintln!("ringbar: B pushes, A pops");

    loop {
        // all work happens in GPIOTE
        cortex_m::asm::wfi();
    }
}
