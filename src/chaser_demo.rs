//! Running-light demo: TIMER2 walks one lit LED along the top row of the
//! matrix and button A reverses its direction.

use cortex_m_rt::entry;
use critical_section_lock_mut::LockMut;
use microbit::{
    board::Board,
    display::nonblocking::Display,
    hal::{Timer, gpiote::Gpiote},
    pac::{Interrupt, NVIC, TIMER0, TIMER1, TIMER2, interrupt},
};
use panic_rtt_target as _;
use ringbar::{
    chaser::Chaser,
    config::CHASE_PERIOD_MS,
    render::LedBar,
};
use rtt_target::{rprintln, rtt_init_print};

use crate::utils::bar_display::BarDisplay;
use crate::utils::buttons::{self, ButtonPin};

/// types
type DebounceTimer = Timer<TIMER1>;
type StepTimer = Timer<TIMER2>;

/// globals
const TIMER_TICKS_PER_MS: u32 = 1_000_000u32 / 1000;
const CHASE_PERIOD_TICKS: u32 = TIMER_TICKS_PER_MS * CHASE_PERIOD_MS;

static GPIOTE_PERIPHERAL: LockMut<Gpiote> = LockMut::new();
static DISPLAY: LockMut<BarDisplay<TIMER0>> = LockMut::new();
static STEP_TIMER: LockMut<StepTimer> = LockMut::new();
static SWITCH: LockMut<(ButtonPin, DebounceTimer)> = LockMut::new();
static CHASER: LockMut<Chaser> = LockMut::new();

/// Non-Blocking Display Timer event handler
#[interrupt]
fn TIMER0() {
    DISPLAY.with_lock(|display| {
        display.handle_display_event();
    });
}

/// Step timer event handler: move the light and re-arm the timer
#[interrupt]
fn TIMER2() {
    STEP_TIMER.with_lock(|step_timer| {
        step_timer.start(CHASE_PERIOD_TICKS);
    });

    CHASER.with_lock(|chaser| {
        let frame = chaser.tick();
        DISPLAY.with_lock(|display| {
            display.show(&frame);
        });
    });
}

/// Button A event handler
#[interrupt]
fn GPIOTE() {
    GPIOTE_PERIPHERAL.with_lock(|gpiote| {
        buttons::acknowledge(gpiote);
    });

    SWITCH.with_lock(|(pin, debounce_timer)| {
        CHASER.with_lock(|chaser| {
            let Ok(reversed) = chaser.sample(pin, debounce_timer);
            if reversed {
                rprintln!("direction -> {:?}", chaser.direction());
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

    // setup button A and its gpiote interrupt
    let (a_btn, _b_btn) = buttons::configure(board.buttons);
    let gpiote = Gpiote::new(board.GPIOTE);
    buttons::watch(&gpiote, &a_btn, None);
    GPIOTE_PERIPHERAL.init(gpiote);
    SWITCH.init((a_btn, Timer::new(board.TIMER1)));

    let chaser = Chaser::new();
    display.show(&chaser.frame());
    CHASER.init(chaser);
    DISPLAY.init(display);

    // setup step timer interrupt
    let mut step_timer: StepTimer = Timer::new(board.TIMER2);
    step_timer.enable_interrupt();
    step_timer.reset_event();
    step_timer.start(CHASE_PERIOD_TICKS);
    STEP_TIMER.init(step_timer);

    // Set up the NVIC to handle interrupts.
    unsafe {
        NVIC::unmask(Interrupt::GPIOTE); // btn A
        NVIC::unmask(Interrupt::TIMER0); // non-blocking display timer
        NVIC::unmask(Interrupt::TIMER2); // step timer
    };
    //clear any currently pending state
    NVIC::unpend(Interrupt::GPIOTE);
    NVIC::unpend(Interrupt::TIMER0);
    NVIC::unpend(Interrupt::TIMER2);

    rprintln!("ringbar chaser: A reverses direction");

    loop {
        // all work happens in TIMER2 and GPIOTE
        cortex_m::asm::wfi();
    }
}
