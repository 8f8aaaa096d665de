#![no_main]
#![no_std]

mod devices;
use devices::{GreyscaleMatrix, HardwareColumns, LatchedButtons};

mod my_board;
use my_board::MyBoard;

use core::cell::RefCell;
use cortex_m::interrupt::Mutex;
use cortex_m_rt::entry;
use embedded_dodger::{Game, GameConfig};
use microbit::{
    display::nonblocking::Display,
    hal::{gpiote::Gpiote, Rng, Timer},
    // The interrupts are imported from the PAC, since they are chip-specific.
    pac::{self, interrupt, TIMER1},
};
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

// Checked at compile time: both brightness levels must be visible and
// different from each other.
const CONFIG: GameConfig = match GameConfig::new(5, 9, 500) {
    Ok(config) => config,
    Err(_) => panic!("invalid game configuration"),
};

// State shared with the interrupt handlers. A cortex_m::interrupt::Mutex can
// only be borrowed inside a critical section, so the main loop and the
// handlers never touch the same data at the same time. The Option is a
// placeholder until main has configured the peripheral.
static GPIO: Mutex<RefCell<Option<Gpiote>>> = Mutex::new(RefCell::new(None));
static DISPLAY: Mutex<RefCell<Option<Display<TIMER1>>>> = Mutex::new(RefCell::new(None));

// Raised by the GPIOTE interrupt on a press, lowered when the game reads it.
static BUTTON_A_PRESSED: Mutex<RefCell<bool>> = Mutex::new(RefCell::new(false));
static BUTTON_B_PRESSED: Mutex<RefCell<bool>> = Mutex::new(RefCell::new(false));

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let board = MyBoard::take().unwrap();

    // TIMER0 provides the blocking delays of the game loop: the turn wait, the
    // explosion frames and the cooldown.
    // TIMER1 belongs to the non-blocking display. The LED matrix can only light
    // one row at a time, so the display driver keeps switching rows (and
    // dimming LEDs for the greyscale levels) every time TIMER1 fires. This way
    // the picture stays on screen while the main loop is busy sleeping.
    let timer = Timer::new(board.timer0);
    let display = Display::new(board.timer1, board.display_pins);

    // The GPIO tasks and events (GPIOTE) module lets a pin raise an interrupt
    // when its level changes. Each GPIOTE channel watches one button for a
    // high-to-low edge: the buttons pull their pin to ground, so this edge is
    // the moment the button is pressed. Holding the button down does not raise
    // more events, which gives one latch per press.
    let gpiote = Gpiote::new(board.gpiote);
    let channel0 = gpiote.channel0();
    channel0
        .input_pin(&board.button_a)
        .hi_to_lo()
        .enable_interrupt();
    channel0.reset_events();

    let channel1 = gpiote.channel1();
    channel1
        .input_pin(&board.button_b)
        .hi_to_lo()
        .enable_interrupt();
    channel1.reset_events();

    // Inside a critical section interrupts are disabled, so the configuration
    // cannot be interrupted halfway and the statics can be filled in.
    cortex_m::interrupt::free(move |cs| {
        // Masking an interrupt disables it, unmasking enables it. Unmasking is
        // unsafe because it may break critical sections that rely on the
        // interrupt being masked. Nothing here does.
        unsafe {
            pac::NVIC::unmask(pac::Interrupt::GPIOTE);
            pac::NVIC::unmask(pac::Interrupt::TIMER1);
        }
        // A pending interrupt has been raised but not handled yet. Clear any
        // left over from before the configuration so the handlers start clean.
        pac::NVIC::unpend(pac::Interrupt::GPIOTE);
        pac::NVIC::unpend(pac::Interrupt::TIMER1);

        // The peripherals move into the Mutex statics, where the handlers can
        // reach them. The cs token proves the borrow happens inside a critical
        // section.
        *GPIO.borrow(cs).borrow_mut() = Some(gpiote);
        *DISPLAY.borrow(cs).borrow_mut() = Some(display);
    });

    rprintln!("peripherals ready");

    Game::new(
        CONFIG,
        GreyscaleMatrix::new(),
        LatchedButtons,
        HardwareColumns::new(Rng::new(board.rng)),
        timer,
    )
    .run()
}

// Drives the LED display and clears the timer's event registers.
#[interrupt]
fn TIMER1() {
    cortex_m::interrupt::free(|cs| {
        if let Some(display) = DISPLAY.borrow(cs).borrow_mut().as_mut() {
            display.handle_display_event();
        };
    });
}

// A button was pressed. Only raise its flag here: the game samples the flags
// once at the start of every turn. A press that arrives while the game sleeps
// stays raised until then, so it is deferred, never lost. The events must be
// reset, otherwise the interrupt fires again as soon as the handler returns.
#[interrupt]
fn GPIOTE() {
    cortex_m::interrupt::free(|cs| {
        if let Some(gpiote) = GPIO.borrow(cs).borrow().as_ref() {
            if gpiote.channel0().is_event_triggered() {
                BUTTON_A_PRESSED.borrow(cs).replace(true);
            };
            if gpiote.channel1().is_event_triggered() {
                BUTTON_B_PRESSED.borrow(cs).replace(true);
            };
            gpiote.channel0().reset_events();
            gpiote.channel1().reset_events();
        }
    });
}
