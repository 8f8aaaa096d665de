use microbit::{
    board::Board,
    gpio::DisplayPins,
    hal::gpio::{Floating, Input, Pin},
    pac::{GPIOTE, RNG, TIMER0, TIMER1},
};

// The peripherals of the micro:bit that the game uses, split out of the full
// board so each one can be handed to its own driver.
pub struct MyBoard {
    // Pins that drive the 5x5 LED matrix:
    pub display_pins: DisplayPins,
    // Button a moves the player left, button b moves it right:
    pub button_a: Pin<Input<Floating>>,
    pub button_b: Pin<Input<Floating>>,
    // Latches the button presses from an interrupt:
    pub gpiote: GPIOTE,
    // Refreshes the greyscale display from its interrupt:
    pub timer1: TIMER1,
    // Blocking delays between turns and explosion frames:
    pub timer0: TIMER0,
    // Hardware random number generator for the obstacle columns:
    pub rng: RNG,
}

impl MyBoard {
    // Returns an instance of MyBoard only if it's the first time the method is called.
    // This is done to avoid having two variables that control the same hardware
    // components.
    pub fn take() -> Option<Self> {
        Board::take().map(|board| Self {
            display_pins: board.display_pins,
            button_a: board.buttons.button_a.degrade(),
            button_b: board.buttons.button_b.degrade(),
            gpiote: board.GPIOTE,
            timer1: board.TIMER1,
            timer0: board.TIMER0,
            rng: board.RNG,
        })
    }
}
