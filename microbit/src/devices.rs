// The game's hardware traits, implemented on top of the micro:bit drivers and
// the interrupt-shared state declared in main.rs.

use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use embedded_dodger::{obstacle::uniform_column, Buttons, ColumnSource, Frame, LedMatrix, SIZE};
use microbit::{display::nonblocking::GreyscaleImage, hal::Rng};

use crate::{BUTTON_A_PRESSED, BUTTON_B_PRESSED, DISPLAY};

// Keeps a copy of what is on screen and hands it to the display driver
// whenever it changes. The driver itself lives in DISPLAY, where the TIMER1
// interrupt keeps refreshing the LEDs.
pub struct GreyscaleMatrix {
    image: Frame,
}

impl GreyscaleMatrix {
    pub const fn new() -> Self {
        Self {
            image: [[0; SIZE]; SIZE],
        }
    }

    fn push(&self) {
        let image = GreyscaleImage::new(&self.image);
        cortex_m::interrupt::free(|cs| {
            if let Some(display) = DISPLAY.borrow(cs).borrow_mut().as_mut() {
                display.show(&image);
            }
        });
    }
}

impl LedMatrix for GreyscaleMatrix {
    fn set_pixel(&mut self, x: usize, y: usize, brightness: u8) {
        if let Some(led) = self.image.get_mut(y).and_then(|row| row.get_mut(x)) {
            *led = brightness;
            self.push();
        }
    }

    fn clear(&mut self) {
        self.image = [[0; SIZE]; SIZE];
        cortex_m::interrupt::free(|cs| {
            if let Some(display) = DISPLAY.borrow(cs).borrow_mut().as_mut() {
                display.clear();
            }
        });
    }

    // One driver update per frame instead of one per pixel.
    fn show_frame(&mut self, frame: &Frame) {
        self.image = *frame;
        self.push();
    }
}

// Reads the flags that the GPIOTE interrupt raises on every press. Reading a
// flag lowers it again inside the same critical section, so a press is seen
// exactly once however long the game was busy sleeping.
pub struct LatchedButtons;

impl Buttons for LatchedButtons {
    fn left_pressed(&mut self) -> bool {
        take_latch(&BUTTON_A_PRESSED)
    }

    fn right_pressed(&mut self) -> bool {
        take_latch(&BUTTON_B_PRESSED)
    }
}

fn take_latch(latch: &Mutex<RefCell<bool>>) -> bool {
    cortex_m::interrupt::free(|cs| latch.borrow(cs).replace(false))
}

pub struct HardwareColumns {
    rng: Rng,
}

impl HardwareColumns {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl ColumnSource for HardwareColumns {
    fn next_column(&mut self) -> usize {
        uniform_column(|| self.rng.random_u8())
    }
}
