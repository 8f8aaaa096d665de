//! What the game needs from the board it runs on.
//!
//! Blocking delays use the ecosystem [`DelayNs`] trait, which the micro:bit
//! HAL `Timer` already implements.

pub use embedded_hal::delay::DelayNs;

use crate::board::Frame;

/// A 5x5 matrix of LEDs with brightness levels `0..=9`.
pub trait LedMatrix {
    /// Sets the LED at column `x`, row `y` (row 0 at the top).
    fn set_pixel(&mut self, x: usize, y: usize, brightness: u8);

    /// Turns every LED off.
    fn clear(&mut self);

    /// Shows a whole image. The default writes it one pixel at a time;
    /// drivers that can swap a full image in one go should override it.
    fn show_frame(&mut self, frame: &Frame) {
        for (y, row) in frame.iter().enumerate() {
            for (x, &brightness) in row.iter().enumerate() {
                self.set_pixel(x, y, brightness);
            }
        }
    }
}

/// The two player buttons.
///
/// Each method reports whether the button was pressed since it was last
/// asked, and clears that latch. Holding a button down counts once.
pub trait Buttons {
    fn left_pressed(&mut self) -> bool;
    fn right_pressed(&mut self) -> bool;
}

/// Where the next obstacle appears.
pub trait ColumnSource {
    /// A column in `0..SIZE`, uniformly distributed and independent of
    /// earlier calls.
    fn next_column(&mut self) -> usize;
}

/// Blocking playback of `frames`, each held for `frame_delay_ms`.
pub fn show_animation<M, D>(matrix: &mut M, delay: &mut D, frames: &[Frame], frame_delay_ms: u32)
where
    M: LedMatrix + ?Sized,
    D: DelayNs + ?Sized,
{
    for frame in frames {
        matrix.show_frame(frame);
        delay.delay_ms(frame_delay_ms);
    }
}
