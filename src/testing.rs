//! Recording stand-ins for the hardware traits.

use std::collections::VecDeque;

use crate::board::Frame;
use crate::hardware::{Buttons, ColumnSource, DelayNs, LedMatrix};

#[derive(Debug, Default)]
pub struct RecordingMatrix {
    pub image: Frame,
    pub frames: Vec<Frame>,
    pub pixel_writes: usize,
    pub clears: usize,
}

impl LedMatrix for RecordingMatrix {
    fn set_pixel(&mut self, x: usize, y: usize, brightness: u8) {
        self.image[y][x] = brightness;
        self.pixel_writes += 1;
    }

    fn clear(&mut self) {
        self.image = [[0; 5]; 5];
        self.clears += 1;
    }

    fn show_frame(&mut self, frame: &Frame) {
        self.image = *frame;
        self.frames.push(*frame);
        self.pixel_writes += frame.len() * frame[0].len();
    }
}

/// Latches set by the test, consumed by the game like real edge flags.
#[derive(Debug, Default)]
pub struct LatchButtons {
    pub left: bool,
    pub right: bool,
    pub reads: usize,
}

impl Buttons for LatchButtons {
    fn left_pressed(&mut self) -> bool {
        self.reads += 1;
        core::mem::take(&mut self.left)
    }

    fn right_pressed(&mut self) -> bool {
        self.reads += 1;
        core::mem::take(&mut self.right)
    }
}

/// Replays a fixed list of columns, then keeps returning the last one.
#[derive(Debug)]
pub struct ScriptedColumns {
    script: VecDeque<usize>,
    last: usize,
}

impl ScriptedColumns {
    pub fn new(columns: &[usize]) -> Self {
        Self {
            script: columns.iter().copied().collect(),
            last: columns.last().copied().unwrap_or(0),
        }
    }
}

impl ColumnSource for ScriptedColumns {
    fn next_column(&mut self) -> usize {
        self.script.pop_front().unwrap_or(self.last)
    }
}

#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}
