/// Width and height of the LED matrix.
pub const SIZE: usize = 5;
/// Row the player moves along.
pub const PLAYER_ROW: usize = SIZE - 1;

/// Brightness levels of a 5x5 image, indexed `[row][column]` with row 0 at
/// the top. This is the shape the micro:bit display driver consumes.
pub type Frame = [[u8; SIZE]; SIZE];

/// The playing field: falling obstacles plus the player mark on the bottom
/// row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    rows: Frame,
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            rows: [[0; SIZE]; SIZE],
        }
    }

    pub const fn from_rows(rows: Frame) -> Self {
        Self { rows }
    }

    pub const fn rows(&self) -> &Frame {
        &self.rows
    }

    /// Brightness at column `x` of row `y`, or `None` off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Brightness of the bottom-row cell in `column`.
    pub fn player_cell(&self, column: usize) -> Option<u8> {
        self.cell(column, PLAYER_ROW)
    }

    pub(crate) fn set_player_cell(&mut self, column: usize, brightness: u8) {
        if let Some(cell) = self.rows[PLAYER_ROW].get_mut(column) {
            *cell = brightness;
        }
    }

    /// Scrolls every row down by one and puts a fresh row on top whose only
    /// lit cell is `column`. The old bottom row falls off the board.
    ///
    /// `self` is left untouched; the shifted board is returned.
    pub fn with_new_top_row(&self, column: usize, brightness: u8) -> Self {
        let mut new_row = [0; SIZE];
        if let Some(cell) = new_row.get_mut(column) {
            *cell = brightness;
        }

        let mut rows = [[0; SIZE]; SIZE];
        rows[0] = new_row;
        rows[1..].copy_from_slice(&self.rows[..SIZE - 1]);
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|&brightness| brightness == 0)
    }
}
