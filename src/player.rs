//! The player's column and the buttons that move it.

use crate::board::SIZE;
use crate::hardware::Buttons;

/// A column on the player row. Always within `0..SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub const LEFTMOST: Self = Self(0);
    pub const RIGHTMOST: Self = Self(SIZE - 1);
    /// Where every life begins.
    pub const START: Self = Self(2);

    pub const fn new(column: usize) -> Option<Self> {
        if column < SIZE {
            Some(Self(column))
        } else {
            None
        }
    }

    pub const fn column(self) -> usize {
        self.0
    }

    fn left(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    fn right(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

/// Moves the player one column for this turn's button presses and returns
/// where it stood before.
///
/// Left is checked first. The right latch is only read when left did not
/// move the player, so a right press made in the same turn as a left one
/// stays latched for the next turn. A press towards an edge the player
/// already touches does nothing, and is still consumed.
pub fn update(position: &mut Position, buttons: &mut impl Buttons) -> Position {
    let previous = *position;

    if let Some(moved) = buttons.left_pressed().then(|| previous.left()).flatten() {
        *position = moved;
    } else if let Some(moved) = buttons.right_pressed().then(|| previous.right()).flatten() {
        *position = moved;
    }
    previous
}
