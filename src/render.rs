//! Drawing the player and pushing the board to the LEDs.

use crate::board::Board;
use crate::hardware::LedMatrix;
use crate::player::Position;

/// Draws the player at `current`, erasing the mark it left at `previous`.
///
/// The old cell is only cleared while it still shows the player; if an
/// obstacle has scrolled onto it this turn, the obstacle stays.
pub fn mark_player(
    mut board: Board,
    current: Position,
    previous: Position,
    player_brightness: u8,
) -> Board {
    if current != previous && board.player_cell(previous.column()) == Some(player_brightness) {
        board.set_player_cell(previous.column(), 0);
    }
    board.set_player_cell(current.column(), player_brightness);
    board
}

/// Copies every cell of `board` to the display.
pub fn project<M: LedMatrix + ?Sized>(board: &Board, matrix: &mut M) {
    matrix.show_frame(board.rows());
}
