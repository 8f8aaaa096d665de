use crate::board::Board;
use crate::player::Position;

/// Whether the player's cell holds an obstacle.
///
/// Must run after the board has scrolled and before the player is drawn
/// again, or the player mark would hide the obstacle.
pub fn collides(board: &Board, player: Position, obstacle_brightness: u8) -> bool {
    board.player_cell(player.column()) == Some(obstacle_brightness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PLAYER_ROW, SIZE};

    fn board_with_player_row(row: [u8; SIZE]) -> Board {
        let mut rows = [[0; SIZE]; SIZE];
        rows[PLAYER_ROW] = row;
        Board::from_rows(rows)
    }

    #[test]
    fn obstacle_under_player_collides() {
        let board = board_with_player_row([0, 0, 0, 5, 0]);
        assert!(collides(&board, Position::new(3).unwrap(), 5));
    }

    #[test]
    fn only_the_player_column_matters() {
        let board = board_with_player_row([5, 5, 0, 5, 5]);
        assert!(!collides(&board, Position::START, 5));
    }

    #[test]
    fn player_mark_and_empty_cells_are_safe() {
        let board = board_with_player_row([9, 0, 0, 0, 0]);
        assert!(!collides(&board, Position::LEFTMOST, 5));
        assert!(!collides(&board, Position::RIGHTMOST, 5));
    }

    #[test]
    fn obstacles_above_the_player_row_are_ignored() {
        let board = Board::empty().with_new_top_row(2, 5);
        assert!(!collides(&board, Position::START, 5));
    }
}
