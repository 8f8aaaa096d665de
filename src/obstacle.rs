//! Falling obstacles.

use crate::board::{Board, SIZE};
use crate::hardware::ColumnSource;

/// Largest multiple of `SIZE` that fits in a byte. Bytes at or above it are
/// redrawn so every column stays equally likely.
const UNBIASED_LIMIT: u8 = (u8::MAX as usize / SIZE * SIZE) as u8;

/// Feeds new obstacle rows into the top of the board.
#[derive(Debug)]
pub struct ObstacleGenerator<C> {
    columns: C,
    brightness: u8,
}

impl<C: ColumnSource> ObstacleGenerator<C> {
    pub fn new(columns: C, brightness: u8) -> Self {
        Self { columns, brightness }
    }

    /// Returns `board` scrolled down one row, with a new obstacle in a random
    /// column of the top row.
    pub fn advance(&mut self, board: &Board) -> Board {
        let column = self.columns.next_column() % SIZE;
        board.with_new_top_row(column, self.brightness)
    }
}

/// Turns a stream of random bytes into a uniformly distributed column.
pub fn uniform_column(mut next_byte: impl FnMut() -> u8) -> usize {
    loop {
        let byte = next_byte();
        if byte < UNBIASED_LIMIT {
            return usize::from(byte) % SIZE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PLAYER_ROW;
    use crate::testing::ScriptedColumns;

    #[test]
    fn obstacle_lands_in_the_drawn_column() {
        let mut generator = ObstacleGenerator::new(ScriptedColumns::new(&[0, 1, 2, 3, 4]), 5);
        let mut board = Board::empty();
        for column in 0..SIZE {
            let next = generator.advance(&board);
            assert_eq!(next.cell(column, 0), Some(5));
            assert_eq!(next.rows()[0].iter().filter(|&&b| b != 0).count(), 1);
            assert_eq!(next.rows()[1..], board.rows()[..PLAYER_ROW]);
            board = next;
        }
    }

    #[test]
    fn five_turns_bring_the_first_obstacle_to_the_player_row() {
        let mut generator = ObstacleGenerator::new(ScriptedColumns::new(&[3, 0, 0, 0, 0]), 5);
        let mut board = Board::empty();
        for _ in 0..SIZE {
            board = generator.advance(&board);
        }
        assert_eq!(board.player_cell(3), Some(5));
    }

    #[test]
    fn out_of_range_column_wraps_onto_the_board() {
        let mut generator = ObstacleGenerator::new(ScriptedColumns::new(&[7]), 5);
        let board = generator.advance(&Board::empty());
        assert_eq!(board.cell(2, 0), Some(5));
    }

    #[test]
    fn uniform_column_skips_biased_bytes() {
        let mut bytes = [255, 255, 12].into_iter();
        let column = uniform_column(|| bytes.next().unwrap());
        assert_eq!(column, 2);
        assert_eq!(bytes.next(), None);
    }

    #[test]
    fn uniform_column_is_flat_over_all_bytes() {
        let mut counts = [0usize; SIZE];
        for byte in 0..UNBIASED_LIMIT {
            counts[uniform_column(|| byte)] += 1;
        }
        assert!(counts.iter().all(|&count| count == counts[0]));
    }
}
