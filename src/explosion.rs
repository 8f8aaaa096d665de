//! The animation played when the player is hit, and the reset after it.

use crate::board::Frame;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::hardware::{show_animation, DelayNs, LedMatrix};

/// A blast growing out of the centre of the screen and fading away.
pub const EXPLOSION: [Frame; 7] = [
    [
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 9, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 0, 7, 0, 0],
        [0, 7, 9, 7, 0],
        [0, 0, 7, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 7, 0, 0],
        [0, 7, 9, 7, 0],
        [7, 9, 7, 9, 7],
        [0, 7, 9, 7, 0],
        [0, 0, 7, 0, 0],
    ],
    [
        [5, 7, 7, 7, 5],
        [7, 7, 7, 7, 7],
        [7, 7, 5, 7, 7],
        [7, 7, 7, 7, 7],
        [5, 7, 7, 7, 5],
    ],
    [
        [3, 5, 5, 5, 5],
        [5, 5, 5, 5, 5],
        [5, 5, 3, 5, 5],
        [5, 5, 5, 5, 5],
        [3, 5, 5, 5, 3],
    ],
    [
        [3, 3, 3, 3, 3],
        [3, 3, 3, 3, 3],
        [3, 3, 1, 3, 3],
        [3, 3, 3, 3, 3],
        [3, 3, 3, 3, 3],
    ],
    [
        [0, 0, 1, 0, 0],
        [0, 1, 1, 1, 0],
        [1, 1, 0, 1, 1],
        [0, 1, 1, 1, 0],
        [0, 0, 1, 0, 0],
    ],
];

/// Plays the explosion, blanks the display, starts a fresh life in `state`
/// and waits out the cooldown. Blocks for the whole sequence.
pub fn play<M, D>(state: &mut GameState, matrix: &mut M, delay: &mut D, config: &GameConfig)
where
    M: LedMatrix + ?Sized,
    D: DelayNs + ?Sized,
{
    show_animation(matrix, delay, &EXPLOSION, config.explosion_frame_ms());
    matrix.clear();
    state.reset();
    delay.delay_ms(config.cooldown_ms());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::game::Phase;
    use crate::player::Position;
    use crate::testing::{RecordingDelay, RecordingMatrix};

    #[test]
    fn frames_play_in_order_then_display_clears() {
        let mut state = GameState::new();
        let mut matrix = RecordingMatrix::default();
        let mut delay = RecordingDelay::default();

        play(&mut state, &mut matrix, &mut delay, &GameConfig::DEFAULT);

        assert_eq!(matrix.frames, EXPLOSION.to_vec());
        assert_eq!(matrix.clears, 1);
        assert_eq!(matrix.image, [[0; 5]; 5]);
        assert_eq!(delay.waits_ms, [50, 50, 50, 50, 50, 50, 50, 2000]);
    }

    #[test]
    fn state_is_reset_whatever_it_was() {
        let mut state = GameState {
            board: Board::from_rows([[5; 5]; 5]),
            player: Position::RIGHTMOST,
            phase: Phase::Exploding,
        };

        play(
            &mut state,
            &mut RecordingMatrix::default(),
            &mut RecordingDelay::default(),
            &GameConfig::DEFAULT,
        );

        assert!(state.board.is_empty());
        assert_eq!(state.player, Position::START);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn frames_stay_within_display_levels() {
        assert!(EXPLOSION.iter().flatten().flatten().all(|&b| b <= 9));
    }
}
