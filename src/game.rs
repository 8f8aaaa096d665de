//! The turn-by-turn state machine.

use crate::board::Board;
use crate::collision::collides;
use crate::config::GameConfig;
use crate::explosion;
use crate::hardware::{Buttons, ColumnSource, DelayNs, LedMatrix};
use crate::obstacle::ObstacleGenerator;
use crate::player::{self, Position};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Held only while [`explosion::play`] runs the animation and the
    /// cooldown; the reset at its end puts the game back in `Playing`, so
    /// between turns the phase is always `Playing`.
    Exploding,
}

/// Everything that changes while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub player: Position,
    pub phase: Phase,
}

impl GameState {
    /// An empty board with the player in the middle.
    pub const fn new() -> Self {
        Self {
            board: Board::empty(),
            player: Position::START,
            phase: Phase::Playing,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Survived,
    /// The player was hit; the explosion has played and a new life begun.
    Exploded,
}

/// The game, wired to the hardware it runs on.
pub struct Game<M, B, C, D> {
    config: GameConfig,
    state: GameState,
    matrix: M,
    buttons: B,
    obstacles: ObstacleGenerator<C>,
    delay: D,
    // Turns survived in the current life, for the log only.
    turns_survived: u32,
}

impl<M, B, C, D> Game<M, B, C, D>
where
    M: LedMatrix,
    B: Buttons,
    C: ColumnSource,
    D: DelayNs,
{
    pub fn new(config: GameConfig, matrix: M, buttons: B, columns: C, delay: D) -> Self {
        Self {
            config,
            state: GameState::new(),
            matrix,
            buttons,
            obstacles: ObstacleGenerator::new(columns, config.obstacle_brightness()),
            delay,
            turns_survived: 0,
        }
    }

    /// Plays one turn: read the buttons, scroll the obstacles, check for a
    /// hit, then either draw and wait out the turn or explode and reset.
    pub fn play_turn(&mut self) -> TurnOutcome {
        let previous = player::update(&mut self.state.player, &mut self.buttons);
        self.state.board = self.obstacles.advance(&self.state.board);

        if collides(&self.state.board, self.state.player, self.config.obstacle_brightness()) {
            trace!(
                "hit at column {} after {} turns",
                self.state.player.column(),
                self.turns_survived
            );
            self.state.phase = Phase::Exploding;
            explosion::play(&mut self.state, &mut self.matrix, &mut self.delay, &self.config);
            self.turns_survived = 0;
            trace!("new life");
            return TurnOutcome::Exploded;
        }

        self.state.board = render::mark_player(
            self.state.board,
            self.state.player,
            previous,
            self.config.player_brightness(),
        );
        render::project(&self.state.board, &mut self.matrix);
        self.turns_survived = self.turns_survived.saturating_add(1);
        self.delay.delay_ms(self.config.turn_ms());
        TurnOutcome::Survived
    }

    /// Plays turns forever.
    pub fn run(mut self) -> ! {
        trace!(
            "starting: obstacle {} player {} turn {} ms",
            self.config.obstacle_brightness(),
            self.config.player_brightness(),
            self.config.turn_ms()
        );
        loop {
            self.play_turn();
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}
