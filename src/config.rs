//! Game tuning, validated once before the loop starts.

use crate::error::{Error, Result};

/// Highest level the LED matrix can show.
pub const MAX_BRIGHTNESS: u8 = 9;

pub const OBSTACLE_BRIGHTNESS: u8 = 5;
pub const PLAYER_BRIGHTNESS: u8 = 9;
pub const TURN_MS: u32 = 500;
/// Time each explosion frame stays on screen.
pub const EXPLOSION_FRAME_MS: u32 = 50;
/// Pause between the end of the explosion and the next life.
pub const COOLDOWN_MS: u32 = 2000;

/// Brightness levels and timings for one game.
///
/// The fields are private so that every `GameConfig` in existence has passed
/// [`GameConfig::new`]. Because `new` is a `const fn`, firmware can build its
/// configuration in a `const` item and have a bad value rejected at compile
/// time:
///
/// ```
/// use embedded_dodger::GameConfig;
///
/// const CONFIG: GameConfig = match GameConfig::new(5, 9, 500) {
///     Ok(config) => config,
///     Err(_) => panic!("invalid game configuration"),
/// };
/// assert_eq!(CONFIG.turn_ms(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    obstacle_brightness: u8,
    player_brightness: u8,
    turn_ms: u32,
    explosion_frame_ms: u32,
    cooldown_ms: u32,
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        obstacle_brightness: OBSTACLE_BRIGHTNESS,
        player_brightness: PLAYER_BRIGHTNESS,
        turn_ms: TURN_MS,
        explosion_frame_ms: EXPLOSION_FRAME_MS,
        cooldown_ms: COOLDOWN_MS,
    };

    /// Builds a configuration with the default explosion timings.
    ///
    /// Both brightness levels must be in `1..=9` and differ from each other,
    /// and a turn must last at least one millisecond.
    pub const fn new(obstacle_brightness: u8, player_brightness: u8, turn_ms: u32) -> Result<Self> {
        let config = Self {
            obstacle_brightness,
            player_brightness,
            turn_ms,
            explosion_frame_ms: EXPLOSION_FRAME_MS,
            cooldown_ms: COOLDOWN_MS,
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(err) => Err(err),
        }
    }

    /// Replaces the explosion frame interval and the cooldown that follows it.
    #[must_use]
    pub const fn with_explosion_timing(mut self, frame_ms: u32, cooldown_ms: u32) -> Self {
        self.explosion_frame_ms = frame_ms;
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub const fn validate(&self) -> Result<()> {
        if let Err(err) = check_brightness("obstacle", self.obstacle_brightness) {
            return Err(err);
        }
        if let Err(err) = check_brightness("player", self.player_brightness) {
            return Err(err);
        }
        if self.obstacle_brightness == self.player_brightness {
            return Err(Error::IndistinctBrightness(self.player_brightness));
        }
        if self.turn_ms == 0 {
            return Err(Error::ZeroTurnDuration);
        }
        Ok(())
    }

    pub const fn obstacle_brightness(&self) -> u8 {
        self.obstacle_brightness
    }

    pub const fn player_brightness(&self) -> u8 {
        self.player_brightness
    }

    pub const fn turn_ms(&self) -> u32 {
        self.turn_ms
    }

    pub const fn explosion_frame_ms(&self) -> u32 {
        self.explosion_frame_ms
    }

    pub const fn cooldown_ms(&self) -> u32 {
        self.cooldown_ms
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const fn check_brightness(setting: &'static str, value: u8) -> Result<()> {
    if value == 0 || value > MAX_BRIGHTNESS {
        Err(Error::BrightnessOutOfRange { setting, value })
    } else {
        Ok(())
    }
}
