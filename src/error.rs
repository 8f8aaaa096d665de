use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Ways a [`GameConfig`](crate::GameConfig) can be rejected.
///
/// The game loop itself has no failure modes: losing a life is a state
/// transition, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// A brightness setting is not one of the visible levels `1..=9`.
    #[display("{setting} brightness {value} is outside 1..=9")]
    BrightnessOutOfRange { setting: &'static str, value: u8 },

    /// Obstacles and the player would be drawn with the same brightness, so
    /// a collision could not be told apart from the player mark.
    #[display("obstacle and player brightness are both {_0}")]
    IndistinctBrightness(#[error(not(source))] u8),

    #[display("turn duration must be at least 1 ms")]
    ZeroTurnDuration,
}
