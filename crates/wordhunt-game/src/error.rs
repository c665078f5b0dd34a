use crate::Player;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The player already submitted a word list for this game.
    #[display("{player} has already submitted")]
    AlreadySubmitted {
        /// The player who tried to submit again.
        player: Player,
    },
}
