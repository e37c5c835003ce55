//! Game phase types.

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// No game has been dealt yet.
    #[default]
    Initial,
    /// Waiting for the player to pick a pile.
    Choosing,
    /// Rounds are being played.
    Playing,
    /// The last comparison tied and the war is not resolved yet.
    War,
    /// The game has ended. Terminal.
    GameOver,
}

impl GamePhase {
    /// Returns whether a round can be played in this phase.
    #[must_use]
    pub const fn is_in_play(self) -> bool {
        matches!(self, Self::Playing | Self::War)
    }
}
