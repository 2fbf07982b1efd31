//! Error types for round operations.
//!
//! A rejected operation never changes the round and never pushes a frame.

use thiserror::Error;

use crate::round::RoundState;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is already in progress; reset it first.
    #[error("a round is already in progress")]
    AlreadyInProgress,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No round has been started.
    #[error("no round has been started")]
    NotStarted,
    /// The round already reached 21.
    #[error("the round is already won")]
    AlreadyWon,
    /// The round already went over 21.
    #[error("the round is already busted")]
    Busted,
}

impl DrawError {
    /// Maps a state that does not accept draws to its rejection.
    ///
    /// Returns `None` for [`RoundState::Active`].
    #[must_use]
    pub const fn from_state(state: RoundState) -> Option<Self> {
        match state {
            RoundState::Idle => Some(Self::NotStarted),
            RoundState::Won => Some(Self::AlreadyWon),
            RoundState::Busted => Some(Self::Busted),
            RoundState::Active => None,
        }
    }
}
