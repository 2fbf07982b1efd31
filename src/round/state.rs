//! Round state types.

use crate::hand::HandStatus;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// No round is running.
    #[default]
    Idle,
    /// Cards are on the table and the total is below 21.
    Active,
    /// The total reached exactly 21.
    Won,
    /// The total went over 21.
    Busted,
}

impl RoundState {
    /// Returns whether the state ends the round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Busted)
    }
}

impl From<HandStatus> for RoundState {
    fn from(status: HandStatus) -> Self {
        match status {
            HandStatus::Active => Self::Active,
            HandStatus::Blackjack => Self::Won,
            HandStatus::Bust => Self::Busted,
        }
    }
}
