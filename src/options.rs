//! Round configuration options.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::round::RoundState;

/// Texts shown to the player, one per round state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Shown while the round accepts draws.
    pub draw_prompt: String,
    /// Shown when the total reaches 21.
    pub win: String,
    /// Shown when the total goes over 21.
    pub lose: String,
    /// Shown before a round starts and after a reset.
    pub welcome: String,
}

impl Messages {
    /// Returns the message for the given state.
    #[must_use]
    pub fn for_state(&self, state: RoundState) -> &str {
        match state {
            RoundState::Idle => self.welcome.as_str(),
            RoundState::Active => self.draw_prompt.as_str(),
            RoundState::Won => self.win.as_str(),
            RoundState::Busted => self.lose.as_str(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            draw_prompt: String::from("Do you want to draw a new card?"),
            win: String::from("You've got a Blackjack!"),
            lose: String::from("You're out of the game!"),
            welcome: String::from("Want to play a round?"),
        }
    }
}

/// The player shown next to the table.
///
/// Chips are display-only; rounds are not played for stakes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Chip count.
    pub chips: usize,
}

impl Player {
    /// Creates a player.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize) -> Self {
        Self {
            name: name.into(),
            chips,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.name, self.chips)
    }
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjlite::{Player, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_player(Player::new("Nilanchal", 145))
///     .with_win_message("Twenty-one!");
///
/// assert_eq!(options.messages.win, "Twenty-one!");
/// assert_eq!(options.player.unwrap().to_string(), "Nilanchal: $145");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundOptions {
    /// Texts shown for each state.
    pub messages: Messages,
    /// Player badge, if any.
    pub player: Option<Player>,
}

impl RoundOptions {
    /// Sets all messages at once.
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Sets the prompt shown while the round accepts draws.
    #[must_use]
    pub fn with_draw_prompt(mut self, text: impl Into<String>) -> Self {
        self.messages.draw_prompt = text.into();
        self
    }

    /// Sets the message shown on 21.
    #[must_use]
    pub fn with_win_message(mut self, text: impl Into<String>) -> Self {
        self.messages.win = text.into();
        self
    }

    /// Sets the message shown on a bust.
    #[must_use]
    pub fn with_lose_message(mut self, text: impl Into<String>) -> Self {
        self.messages.lose = text.into();
        self
    }

    /// Sets the prompt shown before a round and after a reset.
    #[must_use]
    pub fn with_welcome(mut self, text: impl Into<String>) -> Self {
        self.messages.welcome = text.into();
        self
    }

    /// Sets the player badge.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }
}
