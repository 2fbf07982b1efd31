//! Round controller and state management.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::sync::Mutex;

use crate::card::{CardSource, SeededCards};
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::render::{Frame, RenderSink};

mod actions;
pub mod state;

pub use state::RoundState;

/// Controller for a single blackjack round.
///
/// The round owns its hand, its card source, and the sink it renders into.
/// Operations take `&self`; state lives behind internal locks so a round can
/// be shared with whatever mediates user input. Locks are always taken in
/// the order state, source, hand, sink.
pub struct Round<C = SeededCards, P = ()> {
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: Mutex<RoundState>,
    /// Drawn cards.
    hand: Mutex<Hand>,
    /// Where card values come from.
    source: Mutex<C>,
    /// Where frames go.
    sink: Mutex<P>,
}

impl Round {
    /// Creates an idle round drawing from a [`SeededCards`] source and
    /// discarding frames.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// round.start().unwrap();
    /// assert_eq!(round.cards().len(), 2);
    /// assert_ne!(round.state(), RoundState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self::with_parts(options, SeededCards::new(seed), ())
    }
}

impl<C: CardSource, P: RenderSink> Round<C, P> {
    /// Creates an idle round from an explicit card source and sink.
    ///
    /// Nothing is rendered until the first operation.
    pub fn with_parts(options: RoundOptions, source: C, sink: P) -> Self {
        Self {
            options,
            state: Mutex::new(RoundState::Idle),
            hand: Mutex::new(Hand::new()),
            source: Mutex::new(source),
            sink: Mutex::new(sink),
        }
    }

    /// Returns the round options.
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns the drawn card values in draw order.
    pub fn cards(&self) -> Vec<u8> {
        self.hand.lock().cards().to_vec()
    }

    /// Returns the running total.
    pub fn total(&self) -> u8 {
        self.hand.lock().total()
    }

    /// Returns whether the round accepts another card.
    pub fn is_alive(&self) -> bool {
        self.state() == RoundState::Active
    }

    /// Returns whether the round reached 21.
    pub fn has_blackjack(&self) -> bool {
        self.state() == RoundState::Won
    }

    /// Returns whether a round has been started and not yet reset.
    pub fn in_progress(&self) -> bool {
        self.state() != RoundState::Idle
    }

    /// Returns the player badge, e.g. `Nilanchal: $145`.
    pub fn player_badge(&self) -> Option<String> {
        self.options
            .player
            .as_ref()
            .map(ToString::to_string)
    }

    /// Returns a frame describing the current round without rendering it.
    pub fn frame(&self) -> Frame {
        let state = self.state.lock();
        let hand = self.hand.lock();
        self.frame_of(*state, &hand)
    }

    /// Runs `f` with exclusive access to the sink.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        let mut sink = self.sink.lock();
        f(&mut *sink)
    }

    /// Consumes the round and returns its card source and sink.
    pub fn into_parts(self) -> (C, P) {
        (self.source.into_inner(), self.sink.into_inner())
    }

    fn frame_of(&self, state: RoundState, hand: &Hand) -> Frame {
        Frame {
            state,
            message: self.options.messages.for_state(state).into(),
            total: hand.total(),
            cards: hand.cards().to_vec(),
        }
    }

    fn push(&self, frame: &Frame) {
        self.sink.lock().render(frame);
    }
}
