use tracing::debug;

use crate::card::CardSource;
use crate::error::{DrawError, StartError};
use crate::render::RenderSink;

use super::{Round, RoundState};

impl<C: CardSource, P: RenderSink> Round<C, P> {
    /// Starts a round by drawing two cards.
    ///
    /// Returns the resulting state: [`RoundState::Active`], or
    /// [`RoundState::Won`] if the first two cards total 21. A frame is
    /// rendered once both cards are on the table.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::AlreadyInProgress`] unless the round is idle.
    /// The round is left untouched.
    pub fn start(&self) -> Result<RoundState, StartError> {
        let mut state = self.state.lock();
        if *state != RoundState::Idle {
            debug!(state = ?*state, "start rejected: round in progress");
            return Err(StartError::AlreadyInProgress);
        }

        let (first, second) = {
            let mut source = self.source.lock();
            (source.draw(), source.draw())
        };

        let frame = {
            let mut hand = self.hand.lock();
            hand.clear();
            hand.add_card(first);
            hand.add_card(second);
            debug_assert_eq!(hand.len(), 2);
            *state = RoundState::from(hand.status());

            debug!(first, second, total = hand.total(), state = ?*state, "round started");
            self.frame_of(*state, &hand)
        };

        // Render before releasing the state lock so frames reach the sink in
        // transition order.
        self.push(&frame);
        drop(state);
        Ok(frame.state)
    }

    /// Draws one more card.
    ///
    /// Returns the drawn card value. The round moves to
    /// [`RoundState::Busted`] over 21, to [`RoundState::Won`] on exactly 21,
    /// and otherwise stays active. A frame is rendered afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running or the round has already
    /// ended. The round is left untouched.
    pub fn draw(&self) -> Result<u8, DrawError> {
        let mut state = self.state.lock();
        if let Some(err) = DrawError::from_state(*state) {
            debug!(state = ?*state, "draw rejected");
            return Err(err);
        }

        let value = self.source.lock().draw();

        let frame = {
            let mut hand = self.hand.lock();
            hand.add_card(value);
            *state = RoundState::from(hand.status());

            debug!(value, total = hand.total(), state = ?*state, "card drawn");
            self.frame_of(*state, &hand)
        };

        self.push(&frame);
        drop(state);
        Ok(value)
    }

    /// Clears the round and returns it to [`RoundState::Idle`].
    ///
    /// Always succeeds, from any state. A frame showing the welcome prompt
    /// is rendered.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        let frame = {
            let mut hand = self.hand.lock();
            hand.clear();
            debug_assert!(hand.is_empty());
            *state = RoundState::Idle;

            debug!("round reset");
            self.frame_of(*state, &hand)
        };

        self.push(&frame);
        drop(state);
    }
}
