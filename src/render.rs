//! Frames pushed to the presentation layer after every transition.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::round::RoundState;

/// Label in front of the running total.
pub const SUM_LABEL: &str = "Sum: ";

/// Label in front of the drawn cards.
pub const CARDS_LABEL: &str = "Cards: ";

/// A rendered view of the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// State the round was in when the frame was taken.
    pub state: RoundState,
    /// Message for that state.
    pub message: String,
    /// Running total.
    pub total: u8,
    /// Drawn card values in draw order.
    pub cards: Vec<u8>,
}

impl Frame {
    /// Formats the total line, e.g. `Sum: 14`.
    ///
    /// The total is left blank while no round is running.
    #[must_use]
    pub fn sum_line(&self) -> String {
        SumLine(self).to_string()
    }

    /// Formats the cards line, e.g. `Cards: 5 9`.
    #[must_use]
    pub fn cards_line(&self) -> String {
        CardsLine(&self.cards).to_string()
    }
}

struct SumLine<'a>(&'a Frame);

impl fmt::Display for SumLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SUM_LABEL)?;
        if self.0.state == RoundState::Idle {
            Ok(())
        } else {
            write!(f, "{}", self.0.total)
        }
    }
}

struct CardsLine<'a>(&'a [u8]);

impl fmt::Display for CardsLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CARDS_LABEL)?;
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f, "{}", SumLine(self))?;
        write!(f, "{}", CardsLine(&self.cards))
    }
}

/// Write-only display surface that receives a [`Frame`] after every
/// transition.
pub trait RenderSink {
    /// Displays a frame.
    fn render(&mut self, frame: &Frame);
}

/// Discards every frame.
impl RenderSink for () {
    fn render(&mut self, _frame: &Frame) {}
}

/// Records every frame in order.
impl RenderSink for Vec<Frame> {
    fn render(&mut self, frame: &Frame) {
        self.push(frame.clone());
    }
}
