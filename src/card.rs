//! Card values and the random card source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces in a suit.
pub const FACES: u8 = 13;

/// Lowest value a drawn card can have.
pub const MIN_CARD_VALUE: u8 = 2;

/// Highest value a drawn card can have (an ace).
pub const MAX_CARD_VALUE: u8 = 11;

/// Maps a face (1 = Ace, 11 = Jack, 12 = Queen, 13 = King) to its value.
///
/// Aces always count as 11 and court cards as 10. Faces outside `1..=13`
/// yield 0.
#[must_use]
pub const fn card_value(face: u8) -> u8 {
    match face {
        1 => 11,
        2..=10 => face,
        11..=13 => 10,
        _ => 0,
    }
}

/// A source of card values consumed by a [`Round`](crate::Round).
///
/// Implementations must return values in
/// [`MIN_CARD_VALUE`]`..=`[`MAX_CARD_VALUE`]; the round does not re-validate
/// them.
pub trait CardSource {
    /// Draws the next card value.
    fn draw(&mut self) -> u8;
}

/// Uniform draws over a 13-face deck, backed by a seeded `ChaCha8` generator.
///
/// Every draw is independent: there is no shoe to run out of, so the same
/// face can come up any number of times.
#[derive(Debug, Clone)]
pub struct SeededCards {
    rng: ChaCha8Rng,
}

impl SeededCards {
    /// Creates a card source from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a raw face in `1..=13`.
    pub fn face(&mut self) -> u8 {
        self.rng.random_range(1..=FACES)
    }
}

impl CardSource for SeededCards {
    fn draw(&mut self) -> u8 {
        card_value(self.face())
    }
}
