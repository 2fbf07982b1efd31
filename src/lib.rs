//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one round at a time: it
//! deals two cards on [`Round::start`], adds cards on [`Round::draw`], and
//! clears everything on [`Round::reset`]. After every transition it pushes a
//! [`Frame`] to a [`RenderSink`] supplied by the presentation layer.
//!
//! # Example
//!
//! ```
//! use bjlite::{Frame, Round, RoundOptions};
//!
//! let round = Round::with_parts(
//!     RoundOptions::default(),
//!     bjlite::SeededCards::new(7),
//!     Vec::<Frame>::new(),
//! );
//! round.start().unwrap();
//! round.reset();
//! assert_eq!(round.with_sink(|frames| frames.len()), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod render;
pub mod round;
mod sync;

// Re-export main types
pub use card::{CardSource, FACES, MAX_CARD_VALUE, MIN_CARD_VALUE, SeededCards, card_value};
pub use error::{DrawError, StartError};
pub use hand::{BLACKJACK, Hand, HandStatus};
pub use options::{Messages, Player, RoundOptions};
pub use render::{Frame, RenderSink};
pub use round::{Round, RoundState};
