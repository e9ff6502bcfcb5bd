//! Shared types for the wordsplit compound splitter.
//!
//! - [`slice`] -- `WordSlice` offset views into the input word and the
//!   `Segment` parts a segmentation is made of
//! - [`text`] -- case folding and char-index helpers

pub mod slice;
pub mod text;

pub use slice::{Segment, WordSlice};
