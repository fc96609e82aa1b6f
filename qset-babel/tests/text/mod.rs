//! Text notation tests
//!
//! Tests for the text notation ↔ question conversion and the editing session.

mod editor;
mod parse;
mod round_trip;
mod serialize;
