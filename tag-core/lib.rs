//! Primitive classification layer for tagahead.
//!
//! Holds the character categories the token scanner is built on and the
//! key-event types the resolver classifies into content and non-content
//! input.

pub mod chars;
pub mod key;
