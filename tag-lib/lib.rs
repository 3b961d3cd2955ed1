//! Active-token resolution for editor typeahead.
//!
//! Given a snapshot of an editable text, the caret offset within it and the
//! most recent key event, [`ActiveTokenResolver`] determines the hashtag the
//! user is in the middle of typing, or reports that there is none. "In the
//! middle of typing" means producing the token, not merely sitting inside
//! one: navigating the caret into a hashtag does not make it active.

pub mod config;
pub mod resolver;
pub mod token;

pub use config::ResolverConfig;
pub use resolver::{
  ActiveTokenResolver,
  Error,
};
pub use token::{
  Span,
  Token,
  TokenKind,
};
