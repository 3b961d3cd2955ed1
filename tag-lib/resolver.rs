//! The active-token resolver.
//!
//! A token is active when the user is producing it: the triggering key must
//! alter the text, and the token located at the caret must begin with the
//! marker. The scan runs in two bounded phases over an immutable snapshot,
//! backward from the caret to fix the start boundary, then forward to fix
//! the end, so a caret sitting mid-token still resolves the whole token.
//!
//! # Example
//!
//! ```
//! use ropey::Rope;
//! use tag_core::key::{Key, KeyEvent};
//! use tag_lib::resolver::ActiveTokenResolver;
//!
//! let resolver = ActiveTokenResolver::default();
//! let text = Rope::from("Hello #worl");
//! let token = resolver
//!   .resolve(text.slice(..), KeyEvent::new(Key::Char('l')), 11)
//!   .unwrap()
//!   .unwrap();
//! assert_eq!(token.text(), "#worl");
//! ```

use ropey::RopeSlice;
use smallvec::SmallVec;
use tag_core::{
  chars::{categorize_char, char_is_word},
  key::{Key, KeyEvent},
};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
  config::ResolverConfig,
  token::{Span, Token, TokenKind},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("caret {caret} out of bounds for text of {len} chars")]
  CaretOutOfBounds { caret: usize, len: usize },
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct ActiveTokenResolver {
  marker:           char,
  extra_word_chars: SmallVec<[char; 4]>,
  non_content_keys: Vec<Key>,
}

impl Default for ActiveTokenResolver {
  fn default() -> Self {
    Self::new(&ResolverConfig::default())
  }
}

impl ActiveTokenResolver {
  pub fn new(config: &ResolverConfig) -> Self {
    let mut non_content_keys = Vec::with_capacity(config.non_content_keys.len());
    for name in &config.non_content_keys {
      match Key::from_name(name) {
        Some(key) => non_content_keys.push(key),
        None => warn!(name = %name, "ignoring unknown key name in non_content_keys"),
      }
    }

    Self {
      marker: config.marker,
      extra_word_chars: config.extra_word_chars.iter().copied().collect(),
      non_content_keys,
    }
  }

  /// Resolves the token the user is actively producing.
  ///
  /// Returns `Ok(None)` when the key does not alter the text, when there is
  /// no token touching the caret from the left, or when the located token is
  /// a plain word. An out-of-bounds caret is an input-contract violation and
  /// is rejected, never clamped, so callers can tell "no active token" apart
  /// from an invalid call.
  pub fn resolve(&self, text: RopeSlice, event: KeyEvent, caret: usize) -> Result<Option<Token>> {
    let len = text.len_chars();
    if caret > len {
      return Err(Error::CaretOutOfBounds { caret, len });
    }

    if !self.is_content(event) {
      debug!(?event, "non-content key, no active token");
      return Ok(None);
    }

    let token = self.token_at(text, caret)?;
    Ok(token.filter(|token| token.kind == TokenKind::Hashtag))
  }

  /// Locates the token the caret is producing, hashtag or plain word.
  ///
  /// The token must include the character immediately before the caret; a
  /// caret at offset 0 or right after a delimiter locates nothing, even if
  /// a token starts at the caret.
  pub fn token_at(&self, text: RopeSlice, caret: usize) -> Result<Option<Token>> {
    let len = text.len_chars();
    if caret > len {
      return Err(Error::CaretOutOfBounds { caret, len });
    }

    // Backward scan fixes the start boundary.
    let mut start = caret;
    let mut chars = text.chars_at(caret);
    while let Some(ch) = chars.prev() {
      if !self.is_token_char(ch) {
        trace!(boundary = ?categorize_char(ch), at = start, "backward scan stopped");
        break;
      }
      start -= 1;
    }

    if start == caret {
      return Ok(None);
    }

    // Forward scan fixes the end boundary for a caret sitting mid-token.
    let mut end = caret;
    let mut chars = text.chars_at(caret);
    while let Some(ch) = chars.next() {
      if !self.is_token_char(ch) {
        break;
      }
      end += 1;
    }

    let span = Span::new(start, end);
    let text = text.slice(start..end).to_string();
    let kind = if text.starts_with(self.marker) {
      TokenKind::Hashtag
    } else {
      TokenKind::Word
    };

    Ok(Some(Token { span, kind, text }))
  }

  fn is_content(&self, event: KeyEvent) -> bool {
    if self.non_content_keys.contains(&event.key) {
      return false;
    }
    event.is_content()
  }

  #[inline]
  fn is_token_char(&self, ch: char) -> bool {
    char_is_word(ch) || ch == self.marker || self.extra_word_chars.contains(&ch)
  }
}

#[cfg(test)]
mod test {
  use ropey::Rope;
  use tag_core::key::Modifiers;

  use super::*;

  fn resolve(text: &str, key: Key, caret: usize) -> Result<Option<Token>> {
    let rope = Rope::from(text);
    ActiveTokenResolver::default().resolve(rope.slice(..), KeyEvent::new(key), caret)
  }

  #[test]
  fn test_hashtag_at_caret_is_active() {
    let token = resolve("Hello #worl", Key::Char('l'), 11).unwrap().unwrap();
    assert_eq!(token.text(), "#worl");
    assert_eq!(token.span, Span::new(6, 11));
    assert_eq!(token.kind, TokenKind::Hashtag);
  }

  #[test]
  fn test_navigation_into_hashtag_is_not_active() {
    assert_eq!(resolve("Hello #world", Key::Left, 11), Ok(None));
  }

  #[test]
  fn test_plain_word_is_not_active() {
    assert_eq!(resolve("#Hello worl", Key::Char('l'), 11), Ok(None));
  }

  #[test]
  fn test_empty_text() {
    assert_eq!(resolve("", Key::Char('a'), 0), Ok(None));
  }

  #[test]
  fn test_second_hashtag_resolves_independently() {
    let token = resolve("#a #b", Key::Char('b'), 5).unwrap().unwrap();
    assert_eq!(token.text(), "#b");
    assert_eq!(token.span, Span::new(3, 5));
  }

  #[test]
  fn test_caret_right_after_delimiter() {
    assert_eq!(resolve("#a #b", Key::Char('x'), 3), Ok(None));
  }

  #[test]
  fn test_caret_mid_token_resolves_whole_token() {
    let token = resolve("#worl d", Key::Char('o'), 3).unwrap().unwrap();
    assert_eq!(token.text(), "#worl");
    assert_eq!(token.span, Span::new(0, 5));
  }

  #[test]
  fn test_hashtag_at_start_and_end_of_text() {
    let token = resolve("#tag", Key::Char('g'), 4).unwrap().unwrap();
    assert_eq!(token.text(), "#tag");
  }

  #[test]
  fn test_backspace_keeps_typeahead_live() {
    let token = resolve("Hello #worl", Key::Backspace, 11).unwrap().unwrap();
    assert_eq!(token.text(), "#worl");
  }

  #[test]
  fn test_chord_is_not_active() {
    let mut modifiers = Modifiers::empty();
    modifiers.insert(Modifiers::CTRL);
    let event = KeyEvent {
      key: Key::Char('l'),
      modifiers,
    };
    let rope = Rope::from("Hello #worl");
    let resolver = ActiveTokenResolver::default();
    assert_eq!(resolver.resolve(rope.slice(..), event, 11), Ok(None));
  }

  #[test]
  fn test_caret_out_of_bounds() {
    assert_eq!(
      resolve("#tag", Key::Char('g'), 5),
      Err(Error::CaretOutOfBounds { caret: 5, len: 4 })
    );
  }

  #[test]
  fn test_token_at_finds_plain_words() {
    let rope = Rope::from("Hello #world");
    let resolver = ActiveTokenResolver::default();
    let token = resolver.token_at(rope.slice(..), 5).unwrap().unwrap();
    assert_eq!(token.text(), "Hello");
    assert_eq!(token.kind, TokenKind::Word);
  }

  #[test]
  fn test_custom_marker() {
    let config = ResolverConfig {
      marker: '@',
      ..ResolverConfig::default()
    };
    let resolver = ActiveTokenResolver::new(&config);
    let rope = Rope::from("ping @al");
    let token = resolver
      .resolve(rope.slice(..), KeyEvent::new(Key::Char('l')), 8)
      .unwrap()
      .unwrap();
    assert_eq!(token.text(), "@al");
    assert_eq!(token.kind, TokenKind::Hashtag);
  }

  #[test]
  fn test_extra_word_chars_extend_the_token() {
    let config = ResolverConfig {
      extra_word_chars: vec!['-'],
      ..ResolverConfig::default()
    };
    let resolver = ActiveTokenResolver::new(&config);
    let rope = Rope::from("#rust-lan");
    let token = resolver
      .resolve(rope.slice(..), KeyEvent::new(Key::Char('n')), 9)
      .unwrap()
      .unwrap();
    assert_eq!(token.text(), "#rust-lan");
  }

  #[test]
  fn test_configured_non_content_key_suppresses() {
    let config = ResolverConfig {
      non_content_keys: vec!["enter".into(), "bogus_key".into()],
      ..ResolverConfig::default()
    };
    let resolver = ActiveTokenResolver::new(&config);
    let rope = Rope::from("#tag");
    assert_eq!(
      resolver.resolve(rope.slice(..), KeyEvent::new(Key::Enter), 4),
      Ok(None)
    );
  }

  quickcheck::quickcheck! {
    fn prop_non_content_key_never_resolves(text: String, caret: usize) -> bool {
      let rope = Rope::from(text.as_str());
      let caret = caret % (rope.len_chars() + 1);
      let resolver = ActiveTokenResolver::default();
      resolver
        .resolve(rope.slice(..), KeyEvent::new(Key::Left), caret)
        .unwrap()
        .is_none()
    }

    fn prop_delimiter_before_caret_never_resolves(text: String, caret: usize) -> bool {
      let rope = Rope::from(text.as_str());
      let caret = caret % (rope.len_chars() + 1);
      let delimited = caret == 0 || {
        let ch = rope.char(caret - 1);
        !(ch.is_alphanumeric() || ch == '_' || ch == '#')
      };
      if !delimited {
        return true;
      }
      let resolver = ActiveTokenResolver::default();
      resolver
        .resolve(rope.slice(..), KeyEvent::new(Key::Char('x')), caret)
        .unwrap()
        .is_none()
    }

    fn prop_resolve_is_pure(text: String, caret: usize) -> bool {
      let rope = Rope::from(text.as_str());
      let caret = caret % (rope.len_chars() + 1);
      let resolver = ActiveTokenResolver::default();
      let event = KeyEvent::new(Key::Char('x'));
      resolver.resolve(rope.slice(..), event, caret)
        == resolver.resolve(rope.slice(..), event, caret)
    }
  }
}
