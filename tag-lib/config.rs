//! Resolver configuration, deserialized from TOML.
//!
//! Every field has a built-in default, so a config file only needs to state
//! what it changes:
//!
//! ```toml
//! marker = "@"
//! extra_word_chars = ["-"]
//! non_content_keys = ["enter", "tab"]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read config file: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to parse config: {0}")]
  Parse(#[from] toml::de::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
  /// The character that classifies a token as a hashtag.
  pub marker:           char,
  /// Characters treated as part of a token in addition to the word class
  /// (alphanumerics and underscore).
  pub extra_word_chars: Vec<char>,
  /// Key names classified as non-content on top of the built-in navigation
  /// and modifier keys. Names are matched the way [`tag_core::key::Key::from_name`]
  /// matches them; unknown names are ignored with a warning.
  pub non_content_keys: Vec<String>,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      marker:           '#',
      extra_word_chars: Vec::new(),
      non_content_keys: Vec::new(),
    }
  }
}

impl ResolverConfig {
  pub fn from_toml(source: &str) -> Result<Self> {
    Ok(toml::from_str(source)?)
  }

  pub fn load(path: &Path) -> Result<Self> {
    Self::from_toml(&std::fs::read_to_string(path)?)
  }
}
