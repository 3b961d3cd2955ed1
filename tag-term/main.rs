//! Command-line probe for the active-token resolver.
//!
//! Feeds one (text, key, caret) triple through the resolver and prints the
//! outcome, which is handy for poking at edge cases without wiring up an
//! editor:
//!
//! ```text
//! $ tagahead --key l --caret 11 "Hello #worl"
//! #worl [6..11)
//! ```

use std::path::PathBuf;

use clap::Parser;
use eyre::{
  Result,
  WrapErr,
  eyre,
};
use ropey::Rope;
use tag_core::key::{
  Key,
  KeyEvent,
};
use tag_lib::{
  ActiveTokenResolver,
  ResolverConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tagahead")]
#[command(about = "Resolve the hashtag being typed at a caret position")]
struct Cli {
  /// Caret position as a char offset; defaults to the end of the text
  #[arg(long)]
  caret: Option<usize>,

  /// Triggering key: a single character, or a name like "left" or
  /// "backspace"
  #[arg(long, default_value = "a")]
  key: String,

  /// Path to a resolver config file (TOML)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Text of the editable field
  text: String,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => ResolverConfig::load(path).wrap_err("failed to load resolver config")?,
    None => ResolverConfig::default(),
  };
  let resolver = ActiveTokenResolver::new(&config);

  let text = Rope::from(cli.text.as_str());
  let caret = cli.caret.unwrap_or_else(|| text.len_chars());
  let key = Key::from_name(&cli.key).ok_or_else(|| eyre!("unrecognized key name: {}", cli.key))?;

  match resolver.resolve(text.slice(..), KeyEvent::new(key), caret)? {
    Some(token) => println!("{} {}", token.text(), token.span),
    None => println!("no active token"),
  }

  Ok(())
}
