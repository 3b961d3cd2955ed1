//! Key-event types for the resolver.
//!
//! A [`KeyEvent`] is a snapshot of the most recent key press. The resolver
//! only cares about one question: did this press produce or remove a
//! character, or did it merely move the caret? [`KeyEvent::is_content`]
//! answers it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
  bits: u8,
}

impl Modifiers {
  pub const CTRL: u8 = 0b0000_0001;
  pub const ALT: u8 = 0b0000_0010;
  pub const SHIFT: u8 = 0b0000_0100;
  pub const META: u8 = 0b0000_1000;

  #[must_use]
  pub const fn empty() -> Self {
    Self { bits: 0 }
  }

  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.bits == 0
  }

  #[must_use]
  pub const fn ctrl(self) -> bool {
    (self.bits & Self::CTRL) != 0
  }

  #[must_use]
  pub const fn alt(self) -> bool {
    (self.bits & Self::ALT) != 0
  }

  #[must_use]
  pub const fn shift(self) -> bool {
    (self.bits & Self::SHIFT) != 0
  }

  #[must_use]
  pub const fn meta(self) -> bool {
    (self.bits & Self::META) != 0
  }

  pub fn insert(&mut self, bits: u8) {
    self.bits |= bits;
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
  Char(char),
  Enter,
  Tab,
  Backspace,
  Delete,
  Escape,
  Home,
  End,
  PageUp,
  PageDown,
  Left,
  Right,
  Up,
  Down,
  Shift,
  Control,
  Alt,
  Meta,
  Other,
}

impl Key {
  /// Parses a key from its name, case-insensitively. A single character is
  /// taken literally; named keys accept both short ("left") and web-style
  /// ("ArrowLeft") spellings, since callers typically forward whatever the
  /// host event source reports.
  pub fn from_name(name: &str) -> Option<Self> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
      return Some(Self::Char(ch));
    }

    let key = match name.to_ascii_lowercase().as_str() {
      "enter" | "return" => Self::Enter,
      "tab" => Self::Tab,
      "backspace" => Self::Backspace,
      "delete" => Self::Delete,
      "escape" | "esc" => Self::Escape,
      "home" => Self::Home,
      "end" => Self::End,
      "pageup" => Self::PageUp,
      "pagedown" => Self::PageDown,
      "left" | "arrowleft" => Self::Left,
      "right" | "arrowright" => Self::Right,
      "up" | "arrowup" => Self::Up,
      "down" | "arrowdown" => Self::Down,
      "shift" => Self::Shift,
      "control" | "ctrl" => Self::Control,
      "alt" => Self::Alt,
      "meta" | "super" | "cmd" => Self::Meta,
      _ => return None,
    };
    Some(key)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
  pub key:       Key,
  pub modifiers: Modifiers,
}

impl KeyEvent {
  #[must_use]
  pub const fn new(key: Key) -> Self {
    Self {
      key,
      modifiers: Modifiers::empty(),
    }
  }

  /// Whether this press alters the text rather than only moving the caret.
  ///
  /// Content keys are unmodified characters (Shift is allowed, it changes
  /// the character, not the caret) and the editing keys Enter, Tab,
  /// Backspace and Delete. A character with Ctrl, Alt or Meta held is a
  /// chord, not text entry. Anything unrecognized ([`Key::Other`])
  /// classifies as non-content so that an unknown key suppresses the
  /// typeahead instead of falsely triggering it.
  #[must_use]
  pub fn is_content(self) -> bool {
    match self.key {
      Key::Char(_) => !self.modifiers.ctrl() && !self.modifiers.alt() && !self.modifiers.meta(),
      Key::Enter | Key::Tab | Key::Backspace | Key::Delete => true,
      _ => false,
    }
  }
}
