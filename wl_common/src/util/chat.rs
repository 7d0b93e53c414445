//! Text components, as they show up on items. Custom names, lore lines, and
//! book pages are all chat messages, in the same json format the client uses
//! for the chat box.
//!
//! A chat message is a list of [`Section`]s. Each of these sections has a text
//! component, and a bunch of styling options. To add a section to a chat
//! message, use [`Chat::add`]. This will add a section with the given text, and
//! no styling options.
//!
//! # Example
//!
//! ```rust
//! use wl_common::util::{Chat, chat::Color};
//!
//! let mut msg = Chat::new("Hello! ".to_string());
//!
//! msg.add("I am a section. ".to_string()).bold();
//! msg.add("I am another section".to_string()).color(Color::BrightGreen).italic();
//!
//! let json = msg.to_json();
//! assert_eq!(json, r#"[{"text":"Hello! "},{"text":"I am a section. ","bold":true},{"text":"I am another section","italic":true,"color":"green"}]"#);
//! ```

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_derive::{Deserialize, Serialize};
use std::{error::Error, fmt, str::FromStr};

impl Default for Chat {
  fn default() -> Self { Chat::empty() }
}

/// This is a chat message. It has a list of sections, and can be serialized to
/// json.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chat {
  /// Can never be empty, as it causes too many bugs/edge cases.
  sections: Vec<Section>,
}

impl Chat {
  /// Creates a new Chat message. This will contain a single section, with the
  /// given text set. No formatting will be applied.
  pub fn new<M: Into<String>>(msg: M) -> Self {
    Chat { sections: vec![Section { text: msg.into(), ..Default::default() }] }
  }
  /// Creates a new Chat message, with 1 empty section.
  ///
  /// There are numerous problems with having no sections, so the sections list
  /// can never be empty.
  pub fn empty() -> Self { Chat::new("") }

  /// Adds a new chat section, with the given string. The returned reference is
  /// a reference into self, so it must be dropped before adding another
  /// section.
  pub fn add<M: Into<String>>(&mut self, msg: M) -> &mut Section {
    let s = Section { text: msg.into(), ..Default::default() };
    let idx = self.sections.len();
    self.sections.push(s);
    self.sections.get_mut(idx).unwrap()
  }

  /// Generates a json message that represents this chat message. This is what
  /// ends up on the wire for item names, lore and book pages.
  pub fn to_json(&self) -> String { serde_json::to_string(self).unwrap() }

  /// Parses the given json as a chat message.
  pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
    if src.starts_with('{') {
      let s: Section = serde_json::from_str(src)?;
      Ok(Chat { sections: vec![s] })
    } else {
      let sections: Vec<Section> = serde_json::from_str(src)?;
      Ok(Chat { sections })
    }
  }

  /// Generates a string for this chat message in plain text (no formatting).
  pub fn to_plain(&self) -> String {
    let mut out = String::new();
    for s in &self.sections {
      s.to_plain(&mut out);
    }
    out
  }

  pub fn sections_len(&self) -> usize { self.sections.len() }
  pub fn get_section(&mut self, idx: usize) -> Option<&mut Section> { self.sections.get_mut(idx) }
}

impl Serialize for Chat {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    if self.sections.is_empty() {
      let s = serializer.serialize_map(Some(0))?;
      s.end()
    } else if self.sections.len() == 1 {
      self.sections[0].serialize(serializer)
    } else {
      let mut s = serializer.serialize_seq(Some(self.sections.len()))?;
      for sec in &self.sections {
        s.serialize_element(sec)?;
      }
      s.end()
    }
  }
}

impl From<&str> for Chat {
  fn from(msg: &str) -> Chat { Chat::new(msg) }
}
impl From<String> for Chat {
  fn from(msg: String) -> Chat { Chat::new(msg) }
}

/// This is a chat message section. It has some text, and a lot of optional
/// fields:
/// - [`bold`]: If true, this section will be rendered in bold.
/// - [`italic`]: If true, this section will be rendered in italics.
/// - [`underlined`]: If true, this section will be rendered with an underline.
/// - [`strikethrough`]: If true, this section will be rendered with a line
///   through it.
/// - [`obfuscated`]: If true, this section will be rendered as random always
///   changing letters.
/// - [`color`]: This is the [`Color`] to render this section in.
/// - [`add_child`]: Adds a child chat section. If any of the children's fields
///   are left blank, then it will copy then from this section.
///
/// [`bold`]: Self::bold
/// [`italic`]: Self::italic
/// [`underlined`]: Self::underlined
/// [`strikethrough`]: Self::strikethrough
/// [`obfuscated`]: Self::obfuscated
/// [`color`]: Self::color
/// [`add_child`]: Self::add_child
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
  text:          String,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  bold:          Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  italic:        Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  underlined:    Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  strikethrough: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  obfuscated:    Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
  color:         Option<Color>,
  // Any child elements. If any of their options are None, then these options should be used.
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  extra:         Vec<Section>,
}

macro_rules! add_bool {
  (
    $(#[$meta:meta])*
    $name: ident
  ) => (
    $(#[$meta])*
    pub fn $name(&mut self) -> &mut Self {
      self.$name = Some(true);
      self
    }
  )
}

impl Section {
  add_bool!(
    /// Makes this chat section bold.
    bold
  );
  add_bool!(
    /// Makes this chat section italic.
    italic
  );
  add_bool!(
    /// Makes this chat section underlined.
    underlined
  );
  add_bool!(
    /// Makes this chat section strikethrough (puts a line through the middle of
    /// it).
    strikethrough
  );
  add_bool!(
    /// Makes this chat section obfuscated. All the letters will be randomized
    /// constantly.
    obfuscated
  );
  /// Applies the given color to this section.
  pub fn color(&mut self, c: Color) -> &mut Self {
    self.color = Some(c);
    self
  }
  /// This adds a child section to this chat section. Any properties left blank
  /// on that child will be filled in from this section. If you want multiple
  /// chat sections in a row, you probably want to use [`Chat::add`] instead.
  /// This is instead useful for something like a highlighted suffix, where part
  /// of a line should be a different color.
  pub fn add_child<M: Into<String>>(&mut self, msg: M) -> &mut Section {
    let s = Section { text: msg.into(), ..Default::default() };
    let idx = self.extra.len();
    self.extra.push(s);
    self.extra.get_mut(idx).unwrap()
  }

  fn to_plain(&self, out: &mut String) {
    out.push_str(&self.text);
    for e in &self.extra {
      e.to_plain(out);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
  Black,
  DarkBlue,
  DarkGreen,
  DarkAqua,
  DarkRed,
  Purple,
  Gold,
  Gray,
  DarkGray,
  Blue,
  BrightGreen,
  Cyan,
  Red,
  Pink,
  Yellow,
  White,
  Custom(String),
}

impl Color {
  /// Creates a new rgb color. This is only valid for 1.16+ clients. For older
  /// clients, this will render as white.
  pub fn rgb(r: u8, g: u8, b: u8) -> Self { Color::Custom(format!("#{r:02x}{g:02x}{b:02x}")) }

  /// Converts the color to a string. This string should be used in chat json.
  pub fn to_str(&self) -> &str {
    match self {
      Self::Black => "black",
      Self::DarkBlue => "dark_blue",
      Self::DarkGreen => "dark_green",
      Self::DarkAqua => "dark_aqua",
      Self::DarkRed => "dark_red",
      Self::Purple => "dark_purple",
      Self::Gold => "gold",
      Self::Gray => "gray",
      Self::DarkGray => "dark_gray",
      Self::Blue => "blue",
      Self::BrightGreen => "green",
      Self::Cyan => "aqua",
      Self::Red => "red",
      Self::Pink => "pink",
      Self::Yellow => "yellow",
      Self::White => "white",
      Self::Custom(v) => v,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorFromStrError(String);

impl fmt::Display for ColorFromStrError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "invalid color: {}", self.0) }
}

impl Error for ColorFromStrError {}

impl FromStr for Color {
  type Err = ColorFromStrError;

  fn from_str(s: &str) -> Result<Color, ColorFromStrError> {
    Ok(match s {
      "black" => Color::Black,
      "dark_blue" => Color::DarkBlue,
      "dark_green" => Color::DarkGreen,
      "dark_aqua" => Color::DarkAqua,
      "dark_red" => Color::DarkRed,
      "dark_purple" => Color::Purple,
      "gold" => Color::Gold,
      "gray" => Color::Gray,
      "dark_gray" => Color::DarkGray,
      "blue" => Color::Blue,
      "green" => Color::BrightGreen,
      "aqua" => Color::Cyan,
      "red" => Color::Red,
      "pink" => Color::Pink,
      "yellow" => Color::Yellow,
      "white" => Color::White,
      _ => {
        if s.starts_with('#') && s.len() == 7 {
          Color::Custom(s.into())
        } else {
          return Err(ColorFromStrError(s.into()));
        }
      }
    })
  }
}

impl Serialize for Color {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(self.to_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn serialize() {
    let mut msg = Chat::new("Hello! ".to_string());
    msg.add("I am a section. ".to_string()).bold();
    msg.add("I am another section".to_string()).color(Color::BrightGreen).italic();
    assert_eq!(
      msg.to_json(),
      r#"[{"text":"Hello! "},{"text":"I am a section. ","bold":true},{"text":"I am another section","italic":true,"color":"green"}]"#
    );

    // A single section serializes to an object, not a list. Lore lines rely
    // on this, as each line is one section most of the time.
    let msg = Chat::new("one line");
    assert_eq!(msg.to_json(), r#"{"text":"one line"}"#);
  }

  #[test]
  fn deserialize() {
    let mut msg = Chat::new("left ");
    msg.add("right").bold();
    let parsed = Chat::from_json(&msg.to_json()).unwrap();
    assert_eq!(parsed.sections_len(), 2);
    assert_eq!(parsed.to_plain(), "left right");

    let parsed = Chat::from_json(r#"{"text":"just me"}"#).unwrap();
    assert_eq!(parsed, Chat::new("just me"));
  }

  #[test]
  fn plain_text() {
    let mut msg = Chat::new("Hello! ".to_string());
    msg.add("bold words").bold();
    msg.get_section(1).unwrap().add_child(" (and a suffix)");
    assert_eq!(msg.to_plain(), "Hello! bold words (and a suffix)");
  }

  #[test]
  fn color_names() {
    assert_eq!(Color::BrightGreen.to_str(), "green");
    assert_eq!("green".parse::<Color>().unwrap(), Color::BrightGreen);
    assert_eq!("#ff00aa".parse::<Color>().unwrap(), Color::rgb(0xff, 0x00, 0xaa));
    assert!("chartreuse".parse::<Color>().is_err());
  }
}
