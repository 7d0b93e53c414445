use super::Type;
use num::{FromPrimitive, ToPrimitive};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, str::FromStr};
use wl_common::util::Color;

/// One of the 16 dye colors. Used for banner backgrounds and patterns.
#[derive(
  Debug,
  Default,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  FromPrimitive,
  ToPrimitive,
  Serialize,
  Deserialize,
)]
pub enum DyeColor {
  #[default]
  White,
  Orange,
  Magenta,
  LightBlue,
  Yellow,
  Lime,
  Pink,
  Gray,
  LightGray,
  Cyan,
  Purple,
  Blue,
  Brown,
  Green,
  Red,
  Black,
}

#[derive(Debug)]
pub struct InvalidDyeColor(String);

impl fmt::Display for InvalidDyeColor {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "invalid dye color: {}", self.0)
  }
}

impl Error for InvalidDyeColor {}

impl DyeColor {
  pub fn id(self) -> u32 { ToPrimitive::to_u32(&self).unwrap() }
  pub fn from_u32(id: u32) -> Self { FromPrimitive::from_u32(id).unwrap_or(DyeColor::White) }

  /// Returns the banner item dyed in this color. Banners encode their base
  /// color in the item type, not in metadata, so switching a banner's
  /// background means switching the item type.
  pub fn banner_type(self) -> Type {
    match self {
      Self::White => Type::WhiteBanner,
      Self::Orange => Type::OrangeBanner,
      Self::Magenta => Type::MagentaBanner,
      Self::LightBlue => Type::LightBlueBanner,
      Self::Yellow => Type::YellowBanner,
      Self::Lime => Type::LimeBanner,
      Self::Pink => Type::PinkBanner,
      Self::Gray => Type::GrayBanner,
      Self::LightGray => Type::LightGrayBanner,
      Self::Cyan => Type::CyanBanner,
      Self::Purple => Type::PurpleBanner,
      Self::Blue => Type::BlueBanner,
      Self::Brown => Type::BrownBanner,
      Self::Green => Type::GreenBanner,
      Self::Red => Type::RedBanner,
      Self::Black => Type::BlackBanner,
    }
  }

  /// Returns the color this dye renders as.
  pub fn rgb(self) -> Color {
    match self {
      Self::White => Color::WHITE,
      Self::Orange => Color::ORANGE,
      Self::Magenta => Color::MAGENTA,
      Self::LightBlue => Color::LIGHT_BLUE,
      Self::Yellow => Color::YELLOW,
      Self::Lime => Color::LIME,
      Self::Pink => Color::PINK,
      Self::Gray => Color::GRAY,
      Self::LightGray => Color::LIGHT_GRAY,
      Self::Cyan => Color::CYAN,
      Self::Purple => Color::PURPLE,
      Self::Blue => Color::BLUE,
      Self::Brown => Color::BROWN,
      Self::Green => Color::GREEN,
      Self::Red => Color::RED,
      Self::Black => Color::BLACK,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::White => "white",
      Self::Orange => "orange",
      Self::Magenta => "magenta",
      Self::LightBlue => "light_blue",
      Self::Yellow => "yellow",
      Self::Lime => "lime",
      Self::Pink => "pink",
      Self::Gray => "gray",
      Self::LightGray => "light_gray",
      Self::Cyan => "cyan",
      Self::Purple => "purple",
      Self::Blue => "blue",
      Self::Brown => "brown",
      Self::Green => "green",
      Self::Red => "red",
      Self::Black => "black",
    }
  }
}

impl fmt::Display for DyeColor {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.name()) }
}

impl FromStr for DyeColor {
  type Err = InvalidDyeColor;

  fn from_str(s: &str) -> Result<Self, InvalidDyeColor> {
    let mut found = None;
    for id in 0..16 {
      let c = DyeColor::from_u32(id);
      if c.name() == s {
        found = Some(c);
        break;
      }
    }
    found.ok_or_else(|| InvalidDyeColor(s.into()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn banner_mapping_is_total() {
    for id in 0..16 {
      let color = DyeColor::from_u32(id);
      assert_eq!(color.banner_type().banner_color(), Some(color));
    }
  }

  #[test]
  fn default_is_white() {
    assert_eq!(DyeColor::default(), DyeColor::White);
    assert_eq!(DyeColor::from_u32(999), DyeColor::White);
  }

  #[test]
  fn names() {
    assert_eq!("light_blue".parse::<DyeColor>().unwrap(), DyeColor::LightBlue);
    assert!("lavender".parse::<DyeColor>().is_err());
  }

  #[test]
  fn renders_as_the_dye_rgb() {
    assert_eq!(DyeColor::Red.rgb(), Color::RED);
    assert_eq!(DyeColor::default().rgb(), Color::WHITE);
  }
}
