use serde_derive::{Deserialize, Serialize};

/// An RGB color. This is used for things that take a full color, like leather
/// armor dye and firework stars. Chat styling uses
/// [`chat::Color`](super::chat::Color) instead, which is mostly named colors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Color {
  // The 16 dye colors, as the client renders them.
  pub const WHITE: Color = Color::new(0xf9, 0xff, 0xfe);
  pub const ORANGE: Color = Color::new(0xf9, 0x80, 0x1d);
  pub const MAGENTA: Color = Color::new(0xc7, 0x4e, 0xbd);
  pub const LIGHT_BLUE: Color = Color::new(0x3a, 0xb3, 0xda);
  pub const YELLOW: Color = Color::new(0xfe, 0xd8, 0x3d);
  pub const LIME: Color = Color::new(0x80, 0xc7, 0x1f);
  pub const PINK: Color = Color::new(0xf3, 0x8b, 0xaa);
  pub const GRAY: Color = Color::new(0x47, 0x4f, 0x52);
  pub const LIGHT_GRAY: Color = Color::new(0x9d, 0x9d, 0x97);
  pub const CYAN: Color = Color::new(0x16, 0x9c, 0x9c);
  pub const PURPLE: Color = Color::new(0x89, 0x32, 0xb8);
  pub const BLUE: Color = Color::new(0x3c, 0x44, 0xaa);
  pub const BROWN: Color = Color::new(0x83, 0x54, 0x32);
  pub const GREEN: Color = Color::new(0x5e, 0x7c, 0x16);
  pub const RED: Color = Color::new(0xb0, 0x2e, 0x26);
  pub const BLACK: Color = Color::new(0x1d, 0x1d, 0x21);

  pub const fn new(r: u8, g: u8, b: u8) -> Self { Color { r, g, b } }

  /// Returns this color packed into the lower 24 bits, as `0xrrggbb`. This is
  /// the format item metadata stores dyed colors in.
  pub const fn as_rgb(&self) -> u32 {
    (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
  }
  /// Builds a color from a packed `0xrrggbb` value. The top byte is ignored.
  pub const fn from_rgb(v: u32) -> Self {
    Color::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn packed_round_trip() {
    assert_eq!(Color::new(0x12, 0x34, 0x56).as_rgb(), 0x123456);
    assert_eq!(Color::from_rgb(0x123456), Color::new(0x12, 0x34, 0x56));
    assert_eq!(Color::from_rgb(Color::PURPLE.as_rgb()), Color::PURPLE);
  }
}
