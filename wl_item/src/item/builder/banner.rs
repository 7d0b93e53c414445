use super::{builder_parts, BuilderError, ItemBuilder};
use crate::item::{
  color::DyeColor,
  meta::{Meta, Pattern},
  Stack, Type,
};

/// Banner pattern operations, shared by banners and shields.
pub trait Patterned: ItemBuilder {
  /// Adds a pattern layer on top of the existing ones.
  fn pattern(mut self, pattern: Pattern) -> Self {
    if let Some(b) = self.parts_mut().1.banner_mut() {
      b.patterns.push(pattern);
    }
    self
  }
  /// Replaces the pattern layer at the given index. Indices past the end are
  /// ignored.
  fn pattern_at(mut self, idx: usize, pattern: Pattern) -> Self {
    if let Some(slot) = self.parts_mut().1.banner_mut().and_then(|b| b.patterns.get_mut(idx)) {
      *slot = pattern;
    }
    self
  }
  /// Replaces all pattern layers.
  fn patterns(mut self, patterns: Vec<Pattern>) -> Self {
    if let Some(b) = self.parts_mut().1.banner_mut() {
      b.patterns = patterns;
    }
    self
  }
  /// Changes the background color. Banners encode the background in the item
  /// type, so this switches the type and re-reads the metadata afterwards;
  /// pattern layers survive, since the metadata kind doesn't change. Shields
  /// keep the background in metadata only, and just update it there.
  fn background_color(mut self, color: DyeColor) -> Self {
    let (stack, meta) = self.parts_mut();
    if stack.item().is_banner() {
      // Pending edits have to ride along through the type switch.
      stack.set_meta(meta.clone());
      stack.set_type(color.banner_type());
      *meta = stack.meta().clone();
    } else if let Some(b) = meta.banner_mut() {
      b.base = color;
    }
    self
  }
}

/// Builds a banner in a background color, with pattern layers on top.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerBuilder {
  stack: Stack,
  meta:  Meta,
}

impl BannerBuilder {
  /// Starts building a new banner with the given background color.
  pub fn new(color: DyeColor) -> Self {
    let stack = Stack::new(color.banner_type());
    let meta = stack.meta().clone();
    BannerBuilder { stack, meta }
  }
  /// Starts building a new banner with the given background and pattern
  /// layers.
  pub fn with_patterns(color: DyeColor, patterns: Vec<Pattern>) -> Self {
    Self::new(color).patterns(patterns)
  }
  /// Edits an existing stack. Fails if its metadata doesn't hold banner
  /// patterns.
  pub fn edit(stack: Stack) -> Result<Self, BuilderError> {
    let meta = stack.meta().clone();
    if meta.banner().is_none() {
      return Err(BuilderError::NotBanner(stack.item()));
    }
    Ok(BannerBuilder { stack, meta })
  }
}
builder_parts!(BannerBuilder);
impl Patterned for BannerBuilder {}

/// Builds a shield. Shields paint a banner on their face, so this shares the
/// pattern operations, while chains keep returning a shield builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ShieldBuilder {
  stack: Stack,
  meta:  Meta,
}

impl ShieldBuilder {
  /// Starts building a new shield with the given background color.
  pub fn new(color: DyeColor) -> Self {
    let stack = Stack::new(Type::Shield);
    let mut meta = stack.meta().clone();
    if let Some(b) = meta.banner_mut() {
      b.base = color;
    }
    ShieldBuilder { stack, meta }
  }
  /// Starts building a new shield with the given background and pattern
  /// layers.
  pub fn with_patterns(color: DyeColor, patterns: Vec<Pattern>) -> Self {
    Self::new(color).patterns(patterns)
  }
  /// Edits an existing stack. Fails if its metadata doesn't hold banner
  /// patterns.
  pub fn edit(stack: Stack) -> Result<Self, BuilderError> {
    let meta = stack.meta().clone();
    if meta.banner().is_none() {
      return Err(BuilderError::NotBanner(stack.item()));
    }
    Ok(ShieldBuilder { stack, meta })
  }
}
builder_parts!(ShieldBuilder);
impl Patterned for ShieldBuilder {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::item::meta::PatternShape;
  use pretty_assertions::assert_eq;

  #[test]
  fn color_picks_the_item_type() {
    let mut b = BannerBuilder::new(DyeColor::Lime);
    let stack = b.build();
    assert_eq!(stack.item(), Type::LimeBanner);
    assert_eq!(stack.meta().banner().unwrap().base, DyeColor::Lime);
  }

  #[test]
  fn layers_stack_in_order() {
    let skull = Pattern::new(DyeColor::Black, PatternShape::Skull);
    let border = Pattern::new(DyeColor::Red, PatternShape::Border);
    let stripe = Pattern::new(DyeColor::White, PatternShape::StripeTop);
    let stack =
      BannerBuilder::with_patterns(DyeColor::White, vec![skull, border]).pattern(stripe).build();
    assert_eq!(stack.meta().banner().unwrap().patterns, vec![skull, border, stripe]);
  }

  #[test]
  fn pattern_at_replaces_one_layer() {
    let skull = Pattern::new(DyeColor::Black, PatternShape::Skull);
    let globe = Pattern::new(DyeColor::Blue, PatternShape::Globe);
    let mut b = BannerBuilder::with_patterns(DyeColor::White, vec![skull, skull])
      .pattern_at(1, globe)
      // Out of range, so this one is ignored.
      .pattern_at(5, globe);
    assert_eq!(b.build().meta().banner().unwrap().patterns, vec![skull, globe]);
  }

  #[test]
  fn background_switch_keeps_patterns() {
    let creeper = Pattern::new(DyeColor::Lime, PatternShape::Creeper);
    let mut b = BannerBuilder::new(DyeColor::White).pattern(creeper).background_color(DyeColor::Red);
    let stack = b.build();
    assert_eq!(stack.item(), Type::RedBanner);
    assert_eq!(stack.meta().banner().unwrap().base, DyeColor::Red);
    assert_eq!(stack.meta().banner().unwrap().patterns, vec![creeper]);
  }

  #[test]
  fn shield_chains_stay_shields() {
    let wave = Pattern::new(DyeColor::Cyan, PatternShape::Rhombus);
    let stack = ShieldBuilder::new(DyeColor::Gray)
      .pattern(wave)
      .background_color(DyeColor::Black)
      .build();
    assert_eq!(stack.item(), Type::Shield);
    assert_eq!(stack.meta().banner().unwrap().base, DyeColor::Black);
    assert_eq!(stack.meta().banner().unwrap().patterns, vec![wave]);
    // Shields take durability damage too.
    assert!(stack.meta().damage().is_some());
  }

  #[test]
  fn edit_rejects_other_items() {
    assert_eq!(
      BannerBuilder::edit(Stack::new(Type::Stone)).unwrap_err(),
      BuilderError::NotBanner(Type::Stone),
    );
    assert!(ShieldBuilder::edit(Stack::new(Type::WhiteBanner)).is_ok());
    assert!(BannerBuilder::edit(Stack::new(Type::Shield)).is_ok());
  }
}
