use super::{
  meta::{Kind, Meta},
  Type,
};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

/// A stack of identical items, along with their metadata. This is the handle
/// the builders in [`builder`](super::builder) produce and edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
  item:   Type,
  amount: NonZeroU8,
  meta:   Meta,
}

// This is required for `Stack::new` to avoid a checked constructor.
//
// SAFETY: The value must not be zero, so using `1` is safe.
const ONE: NonZeroU8 = unsafe { NonZeroU8::new_unchecked(1) };

impl Default for Stack {
  fn default() -> Self { Stack::empty() }
}

impl Stack {
  /// Creates an empty item stack. This has the type set to air, and the count
  /// set to 0.
  pub fn empty() -> Self { Stack::new(Type::Air) }
  /// Creates an item stack containing a single item with the given type.
  pub fn new(item: Type) -> Self { Stack { item, amount: ONE, meta: Meta::for_type(item) } }

  /// Sets the amount in self, and returns the modified self. If the stack is
  /// air, this will do nothing.
  pub fn with_amount(mut self, amount: u8) -> Self {
    self.set_amount(amount);
    self
  }
  /// Sets the amount in the item stack. If the stack is air, this will do
  /// nothing.
  pub fn set_amount(&mut self, amount: u8) {
    if amount == 0 {
      self.item = Type::Air;
      self.meta = Meta::for_type(Type::Air);
      // Keep amount at 1 if we are air.
      self.amount = ONE;
    } else if self.item != Type::Air {
      self.amount = NonZeroU8::new(amount).unwrap();
    }
  }

  /// Switches the type of this stack, and returns the modified self.
  pub fn with_type(mut self, item: Type) -> Self {
    self.set_type(item);
    self
  }
  /// Switches the type of this stack. Metadata is not portable across
  /// metadata kinds, so the stack keeps its meta only when the new type
  /// shares a kind with the old one; otherwise the meta resets to the new
  /// type's default. A banner switching color keeps its patterns, and a
  /// potion switching form keeps its effects.
  pub fn set_type(&mut self, item: Type) {
    let keep = Kind::for_type(item) == self.meta.kind();
    self.item = item;
    if keep {
      self.meta.sync_damage(item);
      if let Some(color) = item.banner_color() {
        // Banner types encode their base color, and the meta mirrors it.
        if let Some(banner) = self.meta.banner_mut() {
          banner.base = color;
        }
      }
    } else {
      self.meta = Meta::for_type(item);
    }
  }

  /// Returns the number of items in this item stack.
  pub fn amount(&self) -> u8 {
    if self.item == Type::Air {
      0
    } else {
      self.amount.get()
    }
  }
  /// Returns the item that is in this item stack.
  pub fn item(&self) -> Type { self.item }

  /// Returns true if this item stack is considered "empty". This is true
  /// whenever the type is Air, or the count is zero.
  pub fn is_empty(&self) -> bool { self.item == Type::Air }

  /// Returns the metadata of this stack.
  pub fn meta(&self) -> &Meta { &self.meta }
  /// Replaces the metadata of this stack. This is the commit half of the
  /// builders' edit cycle.
  pub fn set_meta(&mut self, meta: Meta) { self.meta = meta; }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::item::{color::DyeColor, meta::{Pattern, PatternShape}};
  use pretty_assertions::assert_eq;

  #[test]
  fn test_air() {
    assert_eq!(Stack::empty(), Stack::new(Type::Air));
    assert_eq!(Stack::empty(), Stack::new(Type::Air).with_amount(10));
    assert_eq!(Stack::new(Type::Air), Stack::new(Type::Air).with_amount(10));
    assert_eq!(Stack::new(Type::Air).with_amount(10).amount(), 0);
    assert_eq!(Stack::new(Type::Stone).with_amount(0), Stack::empty());
    assert_eq!(Stack::new(Type::Stone).with_amount(0).item(), Type::Air);
    assert_eq!(Stack::new(Type::Stone).with_amount(0).amount(), 0);
  }

  #[test]
  fn test_is_empty() {
    assert!(Stack::empty().is_empty());
    assert!(Stack::new(Type::Air).is_empty());
    assert!(!Stack::new(Type::Stone).is_empty());
    assert!(Stack::new(Type::Stone).with_amount(0).is_empty());
  }

  #[test]
  fn type_switch_keeps_meta_within_kind() {
    let mut stack = Stack::new(Type::WhiteBanner);
    let layer = Pattern::new(DyeColor::Red, PatternShape::Creeper);
    let mut meta = stack.meta().clone();
    meta.banner_mut().unwrap().patterns.push(layer);
    stack.set_meta(meta);

    stack.set_type(Type::BlueBanner);
    assert_eq!(stack.meta().banner().unwrap().patterns, vec![layer]);
    assert_eq!(stack.meta().banner().unwrap().base, DyeColor::Blue);
  }

  #[test]
  fn serde_round_trip() {
    let mut stack = Stack::new(Type::WhiteBanner).with_amount(3);
    let mut meta = stack.meta().clone();
    meta.banner_mut().unwrap().patterns.push(Pattern::new(DyeColor::Red, PatternShape::Globe));
    stack.set_meta(meta);

    let json = serde_json::to_string(&stack).unwrap();
    assert_eq!(serde_json::from_str::<Stack>(&json).unwrap(), stack);
  }

  #[test]
  fn type_switch_resets_meta_across_kinds() {
    let mut stack = Stack::new(Type::WrittenBook);
    let mut meta = stack.meta().clone();
    meta.book_mut().unwrap().pages.push("page one".into());
    stack.set_meta(meta);

    stack.set_type(Type::Stone);
    assert_eq!(stack.meta(), &Meta::for_type(Type::Stone));
  }
}
