use super::{builder_parts, ItemBuilder};
use crate::{
  effect::PotionEffect,
  item::{meta::Meta, Stack, Type},
};

/// Builds a potion. The same builder covers all four forms; switching the
/// form switches the item type in place. Potion metadata is not portable
/// across a type switch on its own, so every switch commits the pending edits
/// and re-reads the metadata. The forms share a metadata kind, which means
/// custom effects survive.
#[derive(Debug, Clone, PartialEq)]
pub struct PotionBuilder {
  stack: Stack,
  meta:  Meta,
}

impl PotionBuilder {
  /// Starts building a new, drinkable potion.
  pub fn new() -> Self {
    let stack = Stack::new(Type::Potion);
    let meta = stack.meta().clone();
    PotionBuilder { stack, meta }
  }

  /// Makes this a drinkable potion.
  pub fn drinkable(self) -> Self { self.form(Type::Potion) }
  /// Makes this a splash potion, thrown at things.
  pub fn splash(self) -> Self { self.form(Type::SplashPotion) }
  /// Makes this a lingering potion, which leaves a cloud behind.
  pub fn lingering(self) -> Self { self.form(Type::LingeringPotion) }
  /// Makes this a tipped arrow carrying the potion's effects.
  pub fn tipped_arrow(self) -> Self { self.form(Type::TippedArrow) }

  fn form(mut self, ty: Type) -> Self {
    // Pending edits have to ride along through the type switch.
    self.stack.set_meta(self.meta.clone());
    self.stack.set_type(ty);
    self.meta = self.stack.meta().clone();
    self
  }

  /// Adds a custom effect. An effect of the same type that is already present
  /// stays; use [`replace_effect`](Self::replace_effect) to overwrite it.
  pub fn effect(mut self, effect: PotionEffect) -> Self {
    if let Some(p) = self.meta.potion_mut() {
      p.add_custom_effect(effect, false);
    }
    self
  }
  /// Adds a custom effect, overwriting any existing effect of the same type.
  pub fn replace_effect(mut self, effect: PotionEffect) -> Self {
    if let Some(p) = self.meta.potion_mut() {
      p.add_custom_effect(effect, true);
    }
    self
  }
}

impl Default for PotionBuilder {
  fn default() -> Self { PotionBuilder::new() }
}
builder_parts!(PotionBuilder);
