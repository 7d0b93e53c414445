//! Fluent builders for item stacks. Every builder owns a [`Stack`] and a
//! working copy of its [`Meta`]; the chained calls edit the working copy, and
//! [`build`](ItemBuilder::build) commits it back onto the stack.
//!
//! # Example
//!
//! ```rust
//! use wl_item::item::{builder::{Builder, ItemBuilder}, Type};
//! use wl_item::enchantment;
//!
//! let sword = Builder::new(Type::DiamondSword)
//!   .name("Cleaver")
//!   .enchant(enchantment::Type::Sharpness, 5)
//!   .unbreakable()
//!   .build();
//! assert_eq!(sword.item(), Type::DiamondSword);
//! ```
//!
//! The base [`Builder`] accepts any item. The variant builders ([`BannerBuilder`],
//! [`PotionBuilder`], and friends) only accept items of their family, and add
//! the operations that family supports.

mod armor;
mod banner;
mod book;
mod bucket;
mod bundle;
mod firework;
mod head;
mod potion;
mod stand;

pub use armor::{ArmorBuilder, Damageable, DamageableBuilder, LeatherArmorBuilder, Trimmable};
pub use banner::{BannerBuilder, Patterned, ShieldBuilder};
pub use book::{EnchantedBookBuilder, WrittenBookBuilder};
pub use bucket::AxolotlBucketBuilder;
pub use bundle::BundleBuilder;
pub use firework::FireworkRocketBuilder;
pub use head::PlayerHeadBuilder;
pub use potion::PotionBuilder;
pub use stand::ArmorStandBuilder;

use super::{
  meta::{ItemFlag, Meta},
  Stack, Type,
};
use crate::enchantment;
use thiserror::Error;
use wl_common::util::Chat;

/// A variant builder was handed an item outside its family. This is raised at
/// construction, so a mismatched builder never exists.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuilderError {
  #[error("`{0}` does not take durability damage")]
  NotDamageable(Type),
  #[error("`{0}` cannot hold an armor trim")]
  NotArmor(Type),
  #[error("`{0}` is not a piece of leather armor")]
  NotLeatherArmor(Type),
  #[error("`{0}` is not an armor stand")]
  NotArmorStand(Type),
  #[error("`{0}` does not hold banner patterns")]
  NotBanner(Type),
  #[error("`{0}` is not a player head")]
  NotPlayerHead(Type),
  #[error("`{0}` is not a firework rocket")]
  NotFirework(Type),
}

// Implements the two accessors every builder needs. The fluent operations all
// live in the `ItemBuilder` trait itself.
macro_rules! builder_parts {
  ($ty:ty) => {
    impl ItemBuilder for $ty {
      fn parts(&self) -> (&Stack, &Meta) { (&self.stack, &self.meta) }
      fn parts_mut(&mut self) -> (&mut Stack, &mut Meta) { (&mut self.stack, &mut self.meta) }
    }
  };
}
pub(crate) use builder_parts;

/// The operations every builder supports. Each one consumes and returns the
/// builder, so a chain never changes type; the variant builders keep their
/// family-specific operations chainable this way.
pub trait ItemBuilder: Sized {
  /// The stack and working metadata, for reading.
  fn parts(&self) -> (&Stack, &Meta);
  /// The stack and working metadata. Edits to the meta stay pending until
  /// [`build`](Self::build).
  fn parts_mut(&mut self) -> (&mut Stack, &mut Meta);

  /// Sets the number of items in the stack.
  fn amount(mut self, amount: u8) -> Self {
    self.parts_mut().0.set_amount(amount);
    self
  }

  /// Adds the given enchantment, allowing levels beyond what an enchanting
  /// table produces.
  fn enchant(mut self, ty: enchantment::Type, level: u8) -> Self {
    self.parts_mut().1.add_enchantment(ty, level, true);
    self
  }
  /// Adds the given enchantment, rejecting levels outside
  /// `1..=`[`max_level`](enchantment::Type::max_level).
  fn enchant_checked(mut self, ty: enchantment::Type, level: u8) -> Self {
    self.parts_mut().1.add_enchantment(ty, level, false);
    self
  }
  /// Adds every enchantment in the given list, ignoring level restrictions.
  fn enchant_all(mut self, enchantments: impl IntoIterator<Item = (enchantment::Type, u8)>) -> Self {
    for (ty, level) in enchantments {
      self.parts_mut().1.add_enchantment(ty, level, true);
    }
    self
  }
  fn remove_enchant(mut self, ty: enchantment::Type) -> Self {
    self.parts_mut().1.remove_enchantment(ty);
    self
  }
  fn clear_enchants(mut self) -> Self {
    self.parts_mut().1.clear_enchantments();
    self
  }

  /// Sets the custom display name.
  fn name(mut self, name: impl Into<Chat>) -> Self {
    self.parts_mut().1.set_name(Some(name.into()));
    self
  }

  /// Replaces the lore with the given lines.
  fn lore<I>(mut self, lines: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Chat>,
  {
    self.parts_mut().1.set_lore(lines.into_iter().map(Into::into).collect());
    self
  }
  /// Replaces the lore, applying `formatter` to each line. Useful for things
  /// like a shared color scheme over raw lines.
  fn lore_formatted<I, F>(mut self, mut formatter: F, lines: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Chat>,
    F: FnMut(Chat) -> Chat,
  {
    self.parts_mut().1.set_lore(lines.into_iter().map(|l| formatter(l.into())).collect());
    self
  }
  /// Adds lines to the end of the lore.
  fn append_lore<I>(mut self, lines: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Chat>,
  {
    self.parts_mut().1.append_lore(lines.into_iter().map(Into::into));
    self
  }

  /// Makes the item never take durability damage.
  fn unbreakable(mut self) -> Self {
    self.parts_mut().1.set_unbreakable(true);
    self
  }

  /// Adds a tooltip flag.
  fn flag(mut self, flag: ItemFlag) -> Self {
    self.parts_mut().1.add_flag(flag);
    self
  }
  fn hide_enchants(self) -> Self { self.flag(ItemFlag::HideEnchants) }
  fn hide_attributes(self) -> Self { self.flag(ItemFlag::HideAttributes) }

  /// Sets the damage the item has taken. Items that don't take damage ignore
  /// this; it is not an error.
  fn damage(mut self, damage: u16) -> Self {
    if let Some(d) = self.parts_mut().1.damage_mut() {
      d.damage = damage;
    }
    self
  }

  /// Often the final call on a builder. Commits the working metadata onto the
  /// stack and returns the stack. The builder stays usable afterwards.
  fn build(&mut self) -> Stack {
    let (stack, meta) = self.parts_mut();
    stack.set_meta(meta.clone());
    stack.clone()
  }

  /// Returns a copy of the working metadata without committing anything.
  /// Should only be used to read information out of the builder.
  fn meta(&self) -> Meta { self.parts().1.clone() }
  /// Returns a copy of the stack as last committed. Should only be used to
  /// read information out of the builder.
  fn stack(&self) -> Stack { self.parts().0.clone() }
}

/// Builds any item. This exposes only the operations every item supports; the
/// variant builders add the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Builder {
  stack: Stack,
  meta:  Meta,
}

impl Builder {
  /// Starts building a new item of the given type.
  pub fn new(ty: Type) -> Self { Self::edit(Stack::new(ty)) }
  /// Starts building a new stack of `amount` items of the given type.
  pub fn with_amount(ty: Type, amount: u8) -> Self {
    Self::edit(Stack::new(ty).with_amount(amount))
  }
  /// Edits an existing stack. The stack's metadata becomes the working copy,
  /// so unbuilt edits from another builder are not visible here.
  pub fn edit(stack: Stack) -> Self {
    let meta = stack.meta().clone();
    Builder { stack, meta }
  }
  /// Edits a copy of the given stack, leaving the original alone.
  pub fn from_template(stack: &Stack) -> Self { Self::edit(stack.clone()) }
}
builder_parts!(Builder);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::enchantment::Type as Ench;
  use pretty_assertions::assert_eq;

  #[test]
  fn chained_edits_end_up_on_the_stack() {
    let stack = Builder::new(Type::DiamondSword)
      .name("Cleaver")
      .lore(["A sword.", "Sharp."])
      .enchant(Ench::Sharpness, 5)
      .damage(12)
      .unbreakable()
      .hide_enchants()
      .build();

    let meta = stack.meta();
    assert_eq!(meta.name(), Some(&Chat::new("Cleaver")));
    assert_eq!(meta.lore(), &[Chat::new("A sword."), Chat::new("Sharp.")]);
    assert_eq!(meta.enchantment_level(Ench::Sharpness), Some(5));
    assert_eq!(meta.damage().unwrap().damage, 12);
    assert!(meta.unbreakable());
    assert!(meta.has_flag(ItemFlag::HideEnchants));
  }

  #[test]
  fn damage_is_ignored_on_undamageable_items() {
    let stack = Builder::new(Type::Stone).damage(5).build();
    assert_eq!(stack.meta().damage(), None);
  }

  #[test]
  fn enchant_checked_respects_max_level() {
    let mut b = Builder::new(Type::DiamondSword).enchant_checked(Ench::Sharpness, 10);
    assert_eq!(b.build().meta().enchantment_level(Ench::Sharpness), None);
    let mut b = Builder::new(Type::DiamondSword).enchant_checked(Ench::Sharpness, 4);
    assert_eq!(b.build().meta().enchantment_level(Ench::Sharpness), Some(4));
  }

  #[test]
  fn remove_and_clear_enchants() {
    let mut b = Builder::new(Type::DiamondSword)
      .enchant_all([(Ench::Sharpness, 5), (Ench::Unbreaking, 3), (Ench::FireAspect, 2)])
      .remove_enchant(Ench::FireAspect);
    assert_eq!(b.build().meta().enchantments().count(), 2);
    let mut b = b.clear_enchants();
    assert_eq!(b.build().meta().enchantments().count(), 0);
  }

  #[test]
  fn lore_formatted_applies_to_each_line() {
    let mut b = Builder::new(Type::Stick).lore_formatted(
      |mut line| {
        line.add(" (rare)");
        line
      },
      ["A stick."],
    );
    assert_eq!(b.build().meta().lore()[0].to_plain(), "A stick. (rare)");
  }

  #[test]
  fn append_lore_extends_existing_lines() {
    let mut b = Builder::new(Type::Stick).lore(["one"]).append_lore(["two"]);
    assert_eq!(b.meta().lore().len(), 2);
    // Appending to an item with no lore starts the list.
    let mut b = Builder::new(Type::Stick).append_lore(["only"]);
    assert_eq!(b.build().meta().lore(), &[Chat::new("only")]);
  }

  #[test]
  fn build_is_idempotent() {
    let mut b = Builder::new(Type::Stone).name("Rock");
    assert_eq!(b.build(), b.build());
  }

  #[test]
  fn edit_round_trips_built_items() {
    let built = Builder::new(Type::DiamondSword).name("Cleaver").enchant(Ench::Looting, 3).build();
    let again = Builder::edit(built.clone());
    assert_eq!(again.meta(), *built.meta());
    assert_eq!(again.stack(), built);
  }

  #[test]
  fn accessors_do_not_commit() {
    let b = Builder::new(Type::Stone).name("Rock");
    // The working meta has the name, the stack does not have it yet.
    assert_eq!(b.meta().name(), Some(&Chat::new("Rock")));
    assert_eq!(b.stack().meta().name(), None);
  }

  #[test]
  fn amount_follows_stack_rules() {
    let mut b = Builder::with_amount(Type::Stone, 32);
    assert_eq!(b.build().amount(), 32);
    let mut b = b.amount(0);
    assert!(b.build().is_empty());
  }
}
