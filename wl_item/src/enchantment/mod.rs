mod ty;

pub use ty::{Data, InvalidEnchantment, Type};

use std::num::NonZeroU8;

/// An enchantment applied to an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enchantment {
  /// The type of enchantment.
  pub ty:    Type,
  /// The level of enchantment.
  pub level: NonZeroU8,
}
