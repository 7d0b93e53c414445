use num::{FromPrimitive, ToPrimitive};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, str::FromStr};

/// Any data specific to an enchantment: its stable name, protocol id, and the
/// highest level an enchanting table will produce.
#[derive(Debug)]
pub struct Data {
  ty:        Type,
  name:      &'static str,
  id:        u32,
  max_level: u8,
}

impl Data {
  /// Returns the type of this enchantment. This is copyable, and is a unique
  /// ID that can be easily passed around.
  pub fn ty(&self) -> Type { self.ty }
  /// Returns the enchantment's ID. This is the latest protocol ID.
  pub fn id(&self) -> u32 { self.id }
  /// Returns the name of this enchantment. This is something like `sharpness`.
  pub fn name(&self) -> &'static str { self.name }
  /// Returns the highest level this enchantment goes to in survival.
  /// Level-restricted adds beyond this get rejected.
  pub fn max_level(&self) -> u8 { self.max_level }
}

#[derive(Debug)]
pub struct InvalidEnchantment(String);

impl fmt::Display for InvalidEnchantment {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "invalid enchantment name: {}", self.0)
  }
}

impl Error for InvalidEnchantment {}

/// An enchantment type.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  FromPrimitive,
  ToPrimitive,
  Serialize,
  Deserialize,
)]
pub enum Type {
  Protection,
  FireProtection,
  FeatherFalling,
  BlastProtection,
  ProjectileProtection,
  Respiration,
  AquaAffinity,
  Thorns,
  DepthStrider,
  FrostWalker,
  BindingCurse,
  Sharpness,
  Smite,
  BaneOfArthropods,
  Knockback,
  FireAspect,
  Looting,
  SweepingEdge,
  Efficiency,
  SilkTouch,
  Unbreaking,
  Fortune,
  Power,
  Punch,
  Flame,
  Infinity,
  LuckOfTheSea,
  Lure,
  Loyalty,
  Impaling,
  Riptide,
  Channeling,
  Multishot,
  QuickCharge,
  Piercing,
  Mending,
  VanishingCurse,
}

impl Type {
  /// Returns the type as an u32, so that ints can be passed around instead of
  /// enums.
  pub fn id(self) -> u32 { ToPrimitive::to_u32(&self).unwrap() }
  /// Converts the given number to an enchantment type. If the number is
  /// invalid, this returns None.
  pub fn from_u32(id: u32) -> Option<Self> { FromPrimitive::from_u32(id) }
  /// Returns the data for this enchantment.
  pub fn data(self) -> Data {
    Data { ty: self, name: self.name(), id: self.id(), max_level: self.max_level() }
  }

  /// Returns the highest level an enchanting table will produce for this
  /// enchantment.
  pub fn max_level(self) -> u8 {
    match self {
      Self::Protection => 4,
      Self::FireProtection => 4,
      Self::FeatherFalling => 4,
      Self::BlastProtection => 4,
      Self::ProjectileProtection => 4,
      Self::Respiration => 3,
      Self::AquaAffinity => 1,
      Self::Thorns => 3,
      Self::DepthStrider => 3,
      Self::FrostWalker => 2,
      Self::BindingCurse => 1,
      Self::Sharpness => 5,
      Self::Smite => 5,
      Self::BaneOfArthropods => 5,
      Self::Knockback => 2,
      Self::FireAspect => 2,
      Self::Looting => 3,
      Self::SweepingEdge => 3,
      Self::Efficiency => 5,
      Self::SilkTouch => 1,
      Self::Unbreaking => 3,
      Self::Fortune => 3,
      Self::Power => 5,
      Self::Punch => 2,
      Self::Flame => 1,
      Self::Infinity => 1,
      Self::LuckOfTheSea => 3,
      Self::Lure => 3,
      Self::Loyalty => 3,
      Self::Impaling => 5,
      Self::Riptide => 3,
      Self::Channeling => 1,
      Self::Multishot => 1,
      Self::QuickCharge => 3,
      Self::Piercing => 4,
      Self::Mending => 1,
      Self::VanishingCurse => 1,
    }
  }

  /// Returns the stable name for this enchantment, like `sharpness`.
  pub fn name(self) -> &'static str {
    match self {
      Self::Protection => "protection",
      Self::FireProtection => "fire_protection",
      Self::FeatherFalling => "feather_falling",
      Self::BlastProtection => "blast_protection",
      Self::ProjectileProtection => "projectile_protection",
      Self::Respiration => "respiration",
      Self::AquaAffinity => "aqua_affinity",
      Self::Thorns => "thorns",
      Self::DepthStrider => "depth_strider",
      Self::FrostWalker => "frost_walker",
      Self::BindingCurse => "binding_curse",
      Self::Sharpness => "sharpness",
      Self::Smite => "smite",
      Self::BaneOfArthropods => "bane_of_arthropods",
      Self::Knockback => "knockback",
      Self::FireAspect => "fire_aspect",
      Self::Looting => "looting",
      Self::SweepingEdge => "sweeping_edge",
      Self::Efficiency => "efficiency",
      Self::SilkTouch => "silk_touch",
      Self::Unbreaking => "unbreaking",
      Self::Fortune => "fortune",
      Self::Power => "power",
      Self::Punch => "punch",
      Self::Flame => "flame",
      Self::Infinity => "infinity",
      Self::LuckOfTheSea => "luck_of_the_sea",
      Self::Lure => "lure",
      Self::Loyalty => "loyalty",
      Self::Impaling => "impaling",
      Self::Riptide => "riptide",
      Self::Channeling => "channeling",
      Self::Multishot => "multishot",
      Self::QuickCharge => "quick_charge",
      Self::Piercing => "piercing",
      Self::Mending => "mending",
      Self::VanishingCurse => "vanishing_curse",
    }
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.name()) }
}

impl FromStr for Type {
  type Err = InvalidEnchantment;

  fn from_str(s: &str) -> Result<Self, InvalidEnchantment> {
    let mut found = None;
    for id in 0.. {
      match Type::from_u32(id) {
        Some(ty) => {
          if ty.name() == s {
            found = Some(ty);
            break;
          }
        }
        None => break,
      }
    }
    found.ok_or_else(|| InvalidEnchantment(s.into()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn id_round_trip() {
    assert_eq!(Type::from_u32(Type::Mending.id()), Some(Type::Mending));
    assert_eq!(Type::from_u32(u32::MAX), None);
  }

  #[test]
  fn names_and_levels() {
    assert_eq!("sharpness".parse::<Type>().unwrap(), Type::Sharpness);
    assert_eq!(Type::Sharpness.data().max_level(), 5);
    assert_eq!(Type::AquaAffinity.max_level(), 1);
    assert!("dullness".parse::<Type>().is_err());
  }
}
