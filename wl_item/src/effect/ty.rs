use num::{FromPrimitive, ToPrimitive};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, str::FromStr};

/// Any data specific to a status effect: its stable name and protocol id.
#[derive(Debug)]
pub struct Data {
  ty:   Type,
  name: &'static str,
  id:   u32,
}

impl Data {
  /// Returns the type of this effect. This is copyable, and is a unique ID
  /// that can be easily passed around.
  pub fn ty(&self) -> Type { self.ty }
  /// Returns the effect's ID. This is the latest protocol ID.
  pub fn id(&self) -> u32 { self.id }
  /// Returns the name of this effect. This is something like `night_vision`.
  pub fn name(&self) -> &'static str { self.name }
}

#[derive(Debug)]
pub struct InvalidEffect(String);

impl fmt::Display for InvalidEffect {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "invalid effect name: {}", self.0)
  }
}

impl Error for InvalidEffect {}

/// A status effect type.
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
  Speed,
  Slowness,
  Haste,
  MiningFatigue,
  Strength,
  InstantHealth,
  InstantDamage,
  JumpBoost,
  Nausea,
  Regeneration,
  Resistance,
  FireResistance,
  WaterBreathing,
  Invisibility,
  Blindness,
  NightVision,
  Hunger,
  Weakness,
  Poison,
  Wither,
  HealthBoost,
  Absorption,
  Saturation,
  Glowing,
  Levitation,
  Luck,
  Unluck,
  SlowFalling,
}

impl Type {
  /// Returns the type as an u32, so that ints can be passed around instead of
  /// enums.
  pub fn id(self) -> u32 { ToPrimitive::to_u32(&self).unwrap() }
  /// Converts the given number to an effect type. If the number is invalid,
  /// this returns None.
  pub fn from_u32(id: u32) -> Option<Self> { FromPrimitive::from_u32(id) }
  /// Returns the data for this effect.
  pub fn data(self) -> Data { Data { ty: self, name: self.name(), id: self.id() } }

  /// Returns true for effects that apply once, instead of ticking for a
  /// duration.
  pub fn is_instant(self) -> bool {
    matches!(self, Self::InstantHealth | Self::InstantDamage | Self::Saturation)
  }

  /// Returns the stable name for this effect, like `night_vision`.
  pub fn name(self) -> &'static str {
    match self {
      Self::Speed => "speed",
      Self::Slowness => "slowness",
      Self::Haste => "haste",
      Self::MiningFatigue => "mining_fatigue",
      Self::Strength => "strength",
      Self::InstantHealth => "instant_health",
      Self::InstantDamage => "instant_damage",
      Self::JumpBoost => "jump_boost",
      Self::Nausea => "nausea",
      Self::Regeneration => "regeneration",
      Self::Resistance => "resistance",
      Self::FireResistance => "fire_resistance",
      Self::WaterBreathing => "water_breathing",
      Self::Invisibility => "invisibility",
      Self::Blindness => "blindness",
      Self::NightVision => "night_vision",
      Self::Hunger => "hunger",
      Self::Weakness => "weakness",
      Self::Poison => "poison",
      Self::Wither => "wither",
      Self::HealthBoost => "health_boost",
      Self::Absorption => "absorption",
      Self::Saturation => "saturation",
      Self::Glowing => "glowing",
      Self::Levitation => "levitation",
      Self::Luck => "luck",
      Self::Unluck => "unluck",
      Self::SlowFalling => "slow_falling",
    }
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.name()) }
}

impl FromStr for Type {
  type Err = InvalidEffect;

  fn from_str(s: &str) -> Result<Self, InvalidEffect> {
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
    found.ok_or_else(|| InvalidEffect(s.into()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn id_round_trip() {
    assert_eq!(Type::from_u32(Type::Levitation.id()), Some(Type::Levitation));
    assert_eq!(Type::from_u32(u32::MAX), None);
  }

  #[test]
  fn names() {
    assert_eq!("night_vision".parse::<Type>().unwrap(), Type::NightVision);
    assert_eq!(Type::Speed.data().name(), "speed");
    assert!(Type::InstantDamage.is_instant());
    assert!(!Type::Poison.is_instant());
    assert!("caffeine".parse::<Type>().is_err());
  }
}
