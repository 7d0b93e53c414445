use super::color::DyeColor;
use num::{FromPrimitive, ToPrimitive};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, str::FromStr};

/// Any data specific to an item type. This is the type itself, along with its
/// stable name and protocol id.
#[derive(Debug)]
pub struct Data {
  ty:   Type,
  name: &'static str,
  id:   u32,
}

impl Data {
  /// Returns the type of this item. This is copyable, and is a unique ID that
  /// can be easily passed around.
  pub fn ty(&self) -> Type { self.ty }
  /// Returns the item's ID. This is the latest protocol ID.
  pub fn id(&self) -> u32 { self.id }
  /// Returns the name of this item. This is something like `stone`.
  pub fn name(&self) -> &'static str { self.name }
}

#[derive(Debug)]
pub struct InvalidItem(String);

impl fmt::Display for InvalidItem {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "invalid item name: {}", self.0)
  }
}

impl Error for InvalidItem {}

/// An item type. A full server generates this from registry data; this carries
/// the families the builders work with, plus a handful of plain items.
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
  Air,
  Stone,
  Stick,
  Book,
  // Tools and weapons, which take durability damage.
  IronSword,
  DiamondSword,
  DiamondPickaxe,
  FishingRod,
  Elytra,
  Shears,
  // Armor, which can hold trims.
  LeatherHelmet,
  LeatherChestplate,
  LeatherLeggings,
  LeatherBoots,
  IronHelmet,
  IronChestplate,
  IronLeggings,
  IronBoots,
  DiamondHelmet,
  DiamondChestplate,
  DiamondLeggings,
  DiamondBoots,
  TurtleHelmet,
  // One banner per dye color.
  WhiteBanner,
  OrangeBanner,
  MagentaBanner,
  LightBlueBanner,
  YellowBanner,
  LimeBanner,
  PinkBanner,
  GrayBanner,
  LightGrayBanner,
  CyanBanner,
  PurpleBanner,
  BlueBanner,
  BrownBanner,
  GreenBanner,
  RedBanner,
  BlackBanner,
  Shield,
  // The rest of the families the builders cover.
  Bundle,
  AxolotlBucket,
  ArmorStand,
  PlayerHead,
  FireworkRocket,
  WrittenBook,
  EnchantedBook,
  Potion,
  SplashPotion,
  LingeringPotion,
  TippedArrow,
}

impl Type {
  /// Returns the type as an u32. This is used in the versioning arrays, and in
  /// plugin code, so that ints can be passed around instead of enums.
  pub fn id(self) -> u32 { ToPrimitive::to_u32(&self).unwrap() }
  /// Converts the given number to an item type. If the number is invalid, this
  /// returns Type::Air.
  pub fn from_u32(id: u32) -> Self { FromPrimitive::from_u32(id).unwrap_or(Type::Air) }
  /// Returns the data for this item type.
  pub fn data(self) -> Data { Data { ty: self, name: self.name(), id: self.id() } }

  /// Returns the stable name for this item, like `white_banner`.
  pub fn name(self) -> &'static str {
    match self {
      Self::Air => "air",
      Self::Stone => "stone",
      Self::Stick => "stick",
      Self::Book => "book",
      Self::IronSword => "iron_sword",
      Self::DiamondSword => "diamond_sword",
      Self::DiamondPickaxe => "diamond_pickaxe",
      Self::FishingRod => "fishing_rod",
      Self::Elytra => "elytra",
      Self::Shears => "shears",
      Self::LeatherHelmet => "leather_helmet",
      Self::LeatherChestplate => "leather_chestplate",
      Self::LeatherLeggings => "leather_leggings",
      Self::LeatherBoots => "leather_boots",
      Self::IronHelmet => "iron_helmet",
      Self::IronChestplate => "iron_chestplate",
      Self::IronLeggings => "iron_leggings",
      Self::IronBoots => "iron_boots",
      Self::DiamondHelmet => "diamond_helmet",
      Self::DiamondChestplate => "diamond_chestplate",
      Self::DiamondLeggings => "diamond_leggings",
      Self::DiamondBoots => "diamond_boots",
      Self::TurtleHelmet => "turtle_helmet",
      Self::WhiteBanner => "white_banner",
      Self::OrangeBanner => "orange_banner",
      Self::MagentaBanner => "magenta_banner",
      Self::LightBlueBanner => "light_blue_banner",
      Self::YellowBanner => "yellow_banner",
      Self::LimeBanner => "lime_banner",
      Self::PinkBanner => "pink_banner",
      Self::GrayBanner => "gray_banner",
      Self::LightGrayBanner => "light_gray_banner",
      Self::CyanBanner => "cyan_banner",
      Self::PurpleBanner => "purple_banner",
      Self::BlueBanner => "blue_banner",
      Self::BrownBanner => "brown_banner",
      Self::GreenBanner => "green_banner",
      Self::RedBanner => "red_banner",
      Self::BlackBanner => "black_banner",
      Self::Shield => "shield",
      Self::Bundle => "bundle",
      Self::AxolotlBucket => "axolotl_bucket",
      Self::ArmorStand => "armor_stand",
      Self::PlayerHead => "player_head",
      Self::FireworkRocket => "firework_rocket",
      Self::WrittenBook => "written_book",
      Self::EnchantedBook => "enchanted_book",
      Self::Potion => "potion",
      Self::SplashPotion => "splash_potion",
      Self::LingeringPotion => "lingering_potion",
      Self::TippedArrow => "tipped_arrow",
    }
  }

  /// Returns the durability of this item, or `None` if the item doesn't take
  /// damage.
  pub fn max_damage(self) -> Option<u16> {
    Some(match self {
      Self::IronSword => 250,
      Self::DiamondSword => 1561,
      Self::DiamondPickaxe => 1561,
      Self::FishingRod => 64,
      Self::Elytra => 432,
      Self::Shears => 238,
      Self::LeatherHelmet => 55,
      Self::LeatherChestplate => 80,
      Self::LeatherLeggings => 75,
      Self::LeatherBoots => 65,
      Self::IronHelmet => 165,
      Self::IronChestplate => 240,
      Self::IronLeggings => 225,
      Self::IronBoots => 195,
      Self::DiamondHelmet => 363,
      Self::DiamondChestplate => 528,
      Self::DiamondLeggings => 495,
      Self::DiamondBoots => 429,
      Self::TurtleHelmet => 275,
      Self::Shield => 336,
      _ => return None,
    })
  }
  pub fn is_damageable(self) -> bool { self.max_damage().is_some() }

  /// Returns true if this item is a piece of armor, so it can hold a trim.
  /// Elytra and shields take damage, but cannot be trimmed.
  pub fn is_armor(self) -> bool {
    matches!(
      self,
      Self::LeatherHelmet
        | Self::LeatherChestplate
        | Self::LeatherLeggings
        | Self::LeatherBoots
        | Self::IronHelmet
        | Self::IronChestplate
        | Self::IronLeggings
        | Self::IronBoots
        | Self::DiamondHelmet
        | Self::DiamondChestplate
        | Self::DiamondLeggings
        | Self::DiamondBoots
        | Self::TurtleHelmet
    )
  }

  pub fn is_leather_armor(self) -> bool {
    matches!(
      self,
      Self::LeatherHelmet | Self::LeatherChestplate | Self::LeatherLeggings | Self::LeatherBoots
    )
  }

  pub fn is_banner(self) -> bool { self.banner_color().is_some() }

  /// For banner items, returns the base color encoded in the type. All other
  /// items return `None`.
  pub fn banner_color(self) -> Option<DyeColor> {
    Some(match self {
      Self::WhiteBanner => DyeColor::White,
      Self::OrangeBanner => DyeColor::Orange,
      Self::MagentaBanner => DyeColor::Magenta,
      Self::LightBlueBanner => DyeColor::LightBlue,
      Self::YellowBanner => DyeColor::Yellow,
      Self::LimeBanner => DyeColor::Lime,
      Self::PinkBanner => DyeColor::Pink,
      Self::GrayBanner => DyeColor::Gray,
      Self::LightGrayBanner => DyeColor::LightGray,
      Self::CyanBanner => DyeColor::Cyan,
      Self::PurpleBanner => DyeColor::Purple,
      Self::BlueBanner => DyeColor::Blue,
      Self::BrownBanner => DyeColor::Brown,
      Self::GreenBanner => DyeColor::Green,
      Self::RedBanner => DyeColor::Red,
      Self::BlackBanner => DyeColor::Black,
      _ => return None,
    })
  }

  pub fn is_potion(self) -> bool {
    matches!(self, Self::Potion | Self::SplashPotion | Self::LingeringPotion | Self::TippedArrow)
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.name()) }
}

impl FromStr for Type {
  type Err = InvalidItem;

  fn from_str(s: &str) -> Result<Self, InvalidItem> {
    let mut found = None;
    for id in 0.. {
      match FromPrimitive::from_u32(id) {
        Some(ty) => {
          if Type::name(ty) == s {
            found = Some(ty);
            break;
          }
        }
        None => break,
      }
    }
    found.ok_or_else(|| InvalidItem(s.into()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn id_round_trip() {
    assert_eq!(Type::Air.id(), 0);
    assert_eq!(Type::from_u32(Type::Shield.id()), Type::Shield);
    assert_eq!(Type::from_u32(u32::MAX), Type::Air);
  }

  #[test]
  fn names() {
    assert_eq!("light_gray_banner".parse::<Type>().unwrap(), Type::LightGrayBanner);
    assert_eq!(Type::TippedArrow.data().name(), "tipped_arrow");
    assert!("not_an_item".parse::<Type>().is_err());
  }

  #[test]
  fn capabilities() {
    assert!(Type::DiamondSword.is_damageable());
    assert!(!Type::DiamondSword.is_armor());
    assert!(Type::TurtleHelmet.is_armor());
    assert!(Type::LeatherBoots.is_leather_armor());
    assert!(!Type::IronBoots.is_leather_armor());
    assert!(Type::Shield.is_damageable() && !Type::Shield.is_armor());
    assert_eq!(Type::RedBanner.banner_color(), Some(DyeColor::Red));
    assert_eq!(Type::Shield.banner_color(), None);
  }
}
