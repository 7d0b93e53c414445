use super::{color::DyeColor, Stack, Type};
use crate::{effect::PotionEffect, enchantment, player::OfflinePlayer};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, num::NonZeroU8};
use wl_common::util::{Chat, Color};

/// The shape of an item's metadata. Two items can exchange metadata when their
/// kinds match; switching an item to a type of another kind resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
  Plain,
  Bundle,
  Armor,
  AxolotlBucket,
  ArmorStand,
  Banner,
  Skull,
  Firework,
  Book,
  StoredEnchants,
  Potion,
}

impl Kind {
  /// Returns the metadata kind for the given item type.
  pub fn for_type(ty: Type) -> Kind {
    match ty {
      Type::Bundle => Kind::Bundle,
      Type::AxolotlBucket => Kind::AxolotlBucket,
      Type::ArmorStand => Kind::ArmorStand,
      Type::Shield => Kind::Banner,
      Type::PlayerHead => Kind::Skull,
      Type::FireworkRocket => Kind::Firework,
      Type::WrittenBook => Kind::Book,
      Type::EnchantedBook => Kind::StoredEnchants,
      _ if ty.is_banner() => Kind::Banner,
      _ if ty.is_armor() => Kind::Armor,
      _ if ty.is_potion() => Kind::Potion,
      _ => Kind::Plain,
    }
  }
}

/// Flags that hide parts of an item's tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemFlag {
  HideEnchants,
  HideAttributes,
  HideUnbreakable,
  HideDestroys,
  HidePlacedOn,
  HideAdditional,
  HideDye,
}

/// The durability block of an item. Only present on items that take damage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
  /// How much damage the item has taken. Zero is a fresh item.
  pub damage:     u16,
  /// Overrides the type's durability when set. `None` means the item breaks
  /// at the type's default.
  pub max_damage: Option<u16>,
}

/// An armor trim: a pattern smithed onto armor in a given material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorTrim {
  pub material: TrimMaterial,
  pub pattern:  TrimPattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrimMaterial {
  Amethyst,
  Copper,
  Diamond,
  Emerald,
  Gold,
  Iron,
  Lapis,
  Netherite,
  Quartz,
  Redstone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrimPattern {
  Coast,
  Dune,
  Eye,
  Host,
  Raiser,
  Rib,
  Sentry,
  Shaper,
  Silence,
  Snout,
  Spire,
  Tide,
  Vex,
  Ward,
  Wayfinder,
  Wild,
}

/// A single banner pattern layer: a shape dyed in one color. Layers stack, so
/// their order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
  pub color: DyeColor,
  pub shape: PatternShape,
}

impl Pattern {
  pub fn new(color: DyeColor, shape: PatternShape) -> Self { Pattern { color, shape } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternShape {
  Border,
  Bricks,
  Circle,
  Creeper,
  Cross,
  CurlyBorder,
  DiagonalLeft,
  DiagonalRight,
  Flower,
  Globe,
  Gradient,
  GradientUp,
  HalfHorizontal,
  HalfVertical,
  Mojang,
  Piglin,
  Rhombus,
  Skull,
  SmallStripes,
  SquareBottomLeft,
  SquareBottomRight,
  SquareTopLeft,
  SquareTopRight,
  StraightCross,
  StripeBottom,
  StripeCenter,
  StripeDownLeft,
  StripeDownRight,
  StripeLeft,
  StripeMiddle,
  StripeRight,
  StripeTop,
  TrianglesBottom,
  TrianglesTop,
}

/// A single firework star: the explosion shape, its colors, and whether it
/// leaves a trail or flickers after bursting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireworkEffect {
  pub shape:       FireworkShape,
  pub colors:      Vec<Color>,
  pub fade_colors: Vec<Color>,
  pub flicker:     bool,
  pub trail:       bool,
}

impl FireworkEffect {
  /// A plain burst in the given colors, with no fade, trail or flicker.
  pub fn burst(shape: FireworkShape, colors: Vec<Color>) -> Self {
    FireworkEffect { shape, colors, fade_colors: vec![], flicker: false, trail: false }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireworkShape {
  #[default]
  SmallBall,
  LargeBall,
  Star,
  Burst,
  Creeper,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxolotlVariant {
  #[default]
  Lucy,
  Wild,
  Gold,
  Cyan,
  Blue,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleMeta {
  pub items: Vec<Stack>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorMeta {
  pub trim:  Option<ArmorTrim>,
  /// Dye color. Only leather armor renders this.
  pub color: Option<Color>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorStandMeta {
  pub show_arms:     bool,
  pub invisible:     bool,
  pub no_base_plate: bool,
  pub small:         bool,
  pub marker:        bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerMeta {
  /// The background color. For banner items this mirrors the color encoded in
  /// the item type; shields keep it here only.
  pub base:     DyeColor,
  pub patterns: Vec<Pattern>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkullMeta {
  pub owner: Option<OfflinePlayer>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireworkMeta {
  pub effects: Vec<FireworkEffect>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookMeta {
  pub title:  Option<Chat>,
  pub author: Option<Chat>,
  pub pages:  Vec<Chat>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotionMeta {
  pub effects: Vec<PotionEffect>,
}

impl PotionMeta {
  /// Adds a custom effect. If an effect of the same type is already present,
  /// `overwrite` decides whether it gets replaced; the add is rejected
  /// otherwise. Returns whether the effect was stored.
  pub fn add_custom_effect(&mut self, effect: PotionEffect, overwrite: bool) -> bool {
    if let Some(existing) = self.effects.iter_mut().find(|e| e.ty == effect.ty) {
      if overwrite {
        *existing = effect;
        return true;
      }
      return false;
    }
    self.effects.push(effect);
    true
  }
}

/// The per-family payload of an item's metadata.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variant {
  #[default]
  Plain,
  Bundle(BundleMeta),
  Armor(ArmorMeta),
  AxolotlBucket(AxolotlVariant),
  ArmorStand(ArmorStandMeta),
  Banner(BannerMeta),
  Skull(SkullMeta),
  Firework(FireworkMeta),
  Book(BookMeta),
  StoredEnchants(HashMap<enchantment::Type, NonZeroU8>),
  Potion(PotionMeta),
}

/// An item's metadata. Every item has the display block (name, lore, tooltip
/// flags) and enchantments; items that take damage carry a durability block;
/// and each item family adds its own [`Variant`] payload.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
  name:         Option<Chat>,
  lore:         Vec<Chat>,
  flags:        Vec<ItemFlag>,
  unbreakable:  bool,
  /// A map of enchantments to levels. The level cannot be zero.
  enchantments: Option<HashMap<enchantment::Type, NonZeroU8>>,
  damage:       Option<Damage>,
  variant:      Variant,
}

impl Meta {
  /// Builds the metadata an item of the given type starts out with. This is
  /// how a freshly created stack gets its meta.
  pub fn for_type(ty: Type) -> Meta {
    let variant = match Kind::for_type(ty) {
      Kind::Plain => Variant::Plain,
      Kind::Bundle => Variant::Bundle(BundleMeta::default()),
      Kind::Armor => Variant::Armor(ArmorMeta::default()),
      Kind::AxolotlBucket => Variant::AxolotlBucket(AxolotlVariant::default()),
      Kind::ArmorStand => Variant::ArmorStand(ArmorStandMeta::default()),
      Kind::Banner => Variant::Banner(BannerMeta {
        base:     ty.banner_color().unwrap_or_default(),
        patterns: vec![],
      }),
      Kind::Skull => Variant::Skull(SkullMeta::default()),
      Kind::Firework => Variant::Firework(FireworkMeta::default()),
      Kind::Book => Variant::Book(BookMeta::default()),
      Kind::StoredEnchants => Variant::StoredEnchants(HashMap::new()),
      Kind::Potion => Variant::Potion(PotionMeta::default()),
    };
    Meta {
      damage: ty.max_damage().map(|_| Damage::default()),
      variant,
      ..Default::default()
    }
  }

  /// Returns the kind of this metadata. This decides which items it can move
  /// between.
  pub fn kind(&self) -> Kind {
    match &self.variant {
      Variant::Plain => Kind::Plain,
      Variant::Bundle(_) => Kind::Bundle,
      Variant::Armor(_) => Kind::Armor,
      Variant::AxolotlBucket(_) => Kind::AxolotlBucket,
      Variant::ArmorStand(_) => Kind::ArmorStand,
      Variant::Banner(_) => Kind::Banner,
      Variant::Skull(_) => Kind::Skull,
      Variant::Firework(_) => Kind::Firework,
      Variant::Book(_) => Kind::Book,
      Variant::StoredEnchants(_) => Kind::StoredEnchants,
      Variant::Potion(_) => Kind::Potion,
    }
  }

  pub fn set_name(&mut self, name: Option<Chat>) { self.name = name; }
  pub fn name(&self) -> Option<&Chat> { self.name.as_ref() }

  pub fn set_lore(&mut self, lore: Vec<Chat>) { self.lore = lore; }
  pub fn append_lore(&mut self, lines: impl IntoIterator<Item = Chat>) {
    self.lore.extend(lines);
  }
  pub fn lore(&self) -> &[Chat] { &self.lore }

  /// Adds a tooltip flag. Adding the same flag twice keeps a single copy.
  pub fn add_flag(&mut self, flag: ItemFlag) {
    if !self.flags.contains(&flag) {
      self.flags.push(flag);
    }
  }
  pub fn has_flag(&self, flag: ItemFlag) -> bool { self.flags.contains(&flag) }

  pub fn set_unbreakable(&mut self, unbreakable: bool) { self.unbreakable = unbreakable; }
  pub fn unbreakable(&self) -> bool { self.unbreakable }

  /// Adds the given enchantment. When `ignore_level_restriction` is unset,
  /// levels outside `1..=max_level` are rejected. Returns whether the
  /// enchantment was stored.
  pub fn add_enchantment(
    &mut self,
    ty: enchantment::Type,
    level: u8,
    ignore_level_restriction: bool,
  ) -> bool {
    let level = match NonZeroU8::new(level) {
      Some(l) => l,
      None => return false,
    };
    if !ignore_level_restriction && level.get() > ty.max_level() {
      return false;
    }
    self.enchantments_mut().insert(ty, level);
    true
  }
  pub fn remove_enchantment(&mut self, ty: enchantment::Type) {
    if let Some(e) = &mut self.enchantments {
      e.remove(&ty);
    }
  }
  pub fn clear_enchantments(&mut self) {
    if let Some(e) = &mut self.enchantments {
      e.clear();
    }
  }
  pub fn enchantment_level(&self, ty: enchantment::Type) -> Option<u8> {
    self.enchantments.as_ref().and_then(|e| e.get(&ty)).map(|l| l.get())
  }
  pub fn enchantments(&self) -> impl Iterator<Item = enchantment::Enchantment> + '_ {
    self
      .enchantments
      .iter()
      .flatten()
      .map(|(ty, level)| enchantment::Enchantment { ty: *ty, level: *level })
  }
  fn enchantments_mut(&mut self) -> &mut HashMap<enchantment::Type, NonZeroU8> {
    self.enchantments.get_or_insert_with(HashMap::new)
  }

  pub fn damage(&self) -> Option<&Damage> { self.damage.as_ref() }
  pub fn damage_mut(&mut self) -> Option<&mut Damage> { self.damage.as_mut() }
  /// Reconciles the durability block after a type switch. A type that takes
  /// damage keeps (or gains) the block, everything else loses it.
  pub(crate) fn sync_damage(&mut self, ty: Type) {
    self.damage = match (ty.max_damage(), self.damage) {
      (Some(_), Some(d)) => Some(d),
      (Some(_), None) => Some(Damage::default()),
      (None, _) => None,
    };
  }

  pub fn bundle(&self) -> Option<&BundleMeta> {
    match &self.variant {
      Variant::Bundle(m) => Some(m),
      _ => None,
    }
  }
  pub fn bundle_mut(&mut self) -> Option<&mut BundleMeta> {
    match &mut self.variant {
      Variant::Bundle(m) => Some(m),
      _ => None,
    }
  }
  pub fn armor(&self) -> Option<&ArmorMeta> {
    match &self.variant {
      Variant::Armor(m) => Some(m),
      _ => None,
    }
  }
  pub fn armor_mut(&mut self) -> Option<&mut ArmorMeta> {
    match &mut self.variant {
      Variant::Armor(m) => Some(m),
      _ => None,
    }
  }
  pub fn axolotl(&self) -> Option<&AxolotlVariant> {
    match &self.variant {
      Variant::AxolotlBucket(m) => Some(m),
      _ => None,
    }
  }
  pub fn axolotl_mut(&mut self) -> Option<&mut AxolotlVariant> {
    match &mut self.variant {
      Variant::AxolotlBucket(m) => Some(m),
      _ => None,
    }
  }
  pub fn armor_stand(&self) -> Option<&ArmorStandMeta> {
    match &self.variant {
      Variant::ArmorStand(m) => Some(m),
      _ => None,
    }
  }
  pub fn armor_stand_mut(&mut self) -> Option<&mut ArmorStandMeta> {
    match &mut self.variant {
      Variant::ArmorStand(m) => Some(m),
      _ => None,
    }
  }
  pub fn banner(&self) -> Option<&BannerMeta> {
    match &self.variant {
      Variant::Banner(m) => Some(m),
      _ => None,
    }
  }
  pub fn banner_mut(&mut self) -> Option<&mut BannerMeta> {
    match &mut self.variant {
      Variant::Banner(m) => Some(m),
      _ => None,
    }
  }
  pub fn skull(&self) -> Option<&SkullMeta> {
    match &self.variant {
      Variant::Skull(m) => Some(m),
      _ => None,
    }
  }
  pub fn skull_mut(&mut self) -> Option<&mut SkullMeta> {
    match &mut self.variant {
      Variant::Skull(m) => Some(m),
      _ => None,
    }
  }
  pub fn firework(&self) -> Option<&FireworkMeta> {
    match &self.variant {
      Variant::Firework(m) => Some(m),
      _ => None,
    }
  }
  pub fn firework_mut(&mut self) -> Option<&mut FireworkMeta> {
    match &mut self.variant {
      Variant::Firework(m) => Some(m),
      _ => None,
    }
  }
  pub fn book(&self) -> Option<&BookMeta> {
    match &self.variant {
      Variant::Book(m) => Some(m),
      _ => None,
    }
  }
  pub fn book_mut(&mut self) -> Option<&mut BookMeta> {
    match &mut self.variant {
      Variant::Book(m) => Some(m),
      _ => None,
    }
  }
  pub fn stored_enchants(&self) -> Option<&HashMap<enchantment::Type, NonZeroU8>> {
    match &self.variant {
      Variant::StoredEnchants(m) => Some(m),
      _ => None,
    }
  }
  pub fn stored_enchants_mut(&mut self) -> Option<&mut HashMap<enchantment::Type, NonZeroU8>> {
    match &mut self.variant {
      Variant::StoredEnchants(m) => Some(m),
      _ => None,
    }
  }
  pub fn potion(&self) -> Option<&PotionMeta> {
    match &self.variant {
      Variant::Potion(m) => Some(m),
      _ => None,
    }
  }
  pub fn potion_mut(&mut self) -> Option<&mut PotionMeta> {
    match &mut self.variant {
      Variant::Potion(m) => Some(m),
      _ => None,
    }
  }
}
