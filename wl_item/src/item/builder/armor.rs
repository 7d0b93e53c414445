use super::{builder_parts, BuilderError, ItemBuilder};
use crate::item::{
  meta::{ArmorTrim, Meta},
  Stack, Type,
};
use wl_common::util::Color;

/// Durability operations, for builders whose items are guaranteed to take
/// damage. The base [`ItemBuilder::damage`] silently skips items without a
/// durability block; builders implementing this trait validated the block at
/// construction, so here the setters always land.
pub trait Damageable: ItemBuilder {
  /// Overrides the item's durability. `None` goes back to the type's default.
  fn max_damage(mut self, max: Option<u16>) -> Self {
    if let Some(d) = self.parts_mut().1.damage_mut() {
      d.max_damage = max;
    }
    self
  }
}

/// Armor trim operations, for builders whose metadata holds a trim slot.
pub trait Trimmable: ItemBuilder {
  /// Sets the armor trim: a pattern smithed on in a given material.
  fn trim(mut self, trim: ArmorTrim) -> Self {
    if let Some(a) = self.parts_mut().1.armor_mut() {
      a.trim = Some(trim);
    }
    self
  }
}

/// Builds any item that takes durability damage: tools, weapons, armor,
/// elytra, shields.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageableBuilder {
  stack: Stack,
  meta:  Meta,
}

impl DamageableBuilder {
  /// Starts building a new item of the given type. Fails if the type doesn't
  /// take damage.
  pub fn new(ty: Type) -> Result<Self, BuilderError> { Self::edit(Stack::new(ty)) }
  /// Edits an existing stack. Fails if its metadata has no durability block.
  pub fn edit(stack: Stack) -> Result<Self, BuilderError> {
    let meta = stack.meta().clone();
    if meta.damage().is_none() {
      return Err(BuilderError::NotDamageable(stack.item()));
    }
    Ok(DamageableBuilder { stack, meta })
  }
}
builder_parts!(DamageableBuilder);
impl Damageable for DamageableBuilder {}

/// Builds armor: items that hold an armor trim on top of taking damage.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmorBuilder {
  stack: Stack,
  meta:  Meta,
}

impl ArmorBuilder {
  /// Starts building a new piece of armor. Fails if the type can't hold a
  /// trim.
  pub fn new(ty: Type) -> Result<Self, BuilderError> { Self::edit(Stack::new(ty)) }
  /// Starts building a new piece of armor with the given trim already set.
  pub fn with_trim(ty: Type, trim: ArmorTrim) -> Result<Self, BuilderError> {
    Ok(Self::new(ty)?.trim(trim))
  }
  /// Edits an existing stack. Fails if its metadata has no trim slot.
  pub fn edit(stack: Stack) -> Result<Self, BuilderError> {
    let meta = stack.meta().clone();
    if meta.armor().is_none() {
      return Err(BuilderError::NotArmor(stack.item()));
    }
    Ok(ArmorBuilder { stack, meta })
  }
}
builder_parts!(ArmorBuilder);
impl Damageable for ArmorBuilder {}
impl Trimmable for ArmorBuilder {}

/// Builds leather armor, which can be dyed on top of trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct LeatherArmorBuilder {
  stack: Stack,
  meta:  Meta,
}

impl LeatherArmorBuilder {
  /// Starts building a new piece of leather armor dyed in the given color.
  /// Fails if the type isn't leather armor.
  pub fn new(ty: Type, color: Color) -> Result<Self, BuilderError> {
    Ok(Self::edit(Stack::new(ty))?.color(color))
  }
  /// Edits an existing stack. Fails if its type isn't leather armor.
  pub fn edit(stack: Stack) -> Result<Self, BuilderError> {
    if !stack.item().is_leather_armor() {
      return Err(BuilderError::NotLeatherArmor(stack.item()));
    }
    let meta = stack.meta().clone();
    Ok(LeatherArmorBuilder { stack, meta })
  }

  /// Sets the dye color.
  pub fn color(mut self, color: Color) -> Self {
    if let Some(a) = self.meta.armor_mut() {
      a.color = Some(color);
    }
    self
  }
}
builder_parts!(LeatherArmorBuilder);
impl Damageable for LeatherArmorBuilder {}
impl Trimmable for LeatherArmorBuilder {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::item::meta::{TrimMaterial, TrimPattern};
  use pretty_assertions::assert_eq;

  #[test]
  fn rejects_items_outside_the_family() {
    assert_eq!(
      DamageableBuilder::new(Type::Stone).unwrap_err(),
      BuilderError::NotDamageable(Type::Stone),
    );
    // A sword takes damage but can't be trimmed.
    assert!(DamageableBuilder::new(Type::DiamondSword).is_ok());
    assert_eq!(
      ArmorBuilder::new(Type::DiamondSword).unwrap_err(),
      BuilderError::NotArmor(Type::DiamondSword),
    );
    // Iron armor can be trimmed but not dyed.
    assert!(ArmorBuilder::new(Type::IronHelmet).is_ok());
    assert_eq!(
      LeatherArmorBuilder::edit(Stack::new(Type::IronHelmet)).unwrap_err(),
      BuilderError::NotLeatherArmor(Type::IronHelmet),
    );
  }

  #[test]
  fn damage_and_max_damage() {
    let stack = DamageableBuilder::new(Type::DiamondPickaxe)
      .unwrap()
      .damage(100)
      .max_damage(Some(2000))
      .build();
    assert_eq!(stack.meta().damage().unwrap().damage, 100);
    assert_eq!(stack.meta().damage().unwrap().max_damage, Some(2000));

    let stack = DamageableBuilder::edit(stack).unwrap().max_damage(None).build();
    assert_eq!(stack.meta().damage().unwrap().max_damage, None);
    assert_eq!(stack.meta().damage().unwrap().damage, 100);
  }

  #[test]
  fn trims_armor() {
    let trim = ArmorTrim { material: TrimMaterial::Gold, pattern: TrimPattern::Sentry };
    let stack = ArmorBuilder::with_trim(Type::DiamondChestplate, trim).unwrap().build();
    assert_eq!(stack.meta().armor().unwrap().trim, Some(trim));
  }

  #[test]
  fn dyes_leather() {
    let stack = LeatherArmorBuilder::new(Type::LeatherBoots, Color::PURPLE)
      .unwrap()
      .trim(ArmorTrim { material: TrimMaterial::Quartz, pattern: TrimPattern::Coast })
      .damage(3)
      .build();
    let armor = stack.meta().armor().unwrap();
    assert_eq!(armor.color, Some(Color::PURPLE));
    assert_eq!(armor.trim.unwrap().pattern, TrimPattern::Coast);
    assert_eq!(stack.meta().damage().unwrap().damage, 3);
  }
}
