use super::{builder_parts, BuilderError, ItemBuilder};
use crate::item::{meta::Meta, Stack, Type};

/// Builds an armor stand item. The toggles here decide how the stand looks
/// once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmorStandBuilder {
  stack: Stack,
  meta:  Meta,
}

impl ArmorStandBuilder {
  /// Starts building a new armor stand.
  pub fn new() -> Self {
    let stack = Stack::new(Type::ArmorStand);
    let meta = stack.meta().clone();
    ArmorStandBuilder { stack, meta }
  }
  /// Edits an existing stack. Fails if its metadata isn't an armor stand's.
  pub fn edit(stack: Stack) -> Result<Self, BuilderError> {
    let meta = stack.meta().clone();
    if meta.armor_stand().is_none() {
      return Err(BuilderError::NotArmorStand(stack.item()));
    }
    Ok(ArmorStandBuilder { stack, meta })
  }

  /// Gives the stand visible arms.
  pub fn show_arms(mut self) -> Self {
    if let Some(s) = self.meta.armor_stand_mut() {
      s.show_arms = true;
    }
    self
  }
  /// Makes the stand itself invisible. Whatever it wears stays visible.
  pub fn invisible(mut self) -> Self {
    if let Some(s) = self.meta.armor_stand_mut() {
      s.invisible = true;
    }
    self
  }
  /// Removes the base plate.
  pub fn no_base_plate(mut self) -> Self {
    if let Some(s) = self.meta.armor_stand_mut() {
      s.no_base_plate = true;
    }
    self
  }
  /// Makes the stand baby-sized.
  pub fn small(mut self) -> Self {
    if let Some(s) = self.meta.armor_stand_mut() {
      s.small = true;
    }
    self
  }
  /// Makes the stand a marker: no hitbox, no gravity.
  pub fn marker(mut self) -> Self {
    if let Some(s) = self.meta.armor_stand_mut() {
      s.marker = true;
    }
    self
  }
}

impl Default for ArmorStandBuilder {
  fn default() -> Self { ArmorStandBuilder::new() }
}
builder_parts!(ArmorStandBuilder);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::item::meta::ArmorStandMeta;
  use pretty_assertions::assert_eq;

  #[test]
  fn toggles_land_in_meta() {
    let stack = ArmorStandBuilder::new().show_arms().no_base_plate().small().build();
    assert_eq!(
      stack.meta().armor_stand(),
      Some(&ArmorStandMeta {
        show_arms: true,
        invisible: false,
        no_base_plate: true,
        small: true,
        marker: false,
      })
    );
  }

  #[test]
  fn edit_rejects_other_items() {
    assert_eq!(
      ArmorStandBuilder::edit(Stack::new(Type::Stick)).unwrap_err(),
      BuilderError::NotArmorStand(Type::Stick),
    );
    let built = ArmorStandBuilder::new().invisible().marker().build();
    let again = ArmorStandBuilder::edit(built).unwrap();
    assert!(again.meta().armor_stand().unwrap().invisible);
  }
}
