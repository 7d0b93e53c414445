use super::{builder_parts, BuilderError, ItemBuilder};
use crate::item::{
  meta::{FireworkEffect, Meta},
  Stack, Type,
};

/// Builds a firework rocket: a list of stars that burst when it explodes.
#[derive(Debug, Clone, PartialEq)]
pub struct FireworkRocketBuilder {
  stack: Stack,
  meta:  Meta,
}

impl FireworkRocketBuilder {
  /// Starts building a new rocket with no stars.
  pub fn new() -> Self {
    let stack = Stack::new(Type::FireworkRocket);
    let meta = stack.meta().clone();
    FireworkRocketBuilder { stack, meta }
  }
  /// Edits an existing stack. Fails if its metadata isn't a firework's.
  pub fn edit(stack: Stack) -> Result<Self, BuilderError> {
    let meta = stack.meta().clone();
    if meta.firework().is_none() {
      return Err(BuilderError::NotFirework(stack.item()));
    }
    Ok(FireworkRocketBuilder { stack, meta })
  }

  /// Adds one star to the explosion.
  pub fn effect(mut self, effect: FireworkEffect) -> Self {
    if let Some(f) = self.meta.firework_mut() {
      f.effects.push(effect);
    }
    self
  }
  /// Adds every star in the given list to the explosion.
  pub fn effects(mut self, effects: impl IntoIterator<Item = FireworkEffect>) -> Self {
    if let Some(f) = self.meta.firework_mut() {
      f.effects.extend(effects);
    }
    self
  }
}

impl Default for FireworkRocketBuilder {
  fn default() -> Self { FireworkRocketBuilder::new() }
}
builder_parts!(FireworkRocketBuilder);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::item::meta::FireworkShape;
  use pretty_assertions::assert_eq;
  use wl_common::util::Color;

  #[test]
  fn stars_accumulate() {
    let red = FireworkEffect::burst(FireworkShape::LargeBall, vec![Color::RED]);
    let finale = FireworkEffect {
      shape:       FireworkShape::Star,
      colors:      vec![Color::YELLOW, Color::WHITE],
      fade_colors: vec![Color::GRAY],
      flicker:     true,
      trail:       true,
    };
    let stack = FireworkRocketBuilder::new()
      .effect(red.clone())
      .effects([finale.clone(), red.clone()])
      .build();
    assert_eq!(stack.item(), Type::FireworkRocket);
    assert_eq!(stack.meta().firework().unwrap().effects, vec![red.clone(), finale, red]);
  }

  #[test]
  fn edit_rejects_other_items() {
    assert_eq!(
      FireworkRocketBuilder::edit(Stack::new(Type::Stick)).unwrap_err(),
      BuilderError::NotFirework(Type::Stick),
    );
    let built = FireworkRocketBuilder::new()
      .effect(FireworkEffect::burst(FireworkShape::Burst, vec![Color::LIME]))
      .build();
    let again = FireworkRocketBuilder::edit(built).unwrap();
    assert_eq!(again.meta().firework().unwrap().effects.len(), 1);
  }
}
