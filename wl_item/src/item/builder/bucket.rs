use super::{builder_parts, ItemBuilder};
use crate::item::{
  meta::{AxolotlVariant, Meta},
  Stack, Type,
};

/// Builds a bucket with an axolotl inside. The interesting part is which kind
/// of axolotl got scooped up.
#[derive(Debug, Clone, PartialEq)]
pub struct AxolotlBucketBuilder {
  stack: Stack,
  meta:  Meta,
}

impl AxolotlBucketBuilder {
  /// Starts building a new bucket holding the given axolotl.
  pub fn new(variant: AxolotlVariant) -> Self {
    let stack = Stack::new(Type::AxolotlBucket);
    let meta = stack.meta().clone();
    AxolotlBucketBuilder { stack, meta }.variant(variant)
  }

  /// Swaps out the contained axolotl.
  pub fn variant(mut self, variant: AxolotlVariant) -> Self {
    if let Some(v) = self.meta.axolotl_mut() {
      *v = variant;
    }
    self
  }
}
builder_parts!(AxolotlBucketBuilder);

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn holds_the_variant() {
    let stack = AxolotlBucketBuilder::new(AxolotlVariant::Blue).build();
    assert_eq!(stack.item(), Type::AxolotlBucket);
    assert_eq!(stack.meta().axolotl(), Some(&AxolotlVariant::Blue));

    let stack = AxolotlBucketBuilder::new(AxolotlVariant::Lucy).variant(AxolotlVariant::Gold).build();
    assert_eq!(stack.meta().axolotl(), Some(&AxolotlVariant::Gold));
  }
}
