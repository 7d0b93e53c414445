mod ty;

pub use ty::{Data, InvalidEffect, Type};

use serde::{Deserialize, Serialize};

/// A status effect, as stored on a potion or tipped arrow. Instant effects
/// apply once and ignore the duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionEffect {
  /// The type of effect.
  pub ty:        Type,
  /// How long the effect lasts, in ticks.
  pub duration:  u32,
  /// The effect level, starting at 0 for level I.
  pub amplifier: u8,
}

impl PotionEffect {
  pub fn new(ty: Type, duration: u32, amplifier: u8) -> Self {
    PotionEffect { ty, duration, amplifier }
  }
}
