pub mod chat;
mod color;

pub use chat::Chat;
pub use color::Color;

use rand::{rngs::OsRng, RngCore};
use serde::{
  de::{self, Deserialize, Deserializer, Unexpected, Visitor},
  ser::{Serialize, Serializer},
};
use std::{error::Error, fmt, num::ParseIntError, str::FromStr};

/// A player id. The same player will always have the same id, even when they
/// change their username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UUID(u128);

impl Default for UUID {
  fn default() -> UUID { UUID::from_u128(0) }
}

#[derive(Debug)]
pub enum UUIDParseError {
  Int(ParseIntError),
  Length(usize),
}

impl fmt::Display for UUIDParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "error while parsing uuid: {}",
      match self {
        Self::Int(e) => format!("int parsing error: {}", e),
        Self::Length(len) => format!("invalid length: {}", len),
      }
    )
  }
}

impl Error for UUIDParseError {}

impl UUID {
  /// Generates a random UUID. This uses rand::OsRng, so it will be secure.
  pub fn random() -> Self {
    let mut arr = [0; 16];
    OsRng.fill_bytes(&mut arr);
    UUID::from_be_bytes(arr)
  }
  /// Derives the id of an offline-mode player from their username. This is a
  /// version 3 uuid, built from the md5 of `OfflinePlayer:<name>`, so the
  /// same name always maps to the same id.
  pub fn offline(name: &str) -> Self {
    let mut arr = md5::compute(format!("OfflinePlayer:{name}")).0;
    // Version 3, RFC 4122 variant.
    arr[6] = (arr[6] & 0x0f) | 0x30;
    arr[8] = (arr[8] & 0x3f) | 0x80;
    UUID::from_be_bytes(arr)
  }
  pub fn from_le_bytes(v: [u8; 16]) -> Self { UUID(u128::from_le_bytes(v)) }
  pub fn from_be_bytes(v: [u8; 16]) -> Self { UUID(u128::from_be_bytes(v)) }
  pub fn from_u128(v: u128) -> Self { UUID(v) }
  /// Parses the string as a uuid with dashes in between. This is the same
  /// format returned from [`as_dashed_str`](Self::as_dashed_str).
  pub fn from_dashed_str(s: &str) -> Result<Self, UUIDParseError> {
    if s.len() != 36 {
      return Err(UUIDParseError::Length(s.len()));
    }
    Self::from_str(&s.split('-').collect::<Vec<&str>>().join(""))
  }
  /// Returns the uuid represented as a hex string, with no dashes or other
  /// characters.
  pub fn as_str(&self) -> String { format!("{:x}", self.0) }
  /// Returns the uuid represented as a string with dashes. This is used
  /// sometimes when refering to player in json, and is a useful function to
  /// have.
  pub fn as_dashed_str(&self) -> String {
    format!(
      "{:x}-{:x}-{:x}-{:x}-{:x}",
      //          11111111222233334444555555555555
      (self.0 & 0xffffffff000000000000000000000000) >> (24 * 4), // 4 bits per digit
      (self.0 & 0x00000000ffff00000000000000000000) >> (20 * 4),
      (self.0 & 0x000000000000ffff0000000000000000) >> (16 * 4),
      (self.0 & 0x0000000000000000ffff000000000000) >> (12 * 4),
      (self.0 & 0x00000000000000000000ffffffffffff),
    )
  }
  /// Returns the underlying `u128`. For json, you probably want
  /// [`as_str`](Self::as_str) or [`as_dashed_str`](Self::as_dashed_str).
  pub fn as_u128(&self) -> u128 { self.0 }
  /// Returns the big-endian representation of the underlying `u128`.
  pub fn as_be_bytes(&self) -> [u8; 16] { self.0.to_be_bytes() }
  /// Returns the uuid version. This is `3` for ids derived with
  /// [`offline`](Self::offline).
  pub fn version(&self) -> u8 { ((self.0 >> 76) & 0xf) as u8 }
}

impl FromStr for UUID {
  type Err = UUIDParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.len() != 32 {
      return Err(UUIDParseError::Length(s.len()));
    }
    match u128::from_str_radix(s, 16) {
      Ok(v) => Ok(Self::from_u128(v)),
      Err(e) => Err(UUIDParseError::Int(e)),
    }
  }
}

impl Serialize for UUID {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&self.as_str())
  }
}

impl<'de> Deserialize<'de> for UUID {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct Inner;
    impl<'de> Visitor<'de> for Inner {
      type Value = UUID;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a UUID")
      }

      fn visit_str<E>(self, value: &str) -> Result<UUID, E>
      where
        E: de::Error,
      {
        UUID::from_str(value).map_err(|_| de::Error::invalid_value(Unexpected::Str(value), &self))
      }
    }
    deserializer.deserialize_str(Inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn uuid_str_round_trip() {
    let id = UUID::from_u128(0x11d3fd3c5fe34a189e0f7e0200e87fd9);
    assert_eq!(id.as_str().parse::<UUID>().unwrap(), id);
    assert_eq!(UUID::from_dashed_str(&id.as_dashed_str()).unwrap(), id);
    assert!(UUID::from_dashed_str("not-a-uuid").is_err());
  }

  #[test]
  fn offline_uuids_are_deterministic() {
    let a = UUID::offline("herobrine");
    let b = UUID::offline("herobrine");
    assert_eq!(a, b);
    assert_ne!(a, UUID::offline("Herobrine"));
    assert_eq!(a.version(), 3);
  }
}
