use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wl_common::util::UUID;

/// A player that may or may not be online. This is all a player head needs to
/// know about its owner: the id, and the username if one is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflinePlayer {
  uuid: UUID,
  name: Option<String>,
}

impl OfflinePlayer {
  pub fn new(uuid: UUID, name: Option<String>) -> Self { OfflinePlayer { uuid, name } }

  pub fn uuid(&self) -> UUID { self.uuid }
  pub fn name(&self) -> Option<&str> { self.name.as_deref() }
}

/// Resolves players by id or username. The server's live player list is one
/// implementation; [`PlayerCache`] is a standalone one.
pub trait PlayerLookup {
  /// Looks up the player with the given id. There is always an answer here:
  /// an id that was never seen resolves to a player with no known name.
  fn by_uuid(&self, uuid: UUID) -> OfflinePlayer;
  /// Looks up the player with the given username. This may block on a network
  /// round trip to the authentication servers, so don't call it from a tick
  /// loop. Use [`cached`](Self::cached) there instead.
  fn by_name(&self, name: &str) -> OfflinePlayer;
  /// Returns the player with the given username only if they are already
  /// known. This never blocks.
  fn cached(&self, name: &str) -> Option<OfflinePlayer>;
}

/// An in-memory [`PlayerLookup`]. Names that were never inserted resolve to
/// deterministic offline-mode ids, the same way an offline-mode server assigns
/// them.
#[derive(Debug, Default)]
pub struct PlayerCache {
  players: Mutex<HashMap<UUID, OfflinePlayer>>,
}

impl PlayerCache {
  pub fn new() -> Self { PlayerCache::default() }

  /// Stores a known player. Later lookups by id or name will find them.
  pub fn insert(&self, player: OfflinePlayer) {
    self.players.lock().insert(player.uuid(), player);
  }
}

impl PlayerLookup for PlayerCache {
  fn by_uuid(&self, uuid: UUID) -> OfflinePlayer {
    self
      .players
      .lock()
      .get(&uuid)
      .cloned()
      .unwrap_or(OfflinePlayer { uuid, name: None })
  }

  fn by_name(&self, name: &str) -> OfflinePlayer {
    if let Some(p) = self.cached(name) {
      return p;
    }
    warn!("player `{name}` is not cached, deriving an offline id");
    OfflinePlayer { uuid: UUID::offline(name), name: Some(name.into()) }
  }

  fn cached(&self, name: &str) -> Option<OfflinePlayer> {
    self.players.lock().values().find(|p| p.name() == Some(name)).cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn cached_never_invents_players() {
    let cache = PlayerCache::new();
    assert_eq!(cache.cached("herobrine"), None);

    let p = OfflinePlayer::new(UUID::random(), Some("herobrine".into()));
    cache.insert(p.clone());
    assert_eq!(cache.cached("herobrine"), Some(p));
  }

  #[test]
  fn unknown_names_get_offline_ids() {
    let cache = PlayerCache::new();
    let p = cache.by_name("nobody");
    assert_eq!(p.uuid(), UUID::offline("nobody"));
    assert_eq!(p.name(), Some("nobody"));
  }

  #[test]
  fn unknown_uuids_have_no_name() {
    let cache = PlayerCache::new();
    let id = UUID::random();
    let p = cache.by_uuid(id);
    assert_eq!(p.uuid(), id);
    assert_eq!(p.name(), None);
  }
}
