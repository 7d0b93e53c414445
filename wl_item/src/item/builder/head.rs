use super::{builder_parts, BuilderError, ItemBuilder};
use crate::{
  item::{meta::Meta, Stack, Type},
  player::{OfflinePlayer, PlayerLookup},
};
use wl_common::util::UUID;

/// Builds a player head. The owner decides whose skin the head renders; a
/// head with no owner renders the default skin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerHeadBuilder {
  stack: Stack,
  meta:  Meta,
}

impl PlayerHeadBuilder {
  /// Starts building a new head owned by the given player.
  pub fn new(player: OfflinePlayer) -> Self { Self::unowned().owner(player) }
  /// Starts building a new head with no owner set.
  pub fn unowned() -> Self {
    let stack = Stack::new(Type::PlayerHead);
    let meta = stack.meta().clone();
    PlayerHeadBuilder { stack, meta }
  }
  /// Edits an existing stack. Fails if its metadata isn't a skull's.
  pub fn edit(stack: Stack) -> Result<Self, BuilderError> {
    let meta = stack.meta().clone();
    if meta.skull().is_none() {
      return Err(BuilderError::NotPlayerHead(stack.item()));
    }
    Ok(PlayerHeadBuilder { stack, meta })
  }

  /// Starts building a head for the player with the given id, regardless if
  /// they are offline or online. The lookup may block.
  pub fn for_uuid(uuid: UUID, lookup: &dyn PlayerLookup) -> Self {
    Self::new(lookup.by_uuid(uuid))
  }
  /// Starts building a head for the player with the given username. Resolving
  /// a name may mean a network round trip, so this can block. Use
  /// [`if_cached`](Self::if_cached) if blocking is not an option.
  pub fn for_name(name: &str, lookup: &dyn PlayerLookup) -> Self {
    Self::new(lookup.by_name(name))
  }
  /// Starts building a head for the player with the given username, without
  /// ever blocking. If the player is not already known to the lookup, the
  /// owner is left unset.
  pub fn if_cached(name: &str, lookup: &dyn PlayerLookup) -> Self {
    match lookup.cached(name) {
      Some(player) => Self::new(player),
      None => Self::unowned(),
    }
  }

  /// Sets the owning player.
  pub fn owner(mut self, player: OfflinePlayer) -> Self {
    if let Some(s) = self.meta.skull_mut() {
      s.owner = Some(player);
    }
    self
  }
  /// Sets the owning player by id. The lookup may block.
  pub fn owner_uuid(self, uuid: UUID, lookup: &dyn PlayerLookup) -> Self {
    let player = lookup.by_uuid(uuid);
    self.owner(player)
  }
  /// Sets the owning player by username. The lookup may block.
  pub fn owner_name(self, name: &str, lookup: &dyn PlayerLookup) -> Self {
    let player = lookup.by_name(name);
    self.owner(player)
  }
}
builder_parts!(PlayerHeadBuilder);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::player::PlayerCache;
  use pretty_assertions::assert_eq;

  fn cache_with(name: &str) -> (PlayerCache, OfflinePlayer) {
    let cache = PlayerCache::new();
    let player = OfflinePlayer::new(UUID::random(), Some(name.into()));
    cache.insert(player.clone());
    (cache, player)
  }

  #[test]
  fn owner_from_cache() {
    let (cache, player) = cache_with("herobrine");
    let stack = PlayerHeadBuilder::for_name("herobrine", &cache).build();
    assert_eq!(stack.item(), Type::PlayerHead);
    assert_eq!(stack.meta().skull().unwrap().owner, Some(player.clone()));

    let stack = PlayerHeadBuilder::for_uuid(player.uuid(), &cache).build();
    assert_eq!(stack.meta().skull().unwrap().owner, Some(player));
  }

  #[test]
  fn cache_only_leaves_owner_unset_on_miss() {
    let (cache, player) = cache_with("herobrine");
    let stack = PlayerHeadBuilder::if_cached("nobody", &cache).build();
    assert_eq!(stack.meta().skull().unwrap().owner, None);

    let stack = PlayerHeadBuilder::if_cached("herobrine", &cache).build();
    assert_eq!(stack.meta().skull().unwrap().owner, Some(player));
  }

  #[test]
  fn unknown_names_still_resolve() {
    let cache = PlayerCache::new();
    let stack = PlayerHeadBuilder::for_name("nobody", &cache).build();
    let owner = stack.meta().skull().unwrap().owner.clone().unwrap();
    assert_eq!(owner.uuid(), UUID::offline("nobody"));
  }

  #[test]
  fn edit_rejects_other_items() {
    assert_eq!(
      PlayerHeadBuilder::edit(Stack::new(Type::Stone)).unwrap_err(),
      BuilderError::NotPlayerHead(Type::Stone),
    );
    let (cache, player) = cache_with("herobrine");
    let built = PlayerHeadBuilder::for_name("herobrine", &cache).build();
    let replacement = OfflinePlayer::new(UUID::random(), Some("someone_else".into()));
    let stack = PlayerHeadBuilder::edit(built).unwrap().owner(replacement.clone()).build();
    assert_ne!(Some(player), stack.meta().skull().unwrap().owner);
    assert_eq!(stack.meta().skull().unwrap().owner, Some(replacement));
  }
}
