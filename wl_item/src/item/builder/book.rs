use super::{builder_parts, ItemBuilder};
use crate::{
  enchantment,
  item::{meta::Meta, Stack, Type},
};
use wl_common::util::Chat;

/// Builds a written book: a title, an author, and signed pages.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenBookBuilder {
  stack: Stack,
  meta:  Meta,
}

impl WrittenBookBuilder {
  /// Starts building a new written book with no pages.
  pub fn new() -> Self {
    let stack = Stack::new(Type::WrittenBook);
    let meta = stack.meta().clone();
    WrittenBookBuilder { stack, meta }
  }

  /// Replaces the pages of the book.
  pub fn pages<I>(mut self, pages: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Chat>,
  {
    if let Some(b) = self.meta.book_mut() {
      b.pages = pages.into_iter().map(Into::into).collect();
    }
    self
  }
  /// Adds one page to the end of the book.
  pub fn page(mut self, page: impl Into<Chat>) -> Self {
    if let Some(b) = self.meta.book_mut() {
      b.pages.push(page.into());
    }
    self
  }
  /// Signs the book with the given author.
  pub fn author(mut self, author: impl Into<Chat>) -> Self {
    if let Some(b) = self.meta.book_mut() {
      b.author = Some(author.into());
    }
    self
  }
  /// Titles the book.
  pub fn title(mut self, title: impl Into<Chat>) -> Self {
    if let Some(b) = self.meta.book_mut() {
      b.title = Some(title.into());
    }
    self
  }
}

impl Default for WrittenBookBuilder {
  fn default() -> Self { WrittenBookBuilder::new() }
}
builder_parts!(WrittenBookBuilder);

/// Builds an enchanted book. The enchantments are stored, not applied: an
/// anvil moves them onto an item later, so levels past the enchanting-table
/// maximum are fine here.
#[derive(Debug, Clone, PartialEq)]
pub struct EnchantedBookBuilder {
  stack: Stack,
  meta:  Meta,
}

impl EnchantedBookBuilder {
  /// Starts building a new enchanted book with nothing stored.
  pub fn new() -> Self {
    let stack = Stack::new(Type::EnchantedBook);
    let meta = stack.meta().clone();
    EnchantedBookBuilder { stack, meta }
  }

  /// Stores the given enchantment. Levels are never restricted.
  pub fn store(mut self, ty: enchantment::Type, level: u8) -> Self {
    if let Some(stored) = self.meta.stored_enchants_mut() {
      if let Some(level) = std::num::NonZeroU8::new(level) {
        stored.insert(ty, level);
      }
    }
    self
  }
}

impl Default for EnchantedBookBuilder {
  fn default() -> Self { EnchantedBookBuilder::new() }
}
builder_parts!(EnchantedBookBuilder);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::enchantment::Type as Ench;
  use pretty_assertions::assert_eq;
  use std::num::NonZeroU8;

  #[test]
  fn written_book_fields() {
    let stack = WrittenBookBuilder::new()
      .title("Travels")
      .author("herobrine")
      .pages(["Chapter one.", "Chapter two."])
      .page("Appendix.")
      .build();
    let book = stack.meta().book().unwrap();
    assert_eq!(book.title, Some(Chat::new("Travels")));
    assert_eq!(book.author, Some(Chat::new("herobrine")));
    assert_eq!(book.pages.len(), 3);
    assert_eq!(book.pages[2].to_plain(), "Appendix.");
  }

  #[test]
  fn stores_enchantments_beyond_max_level() {
    // Sharpness caps at 5 on a table, but a stored enchant doesn't care.
    let stack = EnchantedBookBuilder::new().store(Ench::Sharpness, 10).build();
    let stored = stack.meta().stored_enchants().unwrap();
    assert_eq!(stored.get(&Ench::Sharpness), Some(&NonZeroU8::new(10).unwrap()));
  }

  #[test]
  fn level_zero_is_not_stored() {
    let stack = EnchantedBookBuilder::new().store(Ench::Mending, 0).build();
    assert!(stack.meta().stored_enchants().unwrap().is_empty());
  }
}
