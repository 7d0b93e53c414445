#[macro_use]
extern crate log;

pub mod effect;
pub mod enchantment;
pub mod item;
pub mod player;
