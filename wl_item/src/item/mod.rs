pub mod builder;
mod color;
pub mod meta;
mod stack;
mod ty;

pub use color::{DyeColor, InvalidDyeColor};
pub use meta::Meta;
pub use stack::Stack;
pub use ty::{Data, InvalidItem, Type};
