//! Game system rules tables.

pub mod dnd5e;

pub use dnd5e::{groups, GroupDef};
