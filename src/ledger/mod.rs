//! Party ledger statements: entry rows, the statement builder, and the
//! record collector

pub mod builder;
pub mod collector;
pub mod entry;

pub use builder::*;
pub use collector::*;
pub use entry::*;
