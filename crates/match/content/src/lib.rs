//! Data-driven content for the match engine.
//!
//! This crate houses display-side content and provides loaders for data
//! files:
//! - Symbol alphabets with glyphs and the healing designation (RON)
//! - Combat balance tables (TOML)
//!
//! Content is consumed by host oracles and never appears in engine state.
//! All loaders use match-core types directly with serde deserialization.

pub mod symbols;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use symbols::{SymbolSet, SymbolSpec};

#[cfg(feature = "loaders")]
pub use loaders::{BalanceLoader, SymbolLoader, parse_modifier_list};
