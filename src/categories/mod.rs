//! Emoji categories: symbols, definitions, and the registry.
//!
//! ## Key Types
//!
//! - `Symbol`: one emoji, as placed on the board
//! - `CategoryId`: identifier for category definitions
//! - `CategoryDefinition`: a named, ordered symbol set
//! - `CategoryRegistry`: category lookup, fixed per deployment
//!
//! Each player selects one category before the game starts and draws
//! every mark from it.

pub mod definition;
pub mod registry;
pub mod symbol;

pub use definition::{CategoryDefinition, CategoryId};
pub use registry::CategoryRegistry;
pub use symbol::Symbol;
