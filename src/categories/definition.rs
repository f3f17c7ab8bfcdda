//! Category definitions - static symbol sets.
//!
//! A `CategoryDefinition` holds the immutable properties of one emoji
//! category: its name and its ordered symbols. Runtime state (which player
//! holds the category, which symbols are on the board) lives in the
//! engine's `GameState`, never here.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Unique identifier for a category definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// Static category definition.
///
/// ## Example
///
/// ```
/// use emoji_ttt::categories::{CategoryDefinition, CategoryId, Symbol};
///
/// let animals = CategoryDefinition::new(CategoryId::new(1), "animals")
///     .with_symbol("🐶")
///     .with_symbol("🐱");
///
/// assert_eq!(animals.len(), 2);
/// assert!(animals.contains(&Symbol::new("🐶")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Unique identifier for this category.
    pub id: CategoryId,

    /// Category name (shown on the selection screen).
    pub name: String,

    /// Symbols in display order.
    symbols: Vec<Symbol>,
}

impl CategoryDefinition {
    /// Create a new category definition with no symbols.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            symbols: Vec::new(),
        }
    }

    /// Add a symbol (builder pattern).
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Add several symbols (builder pattern).
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Symbols in display order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Check whether a symbol belongs to this category.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the category has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
