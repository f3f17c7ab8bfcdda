//! Category registry for definition lookup.
//!
//! The `CategoryRegistry` stores all categories available in one
//! deployment. It is built once, handed to the engine, and never mutated
//! at runtime.

use rustc_hash::FxHashMap;

use super::definition::{CategoryDefinition, CategoryId};
use super::symbol::Symbol;

/// Registry of category definitions.
///
/// ## Example
///
/// ```
/// use emoji_ttt::categories::{CategoryRegistry, Symbol};
///
/// let mut registry = CategoryRegistry::new();
/// let id = registry.register_auto("animals", ["🐶", "🐱", "🐭"]);
///
/// let found = registry.get(id).unwrap();
/// assert_eq!(found.name, "animals");
/// assert!(found.contains(&Symbol::new("🐱")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CategoryRegistry {
    categories: FxHashMap<CategoryId, CategoryDefinition>,
    next_id: u32,
}

impl CategoryRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four-category set of the standard deployment.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register_auto("animals", ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊"]);
        registry.register_auto("food", ["🍎", "🍔", "🍕", "🍩", "🍪", "🍇"]);
        registry.register_auto("faces", ["😀", "😂", "😍", "😎", "😡", "😭"]);
        registry.register_auto("sports", ["⚽", "🏀", "🏈", "⚾", "🎾", "🏐"]);
        registry
    }

    /// Register a category definition.
    ///
    /// Panics if a category with the same ID already exists.
    pub fn register(&mut self, category: CategoryDefinition) {
        if self.categories.contains_key(&category.id) {
            panic!("Category with ID {:?} already registered", category.id);
        }
        self.next_id = self.next_id.max(category.id.raw() + 1);
        self.categories.insert(category.id, category);
    }

    /// Register a category with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto<I, S>(&mut self, name: impl Into<String>, symbols: I) -> CategoryId
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let id = CategoryId::new(self.next_id);
        let category = CategoryDefinition::new(id, name).with_symbols(symbols);
        self.register(category);
        id
    }

    /// Get a category definition by ID.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&CategoryDefinition> {
        self.categories.get(&id)
    }

    /// Look up a category by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CategoryDefinition> {
        self.categories.values().find(|c| c.name == name)
    }

    /// Check if a category ID is registered.
    #[must_use]
    pub fn contains(&self, id: CategoryId) -> bool {
        self.categories.contains_key(&id)
    }

    /// Get the number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over all category definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.categories.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CategoryRegistry::new();

        let category = CategoryDefinition::new(CategoryId::new(1), "animals")
            .with_symbols(["🐶", "🐱"]);
        registry.register(category);

        let found = registry.get(CategoryId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "animals");

        assert!(registry.get(CategoryId::new(99)).is_none());
    }

    #[test]
    fn test_register_auto() {
        let mut registry = CategoryRegistry::new();

        let id1 = registry.register_auto("animals", ["🐶"]);
        let id2 = registry.register_auto("food", ["🍕"]);

        assert_eq!(id1, CategoryId::new(0));
        assert_eq!(id2, CategoryId::new(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CategoryRegistry::new();

        registry.register(CategoryDefinition::new(CategoryId::new(1), "animals"));
        registry.register(CategoryDefinition::new(CategoryId::new(1), "food"));
    }

    #[test]
    fn test_auto_id_skips_manual_ids() {
        let mut registry = CategoryRegistry::new();

        registry.register(CategoryDefinition::new(CategoryId::new(5), "manual"));
        let auto = registry.register_auto("auto", ["🐶"]);

        assert_eq!(auto, CategoryId::new(6));
    }

    #[test]
    fn test_by_name() {
        let registry = CategoryRegistry::standard();

        let faces = registry.by_name("faces").unwrap();
        assert!(faces.contains(&Symbol::new("😎")));

        assert!(registry.by_name("vehicles").is_none());
    }

    #[test]
    fn test_standard_set() {
        let registry = CategoryRegistry::standard();

        assert_eq!(registry.len(), 4);
        for name in ["animals", "food", "faces", "sports"] {
            let category = registry.by_name(name).unwrap();
            assert_eq!(category.len(), 6, "{name} should have six symbols");
        }
    }

    #[test]
    fn test_standard_symbols_disjoint() {
        let registry = CategoryRegistry::standard();

        let mut seen = std::collections::HashSet::new();
        for category in registry.iter() {
            for symbol in category.symbols() {
                assert!(seen.insert(symbol.clone()), "{symbol} appears twice");
            }
        }
    }

    #[test]
    fn test_iteration() {
        let mut registry = CategoryRegistry::new();

        registry.register_auto("a", ["🐶"]);
        registry.register_auto("b", ["🍕"]);

        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"a"));
        assert!(names.contains(&"b"));
    }
}
