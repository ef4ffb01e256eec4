//! Category and operation registry.
//!
//! Templates reference generator operations by a pair of runtime strings
//! (`#{Name.first_name}`), so dispatch needs a by-name table. The registry is
//! that table: category name (case-insensitive, stored lowercase) to
//! operation name (camelCase) to a plain function pointer. It is populated
//! once when the engine is built and never mutated afterwards.

use std::collections::HashMap;

use crate::error::ForgeError;
use crate::values::FakeValues;

/// A registered generator operation.
///
/// Operations take the engine (for dataset access, randomness, and
/// re-entrant template resolution) plus the registry itself so they can
/// dispatch to other operations while resolving their own templates.
pub type Operation = fn(&mut FakeValues, &Registry) -> Result<String, ForgeError>;

/// Lookup table from (category, operation) to generator functions.
#[derive(Debug, Default)]
pub struct Registry {
    categories: HashMap<String, HashMap<String, Operation>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            categories: HashMap::new(),
        }
    }

    /// Register an operation under a category.
    ///
    /// The category is lowercased for storage; the operation name is stored
    /// as given and is expected in camelCase (see [`to_camel_case`]).
    pub fn register(&mut self, category: &str, operation: &str, op: Operation) {
        self.categories
            .entry(category.to_lowercase())
            .or_default()
            .insert(operation.to_string(), op);
    }

    /// Look up an operation by category and camelCase operation name.
    ///
    /// Category lookup is case-insensitive.
    pub fn get(&self, category: &str, operation: &str) -> Result<Operation, ForgeError> {
        let operations = self
            .categories
            .get(&category.to_lowercase())
            .ok_or_else(|| ForgeError::UnknownCategory(category.to_string()))?;
        operations
            .get(operation)
            .copied()
            .ok_or_else(|| ForgeError::UnknownOperation {
                category: category.to_string(),
                operation: operation.to_string(),
            })
    }

    /// Whether a category is registered.
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(&category.to_lowercase())
    }

    /// All registered category names, in no particular order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// All operation names in a category, in no particular order.
    ///
    /// Unknown categories yield an empty list.
    pub fn operation_names(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(&category.to_lowercase())
            .map(|operations| operations.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Convert a snake_case operation reference to its camelCase registry name.
///
/// Each underscore-delimited word gets its first letter uppercased, the words
/// are joined, and the first character of the result is lowercased:
/// `street_name` becomes `streetName`. Already-camelCase input passes through
/// unchanged, so `FirstName` and `firstName` both map to `firstName`.
pub fn to_camel_case(name: &str) -> String {
    let mut joined = String::with_capacity(name.len());
    for word in name.split('_').filter(|word| !word.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            joined.extend(first.to_uppercase());
            joined.push_str(chars.as_str());
        }
    }
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => joined,
    }
}
