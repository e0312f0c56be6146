// src/resolver/table.rs

//! Flat ingredient -> quantity accumulator

use std::collections::BTreeMap;

/// Base ingredients and the total quantity of each needed by one recipe
///
/// Quantities only ever grow: adding an ingredient that is already present
/// sums the amounts instead of replacing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedIngredientTable {
    quantities: BTreeMap<String, f64>,
}

impl ResolvedIngredientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an ingredient, starting from zero if absent
    pub fn add(&mut self, name: &str, quantity: f64) {
        *self.quantities.entry(name.to_string()).or_insert(0.0) += quantity;
    }

    /// Fold another table in, scaling each of its quantities by `multiplier`
    pub fn merge_scaled(&mut self, other: &ResolvedIngredientTable, multiplier: f64) {
        for (name, quantity) in &other.quantities {
            self.add(name, quantity * multiplier);
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.quantities.get(name).copied()
    }

    /// Entries in ingredient-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.quantities.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
