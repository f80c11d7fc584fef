// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Surrogate key assignment.
//!
//! A dimension is built by walking the sales in input order and assigning
//! the next integer id to every natural key not seen before. The mapping is
//! an explicit ordered map, so key assignment never depends on hash order or
//! on any deduplication routine.

use sales_dw_domain::{Sale, Table};
use std::collections::HashMap;
use std::hash::Hash;

/// Ordered map from natural key to a dense, 1-based surrogate key.
#[derive(Debug, Clone)]
pub struct SurrogateKeys<K> {
    ids: HashMap<K, i64>,
    order: Vec<K>,
    next_id: i64,
}

impl<K> Default for SurrogateKeys<K> {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }
}

impl<K: Eq + Hash + Clone> SurrogateKeys<K> {
    /// Creates an empty key map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key of `natural`, assigning the next id on first sight.
    pub fn assign(&mut self, natural: K) -> i64 {
        if let Some(&id) = self.ids.get(&natural) {
            return id;
        }

        let id: i64 = self.next_id;
        self.next_id += 1;
        self.ids.insert(natural.clone(), id);
        self.order.push(natural);
        id
    }

    /// Returns the key already assigned to `natural`.
    #[must_use]
    pub fn get(&self, natural: &K) -> Option<i64> {
        self.ids.get(natural).copied()
    }

    /// Number of distinct natural keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether no key has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(key, natural)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &K)> {
        (1_i64..).zip(self.order.iter())
    }
}

/// A dimension under construction: its table, key column and key map.
#[derive(Debug, Clone)]
pub struct Dimension<K> {
    table: Table,
    key_column: &'static str,
    keys: SurrogateKeys<K>,
}

impl<K: Eq + Hash + Clone> Dimension<K> {
    /// The warehouse table this dimension populates.
    #[must_use]
    pub const fn table(&self) -> Table {
        self.table
    }

    /// Name of the surrogate key column, e.g. `branch_key`.
    #[must_use]
    pub const fn key_column(&self) -> &'static str {
        self.key_column
    }

    /// The assigned keys.
    #[must_use]
    pub const fn keys(&self) -> &SurrogateKeys<K> {
        &self.keys
    }

    /// Number of distinct rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns whether the dimension has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Converts the dimension into table rows in key order.
    pub fn into_rows<R>(self, mut row: impl FnMut(i64, K) -> R) -> Vec<R> {
        (1_i64..)
            .zip(self.keys.order)
            .map(|(key, natural)| row(key, natural))
            .collect()
    }
}

/// Builds a dimension from the distinct `natural_key` values of `sales`,
/// preserving first-seen order.
pub fn build_dimension<K, F>(
    table: Table,
    key_column: &'static str,
    sales: &[Sale],
    natural_key: F,
) -> Dimension<K>
where
    K: Eq + Hash + Clone,
    F: Fn(&Sale) -> K,
{
    let mut keys: SurrogateKeys<K> = SurrogateKeys::new();
    for sale in sales {
        keys.assign(natural_key(sale));
    }

    Dimension {
        table,
        key_column,
        keys,
    }
}
