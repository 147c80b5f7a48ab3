use super::tree::WOFPTree;
use std::collections::HashMap;

/// Weight of every ancestor item co-occurring with one item on shared paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionalPatternBase {
    weights: HashMap<usize, f64>,
}

impl ConditionalPatternBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ancestor: usize, weight: f64) {
        *self.weights.entry(ancestor).or_insert(0.0) += weight;
    }

    /// Adds `other` into `self`: shared keys are summed, the rest inserted.
    pub fn merge(&mut self, other: &ConditionalPatternBase) {
        for (&ancestor, &weight) in &other.weights {
            self.add(ancestor, weight);
        }
    }

    pub fn get(&self, ancestor: usize) -> Option<f64> {
        self.weights.get(&ancestor).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries sorted by ancestor rank.
    pub fn sorted(&self) -> Vec<(usize, f64)> {
        let mut entries: Vec<(usize, f64)> =
            self.weights.iter().map(|(&item, &weight)| (item, weight)).collect();
        entries.sort_unstable_by_key(|&(item, _)| item);
        entries
    }
}

/// Attributes the weight of each occurrence of `item` to every item on the
/// path above it. An item absent from the tree yields an empty base.
pub fn conditional_pattern_base(item: usize, tree: &WOFPTree) -> ConditionalPatternBase {
    let mut base = ConditionalPatternBase::new();

    for &idx in tree.occurrences(item) {
        let weight = tree.nodes[idx].weight;
        let mut occurrence = ConditionalPatternBase::new();
        for ancestor in tree.ancestors(idx) {
            if let Some(ancestor_item) = tree.nodes[ancestor].item {
                occurrence.add(ancestor_item, weight);
            }
        }
        base.merge(&occurrence);
    }

    base
}
