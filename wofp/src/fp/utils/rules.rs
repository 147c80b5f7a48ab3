use std::collections::BTreeMap;

/// A weighted association between an item and an item found above it in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub item: String,
    pub ancestor: String,
    /// Aggregated weight, rounded to two decimals.
    pub weight: f64,
}

impl AssociationRule {
    pub fn new(item: &str, ancestor: &str, weight: f64) -> Self {
        Self {
            item: item.to_string(),
            ancestor: ancestor.to_string(),
            weight: round_weight(weight),
        }
    }

    /// `"item:ancestor"`
    pub fn key(&self) -> String {
        format!("{}:{}", self.item, self.ancestor)
    }

    pub fn is_cross_category(&self, prefix_length: usize) -> bool {
        category(&self.item, prefix_length) != category(&self.ancestor, prefix_length)
    }
}

pub fn round_weight(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

/// Leading `prefix_length` characters of an identifier, or all of it when shorter.
pub fn category(item: &str, prefix_length: usize) -> &str {
    match item.char_indices().nth(prefix_length) {
        Some((end, _)) => &item[..end],
        None => item,
    }
}

/// Keeps only rules linking two different categories.
pub fn filter_cross_category(
    rules: &[AssociationRule],
    prefix_length: usize,
) -> Vec<AssociationRule> {
    rules
        .iter()
        .filter(|rule| rule.is_cross_category(prefix_length))
        .cloned()
        .collect()
}

pub fn rules_to_map(rules: &[AssociationRule]) -> BTreeMap<String, f64> {
    rules.iter().map(|rule| (rule.key(), rule.weight)).collect()
}
