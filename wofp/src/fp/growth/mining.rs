use super::builder::build_wofp_tree;
use super::pattern_base::conditional_pattern_base;
use super::tree::WOFPTree;
use crate::config::{validate_min_weight, WofpConfig};
use crate::error::Result;
use crate::fp::frequency::{build_frequency_table, FrequencyTable, Transaction};
use crate::fp::utils::{filter_cross_category, AssociationRule};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::HashMap;

/// Everything one run produces, in dependency order.
#[derive(Debug, Clone)]
pub struct WofpResult {
    pub frequency_table: FrequencyTable,
    /// One weight per input transaction, aligned with the input order.
    pub transaction_weights: Vec<f64>,
    pub tree: WOFPTree,
    pub rules: Vec<AssociationRule>,
    pub cross_category_rules: Vec<AssociationRule>,
}

/// Runs the whole pipeline: frequency table, tree, rule mining and the
/// cross-category filter.
pub fn wofp_algorithm(
    transactions: &[Transaction],
    weights: &HashMap<String, f64>,
    config: &WofpConfig,
) -> Result<WofpResult> {
    config.validate()?;

    let (frequency_table, transaction_weights) =
        build_frequency_table(transactions, weights, config.min_support)?;
    let tree = build_wofp_tree(transactions, &frequency_table, &transaction_weights)?;
    let rules = mine_rules(&tree, &frequency_table, config.min_weight)?;
    let cross_category_rules = filter_cross_category(&rules, config.category_prefix_length);

    info!(
        "mined {} transactions: {} frequent items, {} nodes, {} rules ({} cross-category)",
        transactions.len(),
        frequency_table.len(),
        tree.len(),
        rules.len(),
        cross_category_rules.len()
    );

    Ok(WofpResult {
        frequency_table,
        transaction_weights,
        tree,
        rules,
        cross_category_rules,
    })
}

/// Emits `item -> ancestor` rules whose conditional weight strictly exceeds
/// `min_weight`.
///
/// The top-ranked item is never mined: it sits directly under the root.
/// Rules come out in canonical order of the item, then of the ancestor.
pub fn mine_rules(
    tree: &WOFPTree,
    frequency_table: &FrequencyTable,
    min_weight: f64,
) -> Result<Vec<AssociationRule>> {
    validate_min_weight(min_weight)?;
    if frequency_table.len() < 2 {
        return Ok(Vec::new());
    }

    let per_item: Vec<Vec<AssociationRule>> = (1..frequency_table.len())
        .into_par_iter()
        .map(|rank| {
            let base = conditional_pattern_base(rank, tree);
            let mut item_rules = Vec::new();

            for (ancestor, weight) in base.sorted() {
                // Threshold at full precision, round afterwards.
                if weight > min_weight {
                    if let (Some(item_label), Some(ancestor_label)) =
                        (frequency_table.item(rank), frequency_table.item(ancestor))
                    {
                        item_rules.push(AssociationRule::new(item_label, ancestor_label, weight));
                    }
                }
            }

            debug!(
                "item rank {}: {} ancestors, {} rules",
                rank,
                base.len(),
                item_rules.len()
            );
            item_rules
        })
        .collect();

    Ok(per_item.into_iter().flatten().collect())
}
