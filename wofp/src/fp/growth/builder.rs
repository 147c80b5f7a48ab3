use super::tree::WOFPTree;
use crate::error::{Result, WofpError};
use crate::fp::frequency::{FrequencyTable, Transaction};
use log::debug;

/// Builds the weighted prefix tree.
///
/// Each transaction is projected onto the frequency table's canonical order
/// and inserted with weight `transaction_weight / total_weight`, so node
/// weights lie in `[0, 1]`.
pub fn build_wofp_tree(
    transactions: &[Transaction],
    frequency_table: &FrequencyTable,
    transaction_weights: &[f64],
) -> Result<WOFPTree> {
    if transactions.len() != transaction_weights.len() {
        return Err(WofpError::InvalidInput(format!(
            "{} transactions but {} transaction weights",
            transactions.len(),
            transaction_weights.len()
        )));
    }

    let mut wofp_tree = WOFPTree::new();
    if transactions.is_empty() {
        return Ok(wofp_tree);
    }

    if let Some((idx, weight)) = transaction_weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(WofpError::InvalidInput(format!(
            "transaction {} has weight {}, expected a non-negative number",
            idx, weight
        )));
    }

    let total_weight: f64 = transaction_weights.iter().sum();
    if !total_weight.is_finite() || total_weight <= 0.0 {
        return Err(WofpError::InvalidInput(format!(
            "total transaction weight is {} over {} transactions",
            total_weight,
            transactions.len()
        )));
    }

    for (transaction, &weight) in transactions.iter().zip(transaction_weights) {
        let projection = frequency_table.project(transaction);
        if !projection.is_empty() {
            wofp_tree.insert_transaction(&projection, weight / total_weight);
        }
    }

    debug!(
        "built tree with {} nodes over {} frequent items",
        wofp_tree.len(),
        wofp_tree.item_index.len()
    );

    Ok(wofp_tree)
}
