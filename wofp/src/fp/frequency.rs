use crate::config::validate_min_support;
use crate::error::{Result, WofpError};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// One annotated entity: the set of item identifiers attached to it.
pub type Transaction = Vec<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItem {
    pub item: String,
    pub support: f64,
}

/// Items kept by the support filter, in canonical order.
///
/// The position of an item in this table is its rank, and ranks are the item
/// labels stored in the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    items: Vec<FrequentItem>,
    ranks: HashMap<String, usize>,
}

impl FrequencyTable {
    fn from_sorted(items: Vec<FrequentItem>) -> Self {
        let ranks = items
            .iter()
            .enumerate()
            .map(|(rank, entry)| (entry.item.clone(), rank))
            .collect();
        Self { items, ranks }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[FrequentItem] {
        &self.items
    }

    pub fn item(&self, rank: usize) -> Option<&str> {
        self.items.get(rank).map(|entry| entry.item.as_str())
    }

    pub fn rank(&self, item: &str) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn support(&self, item: &str) -> Option<f64> {
        self.rank(item).map(|rank| self.items[rank].support)
    }

    /// Reduces a transaction to its kept items, sorted by rank.
    pub fn project(&self, transaction: &[String]) -> Vec<usize> {
        let mut ranks: Vec<usize> = transaction
            .iter()
            .filter_map(|item| self.rank(item))
            .collect();
        ranks.sort_unstable();
        ranks.dedup();
        ranks
    }
}

fn distinct_items(transaction: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(transaction.len());
    transaction
        .iter()
        .map(String::as_str)
        .filter(|item| seen.insert(*item))
        .collect()
}

fn check_weights(transactions: &[Transaction], weights: &HashMap<String, f64>) -> Result<()> {
    for transaction in transactions {
        for item in transaction {
            match weights.get(item) {
                None => {
                    return Err(WofpError::MissingWeight { item: item.clone() });
                }
                Some(&w) if !w.is_finite() || w < 0.0 => {
                    return Err(WofpError::InvalidInput(format!(
                        "weight of '{}' must be a non-negative number, got {}",
                        item, w
                    )));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

/// Mean weight of the distinct items of a transaction; an empty transaction weighs 0.
fn transaction_weight(transaction: &[String], weights: &HashMap<String, f64>) -> f64 {
    let items = distinct_items(transaction);
    if items.is_empty() {
        return 0.0;
    }
    // Divide before summing so the mean stays finite for finite weights.
    let len = items.len() as f64;
    items.iter().map(|item| weights[*item] / len).sum()
}

/// Counts supports, computes per-transaction weights and ranks the items
/// whose support is strictly above `min_support`.
///
/// Returns the frequency table together with one weight per input
/// transaction, aligned with the input order.
pub fn build_frequency_table(
    transactions: &[Transaction],
    weights: &HashMap<String, f64>,
    min_support: f64,
) -> Result<(FrequencyTable, Vec<f64>)> {
    validate_min_support(min_support)?;
    if transactions.is_empty() {
        return Ok((FrequencyTable::default(), Vec::new()));
    }
    check_weights(transactions, weights)?;

    let transaction_weights: Vec<f64> = transactions
        .par_iter()
        .map(|transaction| transaction_weight(transaction, weights))
        .collect();

    let item_counts: HashMap<&str, usize> = transactions
        .par_iter()
        .fold(HashMap::new, |mut counts, transaction| {
            for item in distinct_items(transaction) {
                *counts.entry(item).or_insert(0) += 1;
            }
            counts
        })
        .reduce(HashMap::new, |mut left, right| {
            for (item, count) in right {
                *left.entry(item).or_insert(0) += count;
            }
            left
        });

    let num_transactions = transactions.len() as f64;
    let mut frequent: Vec<(&str, usize)> = item_counts
        .into_iter()
        .filter(|&(_, count)| count as f64 / num_transactions > min_support)
        .collect();

    // Equal counts mean equal supports, so ties fall through to the identifier.
    frequent.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let items: Vec<FrequentItem> = frequent
        .into_iter()
        .map(|(item, count)| FrequentItem {
            item: item.to_string(),
            support: count as f64 / num_transactions,
        })
        .collect();

    if items.is_empty() {
        warn!(
            "no item has support above {} across {} transactions",
            min_support,
            transactions.len()
        );
    }
    debug!(
        "frequency table: {} transactions, {} frequent items",
        transactions.len(),
        items.len()
    );

    Ok((FrequencyTable::from_sorted(items), transaction_weights))
}
