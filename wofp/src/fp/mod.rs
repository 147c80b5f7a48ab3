pub mod export;
pub mod frequency;
pub mod growth;
pub mod utils;

pub use export::{write_frequency_table_tsv, write_rules_tsv};
pub use frequency::{build_frequency_table, FrequencyTable, FrequentItem, Transaction};
pub use growth::{
    build_wofp_tree, conditional_pattern_base, mine_rules, wofp_algorithm, ConditionalPatternBase,
    ItemIndex, WOFPNode, WOFPTree, WofpResult,
};
pub use utils::{filter_cross_category, rules_to_map, transactions_from_matrix, AssociationRule};

#[cfg(test)]
mod tests;
