pub mod matrix;
pub mod rules;

pub use matrix::transactions_from_matrix;
pub use rules::{category, filter_cross_category, round_weight, rules_to_map, AssociationRule};
