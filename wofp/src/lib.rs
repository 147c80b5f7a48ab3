//! Weighted Ordered FP-Tree mining.
//!
//! Given annotation transactions (sets of ontology term identifiers) and a
//! weight per term, builds a weighted prefix tree, derives a conditional
//! pattern base per term and extracts weighted term/ancestor association
//! rules, optionally restricted to pairs from different ontologies.
//!
//! ```rust
//! use std::collections::HashMap;
//! use wofp::config::WofpConfig;
//! use wofp::fp::{rules_to_map, wofp_algorithm};
//!
//! let transactions: Vec<Vec<String>> = vec![
//!     vec!["GO1".into(), "R-1".into()],
//!     vec!["GO1".into(), "R-1".into()],
//!     vec!["R-1".into()],
//! ];
//! let weights: HashMap<String, f64> =
//!     [("GO1".to_string(), 1.0), ("R-1".to_string(), 1.0)].into_iter().collect();
//!
//! let result = wofp_algorithm(&transactions, &weights, &WofpConfig::default()).unwrap();
//! assert_eq!(rules_to_map(&result.cross_category_rules)["GO1:R-1"], 0.67);
//! ```

pub mod config;
pub mod error;
pub mod fp;

#[cfg(feature = "python")]
mod python;

pub use config::WofpConfig;
pub use error::{Result, WofpError};
