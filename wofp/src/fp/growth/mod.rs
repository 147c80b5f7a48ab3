pub mod builder;
pub mod mining;
pub mod pattern_base;
pub mod tree;

pub use builder::build_wofp_tree;
pub use mining::{mine_rules, wofp_algorithm, WofpResult};
pub use pattern_base::{conditional_pattern_base, ConditionalPatternBase};
pub use tree::{ItemIndex, WOFPNode, WOFPTree};
