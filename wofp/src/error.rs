use thiserror::Error;

/// Errors raised while mining weighted association rules.
///
/// Every variant is fatal for the run that produced it: no partially built
/// frequency table, tree or rule set is ever handed back alongside one.
#[derive(Error, Debug)]
pub enum WofpError {
    /// An item of some transaction has no entry in the weight map
    #[error("Missing weight for item '{item}'")]
    MissingWeight { item: String },
    /// A threshold or prefix length lies outside its valid range
    #[error("Invalid threshold: {name} = {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
    /// Degenerate input (zero total weight, bad weight values, malformed matrix)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Writing a tabular export failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WofpError>;
