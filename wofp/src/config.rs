use crate::error::{Result, WofpError};

/// Thresholds for one mining run.
///
/// ```rust
/// use wofp::config::WofpConfig;
///
/// let config = WofpConfig::new(0.25, 0.2).with_prefix_length(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WofpConfig {
    /// Items must be contained in strictly more than this fraction of
    /// transactions to enter the tree. Valid range: `(0, 1]`.
    pub min_support: f64,

    /// Rules are emitted when their aggregated weight strictly exceeds this
    /// value. Valid range: `[0, 1)`.
    pub min_weight: f64,

    /// Number of leading characters of an identifier naming its category
    /// (`GO`, `HP`, `R-`, ...).
    pub category_prefix_length: usize,
}

impl Default for WofpConfig {
    fn default() -> Self {
        Self {
            min_support: 0.25,
            min_weight: 0.2,
            category_prefix_length: 2,
        }
    }
}

impl WofpConfig {
    pub fn new(min_support: f64, min_weight: f64) -> Self {
        Self {
            min_support,
            min_weight,
            ..Default::default()
        }
    }

    pub fn with_prefix_length(mut self, prefix_length: usize) -> Self {
        self.category_prefix_length = prefix_length;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_min_support(self.min_support)?;
        validate_min_weight(self.min_weight)?;
        if self.category_prefix_length == 0 {
            return Err(WofpError::InvalidThreshold {
                name: "category_prefix_length",
                value: 0.0,
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_min_support(min_support: f64) -> Result<()> {
    // NaN fails both comparisons
    if min_support > 0.0 && min_support <= 1.0 {
        Ok(())
    } else {
        Err(WofpError::InvalidThreshold {
            name: "min_support",
            value: min_support,
        })
    }
}

pub(crate) fn validate_min_weight(min_weight: f64) -> Result<()> {
    if (0.0..1.0).contains(&min_weight) {
        Ok(())
    } else {
        Err(WofpError::InvalidThreshold {
            name: "min_weight",
            value: min_weight,
        })
    }
}
