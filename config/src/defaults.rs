//! Validated runtime overrides for the output stage.
//!
//! Constants in [`crate::constants`] are the defaults; callers that want to
//! override them build a [`PipelineDefaults`] so bad values are rejected once,
//! up front, instead of deep inside the writer.

use std::fmt;

use crate::constants::{DEFAULT_OUTPUT_PATH, FLOAT_PRECISION, MAX_FLOAT_PRECISION};

/// Immutable snapshot of output settings shared between the CLI and the
/// core library.
///
/// # Examples
/// ```
/// use config::defaults::PipelineDefaults;
/// let defaults = PipelineDefaults::default();
/// assert_eq!(defaults.precision, 6);
/// assert_eq!(defaults.output_path, "parsed_model.obj");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineDefaults {
    /// Digits written after the decimal point.
    pub precision: usize,
    /// Path written when the caller supplies none.
    pub output_path: String,
}

impl PipelineDefaults {
    /// Builds a configuration enforcing strict validation of the supplied
    /// precision and output path.
    ///
    /// # Examples
    /// ```
    /// use config::defaults::PipelineDefaults;
    /// let cfg = PipelineDefaults::new(4, "out.obj").expect("valid config");
    /// assert_eq!(cfg.precision, 4);
    /// assert!(PipelineDefaults::new(4, "  ").is_err());
    /// ```
    pub fn new(precision: usize, output_path: impl Into<String>) -> Result<Self, ConfigError> {
        if precision > MAX_FLOAT_PRECISION {
            return Err(ConfigError::InvalidPrecision(precision));
        }
        let output_path = output_path.into();
        if output_path.trim().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }
        Ok(Self {
            precision,
            output_path,
        })
    }
}

impl Default for PipelineDefaults {
    fn default() -> Self {
        Self {
            precision: FLOAT_PRECISION,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when more decimal digits are requested than `f64` can carry.
    InvalidPrecision(usize),
    /// Raised when the output path is empty or whitespace.
    EmptyOutputPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrecision(value) => {
                write!(f, "precision must be <= {MAX_FLOAT_PRECISION}: {value}")
            }
            ConfigError::EmptyOutputPath => write!(f, "output path must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
