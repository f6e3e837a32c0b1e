//! # Config Crate
//!
//! Centralized configuration constants for the OBJ transform pipeline.
//! Output formatting, default paths and numeric tolerances are defined here
//! so the parser, serializer and CLI agree on a single value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{FLOAT_PRECISION, DEFAULT_OUTPUT_PATH};
//!
//! let line = format!("v {:.*}", FLOAT_PRECISION, 1.5);
//! assert_eq!(line, "v 1.500000");
//! assert!(DEFAULT_OUTPUT_PATH.ends_with(".obj"));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Stable Output**: Default formatting never changes between releases
//! - **Validated Overrides**: Runtime overrides go through [`defaults::PipelineDefaults`]

pub mod constants;
pub mod defaults;
