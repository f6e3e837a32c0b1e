//! # Configuration Constants
//!
//! Centralized constants for the OBJ transform pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Output**: Header text, section titles and number formatting
//! - **Defaults**: Values used when the caller supplies nothing
//! - **Topology**: Limits for polygon reconstruction

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-12));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Largest number of digits after the decimal point a writer may request.
///
/// `f64` carries 15-17 significant decimal digits; anything beyond this
/// only prints noise.
pub const MAX_FLOAT_PRECISION: usize = 17;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Number of digits written after the decimal point for every coordinate.
///
/// Same digit count as the C `%f` conversion.
///
/// # Example
///
/// ```rust
/// use config::constants::FLOAT_PRECISION;
///
/// assert_eq!(format!("{:.*}", FLOAT_PRECISION, 0.25), "0.250000");
/// ```
pub const FLOAT_PRECISION: usize = 6;

/// First line of every written file.
pub const OUTPUT_HEADER: &str = "# Parsed .obj file";

/// Title comment preceding the vertex records.
pub const VERTICES_TITLE: &str = "# Vertices";

/// Title comment preceding the texture coordinate records.
pub const TEX_COORDS_TITLE: &str = "# Texture Coordinates";

/// Title comment preceding the normal records.
pub const NORMALS_TITLE: &str = "# Normals";

/// Title comment preceding the face records.
pub const FACES_TITLE: &str = "# Faces";

/// Title comment preceding the line segment records.
pub const LINES_TITLE: &str = "# Lines";

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Output path used when the caller does not name one.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_OUTPUT_PATH;
///
/// let requested: Option<&str> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_OUTPUT_PATH), "parsed_model.obj");
/// ```
pub const DEFAULT_OUTPUT_PATH: &str = "parsed_model.obj";

/// Uniform scale factor that leaves a model untouched.
pub const DEFAULT_SCALE: f64 = 1.0;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Smallest vertex loop kept as a face during line reconstruction.
///
/// Loops of one or two vertices have no area and are discarded.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_LOOP_VERTICES;
///
/// let loop_len = 2;
/// assert!(loop_len < MIN_LOOP_VERTICES);
/// ```
pub const MIN_LOOP_VERTICES: usize = 3;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-12));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true when `factor` is exactly the identity scale.
///
/// The comparison is exact, so `1.0 + f64::EPSILON` still counts as a scale.
///
/// # Example
///
/// ```rust
/// use config::constants::is_identity_scale;
///
/// assert!(is_identity_scale(1.0));
/// assert!(!is_identity_scale(1.0 + 1e-12));
/// ```
#[inline]
pub fn is_identity_scale(factor: f64) -> bool {
    factor == DEFAULT_SCALE
}
