//! Errors
//!
//! Custom error type used throughout the `minilearn` crate.
use thiserror::Error;

/// Errors that can occur in `minilearn`.
#[derive(Debug, Error)]
pub enum MiniLearnError {
    /// The feature matrix and the target have different lengths.
    #[error("The feature matrix has {rows} rows, but the target has {targets} entries.")]
    ShapeMismatch {
        /// Number of rows of the feature matrix.
        rows: usize,
        /// Number of entries of the target.
        targets: usize,
    },
    /// A row of the feature matrix has an unexpected length.
    #[error("Row {row} has {got} features, expected {expected}.")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of features of the first row.
        expected: usize,
        /// Number of features of the offending row.
        got: usize,
    },
    /// A vector has an unexpected dimension.
    #[error("Expected a vector of dimension {expected}, got {got}.")]
    DimensionMismatch {
        /// The expected dimension.
        expected: usize,
        /// The given dimension.
        got: usize,
    },
    /// A stump refers to a feature the sample does not have.
    #[error("The stump splits on feature {feature}, but the sample has only {n_feature} features.")]
    FeatureOutOfRange {
        /// Feature index used by the stump.
        feature: usize,
        /// Number of features of the sample.
        n_feature: usize,
    },
    /// A stump is not of the form `x[feature] - threshold`.
    #[error("The stump is not a single-feature threshold stump: {0}")]
    NotFeatureStump(String),
    /// Leaves do not carry a stump.
    #[error("Leaf nodes have no stump.")]
    LeafHasNoStump,
    /// Only the first two features can be drawn on a plane.
    #[error("A split on feature {0} cannot be drawn on a 2D canvas.")]
    NotPlanarSplit(usize),
    /// A coordinate selector returned an index out of range.
    #[error("Coordinate {coordinate} is out of range for a model of dimension {dim}.")]
    CoordinateOutOfRange {
        /// The selected coordinate.
        coordinate: usize,
        /// Dimension of the model.
        dim: usize,
    },
    /// Cholesky decomposition failed.
    #[error("The covariance matrix is not symmetric positive definite.")]
    NotPositiveDefinite,
    /// First value is the name of the parameter, second is the reason.
    #[error("Invalid value passed for `{0}`: {1}.")]
    InvalidParameter(&'static str, String),
    /// The drawing backend failed.
    #[error("Unable to draw: {0}")]
    Drawing(String),
    /// Unable to serialize or deserialize a tree.
    #[error("Unable to (de)serialize the tree: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Unable to write a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A `Result` alias with [`MiniLearnError`].
pub type Result<T> = std::result::Result<T, MiniLearnError>;
