//! Defines some common items used in this library.

/// Defines the error type of this crate.
pub mod error;

/// Defines the default parameters.
pub mod constants;

/// Defines some checker functions.
pub(crate) mod checker;

/// Defines some small vector operations.
pub(crate) mod utils;

pub use error::{MiniLearnError, Result};
