//! Result type alias for sidediff operations.

use super::sidediff_error::SidediffError;

/// Type alias for Results using SidediffError.
pub type SidediffResult<T> = Result<T, SidediffError>;
