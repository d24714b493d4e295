//! Error types for composition.

use thiserror::Error;

use crate::geometry::Resolution;

/// Errors that can occur while reducing layers to one output buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A layer covers a different plane than the first layer.
    #[error("layer {index} resolution mismatch: expected {expected}, got {actual}")]
    ResolutionMismatch {
        index: usize,
        expected: Resolution,
        actual: Resolution,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_mismatch_display() {
        let err = ComposeError::ResolutionMismatch {
            index: 2,
            expected: Resolution::new(512, 512),
            actual: Resolution::new(512, 256),
        };
        assert_eq!(
            err.to_string(),
            "layer 2 resolution mismatch: expected 512×512, got 512×256"
        );
    }
}
