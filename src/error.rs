//! # Error types
//! Unified error enum for the flow-field engine.
//!
//! Configuration errors, index errors, unimplemented features and snapshot
//! format errors are kept as distinct variants so callers can tell a failed
//! validation apart from a feature that does not exist yet.
use thiserror::Error;

/// Result type alias used throughout the crate
pub type SwirlResult<T> = Result<T, SwirlError>;

/// Errors raised by the flow-field engine
#[derive(Error, Debug)]
pub enum SwirlError {
    /// Invalid or missing input parameters
    #[error("Configuration error: {message}")]
    Config {
        /// What was invalid
        message: String,
    },

    /// Inlet shape tag not understood
    #[error("Unsupported inlet shape '{shape}' (supported: rect, circle)")]
    UnsupportedShape {
        /// The offending tag
        shape: String,
    },

    /// Vortex model tag not understood
    #[error("Unsupported vortex model '{model}' (supported: iso, lo, solid)")]
    UnsupportedModel {
        /// The offending tag
        model: String,
    },

    /// Parallel arrays of differing length
    #[error("Size mismatch for {name}: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Name of the offending input
        name: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Vortex lookup past the end of the registry
    #[error("Index {index} is out of bounds of vortex list with size {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Registry length
        len: usize,
    },

    /// Query on a field that has not been computed yet
    #[error("{what} has not been computed yet")]
    NotComputed {
        /// Name of the missing field
        what: &'static str,
    },

    /// Feature exists in the design but not in the implementation
    #[error("{feature} has not been implemented")]
    NotImplemented {
        /// The missing feature
        feature: &'static str,
    },

    /// Persisted snapshot missing a required dataset
    #[error("Snapshot missing dataset '{missing}', expected keys {expected:?}")]
    SnapshotFormat {
        /// Key absent from the archive
        missing: String,
        /// Full required key set
        expected: &'static [&'static str],
    },

    /// Error from the hdf5 layer
    #[error("hdf5 error: {0}")]
    Hdf5(#[from] hdf5::Error),
}

impl SwirlError {
    /// Configuration error from a message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Unsupported inlet shape tag
    pub fn unsupported_shape(shape: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            shape: shape.into(),
        }
    }

    /// Unsupported vortex model tag
    pub fn unsupported_model(model: impl Into<String>) -> Self {
        Self::UnsupportedModel {
            model: model.into(),
        }
    }

    /// Length mismatch between parallel input arrays
    pub fn size_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// Check that two lengths agree
    pub fn check_size(name: &'static str, expected: usize, actual: usize) -> SwirlResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::size_mismatch(name, expected, actual))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_expected_keys() {
        let err = SwirlError::SnapshotFormat {
            missing: "rho".into(),
            expected: &["velGrids", "rho", "pressure", "swirl"],
        };
        let msg = err.to_string();
        assert!(msg.contains("rho"));
        assert!(msg.contains("velGrids"));
    }

    #[test]
    fn check_size() {
        assert!(SwirlError::check_size("strengths", 3, 3).is_ok());
        assert!(SwirlError::check_size("strengths", 3, 2).is_err());
    }

    #[test]
    fn out_of_bounds_message() {
        let err = SwirlError::IndexOutOfBounds { index: 4, len: 2 };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('2'));
    }
}
