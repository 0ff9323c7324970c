use serde::{Deserialize, Serialize};

/// Broad classification of validation failures, shared by every error type
/// in the crate so callers can route them without matching each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Structurally unusable input: too few points, unclosed ring, dangling ids.
    MalformedInput,
    /// Well-formed input describing an inadmissible shape.
    GeometricInvalid,
    /// An id that should resolve against external data did not.
    ReferenceNotFound,
}
