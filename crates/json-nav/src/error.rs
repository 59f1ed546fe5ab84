use json_nav_pointer::PointerError;
use thiserror::Error;

use crate::kind::{ContainerKind, NodeKind};
use crate::options::OverwriteMode;

/// Coarse classification of a [`WithError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The call does not fit the node it was made on.
    UsageMismatch,
    /// An occupied slot could not be replaced under the active mode.
    OverwritePolicyViolation,
    /// The pointer expression did not compile.
    InvalidPointer,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WithError {
    #[error("can only call `{method}()` with an empty JSON Pointer on a `{expected}` node, not `{actual}`")]
    EmptyPathMismatch {
        method: &'static str,
        expected: ContainerKind,
        actual: NodeKind,
    },
    #[error("cannot replace context node (of type `{actual}`) using `{method}()` with JSON Pointer \"{pointer}\"")]
    ContextMismatch {
        method: &'static str,
        pointer: String,
        actual: NodeKind,
    },
    #[error("`{method}()` is only supported on `Object` nodes, not `{actual}`")]
    NotAnObject {
        method: &'static str,
        actual: NodeKind,
    },
    #[error("cannot replace node of type `{existing}` at \"{at}\" in JSON Pointer \"{pointer}\" (mode `OverwriteMode::{mode:?}`)")]
    OverwriteForbidden {
        existing: NodeKind,
        /// Pointer prefix ending at the slot that was refused.
        at: String,
        pointer: String,
        mode: OverwriteMode,
    },
    #[error(transparent)]
    Pointer(#[from] PointerError),
}

impl WithError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WithError::EmptyPathMismatch { .. }
            | WithError::ContextMismatch { .. }
            | WithError::NotAnObject { .. } => ErrorKind::UsageMismatch,
            WithError::OverwriteForbidden { .. } => ErrorKind::OverwritePolicyViolation,
            WithError::Pointer(_) => ErrorKind::InvalidPointer,
        }
    }
}
