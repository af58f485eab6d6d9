use std::fmt;

/// The guarded mutator that refused an operation.
///
/// Carried as context on [`GraphError::InvalidOperation`]; it is not a
/// separate error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphOperation {
    RemoveVertex,
    AddEdge,
    RemoveEdge,
}

impl fmt::Display for GraphOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphOperation::RemoveVertex => "remove vertex",
            GraphOperation::AddEdge => "add edge",
            GraphOperation::RemoveEdge => "remove edge",
        };
        f.write_str(name)
    }
}

/// Errors raised by graph mutators when their precondition does not hold.
///
/// A failed operation leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("cannot {operation} {target}")]
    InvalidOperation {
        operation: GraphOperation,
        /// Debug rendering of the vertex or edge the caller passed.
        target: String,
    },
}

impl GraphError {
    /// Build an `InvalidOperation` for `target`, rendered with `Debug`.
    pub fn invalid(operation: GraphOperation, target: &impl fmt::Debug) -> Self {
        GraphError::InvalidOperation {
            operation,
            target: format!("{target:?}"),
        }
    }

    /// The mutator that refused.
    pub fn operation(&self) -> GraphOperation {
        match self {
            GraphError::InvalidOperation { operation, .. } => *operation,
        }
    }
}
