//! Errors returned by adjacency matrix operations.

use std::fmt;
use thiserror::Error;

/// Failure of a query, build or render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A queried vertex does not belong to the graph the matrix was made from.
    #[error("vertex `{label}` is not a vertex of the graph")]
    UnknownVertex {
        /// Label of the offending vertex.
        label: String,
    },
    /// An edge of the graph has an endpoint missing from its vertex set.
    #[error("edge `{from}` -> `{to}` has an endpoint outside the vertex set")]
    DanglingEdge {
        /// Label of the source vertex.
        from: String,
        /// Label of the target vertex.
        to: String,
    },
    /// The output buffer refused a write.
    #[error("failed to write the rendered matrix")]
    Fmt(#[from] fmt::Error),
}
