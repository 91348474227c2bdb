//! Adjacency matrices of directed graphs.
//!
//! Vertices are sorted by label (their `Display` output), which fixes the
//! index of each vertex. The boolean matrix is computed on first use and
//! then answers edge queries in constant time. It can also be dumped as a
//! fixed-width text table for diagnostics.
//!
//!```
//!use adjacency_matrix::{AdjacencyMatrix, DirectedGraph};
//!
//!// Graph given by its vertex and edge lists
//!struct Flow {
//!    tasks: Vec<&'static str>,
//!    arcs: Vec<(&'static str, &'static str)>,
//!}
//!
//!// The DirectedGraph trait exposes the graph to the matrix
//!impl DirectedGraph for Flow {
//!    type Vertex = &'static str;
//!    fn vertices(&self) -> Vec<&'static str> {
//!        self.tasks.clone()
//!    }
//!    fn edges(&self) -> Vec<(&'static str, &'static str)> {
//!        self.arcs.clone()
//!    }
//!}
//!
//!let flow = Flow {
//!    tasks: vec!["review", "draft", "publish"],
//!    arcs: vec![("draft", "review"), ("review", "publish")],
//!};
//!let m = AdjacencyMatrix::new(&flow);
//!
//!// draft = 0, publish = 1, review = 2
//!assert_eq!(m.index_of(&"review"), Some(2));
//!assert_eq!(m.has_edge(&"draft", &"review"), Ok(true));
//!assert_eq!(m.has_edge(&"draft", &"publish"), Ok(false));
//!
//!let text = m.render_captioned(7).unwrap();
//!assert!(text.contains(" 7. Adjacency matrix\n"));
//!assert!(text.contains("\n0   -   -   +   0   \n"));
//!```

#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    unused_labels,
    unused_results
)]

mod error;
pub mod example;
mod matrix;
mod order;
mod render;

pub use crate::error::Error;
pub use crate::matrix::{AdjacencyMatrix, Matrix};
pub use crate::order::VertexOrder;
pub use crate::render::Style;

use std::fmt::Display;
use std::hash::Hash;

/// Directed graphs whose adjacency matrix can be taken.
///
/// The matrix only reads the graph, through these two lists.
pub trait DirectedGraph {
    /// Vertex type, compared by value.
    ///
    /// The `Display` output of a vertex is its label: vertices are sorted
    /// by label and rendered with it.
    type Vertex: Clone + Eq + Hash + Display;

    /// Returns the vertices of the graph.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Returns the edges of the graph as `(source, target)` pairs.
    ///
    /// Both endpoints of every edge must be among `self.vertices()`.
    /// Self-loops are allowed.
    fn edges(&self) -> Vec<(Self::Vertex, Self::Vertex)>;
}
