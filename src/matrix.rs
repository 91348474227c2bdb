//! The adjacency matrix and its lazy construction.

use crate::order::VertexOrder;
use crate::{DirectedGraph, Error};
use log::debug;
use once_cell::sync::OnceCell;
use std::fmt;

/// A square grid of booleans stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    cells: Vec<bool>, // cell (i, j) is cells[i * size + j]
}

impl Matrix {
    /// Return the `size × size` matrix with every cell unset.
    pub fn new(size: usize) -> Self {
        Matrix {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Side length of the matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value of cell `(i, j)`.
    ///
    /// Panics if `i` or `j` is not below `self.size()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[self.offset(i, j)]
    }

    /// Set cell `(i, j)`.
    ///
    /// Panics if `i` or `j` is not below `self.size()`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize) {
        let k = self.offset(i, j);
        self.cells[k] = true
    }

    /// Row `i` as a slice of length `self.size()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(i < self.size && j < self.size);
        i * self.size + j
    }
}

/// Adjacency matrix of a directed graph.
///
/// Vertices are indexed by their position in label order. The grid itself is
/// computed on the first query or render and kept afterwards; later changes
/// to the graph are not seen.
pub struct AdjacencyMatrix<'g, G: DirectedGraph> {
    graph: &'g G,
    order: VertexOrder<G::Vertex>,
    matrix: OnceCell<Matrix>,
}

impl<'g, G: DirectedGraph> AdjacencyMatrix<'g, G> {
    /// Order the vertices of `graph`. The grid is not computed yet.
    pub fn new(graph: &'g G) -> Self {
        AdjacencyMatrix {
            graph,
            order: VertexOrder::new(graph.vertices()),
            matrix: OnceCell::new(),
        }
    }

    /// Return the grid, computing it on the first call.
    ///
    /// Fails if an edge has an endpoint that is not a vertex of the graph.
    /// A failed build leaves the matrix unbuilt.
    pub fn build(&self) -> Result<&Matrix, Error> {
        self.matrix.get_or_try_init(|| self.compute())
    }

    fn compute(&self) -> Result<Matrix, Error> {
        let n = self.order.len();
        let edges = self.graph.edges();
        debug!("building {n}x{n} adjacency matrix from {} edges", edges.len());
        let mut matrix = Matrix::new(n);
        for (from, to) in &edges {
            match (self.order.index_of(from), self.order.index_of(to)) {
                (Some(i), Some(j)) => matrix.set(i, j),
                _ => {
                    return Err(Error::DanglingEdge {
                        from: from.to_string(),
                        to: to.to_string(),
                    })
                }
            }
        }
        Ok(matrix)
    }

    /// True once the grid has been computed.
    pub fn is_built(&self) -> bool {
        self.matrix.get().is_some()
    }

    /// Return `true` if there is an edge from `v1` to `v2`.
    ///
    /// ```
    /// use adjacency_matrix::example::Graph;
    /// use adjacency_matrix::{AdjacencyMatrix, Error};
    ///
    /// let g = Graph::new(&["A", "B"], &[("A", "B")]);
    /// let m = AdjacencyMatrix::new(&g);
    /// assert_eq!(m.has_edge(&"A".into(), &"B".into()), Ok(true));
    /// assert_eq!(m.has_edge(&"B".into(), &"A".into()), Ok(false));
    /// assert!(matches!(
    ///     m.has_edge(&"A".into(), &"Z".into()),
    ///     Err(Error::UnknownVertex { .. })
    /// ));
    /// ```
    pub fn has_edge(&self, v1: &G::Vertex, v2: &G::Vertex) -> Result<bool, Error> {
        let matrix = self.build()?;
        let i = self.index(v1)?;
        let j = self.index(v2)?;
        Ok(matrix.get(i, j))
    }

    /// Targets of the edges leaving `v`, in index order.
    pub fn successors(&self, v: &G::Vertex) -> Result<Vec<&G::Vertex>, Error> {
        let matrix = self.build()?;
        let i = self.index(v)?;
        Ok(self
            .order
            .iter()
            .zip(matrix.row(i))
            .filter_map(|(w, &edge)| if edge { Some(w) } else { None })
            .collect())
    }

    /// Index of `v` in the vertex order.
    #[inline]
    pub fn index_of(&self, v: &G::Vertex) -> Option<usize> {
        self.order.index_of(v)
    }

    fn index(&self, v: &G::Vertex) -> Result<usize, Error> {
        self.order.index_of(v).ok_or_else(|| Error::UnknownVertex {
            label: v.to_string(),
        })
    }

    /// The vertex sequence; position `i` is row and column `i`.
    pub fn vertices(&self) -> &VertexOrder<G::Vertex> {
        &self.order
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the graph has no vertex.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<G> fmt::Debug for AdjacencyMatrix<'_, G>
where
    G: DirectedGraph,
    G::Vertex: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("order", &self.order)
            .field("matrix", &self.matrix.get())
            .finish()
    }
}
