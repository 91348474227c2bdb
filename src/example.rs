//! Structure used in doc examples
use crate::DirectedGraph;

/// Simple directed graph as a vertex list and an edge list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<String>,
    edges: Vec<(String, String)>,
}

impl Graph {
    /// Create a graph on `vertices` with the directed edges in `edges`
    ///
    /// Edges are not checked against the vertex list.
    pub fn new(vertices: &[&str], edges: &[(&str, &str)]) -> Self {
        Graph {
            vertices: vertices.iter().map(|&v| v.to_owned()).collect(),
            edges: edges
                .iter()
                .map(|&(u, v)| (u.to_owned(), v.to_owned()))
                .collect(),
        }
    }

    /// Add the edge `u -> v`
    pub fn add_edge(&mut self, u: &str, v: &str) {
        self.edges.push((u.to_owned(), v.to_owned()))
    }
}

impl DirectedGraph for Graph {
    type Vertex = String;
    fn vertices(&self) -> Vec<String> {
        self.vertices.clone()
    }
    fn edges(&self) -> Vec<(String, String)> {
        self.edges.clone()
    }
}
