//! Sorted sequence of vertices and the index assigned to each.

use log::trace;
use std::collections::hash_map::Entry::Vacant;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// The vertices of a graph sorted by label.
///
/// Position `i` in the sequence is the row and column `i` of the matrix.
#[derive(Clone, Debug)]
pub struct VertexOrder<V> {
    elems: Vec<V>,            // vertices in index order
    index: HashMap<V, usize>, // elems[index[v]] == v
}

impl<V> VertexOrder<V>
where
    V: Clone + Eq + Hash + Display,
{
    /// Sort `vertices` by label, ascending and case-sensitive.
    ///
    /// The sort is stable: vertices sharing a label keep their input order.
    pub fn new(vertices: Vec<V>) -> Self {
        let mut keyed: Vec<(String, V)> = vertices
            .into_iter()
            .map(|v| (v.to_string(), v))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        let elems: Vec<V> = keyed.into_iter().map(|(_, v)| v).collect();
        let mut index = HashMap::with_capacity(elems.len());
        for (i, v) in elems.iter().enumerate() {
            // keep the first position of a repeated vertex
            if let Vacant(entry) = index.entry(v.clone()) {
                let _ = entry.insert(i);
            }
        }
        trace!("ordered {} vertices", elems.len());
        VertexOrder { elems, index }
    }
}

impl<V: Eq + Hash> VertexOrder<V> {
    /// Index of `v`, or `None` if it is not in the sequence.
    #[inline]
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// The vertex at index `i`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Option<&V> {
        self.elems.get(i)
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// True if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Vertices in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.elems.iter()
    }

    /// Vertices in index order, as a slice.
    pub fn as_slice(&self) -> &[V] {
        &self.elems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic() {
        let order = VertexOrder::new(vec!["B", "A", "C"]);
        assert_eq!(order.as_slice(), &["A", "B", "C"]);
        assert_eq!(order.index_of(&"A"), Some(0));
        assert_eq!(order.index_of(&"B"), Some(1));
        assert_eq!(order.index_of(&"C"), Some(2));
        assert_eq!(order.index_of(&"D"), None);
    }

    #[test]
    fn case_sensitive() {
        let order = VertexOrder::new(vec!["b", "B", "a", "A"]);
        assert_eq!(order.as_slice(), &["A", "B", "a", "b"]);
    }

    #[test]
    fn not_numeric() {
        let order = VertexOrder::new(vec![10, 9, 1]);
        assert_eq!(order.as_slice(), &[1, 10, 9]);
    }

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Tagged(&'static str, u8);

    impl Display for Tagged {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    #[test]
    fn equal_labels_keep_input_order() {
        let order = VertexOrder::new(vec![Tagged("x", 2), Tagged("a", 0), Tagged("x", 1)]);
        assert_eq!(
            order.as_slice(),
            &[Tagged("a", 0), Tagged("x", 2), Tagged("x", 1)]
        );
        assert_eq!(order.index_of(&Tagged("x", 1)), Some(2));
    }

    #[test]
    fn repeated_vertex_first_index() {
        let order = VertexOrder::new(vec!["a", "b", "a"]);
        assert_eq!(order.len(), 3);
        assert_eq!(order.index_of(&"a"), Some(0));
        assert_eq!(order.index_of(&"b"), Some(2));
    }

    #[test]
    fn empty() {
        let order: VertexOrder<String> = VertexOrder::new(Vec::new());
        assert!(order.is_empty());
        assert_eq!(order.vertex(0), None);
    }
}
