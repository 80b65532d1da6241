//!
//! Undirected graph stored as a vertex set and a canonical edge set
//!
//! An edge {u, v} is kept as the ordered pair with the smaller label first,
//! so edge membership is a single sorted-set lookup. Graphs are immutable
//! once constructed.
//!
use crate::common::VertexId;
use std::collections::BTreeSet;
use thiserror::Error;

/// canonical form of the undirected edge {u, v}: smaller label first
pub fn canonical_edge<V: Ord>(u: V, v: V) -> (V, V) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

///
/// invalid graph structure detected at construction
///
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("self-loop edge on vertex {0}")]
    SelfLoop(String),
}

/// Undirected graph: vertex set plus canonical edge set.
///
/// Both sets are sorted, so iteration (and therefore serialization) order is
/// deterministic. Every edge endpoint is inserted into the vertex set at
/// construction time, which keeps the endpoint-membership invariant true by
/// construction. Self-loops are rejected; duplicate edges collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: VertexId> {
    vertices: BTreeSet<V>,
    edges: BTreeSet<(V, V)>,
}

impl<V: VertexId> Graph<V> {
    /// Build a graph from explicit vertices and an edge list.
    ///
    /// Vertices appearing only as edge endpoints are added to the vertex
    /// set; explicit vertices without edges stay as isolated vertices.
    pub fn from_parts<VS, ES>(vertices: VS, edges: ES) -> Result<Self, GraphError>
    where
        VS: IntoIterator<Item = V>,
        ES: IntoIterator<Item = (V, V)>,
    {
        let mut vs: BTreeSet<V> = vertices.into_iter().collect();
        let mut es: BTreeSet<(V, V)> = BTreeSet::new();
        for (u, v) in edges {
            if u == v {
                return Err(GraphError::SelfLoop(u.to_string()));
            }
            vs.insert(u.clone());
            vs.insert(v.clone());
            es.insert(canonical_edge(u, v));
        }
        Ok(Graph {
            vertices: vs,
            edges: es,
        })
    }

    /// Build a graph whose vertex set is the union of the edge endpoints.
    pub fn from_edges<ES>(edges: ES) -> Result<Self, GraphError>
    where
        ES: IntoIterator<Item = (V, V)>,
    {
        Self::from_parts(std::iter::empty(), edges)
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// membership of the undirected edge {u, v}
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        if u == v {
            return false;
        }
        self.edges.contains(&canonical_edge(u.clone(), v.clone()))
    }

    /// vertices in ascending label order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// canonical edges in ascending order
    pub fn edges(&self) -> impl Iterator<Item = &(V, V)> + '_ {
        self.edges.iter()
    }

    /// union of the vertex sets and of the edge sets
    pub fn union(&self, other: &Graph<V>) -> Graph<V> {
        Graph {
            vertices: self
                .vertices
                .iter()
                .chain(other.vertices.iter())
                .cloned()
                .collect(),
            edges: self
                .edges
                .iter()
                .chain(other.edges.iter())
                .cloned()
                .collect(),
        }
    }

    /// Relabel every vertex through `f`.
    ///
    /// `f` must be injective on the vertex set, otherwise distinct vertices
    /// would collapse and the edge set would no longer match the original.
    pub fn relabel<W, F>(&self, f: F) -> Graph<W>
    where
        W: VertexId,
        F: Fn(&V) -> W,
    {
        let vertices: BTreeSet<W> = self.vertices.iter().map(|v| f(v)).collect();
        assert_eq!(
            vertices.len(),
            self.vertices.len(),
            "relabel function must be injective on the vertex set"
        );
        let edges: BTreeSet<(W, W)> = self
            .edges
            .iter()
            .map(|(u, v)| canonical_edge(f(u), f(v)))
            .collect();
        Graph { vertices, edges }
    }

    /// edge-list text format, with a leading count comment
    ///
    /// ```text
    /// # graph with 3 vertices and 2 edges
    /// a b
    /// b c
    /// ```
    pub fn to_edge_list_writer<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(
            writer,
            "# graph with {} vertices and {} edges",
            self.n_vertices(),
            self.n_edges()
        )?;
        for (u, v) in self.edges.iter() {
            writeln!(writer, "{} {}", u, v)?;
        }
        Ok(())
    }

    ///
    /// create edge-list string with `to_edge_list_writer`
    ///
    pub fn to_edge_list_string(&self) -> String {
        let mut writer = Vec::with_capacity(128);
        self.to_edge_list_writer(&mut writer).unwrap();
        String::from_utf8(writer).unwrap()
    }

    ///
    /// create edge-list file with `to_edge_list_writer`
    ///
    pub fn to_edge_list_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.to_edge_list_writer(file)
    }
}

//
// tests
//
