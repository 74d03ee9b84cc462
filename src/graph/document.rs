//! JSON description of a graph.
//!
//! A document names the graph either as a matrix or as an edge list, and may
//! carry its own limits:
//!
//! ```json
//! { "matrix": [[0, 1], [0, 0]] }
//! { "vertices": 4, "edges": [[0, 1], [0, 2], [1, 3], [2, 3]] }
//! { "edges": [[0, 1]], "config": { "queue_capacity": 8 } }
//! ```
//!
//! Matrix cells may be booleans or numbers; non-zero numbers are edges.

use serde::{Deserialize, Serialize};

use crate::config::TraversalConfig;
use crate::error::{MalformedInput, Result};
use crate::graph::matrix::EdgeCell;
use crate::graph::AdjacencyMatrix;
use crate::GhostToken;

/// A single matrix entry as written in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatrixCell {
    /// `true` / `false`.
    Bool(bool),
    /// Any number; non-zero is an edge.
    Number(f64),
}

impl EdgeCell for MatrixCell {
    fn is_edge(&self) -> bool {
        match self {
            Self::Bool(b) => b.is_edge(),
            Self::Number(n) => n.is_edge(),
        }
    }
}

/// A serializable graph description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    /// Vertex count. Required for edge lists with isolated trailing vertices;
    /// must agree with the row count when a matrix is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<usize>,
    /// Square adjacency matrix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<MatrixCell>>>,
    /// Directed `[from, to]` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<(usize, usize)>>,
    /// Limits overriding the caller's defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TraversalConfig>,
}

impl GraphDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    /// Returns [`MalformedInput::Document`] with the parser's message.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| MalformedInput::Document(e.to_string()).into())
    }

    /// Renders the document as pretty JSON.
    ///
    /// # Errors
    /// Returns [`MalformedInput::Document`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MalformedInput::Document(e.to_string()).into())
    }

    /// Describes an existing graph as an edge list.
    pub fn from_graph<'brand>(graph: &AdjacencyMatrix<'brand>, token: &GhostToken<'brand>) -> Self {
        Self {
            vertices: Some(graph.vertex_count()),
            matrix: None,
            edges: Some(graph.edges(token).collect()),
            config: Some(*graph.config()),
        }
    }

    /// The limits the graph will be built with: the document's own, or `defaults`.
    pub fn effective_config(&self, defaults: &TraversalConfig) -> TraversalConfig {
        self.config.unwrap_or(*defaults)
    }

    /// Builds the described graph.
    ///
    /// # Errors
    /// [`MalformedInput::Document`] when the description is contradictory
    /// (both or neither of `matrix`/`edges` without `vertices`, or a vertex
    /// count that disagrees with the matrix), plus any construction error.
    pub fn build<'brand>(&self, defaults: &TraversalConfig) -> Result<AdjacencyMatrix<'brand>> {
        let config = self.effective_config(defaults);
        match (&self.matrix, &self.edges) {
            (Some(_), Some(_)) => Err(document_error("give either `matrix` or `edges`, not both")),
            (Some(rows), None) => {
                if let Some(vertices) = self.vertices.filter(|&n| n != rows.len()) {
                    return Err(document_error(format!(
                        "`vertices` is {vertices} but the matrix has {} rows",
                        rows.len()
                    )));
                }
                AdjacencyMatrix::from_rows(rows, &config)
            }
            (None, Some(edges)) => {
                let vertices = match self.vertices {
                    Some(vertices) => vertices,
                    None => infer_vertex_count(edges)?,
                };
                AdjacencyMatrix::from_edges(vertices, edges.iter().copied(), &config)
            }
            (None, None) => match self.vertices {
                Some(vertices) => AdjacencyMatrix::new(vertices, &config),
                None => Err(document_error("a document needs `matrix`, `edges` or `vertices`")),
            },
        }
    }
}

// One past the largest endpoint.
fn infer_vertex_count(edges: &[(usize, usize)]) -> Result<usize> {
    edges.iter().try_fold(0, |count: usize, &(u, v)| {
        u.max(v)
            .checked_add(1)
            .map(|needed| count.max(needed))
            .ok_or_else(|| document_error(format!("edge endpoint {} is too large to infer a vertex count", u.max(v))))
    })
}

fn document_error(message: impl Into<String>) -> crate::GraphError {
    MalformedInput::Document(message.into()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::bfs;
    use crate::GraphError;

    #[test]
    fn matrix_with_mixed_cells() {
        let doc = GraphDocument::from_json(r#"{ "matrix": [[false, 1], [0, true]] }"#).unwrap();
        GhostToken::new(|token| {
            let graph = doc.build(&TraversalConfig::default()).unwrap();
            assert_eq!(graph.edges(&token).collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
        });
    }

    #[test]
    fn edge_list_infers_vertex_count() {
        let doc = GraphDocument::from_json(r#"{ "edges": [[0, 1], [0, 2], [1, 3], [2, 3]] }"#).unwrap();
        GhostToken::new(|token| {
            let graph = doc.build(&TraversalConfig::default()).unwrap();
            assert_eq!(graph.vertex_count(), 4);
            assert_eq!(bfs(&graph, &token, 0).unwrap().to_string(), "0 1 2 3");
        });
    }

    #[test]
    fn largest_endpoint_cannot_overflow_the_inferred_count() {
        let doc = GraphDocument::from_json(r#"{ "edges": [[18446744073709551615, 0]] }"#).unwrap();
        assert!(matches!(
            doc.build(&TraversalConfig::default()),
            Err(GraphError::MalformedInput(MalformedInput::Document(_)))
        ));

        // With an explicit count the endpoint is just out of bounds.
        let doc = GraphDocument::from_json(r#"{ "vertices": 2, "edges": [[18446744073709551615, 0]] }"#).unwrap();
        assert_eq!(
            doc.build(&TraversalConfig::default()).err(),
            Some(GraphError::out_of_bounds(usize::MAX, 2))
        );
    }

    #[test]
    fn embedded_config_wins() {
        let doc = GraphDocument::from_json(r#"{ "vertices": 3, "config": { "max_vertices": 2 } }"#).unwrap();
        let err = doc.build(&TraversalConfig::default()).err();
        assert_eq!(
            err,
            Some(GraphError::MalformedInput(MalformedInput::TooManyVertices { vertices: 3, max: 2 }))
        );
    }

    #[test]
    fn contradictions_are_rejected() {
        let both = GraphDocument::from_json(r#"{ "matrix": [[0]], "edges": [] }"#).unwrap();
        assert!(matches!(
            both.build(&TraversalConfig::default()),
            Err(GraphError::MalformedInput(MalformedInput::Document(_)))
        ));

        let wrong_count = GraphDocument::from_json(r#"{ "vertices": 3, "matrix": [[0]] }"#).unwrap();
        assert!(wrong_count.build(&TraversalConfig::default()).is_err());

        assert!(GraphDocument::default().build(&TraversalConfig::default()).is_err());
        assert!(GraphDocument::from_json(r#"{ "nodes": 3 }"#).is_err());
    }

    #[test]
    fn graph_round_trips_through_edge_list() {
        GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_edges(3, [(2, 0), (0, 1)], &TraversalConfig::default()).unwrap();
            let json = GraphDocument::from_graph(&graph, &token).to_json().unwrap();
            let rebuilt = GraphDocument::from_json(&json).unwrap().build(&TraversalConfig::default()).unwrap();
            assert_eq!(rebuilt.to_rows(&token), graph.to_rows(&token));
        });
    }
}
