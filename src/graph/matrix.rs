//! A dense adjacency-matrix directed graph with branded storage.
//!
//! Cells are stored row-major in one `GhostCell<'brand, Vec<bool>>`:
//! - reading edges requires `&GhostToken<'brand>`
//! - adding or removing edges requires `&mut GhostToken<'brand>`
//!
//! The vertex count is fixed at construction and validated against the
//! graph's [`TraversalConfig`], which travels with the graph so every
//! traversal knows its queue capacity.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `new` | \(O(n^2)\) | Zeroed matrix |
//! | `add_edge` / `remove_edge` / `has_edge` | \(O(1)\) | Direct cell access |
//! | `out_neighbors` | \(O(n)\) | Row scan, ascending |
//! | `in_degree` | \(O(n)\) | Column scan |
//! | `edge_count` | \(O(n^2)\) | Full scan |

use crate::config::TraversalConfig;
use crate::error::{GraphError, MalformedInput, Result};
use crate::{GhostCell, GhostToken};

/// Cell types that can describe an adjacency matrix entry.
///
/// `bool` cells are edges when `true`; numeric cells are edges when non-zero.
pub trait EdgeCell {
    /// Returns `true` if this cell denotes an edge.
    fn is_edge(&self) -> bool;
}

impl EdgeCell for bool {
    #[inline(always)]
    fn is_edge(&self) -> bool {
        *self
    }
}

macro_rules! impl_edge_cell_for_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EdgeCell for $ty {
                #[inline(always)]
                fn is_edge(&self) -> bool {
                    !num_traits::Zero::is_zero(self)
                }
            }
        )*
    };
}

impl_edge_cell_for_numeric!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// A square, branded adjacency matrix over vertices `0..vertex_count`.
pub struct AdjacencyMatrix<'brand> {
    cells: GhostCell<'brand, Vec<bool>>,
    vertices: usize,
    config: TraversalConfig,
}

impl<'brand> AdjacencyMatrix<'brand> {
    /// Creates a graph with `vertices` vertices and no edges.
    ///
    /// # Errors
    /// Fails with [`MalformedInput::TooManyVertices`] when `vertices` exceeds
    /// `config.max_vertices`, [`MalformedInput::MatrixTooLarge`] when the matrix
    /// cannot be addressed, or [`MalformedInput::InvalidConfig`] for a bad config.
    pub fn new(vertices: usize, config: &TraversalConfig) -> Result<Self> {
        let cells = config.check_vertices(vertices)?;
        Ok(Self {
            cells: GhostCell::new(vec![false; cells]),
            vertices,
            config: *config,
        })
    }

    /// Builds a graph from matrix rows; the vertex count is the number of rows.
    ///
    /// # Errors
    /// Fails with [`MalformedInput::DimensionMismatch`] if any row length differs
    /// from the row count, or with the errors of [`new`](Self::new).
    pub fn from_rows<R, C>(rows: &[R], config: &TraversalConfig) -> Result<Self>
    where
        R: AsRef<[C]>,
        C: EdgeCell,
    {
        let vertices = rows.len();
        let mut cells = Vec::with_capacity(config.check_vertices(vertices)?);
        for (row, cols) in rows.iter().enumerate() {
            let cols = cols.as_ref();
            if cols.len() != vertices {
                return Err(MalformedInput::DimensionMismatch {
                    row,
                    expected: vertices,
                    found: cols.len(),
                }
                .into());
            }
            cells.extend(cols.iter().map(EdgeCell::is_edge));
        }

        Ok(Self {
            cells: GhostCell::new(cells),
            vertices,
            config: *config,
        })
    }

    /// Builds a graph of `vertices` vertices from directed `(from, to)` pairs.
    ///
    /// Duplicate pairs collapse into one edge.
    ///
    /// # Errors
    /// Fails with [`MalformedInput::VertexOutOfBounds`] for an endpoint outside
    /// `0..vertices`, or with the errors of [`new`](Self::new).
    pub fn from_edges<I>(vertices: usize, edges: I, config: &TraversalConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertices, config)?;
        let cells = graph.cells.get_mut();
        for (from, to) in edges {
            for v in [from, to] {
                if v >= vertices {
                    return Err(GraphError::out_of_bounds(v, vertices));
                }
            }
            cells[from * vertices + to] = true;
        }
        Ok(graph)
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// The limits this graph was built with.
    #[inline(always)]
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Validates a vertex index.
    ///
    /// # Errors
    /// Returns [`MalformedInput::VertexOutOfBounds`] when `vertex >= vertex_count()`.
    #[inline]
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertices {
            Ok(())
        } else {
            Err(GraphError::out_of_bounds(vertex, self.vertices))
        }
    }

    /// Inserts the directed edge `from -> to`. Returns `true` if it was absent.
    ///
    /// # Errors
    /// Returns [`MalformedInput::VertexOutOfBounds`] for an invalid endpoint.
    pub fn add_edge(&self, token: &mut GhostToken<'brand>, from: usize, to: usize) -> Result<bool> {
        self.set_edge(token, from, to, true).map(|was| !was)
    }

    /// Deletes the directed edge `from -> to`. Returns `true` if it was present.
    ///
    /// # Errors
    /// Returns [`MalformedInput::VertexOutOfBounds`] for an invalid endpoint.
    pub fn remove_edge(&self, token: &mut GhostToken<'brand>, from: usize, to: usize) -> Result<bool> {
        self.set_edge(token, from, to, false)
    }

    fn set_edge(&self, token: &mut GhostToken<'brand>, from: usize, to: usize, edge: bool) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let idx = from * self.vertices + to;
        let cell = &mut self.cells.borrow_mut(token)[idx];
        Ok(core::mem::replace(cell, edge))
    }

    /// Checks whether the edge `from -> to` exists.
    ///
    /// # Errors
    /// Returns [`MalformedInput::VertexOutOfBounds`] for an invalid endpoint.
    pub fn has_edge(&self, token: &GhostToken<'brand>, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.cells.borrow(token)[from * self.vertices + to])
    }

    /// Returns row `vertex` of the matrix: cell `i` is the edge `vertex -> i`.
    ///
    /// # Panics
    /// Panics if `vertex >= vertex_count()`.
    #[inline]
    pub fn row<'a>(&'a self, token: &'a GhostToken<'brand>, vertex: usize) -> &'a [bool] {
        assert!(vertex < self.vertices, "vertex {vertex} out of bounds");
        let start = vertex * self.vertices;
        &self.cells.borrow(token)[start..start + self.vertices]
    }

    /// Out-neighbors of `vertex` in increasing index order.
    ///
    /// # Panics
    /// Panics if `vertex >= vertex_count()`.
    pub fn out_neighbors<'a>(
        &'a self,
        token: &'a GhostToken<'brand>,
        vertex: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        self.row(token, vertex)
            .iter()
            .enumerate()
            .filter_map(|(i, &edge)| edge.then_some(i))
    }

    /// Number of edges leaving `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex >= vertex_count()`.
    pub fn out_degree(&self, token: &GhostToken<'brand>, vertex: usize) -> usize {
        self.out_neighbors(token, vertex).count()
    }

    /// Number of edges entering `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex >= vertex_count()`.
    pub fn in_degree(&self, token: &GhostToken<'brand>, vertex: usize) -> usize {
        assert!(vertex < self.vertices, "vertex {vertex} out of bounds");
        let cells = self.cells.borrow(token);
        (0..self.vertices)
            .filter(|&u| cells[u * self.vertices + vertex])
            .count()
    }

    /// Total number of directed edges, self-loops included.
    pub fn edge_count(&self, token: &GhostToken<'brand>) -> usize {
        self.cells.borrow(token).iter().filter(|&&edge| edge).count()
    }

    /// All edges as `(from, to)` pairs in row-major order.
    pub fn edges<'a>(&'a self, token: &'a GhostToken<'brand>) -> impl Iterator<Item = (usize, usize)> + 'a {
        let n = self.vertices;
        self.cells
            .borrow(token)
            .iter()
            .enumerate()
            .filter_map(move |(idx, &edge)| edge.then(|| (idx / n, idx % n)))
    }

    /// Copies the matrix out as owned rows.
    pub fn to_rows(&self, token: &GhostToken<'brand>) -> Vec<Vec<bool>> {
        if self.vertices == 0 {
            return Vec::new();
        }
        self.cells
            .borrow(token)
            .chunks_exact(self.vertices)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    fn diamond_rows() -> Vec<Vec<u8>> {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
        vec![
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ]
    }

    #[test]
    fn from_rows_treats_nonzero_as_edge() {
        GhostToken::new(|token| {
            let rows = vec![vec![0i32, -3], vec![7, 0]];
            let graph = AdjacencyMatrix::from_rows(&rows, &TraversalConfig::default()).unwrap();
            assert_eq!(graph.vertex_count(), 2);
            assert_eq!(graph.has_edge(&token, 0, 1), Ok(true));
            assert_eq!(graph.has_edge(&token, 1, 0), Ok(true));
            assert_eq!(graph.has_edge(&token, 0, 0), Ok(false));
            assert_eq!(graph.edge_count(&token), 2);
        });
    }

    #[test]
    fn neighbors_and_degrees() {
        GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_rows(&diamond_rows(), &TraversalConfig::default()).unwrap();

            assert_eq!(graph.out_neighbors(&token, 0).collect::<Vec<_>>(), vec![1, 2]);
            assert_eq!(graph.out_neighbors(&token, 3).count(), 0);
            assert_eq!(graph.out_degree(&token, 0), 2);
            assert_eq!(graph.in_degree(&token, 3), 2);
            assert_eq!(graph.in_degree(&token, 0), 0);
            assert_eq!(graph.edges(&token).collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
        });
    }

    #[test]
    fn token_gated_edits() {
        GhostToken::new(|mut token| {
            let graph = AdjacencyMatrix::new(3, &TraversalConfig::default()).unwrap();
            assert_eq!(graph.add_edge(&mut token, 0, 1), Ok(true));
            assert_eq!(graph.add_edge(&mut token, 0, 1), Ok(false));
            assert_eq!(graph.add_edge(&mut token, 2, 2), Ok(true));
            assert_eq!(graph.edge_count(&token), 2);

            assert_eq!(graph.remove_edge(&mut token, 0, 1), Ok(true));
            assert_eq!(graph.remove_edge(&mut token, 0, 1), Ok(false));
            assert_eq!(graph.to_rows(&token), vec![vec![false; 3], vec![false; 3], vec![false, false, true]]);
        });
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![false, true], vec![false]];
        let err = AdjacencyMatrix::from_rows(&rows, &TraversalConfig::default()).err();
        assert_eq!(
            err,
            Some(GraphError::MalformedInput(MalformedInput::DimensionMismatch {
                row: 1,
                expected: 2,
                found: 1,
            }))
        );
    }

    #[test]
    fn vertex_limit_is_enforced() {
        let config = TraversalConfig::default().with_max_vertices(2);
        let err = AdjacencyMatrix::new(3, &config).err();
        assert_eq!(
            err,
            Some(GraphError::MalformedInput(MalformedInput::TooManyVertices { vertices: 3, max: 2 }))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_matrix_is_an_error_not_an_overflow() {
        let config = TraversalConfig::default().with_max_vertices(usize::MAX);
        assert_eq!(
            AdjacencyMatrix::new(1 << 33, &config).err(),
            Some(GraphError::MalformedInput(MalformedInput::MatrixTooLarge { vertices: 1 << 33 }))
        );
        assert_eq!(
            AdjacencyMatrix::from_edges(usize::MAX, [(0, 1)], &config).err(),
            Some(GraphError::MalformedInput(MalformedInput::MatrixTooLarge { vertices: usize::MAX }))
        );
    }

    #[test]
    fn edge_list_endpoints_are_checked() {
        let config = TraversalConfig::default();
        GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (0, 1), (1, 2)], &config).unwrap();
            assert_eq!(graph.edge_count(&token), 2);
            assert!(graph.has_edge(&token, 0, 3).is_err());
        });
        assert_eq!(
            AdjacencyMatrix::from_edges(3, [(0, 3)], &config).err(),
            Some(GraphError::out_of_bounds(3, 3))
        );
    }
}
