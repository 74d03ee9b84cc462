//! Property tests comparing the traversals against straightforward
//! reference formulations on plain `Vec<Vec<bool>>` rows.

use std::collections::VecDeque;

use proptest::prelude::*;

use super::strategies::{dag, digraph, digraph_with_start};
use super::*;
use crate::{GhostToken, TraversalConfig};

fn reference_bfs(rows: &[Vec<bool>], start: usize) -> Vec<usize> {
    let mut seen = vec![false; rows.len()];
    let mut queue = VecDeque::from([start]);
    let mut out = Vec::new();
    seen[start] = true;
    while let Some(u) = queue.pop_front() {
        out.push(u);
        for v in 0..rows.len() {
            if rows[u][v] && !seen[v] {
                seen[v] = true;
                queue.push_back(v);
            }
        }
    }
    out
}

fn reference_dfs(rows: &[Vec<bool>], node: usize, seen: &mut [bool], out: &mut Vec<usize>) {
    seen[node] = true;
    out.push(node);
    for v in 0..rows.len() {
        if rows[node][v] && !seen[v] {
            reference_dfs(rows, v, seen, out);
        }
    }
}

fn reachable(rows: &[Vec<bool>], start: usize) -> Vec<bool> {
    let mut seen = vec![false; rows.len()];
    let mut stack = vec![start];
    seen[start] = true;
    while let Some(u) = stack.pop() {
        for v in 0..rows.len() {
            if rows[u][v] && !seen[v] {
                seen[v] = true;
                stack.push(v);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn bfs_matches_reference_and_reachable_set((rows, start) in digraph_with_start(12)) {
        let (order, expected) = GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_rows(&rows, &TraversalConfig::default()).unwrap();
            (bfs(&graph, &token, start).unwrap(), reference_bfs(&rows, start))
        });
        prop_assert_eq!(order.as_slice(), expected.as_slice());

        let reach = reachable(&rows, start);
        let mut emitted = vec![false; rows.len()];
        for &v in order.as_slice() {
            prop_assert!(!emitted[v], "vertex {} emitted twice", v);
            emitted[v] = true;
        }
        prop_assert_eq!(emitted, reach);
    }

    #[test]
    fn dfs_matches_recursive_preorder((rows, start) in digraph_with_start(12)) {
        let order = GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_rows(&rows, &TraversalConfig::default()).unwrap();
            dfs(&graph, &token, start).unwrap()
        });
        let mut seen = vec![false; rows.len()];
        let mut expected = Vec::new();
        reference_dfs(&rows, start, &mut seen, &mut expected);
        prop_assert_eq!(order.into_inner(), expected);
    }

    #[test]
    fn topological_sort_of_dag_is_complete_and_respects_edges(rows in dag(12)) {
        let topo = GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_rows(&rows, &TraversalConfig::default()).unwrap();
            topological_sort(&graph, &token).unwrap()
        });
        prop_assert!(topo.is_complete());
        let order = topo.order();
        for (u, row) in rows.iter().enumerate() {
            for (v, &edge) in row.iter().enumerate() {
                if edge {
                    prop_assert!(order.position(u) < order.position(v), "edge {}->{} out of order", u, v);
                }
            }
        }
    }

    #[test]
    fn partial_topological_order_is_still_consistent(rows in digraph(10)) {
        let topo = GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_rows(&rows, &TraversalConfig::default()).unwrap();
            topological_sort(&graph, &token).unwrap()
        });
        let order = topo.order();
        prop_assert_eq!(topo.emitted() + topo.unsorted().len(), rows.len());
        for (u, row) in rows.iter().enumerate() {
            for (v, &edge) in row.iter().enumerate() {
                if edge {
                    match (order.position(u), order.position(v)) {
                        (Some(pu), Some(pv)) => prop_assert!(pu < pv),
                        // A successor is never emitted ahead of a stuck predecessor.
                        (None, pv) => prop_assert!(pv.is_none()),
                        (Some(_), None) => {}
                    }
                }
            }
        }
    }
}
