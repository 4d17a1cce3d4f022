//! Balance verdict via bipartiteness of the reduced graph.

use super::condense::Condensation;
use crate::graph::SignedGraph;
use petgraph::graph::UnGraph;
use std::collections::VecDeque;

/// BFS 2-coloring over every component. A graph with no edges is
/// vacuously bipartite; an odd cycle in any component fails.
pub(crate) fn is_bipartite(graph: &UnGraph<(), ()>) -> bool {
    if graph.edge_count() == 0 {
        return true;
    }

    let mut color: Vec<Option<bool>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    for start in graph.node_indices() {
        if color[start.index()].is_some() {
            continue;
        }
        color[start.index()] = Some(false);
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            let side = color[u.index()].unwrap_or(false);
            for v in graph.neighbors(u) {
                match color[v.index()] {
                    None => {
                        color[v.index()] = Some(!side);
                        queue.push_back(v);
                    }
                    Some(other) if other == side => return false,
                    Some(_) => {}
                }
            }
        }
    }

    true
}

/// Whether `graph` is structurally balanced.
///
/// Condenses the positive components into supernodes and checks that
/// no negative edge is internal to a supernode and that the reduced
/// graph is bipartite. Runs in O(nodes + edges).
///
/// Keep the [`Condensation`] instead when the supernode structure is
/// also wanted for reporting.
pub fn is_balanced<N>(graph: &SignedGraph<N>) -> bool {
    Condensation::of(graph).is_balanced()
}
