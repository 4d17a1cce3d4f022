//! Supernode condensation of a signed graph.
//!
//! Contracts each connected component of the positive subgraph into a
//! supernode and builds the reduced graph of negative ties between
//! supernodes. One computation, two projections: the balance verdict
//! reads the reduced graph, the weak-cluster report reads the
//! membership vector.

use super::verify;
use crate::cluster::Partitioner;
use crate::error::Result;
use crate::graph::{Sign, SignedGraph};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use std::collections::{HashMap, HashSet};

/// The supernode structure of a signed graph.
///
/// Each supernode is one connected component of the subgraph induced by
/// positive edges; isolated nodes form singleton supernodes, and edges
/// with unknown sign contribute nothing. Supernode ids are assigned in
/// discovery order over ascending node indices — stable, but carrying
/// no meaning beyond identity.
///
/// Built per call and meant to be short-lived: condense, read the
/// verdict or the membership, discard.
#[derive(Debug, Clone)]
pub struct Condensation {
    /// Member nodes of each supernode, indexed by supernode id.
    supernodes: Vec<Vec<NodeIndex>>,
    /// Supernode id per node, indexed by node index.
    membership: Vec<usize>,
    /// Supernode pairs joined by at least one negative edge.
    reduced: UnGraph<(), ()>,
    /// Negative edges whose endpoints share a supernode.
    internal_negative: usize,
}

impl Condensation {
    /// Condense `graph` into supernodes and the reduced graph.
    ///
    /// Always succeeds; an empty graph condenses to zero supernodes.
    pub fn of<N>(graph: &SignedGraph<N>) -> Self {
        let n = graph.node_count();

        // Positive-subgraph connectivity.
        let mut sets = UnionFind::<usize>::new(n);
        for (a, b, sign) in graph.edges() {
            if sign == Sign::Positive {
                let _ = sets.union(a.index(), b.index());
            }
        }

        // Renumber component roots in first-discovery order.
        let labels = sets.into_labeling();
        let mut root_to_id: HashMap<usize, usize> = HashMap::new();
        let mut membership = vec![0usize; n];
        let mut supernodes: Vec<Vec<NodeIndex>> = Vec::new();
        for (node, &root) in labels.iter().enumerate() {
            let next_id = supernodes.len();
            let id = *root_to_id.entry(root).or_insert(next_id);
            if id == supernodes.len() {
                supernodes.push(Vec::new());
            }
            membership[node] = id;
            supernodes[id].push(NodeIndex::new(node));
        }

        // Reduced graph: deduplicated negative ties between supernodes.
        let mut reduced = UnGraph::<(), ()>::with_capacity(supernodes.len(), 0);
        for _ in 0..supernodes.len() {
            let _ = reduced.add_node(());
        }
        let mut internal_negative = 0usize;
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for (a, b, sign) in graph.edges() {
            if sign != Sign::Negative {
                continue;
            }
            let (sa, sb) = (membership[a.index()], membership[b.index()]);
            if sa == sb {
                internal_negative += 1;
                continue;
            }
            let pair = if sa < sb { (sa, sb) } else { (sb, sa) };
            if seen.insert(pair) {
                let _ = reduced.add_edge(NodeIndex::new(pair.0), NodeIndex::new(pair.1), ());
            }
        }

        Self {
            supernodes,
            membership,
            reduced,
            internal_negative,
        }
    }

    /// Number of supernodes.
    pub fn len(&self) -> usize {
        self.supernodes.len()
    }

    /// Whether the condensation has no supernodes (empty input graph).
    pub fn is_empty(&self) -> bool {
        self.supernodes.is_empty()
    }

    /// Member nodes of each supernode.
    pub fn supernodes(&self) -> &[Vec<NodeIndex>] {
        &self.supernodes
    }

    /// Supernode id of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to the condensed graph.
    pub fn supernode_of(&self, node: NodeIndex) -> usize {
        self.membership[node.index()]
    }

    /// Supernode id per node, indexed by node index.
    ///
    /// This is the weakly balanced cluster assignment: positive edges
    /// never cross supernodes, so each supernode is one Davis cluster.
    pub fn membership(&self) -> &[usize] {
        &self.membership
    }

    /// Consume the condensation, keeping only the cluster assignment.
    pub fn into_membership(self) -> Vec<usize> {
        self.membership
    }

    /// The reduced graph: one node per supernode, one edge per
    /// supernode pair joined by at least one negative edge.
    pub fn reduced(&self) -> &UnGraph<(), ()> {
        &self.reduced
    }

    /// Negative edges whose endpoints fell into the same supernode.
    ///
    /// Each such edge closes a cycle with exactly one negative edge and
    /// certifies imbalance on its own; they are excluded from the
    /// reduced graph.
    pub fn internal_negative_edges(&self) -> usize {
        self.internal_negative
    }

    /// Whether the reduced graph is bipartite.
    ///
    /// The classical supernode-level test: vacuously true with zero
    /// reduced edges, otherwise a BFS 2-coloring. Note this projection
    /// alone is blind to [internal negative
    /// edges](Self::internal_negative_edges).
    pub fn reduced_is_bipartite(&self) -> bool {
        verify::is_bipartite(&self.reduced)
    }

    /// The balance verdict for the condensed graph.
    ///
    /// Balanced iff no negative edge is internal to a supernode and the
    /// reduced graph is bipartite.
    pub fn is_balanced(&self) -> bool {
        self.internal_negative == 0 && self.reduced_is_bipartite()
    }
}

/// Weakly balanced cluster detection as a [`Partitioner`].
///
/// Assigns each node the id of its positive-connectivity supernode:
/// the cluster structure of a weakly balanced graph, and a useful
/// coarse report even when the graph is not balanced.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeakClusters;

impl WeakClusters {
    /// Create a weak-cluster partitioner.
    pub fn new() -> Self {
        Self
    }
}

impl Partitioner for WeakClusters {
    fn partition<N>(&self, graph: &SignedGraph<N>) -> Result<Vec<usize>> {
        Ok(Condensation::of(graph).into_membership())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn test_positive_component_becomes_one_supernode() {
        let g =
            SignedGraph::from_triples(4, &[(0, 1, 1), (1, 2, 1), (0, 2, 1), (2, 3, -1)]).unwrap();
        let c = Condensation::of(&g);
        assert_eq!(c.len(), 2);
        assert_eq!(c.supernode_of(node(0)), c.supernode_of(node(1)));
        assert_eq!(c.supernode_of(node(1)), c.supernode_of(node(2)));
        assert_ne!(c.supernode_of(node(2)), c.supernode_of(node(3)));
        assert_eq!(c.reduced().edge_count(), 1);
    }

    #[test]
    fn test_isolated_nodes_are_singleton_supernodes() {
        let g = SignedGraph::from_triples(3, &[]).unwrap();
        let c = Condensation::of(&g);
        assert_eq!(c.len(), 3);
        assert_eq!(c.membership(), &[0, 1, 2]);
    }

    #[test]
    fn test_unknown_edges_build_no_connectivity() {
        let g = SignedGraph::from_triples(2, &[(0, 1, 0)]).unwrap();
        let c = Condensation::of(&g);
        assert_eq!(c.len(), 2);
        assert_eq!(c.reduced().edge_count(), 0);
    }

    #[test]
    fn test_parallel_negative_ties_deduplicated() {
        // Two camps joined by two negative edges: one reduced edge.
        let g = SignedGraph::from_triples(
            4,
            &[(0, 1, 1), (2, 3, 1), (0, 2, -1), (1, 3, -1)],
        )
        .unwrap();
        let c = Condensation::of(&g);
        assert_eq!(c.len(), 2);
        assert_eq!(c.reduced().edge_count(), 1);
    }

    #[test]
    fn test_internal_negative_edge_counted_not_reduced() {
        // Hostility inside a friendly component.
        let g = SignedGraph::from_triples(3, &[(0, 1, 1), (1, 2, 1), (0, 2, -1)]).unwrap();
        let c = Condensation::of(&g);
        assert_eq!(c.len(), 1);
        assert_eq!(c.reduced().edge_count(), 0);
        assert_eq!(c.internal_negative_edges(), 1);
        assert!(c.reduced_is_bipartite());
        assert!(!c.is_balanced());
    }

    #[test]
    fn test_empty_graph_condenses_to_nothing() {
        let g = SignedGraph::from_triples(0, &[]).unwrap();
        let c = Condensation::of(&g);
        assert!(c.is_empty());
        assert!(c.is_balanced());
    }

    #[test]
    fn test_weak_clusters_partitioner() {
        let g =
            SignedGraph::from_triples(5, &[(0, 1, 1), (1, 2, 1), (3, 4, 1), (2, 3, -1)]).unwrap();
        let clusters = WeakClusters::new().partition(&g).unwrap();
        assert_eq!(clusters, vec![0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_membership_ids_in_discovery_order() {
        // Components discovered in ascending node order get ascending ids.
        let g = SignedGraph::from_triples(4, &[(2, 3, 1)]).unwrap();
        let c = Condensation::of(&g);
        assert_eq!(c.membership(), &[0, 1, 2, 2]);
    }
}
