//! Signed-graph data model.
//!
//! A signed graph is an undirected graph whose edges carry a [`Sign`]:
//! positive (friendship, alliance, agreement), negative (enmity,
//! rivalry, disagreement), or unknown (a tie known to exist whose
//! valence has not been observed).
//!
//! [`SignedGraph`] wraps [`petgraph::graph::UnGraph`] and enforces the
//! invariants the analyses below rely on: no self-loops, at most one
//! edge per unordered node pair, and symmetric lookup
//! (`sign(a, b) == sign(b, a)`).

use crate::error::{Error, Result};
use core::fmt;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Edge sign in a signed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Affiliative tie.
    Positive,
    /// Antagonistic tie.
    Negative,
    /// Tie whose valence is not (yet) known.
    Unknown,
}

impl Sign {
    /// Whether the sign is resolved to [`Positive`](Sign::Positive) or
    /// [`Negative`](Sign::Negative).
    pub fn is_known(self) -> bool {
        !matches!(self, Sign::Unknown)
    }

    /// Sign product: like signs multiply to positive, unlike signs to
    /// negative. [`Unknown`](Sign::Unknown) is absorbing.
    ///
    /// This is the balance identity for triads: a triangle is balanced
    /// exactly when the product of its three edge signs is positive.
    pub fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Unknown, _) | (_, Sign::Unknown) => Sign::Unknown,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    /// Decode the `+1 / -1 / 0` convention used by external edge lists.
    ///
    /// Any positive value maps to [`Positive`](Sign::Positive), any
    /// negative value to [`Negative`](Sign::Negative), and zero to
    /// [`Unknown`](Sign::Unknown).
    pub fn from_value(value: i8) -> Sign {
        match value {
            v if v > 0 => Sign::Positive,
            v if v < 0 => Sign::Negative,
            _ => Sign::Unknown,
        }
    }

    /// Encode back to the `+1 / -1 / 0` convention.
    pub fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
            Sign::Unknown => 0,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => write!(f, "+"),
            Sign::Negative => write!(f, "-"),
            Sign::Unknown => write!(f, "?"),
        }
    }
}

/// An undirected graph with signed edges.
///
/// The node payload `N` is opaque caller data (demographics, labels,
/// anything); none of the analyses read it.
///
/// ```rust
/// use valence::{Sign, SignedGraph};
///
/// // 3 nodes, two friendships and one rivalry.
/// let g = SignedGraph::from_triples(3, &[(0, 1, 1), (1, 2, 1), (0, 2, -1)]).unwrap();
/// assert_eq!(g.node_count(), 3);
/// let (a, c) = (g.node_indices().next().unwrap(), g.node_indices().last().unwrap());
/// assert_eq!(g.sign(a, c), Some(Sign::Negative));
/// assert_eq!(g.sign(c, a), Some(Sign::Negative));
/// ```
#[derive(Debug, Clone)]
pub struct SignedGraph<N = ()> {
    graph: UnGraph<N, Sign>,
}

impl<N> SignedGraph<N> {
    /// Create an empty signed graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::with_capacity(0, 0),
        }
    }

    /// Add a node carrying `payload`.
    pub fn add_node(&mut self, payload: N) -> NodeIndex {
        self.graph.add_node(payload)
    }

    /// Add or update the signed edge between `a` and `b`.
    ///
    /// Edges are stored once per unordered pair; adding an edge that
    /// already exists replaces its sign. Self-loops and endpoints
    /// outside the node set are rejected.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, sign: Sign) -> Result<()> {
        if a == b {
            return Err(Error::SelfLoop { node: a.index() });
        }
        let n = self.graph.node_count();
        for endpoint in [a, b] {
            if endpoint.index() >= n {
                return Err(Error::EndpointOutOfBounds {
                    node: endpoint.index(),
                    n_nodes: n,
                });
            }
        }
        match self.graph.find_edge(a, b) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    *weight = sign;
                }
            }
            None => {
                let _ = self.graph.add_edge(a, b, sign);
            }
        }
        Ok(())
    }

    /// Sign of the edge between `a` and `b`, if one exists.
    ///
    /// Lookup is symmetric: `sign(a, b) == sign(b, a)`.
    pub fn sign(&self, a: NodeIndex, b: NodeIndex) -> Option<Sign> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of edges whose sign is [`Unknown`](Sign::Unknown).
    pub fn unknown_edge_count(&self) -> usize {
        self.edges().filter(|(_, _, s)| !s.is_known()).count()
    }

    /// Iterate over node indices.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Iterate over edges as `(endpoint, endpoint, sign)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, Sign)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), *e.weight()))
    }

    /// Iterate over the neighbors of `a`.
    pub fn neighbors(&self, a: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(a)
    }

    /// Payload attached to `a`.
    pub fn payload(&self, a: NodeIndex) -> Option<&N> {
        self.graph.node_weight(a)
    }

    /// Borrow the underlying petgraph graph.
    pub fn as_graph(&self) -> &UnGraph<N, Sign> {
        &self.graph
    }
}

impl SignedGraph<()> {
    /// Build a graph from `n_nodes` anonymous nodes and
    /// `(node, node, sign)` triples, where the sign follows the
    /// `+1 / -1 / 0` convention (`0` meaning unknown).
    ///
    /// Node ids in the triples must lie in `0..n_nodes`; dangling
    /// endpoints and self-loops are rejected here, before any analysis
    /// runs. Repeated pairs keep the last sign.
    pub fn from_triples(n_nodes: usize, triples: &[(usize, usize, i8)]) -> Result<Self> {
        let mut graph = SignedGraph::new();
        let nodes: Vec<NodeIndex> = (0..n_nodes).map(|_| graph.add_node(())).collect();
        for &(u, v, sign) in triples {
            for endpoint in [u, v] {
                if endpoint >= n_nodes {
                    return Err(Error::EndpointOutOfBounds {
                        node: endpoint,
                        n_nodes,
                    });
                }
            }
            graph.add_edge(nodes[u], nodes[v], Sign::from_value(sign))?;
        }
        Ok(graph)
    }
}

impl<N> Default for SignedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_product_table() {
        assert_eq!(Sign::Positive.product(Sign::Positive), Sign::Positive);
        assert_eq!(Sign::Negative.product(Sign::Negative), Sign::Positive);
        assert_eq!(Sign::Positive.product(Sign::Negative), Sign::Negative);
        assert_eq!(Sign::Negative.product(Sign::Positive), Sign::Negative);
        assert_eq!(Sign::Unknown.product(Sign::Positive), Sign::Unknown);
        assert_eq!(Sign::Negative.product(Sign::Unknown), Sign::Unknown);
    }

    #[test]
    fn test_sign_value_round_trip() {
        assert_eq!(Sign::from_value(1), Sign::Positive);
        assert_eq!(Sign::from_value(-1), Sign::Negative);
        assert_eq!(Sign::from_value(0), Sign::Unknown);
        for sign in [Sign::Positive, Sign::Negative, Sign::Unknown] {
            assert_eq!(Sign::from_value(sign.value()), sign);
        }
    }

    #[test]
    fn test_symmetric_lookup() {
        let g = SignedGraph::from_triples(2, &[(0, 1, -1)]).unwrap();
        let mut ix = g.node_indices();
        let (a, b) = (ix.next().unwrap(), ix.next().unwrap());
        assert_eq!(g.sign(a, b), Some(Sign::Negative));
        assert_eq!(g.sign(b, a), Some(Sign::Negative));
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = SignedGraph::from_triples(2, &[(1, 1, 1)]).unwrap_err();
        assert_eq!(err, Error::SelfLoop { node: 1 });
    }

    #[test]
    fn test_dangling_endpoint_rejected() {
        let err = SignedGraph::from_triples(2, &[(0, 5, 1)]).unwrap_err();
        assert_eq!(err, Error::EndpointOutOfBounds { node: 5, n_nodes: 2 });
    }

    #[test]
    fn test_repeated_pair_keeps_last_sign() {
        let g = SignedGraph::from_triples(2, &[(0, 1, 1), (1, 0, -1)]).unwrap();
        assert_eq!(g.edge_count(), 1);
        let mut ix = g.node_indices();
        let (a, b) = (ix.next().unwrap(), ix.next().unwrap());
        assert_eq!(g.sign(a, b), Some(Sign::Negative));
    }

    #[test]
    fn test_unknown_edge_count() {
        let g = SignedGraph::from_triples(3, &[(0, 1, 1), (1, 2, 0), (0, 2, 0)]).unwrap();
        assert_eq!(g.unknown_edge_count(), 2);
    }

    #[test]
    fn test_payload_is_opaque() {
        let mut g: SignedGraph<&str> = SignedGraph::new();
        let a = g.add_node("ada");
        let b = g.add_node("grace");
        g.add_edge(a, b, Sign::Positive).unwrap();
        assert_eq!(g.payload(a), Some(&"ada"));
        assert_eq!(g.payload(b), Some(&"grace"));
    }
}
