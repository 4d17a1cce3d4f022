//! Fixed-point propagation of edge signs over triangles.

use crate::error::Result;
use crate::graph::{Sign, SignedGraph};
use petgraph::graph::NodeIndex;
use std::collections::{BTreeMap, HashMap};

/// Canonical unordered edge key.
type EdgeKey = (NodeIndex, NodeIndex);

fn key(a: NodeIndex, b: NodeIndex) -> EdgeKey {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Signs inferred for previously-unknown edges.
///
/// Contains only edges actually resolved to positive or negative;
/// edges the constraints could not reach are absent and counted by
/// [`unresolved`](Self::unresolved).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignPrediction {
    inferred: BTreeMap<EdgeKey, Sign>,
    unresolved: usize,
}

impl SignPrediction {
    /// Inferred sign of the edge between `a` and `b`, if any.
    pub fn sign_of(&self, a: NodeIndex, b: NodeIndex) -> Option<Sign> {
        self.inferred.get(&key(a, b)).copied()
    }

    /// Number of edges resolved.
    pub fn len(&self) -> usize {
        self.inferred.len()
    }

    /// Whether nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.inferred.is_empty()
    }

    /// Unknown edges that no chain of triangle constraints reached.
    pub fn unresolved(&self) -> usize {
        self.unresolved
    }

    /// Iterate over `((a, b), sign)` resolutions in canonical pair order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, Sign)> + '_ {
        self.inferred.iter().map(|(&pair, &sign)| (pair, sign))
    }

    /// Write the inferred signs into a copy of `graph`.
    ///
    /// The input graph is left untouched; the copy carries every
    /// resolution, with any remaining unknown edges still unknown.
    /// Intended for the graph the prediction was computed from — on a
    /// graph missing the predicted endpoints this fails with the usual
    /// construction errors.
    pub fn apply_to<N: Clone>(&self, graph: &SignedGraph<N>) -> Result<SignedGraph<N>> {
        let mut updated = graph.clone();
        for (&(a, b), &sign) in &self.inferred {
            updated.add_edge(a, b, sign)?;
        }
        Ok(updated)
    }
}

/// Fixed-point sign predictor.
///
/// Enumerates every triangle once, then repeatedly sweeps the
/// still-open triangles: a triangle with exactly two known signs
/// resolves its third to their product, and the resolution feeds later
/// triangles in the same sweep. Stops when a sweep resolves nothing.
/// Propagation is monotonic (a resolved edge is never un-resolved), so
/// it terminates by exhaustion; `max_rounds` is a defensive ceiling,
/// not a correctness requirement.
///
/// Deterministic and idempotent: the fixed point depends only on the
/// input graph. The caller's graph is never mutated — propagation works
/// on a private copy of the sign map.
#[derive(Debug, Clone)]
pub struct TriadPropagation {
    /// Ceiling on full sweeps.
    max_rounds: usize,
}

impl TriadPropagation {
    /// Create a predictor with the default round ceiling.
    pub fn new() -> Self {
        Self { max_rounds: 100 }
    }

    /// Set the sweep ceiling.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Infer unknown signs in `graph` from its triangles.
    pub fn predict<N>(&self, graph: &SignedGraph<N>) -> SignPrediction {
        // Private working copy of the sign map.
        let mut signs: HashMap<EdgeKey, Sign> =
            graph.edges().map(|(a, b, s)| (key(a, b), s)).collect();

        // Each triangle once: anchored at its lowest node, with the
        // closing edge between the two higher neighbors present.
        let mut open: Vec<[EdgeKey; 3]> = Vec::new();
        for u in graph.node_indices() {
            let above: Vec<NodeIndex> = graph.neighbors(u).filter(|&v| v > u).collect();
            for i in 0..above.len() {
                for j in (i + 1)..above.len() {
                    let (a, b) = (above[i], above[j]);
                    if signs.contains_key(&key(a, b)) {
                        open.push([key(u, a), key(u, b), key(a, b)]);
                    }
                }
            }
        }

        let mut prediction = SignPrediction::default();
        for _round in 0..self.max_rounds {
            let mut resolved_any = false;
            open.retain(|triangle| {
                let mut unknown_slot = None;
                let mut product = Sign::Positive;
                for (slot, edge) in triangle.iter().enumerate() {
                    match signs.get(edge).copied().unwrap_or(Sign::Unknown) {
                        Sign::Unknown => {
                            if unknown_slot.replace(slot).is_some() {
                                // Two or more unknowns: still open.
                                return true;
                            }
                        }
                        known => product = product.product(known),
                    }
                }
                if let Some(slot) = unknown_slot {
                    let _ = signs.insert(triangle[slot], product);
                    let _ = prediction.inferred.insert(triangle[slot], product);
                    resolved_any = true;
                }
                // Fully known either way now; retire the triangle.
                false
            });
            if !resolved_any {
                break;
            }
        }

        prediction.unresolved = signs.values().filter(|s| !s.is_known()).count();
        prediction
    }
}

impl Default for TriadPropagation {
    fn default() -> Self {
        Self::new()
    }
}
