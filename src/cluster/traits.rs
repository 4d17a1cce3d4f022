//! Partitioning traits.

use crate::error::Result;
use crate::graph::SignedGraph;

/// Trait for algorithms that assign every node a cluster id.
pub trait Partitioner {
    /// Partition the graph.
    ///
    /// Returns one cluster id per node, indexed by node index.
    fn partition<N>(&self, graph: &SignedGraph<N>) -> Result<Vec<usize>>;
}
