//! # valence
//!
//! Structural balance analysis for signed graphs: balance testing via
//! supernode condensation, weakly balanced cluster detection,
//! line-index scoring and local-search optimization of k-way
//! partitions, and sign prediction by triadic constraint propagation.
//!
//! All analyses read the shared [`SignedGraph`] immutably and share no
//! state with each other, so independent calls parallelize freely.
//! Multi-restart optimization is built in behind the `parallel`
//! feature (on by default).

pub mod balance;
pub mod cluster;
/// Error types used across `valence`.
pub mod error;
pub mod graph;
pub mod predict;

#[cfg(test)]
mod scenario_tests;

pub use balance::{is_balanced, Condensation, WeakClusters};
pub use cluster::{random_partition, LineIndex, LineIndexScore, LocalSearch, Partition, Partitioner};
pub use error::{Error, Result};
pub use graph::{Sign, SignedGraph};
pub use predict::{SignPrediction, TriadPropagation};
