//! Partitioning signed graphs by minimizing the line index.
//!
//! When a graph is not balanced, the interesting question becomes *how
//! close* it is to a balanced k-way split. Given a candidate clustering,
//! two kinds of edges are frustrated:
//!
//! - **P**: positive edges whose endpoints fall in different clusters
//!   ("should be together, but split"), and
//! - **N**: negative edges whose endpoints share a cluster
//!   ("should be apart, but joined").
//!
//! The **line index** weighs them against each other:
//!
//! ```text
//! L(C) = alpha * P + (1 - alpha) * N        alpha in [0, 1]
//! ```
//!
//! A balanced graph admits a clustering with L = 0; in general,
//! minimizing L over clusterings is NP-hard (Doreian & Mrvar 1996), so
//! [`LocalSearch`] runs a seeded greedy hill-climb over single-node
//! moves — cheap, reproducible, and easily restarted from many seeds
//! ([`LocalSearch::optimize_restarts`]) since runs share nothing.
//!
//! ## Usage
//!
//! ```rust
//! use valence::cluster::LocalSearch;
//! use valence::SignedGraph;
//!
//! // Two friendly pairs, every cross tie hostile; two clusters
//! // resolve every frustration.
//! let g = SignedGraph::from_triples(
//!     4,
//!     &[(0, 1, 1), (2, 3, 1), (0, 2, -1), (0, 3, -1), (1, 2, -1), (1, 3, -1)],
//! )
//! .unwrap();
//!
//! let best = LocalSearch::new(2)
//!     .with_iterations(500)
//!     .with_seed(7)
//!     .optimize(&g)
//!     .unwrap();
//! assert_eq!(best.score.value, 0.0);
//! ```
//!
//! ## References
//!
//! - Doreian & Mrvar (1996). "A partitioning approach to structural
//!   balance." Social Networks 18(2).

mod line_index;
mod local_search;
mod traits;

pub use line_index::{LineIndex, LineIndexScore};
pub use local_search::{random_partition, LocalSearch, Partition};
pub use traits::Partitioner;
