//! Structural balance testing for signed graphs.
//!
//! A signed graph is **structurally balanced** when its nodes can be
//! split into camps such that every positive edge stays inside a camp
//! and every negative edge crosses camps (Cartwright & Harary 1956,
//! generalizing Heider's triadic balance). Davis (1967) relaxed this to
//! **weak balance**: any number of camps, negative edges still only
//! between them.
//!
//! ## The decision procedure
//!
//! Testing balance does not require trying camp assignments. Contract
//! every connected component of the *positive* subgraph into a single
//! **supernode** — within such a component every node is reachable by
//! friendly ties, so a balanced split can never separate it. Then:
//!
//! 1. A negative edge *inside* a supernode is an immediate
//!    contradiction (it closes a cycle with exactly one negative edge).
//! 2. Otherwise, draw one edge between each pair of supernodes joined
//!    by at least one negative edge. The graph is balanced exactly when
//!    this **reduced graph** is bipartite: the two sides of the
//!    2-coloring are the two camps.
//!
//! The supernodes themselves are Davis's weakly balanced clusters, so
//! the same condensation doubles as a cluster report
//! ([`WeakClusters`]).
//!
//! ## Usage
//!
//! ```rust
//! use valence::{balance, SignedGraph};
//!
//! // Two allied pairs at war with each other: balanced.
//! let g = SignedGraph::from_triples(
//!     4,
//!     &[(0, 1, 1), (2, 3, 1), (0, 2, -1), (1, 3, -1)],
//! )
//! .unwrap();
//! assert!(balance::is_balanced(&g));
//! ```
//!
//! ## References
//!
//! - Heider (1946). "Attitudes and cognitive organization."
//! - Cartwright & Harary (1956). "Structural balance: a generalization
//!   of Heider's theory."
//! - Davis (1967). "Clustering and structural balance in graphs."

mod condense;
mod verify;

pub use condense::{Condensation, WeakClusters};
pub use verify::is_balanced;
