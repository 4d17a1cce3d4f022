//! Sign prediction by triadic constraint propagation.
//!
//! In a balanced network every triangle multiplies to a positive sign:
//! a friend's friend is a friend, an enemy's enemy is a friend. Run
//! backwards, this is an inference rule — a triangle with two known
//! signs and one unknown pins the unknown to the product of the other
//! two. Each inference can complete further triangles, so the solver
//! iterates to a fixed point ([`TriadPropagation`]).
//!
//! Not every unknown edge is reachable this way; edges with no chain of
//! triangle constraints stay unknown and are reported as a residual
//! count, never guessed.

mod propagation;

pub use propagation::{SignPrediction, TriadPropagation};
