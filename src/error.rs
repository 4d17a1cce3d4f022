use core::fmt;

/// Result alias for `valence`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by graph construction and partitioning primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Edge endpoint outside the declared node set.
    EndpointOutOfBounds {
        /// Offending node id.
        node: usize,
        /// Number of declared nodes.
        n_nodes: usize,
    },

    /// Self-loops carry no balance information and are rejected.
    SelfLoop {
        /// Node with the loop.
        node: usize,
    },

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// Clustering length does not match the node count.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EndpointOutOfBounds { node, n_nodes } => {
                write!(f, "edge endpoint {node} outside node set of size {n_nodes}")
            }
            Error::SelfLoop { node } => write!(f, "self-loop on node {node}"),
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} items")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
