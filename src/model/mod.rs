//! Inputs the algorithms operate on
//!
//! - [`graph`]: validated directed graph keyed by [`graph::NodeId`]
//! - [`sequence`]: numeric sequences, custom-value parsing and formatting
//! - [`generate`]: seeded random arrays and graphs

pub mod generate;
pub mod graph;
pub mod sequence;

pub use generate::InputGenerator;
pub use graph::{Graph, GraphError, NodeId};
