//! Host dependency-graph model: shader nodes, typed attributes, connections,
//! and the node-type registry that stands in for the host's plugin set.

pub mod graph;
pub mod node;
pub mod registry;

pub use graph::{Connection, DepGraph};
pub use node::{Attribute, DepNode, NodeId};
pub use registry::{builtin_registry, AttrDefinition, NodeTypeDefinition, NodeTypeRegistry};
