//! Shadebridge - bidirectional shading-network interchange
//!
//! This library moves shading networks between two node-graph
//! representations: a host dependency graph (shader nodes with typed
//! attributes and connections) and a persisted scene-description stage
//! (prims with typed inputs and connections under a material root).
//!
//! The core is a pair of mirrored depth-first walks. Export starts at a
//! material's surface shader, emits one prim per host node, and recurses
//! through upstream connections; import does the reverse. Both walks share
//! a fixed name-mapping table and keep a per-session visited set so shared
//! sub-graphs are emitted once and cyclic inputs cannot recurse forever.
//! Failures stay local: an unsupported or uninstantiable node drops its own
//! branch and the rest of the network keeps going.

pub mod dag;
pub mod ris;
pub mod stage;
pub mod values;

pub use dag::{builtin_registry, Attribute, Connection, DepGraph, DepNode, NodeId, NodeTypeRegistry};
pub use ris::{export_material, import_material, MaterialAssignment, PlugRef};
pub use stage::{sanitize_name, PrimPath, PrimSchema, ShadeStage};
pub use values::AttributeValue;
