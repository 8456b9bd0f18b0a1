//! Host-side shader node and attribute model.

use crate::values::AttributeValue;
use serde::{Deserialize, Serialize};

/// Unique identifier for a node, allocated by the graph.
pub type NodeId = usize;

/// A named, typed attribute on a dependency node.
///
/// `procedural` and `compound_child` mark the two structural attribute
/// classes that are never exported: procedural attributes are host-internal
/// bookkeeping, compound children (e.g. the R of an RGB) are covered by
/// their parent attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
    pub procedural: bool,
    pub compound_child: bool,
}

impl Attribute {
    /// Creates a plain attribute.
    pub fn new(name: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            value,
            procedural: false,
            compound_child: false,
        }
    }

    /// Marks this attribute as procedural (host bookkeeping, never exported).
    pub fn procedural(mut self) -> Self {
        self.procedural = true;
        self
    }

    /// Marks this attribute as a compound child (covered by its parent).
    pub fn compound_child(mut self) -> Self {
        self.compound_child = true;
        self
    }
}

/// A node in the host dependency graph representing a shader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepNode {
    pub id: NodeId,
    /// Host node type name (e.g. "lambert", "PxrTexture").
    pub type_name: String,
    /// Instance name, unique per graph by convention but not enforced.
    pub name: String,
    /// Ordered attribute set; order is the host's declaration order.
    pub attributes: Vec<Attribute>,
}

impl DepNode {
    /// Creates a new node with no attributes. The id is assigned when the
    /// node is added to a graph.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            type_name: type_name.into(),
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute to the node.
    pub fn add_attr(&mut self, attr: Attribute) -> &mut Self {
        self.attributes.push(attr);
        self
    }

    /// Finds an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Finds an attribute by name, mutably.
    pub fn attr_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|a| a.name == name)
    }
}
