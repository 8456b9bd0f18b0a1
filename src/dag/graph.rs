//! Host dependency graph data structures and operations.

use super::node::{DepNode, NodeId};
use super::registry::NodeTypeRegistry;
use crate::values::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a connection between two named attributes on different nodes.
///
/// The source is an output attribute on the upstream node, the destination
/// an input attribute on the downstream node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_attr: String,
    pub to_node: NodeId,
    pub to_attr: String,
}

impl Connection {
    /// Creates a new connection.
    pub fn new(
        from_node: NodeId,
        from_attr: impl Into<String>,
        to_node: NodeId,
        to_attr: impl Into<String>,
    ) -> Self {
        Self {
            from_node,
            from_attr: from_attr.into(),
            to_node,
            to_attr: to_attr.into(),
        }
    }
}

/// A dependency graph containing shader nodes and their connections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepGraph {
    pub nodes: HashMap<NodeId, DepNode>,
    pub connections: Vec<Connection>,
    next_node_id: NodeId,
}

impl DepGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            connections: Vec::new(),
            next_node_id: 0,
        }
    }

    /// Adds a node to the graph and returns its ID.
    pub fn add_node(&mut self, mut node: DepNode) -> NodeId {
        let id = self.next_node_id;
        node.id = id;
        self.nodes.insert(id, node);
        self.next_node_id += 1;
        id
    }

    /// Creates a node of a registered type, with its declared attributes at
    /// their default values. Returns `None` when the type is not registered
    /// (the host-side "missing plugin" condition).
    pub fn create_node(
        &mut self,
        registry: &NodeTypeRegistry,
        type_name: &str,
        instance_name: &str,
    ) -> Option<NodeId> {
        let definition = registry.definition(type_name)?;
        let node = definition.instantiate(instance_name);
        Some(self.add_node(node))
    }

    /// Looks up a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&DepNode> {
        self.nodes.get(&id)
    }

    /// Looks up a node by ID, mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut DepNode> {
        self.nodes.get_mut(&id)
    }

    /// Sets the current value of a named attribute. Returns false when the
    /// node or attribute does not exist.
    pub fn set_attr_value(&mut self, id: NodeId, attr: &str, value: AttributeValue) -> bool {
        match self.node_mut(id).and_then(|n| n.attr_mut(attr)) {
            Some(a) => {
                a.value = value;
                true
            }
            None => false,
        }
    }

    /// Adds a connection between two attributes.
    ///
    /// The connect is non-destructive: a destination that already has an
    /// incoming connection is refused rather than rewired.
    pub fn connect(&mut self, connection: Connection) -> Result<(), &'static str> {
        if connection.from_node == connection.to_node {
            return Err("Cannot connect a node to itself");
        }

        match self.nodes.get(&connection.from_node) {
            None => return Err("Source node does not exist"),
            Some(node) if node.attr(&connection.from_attr).is_none() => {
                return Err("Source attribute does not exist")
            }
            Some(_) => {}
        }
        match self.nodes.get(&connection.to_node) {
            None => return Err("Destination node does not exist"),
            Some(node) if node.attr(&connection.to_attr).is_none() => {
                return Err("Destination attribute does not exist")
            }
            Some(_) => {}
        }

        if self
            .connections
            .iter()
            .any(|c| c.to_node == connection.to_node && c.to_attr == connection.to_attr)
        {
            return Err("Destination attribute is already connected");
        }

        self.connections.push(connection);
        Ok(())
    }

    /// Returns the upstream source of a destination attribute, if connected:
    /// the source node's ID and output attribute name.
    pub fn upstream_source(&self, node: NodeId, attr: &str) -> Option<(NodeId, &str)> {
        self.connections
            .iter()
            .find(|c| c.to_node == node && c.to_attr == attr)
            .map(|c| (c.from_node, c.from_attr.as_str()))
    }
}
