//! Node type registry: which shader node types the host can instantiate.
//!
//! Creating a node of an unregistered type fails the same way a missing
//! host plugin does; callers cache and report that failure rather than
//! aborting the surrounding import.

use super::node::{Attribute, DepNode};
use crate::values::AttributeValue;
use glam::Vec3;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Declares one attribute of a node type: its name, default value, and
/// structural flags.
#[derive(Debug, Clone)]
pub struct AttrDefinition {
    pub name: &'static str,
    pub default: AttributeValue,
    pub procedural: bool,
    pub compound_child: bool,
}

impl AttrDefinition {
    pub fn new(name: &'static str, default: AttributeValue) -> Self {
        Self {
            name,
            default,
            procedural: false,
            compound_child: false,
        }
    }

    pub fn procedural(mut self) -> Self {
        self.procedural = true;
        self
    }

    pub fn compound_child(mut self) -> Self {
        self.compound_child = true;
        self
    }
}

/// Full declaration of a host node type.
#[derive(Debug, Clone)]
pub struct NodeTypeDefinition {
    pub type_name: &'static str,
    pub attributes: Vec<AttrDefinition>,
}

impl NodeTypeDefinition {
    pub fn new(type_name: &'static str, attributes: Vec<AttrDefinition>) -> Self {
        Self {
            type_name,
            attributes,
        }
    }

    /// Builds a node instance with every declared attribute at its default.
    pub fn instantiate(&self, instance_name: &str) -> DepNode {
        let mut node = DepNode::new(self.type_name, instance_name);
        for def in &self.attributes {
            let mut attr = Attribute::new(def.name, def.default.clone());
            attr.procedural = def.procedural;
            attr.compound_child = def.compound_child;
            node.add_attr(attr);
        }
        node
    }
}

/// Registry of instantiable node types.
#[derive(Debug, Clone, Default)]
pub struct NodeTypeRegistry {
    types: BTreeMap<&'static str, NodeTypeDefinition>,
}

impl NodeTypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Registers a node type, replacing any previous definition.
    pub fn register(&mut self, definition: NodeTypeDefinition) {
        self.types.insert(definition.type_name, definition);
    }

    /// Removes a node type. Useful to model an unloaded plugin.
    pub fn unregister(&mut self, type_name: &str) {
        self.types.remove(type_name);
    }

    /// Looks up a node type definition.
    pub fn definition(&self, type_name: &str) -> Option<&NodeTypeDefinition> {
        self.types.get(type_name)
    }

    /// Whether a node type can be instantiated.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }
}

fn gray(v: f32) -> AttributeValue {
    AttributeValue::Color3f(Vec3::splat(v))
}

fn message() -> AttrDefinition {
    AttrDefinition::new("message", AttributeValue::Unknown("message".into())).procedural()
}

/// The standard node set: the classic host shading nodes on the left side of
/// the RIS mapping table plus the native Pxr shader types themselves.
fn standard_types() -> NodeTypeRegistry {
    let mut registry = NodeTypeRegistry::new();

    registry.register(NodeTypeDefinition::new(
        "lambert",
        vec![
            AttrDefinition::new("color", gray(0.5)),
            AttrDefinition::new("colorR", AttributeValue::Float(0.5)).compound_child(),
            AttrDefinition::new("colorG", AttributeValue::Float(0.5)).compound_child(),
            AttrDefinition::new("colorB", AttributeValue::Float(0.5)).compound_child(),
            AttrDefinition::new("transparency", gray(0.0)),
            AttrDefinition::new("diffuse", AttributeValue::Float(0.8)),
            AttrDefinition::new("outColor", gray(0.0)),
            AttrDefinition::new("outTransparency", gray(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "blinn",
        vec![
            AttrDefinition::new("color", gray(0.5)),
            AttrDefinition::new("specularColor", gray(0.5)),
            AttrDefinition::new("eccentricity", AttributeValue::Float(0.3)),
            AttrDefinition::new("specularRollOff", AttributeValue::Float(0.7)),
            AttrDefinition::new("outColor", gray(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "file",
        vec![
            AttrDefinition::new("fileTextureName", AttributeValue::Asset(String::new())),
            AttrDefinition::new("repeatUV", AttributeValue::Float2(glam::Vec2::ONE)),
            AttrDefinition::new("outColor", gray(0.0)),
            AttrDefinition::new("outAlpha", AttributeValue::Float(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "checker",
        vec![
            AttrDefinition::new("color1", gray(1.0)),
            AttrDefinition::new("color2", gray(0.0)),
            AttrDefinition::new("outColor", gray(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "bump2d",
        vec![
            AttrDefinition::new("bumpValue", AttributeValue::Float(0.0)),
            AttrDefinition::new("bumpDepth", AttributeValue::Float(1.0)),
            AttrDefinition::new("outNormal", AttributeValue::Normal3f(Vec3::Z)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "PxrDiffuse",
        vec![
            AttrDefinition::new("diffuseColor", gray(0.5)),
            AttrDefinition::new("transmissionColor", gray(0.0)),
            AttrDefinition::new("presence", AttributeValue::Float(1.0)),
            AttrDefinition::new("outColor", gray(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "PxrBlinn",
        vec![
            AttrDefinition::new("diffuseColor", gray(0.5)),
            AttrDefinition::new("specularColor", gray(0.5)),
            AttrDefinition::new("eccentricity", AttributeValue::Float(0.3)),
            AttrDefinition::new("outColor", gray(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "PxrTexture",
        vec![
            AttrDefinition::new("filename", AttributeValue::Asset(String::new())),
            AttrDefinition::new("linearize", AttributeValue::Bool(true)),
            AttrDefinition::new("outColor", gray(0.0)),
            AttrDefinition::new("outAlpha", AttributeValue::Float(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "PxrChecker",
        vec![
            AttrDefinition::new("colorA", gray(1.0)),
            AttrDefinition::new("colorB", gray(0.0)),
            AttrDefinition::new("outColor", gray(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "PxrSurface",
        vec![
            AttrDefinition::new("diffuseColor", gray(0.5)),
            AttrDefinition::new("specularEdgeColor", gray(1.0)),
            AttrDefinition::new("presence", AttributeValue::Float(1.0)),
            AttrDefinition::new("outColor", gray(0.0)),
            message(),
        ],
    ));

    registry.register(NodeTypeDefinition::new(
        "PxrBump",
        vec![
            AttrDefinition::new("scale", AttributeValue::Float(1.0)),
            AttrDefinition::new("outNormal", AttributeValue::Normal3f(Vec3::Z)),
            message(),
        ],
    ));

    registry
}

static BUILTIN_REGISTRY: Lazy<NodeTypeRegistry> = Lazy::new(standard_types);

/// The builtin registry covering the standard shading node set.
pub fn builtin_registry() -> &'static NodeTypeRegistry {
    &BUILTIN_REGISTRY
}
