//! Persisted shading prims: schema roles, declared shader identifiers, and
//! typed inputs with connections.

use super::path::PrimPath;
use crate::values::AttributeValue;
use serde::{Deserialize, Serialize};

/// Schema type of a prim. The terminal-vs-intermediate role of a shading
/// prim lives here, in the schema, not in a stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimSchema {
    /// A material root owning a shading network.
    Material,
    /// The terminal (root) shader of a material.
    BxdfShader,
    /// Any non-terminal shading node feeding the network.
    PatternShader,
}

impl PrimSchema {
    /// Whether this prim is part of a shading network (terminal or not).
    pub fn is_shading(&self) -> bool {
        matches!(self, PrimSchema::BxdfShader | PrimSchema::PatternShader)
    }
}

/// A connection from an input to a named output on another prim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConnection {
    pub source: PrimPath,
    pub output: String,
}

/// A named, typed input on a shading prim. Holds the default-time value and
/// an optional upstream connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeInput {
    pub name: String,
    pub type_name: String,
    pub value: AttributeValue,
    pub connection: Option<InputConnection>,
}

/// A prim on the persisted stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadePrim {
    pub path: PrimPath,
    pub schema: PrimSchema,
    /// Declared source identifier of the shader (the resolved RIS shader
    /// type). `None` for material prims.
    pub shader_id: Option<String>,
    /// Ordered input set; order is creation order.
    pub inputs: Vec<ShadeInput>,
    /// Material prims only: path of the terminal shader prim.
    pub bxdf_source: Option<PrimPath>,
}

impl ShadePrim {
    pub fn new(path: PrimPath, schema: PrimSchema) -> Self {
        Self {
            path,
            schema,
            shader_id: None,
            inputs: Vec::new(),
            bxdf_source: None,
        }
    }

    /// Declares the shader identifier.
    pub fn set_shader_id(&mut self, shader_id: impl Into<String>) {
        self.shader_id = Some(shader_id.into());
    }

    /// Declares a typed input and sets its default-time value. An input that
    /// already exists keeps its position and connection; only the type and
    /// value are updated.
    pub fn create_input(
        &mut self,
        name: &str,
        type_name: &str,
        value: AttributeValue,
    ) -> &mut ShadeInput {
        let idx = match self.inputs.iter().position(|i| i.name == name) {
            Some(idx) => {
                self.inputs[idx].type_name = type_name.to_string();
                self.inputs[idx].value = value;
                idx
            }
            None => {
                self.inputs.push(ShadeInput {
                    name: name.to_string(),
                    type_name: type_name.to_string(),
                    value,
                    connection: None,
                });
                self.inputs.len() - 1
            }
        };
        &mut self.inputs[idx]
    }

    /// Finds an input by name.
    pub fn input(&self, name: &str) -> Option<&ShadeInput> {
        self.inputs.iter().find(|i| i.name == name)
    }

    /// Connects a named input to an output on another prim. Returns false
    /// when the input does not exist.
    pub fn connect_input(&mut self, name: &str, source: PrimPath, output: &str) -> bool {
        match self.inputs.iter_mut().find(|i| i.name == name) {
            Some(input) => {
                input.connection = Some(InputConnection {
                    source,
                    output: output.to_string(),
                });
                true
            }
            None => false,
        }
    }
}
