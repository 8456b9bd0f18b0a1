//! Persisted scene-description stage.
//!
//! A deliberately small in-memory stage: prims keyed by path in a `BTreeMap`
//! so traversal and serialization order are deterministic. The whole stage
//! round-trips through JSON, which is its persisted form.

pub mod path;
pub mod prim;

pub use path::{sanitize_name, PrimPath};
pub use prim::{InputConnection, PrimSchema, ShadeInput, ShadePrim};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An in-memory scene-description stage holding shading prims.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShadeStage {
    prims: BTreeMap<PrimPath, ShadePrim>,
}

impl ShadeStage {
    /// Creates a new empty stage.
    pub fn new() -> Self {
        Self {
            prims: BTreeMap::new(),
        }
    }

    /// Defines a prim at a path, or fetches the existing one. An existing
    /// prim keeps its schema; define-or-get never rewrites.
    pub fn define_prim(&mut self, path: &PrimPath, schema: PrimSchema) -> &mut ShadePrim {
        self.prims
            .entry(path.clone())
            .or_insert_with(|| ShadePrim::new(path.clone(), schema))
    }

    /// Looks up a prim by path.
    pub fn prim_at(&self, path: &PrimPath) -> Option<&ShadePrim> {
        self.prims.get(path)
    }

    /// Looks up a prim by path, mutably.
    pub fn prim_at_mut(&mut self, path: &PrimPath) -> Option<&mut ShadePrim> {
        self.prims.get_mut(path)
    }

    /// Whether a prim exists at a path.
    pub fn contains(&self, path: &PrimPath) -> bool {
        self.prims.contains_key(path)
    }

    /// Iterates over all prims in path order.
    pub fn prims(&self) -> impl Iterator<Item = &ShadePrim> {
        self.prims.values()
    }

    pub fn len(&self) -> usize {
        self.prims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// Records the terminal-shader source on a material prim.
    pub fn set_bxdf_source(
        &mut self,
        material: &PrimPath,
        shader: PrimPath,
    ) -> Result<(), &'static str> {
        match self.prims.get_mut(material) {
            Some(prim) if prim.schema == PrimSchema::Material => {
                prim.bxdf_source = Some(shader);
                Ok(())
            }
            Some(_) => Err("Prim is not a material"),
            None => Err("Material prim does not exist"),
        }
    }

    /// Reads the terminal-shader source of a material prim.
    pub fn bxdf_source(&self, material: &PrimPath) -> Option<&PrimPath> {
        self.prims.get(material).and_then(|p| p.bxdf_source.as_ref())
    }

    /// Serializes the stage to its persisted JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Loads a stage from its persisted JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
