//! Import walk: persisted shading prims back into a host dependency graph.
//!
//! The mirror of the export walk: depth-first, synchronous, with a
//! per-session cache keyed by prim path. Failed creations are cached too, so
//! a missing node type is reported once and never retried within a session.

use crate::dag::{Connection, DepGraph, NodeId, NodeTypeRegistry};
use crate::stage::{PrimPath, ShadeStage};
use std::collections::HashMap;

use super::mapping::to_host_type;

/// Conventional output attribute of a terminal shader.
pub const TERMINAL_OUTPUT: &str = "outColor";

/// A reference to a named attribute on a host node.
#[derive(Debug, Clone, PartialEq)]
pub struct PlugRef {
    pub node: NodeId,
    pub attr: String,
}

/// Resolves a shading prim to its host node, creating it on first visit.
///
/// `created` is the per-session cache. It records failures as `None`, and a
/// placeholder is installed before creation starts, so a prim graph with a
/// true cycle drops the back-edge connection instead of recursing forever.
pub fn get_or_create_shader_node(
    stage: &ShadeStage,
    path: &PrimPath,
    graph: &mut DepGraph,
    registry: &NodeTypeRegistry,
    created: &mut HashMap<PrimPath, Option<NodeId>>,
) -> Option<NodeId> {
    if let Some(cached) = created.get(path) {
        return *cached;
    }
    created.insert(path.clone(), None);

    let result = create_shader_node(stage, path, graph, registry, created);
    created.insert(path.clone(), result);
    result
}

/// Should only be called through `get_or_create_shader_node`.
fn create_shader_node(
    stage: &ShadeStage,
    path: &PrimPath,
    graph: &mut DepGraph,
    registry: &NodeTypeRegistry,
    created: &mut HashMap<PrimPath, Option<NodeId>>,
) -> Option<NodeId> {
    let prim = stage.prim_at(path)?;
    let Some(shader_id) = prim.shader_id.as_deref() else {
        log::warn!("shading prim '{path}' declares no shader identifier");
        return None;
    };

    let type_name = to_host_type(shader_id);
    let Some(node_id) = graph.create_node(registry, &type_name, path.name()) else {
        log::error!(
            "Could not create node of type '{}' for shader '{}'. Probably missing a plugin.",
            type_name,
            path.name()
        );
        return None;
    };

    for input in &prim.inputs {
        // Only inputs with a same-named host attribute come across.
        if graph.node(node_id).and_then(|n| n.attr(&input.name)).is_none() {
            continue;
        }
        graph.set_attr_value(node_id, &input.name, input.value.clone());

        let Some(connection) = &input.connection else {
            continue;
        };
        // Follow shading connections only, terminal or pattern alike.
        let source_is_shading = stage
            .prim_at(&connection.source)
            .map(|p| p.schema.is_shading())
            .unwrap_or(false);
        if !source_is_shading {
            continue;
        }

        let Some(src_node) =
            get_or_create_shader_node(stage, &connection.source, graph, registry, created)
        else {
            continue;
        };
        if graph
            .node(src_node)
            .and_then(|n| n.attr(&connection.output))
            .is_none()
        {
            continue;
        }
        if let Err(reason) = graph.connect(Connection::new(
            src_node,
            connection.output.clone(),
            node_id,
            input.name.clone(),
        )) {
            log::debug!(
                "not connecting {} -> {}.{}: {}",
                connection.source,
                path.name(),
                input.name,
                reason
            );
        }
    }

    Some(node_id)
}

/// Imports a material's shading network into the host graph.
///
/// Follows the material's terminal-shader source, resolves or creates its
/// host node, and returns the node's conventional `outColor` plug. `None`
/// when the material has no terminal source, the node cannot be created, or
/// it has no such output.
pub fn import_material(
    stage: &ShadeStage,
    material_path: &PrimPath,
    graph: &mut DepGraph,
    registry: &NodeTypeRegistry,
) -> Option<PlugRef> {
    let bxdf_path = stage.bxdf_source(material_path)?.clone();

    let mut created = HashMap::new();
    let node = get_or_create_shader_node(stage, &bxdf_path, graph, registry, &mut created)?;
    graph.node(node)?.attr(TERMINAL_OUTPUT)?;
    Some(PlugRef {
        node,
        attr: TERMINAL_OUTPUT.to_string(),
    })
}
