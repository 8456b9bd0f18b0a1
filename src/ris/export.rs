//! Export walk: host dependency graph to persisted shading prims.
//!
//! Depth-first and synchronous; recursion depth equals shading-graph depth,
//! bounded only by the call stack. A partial export leaves the prims created
//! so far on the stage; there is no rollback.

use crate::dag::{DepGraph, NodeId};
use crate::stage::{sanitize_name, PrimPath, PrimSchema, ShadeStage};
use std::collections::HashSet;

use super::mapping::{to_shader_id, SHADER_ID_PREFIX};

/// Scope prim under which exported materials are parented.
pub const LOOKS_SCOPE: &str = "Looks";

/// One material's assignment set: its name and the geometry it is bound to.
/// Binding resolution itself is a host concern; the bound paths only decide
/// whether there is anything worth exporting.
#[derive(Debug, Clone, Default)]
pub struct MaterialAssignment {
    pub material_name: String,
    pub bound_paths: Vec<PrimPath>,
}

/// Exports one shading node (and, recursively, its upstream network) under
/// `material_path`. Returns the prim path, or `None` when the node's type
/// does not resolve to a RIS shader — callers drop the connection and keep
/// exporting.
///
/// `visited` is the per-session dedup set: a path already visited is never
/// reprocessed, so shared sub-graphs are emitted once and a cyclic graph
/// resolves its back-edge to the already-defined (possibly still-filling)
/// prim instead of recursing forever. A visited path with no prim behind it
/// was an unsupported-type skip and stays `None`.
pub fn export_shading_node(
    stage: &mut ShadeStage,
    graph: &DepGraph,
    material_path: &PrimPath,
    node_id: NodeId,
    visited: &mut HashSet<PrimPath>,
    is_root: bool,
) -> Option<PrimPath> {
    let node = graph.node(node_id)?;

    let shader_path = material_path.append_child(&sanitize_name(&node.name));
    if visited.contains(&shader_path) {
        return if stage.contains(&shader_path) {
            Some(shader_path)
        } else {
            None
        };
    }
    visited.insert(shader_path.clone());

    let shader_id = to_shader_id(&node.type_name);
    if !shader_id.starts_with(SHADER_ID_PREFIX) {
        log::warn!(
            "skipping '{}': its type '{}' does not resolve to a RIS shader",
            node.name,
            shader_id
        );
        return None;
    }

    // The root call is the Bxdf; everything upstream is a pattern.
    let schema = if is_root {
        PrimSchema::BxdfShader
    } else {
        PrimSchema::PatternShader
    };
    stage
        .define_prim(&shader_path, schema)
        .set_shader_id(shader_id);

    for attr in &node.attributes {
        if attr.procedural || attr.compound_child {
            continue;
        }
        // No persisted equivalent for this payload: skip without noise.
        let Some(type_name) = attr.value.usd_type_name() else {
            continue;
        };

        if let Some(prim) = stage.prim_at_mut(&shader_path) {
            prim.create_input(&attr.name, type_name, attr.value.clone());
        }

        if let Some((src_node, src_attr)) = graph.upstream_source(node_id, &attr.name) {
            if let Some(src_path) =
                export_shading_node(stage, graph, material_path, src_node, visited, false)
            {
                if let Some(prim) = stage.prim_at_mut(&shader_path) {
                    prim.connect_input(&attr.name, src_path, src_attr);
                }
            }
        }
    }

    Some(shader_path)
}

/// Exports a material's shading network.
///
/// No-op when the assignment set is empty. The material prim is defined
/// under `/Looks`; the surface shader is exported as the root call and
/// recorded as the material's terminal-shader source. Returns the material
/// path once that source is set. An unresolvable surface shader leaves the
/// material prim in place and returns `None`.
pub fn export_material(
    stage: &mut ShadeStage,
    graph: &DepGraph,
    assignment: &MaterialAssignment,
    surface_shader: Option<NodeId>,
) -> Option<PrimPath> {
    if assignment.bound_paths.is_empty() {
        return None;
    }

    let material_path = PrimPath::root()
        .append_child(LOOKS_SCOPE)
        .append_child(&sanitize_name(&assignment.material_name));
    stage.define_prim(&material_path, PrimSchema::Material);

    let shader = surface_shader?;
    let mut visited = HashSet::new();
    let shader_path =
        export_shading_node(stage, graph, &material_path, shader, &mut visited, true)?;
    stage.set_bxdf_source(&material_path, shader_path).ok()?;
    Some(material_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::{builtin_registry, Attribute, Connection, DepNode};
    use crate::values::AttributeValue;
    use glam::Vec3;

    fn assignment() -> MaterialAssignment {
        MaterialAssignment {
            material_name: "brickMat".to_string(),
            bound_paths: vec![PrimPath::new("/geo/brick")],
        }
    }

    fn textured_lambert() -> (DepGraph, NodeId) {
        let mut graph = DepGraph::new();
        let registry = builtin_registry();
        let tex = graph.create_node(registry, "file", "file1").unwrap();
        let surf = graph.create_node(registry, "lambert", "lambert1").unwrap();
        graph.set_attr_value(
            tex,
            "fileTextureName",
            AttributeValue::Asset("brick.tex".to_string()),
        );
        graph
            .connect(Connection::new(tex, "outColor", surf, "color"))
            .unwrap();
        (graph, surf)
    }

    #[test]
    fn test_root_is_bxdf_and_upstream_is_pattern() {
        let (graph, surf) = textured_lambert();
        let mut stage = ShadeStage::new();

        let mat = export_material(&mut stage, &graph, &assignment(), Some(surf)).unwrap();
        assert_eq!(mat.as_str(), "/Looks/brickMat");

        let surf_prim = stage.prim_at(&mat.append_child("lambert1")).unwrap();
        assert_eq!(surf_prim.schema, PrimSchema::BxdfShader);
        assert_eq!(surf_prim.shader_id.as_deref(), Some("PxrDiffuse"));
        assert_eq!(stage.bxdf_source(&mat), Some(&surf_prim.path.clone()));

        let tex_prim = stage.prim_at(&mat.append_child("file1")).unwrap();
        assert_eq!(tex_prim.schema, PrimSchema::PatternShader);
        assert_eq!(tex_prim.shader_id.as_deref(), Some("PxrTexture"));
        assert_eq!(
            tex_prim.input("fileTextureName").unwrap().value,
            AttributeValue::Asset("brick.tex".to_string())
        );

        let color = surf_prim.input("color").unwrap();
        let connection = color.connection.as_ref().unwrap();
        assert_eq!(connection.source, tex_prim.path);
        assert_eq!(connection.output, "outColor");
    }

    #[test]
    fn test_export_is_idempotent_within_a_session() {
        let (graph, surf) = textured_lambert();
        let mut stage = ShadeStage::new();
        let mat = PrimPath::new("/Looks/brickMat");
        stage.define_prim(&mat, PrimSchema::Material);

        let mut visited = HashSet::new();
        let first = export_shading_node(&mut stage, &graph, &mat, surf, &mut visited, true);
        let count = stage.len();
        let second = export_shading_node(&mut stage, &graph, &mat, surf, &mut visited, true);

        assert_eq!(first, second);
        assert_eq!(stage.len(), count);
    }

    #[test]
    fn test_shared_upstream_is_exported_once() {
        let mut graph = DepGraph::new();
        let registry = builtin_registry();
        let tex = graph.create_node(registry, "file", "file1").unwrap();
        let check = graph.create_node(registry, "checker", "checker1").unwrap();
        let bump = graph.create_node(registry, "bump2d", "bump1").unwrap();
        let surf = graph.create_node(registry, "lambert", "lambert1").unwrap();

        // Two pattern nodes share the same upstream texture.
        graph
            .connect(Connection::new(tex, "outColor", check, "color1"))
            .unwrap();
        graph
            .connect(Connection::new(tex, "outAlpha", bump, "bumpValue"))
            .unwrap();
        graph
            .connect(Connection::new(check, "outColor", surf, "color"))
            .unwrap();
        graph
            .connect(Connection::new(bump, "outNormal", surf, "transparency"))
            .unwrap();

        let mut stage = ShadeStage::new();
        let mat = export_material(&mut stage, &graph, &assignment(), Some(surf)).unwrap();

        // Material + four shading prims, the shared texture only once.
        assert_eq!(stage.len(), 5);
        let tex_path = mat.append_child("file1");
        assert!(stage.contains(&tex_path));

        let check_in = stage
            .prim_at(&mat.append_child("checker1"))
            .and_then(|p| p.input("color1"))
            .and_then(|i| i.connection.as_ref())
            .unwrap();
        let bump_in = stage
            .prim_at(&mat.append_child("bump1"))
            .and_then(|p| p.input("bumpValue"))
            .and_then(|i| i.connection.as_ref())
            .unwrap();
        assert_eq!(check_in.source, tex_path);
        assert_eq!(bump_in.source, tex_path);
        assert_eq!(check_in.output, "outColor");
        assert_eq!(bump_in.output, "outAlpha");
    }

    #[test]
    fn test_unsupported_upstream_drops_only_that_connection() {
        let mut graph = DepGraph::new();
        let registry = builtin_registry();

        let mut alien = DepNode::new("aiNoise", "noise1");
        alien.add_attr(Attribute::new(
            "outColor",
            AttributeValue::Color3f(Vec3::ZERO),
        ));
        let alien_id = graph.add_node(alien);

        let tex = graph.create_node(registry, "file", "file1").unwrap();
        let surf = graph.create_node(registry, "lambert", "lambert1").unwrap();
        graph
            .connect(Connection::new(alien_id, "outColor", surf, "color"))
            .unwrap();
        graph
            .connect(Connection::new(alien_id, "outColor", surf, "transparency"))
            .unwrap();
        graph
            .connect(Connection::new(tex, "outColor", surf, "diffuse"))
            .unwrap();

        let mut stage = ShadeStage::new();
        let mat = export_material(&mut stage, &graph, &assignment(), Some(surf)).unwrap();

        let surf_prim = stage.prim_at(&mat.append_child("lambert1")).unwrap();
        // The unsupported branch terminates: inputs keep their values but
        // stay unconnected, for the revisit through the visited set too.
        let color = surf_prim.input("color").unwrap();
        assert!(color.connection.is_none());
        assert_eq!(color.value, AttributeValue::Color3f(Vec3::splat(0.5)));
        assert!(surf_prim.input("transparency").unwrap().connection.is_none());
        assert!(!stage.contains(&mat.append_child("noise1")));

        // The supported sibling branch still exported and connected.
        assert!(surf_prim.input("diffuse").unwrap().connection.is_some());
        assert!(stage.contains(&mat.append_child("file1")));
    }

    #[test]
    fn test_structural_attributes_are_not_exported() {
        let (graph, surf) = textured_lambert();
        let mut stage = ShadeStage::new();
        let mat = export_material(&mut stage, &graph, &assignment(), Some(surf)).unwrap();

        let surf_prim = stage.prim_at(&mat.append_child("lambert1")).unwrap();
        // Procedural, compound-child and unrepresentable payloads all skip.
        assert!(surf_prim.input("message").is_none());
        assert!(surf_prim.input("colorR").is_none());
    }

    #[test]
    fn test_empty_assignments_export_nothing() {
        let (graph, surf) = textured_lambert();
        let mut stage = ShadeStage::new();
        let empty = MaterialAssignment {
            material_name: "brickMat".to_string(),
            bound_paths: Vec::new(),
        };

        assert!(export_material(&mut stage, &graph, &empty, Some(surf)).is_none());
        assert!(stage.is_empty());
    }

    #[test]
    fn test_unresolvable_surface_shader_leaves_material_only() {
        let (graph, _) = textured_lambert();
        let mut stage = ShadeStage::new();

        assert!(export_material(&mut stage, &graph, &assignment(), None).is_none());
        assert_eq!(stage.len(), 1);
        assert!(stage.contains(&PrimPath::new("/Looks/brickMat")));
    }
}
