//! Bidirectional name mapping between host shader node types and RIS shader
//! identifiers.
//!
//! The table is fixed at load time and scanned linearly in both directions.
//! First match wins; with duplicate names on either side, table order is the
//! tie-break. That is a policy, not an accident — keep the table a flat list.

/// Reserved prefix marking a native RIS shader identifier.
pub const SHADER_ID_PREFIX: &str = "Pxr";

/// Fixed (host type name, RIS shader identifier) pairs.
pub const RIS_NODE_TABLE: &[(&str, &str)] = &[
    ("lambert", "PxrDiffuse"),
    ("blinn", "PxrBlinn"),
    ("file", "PxrTexture"),
    ("checker", "PxrChecker"),
    ("bump2d", "PxrBump"),
];

fn scan_host_column<'a>(table: &[(&'a str, &'a str)], host_type: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(host, _)| *host == host_type)
        .map(|(_, shader)| *shader)
}

fn scan_shader_column<'a>(table: &[(&'a str, &'a str)], shader_id: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(_, shader)| *shader == shader_id)
        .map(|(host, _)| *host)
}

/// Resolves a host node type name to a RIS shader identifier.
///
/// A name already carrying the native prefix is returned unchanged without a
/// table lookup. An unmatched name is also returned unchanged; callers treat
/// a result without the prefix as unsupported.
pub fn to_shader_id(host_type: &str) -> String {
    if host_type.starts_with(SHADER_ID_PREFIX) {
        return host_type.to_string();
    }
    match scan_host_column(RIS_NODE_TABLE, host_type) {
        Some(shader) => shader.to_string(),
        None => host_type.to_string(),
    }
}

/// Resolves a RIS shader identifier back to a host node type name.
///
/// An unmatched identifier is returned unchanged: native shader types that
/// never had a host-side alias are instantiated under their own name.
pub fn to_host_type(shader_id: &str) -> String {
    match scan_shader_column(RIS_NODE_TABLE, shader_id) {
        Some(host) => host.to_string(),
        None => shader_id.to_string(),
    }
}
