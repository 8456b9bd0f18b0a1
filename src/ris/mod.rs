//! RIS shading-network interchange: the export and import walks plus the
//! name mapping they share.

pub mod export;
pub mod import;
pub mod mapping;

pub use export::{export_material, export_shading_node, MaterialAssignment, LOOKS_SCOPE};
pub use import::{get_or_create_shader_node, import_material, PlugRef, TERMINAL_OUTPUT};
pub use mapping::{to_host_type, to_shader_id, RIS_NODE_TABLE, SHADER_ID_PREFIX};
