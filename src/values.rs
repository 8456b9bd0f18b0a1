//! Attribute value payloads shared by the host dependency graph and the
//! persisted stage.
//!
//! Both sides of the interchange speak the same value enum; what differs is
//! whether a given variant has a persisted input type at all. Variants that
//! don't (`Relationship`, `Unknown`) are skipped silently during export —
//! they are expected structural payloads, not errors.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    // Scalar types
    Bool(bool),
    Int(i32),
    Float(f32),
    Double(f64),
    String(String),
    Token(String),
    Asset(String),

    // Vector types
    Float2(Vec2),
    Float3(Vec3),
    Color3f(Vec3),
    Normal3f(Vec3),
    Point3f(Vec3),
    Vector3f(Vec3),

    // Matrix types
    Matrix4d(Mat4),

    // Array types
    BoolArray(Vec<bool>),
    IntArray(Vec<i32>),
    FloatArray(Vec<f32>),
    StringArray(Vec<String>),
    TokenArray(Vec<String>),
    Float2Array(Vec<Vec2>),
    Float3Array(Vec<Vec3>),
    Color3fArray(Vec<Vec3>),

    /// Paths to other nodes/prims. Host-side structural data with no
    /// persisted input equivalent.
    Relationship(Vec<String>),
    /// Fallback for host payloads the persisted format cannot represent.
    Unknown(String),
}

impl AttributeValue {
    /// The persisted value-type token for this payload, or `None` when the
    /// payload has no persisted-format equivalent.
    pub fn usd_type_name(&self) -> Option<&'static str> {
        let name = match self {
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Int(_) => "int",
            AttributeValue::Float(_) => "float",
            AttributeValue::Double(_) => "double",
            AttributeValue::String(_) => "string",
            AttributeValue::Token(_) => "token",
            AttributeValue::Asset(_) => "asset",
            AttributeValue::Float2(_) => "float2",
            AttributeValue::Float3(_) => "float3",
            AttributeValue::Color3f(_) => "color3f",
            AttributeValue::Normal3f(_) => "normal3f",
            AttributeValue::Point3f(_) => "point3f",
            AttributeValue::Vector3f(_) => "vector3f",
            AttributeValue::Matrix4d(_) => "matrix4d",
            AttributeValue::BoolArray(_) => "bool[]",
            AttributeValue::IntArray(_) => "int[]",
            AttributeValue::FloatArray(_) => "float[]",
            AttributeValue::StringArray(_) => "string[]",
            AttributeValue::TokenArray(_) => "token[]",
            AttributeValue::Float2Array(_) => "float2[]",
            AttributeValue::Float3Array(_) => "float3[]",
            AttributeValue::Color3fArray(_) => "color3f[]",
            AttributeValue::Relationship(_) | AttributeValue::Unknown(_) => return None,
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representable_types_have_names() {
        assert_eq!(AttributeValue::Float(1.0).usd_type_name(), Some("float"));
        assert_eq!(
            AttributeValue::Color3f(Vec3::ONE).usd_type_name(),
            Some("color3f")
        );
        assert_eq!(
            AttributeValue::Asset("checker.tex".to_string()).usd_type_name(),
            Some("asset")
        );
    }

    #[test]
    fn test_structural_payloads_have_no_persisted_type() {
        assert_eq!(
            AttributeValue::Relationship(vec!["/a".to_string()]).usd_type_name(),
            None
        );
        assert_eq!(
            AttributeValue::Unknown("message".to_string()).usd_type_name(),
            None
        );
    }
}
