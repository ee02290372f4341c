use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::GlyphsBuildError;

/// The kind of a path node.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum NodeType {
    Line,
    Curve,
    OffCurve,
}

impl NodeType {
    fn as_str(&self) -> &'static str {
        match self {
            NodeType::Line => "LINE",
            NodeType::Curve => "CURVE",
            NodeType::OffCurve => "OFFCURVE",
        }
    }
}

/// A control point in a path.
///
/// Round-trips the textual form `"<x> <y> <TYPE> [SMOOTH]"`, e.g.
/// `"0 226 LINE"`. Transforms touch only the coordinates; the kind and
/// smooth flag are carried through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub nodetype: NodeType,
    pub smooth: bool,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.nodetype.as_str())?;
        if self.smooth {
            write!(f, " SMOOTH")?;
        }
        Ok(())
    }
}

impl FromStr for Node {
    type Err = GlyphsBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || GlyphsBuildError::BadNode {
            text: s.to_string(),
        };
        let mut tokens = s.split_whitespace();
        let x = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(bad)?;
        let y = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(bad)?;
        let nodetype = match tokens.next() {
            Some("LINE") => NodeType::Line,
            Some("CURVE") => NodeType::Curve,
            Some("OFFCURVE") => NodeType::OffCurve,
            _ => return Err(bad()),
        };
        let smooth = match tokens.next() {
            Some("SMOOTH") => true,
            None => false,
            Some(_) => return Err(bad()),
        };
        if tokens.next().is_some() {
            return Err(bad());
        }
        Ok(Node {
            x,
            y,
            nodetype,
            smooth,
        })
    }
}

/// An affine transformation, serialized as `{m11, m12, m21, m22, tX, tY}`.
///
/// Maps a point `(x, y)` to `(x·m11 + y·m21 + tX, x·m12 + y·m22 + tY)`,
/// which is exactly [`kurbo::Affine`]'s coefficient order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(pub kurbo::Affine);

impl Default for Transform {
    fn default() -> Self {
        Transform(kurbo::Affine::IDENTITY)
    }
}

impl Transform {
    pub fn is_identity(&self) -> bool {
        self.0 == kurbo::Affine::IDENTITY
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let point = self.0 * kurbo::Point::new(x, y);
        (point.x, point.y)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [m11, m12, m21, m22, t_x, t_y] = self.0.as_coeffs();
        write!(f, "{{{}, {}, {}, {}, {}, {}}}", m11, m12, m21, m22, t_x, t_y)
    }
}

impl FromStr for Transform {
    type Err = GlyphsBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || GlyphsBuildError::BadTransform {
            text: s.to_string(),
        };
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .ok_or_else(bad)?;
        let coeffs: Vec<f64> = inner
            .split(',')
            .map(|t| t.trim().parse())
            .collect::<Result<_, _>>()
            .map_err(|_| bad())?;
        let coeffs: [f64; 6] = coeffs.try_into().map_err(|_| bad())?;
        Ok(Transform(kurbo::Affine::new(coeffs)))
    }
}

impl Serialize for Transform {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A weak, name-keyed reference to another glyph's outline.
///
/// Resolved by lookup against the font's glyph list at expansion time; it
/// is not guaranteed to resolve, and a dangling reference is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// The referenced glyph's name
    pub name: SmolStr,
    /// Maps referenced-glyph-space coordinates into the referencing layer's space
    #[serde(default, skip_serializing_if = "Transform::is_identity")]
    pub transform: Transform,
    /// Format-specific data carried through untouched
    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

/// A contour: an ordered list of nodes, closed or open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    #[serde(
        default,
        serialize_with = "crate::serde_helpers::serialize_nodes",
        deserialize_with = "crate::serde_helpers::deserialize_nodes"
    )]
    pub nodes: Vec<Node>,
    #[serde(
        default,
        skip_serializing_if = "std::ops::Not::not",
        deserialize_with = "crate::serde_helpers::deserialize_flag"
    )]
    pub closed: bool,
}

impl Path {
    /// A copy of this path with the transform applied to every node's
    /// coordinates. Node kinds and flags are unchanged.
    pub fn transformed(&self, transform: &Transform) -> Path {
        Path {
            nodes: self
                .nodes
                .iter()
                .map(|node| {
                    let (x, y) = transform.apply(node.x, node.y);
                    Node {
                        x,
                        y,
                        nodetype: node.nodetype,
                        smooth: node.smooth,
                    }
                })
                .collect(),
            closed: self.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("0 226 LINE", 0.0, 226.0, NodeType::Line, false)]
    #[case("84 756 CURVE SMOOTH", 84.0, 756.0, NodeType::Curve, true)]
    #[case("-12.5 0.25 OFFCURVE", -12.5, 0.25, NodeType::OffCurve, false)]
    fn test_node_parse(
        #[case] text: &str,
        #[case] x: f64,
        #[case] y: f64,
        #[case] nodetype: NodeType,
        #[case] smooth: bool,
    ) {
        let node: Node = text.parse().unwrap();
        assert_eq!(
            node,
            Node {
                x,
                y,
                nodetype,
                smooth
            }
        );
        assert_eq!(node.to_string(), text);
    }

    #[test]
    fn test_node_parse_garbage() {
        assert!("226 LINE".parse::<Node>().is_err());
        assert!("0 226 WIBBLE".parse::<Node>().is_err());
        assert!("0 226 LINE JAGGED".parse::<Node>().is_err());
    }

    #[test]
    fn test_transform_roundtrip() {
        let transform: Transform = "{1, 0, 0, 1, 220, 0}".parse().unwrap();
        assert_eq!(transform.to_string(), "{1, 0, 0, 1, 220, 0}");
        assert!(!transform.is_identity());
        assert!("{1, 0, 0, 1}".parse::<Transform>().is_err());
        assert!("1, 0, 0, 1, 220, 0".parse::<Transform>().is_err());
    }

    #[test]
    fn test_pure_translation() {
        let transform: Transform = "{1, 0, 0, 1, 220, 0}".parse().unwrap();
        assert_eq!(transform.apply(0.0, 226.0), (220.0, 226.0));
    }

    #[test]
    fn test_scale_and_skew_order() {
        // x' = x·m11 + y·m21 + tX, y' = x·m12 + y·m22 + tY
        let transform: Transform = "{2, 0, 1, 3, 10, -5}".parse().unwrap();
        assert_eq!(transform.apply(4.0, 2.0), (4.0 * 2.0 + 2.0 + 10.0, 2.0 * 3.0 - 5.0));
    }

    #[test]
    fn test_path_transformed_preserves_flags() {
        let path = Path {
            nodes: vec![
                "0 226 LINE SMOOTH".parse().unwrap(),
                "10 20 OFFCURVE".parse().unwrap(),
            ],
            closed: true,
        };
        let moved = path.transformed(&"{1, 0, 0, 1, 220, 0}".parse().unwrap());
        assert_eq!(moved.nodes[0].to_string(), "220 226 LINE SMOOTH");
        assert_eq!(moved.nodes[1].to_string(), "230 246 OFFCURVE");
        assert!(moved.closed);
    }
}
