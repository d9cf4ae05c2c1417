//! Named-lookup helpers over the XML DOM.
//!
//! All traversal goes through these helpers so that sections and records are
//! located by their local tag name, never by child position. Lookups compare
//! local names only, which makes them independent of the source tool's
//! namespace prefix.

use roxmltree::Node;

use crate::error::ConvertError;
use crate::models::{ColorTransform, TransformMatrix};

/// Iterate the element children of a node, skipping text and comments.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

/// Find the first child element with the given local tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    element_children(node).find(|n| n.tag_name().name() == name)
}

/// Find a child element, failing with a structural error naming the context.
pub fn required_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
    context: &str,
) -> Result<Node<'a, 'input>, ConvertError> {
    find_child(node, name).ok_or_else(|| {
        ConvertError::structural(format!("expected <{}> element under {}", name, context))
    })
}

/// Read an attribute, failing with a structural error naming the context.
pub fn required_attr(node: Node, name: &str, context: &str) -> Result<String, ConvertError> {
    node.attribute(name).map(str::to_string).ok_or_else(|| {
        ConvertError::structural(format!("missing '{}' attribute on {}", name, context))
    })
}

fn attr_or<'a>(node: Node<'a, '_>, name: &str, default: &'a str) -> String {
    node.attribute(name).unwrap_or(default).to_string()
}

/// Extract the transform matrix nested under a placed element.
///
/// Placed elements carry `<matrix><Matrix a=".." .../></matrix>`; the source
/// format omits attributes (and sometimes the whole record) at their default
/// values, so absent attributes read as the identity defaults.
pub fn matrix_record(instance: Node) -> TransformMatrix {
    let record = find_child(instance, "matrix").and_then(|m| find_child(m, "Matrix"));
    match record {
        Some(matrix) => TransformMatrix([
            attr_or(matrix, "a", "1"),
            attr_or(matrix, "b", "0"),
            attr_or(matrix, "c", "0"),
            attr_or(matrix, "d", "1"),
            attr_or(matrix, "tx", "0"),
            attr_or(matrix, "ty", "0"),
        ]),
        None => TransformMatrix::identity(),
    }
}

/// Extract the color multipliers nested under a placed element.
///
/// Placed elements may carry `<color><Color redMultiplier=".." .../></color>`.
/// An absent record, and any absent multiplier on a present record, reads as
/// the textual identity value, which collapses to the `"default"` sentinel.
pub fn color_record(instance: Node) -> ColorTransform {
    let record = find_child(instance, "color").and_then(|c| find_child(c, "Color"));
    match record {
        Some(color) => ColorTransform::from_multipliers([
            attr_or(color, "redMultiplier", ColorTransform::IDENTITY),
            attr_or(color, "greenMultiplier", ColorTransform::IDENTITY),
            attr_or(color, "blueMultiplier", ColorTransform::IDENTITY),
            attr_or(color, "alphaMultiplier", ColorTransform::IDENTITY),
        ]),
        None => ColorTransform::Default,
    }
}
