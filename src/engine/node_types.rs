//! tree-sitter-go node kinds and small structural predicates shared by the
//! locators.
use tree_sitter::Node;

pub const FUNCTION_DECLARATION: &str = "function_declaration";
pub const CALL_EXPRESSION: &str = "call_expression";
pub const SELECTOR_EXPRESSION: &str = "selector_expression";
pub const FUNC_LITERAL: &str = "func_literal";
pub const COMPOSITE_LITERAL: &str = "composite_literal";
pub const LITERAL_VALUE: &str = "literal_value";
pub const LITERAL_ELEMENT: &str = "literal_element";
pub const KEYED_ELEMENT: &str = "keyed_element";
pub const UNARY_EXPRESSION: &str = "unary_expression";
pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
pub const COMMENT: &str = "comment";

pub fn is_string_literal(node: &Node) -> bool {
    matches!(
        node.kind(),
        "interpreted_string_literal" | "raw_string_literal"
    )
}

/// Named children, comments excluded.
pub fn named_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() != COMMENT)
        .collect()
}

/// Strip the `literal_element` wrapper newer grammars put around values
/// inside `{...}`.
pub fn unwrap_element<'a>(node: Node<'a>) -> Node<'a> {
    if node.kind() == LITERAL_ELEMENT {
        if let Some(inner) = named_children(&node).into_iter().next() {
            return inner;
        }
    }
    node
}

/// The `{...}` body of a row, looking through `T{...}`, `&T{...}` and
/// parentheses.
pub fn row_body<'a>(node: Node<'a>) -> Option<Node<'a>> {
    match node.kind() {
        LITERAL_VALUE => Some(node),
        COMPOSITE_LITERAL => node.child_by_field_name("body").or_else(|| {
            named_children(&node)
                .into_iter()
                .find(|c| c.kind() == LITERAL_VALUE)
        }),
        UNARY_EXPRESSION | PARENTHESIZED_EXPRESSION => node
            .child_by_field_name("operand")
            .or_else(|| named_children(&node).into_iter().last())
            .and_then(row_body),
        _ => None,
    }
}
