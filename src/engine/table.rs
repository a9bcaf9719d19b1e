//! Name lookup for table-driven tests.
//!
//! When the cursor sits on a row of a case table rather than inside a `Run`
//! call, the sub-test name is read from the row literal itself.
use tracing::trace;
use tree_sitter::Node;

use super::context::{Context, LineRange};
use super::node_types::{
    is_string_literal, named_children, row_body, unwrap_element, KEYED_ELEMENT, LITERAL_VALUE,
};

/// One `key: value` or positional entry of a row literal.
#[derive(Debug, Clone, Copy)]
pub struct RowField<'a> {
    pub key: Option<Node<'a>>,
    pub value: Node<'a>,
}

/// A `{...}` row of a case table.
#[derive(Debug, Clone)]
pub struct TableRow<'a> {
    pub fields: Vec<RowField<'a>>,
    pub range: LineRange,
}

impl<'a> TableRow<'a> {
    pub fn from_literal(body: Node<'a>) -> Self {
        let fields = named_children(&body)
            .into_iter()
            .map(|element| match keyed_parts(element) {
                Some((key, value)) => RowField {
                    key: Some(key),
                    value,
                },
                None => RowField {
                    key: None,
                    value: unwrap_element(element),
                },
            })
            .collect();
        Self {
            fields,
            range: LineRange::of(&body),
        }
    }

    /// A string field under the earliest matching key of `name_fields`, else
    /// the first string field in written order.
    pub fn name(&self, ctx: &Context<'a>) -> Option<String> {
        let keyed = |wanted: &str| {
            self.fields.iter().find(|field| {
                is_string_literal(&field.value)
                    && field
                        .key
                        .is_some_and(|key| ctx.get_node_text(&key) == wanted)
            })
        };
        let by_key = ctx
            .config()
            .name_fields
            .iter()
            .find_map(|wanted| keyed(wanted));

        by_key
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|field| is_string_literal(&field.value))
            })
            .map(|field| ctx.string_value(&field.value))
    }
}

/// Sub-test name implied by the table row on `line`, if any.
pub fn resolve_table_row(ctx: &Context, line: usize) -> Option<String> {
    let name = find_row_name(ctx, ctx.root(), line);
    trace!(line, name = name.as_deref(), "table row lookup");
    name
}

fn find_row_name<'a>(ctx: &Context<'a>, node: Node<'a>, line: usize) -> Option<String> {
    if node.kind() == LITERAL_VALUE {
        let element = named_children(&node)
            .into_iter()
            .find(|element| LineRange::of(element).contains(line));
        if let Some(name) = element.and_then(|element| element_name(ctx, element)) {
            return Some(name);
        }
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'a>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| LineRange::of(child).contains(line))
        .find_map(|child| find_row_name(ctx, child, line))
}

fn element_name<'a>(ctx: &Context<'a>, element: Node<'a>) -> Option<String> {
    // map[string]T{"case": {...}}: the key is the name.
    if let Some((key, value)) = keyed_parts(element) {
        if is_string_literal(&key) {
            return Some(ctx.string_value(&key));
        }
        return row_body(value).and_then(|body| TableRow::from_literal(body).name(ctx));
    }

    let value = unwrap_element(element);
    if is_string_literal(&value) {
        return Some(ctx.string_value(&value));
    }
    row_body(value).and_then(|body| TableRow::from_literal(body).name(ctx))
}

fn keyed_parts(element: Node) -> Option<(Node, Node)> {
    if element.kind() != KEYED_ELEMENT {
        return None;
    }
    let parts = named_children(&element);
    match parts.as_slice() {
        [key, value, ..] => Some((unwrap_element(*key), unwrap_element(*value))),
        _ => None,
    }
}
