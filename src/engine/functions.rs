use tracing::trace;
use tree_sitter::Node;

use super::context::{Context, LineRange};
use super::node_types::{named_children, FUNCTION_DECLARATION};
use super::selector::Segment;

/// A top-level `func TestXxx(...)` declaration, borrowed from the parse tree.
#[derive(Debug, Clone, Copy)]
pub struct TestFunction<'a> {
    pub name: &'a str,
    pub range: LineRange,
    pub body: Option<Node<'a>>,
}

impl<'a> TestFunction<'a> {
    fn from_declaration(node: Node<'a>, ctx: &Context<'a>) -> Option<Self> {
        if node.kind() != FUNCTION_DECLARATION {
            return None;
        }
        let name = ctx.get_node_text(&node.child_by_field_name("name")?);
        if !name.starts_with(ctx.config().test_prefix.as_str()) {
            return None;
        }
        Some(Self {
            name,
            range: LineRange::of(&node),
            body: node.child_by_field_name("body"),
        })
    }

    pub fn segment(&self) -> Segment {
        Segment::exact(self.name)
    }
}

/// All test functions in declaration order.
pub fn test_functions<'a>(ctx: &Context<'a>) -> Vec<TestFunction<'a>> {
    named_children(&ctx.root())
        .into_iter()
        .filter_map(|decl| TestFunction::from_declaration(decl, ctx))
        .collect()
}

/// The test function whose lines contain `line`, if any.
pub fn enclosing_test_function<'a>(ctx: &Context<'a>, line: usize) -> Option<TestFunction<'a>> {
    let found = named_children(&ctx.root())
        .into_iter()
        .filter_map(|decl| TestFunction::from_declaration(decl, ctx))
        .find(|func| func.range.contains(line));
    trace!(line, function = found.map(|f| f.name), "enclosing test function");
    found
}

/// `^(T1|T2|...)$` over every test function, or `None` when the file has none.
pub fn file_segment(ctx: &Context) -> Option<Segment> {
    let names: Vec<String> = test_functions(ctx)
        .iter()
        .map(|func| func.name.to_string())
        .collect();
    if names.is_empty() {
        return None;
    }
    Some(Segment::Alternation(names))
}
