use tracing::trace;
use tree_sitter::Node;

use super::context::{Context, LineRange};
use super::node_types::{
    is_string_literal, named_children, CALL_EXPRESSION, FUNC_LITERAL, SELECTOR_EXPRESSION,
};
use super::selector::Segment;

/// A recognized `x.Run(name, fn)` call.
#[derive(Debug, Clone, Copy)]
pub struct SubtestInvocation<'a> {
    pub name: Node<'a>,
    pub range: LineRange,
    /// Body of `fn` when it is a function literal.
    pub body: Option<Node<'a>>,
}

impl<'a> SubtestInvocation<'a> {
    /// Recognize `<operand>.Run(<name>, <fn>)` with exactly two arguments.
    pub fn recognize(node: Node<'a>, ctx: &Context<'a>) -> Option<Self> {
        if node.kind() != CALL_EXPRESSION {
            return None;
        }
        let function = node.child_by_field_name("function")?;
        if function.kind() != SELECTOR_EXPRESSION {
            return None;
        }
        let field = function.child_by_field_name("field")?;
        if ctx.get_node_text(&field) != ctx.config().run_method {
            return None;
        }

        let args = named_children(&node.child_by_field_name("arguments")?);
        let [name, func] = args.as_slice() else {
            return None;
        };

        let body = if func.kind() == FUNC_LITERAL {
            func.child_by_field_name("body")
        } else {
            None
        };

        Some(Self {
            name: *name,
            range: LineRange::of(&node),
            body,
        })
    }

    /// Exact segment for a literal name, wildcard for anything computed.
    pub fn segment(&self, ctx: &Context<'a>) -> Segment {
        if is_string_literal(&self.name) {
            Segment::subtest(&ctx.string_value(&self.name))
        } else {
            Segment::Wildcard
        }
    }
}

/// Path of sub-test segments down to the deepest `Run` call containing `line`.
///
/// Empty when no recognized call under `node` contains the line.
pub fn find_subtest<'a>(ctx: &Context<'a>, node: Node<'a>, line: usize) -> Vec<Segment> {
    if let Some(invocation) = SubtestInvocation::recognize(node, ctx) {
        if invocation.range.contains(line) {
            let segment = invocation.segment(ctx);
            trace!(line, %segment, start = invocation.range.start, "matched subtest");
            let mut path = vec![segment];
            if let Some(body) = invocation.body {
                path.extend(find_subtest(ctx, body, line));
            }
            return path;
        }
    }

    // Sibling ranges are disjoint, so only one child can hold the line.
    let mut cursor = node.walk();
    let children: Vec<Node<'a>> = node.children(&mut cursor).collect();
    for child in children {
        if !LineRange::of(&child).contains(line) {
            continue;
        }
        let path = find_subtest(ctx, child, line);
        if !path.is_empty() {
            return path;
        }
    }

    Vec::new()
}
