use tracing::{debug, trace};
use tree_sitter::{Node, Parser, Tree};

use crate::error::ParserError;

/// Thin wrapper around a tree-sitter parser loaded with the Go grammar.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, ParserError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|_| ParserError::language_setup_failed("go"))?;
        Ok(Self { parser })
    }

    /// Parse Go source text.
    ///
    /// tree-sitter recovers from syntax errors; a recovered tree is rejected
    /// here so that broken files never produce a selector.
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParserError> {
        let tree = self.parser.parse(source, None).ok_or(ParserError::NoTree)?;
        let root = tree.root_node();
        trace!(kind = root.kind(), bytes = source.len(), "parsed source");

        if root.has_error() {
            let err = first_error(root)
                .map(|node| {
                    let pos = node.start_position();
                    let message = if node.is_missing() {
                        format!("missing {}", node.kind())
                    } else {
                        "unexpected input".to_string()
                    };
                    ParserError::syntax_error(pos.row + 1, pos.column + 1, message)
                })
                .unwrap_or_else(|| ParserError::syntax_error(1, 1, "unparseable source"));
            debug!(error = %err, "rejecting source with syntax errors");
            return Err(err);
        }

        Ok(tree)
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
