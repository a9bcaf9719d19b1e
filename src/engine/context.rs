/// Resolution context shared by the locators.
///
/// Bundles the parse tree, the source text it was built from and the resolver
/// configuration, plus line-range helpers over tree-sitter nodes.
use tree_sitter::{Node, Tree};

use crate::config::ResolverConfig;
use crate::utils::unquote_go_string;

/// Inclusive, 1-based span of lines covered by a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn of(node: &Node) -> Self {
        Self {
            start: node.start_position().row + 1,
            end: node.end_position().row + 1,
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

pub struct Context<'a> {
    /// The Tree-sitter parse tree
    tree: &'a Tree,

    /// Source text the tree was parsed from
    source: &'a str,

    config: &'a ResolverConfig,
}

impl<'a> Context<'a> {
    pub fn new(tree: &'a Tree, source: &'a str, config: &'a ResolverConfig) -> Self {
        Self {
            tree,
            source,
            config,
        }
    }

    pub fn root(&self) -> Node<'a> {
        self.tree.root_node()
    }

    pub fn config(&self) -> &'a ResolverConfig {
        self.config
    }

    /// Get the source text for a node
    pub fn get_node_text(&self, node: &Node) -> &'a str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    /// Decoded value of a string literal node.
    pub fn string_value(&self, node: &Node) -> String {
        unquote_go_string(self.get_node_text(node))
    }
}
