use crate::parser::Attribute;

/// Terminator for fragments rendered inline, such as attribute lists.
pub const INLINE: &str = ", ";

/// Terminator for fragments rendered one per line.
pub const LINE: &str = "\n";

/// Position and separator for one level of a description
#[derive(Debug, Clone, Copy)]
pub struct DescribeContext<'a> {
    pub indent: usize,
    pub terminator: &'a str,
}

impl<'a> DescribeContext<'a> {
    pub fn new() -> Self {
        Self {
            indent: 0,
            terminator: INLINE,
        }
    }

    pub fn with_indent(&self, indent: usize) -> Self {
        Self {
            indent,
            terminator: self.terminator,
        }
    }

    pub fn with_terminator(&self, terminator: &'a str) -> Self {
        Self {
            indent: self.indent,
            terminator,
        }
    }

    /// Context for the children of a node rendered at this level.
    pub fn nested(&self) -> Self {
        Self {
            indent: self.indent + 1,
            terminator: LINE,
        }
    }

    pub fn indent(&self) -> String {
        " ".repeat(self.indent)
    }
}

impl Default for DescribeContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// What the tree describer needs to know about a node.
///
/// Attributes are their own facet rather than a specially named child, so a
/// document may use any element name without it being mistaken for an
/// attribute list.
pub trait TreeLike {
    type Child: TreeLike;

    fn name(&self) -> &str;
    fn attributes(&self) -> &[Attribute];
    fn children(&self) -> &[Self::Child];
    fn text(&self) -> &str;

    /// True when the node expands into a nested block.
    fn has_structure(&self) -> bool {
        !self.attributes().is_empty() || !self.children().is_empty()
    }
}

/// Core rendering trait for everything that can be described
pub trait Render {
    fn render(&self, context: &DescribeContext) -> String;
}
