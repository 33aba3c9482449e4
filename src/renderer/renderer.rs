use crate::error::{DescribeError, SchemaError};
use crate::parser::Document;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::schema::{MessageDefinition, SchemaRegistry};
use tracing::debug;

/// Describes the attributes and children of `node`.
///
/// The node's own name and text are not part of the result; the caller has
/// already written them (or, for a document root, there are none). Output is:
///
/// 1. the attribute list, `(a = "1", b = "2")` and a newline, when present;
/// 2. for each child in document order, `indent` spaces and the child's
///    name, then the child's own description at `indent + 1` with a newline
///    terminator when it has attributes or children, then
///    ` = "text"` and `terminator` when it has text. If the line already
///    ended because of a nested block, a `...` line at `indent + 1` carries
///    the value instead.
pub fn describe<T: TreeLike>(node: &T, indent: usize, terminator: &str) -> String {
    let context = DescribeContext::new()
        .with_indent(indent)
        .with_terminator(terminator);
    describe_with(node, &context)
}

/// [`describe`] with an explicit context.
pub fn describe_with<T: TreeLike>(node: &T, context: &DescribeContext) -> String {
    let mut output = AttributeRenderer.render_attributes(node.attributes());
    let values = ValueRenderer;
    let indent = IndentationHelper::indent_from_context(context);
    let nested = context.nested();

    for child in node.children() {
        output.push_str(&indent);
        output.push_str(child.name());

        if child.has_structure() {
            output.push_str(&describe_with(child, &nested));
        }

        if !child.text().is_empty() {
            if output.ends_with('\n') {
                output.push_str(&IndentationHelper::indent_for_depth(nested.indent));
                output.push_str("...");
            }
            output.push_str(" = ");
            output.push_str(&values.quote(child.text()));
            output.push_str(context.terminator);
        }
    }

    output
}

/// Describes the element selected by a dot-separated path.
///
/// An element with attributes or children is written as the path followed
/// by its nested description at indent 1, then ` = "text"` if it has text.
/// A bare element is written as `path = "text"`.
///
/// # Errors
/// Returns `DescribeError::PathNotFound` when no element matches the path.
pub fn describe_path(document: &Document, path: &str) -> Result<String, DescribeError> {
    let node = document
        .find(path)
        .ok_or_else(|| DescribeError::PathNotFound {
            path: path.to_string(),
        })?;
    let values = ValueRenderer;

    let mut output = path.to_string();
    if node.has_structure() {
        output.push_str(&describe(node, 1, LINE));
        if !node.text.is_empty() {
            output.push_str(" = ");
            output.push_str(&values.quote(&node.text));
        }
    } else {
        output.push_str(" = ");
        output.push_str(&values.quote(&node.text));
    }

    Ok(output)
}

/// Flat dump of one message definition.
pub fn describe_definition(definition: &MessageDefinition) -> String {
    definition.render(&DescribeContext::new())
}

/// Renders message definitions held by a registry.
pub struct SchemaDescriber<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> SchemaDescriber<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Resolves `name` to an id, then to a definition, and describes it.
    ///
    /// # Errors
    /// Returns `SchemaError::MessageNotFound` for an unknown name.
    pub fn describe_name(&self, name: &str) -> Result<String, SchemaError> {
        let definition = self.registry.require_by_name(name)?;
        debug!(name, id = definition.id, "describing message");
        Ok(describe_definition(definition))
    }

    /// # Errors
    /// Returns `SchemaError::IdNotFound` for an unknown id.
    pub fn describe_id(&self, id: u32) -> Result<String, SchemaError> {
        let definition = self.registry.require_by_id(id)?;
        Ok(describe_definition(definition))
    }

    /// Every definition in id order, each followed by a blank line.
    pub fn describe_all(&self) -> String {
        let mut output = String::new();
        for definition in self.registry.definitions() {
            output.push_str(&describe_definition(definition));
            output.push('\n');
        }
        debug!(count = self.registry.len(), "described all messages");
        output
    }
}
