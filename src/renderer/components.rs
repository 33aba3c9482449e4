use crate::parser::Attribute;
use crate::renderer::traits::*;

/// Helper for rendering scalar values
pub struct ValueRenderer;

impl ValueRenderer {
    /// Wraps a value in double quotes. Embedded quotes are left as they are.
    pub fn quote(&self, value: &str) -> String {
        format!("\"{}\"", value)
    }

    /// `name = "value"`
    pub fn assignment(&self, name: &str, value: &str) -> String {
        format!("{} = {}", name, self.quote(value))
    }

    /// Renders an optional string, or `(null)` when absent.
    pub fn optional(&self, value: Option<&str>) -> String {
        value.unwrap_or("(null)").to_string()
    }
}

/// Helper for rendering attribute lists
pub struct AttributeRenderer;

impl AttributeRenderer {
    /// `(a = "1", b = "2")` followed by a newline, or nothing when there are
    /// no attributes.
    pub fn render_attributes(&self, attributes: &[Attribute]) -> String {
        if attributes.is_empty() {
            return String::new();
        }

        let values = ValueRenderer;
        let mut output = String::from("(");
        for attr in attributes {
            output.push_str(&values.assignment(&attr.name, &attr.value));
            output.push_str(INLINE);
        }
        output.truncate(output.len() - INLINE.len());
        output.push_str(")\n");
        output
    }
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub fn indent_for_depth(depth: usize) -> String {
        " ".repeat(depth)
    }

    pub fn indent_from_context(context: &DescribeContext) -> String {
        context.indent()
    }
}
