use crate::parser::{Document, TreeNode};
use crate::renderer::components::*;
use crate::renderer::renderer::describe_with;
use crate::renderer::traits::*;
use crate::schema::{MessageDefinition, SchemaField};

/// Indentation of the per-field detail lines.
const FIELD_INDENT: &str = "    ";

impl Render for Document {
    fn render(&self, context: &DescribeContext) -> String {
        describe_with(self, context)
    }
}

impl Render for TreeNode {
    fn render(&self, context: &DescribeContext) -> String {
        describe_with(self, context)
    }
}

impl Render for MessageDefinition {
    fn render(&self, context: &DescribeContext) -> String {
        let mut output = String::new();

        output.push_str(&format!("msgid = {}\n", self.id));
        output.push_str(&format!("name = {}\n", self.name));
        output.push_str(&format!("num_fields = {}\n", self.fields.len()));

        for (index, field) in self.fields.iter().enumerate() {
            output.push_str(&format!("fields[{}]\n", index));
            output.push_str(&field.render(context));
        }

        output
    }
}

impl Render for SchemaField {
    fn render(&self, _context: &DescribeContext) -> String {
        let values = ValueRenderer;
        let mut output = String::new();

        output.push_str(&format!("{}.name = {}\n", FIELD_INDENT, self.name));
        output.push_str(&format!(
            "{}.print_format = {}\n",
            FIELD_INDENT,
            values.optional(self.print_format.as_deref())
        ));
        output.push_str(&format!(
            "{}.type = {} ({})\n",
            FIELD_INDENT,
            self.field_type,
            self.field_type.code()
        ));
        output.push_str(&format!(
            "{}.array_length = {}\n",
            FIELD_INDENT, self.array_length
        ));
        output.push_str(&format!(
            "{}.wire_offset = {}\n",
            FIELD_INDENT, self.wire_offset
        ));
        output.push_str(&format!(
            "{}.structure offset = {}\n",
            FIELD_INDENT, self.structure_offset
        ));

        output
    }
}
