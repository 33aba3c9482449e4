//! Error types for markup parsing, schema lookup and description.

use thiserror::Error;

/// Error type for turning markup text into a [`Document`](crate::parser::Document).
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML reader error, including mismatched end tags.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute.
    #[error("attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Malformed escape sequence in an attribute value.
    #[error("escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Entity reference that is neither predefined nor a character reference.
    #[error("unknown entity reference '&{name};'")]
    UnknownEntity {
        /// Entity name without `&` and `;`.
        name: String,
    },

    /// The same attribute appears twice on one element.
    #[error("duplicate attribute '{attribute}' on element '{element}'")]
    DuplicateAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Input ended while an element was still open.
    #[error("element '{name}' is not closed")]
    UnclosedElement {
        /// Name of the innermost open element.
        name: String,
    },

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for building and querying a [`SchemaRegistry`](crate::schema::SchemaRegistry).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No definition carries this name.
    #[error("message '{name}' not found")]
    MessageNotFound {
        /// Requested name.
        name: String,
    },

    /// No definition carries this id.
    #[error("message id {id} not found")]
    IdNotFound {
        /// Requested id.
        id: u32,
    },

    /// Two definitions share an id.
    #[error("duplicate message id {id} ('{first}' and '{second}')")]
    DuplicateId {
        /// The shared id.
        id: u32,
        /// Name registered first.
        first: String,
        /// Name rejected.
        second: String,
    },

    /// Two definitions share a name.
    #[error("duplicate message name '{name}'")]
    DuplicateName {
        /// The shared name.
        name: String,
    },

    /// Schema table is not valid JSON or has the wrong shape.
    #[error("invalid schema table: {0}")]
    Table(#[from] serde_json::Error),
}

/// Error type for the describe operations that can fail.
#[derive(Debug, Error)]
pub enum DescribeError {
    /// Parse error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Schema error.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Tag path does not select any element.
    #[error("no element at path '{path}'")]
    PathNotFound {
        /// Requested path.
        path: String,
    },
}

impl SchemaError {
    /// Creates a message-not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::MessageNotFound { name: name.into() }
    }
}
