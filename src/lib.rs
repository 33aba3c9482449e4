//! # describer
//!
//! Renders attributed markup trees and binary message schemas as
//! deterministic, human-readable text.
//!
//! - [`describe`] walks a [`TreeLike`] node and writes its attributes,
//!   children and text as an indented listing.
//! - [`SchemaDescriber`] dumps [`MessageDefinition`]s held by a
//!   [`SchemaRegistry`], one field block at a time.
//!
//! ```
//! use describer::{describe, parse_document};
//!
//! let document = parse_document(r#"<person id="7"><name>Ann</name></person>"#).unwrap();
//! assert_eq!(describe(&document, 0, ", "), "person(id = \"7\")\n name = \"Ann\"\n");
//! ```

pub mod error;
pub mod parser;
pub mod renderer;
pub mod schema;

pub use error::{DescribeError, ParseError, SchemaError};
pub use parser::{parse_document, Attribute, Document, TreeNode};
pub use renderer::{
    describe, describe_definition, describe_path, describe_with, DescribeContext, Render,
    SchemaDescriber, TreeLike, INLINE, LINE,
};
pub use schema::{FieldType, MessageDefinition, SchemaField, SchemaRegistry};
