//! Field and message definitions for binary message schemas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive wire type of a schema field.
///
/// The discriminants are the numeric type codes used by the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FieldType {
    #[serde(rename = "char")]
    Char = 0,
    #[serde(rename = "uint8_t")]
    Uint8 = 1,
    #[serde(rename = "int8_t")]
    Int8 = 2,
    #[serde(rename = "uint16_t")]
    Uint16 = 3,
    #[serde(rename = "int16_t")]
    Int16 = 4,
    #[serde(rename = "uint32_t")]
    Uint32 = 5,
    #[serde(rename = "int32_t")]
    Int32 = 6,
    #[serde(rename = "uint64_t")]
    Uint64 = 7,
    #[serde(rename = "int64_t")]
    Int64 = 8,
    #[serde(rename = "float")]
    Float = 9,
    #[serde(rename = "double")]
    Double = 10,
}

impl FieldType {
    pub const ALL: [FieldType; 11] = [
        FieldType::Char,
        FieldType::Uint8,
        FieldType::Int8,
        FieldType::Uint16,
        FieldType::Int16,
        FieldType::Uint32,
        FieldType::Int32,
        FieldType::Uint64,
        FieldType::Int64,
        FieldType::Float,
        FieldType::Double,
    ];

    /// Numeric type code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Display name used in descriptions.
    ///
    /// Several names drop the `TYPE_` infix; descriptions are compared
    /// byte for byte, so these stay as they are.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            FieldType::Char => "MAVLINK_TYPE_CHAR",
            FieldType::Uint8 => "MAVLINK_UINT8_T",
            FieldType::Int8 => "MAVLINK_TYPE_INT8_T",
            FieldType::Uint16 => "MAVLINK_TYPE_UINT16_T",
            FieldType::Int16 => "MAVLINK_INT16_T",
            FieldType::Uint32 => "MAVLINK_TYPE_UINT32_T",
            FieldType::Int32 => "MAVLINK_INT32_T",
            FieldType::Uint64 => "MAVLINK_TYPE_UINT64_T",
            FieldType::Int64 => "MAVLINK_INT64_T",
            FieldType::Float => "MAVLINK_TYPE_FLOAT",
            FieldType::Double => "MAVLINK_TYPE_DOUBLE",
        }
    }

    /// Size of one element on the wire, in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            FieldType::Char | FieldType::Uint8 | FieldType::Int8 => 1,
            FieldType::Uint16 | FieldType::Int16 => 2,
            FieldType::Uint32 | FieldType::Int32 | FieldType::Float => 4,
            FieldType::Uint64 | FieldType::Int64 | FieldType::Double => 8,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One field of a message definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name.
    pub name: String,
    /// Display format hint.
    #[serde(default)]
    pub print_format: Option<String>,
    /// Element type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Element count; 0 or 1 for a scalar.
    #[serde(default)]
    pub array_length: u32,
    /// Byte offset in the serialized message.
    pub wire_offset: u32,
    /// Byte offset in the in-memory structure.
    pub structure_offset: u32,
}

impl SchemaField {
    /// Creates a scalar field whose structure offset equals its wire offset.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType, wire_offset: u32) -> Self {
        Self {
            name: name.into(),
            print_format: None,
            field_type,
            array_length: 0,
            wire_offset,
            structure_offset: wire_offset,
        }
    }

    #[must_use]
    pub fn with_array_length(mut self, array_length: u32) -> Self {
        self.array_length = array_length;
        self
    }

    #[must_use]
    pub fn with_print_format(mut self, print_format: impl Into<String>) -> Self {
        self.print_format = Some(print_format.into());
        self
    }

    #[must_use]
    pub fn with_structure_offset(mut self, structure_offset: u32) -> Self {
        self.structure_offset = structure_offset;
        self
    }

    /// Returns true for a fixed-size array field.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.array_length > 1
    }

    /// Bytes the field occupies on the wire.
    #[must_use]
    pub fn wire_size(&self) -> usize {
        self.field_type.size() * self.array_length.max(1) as usize
    }
}

/// One message definition: id, name and fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDefinition {
    /// Message id.
    pub id: u32,
    /// Message name.
    pub name: String,
    /// Fields in declaration order, not necessarily offset order.
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

impl MessageDefinition {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Total payload length on the wire.
    #[must_use]
    pub fn wire_length(&self) -> usize {
        self.fields.iter().map(SchemaField::wire_size).sum()
    }
}
