//! Immutable registry of message definitions, indexed by id and by name.

use crate::error::SchemaError;
use crate::schema::types::MessageDefinition;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Schema table compiled into the binary.
const BUILTIN_TABLE: &str = include_str!("common.json");

#[derive(Debug, Deserialize)]
struct SchemaTable {
    messages: Vec<MessageDefinition>,
}

/// Message definitions keyed by id, with a name index that resolves to ids.
///
/// Built once and never mutated; lookups go name -> id -> definition.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    by_id: BTreeMap<u32, MessageDefinition>,
    ids_by_name: HashMap<String, u32>,
}

impl SchemaRegistry {
    /// Builds the registry from the compiled-in table.
    ///
    /// # Errors
    /// Returns `SchemaError` if the table is malformed or repeats an id or name.
    pub fn builtin() -> Result<Self, SchemaError> {
        Self::from_json(BUILTIN_TABLE)
    }

    /// Builds the registry from a JSON table of the form
    /// `{"messages": [{"id": .., "name": .., "fields": [..]}, ..]}`.
    ///
    /// # Errors
    /// Returns `SchemaError` if the table is malformed or repeats an id or name.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let table: SchemaTable = serde_json::from_str(json)?;
        Self::from_definitions(table.messages)
    }

    /// # Errors
    /// Returns `SchemaError::DuplicateId` or `SchemaError::DuplicateName`.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = MessageDefinition>,
    {
        let mut registry = Self::default();

        for definition in definitions {
            if let Some(existing) = registry.by_id.get(&definition.id) {
                return Err(SchemaError::DuplicateId {
                    id: definition.id,
                    first: existing.name.clone(),
                    second: definition.name,
                });
            }
            if registry.ids_by_name.contains_key(&definition.name) {
                return Err(SchemaError::DuplicateName {
                    name: definition.name,
                });
            }
            registry
                .ids_by_name
                .insert(definition.name.clone(), definition.id);
            registry.by_id.insert(definition.id, definition);
        }

        debug!(messages = registry.len(), "built schema registry");
        Ok(registry)
    }

    pub fn lookup_by_id(&self, id: u32) -> Option<&MessageDefinition> {
        self.by_id.get(&id)
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&MessageDefinition> {
        self.ids_by_name
            .get(name)
            .and_then(|id| self.lookup_by_id(*id))
    }

    /// Id registered for `name`.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.ids_by_name.get(name).copied()
    }

    /// # Errors
    /// Returns `SchemaError::MessageNotFound` for an unknown name.
    pub fn require_by_name(&self, name: &str) -> Result<&MessageDefinition, SchemaError> {
        self.lookup_by_name(name)
            .ok_or_else(|| SchemaError::not_found(name))
    }

    /// # Errors
    /// Returns `SchemaError::IdNotFound` for an unknown id.
    pub fn require_by_id(&self, id: u32) -> Result<&MessageDefinition, SchemaError> {
        self.lookup_by_id(id).ok_or(SchemaError::IdNotFound { id })
    }

    /// Definitions in ascending id order.
    pub fn definitions(&self) -> impl Iterator<Item = &MessageDefinition> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
