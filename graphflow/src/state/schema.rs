//! Per-field merge policy declaration.
//!
//! An explicit configuration record (field name → policy) rather than
//! type-level metadata: the schema is fixed when the graph is built and
//! consulted on every merge.

use std::collections::HashMap;

/// How a node's partial value for a field combines with the existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Concatenate onto the existing sequence; order is arrival order and the
    /// sequence is never truncated automatically.
    Append,
    /// Overwrite the prior value unconditionally, including with empty values.
    /// Default for fields not declared in the schema.
    #[default]
    Replace,
}

/// Field-name → merge-policy record for one state type.
///
/// Built once with [`append`](StateSchema::append) / [`replace`](StateSchema::replace)
/// and shared (via `Arc`) by every state the graph produces. Fields absent
/// from the record merge with [`MergePolicy::Replace`]; no error is raised
/// for unknown keys.
#[derive(Debug, Clone, Default)]
pub struct StateSchema {
    policies: HashMap<String, MergePolicy>,
}

impl StateSchema {
    /// Creates an empty schema (every field defaults to replace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema with a single append-merged `messages` field, the shape most
    /// conversational graphs use.
    pub fn messages_only() -> Self {
        Self::new().append(super::MESSAGES)
    }

    /// Declares `field` as append-merged.
    pub fn append(mut self, field: impl Into<String>) -> Self {
        self.policies.insert(field.into(), MergePolicy::Append);
        self
    }

    /// Declares `field` as replace-merged. Redundant with the default but
    /// useful for documenting a state shape at the declaration site.
    pub fn replace(mut self, field: impl Into<String>) -> Self {
        self.policies.insert(field.into(), MergePolicy::Replace);
        self
    }

    /// Policy for `field`; unknown fields fall back to replace.
    pub fn policy(&self, field: &str) -> MergePolicy {
        self.policies.get(field).copied().unwrap_or_default()
    }
}
