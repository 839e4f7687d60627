//! The state container and the merge algorithm.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::message::Message;
use crate::state::{MergePolicy, StateSchema, StateUpdate, MESSAGES};

/// Mapping from field name to JSON value, merged after every node invocation
/// according to the schema's per-field policy.
///
/// Exclusively owned by one in-flight graph invocation; nothing mutates it
/// concurrently. Cloning is deliberate and cheap enough for the demo-scale
/// states this crate targets (branching in `invoke_parallel`, snapshots in
/// stream events).
#[derive(Debug, Clone)]
pub struct State {
    values: HashMap<String, Value>,
    schema: Arc<StateSchema>,
}

impl State {
    /// Creates an empty state bound to `schema`.
    pub fn new(schema: Arc<StateSchema>) -> Self {
        Self {
            values: HashMap::new(),
            schema,
        }
    }

    /// The schema this state merges under.
    pub fn schema(&self) -> &Arc<StateSchema> {
        &self.schema
    }

    /// Raw value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Sets `field` directly, bypassing merge. Intended for building the
    /// initial state before a run.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    /// Integer value of `field`, if present and integral.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.values.get(field).and_then(Value::as_i64)
    }

    /// Boolean value of `field`, if present and boolean.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.values.get(field).and_then(Value::as_bool)
    }

    /// String value of `field`, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(Value::as_str)
    }

    /// Deserialized view of the conventional `messages` field. Entries that
    /// do not parse as messages are skipped.
    pub fn messages(&self) -> Vec<Message> {
        self.values
            .get(MESSAGES)
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| serde_json::from_value(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Appends one message to the `messages` field, creating it if absent.
    /// Like [`set`](State::set), this is for initial-state construction;
    /// nodes return messages through [`StateUpdate`] instead.
    pub fn push_message(&mut self, message: Message) {
        let entry = self
            .values
            .entry(MESSAGES.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(arr) = entry {
            arr.push(Value::from(message));
        } else {
            *entry = Value::Array(vec![Value::from(message)]);
        }
    }

    /// Content of the most recent human message, if any. Routers and
    /// classifier nodes read this; absence is a business outcome, not an error.
    pub fn last_human_message(&self) -> Option<String> {
        self.messages()
            .into_iter()
            .rev()
            .find(|m| matches!(m, Message::Human { .. }))
            .map(|m| m.content().to_string())
    }

    /// Merges a node's partial output into this state.
    ///
    /// Per key in `update`: append fields concatenate (an array value
    /// contributes its elements, anything else one element; the key is
    /// created if absent), replace fields overwrite unconditionally,
    /// including with empty values. Keys absent from the update are left
    /// untouched. Unknown keys merge under the default replace policy.
    pub fn merge(&mut self, update: StateUpdate) {
        for (field, value) in update.into_fields() {
            match self.schema.policy(&field) {
                MergePolicy::Replace => {
                    self.values.insert(field, value);
                }
                MergePolicy::Append => {
                    let incoming = match value {
                        Value::Array(items) => items,
                        other => vec![other],
                    };
                    match self.values.get_mut(&field) {
                        Some(Value::Array(existing)) => existing.extend(incoming),
                        Some(other) => {
                            // Prior value was not a sequence; start one from it.
                            let mut items = vec![other.take()];
                            items.extend(incoming);
                            *other = Value::Array(items);
                        }
                        None => {
                            self.values.insert(field, Value::Array(incoming));
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chat_state() -> State {
        let schema = Arc::new(StateSchema::new().append("messages").replace("turn_count"));
        State::new(schema)
    }

    /// **Scenario**: Sequential merges on an append field concatenate in
    /// arrival order: merge(merge(s,p1),p2)[m] == s[m] + p1[m] + p2[m].
    #[test]
    fn append_field_concatenates_in_order() {
        let mut state = chat_state();
        state.push_message(Message::human("hello"));
        state.merge(StateUpdate::new().with_message(Message::assistant("hi")));
        state.merge(StateUpdate::new().with_message(Message::human("again")));
        let contents: Vec<_> = state
            .messages()
            .iter()
            .map(|m| m.content().to_string())
            .collect();
        assert_eq!(contents, vec!["hello", "hi", "again"]);
    }

    /// **Scenario**: Replace field is overwritten regardless of prior value,
    /// including overwriting non-empty with empty.
    #[test]
    fn replace_field_overwrites_including_empty() {
        let mut state = chat_state();
        state.set("turn_count", 7);
        state.merge(StateUpdate::new().set("turn_count", 0));
        assert_eq!(state.get_i64("turn_count"), Some(0));

        let schema = Arc::new(StateSchema::new().replace("note"));
        let mut state = State::new(schema);
        state.set("note", "something");
        state.merge(StateUpdate::new().set("note", ""));
        assert_eq!(state.get_str("note"), Some(""));
    }

    /// **Scenario**: Merging an empty update changes no field (idempotence).
    #[test]
    fn empty_update_is_identity() {
        let mut state = chat_state();
        state.push_message(Message::human("hello"));
        state.set("turn_count", 3);
        let before_messages = state.messages();
        state.merge(StateUpdate::new());
        assert_eq!(state.messages(), before_messages);
        assert_eq!(state.get_i64("turn_count"), Some(3));
    }

    /// **Scenario**: Unknown keys merge under the default replace policy
    /// without error.
    #[test]
    fn unknown_key_defaults_to_replace() {
        let mut state = chat_state();
        state.merge(StateUpdate::new().set("surprise", json!({"k": 1})));
        state.merge(StateUpdate::new().set("surprise", json!({"k": 2})));
        assert_eq!(state.get("surprise"), Some(&json!({"k": 2})));
    }

    /// **Scenario**: Append merge creates the field when absent in the base.
    #[test]
    fn append_creates_absent_field() {
        let mut state = chat_state();
        state.merge(StateUpdate::new().with_message(Message::assistant("hi")));
        assert_eq!(state.messages().len(), 1);
    }

    /// **Scenario**: A non-array value on an append field is pushed as one element.
    #[test]
    fn append_non_array_pushes_single_element() {
        let schema = Arc::new(StateSchema::new().append("log"));
        let mut state = State::new(schema);
        state.merge(StateUpdate::new().set("log", "first"));
        state.merge(StateUpdate::new().set("log", "second"));
        assert_eq!(state.get("log"), Some(&json!(["first", "second"])));
    }

    /// **Scenario**: last_human_message returns the most recent human turn
    /// and None when there is none.
    #[test]
    fn last_human_message_finds_latest() {
        let mut state = chat_state();
        assert_eq!(state.last_human_message(), None);
        state.push_message(Message::human("first"));
        state.push_message(Message::assistant("reply"));
        state.push_message(Message::human("second"));
        assert_eq!(state.last_human_message(), Some("second".into()));
    }
}
