//! Partial state returned by a node: a subset of field names with new values.

use std::collections::HashMap;

use serde_json::Value;

use crate::message::Message;

/// The partial state a node returns from `run`.
///
/// Only fields present here are touched by the merge; an empty update leaves
/// the state unchanged. For append fields an array value contributes all its
/// elements, any other value contributes itself as one element.
#[derive(Debug, Clone, Default)]
pub struct StateUpdate {
    fields: HashMap<String, Value>,
}

impl StateUpdate {
    /// Creates an empty update (merging it is a no-op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value`. For replace fields this overwrites; for
    /// append fields the value is concatenated at merge time.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Appends one message to the conventional `messages` field.
    pub fn with_message(self, message: Message) -> Self {
        self.with_messages(vec![message])
    }

    /// Appends several messages to the conventional `messages` field.
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        let values: Vec<Value> = messages.iter().map(Value::from).collect();
        let entry = self
            .fields
            .entry(crate::state::MESSAGES.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(arr) = entry {
            arr.extend(values);
        }
        self
    }

    /// True when no field is touched.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_fields(self) -> HashMap<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// **Scenario**: with_message twice accumulates both messages in order.
    #[test]
    fn with_message_accumulates_in_order() {
        let update = StateUpdate::new()
            .with_message(Message::human("one"))
            .with_message(Message::assistant("two"));
        let fields = update.into_fields();
        let arr = fields["messages"].as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["content"], "one");
        assert_eq!(arr[1]["content"], "two");
    }

    /// **Scenario**: set overwrites a previously set field within the update.
    #[test]
    fn set_last_write_wins_within_update() {
        let update = StateUpdate::new().set("turn_count", 1).set("turn_count", 2);
        assert_eq!(update.into_fields()["turn_count"], json!(2));
    }

    /// **Scenario**: new() produces an empty update.
    #[test]
    fn new_is_empty() {
        assert!(StateUpdate::new().is_empty());
    }
}
