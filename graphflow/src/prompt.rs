//! Prompt templates: `{variable}` substitution for single strings and chat
//! message lists.
//!
//! No escaping syntax — templates here are short instruction strings, not a
//! general templating language. A placeholder with no matching variable is a
//! `MissingVariable` error.

use std::collections::HashMap;

use thiserror::Error;

use crate::message::Message;

/// Error from formatting a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    /// The template names a variable the caller did not provide.
    #[error("missing template variable: {0}")]
    MissingVariable(String),

    /// An opening brace without a closing one.
    #[error("unclosed placeholder in template")]
    UnclosedPlaceholder,
}

/// Single-string template with `{variable}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitutes every placeholder from `vars`.
    pub fn format(&self, vars: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or(PromptError::UnclosedPlaceholder)?;
            let name = &after[..close];
            let value = vars
                .get(name)
                .ok_or_else(|| PromptError::MissingVariable(name.to_string()))?;
            out.push_str(value);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Ordered list of role-tagged templates producing a message list.
///
/// Covers system, human, and assistant turns; tool turns carry call ids and
/// are produced by nodes, not templates.
#[derive(Debug, Clone, Default)]
pub struct ChatPromptTemplate {
    parts: Vec<(Part, PromptTemplate)>,
}

#[derive(Debug, Clone, Copy)]
enum Part {
    System,
    Human,
    Assistant,
}

impl ChatPromptTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a system-role template.
    pub fn system(mut self, template: impl Into<String>) -> Self {
        self.parts.push((Part::System, PromptTemplate::new(template)));
        self
    }

    /// Adds a human-role template.
    pub fn human(mut self, template: impl Into<String>) -> Self {
        self.parts.push((Part::Human, PromptTemplate::new(template)));
        self
    }

    /// Adds an assistant-role template (e.g. a few-shot example answer).
    pub fn assistant(mut self, template: impl Into<String>) -> Self {
        self.parts
            .push((Part::Assistant, PromptTemplate::new(template)));
        self
    }

    /// Formats every part in declaration order.
    pub fn format_messages(
        &self,
        vars: &HashMap<String, String>,
    ) -> Result<Vec<Message>, PromptError> {
        self.parts
            .iter()
            .map(|(part, template)| {
                let content = template.format(vars)?;
                Ok(match part {
                    Part::System => Message::system(content),
                    Part::Human => Message::human(content),
                    Part::Assistant => Message::assistant(content),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// **Scenario**: Placeholders substitute in place; surrounding text is kept.
    #[test]
    fn format_substitutes_placeholders() {
        let t = PromptTemplate::new("Tell me a {adjective} fact about {topic}.");
        let out = t
            .format(&vars(&[("adjective", "fun"), ("topic", "the moon")]))
            .unwrap();
        assert_eq!(out, "Tell me a fun fact about the moon.");
    }

    /// **Scenario**: A placeholder without a variable is MissingVariable.
    #[test]
    fn missing_variable_errors() {
        let t = PromptTemplate::new("Hello {name}");
        let err = t.format(&vars(&[])).unwrap_err();
        assert_eq!(err, PromptError::MissingVariable("name".into()));
    }

    /// **Scenario**: An unclosed brace is reported, not silently kept.
    #[test]
    fn unclosed_placeholder_errors() {
        let t = PromptTemplate::new("Hello {name");
        assert_eq!(
            t.format(&vars(&[("name", "x")])).unwrap_err(),
            PromptError::UnclosedPlaceholder
        );
    }

    /// **Scenario**: Chat template emits role-tagged messages in declaration
    /// order.
    #[test]
    fn chat_template_emits_roles_in_order() {
        let t = ChatPromptTemplate::new()
            .system("You translate {language}.")
            .human("{text}");
        let messages = t
            .format_messages(&vars(&[("language", "French"), ("text", "hello")]))
            .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::system("You translate French."));
        assert_eq!(messages[1], Message::human("hello"));
    }
}
