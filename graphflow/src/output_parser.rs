//! Output parsers: turn raw assistant content into structured values.
//!
//! The model returns plain text; a parser recovers a list, a JSON value, or
//! a typed record from it. Each parser also produces format instructions to
//! splice into the prompt (via [`PromptTemplate`](crate::prompt::PromptTemplate))
//! so the model knows what shape to emit. Fenced ```json blocks are
//! unwrapped before JSON parsing since models often add them.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Error from parsing assistant content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputParseError {
    /// The content is not valid JSON.
    #[error("output is not valid JSON: {0}")]
    InvalidJson(String),

    /// The content is valid JSON but does not match the expected shape.
    #[error("output does not match the expected shape: {0}")]
    UnexpectedShape(String),
}

/// Strips a surrounding markdown code fence (``` or ```json), if present.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the language tag on the opening fence line.
    match rest.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => rest.trim(),
    }
}

/// Parses a comma-separated reply into a list of trimmed items.
///
/// Empty segments are dropped, so a trailing comma or an all-whitespace
/// reply yields fewer (or zero) items rather than empty strings.
#[derive(Debug, Clone, Default)]
pub struct CommaSeparatedListParser;

impl CommaSeparatedListParser {
    pub fn new() -> Self {
        Self
    }

    /// Instructions to splice into the prompt.
    pub fn format_instructions(&self) -> String {
        "Your response should be a list of comma separated values, eg: `foo, bar, baz`".to_string()
    }

    /// Splits on commas; items are trimmed and empty segments dropped.
    pub fn parse(&self, content: &str) -> Vec<String> {
        content
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Parses the reply as a JSON value.
///
/// An optional JSON schema is embedded in the format instructions so the
/// model targets a known shape; the parser itself does not validate against
/// it — use [`TypedOutputParser`] when the shape must hold.
#[derive(Debug, Clone, Default)]
pub struct JsonOutputParser {
    schema: Option<Value>,
}

impl JsonOutputParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embeds `schema` in the format instructions.
    pub fn with_schema(schema: Value) -> Self {
        Self {
            schema: Some(schema),
        }
    }

    /// Instructions to splice into the prompt.
    pub fn format_instructions(&self) -> String {
        match &self.schema {
            Some(schema) => format!(
                "The output should be formatted as a JSON instance that conforms to the JSON schema below.\n{}",
                schema
            ),
            None => "Return a JSON object.".to_string(),
        }
    }

    /// Parses `content` (unwrapping a code fence if present) as JSON.
    pub fn parse(&self, content: &str) -> Result<Value, OutputParseError> {
        serde_json::from_str(strip_code_fence(content))
            .map_err(|e| OutputParseError::InvalidJson(e.to_string()))
    }
}

/// Parses the reply into a typed record `T` via serde.
///
/// Stricter than [`JsonOutputParser`]: valid JSON that does not deserialize
/// into `T` is an [`UnexpectedShape`](OutputParseError::UnexpectedShape)
/// error, so missing or mistyped fields fail at the parse boundary.
#[derive(Debug, Clone)]
pub struct TypedOutputParser<T> {
    schema: Option<Value>,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> TypedOutputParser<T> {
    pub fn new() -> Self {
        Self {
            schema: None,
            _marker: PhantomData,
        }
    }

    /// Embeds `schema` in the format instructions.
    pub fn with_schema(schema: Value) -> Self {
        Self {
            schema: Some(schema),
            _marker: PhantomData,
        }
    }

    /// Instructions to splice into the prompt.
    pub fn format_instructions(&self) -> String {
        match &self.schema {
            Some(schema) => format!(
                "The output should be formatted as a JSON instance that conforms to the JSON schema below.\n{}",
                schema
            ),
            None => "Return a JSON object.".to_string(),
        }
    }

    /// Parses `content` as JSON and deserializes it into `T`.
    pub fn parse(&self, content: &str) -> Result<T, OutputParseError> {
        let value: Value = serde_json::from_str(strip_code_fence(content))
            .map_err(|e| OutputParseError::InvalidJson(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| OutputParseError::UnexpectedShape(e.to_string()))
    }
}

impl<T: DeserializeOwned> Default for TypedOutputParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    /// **Scenario**: A comma-separated reply splits into trimmed items;
    /// trailing commas and padding do not produce empty entries.
    #[test]
    fn list_parser_splits_and_trims() {
        let parser = CommaSeparatedListParser::new();
        let items = parser.parse("kimchi, bibimbap ,bulgogi, ");
        assert_eq!(items, vec!["kimchi", "bibimbap", "bulgogi"]);
        assert!(parser.parse("   ").is_empty());
    }

    /// **Scenario**: A JSON reply parses to a Value; a fenced ```json block
    /// parses the same as a bare one.
    #[test]
    fn json_parser_unwraps_code_fence() {
        let parser = JsonOutputParser::new();
        let bare = parser.parse(r#"{"name": "Bibimbap"}"#).unwrap();
        let fenced = parser
            .parse("```json\n{\"name\": \"Bibimbap\"}\n```")
            .unwrap();
        assert_eq!(bare, fenced);
        assert_eq!(bare["name"], "Bibimbap");
    }

    /// **Scenario**: Non-JSON content is InvalidJson, not a panic.
    #[test]
    fn json_parser_rejects_prose() {
        let parser = JsonOutputParser::new();
        let err = parser.parse("Sure! Here is the recipe you asked for.");
        assert!(matches!(err, Err(OutputParseError::InvalidJson(_))));
    }

    /// **Scenario**: A schema given to the parser appears in the format
    /// instructions so the model targets that shape.
    #[test]
    fn format_instructions_embed_schema() {
        let schema = json!({"type": "object", "properties": {"name": {"type": "string"}}});
        let parser = JsonOutputParser::with_schema(schema);
        let instructions = parser.format_instructions();
        assert!(instructions.contains("JSON schema"));
        assert!(instructions.contains("\"name\""));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Recipe {
        name: String,
        ingredients: Vec<String>,
    }

    /// **Scenario**: The typed parser returns a deserialized record for a
    /// conforming reply.
    #[test]
    fn typed_parser_returns_record() {
        let parser = TypedOutputParser::<Recipe>::new();
        let recipe = parser
            .parse(r#"{"name": "Bibimbap", "ingredients": ["rice", "gochujang"]}"#)
            .unwrap();
        assert_eq!(recipe.name, "Bibimbap");
        assert_eq!(recipe.ingredients.len(), 2);
    }

    /// **Scenario**: Valid JSON missing a required field is UnexpectedShape,
    /// distinct from InvalidJson.
    #[test]
    fn typed_parser_rejects_wrong_shape() {
        let parser = TypedOutputParser::<Recipe>::new();
        let err = parser.parse(r#"{"name": "Bibimbap"}"#);
        assert!(matches!(err, Err(OutputParseError::UnexpectedShape(_))));
    }
}
