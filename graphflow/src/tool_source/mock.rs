//! Mock ToolSource for tests and demos: fixed tool list, fixed call results.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ToolOutput, ToolSource, ToolSourceError, ToolSpec};

/// Mock tool source: fixed tool list and fixed call result.
///
/// `list_tools()` returns a configurable list; `call_tool(name, _)` returns a
/// configurable text for any known name and `NotFound` otherwise.
pub struct MockToolSource {
    tools: Vec<ToolSpec>,
    call_result: String,
}

impl MockToolSource {
    /// Mock that lists one `get_time` tool and returns a fixed timestamp.
    pub fn get_time_example() -> Self {
        Self {
            tools: vec![ToolSpec {
                name: "get_time".to_string(),
                description: Some("Get current time.".to_string()),
                input_schema: json!({ "type": "object", "properties": {} }),
            }],
            call_result: "2026-08-29 12:00:00".to_string(),
        }
    }

    /// Mock with a custom tool list and fixed call result.
    pub fn new(tools: Vec<ToolSpec>, call_result: impl Into<String>) -> Self {
        Self {
            tools,
            call_result: call_result.into(),
        }
    }
}

impl Default for MockToolSource {
    fn default() -> Self {
        Self::get_time_example()
    }
}

#[async_trait]
impl ToolSource for MockToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(self.tools.clone())
    }

    async fn call_tool(
        &self,
        name: &str,
        _arguments: Value,
    ) -> Result<ToolOutput, ToolSourceError> {
        if !self.tools.iter().any(|t| t.name == name) {
            return Err(ToolSourceError::NotFound(name.to_string()));
        }
        Ok(ToolOutput {
            content: self.call_result.clone(),
        })
    }
}
