//! Tool registry: name → descriptor lookup plus the flattened call surface
//! consumed by tool-invocation frameworks.

use std::sync::Arc;

use compact_str::{CompactString, ToCompactString};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::descriptor::EndpointDescriptor;
use crate::error::{CoreError, Result};
use crate::invoker::RestInvoker;

/// A registry of endpoint descriptors sharing one invoker.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    invoker: RestInvoker,
    tools: Arc<DashMap<CompactString, Arc<EndpointDescriptor>>>,
}

impl ToolRegistry {
    pub fn new(invoker: RestInvoker) -> Self {
        Self {
            invoker,
            tools: Arc::new(DashMap::new()),
        }
    }

    /// Register a descriptor. Later registrations win on name collision.
    pub fn register(&self, descriptor: EndpointDescriptor) {
        self.tools
            .insert(descriptor.name.to_compact_string(), Arc::new(descriptor));
    }

    pub fn get(&self, name: &str) -> Option<Arc<EndpointDescriptor>> {
        self.tools.get(name).map(|e| e.value().clone())
    }

    /// All registered tool names, sorted.
    pub fn list_tools(&self) -> Vec<CompactString> {
        let mut names: Vec<_> = self.tools.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Machine-readable `{ name, description, parameters }` definitions for
    /// every tool, sorted by name. This is the catalog a calling framework
    /// ingests; the bot token never appears in it.
    pub fn definitions(&self) -> Vec<Value> {
        let mut defs: Vec<_> = self
            .tools
            .iter()
            .map(|e| e.value().definition())
            .collect();
        defs.sort_by(|a, b| a["name"].as_str().cmp(&b["name"].as_str()));
        defs
    }

    /// Execute a tool by name, preserving the structured error.
    pub async fn execute(&self, name: &str, arguments: &Map<String, Value>) -> Result<Value> {
        let descriptor = self.get(name).ok_or_else(|| {
            CoreError::tool_not_found(
                name,
                self.list_tools().iter().map(|n| n.to_string()).collect(),
            )
        })?;
        self.invoker.invoke(&descriptor, arguments).await
    }

    /// Execute a tool and flatten the outcome to the uniform result shape.
    /// This is the only place structured errors become strings.
    pub async fn call(&self, name: &str, arguments: &Map<String, Value>) -> ToolResult {
        match self.execute(name, arguments).await {
            Ok(output) => ToolResult::success(output),
            Err(e) => ToolResult::failure(e.to_string()),
        }
    }
}

/// The result of executing a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(output: Value) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
        }
    }

    /// Create a failed tool result
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldType;
    use crate::token::StaticToken;
    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use serde_json::json;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(RestInvoker::new(Arc::new(StaticToken::new("t"))))
    }

    fn sample() -> EndpointDescriptor {
        EndpointDescriptor::new("get_user", "Get a user by ID.", Method::GET, "/users/{user_id}")
            .path_param("user_id", "The ID of the user to retrieve.")
            .query("with_counts", FieldType::Boolean, "Include counts.")
    }

    #[test]
    fn register_and_list() {
        let registry = registry();
        registry.register(sample());
        registry.register(
            EndpointDescriptor::new("get_gateway", "Get the gateway URL.", Method::GET, "/gateway"),
        );

        assert_eq!(registry.list_tools(), vec!["get_gateway", "get_user"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("get_user").is_some());
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn definitions_are_sorted_and_schema_shaped() {
        let registry = registry();
        registry.register(sample());
        registry.register(
            EndpointDescriptor::new("get_gateway", "Get the gateway URL.", Method::GET, "/gateway"),
        );

        let defs = registry.definitions();
        assert_eq!(defs[0]["name"], "get_gateway");
        assert_eq!(defs[1]["name"], "get_user");
        assert_eq!(defs[1]["parameters"]["required"], json!(["user_id"]));
    }

    #[tokio::test]
    async fn execute_unknown_tool_lists_available() {
        let registry = registry();
        registry.register(sample());

        let err = registry.execute("does_not_exist", &Map::new()).await.unwrap_err();
        match err {
            CoreError::ToolNotFound {
                tool_name,
                available_tools,
            } => {
                assert_eq!(tool_name, "does_not_exist");
                assert_eq!(available_tools, vec!["get_user"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn call_flattens_validation_errors() {
        let registry = registry();
        registry.register(sample());

        let result = registry.call("get_user", &Map::new()).await;
        assert!(!result.success);
        assert!(result.output.is_none());
        let error = result.error.unwrap_or_default();
        assert!(error.contains("get_user"), "error was: {error}");
    }
}
