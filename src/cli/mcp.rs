//! MCP Server implementation for the todo list
//!
//! Provides MCP tools for AI agents to manage todos in the remote store:
//! - list_todos: List todos, optionally filtered by completion status
//! - add_todo: Add a new todo
//! - set_todo_done: Mark a todo as done/undone
//! - delete_todo: Delete a todo by id

use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::TodoError;
use crate::gateway::TodoGateway;

const INSTRUCTIONS: &str = "\
Simple todo list MCP server backed by Supabase.

Todos have an id, a title, a done flag, and a creation timestamp. Listings
are newest-first. Use list_todos to see current items, add_todo to create
one, set_todo_done to flip the completion flag, and delete_todo to remove
one permanently.";

/// Todo MCP Server
#[derive(Clone)]
pub struct TodoMcpServer {
    gateway: Arc<TodoGateway>,
    tool_router: ToolRouter<Self>,
}

impl TodoMcpServer {
    pub fn new(gateway: TodoGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
            tool_router: Self::tool_router(),
        }
    }
}

impl ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::LATEST)
            .with_server_info(
                Implementation::new("todolist-supabase", env!("CARGO_PKG_VERSION"))
                    .with_title("Todo List MCP Server"),
            )
            .with_instructions(INSTRUCTIONS)
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tcc = rmcp::handler::server::tool::ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            meta: None,
            next_cursor: None,
        })
    }
}

// ============================================================================
// Tool Parameter Types
// ============================================================================

/// List todos, optionally filtered
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListTodosParams {
    /// If provided, only return todos with this completion status
    pub done: Option<bool>,
}

/// Add a new todo
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddTodoParams {
    /// Short description of the task. Leading/trailing whitespace is trimmed;
    /// must be non-empty after trimming.
    pub title: String,
}

/// Mark a todo as done/undone
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetTodoDoneParams {
    /// ID of the todo
    pub todo_id: i64,
    /// True to mark as done, false to mark as not done (default: true)
    #[serde(default = "default_done")]
    pub done: bool,
}

fn default_done() -> bool {
    true
}

/// Delete a todo
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTodoParams {
    /// ID of the todo to delete
    pub todo_id: i64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl TodoMcpServer {
    /// List todo items, newest first
    #[tool(
        name = "list_todos",
        description = "List todo items, newest first. Pass `done` to filter by completion status; omit it to list everything. Returns an empty list when nothing matches."
    )]
    async fn list_todos(
        &self,
        params: Parameters<ListTodosParams>,
    ) -> Result<CallToolResult, McpError> {
        let done = params.0.done;
        self.call_gateway(move |gw| gw.list(done)).await
    }

    /// Add a new todo item
    #[tool(
        name = "add_todo",
        description = "Add a new todo item with the given title. The title is trimmed and must not be empty. The new todo starts with done = false; the store assigns id and inserted_at."
    )]
    async fn add_todo(
        &self,
        params: Parameters<AddTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let title = params.0.title;
        self.call_gateway(move |gw| gw.add(&title)).await
    }

    /// Mark a todo as done or not done
    #[tool(
        name = "set_todo_done",
        description = "Mark a todo as done (default) or not done. Returns the updated todo. Fails if no todo has the given id."
    )]
    async fn set_todo_done(
        &self,
        params: Parameters<SetTodoDoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        self.call_gateway(move |gw| gw.set_done(p.todo_id, p.done))
            .await
    }

    /// Delete a todo by id
    #[tool(
        name = "delete_todo",
        description = "Delete a todo by id. Returns the deleted todo's last-known values. Fails if no todo has the given id."
    )]
    async fn delete_todo(
        &self,
        params: Parameters<DeleteTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let todo_id = params.0.todo_id;
        self.call_gateway(move |gw| gw.delete(todo_id)).await
    }
}

impl TodoMcpServer {
    /// Run one gateway operation on the blocking pool (the store client is
    /// sync) and render the result as pretty JSON text content.
    async fn call_gateway<T, F>(&self, f: F) -> Result<CallToolResult, McpError>
    where
        T: Serialize + Send + 'static,
        F: FnOnce(&TodoGateway) -> crate::error::Result<T> + Send + 'static,
    {
        let gateway = Arc::clone(&self.gateway);
        let result = tokio::task::spawn_blocking(move || f(&gateway))
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        match result {
            Ok(value) => {
                let json = serde_json::to_string_pretty(&value)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(e) => Err(map_error(e)),
        }
    }
}

/// Map gateway errors onto the MCP error taxonomy: bad input is the caller's
/// fault, a missing row is an invalid request, everything else is internal.
fn map_error(err: TodoError) -> McpError {
    match err {
        TodoError::EmptyTitle => McpError::invalid_params(err.to_string(), None),
        TodoError::NotFound(_) => McpError::invalid_request(err.to_string(), None),
        other => McpError::internal_error(other.to_string(), None),
    }
}

// ============================================================================
// Server Entry Point
// ============================================================================

/// Run the MCP server with stdio transport
pub async fn run_mcp_server() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use rmcp::transport::io::stdio;

    let settings = Settings::load()?;
    let server = TodoMcpServer::new(TodoGateway::new(&settings));
    let transport = stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
