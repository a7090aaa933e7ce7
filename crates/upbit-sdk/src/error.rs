//! Tool invocation errors

use upbit_rest::RestError;

/// Errors returned by tool calls
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// No tool with this name
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments do not match the tool's request record
    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        /// Tool name
        tool: &'static str,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// The exchange call failed
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The result could not be encoded as JSON
    #[error("failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ToolError {
    /// HTTP status of a failed exchange call
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(err) => err.status(),
            _ => None,
        }
    }
}

/// Result type for tool calls
pub type ToolResult<T> = Result<T, ToolError>;
