use thiserror::Error;

/// Exit status when the external HTTP client cannot be located
pub const EXIT_TOOL_NOT_FOUND: u8 = 1;

/// Exit status for failures that carry no exit code of their own
pub const EXIT_FAILURE: u8 = 2;

/// Deployment error types
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("{tool} not found on the search path")]
    ToolNotFound { tool: String },

    #[error("Failed to run {tool}")]
    ExecFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with code {code}")]
    ToolFailed { tool: String, code: i32 },

    #[error("{tool} was terminated by a signal")]
    Terminated { tool: String },
}

impl DeployError {
    /// Process exit status for this error
    ///
    /// A failed tool run reports the tool's own exit code so the pipeline
    /// sees the same status curl produced.
    pub fn exit_code(&self) -> u8 {
        match self {
            DeployError::ToolNotFound { .. } => EXIT_TOOL_NOT_FOUND,
            DeployError::ToolFailed { code, .. } => u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(EXIT_FAILURE),
            DeployError::ExecFailed { .. } | DeployError::Terminated { .. } => EXIT_FAILURE,
        }
    }
}
