use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tool '{tool}' execution failed: {source}")]
    ToolFailed {
        tool: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use zdk_core::Error;
    /// let err = Error::config_error("SCRAPERAPI_API_KEY is not set");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for wrapping a failure raised while a tool was running
    ///
    /// # Example
    /// ```
    /// use zdk_core::Error;
    /// let err = Error::tool_failed("scraperapi", anyhow::anyhow!("HTTP 500"));
    /// assert!(err.to_string().contains("scraperapi"));
    /// ```
    pub fn tool_failed(tool: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Error::ToolFailed {
            tool: tool.into(),
            source: source.into(),
        }
    }

    /// Returns the underlying tool error if this is a `ToolFailed` error
    /// carrying a value of type `E`.
    pub fn tool_source<E>(&self) -> Option<&E>
    where
        E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Error::ToolFailed { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }
}
