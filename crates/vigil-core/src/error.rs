use thiserror::Error;

#[derive(Debug, Error)]
pub enum VigilError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host could not create the application window. Fatal at startup.
    #[error("Window creation failed: {0}")]
    Window(String),

    /// The checklist document is malformed or missing a task element.
    #[error("Checklist document error: {0}")]
    Document(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VigilError {
    /// Short error code string, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            VigilError::Config(_) => "CONFIG_ERROR",
            VigilError::Window(_) => "WINDOW_ERROR",
            VigilError::Document(_) => "DOCUMENT_ERROR",
            VigilError::Io(_) => "IO_ERROR",
            VigilError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, VigilError>;
