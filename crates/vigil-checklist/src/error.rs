use thiserror::Error;

/// Lookup failures while binding the checklist document. Fatal at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecklistError {
    /// The document has no checkbox for a known task id.
    #[error("Checklist document has no control for task {id}")]
    MissingControl { id: String },

    /// The checkbox exists but has no containing element to mark.
    #[error("Checklist control {id} has no container")]
    MissingContainer { id: String },
}

impl ChecklistError {
    pub fn task_id(&self) -> &str {
        match self {
            ChecklistError::MissingControl { id } | ChecklistError::MissingContainer { id } => id,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
