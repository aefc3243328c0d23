use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UserError {
    /// The email is already bound to a different provider identity.
    /// A data-integrity conflict, never silently merged.
    #[error("Email {0} is already linked to a different identity")]
    DuplicateEmail(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
