use thiserror::Error;

#[derive(Debug, Error)]
pub enum AbookError {
    #[error("Invalid phone number: {input}")]
    InvalidPhone { input: String },

    #[error("Phone {phone} already exists")]
    DuplicatePhone { phone: String },

    #[error("Phone {phone} not found")]
    PhoneNotFound { phone: String },

    #[error("Invalid birthday '{input}': expected DD.MM.YYYY")]
    InvalidBirthday { input: String },

    #[error("Contact {name} already exists")]
    DuplicateContact { name: String },

    #[error("Contact {name} not found")]
    ContactNotFound { name: String },

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AbookResult<T> = Result<T, AbookError>;
