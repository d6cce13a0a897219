use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("bundle is missing the required domain-id property")]
    MissingDomainId,

    #[error("domain id must not be empty")]
    EmptyDomainId,

    #[error("domain '{domain_id}' already exists in the repository")]
    DomainAlreadyExists { domain_id: String },

    #[error("domain '{domain_id}' not found in the repository")]
    DomainNotFound { domain_id: String },

    #[error("failed to store domain '{domain_id}': {reason}")]
    DomainStorage { domain_id: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ImportError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ImportError::MissingDomainId | ImportError::EmptyDomainId => {
                "A domain id is required to import or remove a schema".to_string()
            }
            ImportError::DomainAlreadyExists { domain_id } => format!(
                "Domain '{}' already exists; pass --overwrite to replace it",
                domain_id
            ),
            ImportError::DomainNotFound { domain_id } => {
                format!("No domain named '{}' exists in the repository", domain_id)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ImportError::InvalidConfigValue { .. } => 2,
            ImportError::IoError(_) | ImportError::DomainStorage { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
