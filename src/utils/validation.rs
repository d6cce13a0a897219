use crate::utils::error::{ImportError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Domain ids become repository file names, so anything that could escape the
/// repository base directory is rejected up front.
pub fn validate_domain_id(field_name: &str, domain_id: &str) -> Result<()> {
    if domain_id.is_empty() {
        return Err(ImportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: domain_id.to_string(),
            reason: "Domain id cannot be empty".to_string(),
        });
    }

    if domain_id.contains('/') || domain_id.contains('\\') || domain_id.contains('\0') {
        return Err(ImportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: domain_id.to_string(),
            reason: "Domain id cannot contain path separators or null bytes".to_string(),
        });
    }

    if domain_id == "." || domain_id == ".." {
        return Err(ImportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: domain_id.to_string(),
            reason: "Domain id cannot be a relative path component".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ImportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ImportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
