use crate::utils::error::{Result, ValueKindsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ValueKindsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ValueKindsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Requires `path` to name an existing regular file.
pub fn validate_existing_file(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    let meta = std::fs::metadata(path).map_err(|e| ValueKindsError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: format!("Cannot access file: {}", e),
    })?;

    if !meta.is_file() {
        return Err(ValueKindsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Not a regular file".to_string(),
        });
    }

    Ok(())
}
