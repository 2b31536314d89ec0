use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValueKindsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Cannot decode value at {path}: {message}")]
    DecodeError { path: String, message: String },

    #[error("Unknown type tag: {tag}")]
    UnknownTagError { tag: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ValueKindsError {
    pub fn decode(path: &str, message: impl Into<String>) -> Self {
        ValueKindsError::DecodeError {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ValueKindsError::InvalidConfigValueError { .. } => 1,
            ValueKindsError::IoError(_) => 2,
            ValueKindsError::SerializationError(_)
            | ValueKindsError::DecodeError { .. }
            | ValueKindsError::UnknownTagError { .. } => 3,
            ValueKindsError::CsvError(_) => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ValueKindsError::IoError(e) => format!("Could not read input: {}", e),
            ValueKindsError::SerializationError(e) => {
                format!("Input is not valid JSON: {}", e)
            }
            ValueKindsError::DecodeError { path, message } => {
                format!("Input value at {} is not understood: {}", path, message)
            }
            ValueKindsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option --{} is invalid: {}", field.replace('_', "-"), reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValueKindsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ValueKindsError::decode("$[0]", "bad").exit_code(), 3);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(ValueKindsError::from(io).exit_code(), 2);
        let config = ValueKindsError::InvalidConfigValueError {
            field: "input".to_string(),
            value: "".to_string(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
        assert_eq!(
            config.user_friendly_message(),
            "Option --input is invalid: Path cannot be empty"
        );
    }

    #[test]
    fn test_decode_error_names_path() {
        let err = ValueKindsError::decode("$[2].items[0]", "unknown $type 'foo'");
        assert_eq!(
            err.to_string(),
            "Cannot decode value at $[2].items[0]: unknown $type 'foo'"
        );
    }
}
