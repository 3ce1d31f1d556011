use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    UnknownCourse(String),
    SchemaVersionMismatch { expected: u8, found: u8 },
    InvalidParameter(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::UnknownCourse(id) => write!(f, "Unknown course: {}", id),
            EngineError::SchemaVersionMismatch { expected, found } => {
                write!(f, "Unsupported schema version: expected {}, found {}", expected, found)
            }
            EngineError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            EngineError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            EngineError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            EngineError::DeserializationError(err.to_string())
        } else {
            EngineError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::UnknownCourse("st_andrews".to_string());
        assert_eq!(err.to_string(), "Unknown course: st_andrews");
        let err = EngineError::SchemaVersionMismatch { expected: 1, found: 3 };
        assert_eq!(err.to_string(), "Unsupported schema version: expected 1, found 3");
    }

    #[test]
    fn test_serde_error_maps_by_kind() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(EngineError::from(parse_err), EngineError::SerializationError(_)));
        let data_err = serde_json::from_str::<u32>("\"seven\"").unwrap_err();
        assert!(matches!(EngineError::from(data_err), EngineError::DeserializationError(_)));
    }
}
