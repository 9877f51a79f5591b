use serde::{Deserialize, Serialize};

/// Serialization error type
#[derive(Debug, Clone, PartialEq)]
pub enum SerializationError {
    SerializationFailed(String),
    DeserializationFailed(String),
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationError::SerializationFailed(msg) => {
                write!(f, "Serialization failed: {}", msg)
            }
            SerializationError::DeserializationFailed(msg) => {
                write!(f, "Deserialization failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for SerializationError {}

/// Trait for serializers that can convert between objects and bytes
pub trait Serializer<T> {
    /// Serialize an object to bytes
    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to an object
    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializationError>;
}

// JSON Serialization Helpers
//==========================

/// Serialize a struct to JSON bytes
pub fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(value).map_err(|e| {
        SerializationError::SerializationFailed(format!("Failed to serialize to JSON bytes: {}", e))
    })
}

/// Deserialize JSON bytes to a struct
///
/// Fails on missing, mistyped or (for types that deny them) unknown fields;
/// a partially populated value is never returned.
pub fn from_json<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| {
        SerializationError::DeserializationFailed(format!(
            "Failed to deserialize from JSON bytes: {}",
            e
        ))
    })
}

/// JSON serializer implementation, used for both message keys and values
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T> Serializer<T> for JsonSerializer
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        to_json(value)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        from_json(bytes)
    }
}
