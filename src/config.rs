//! Serializer configuration.
//!
//! Settings can be built in code or loaded from JSON:
//!
//! ```
//! use protoframe::config::SerializerConfig;
//!
//! let config = SerializerConfig::from_json(r#"{ "schema_id": 42 }"#).unwrap();
//! assert_eq!(config.schema_id, 42);
//! assert!(config.strip_package);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default schema identifier written into frames.
///
/// Placeholder until the schema is registered and its real id is known.
pub const DEFAULT_SCHEMA_ID: u32 = 1;

/// Configuration for the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Schema identifier written into every frame.
    pub schema_id: u32,
    /// Strip the package from message full names before index resolution.
    pub strip_package: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            schema_id: DEFAULT_SCHEMA_ID,
            strip_package: true,
        }
    }
}

impl SerializerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FramingError;

    #[test]
    fn test_default_config() {
        let config = SerializerConfig::default();
        assert_eq!(config.schema_id, DEFAULT_SCHEMA_ID);
        assert!(config.strip_package);
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let config = SerializerConfig::from_json("{}").unwrap();
        assert_eq!(config, SerializerConfig::default());
    }

    #[test]
    fn test_from_json_all_fields() {
        let config =
            SerializerConfig::from_json(r#"{"schema_id": 100, "strip_package": false}"#).unwrap();
        assert_eq!(config.schema_id, 100);
        assert!(!config.strip_package);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SerializerConfig {
            schema_id: u32::MAX,
            strip_package: false,
        };
        let json = config.to_json().unwrap();
        assert_eq!(SerializerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        let result = SerializerConfig::from_json(r#"{"schema_id": -1}"#);
        assert!(matches!(result, Err(FramingError::Config(_))));

        let result = SerializerConfig::from_json("not json");
        assert!(matches!(result, Err(FramingError::Config(_))));
    }
}
