//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while loading or querying the service catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No embedded definition exists for the requested service prefix.
    #[error("No service definition found for '{0}'")]
    ServiceNotFound(String),

    /// The service defines no resource type with the requested name.
    #[error("Service '{service}' has no resource type '{resource_type}'")]
    ResourceTypeNotFound {
        service: String,
        resource_type: String,
    },

    /// An embedded definition failed to deserialize.
    #[error("Invalid service definition for '{service}': {source}")]
    InvalidDefinition {
        service: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the catalog crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_service() {
        let err = CatalogError::ServiceNotFound("nosuch".to_string());
        assert_eq!(err.to_string(), "No service definition found for 'nosuch'");

        let err = CatalogError::ResourceTypeNotFound {
            service: "cloud9".to_string(),
            resource_type: "cluster".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Service 'cloud9' has no resource type 'cluster'"
        );
    }
}
