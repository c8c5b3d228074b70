//! Cached loader for service definitions
//!
//! Definitions are parsed from the embedded data on first use and shared
//! via `Arc` afterwards. The cache uses interior mutability so the catalog
//! can be held by shared reference; like the statement builder itself, a
//! catalog instance is confined to one logical task.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::embedded::CatalogData;
use crate::errors::{CatalogError, Result};
use crate::facade::ServiceStatement;
use crate::model::ServiceDefinition;

/// Loads and caches embedded service definitions.
#[derive(Debug, Default)]
pub struct ServiceCatalog {
    cache: RefCell<HashMap<String, Arc<ServiceDefinition>>>,
}

impl ServiceCatalog {
    /// Create a catalog with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the definition for a service prefix.
    ///
    /// # Errors
    /// Returns `ServiceNotFound` when no definition is embedded for the
    /// prefix, or `InvalidDefinition` when the data fails to parse.
    pub fn load(&self, service: &str) -> Result<Arc<ServiceDefinition>> {
        if let Some(definition) = self.cache.borrow().get(service) {
            return Ok(Arc::clone(definition));
        }

        let data = CatalogData::get_definition(service)
            .ok_or_else(|| CatalogError::ServiceNotFound(service.to_string()))?;

        let definition: ServiceDefinition =
            serde_json::from_slice(&data).map_err(|source| CatalogError::InvalidDefinition {
                service: service.to_string(),
                source,
            })?;

        debug!(
            "Loaded service definition {}: {} actions, {} resource types",
            service,
            definition.actions.len(),
            definition.resources.len()
        );

        let definition = Arc::new(definition);
        self.cache
            .borrow_mut()
            .insert(service.to_string(), Arc::clone(&definition));
        Ok(definition)
    }

    /// Begin a statement for a service.
    pub fn statement(&self, service: &str) -> Result<ServiceStatement> {
        Ok(ServiceStatement::new(self.load(service)?, None))
    }

    /// Begin a named statement for a service.
    pub fn statement_with_sid(&self, service: &str, sid: impl Into<String>) -> Result<ServiceStatement> {
        Ok(ServiceStatement::new(self.load(service)?, Some(sid.into())))
    }

    /// Every service prefix with an embedded definition, sorted.
    #[must_use]
    pub fn service_names() -> Vec<String> {
        CatalogData::service_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_unknown_service_errors() {
        let catalog = ServiceCatalog::new();
        let result = catalog.load("nonexistent-service");
        assert!(matches!(result, Err(CatalogError::ServiceNotFound(_))));
    }

    #[test]
    fn test_load_caches_and_shares_definitions() {
        let catalog = ServiceCatalog::new();
        let first = catalog.load("cloud9").expect("cloud9 should be embedded");
        let second = catalog.load("cloud9").expect("cloud9 should be embedded");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_every_embedded_definition_parses() {
        let catalog = ServiceCatalog::new();
        for service in ServiceCatalog::service_names() {
            let definition = catalog
                .load(&service)
                .unwrap_or_else(|e| panic!("Definition for {} should parse: {}", service, e));
            assert_eq!(
                definition.name, service,
                "File name and service prefix should agree for {}",
                service
            );
            assert!(
                !definition.actions.is_empty(),
                "Service {} should define at least one action",
                service
            );
        }
    }
}
