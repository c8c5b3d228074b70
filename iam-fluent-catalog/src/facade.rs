//! Generic service facade
//!
//! One `ServiceStatement` stands in for an entire generated per-service
//! class: actions, resource ARNs and condition defaults come from the
//! loaded definition instead of hand-written methods. The facade owns the
//! underlying builder and mirrors its chainable style, with catalog-aware
//! variants of each mutator.

use std::collections::HashMap;
use std::sync::Arc;

use iam_fluent_statement::{
    ArnResolver, ConditionValues, Effect, Operator, PolicyStatement, StatementRecord,
};
use log::warn;

use crate::errors::{CatalogError, Result};
use crate::model::ServiceDefinition;

/// A statement under construction for one catalog service.
#[derive(Debug, Clone)]
pub struct ServiceStatement {
    definition: Arc<ServiceDefinition>,
    statement: PolicyStatement,
    resolver: ArnResolver,
}

impl ServiceStatement {
    pub(crate) fn new(definition: Arc<ServiceDefinition>, sid: Option<String>) -> Self {
        let statement = match sid {
            Some(sid) => PolicyStatement::with_sid(&definition.name, sid),
            None => PolicyStatement::new(&definition.name),
        };
        Self {
            definition,
            statement,
            resolver: ArnResolver::default(),
        }
    }

    /// Replace the ARN resolver, e.g. to pin a partition or account.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ArnResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set the effect to `Allow` (the default).
    pub fn allow(&mut self) -> &mut Self {
        self.statement.set_effect(Effect::Allow);
        self
    }

    /// Set the effect to `Deny`.
    pub fn deny(&mut self) -> &mut Self {
        self.statement.set_effect(Effect::Deny);
        self
    }

    /// Append an action by bare name, recording its catalog access level.
    ///
    /// A name the catalog does not list is still appended verbatim.
    /// Catalog coverage is a data concern, not a runtime one.
    pub fn to_action(&mut self, name: &str) -> &mut Self {
        match self.definition.action(name) {
            Some(action) => {
                let level = action.access_level;
                self.statement.add_action_with_level(name, level);
            }
            None => {
                warn!(
                    "Action {} is not listed for service {}",
                    name, self.definition.name
                );
                self.statement.add_action(name);
            }
        }
        self
    }

    /// Append the dependent actions the catalog lists for `name`.
    ///
    /// Dependent actions arrive fully qualified and may cross service
    /// prefixes. Unknown action names contribute nothing.
    pub fn with_dependent_actions(&mut self, name: &str) -> &mut Self {
        if let Some(action) = self.definition.action(name) {
            for dependent in action.dependent_actions.clone() {
                self.statement.add_qualified_action(dependent);
            }
        }
        self
    }

    /// Append a resource by catalog type, resolving its ARN template.
    ///
    /// # Arguments
    /// * `type_name` - Resource type name from the service definition
    /// * `placeholders` - Values for the template's identifier tokens
    ///
    /// # Errors
    /// Returns `ResourceTypeNotFound` when the service defines no such
    /// resource type.
    pub fn on_resource(
        &mut self,
        type_name: &str,
        placeholders: &HashMap<String, String>,
    ) -> Result<&mut Self> {
        let resource_type = self.definition.resource_type(type_name).ok_or_else(|| {
            CatalogError::ResourceTypeNotFound {
                service: self.definition.name.clone(),
                resource_type: type_name.to_string(),
            }
        })?;

        let arn = self.resolver.resolve(&resource_type.arn_format, placeholders);
        self.statement.add_resource(arn);
        Ok(self)
    }

    /// Append a fully-formed ARN verbatim.
    pub fn on_arn(&mut self, arn: impl Into<String>) -> &mut Self {
        self.statement.add_resource(arn);
        self
    }

    /// Add a condition clause.
    ///
    /// With no operator, the key's catalog type picks the default the
    /// generated accessors used (string-like keys compare with
    /// `StringLike`, ARN-like keys with `ArnLike`, and so on). Keys the
    /// catalog does not list default to `StringLike`.
    pub fn if_condition(
        &mut self,
        key: &str,
        values: impl Into<ConditionValues>,
        operator: Option<Operator>,
    ) -> &mut Self {
        let operator = operator.unwrap_or_else(|| self.default_operator(key));
        self.statement.add_condition(key, values, operator);
        self
    }

    fn default_operator(&self, key: &str) -> Operator {
        self.definition
            .condition_key(key)
            .map_or(Operator::StringLike, |definition| {
                definition.key_type.default_operator()
            })
    }

    /// The service definition backing this facade.
    #[must_use]
    pub fn definition(&self) -> &ServiceDefinition {
        &self.definition
    }

    /// The underlying builder, for inspection.
    #[must_use]
    pub fn statement(&self) -> &PolicyStatement {
        &self.statement
    }

    /// Give up the facade and keep the accumulated statement.
    #[must_use]
    pub fn into_statement(self) -> PolicyStatement {
        self.statement
    }

    /// Render the current state into a wire-format record.
    #[must_use]
    pub fn render(&self) -> StatementRecord {
        self.statement.render()
    }
}
