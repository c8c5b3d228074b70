//! The mutable statement builder
//!
//! A `PolicyStatement` accumulates actions, resources and condition clauses
//! through chainable mutators and renders the accumulated state into a
//! [`StatementRecord`]. The builder validates nothing: malformed input is
//! carried verbatim into the output, because catalog data quality is the
//! calling layer's responsibility. Rendering is a pure read; the builder
//! stays usable afterwards and a later render reflects later mutation.

use std::collections::HashSet;

use crate::access_level::{AccessLevel, AccessLevelList};
use crate::condition::{Condition, ConditionValues, Operator};
use crate::effect::Effect;
use crate::record::{ConditionMap, ScalarOrList, StatementRecord};

/// One allow/deny rule under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyStatement {
    sid: Option<String>,
    effect: Effect,
    service_prefix: String,
    actions: Vec<String>,
    resources: Vec<String>,
    conditions: Vec<Condition>,
    access_levels: AccessLevelList,
}

impl PolicyStatement {
    /// Create an empty statement for a service.
    ///
    /// # Arguments
    /// * `service_prefix` - Prefix used to qualify bare action names
    #[must_use]
    pub fn new(service_prefix: impl Into<String>) -> Self {
        Self {
            service_prefix: service_prefix.into(),
            ..Self::default()
        }
    }

    /// Create an empty named statement for a service.
    #[must_use]
    pub fn with_sid(service_prefix: impl Into<String>, sid: impl Into<String>) -> Self {
        let mut statement = Self::new(service_prefix);
        statement.sid = Some(sid.into());
        statement
    }

    /// Set the statement identifier. Idempotent; the last value wins.
    pub fn set_sid(&mut self, sid: impl Into<String>) -> &mut Self {
        self.sid = Some(sid.into());
        self
    }

    /// Set the statement effect.
    pub fn set_effect(&mut self, effect: Effect) -> &mut Self {
        self.effect = effect;
        self
    }

    /// Append a bare action name, qualified with the service prefix.
    ///
    /// Duplicates are accepted here and deduplicated at render time with
    /// first-occurrence order preserved.
    pub fn add_action(&mut self, name: &str) -> &mut Self {
        let qualified = format!("{}:{}", self.service_prefix, name);
        self.actions.push(qualified);
        self
    }

    /// Append a bare action name and record its access level.
    pub fn add_action_with_level(&mut self, name: &str, level: AccessLevel) -> &mut Self {
        let qualified = format!("{}:{}", self.service_prefix, name);
        self.access_levels.add(level, qualified.clone());
        self.actions.push(qualified);
        self
    }

    /// Append an already qualified action (`"<prefix>:<Name>"`) verbatim.
    ///
    /// Dependent actions cross service prefixes, so they arrive qualified.
    pub fn add_qualified_action(&mut self, action: impl Into<String>) -> &mut Self {
        self.actions.push(action.into());
        self
    }

    /// Append a fully substituted resource ARN.
    pub fn add_resource(&mut self, arn: impl Into<String>) -> &mut Self {
        self.resources.push(arn.into());
        self
    }

    /// Add a condition clause for `key`.
    ///
    /// Values are normalized to a list; a lone string becomes a one-element
    /// list. Re-adding a key replaces its entire entry, operator included.
    /// The builder never merges two value sets under one key.
    pub fn add_condition(
        &mut self,
        key: impl Into<String>,
        values: impl Into<ConditionValues>,
        operator: impl Into<Operator>,
    ) -> &mut Self {
        let condition = Condition {
            operator: operator.into(),
            key: key.into(),
            values: values.into().into_vec(),
        };
        if let Some(existing) = self
            .conditions
            .iter_mut()
            .find(|c| c.key == condition.key)
        {
            *existing = condition;
        } else {
            self.conditions.push(condition);
        }
        self
    }

    /// The statement identifier, if one was set.
    #[must_use]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    /// The statement effect.
    #[must_use]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// The service prefix this statement qualifies bare actions with.
    #[must_use]
    pub fn service_prefix(&self) -> &str {
        &self.service_prefix
    }

    /// Accumulated actions, in insertion order, duplicates included.
    #[must_use]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Accumulated resource ARNs, in insertion order.
    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Accumulated condition clauses, in first-insertion order per key.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Access-level classification of the actions added so far.
    #[must_use]
    pub fn access_levels(&self) -> &AccessLevelList {
        &self.access_levels
    }

    /// Render the current state into a wire-format record.
    ///
    /// Deterministic for a given state. Actions are deduplicated keeping
    /// first occurrences; an empty resource list omits the field;
    /// conditions are grouped by operator (sorted), then by key.
    #[must_use]
    pub fn render(&self) -> StatementRecord {
        let mut seen = HashSet::new();
        let actions: Vec<String> = self
            .actions
            .iter()
            .filter(|action| seen.insert(action.as_str()))
            .cloned()
            .collect();

        let resource = if self.resources.is_empty() {
            None
        } else {
            Some(ScalarOrList::from_values(self.resources.clone()))
        };

        let condition = if self.conditions.is_empty() {
            None
        } else {
            let mut groups = ConditionMap::new();
            for clause in &self.conditions {
                groups
                    .entry(clause.operator.to_string())
                    .or_default()
                    .insert(
                        clause.key.clone(),
                        ScalarOrList::from_values(clause.values.clone()),
                    );
            }
            Some(groups)
        };

        StatementRecord {
            sid: self.sid.clone(),
            effect: self.effect,
            action: ScalarOrList::from_values(actions),
            resource,
            condition,
        }
    }

    /// Render and serialize to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.render())
    }

    /// Render and serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.render())
    }
}
