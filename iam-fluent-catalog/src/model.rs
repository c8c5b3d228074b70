//! Service definition data model
//!
//! A service definition is one JSON data file: the service prefix plus the
//! constant tables a generated per-service class used to carry: action
//! names with access levels, resource-type ARN templates, and condition
//! keys with their value types. Definitions are regenerated from the
//! upstream authorization reference, so the model deserializes the
//! PascalCase keys those files use.

use iam_fluent_statement::{AccessLevel, Operator};
use serde::Deserialize;

/// Everything the catalog knows about one service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceDefinition {
    /// Service prefix used to qualify action names (e.g. `"s3"`).
    pub name: String,
    pub actions: Vec<ActionDefinition>,
    #[serde(default)]
    pub resources: Vec<ResourceTypeDefinition>,
    #[serde(default)]
    pub condition_keys: Vec<ConditionKeyDefinition>,
}

impl ServiceDefinition {
    /// Look up an action by its bare name.
    #[must_use]
    pub fn action(&self, name: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|action| action.name == name)
    }

    /// Look up a resource type by name.
    #[must_use]
    pub fn resource_type(&self, name: &str) -> Option<&ResourceTypeDefinition> {
        self.resources.iter().find(|resource| resource.name == name)
    }

    /// Look up a condition key by its full name (e.g. `"cloud9:UserArn"`).
    #[must_use]
    pub fn condition_key(&self, name: &str) -> Option<&ConditionKeyDefinition> {
        self.condition_keys.iter().find(|key| key.name == name)
    }
}

/// One action a service exposes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionDefinition {
    /// Bare action name, without the service prefix.
    pub name: String,
    pub access_level: AccessLevel,
    /// Condition keys that can scope this action.
    #[serde(default)]
    pub condition_keys: Vec<String>,
    /// Actions in other services this action requires, fully qualified.
    #[serde(default)]
    pub dependent_actions: Vec<String>,
    /// Resource types this action applies to.
    #[serde(default)]
    pub resource_types: Vec<String>,
}

/// One resource type and its ARN template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTypeDefinition {
    pub name: String,
    /// ARN template with `${Name}` placeholder tokens.
    #[serde(rename = "ARNFormat")]
    pub arn_format: String,
    #[serde(default)]
    pub condition_keys: Vec<String>,
}

/// One condition key and the value type that picks its default operator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConditionKeyDefinition {
    /// Full key name, prefix included (e.g. `"cloud9:EnvironmentId"`).
    pub name: String,
    #[serde(rename = "Type")]
    pub key_type: ConditionKeyType,
}

/// Value type of a condition key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ConditionKeyType {
    String,
    Arn,
    Numeric,
    Date,
    Bool,
    IpAddress,
}

impl ConditionKeyType {
    /// The operator a condition accessor uses when the caller names none.
    #[must_use]
    pub fn default_operator(self) -> Operator {
        match self {
            Self::String => Operator::StringLike,
            Self::Arn => Operator::ArnLike,
            Self::Numeric => Operator::NumericEquals,
            Self::Date => Operator::DateEquals,
            Self::Bool => Operator::Bool,
            Self::IpAddress => Operator::IpAddress,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parse_minimal_definition() -> ServiceDefinition {
        serde_json::from_str(
            r#"{
                "Name": "svc",
                "Actions": [
                    {"Name": "DoThing", "AccessLevel": "Write",
                     "ConditionKeys": ["svc:ThingId"],
                     "DependentActions": ["iam:PassRole"],
                     "ResourceTypes": ["thing"]}
                ],
                "Resources": [
                    {"Name": "thing",
                     "ARNFormat": "arn:${Partition}:svc:${Region}:${Account}:thing/${ThingId}"}
                ],
                "ConditionKeys": [
                    {"Name": "svc:ThingId", "Type": "String"},
                    {"Name": "svc:ThingArn", "Type": "Arn"}
                ]
            }"#,
        )
        .expect("definition should parse")
    }

    #[test]
    fn test_definition_deserializes_pascal_case_keys() {
        let definition = parse_minimal_definition();
        assert_eq!(definition.name, "svc");

        let action = definition.action("DoThing").expect("action should exist");
        assert_eq!(action.access_level, AccessLevel::Write);
        assert_eq!(action.dependent_actions, ["iam:PassRole"]);
        assert_eq!(action.resource_types, ["thing"]);

        let resource = definition
            .resource_type("thing")
            .expect("resource type should exist");
        assert!(resource.arn_format.contains("${ThingId}"));
    }

    #[test]
    fn test_lookups_miss_cleanly() {
        let definition = parse_minimal_definition();
        assert!(definition.action("NoSuchAction").is_none());
        assert!(definition.resource_type("nosuch").is_none());
        assert!(definition.condition_key("svc:NoSuchKey").is_none());
    }

    #[rstest]
    #[case(ConditionKeyType::String, Operator::StringLike)]
    #[case(ConditionKeyType::Arn, Operator::ArnLike)]
    #[case(ConditionKeyType::Numeric, Operator::NumericEquals)]
    #[case(ConditionKeyType::Date, Operator::DateEquals)]
    #[case(ConditionKeyType::Bool, Operator::Bool)]
    #[case(ConditionKeyType::IpAddress, Operator::IpAddress)]
    fn test_default_operator_per_key_type(
        #[case] key_type: ConditionKeyType,
        #[case] expected: Operator,
    ) {
        assert_eq!(key_type.default_operator(), expected);
    }

    #[test]
    fn test_optional_tables_default_to_empty() {
        let definition: ServiceDefinition = serde_json::from_str(
            r#"{"Name": "svc", "Actions": [{"Name": "DoThing", "AccessLevel": "Read"}]}"#,
        )
        .expect("definition should parse");
        assert!(definition.resources.is_empty());
        assert!(definition.condition_keys.is_empty());
    }
}
