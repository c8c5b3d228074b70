//! Rendered wire-format records
//!
//! These are the serialized shapes consumed by the downstream policy
//! evaluator. The one convention worth calling out: `Action` and `Resource`
//! collapse to a bare string when they hold exactly one element, and an
//! empty `Resource` is omitted entirely.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::effect::Effect;

/// A value that is a bare string for one element and an array otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ScalarOrList {
    Scalar(String),
    List(Vec<String>),
}

impl ScalarOrList {
    /// Collapse per the wire convention: exactly one element becomes a
    /// scalar, anything else stays a list.
    #[must_use]
    pub fn from_values(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            Self::Scalar(values.remove(0))
        } else {
            Self::List(values)
        }
    }

    /// View the contents as a slice regardless of representation.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::List(values) => values.as_slice(),
        }
    }
}

/// Conditions grouped by operator, then by condition key.
pub type ConditionMap = BTreeMap<String, BTreeMap<String, ScalarOrList>>;

/// One rendered policy statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StatementRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    pub effect: Effect,
    pub action: ScalarOrList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ScalarOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionMap>,
}

/// A rendered policy document: a version marker and its statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyRecord {
    pub version: String,
    pub statement: Vec<StatementRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_collapse() {
        assert_eq!(
            ScalarOrList::from_values(vec!["one".to_string()]),
            ScalarOrList::Scalar("one".to_string())
        );
        assert_eq!(
            ScalarOrList::from_values(vec!["a".to_string(), "b".to_string()]),
            ScalarOrList::List(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(ScalarOrList::from_values(vec![]), ScalarOrList::List(vec![]));
    }

    #[test]
    fn test_scalar_serializes_without_brackets() {
        let scalar = ScalarOrList::from_values(vec!["s3:GetObject".to_string()]);
        assert_eq!(
            serde_json::to_value(&scalar).expect("should serialize"),
            serde_json::json!("s3:GetObject")
        );

        let list = ScalarOrList::from_values(vec![
            "s3:GetObject".to_string(),
            "s3:PutObject".to_string(),
        ]);
        assert_eq!(
            serde_json::to_value(&list).expect("should serialize"),
            serde_json::json!(["s3:GetObject", "s3:PutObject"])
        );
    }

    #[test]
    fn test_as_slice_spans_both_representations() {
        let scalar = ScalarOrList::Scalar("x".to_string());
        assert_eq!(scalar.as_slice(), ["x"]);

        let list = ScalarOrList::List(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(list.as_slice(), ["x", "y"]);
    }

    #[test]
    fn test_statement_record_omits_absent_fields() {
        let record = StatementRecord {
            sid: None,
            effect: Effect::Allow,
            action: ScalarOrList::Scalar("svc:DoThing".to_string()),
            resource: None,
            condition: None,
        };

        let value = serde_json::to_value(&record).expect("should serialize");
        assert_eq!(
            value,
            serde_json::json!({"Effect": "Allow", "Action": "svc:DoThing"})
        );
    }

    #[test]
    fn test_statement_record_deserializes_wire_json() {
        let record: StatementRecord = serde_json::from_value(serde_json::json!({
            "Sid": "AllowGet",
            "Effect": "Deny",
            "Action": ["s3:GetObject"],
            "Resource": "arn:aws:s3:::bucket/*",
            "Condition": {"StringLike": {"s3:prefix": ["home/"]}}
        }))
        .expect("should parse");

        assert_eq!(record.sid.as_deref(), Some("AllowGet"));
        assert_eq!(record.effect, Effect::Deny);
        assert_eq!(record.action.as_slice(), ["s3:GetObject"]);
        assert_eq!(
            record.resource.map(|r| r.as_slice().to_vec()),
            Some(vec!["arn:aws:s3:::bucket/*".to_string()])
        );
        assert!(record.condition.is_some());
    }
}
