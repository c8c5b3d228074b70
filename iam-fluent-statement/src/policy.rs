//! Policy document container
//!
//! An ordered collection of statements under the standard policy-language
//! version marker. Statements are carried as-is: merging, deduplication and
//! optimization across statements belong to downstream tooling.

use crate::record::PolicyRecord;
use crate::statement::PolicyStatement;

/// The policy-language version understood by the evaluator.
pub const POLICY_VERSION: &str = "2012-10-17";

/// An ordered set of policy statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyDocument {
    statements: Vec<PolicyStatement>,
}

impl PolicyDocument {
    /// Create an empty policy document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement, preserving insertion order.
    pub fn add_statement(&mut self, statement: PolicyStatement) -> &mut Self {
        self.statements.push(statement);
        self
    }

    /// The statements added so far.
    #[must_use]
    pub fn statements(&self) -> &[PolicyStatement] {
        &self.statements
    }

    /// Whether the document holds any statement yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Render every statement into a wire-format policy record.
    #[must_use]
    pub fn render(&self) -> PolicyRecord {
        PolicyRecord {
            version: POLICY_VERSION.to_string(),
            statement: self.statements.iter().map(PolicyStatement::render).collect(),
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::effect::Effect;

    #[test]
    fn test_empty_document_renders_version_and_no_statements() {
        let document = PolicyDocument::new();
        assert!(document.is_empty());

        let value = serde_json::to_value(document.render()).expect("should serialize");
        assert_eq!(value, json!({"Version": "2012-10-17", "Statement": []}));
    }

    #[test]
    fn test_statements_render_in_insertion_order() {
        let mut first = PolicyStatement::new("s3");
        first.add_action("GetObject").add_resource("arn:aws:s3:::bucket/*");
        let mut second = PolicyStatement::new("s3");
        second.add_action("PutObject").set_effect(Effect::Deny);

        let mut document = PolicyDocument::new();
        document.add_statement(first).add_statement(second);

        let record = document.render();
        assert_eq!(record.version, POLICY_VERSION);
        assert_eq!(record.statement.len(), 2);
        assert_eq!(record.statement[0].action.as_slice(), ["s3:GetObject"]);
        assert_eq!(record.statement[1].effect, Effect::Deny);
    }

    #[test]
    fn test_no_merging_of_equivalent_statements() {
        let mut statement = PolicyStatement::new("s3");
        statement.add_action("GetObject");

        let mut document = PolicyDocument::new();
        document
            .add_statement(statement.clone())
            .add_statement(statement);

        // Two identical statements stay two statements.
        assert_eq!(document.render().statement.len(), 2);
    }
}
