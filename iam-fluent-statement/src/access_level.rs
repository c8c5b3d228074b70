//! Access-level classification for actions
//!
//! Access levels are authoring metadata: the builder records them alongside
//! the actions they describe so tooling can summarize what a statement
//! grants, but they never appear in the rendered output.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Classification tag attached to an action, mirroring the categories used
/// by the upstream service authorization documentation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum AccessLevel {
    /// Grants permission to read but not edit a resource.
    Read,
    /// Grants permission to create, delete or modify a resource.
    Write,
    /// Grants permission to list resources to determine whether they exist.
    List,
    /// Grants permission to add, remove or inspect resource tags.
    Tagging,
    /// Grants permission to modify the permissions of a resource.
    #[serde(rename = "Permissions management")]
    PermissionsManagement,
}

/// Actions grouped by access level, in insertion order within each level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessLevelList {
    levels: BTreeMap<AccessLevel, Vec<String>>,
}

impl AccessLevelList {
    /// Record an action under the given access level.
    pub fn add(&mut self, level: AccessLevel, action: impl Into<String>) {
        self.levels.entry(level).or_default().push(action.into());
    }

    /// Actions recorded under the given access level.
    #[must_use]
    pub fn actions(&self, level: AccessLevel) -> &[String] {
        match self.levels.get(&level) {
            Some(actions) => actions.as_slice(),
            None => &[],
        }
    }

    /// Whether any action has been classified yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over the recorded levels and their actions.
    pub fn iter(&self) -> impl Iterator<Item = (AccessLevel, &[String])> {
        self.levels
            .iter()
            .map(|(level, actions)| (*level, actions.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_level_list_groups_by_level() {
        let mut list = AccessLevelList::default();
        list.add(AccessLevel::Write, "s3:PutObject");
        list.add(AccessLevel::Read, "s3:GetObject");
        list.add(AccessLevel::Write, "s3:DeleteObject");

        assert_eq!(list.actions(AccessLevel::Read), ["s3:GetObject"]);
        assert_eq!(
            list.actions(AccessLevel::Write),
            ["s3:PutObject", "s3:DeleteObject"]
        );
        assert!(list.actions(AccessLevel::Tagging).is_empty());
    }

    #[test]
    fn test_permissions_management_wire_name() {
        let value =
            serde_json::to_value(AccessLevel::PermissionsManagement).expect("should serialize");
        assert_eq!(value, serde_json::json!("Permissions management"));
    }

    #[test]
    fn test_empty_list() {
        let list = AccessLevelList::default();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
