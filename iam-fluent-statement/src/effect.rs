//! Statement effect

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether the statement grants or withholds the listed actions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Effect {
    /// Grant the listed actions. This is the default for a fresh statement.
    #[default]
    Allow,
    /// Explicitly refuse the listed actions.
    Deny,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_defaults_to_allow() {
        assert_eq!(Effect::default(), Effect::Allow);
    }

    #[test]
    fn test_effect_serializes_as_wire_strings() {
        assert_eq!(
            serde_json::to_value(Effect::Allow).expect("should serialize"),
            serde_json::json!("Allow")
        );
        assert_eq!(
            serde_json::to_value(Effect::Deny).expect("should serialize"),
            serde_json::json!("Deny")
        );
    }
}
