//! ARN template resolution
//!
//! Resource-type templates carry `${Name}` placeholder tokens. Resolution is
//! a single pass: each token is replaced independently and replacement text
//! is never re-scanned. Caller-supplied values win when present and
//! non-empty; the three positional fields fall back to the configured
//! partition/region/account defaults, and any other unsupplied token becomes
//! a wildcard so no unresolved token ever reaches a statement.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;
use regex::{Captures, Regex};

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
    })
}

/// Resolves `${Name}` placeholders in ARN templates.
///
/// Carries the substitutions for the three positional ARN fields. The
/// defaults encode "match anything in this position": any account, any
/// region, the standard `aws` partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArnResolver {
    partition: String,
    region: String,
    account: String,
}

impl Default for ArnResolver {
    fn default() -> Self {
        Self::new("aws", "*", "*")
    }
}

impl ArnResolver {
    /// Create a resolver with explicit positional defaults.
    #[must_use]
    pub fn new(
        partition: impl Into<String>,
        region: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            partition: partition.into(),
            region: region.into(),
            account: account.into(),
        }
    }

    /// Substitute every `${Name}` token in `template`.
    ///
    /// Lookup order per token: the caller-supplied value when present and
    /// non-empty, then the positional default for `Partition`/`Region`/
    /// `Account` (matched case-insensitively), then `*`. The result is not
    /// validated; identifier syntax is the caller's concern.
    #[must_use]
    pub fn resolve(&self, template: &str, placeholders: &HashMap<String, String>) -> String {
        let resolved = placeholder_pattern()
            .replace_all(template, |caps: &Captures<'_>| {
                let name = &caps[1];
                if let Some(value) = placeholders.get(name).filter(|v| !v.is_empty()) {
                    return value.clone();
                }
                match name.to_ascii_lowercase().as_str() {
                    "partition" => self.partition.clone(),
                    "region" => self.region.clone(),
                    "account" => self.account.clone(),
                    _ => "*".to_string(),
                }
            })
            .into_owned();

        debug!("Resolved ARN template {} to {}", template, resolved);
        resolved
    }
}
