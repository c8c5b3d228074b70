//! Embedded service definition data
//!
//! Definition files are embedded into the binary at compile time, one JSON
//! file per service, named `<prefix>.json`. They are generated from the
//! upstream authorization reference rather than maintained by hand.

use std::borrow::Cow;

use rust_embed::RustEmbed;

/// Embedded service definition files.
#[derive(RustEmbed)]
#[folder = "data"]
#[include = "*.json"]
pub(crate) struct CatalogData;

impl CatalogData {
    /// Get the raw definition bytes for a service prefix.
    pub(crate) fn get_definition(service: &str) -> Option<Cow<'static, [u8]>> {
        let path = format!("{}.json", service);
        Self::get(&path).map(|file| file.data)
    }

    /// Every service prefix with an embedded definition, sorted.
    pub(crate) fn service_names() -> Vec<String> {
        let mut names: Vec<String> = Self::iter()
            .filter_map(|path| {
                path.strip_suffix(".json")
                    .map(std::string::ToString::to_string)
            })
            .collect();
        names.sort();
        names
    }
}
