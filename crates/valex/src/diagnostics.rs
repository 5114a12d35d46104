//! Diagnostics-only registry exports.
//!
//! Renders the registry as JSON for consumption by external tooling. The
//! allowed-values text stays the user-facing documentation; this dump
//! carries the same metadata in machine-readable form, families sorted by
//! name so the output is stable.

use crate::registry::Registry;
use serde::Serialize;

#[derive(Serialize)]
struct DumpedMaker {
    name: &'static str,
    args: &'static [&'static str],
}

#[derive(Serialize)]
struct DumpedFamily {
    family: &'static str,
    value_type: &'static str,
    makers: Vec<DumpedMaker>,
}

#[derive(Serialize)]
struct RegistryDump {
    families: Vec<DumpedFamily>,
}

/// Serialize the registry to a JSON object.
///
/// Each family records its name, the Rust type of its parser, and every
/// maker with its argument descriptors.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use valex::{Registry, dump_registry};
///
/// let registry = Registry::with_builtins();
/// let json = dump_registry(&registry).expect("serialize registry");
/// assert!(json.contains("\"families\""));
/// ```
pub fn dump_registry(registry: &Registry) -> serde_json::Result<String> {
    let families = registry
        .erased_sorted()
        .into_iter()
        .map(|parser| DumpedFamily {
            family: parser.family_name(),
            value_type: parser.value_type_name(),
            makers: parser
                .maker_shapes()
                .into_iter()
                .map(|(name, args)| DumpedMaker { name, args })
                .collect(),
        })
        .collect();

    serde_json::to_string(&RegistryDump { families })
}
