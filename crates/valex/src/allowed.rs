//! The allowed-values introspector: self-describing documentation for
//! every function family reachable from a starting family.

use crate::registry::Registry;
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Render documentation for the named family and every family it
/// transitively references through a checker-typed argument position.
///
/// The seed family is rendered first; the remaining reachable families
/// follow in alphabetical order, each expanded exactly once, so the output
/// is byte-identical across runs and safe to diff. Within a family the
/// function names are alphabetical. A family with no registered makers is
/// rendered with an explicit "there are no available functions" line.
///
/// # Examples
///
/// ```
/// use valex::{INT_CHECKER, Registry, allowed_values};
///
/// let registry = Registry::with_builtins();
/// let text = allowed_values(&registry, INT_CHECKER);
/// assert!(text.contains("for int-checker allowed values are:"));
/// assert!(text.contains("Between(int, int)"));
/// ```
#[must_use]
pub fn allowed_values(registry: &Registry, family: &str) -> String {
    let mut out = format!(
        "a list of {family} functions separated by ','.\n\
         \n\
         Write the checks as if you were writing code.\n\
         \n\
         The functions recognised are:\n\n"
    );

    let mut shown: BTreeSet<String> = BTreeSet::new();
    let mut pending: BTreeSet<String> = BTreeSet::new();

    let mut blocks = vec![render_family(registry, family, &mut pending)];
    shown.insert(family.to_owned());

    loop {
        let next = pending.iter().find(|name| !shown.contains(*name)).cloned();
        let Some(name) = next else { break };
        blocks.push(render_family(registry, &name, &mut pending));
        shown.insert(name);
    }

    out.push_str(&blocks.join("\n"));
    out
}

/// Render one family's block, collecting any referenced families into
/// `pending` for later expansion.
fn render_family(registry: &Registry, family: &str, pending: &mut BTreeSet<String>) -> String {
    let mut block = format!("for {family} allowed values are:\n");

    let Some(shapes) = registry.shapes_for(family) else {
        block.push_str("    there are no available functions\n");
        return block;
    };
    if shapes.is_empty() {
        block.push_str("    there are no available functions\n");
        return block;
    }

    for (name, args) in shapes {
        if args.is_empty() {
            let _ = writeln!(block, "    {name}");
        } else {
            let _ = writeln!(block, "    {name}({})", args.join(", "));
        }
        for descriptor in args {
            let referenced = trim_descriptor(descriptor);
            if registry.contains(referenced) {
                pending.insert(referenced.to_owned());
            }
        }
    }
    block
}

/// Strip whitespace and a variadic `...` suffix from an argument
/// descriptor, leaving a candidate family name.
fn trim_descriptor(descriptor: &str) -> &str {
    descriptor.trim().trim_end_matches("...").trim_end()
}
