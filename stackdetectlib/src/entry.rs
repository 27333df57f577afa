//! The deployment matrix data model and stack filename parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches `Pulumi.<stack>.yaml` / `Pulumi.<stack>.yml` and captures `<stack>`.
static STACK_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Pulumi\.(.+)\.ya?ml$").unwrap());

/// One (project, stack) pairing in the deployment matrix.
///
/// Equality is structural over both fields; discovery uses it to drop
/// `.yaml`/`.yml` twins of the same stack in the same directory. The same
/// stack name under two different projects is two distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry {
    /// Directory holding the stack file, relative to the search root
    /// (`"."` when the file sits in the root itself)
    pub project: String,
    /// Stack name extracted from the filename
    pub stack: String,
}

impl StackEntry {
    /// Create a new entry.
    pub fn new(project: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            stack: stack.into(),
        }
    }
}

/// Extract the stack name from a `Pulumi.<stack>.ya?ml` filename.
///
/// Returns `None` for filenames outside the convention and for the
/// degenerate names where the captured group is itself `yaml` or `yml`
/// (e.g. `Pulumi.yaml.yaml`) — those are not real stacks.
pub fn stack_name(file_name: &str) -> Option<&str> {
    let captures = STACK_FILE.captures(file_name)?;
    let name = captures.get(1)?.as_str();
    if name == "yaml" || name == "yml" {
        return None;
    }
    Some(name)
}
