//! Stack name filtering with include/exclude lists.

use std::collections::HashSet;

use crate::entry::StackEntry;

/// Include/exclude filter over stack names.
///
/// Built from the comma-separated lists a pipeline passes on the command
/// line. The include set is a whitelist applied first; the exclude set is a
/// blacklist applied to whatever survived. Names that match no discovered
/// stack simply have no effect.
#[derive(Debug, Clone, Default)]
pub struct StackFilter {
    /// Stack names to keep (empty = keep all)
    pub include: HashSet<String>,
    /// Stack names to drop, applied after include
    pub exclude: HashSet<String>,
}

impl StackFilter {
    /// Create an empty filter (passes everything through).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add comma-separated names to the include set.
    pub fn include_names(mut self, list: &str) -> Self {
        self.include.extend(parse_names(list));
        self
    }

    /// Add comma-separated names to the exclude set.
    pub fn exclude_names(mut self, list: &str) -> Self {
        self.exclude.extend(parse_names(list));
        self
    }

    /// True when neither set has any names; callers may skip [`apply`].
    ///
    /// [`apply`]: StackFilter::apply
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Filter entries, preserving their order.
    pub fn apply(&self, entries: Vec<StackEntry>) -> Vec<StackEntry> {
        entries
            .into_iter()
            .filter(|e| self.include.is_empty() || self.include.contains(&e.stack))
            .filter(|e| !self.exclude.contains(&e.stack))
            .collect()
    }
}

/// Split a comma-separated list, trimming whitespace and dropping empty tokens.
fn parse_names(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
