//! Matrix serialization and the CI reporting sink.
//!
//! The sink follows the GitHub Actions output-file contract: `key=value`
//! lines appended to the file named by an environment variable. The library
//! never reads the environment itself; the caller resolves the sink path and
//! hands it in, which keeps this testable without environment games.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::entry::StackEntry;
use crate::error::DetectError;
use crate::Result;

/// Summary of a detection run, ready to hand to a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixReport {
    /// The final entries as a compact JSON array (no whitespace)
    pub matrix: String,
    /// Number of entries in the matrix
    pub count: usize,
}

impl MatrixReport {
    /// Build a report from the final entry list.
    pub fn from_entries(entries: &[StackEntry]) -> Result<Self> {
        Ok(Self {
            matrix: serde_json::to_string(entries)?,
            count: entries.len(),
        })
    }

    /// Whether any stacks survived detection and filtering.
    pub fn has_stacks(&self) -> bool {
        self.count > 0
    }

    /// Render the three `key=value` lines the pipeline consumes.
    pub fn output_lines(&self) -> String {
        format!(
            "matrix={}\ncount={}\nhas_stacks={}\n",
            self.matrix,
            self.count,
            self.has_stacks()
        )
    }

    /// Append the output lines to the reporting sink at `path`.
    ///
    /// The file is created if absent and always appended to, never
    /// truncated: other steps may have written their own outputs already.
    pub fn append_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| DetectError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
        file.write_all(self.output_lines().as_bytes())
            .map_err(|source| DetectError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(())
    }
}
