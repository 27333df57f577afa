//! Stack file discovery.
//!
//! Walks a directory tree looking for `Pulumi.<stack>.yaml`/`.yml` files and
//! turns each one into a [`StackEntry`].

use std::path::Path;

use walkdir::WalkDir;

use crate::entry::{stack_name, StackEntry};
use crate::error::DetectError;
use crate::Result;

/// Discover Pulumi stacks under a search root.
///
/// Walks the tree and returns one entry per (project, stack) pair found, in
/// traversal order. A stack with both a `.yaml` and a `.yml` file in the
/// same directory yields a single entry; the first file encountered wins.
/// Files in the root itself get the project path `"."`.
///
/// An empty result is a valid outcome, not an error. A traversal error
/// aborts the run — this is a one-shot CI step, not a best-effort scan.
pub fn discover_stacks(root: impl AsRef<Path>) -> Result<Vec<StackEntry>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(DetectError::PathNotFound(root.to_path_buf()));
    }

    let mut stacks: Vec<StackEntry> = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(name) = stack_name(file_name) else {
            continue;
        };

        let project = entry
            .path()
            .parent()
            .and_then(|dir| dir.strip_prefix(root).ok())
            .map(|rel| rel.to_string_lossy().into_owned())
            .unwrap_or_default();
        let project = if project.is_empty() {
            ".".to_string()
        } else {
            project
        };

        let candidate = StackEntry::new(project, name);
        // O(n) membership check; stack counts stay small
        if !stacks.contains(&candidate) {
            stacks.push(candidate);
        }
    }

    Ok(stacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "name: test\n").unwrap();
    }

    fn entry(project: &str, stack: &str) -> StackEntry {
        StackEntry::new(project, stack)
    }

    #[test]
    fn test_discovers_both_extensions() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "proj/Pulumi.dev.yaml");
        touch(temp.path(), "proj/Pulumi.prod.yml");

        let stacks = discover_stacks(temp.path()).unwrap();

        assert_eq!(stacks.len(), 2);
        assert!(stacks.contains(&entry("proj", "dev")));
        assert!(stacks.contains(&entry("proj", "prod")));
    }

    #[test]
    fn test_root_project_normalized_to_dot() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "Pulumi.dev.yaml");

        let stacks = discover_stacks(temp.path()).unwrap();

        assert_eq!(stacks, vec![entry(".", "dev")]);
    }

    #[test]
    fn test_yaml_yml_twins_deduplicated() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "proj/Pulumi.dev.yaml");
        touch(temp.path(), "proj/Pulumi.dev.yml");

        let stacks = discover_stacks(temp.path()).unwrap();

        assert_eq!(stacks, vec![entry("proj", "dev")]);
    }

    #[test]
    fn test_same_stack_in_two_projects_kept() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "a/Pulumi.dev.yaml");
        touch(temp.path(), "b/Pulumi.dev.yaml");

        let stacks = discover_stacks(temp.path()).unwrap();

        assert_eq!(stacks.len(), 2);
        assert!(stacks.contains(&entry("a", "dev")));
        assert!(stacks.contains(&entry("b", "dev")));
    }

    #[test]
    fn test_sentinel_names_skipped() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "proj/Pulumi.yaml.yaml");
        touch(temp.path(), "proj/Pulumi.yml.yml");

        let stacks = discover_stacks(temp.path()).unwrap();

        assert!(stacks.is_empty());
    }

    #[test]
    fn test_non_stack_files_ignored() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "proj/Pulumi.yaml"); // project file
        touch(temp.path(), "proj/index.ts");
        touch(temp.path(), "README.md");

        let stacks = discover_stacks(temp.path()).unwrap();

        assert!(stacks.is_empty());
    }

    #[test]
    fn test_nested_project_paths() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "packages/infra/Pulumi.dev.yaml");

        let stacks = discover_stacks(temp.path()).unwrap();

        let expected = Path::new("packages").join("infra");
        assert_eq!(stacks, vec![entry(&expected.to_string_lossy(), "dev")]);
    }

    #[test]
    fn test_empty_directory_is_ok() {
        let temp = tempdir().unwrap();

        let stacks = discover_stacks(temp.path()).unwrap();

        assert!(stacks.is_empty());
    }

    #[test]
    fn test_missing_root_errors() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        let err = discover_stacks(&missing).unwrap_err();

        assert!(matches!(err, DetectError::PathNotFound(p) if p == missing));
    }

    #[test]
    fn test_rediscovery_is_stable() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "a/Pulumi.dev.yaml");
        touch(temp.path(), "a/Pulumi.prod.yml");
        touch(temp.path(), "b/Pulumi.dev.yaml");

        let first = discover_stacks(temp.path()).unwrap();
        let second = discover_stacks(temp.path()).unwrap();

        // Content and dedup are identical run to run
        assert_eq!(first.len(), 3);
        assert_eq!(first.len(), second.len());
        for stack in &first {
            assert!(second.contains(stack));
        }
    }
}
