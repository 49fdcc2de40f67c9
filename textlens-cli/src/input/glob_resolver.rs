//! File pattern resolution using glob

use anyhow::Result;
use glob::glob;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) && !Path::new(pattern).exists() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path = path_result
                .map_err(|e| CliError::FileNotFound(format!("{} ({e})", e.path().display())))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_sorted_unique_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_missing_literal_file() {
        let error = resolve_patterns(&["missing-file.txt".to_string()]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let error = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_pattern_without_matches() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.md", temp_dir.path().display());
        let error = resolve_patterns(&[pattern]).unwrap_err();
        assert!(error.to_string().contains("No files found"));
    }
}
