//! Staged-file source for the metadata validator.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::StagedFilesError;

/// Supplies the repository-relative paths staged for the next commit.
pub trait StagedFiles {
    /// List staged paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Callers treat any error as an
    /// empty list.
    fn staged_files(&self) -> Result<Vec<PathBuf>, StagedFilesError>;
}

/// Queries `git diff --cached --name-only` in a working tree.
#[derive(Debug, Clone)]
pub struct GitStagedFiles {
    repo: PathBuf,
}

impl GitStagedFiles {
    /// Query the repository containing `repo`.
    #[must_use]
    pub fn new(repo: &Path) -> Self {
        Self {
            repo: repo.to_path_buf(),
        }
    }

    /// Top-level directory of the working tree.
    ///
    /// Staged paths are relative to this directory, not to `repo`.
    ///
    /// # Errors
    ///
    /// Returns an error if `git rev-parse --show-toplevel` fails.
    pub fn toplevel(&self) -> Result<PathBuf, StagedFilesError> {
        let text = self.git(&["rev-parse", "--show-toplevel"])?;
        let line = text.trim_end();
        if line.is_empty() {
            return Err(StagedFilesError::InvalidOutput);
        }
        Ok(PathBuf::from(line))
    }

    fn git(&self, args: &[&str]) -> Result<String, StagedFilesError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()?;
        if !output.status.success() {
            return Err(StagedFilesError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        String::from_utf8(output.stdout).map_err(|_| StagedFilesError::InvalidOutput)
    }
}

impl StagedFiles for GitStagedFiles {
    fn staged_files(&self) -> Result<Vec<PathBuf>, StagedFilesError> {
        let text = self.git(&["diff", "--cached", "--name-only"])?;
        Ok(parse_name_only(&text))
    }
}

/// A fixed list, for callers that already know which files to check.
impl StagedFiles for Vec<PathBuf> {
    fn staged_files(&self) -> Result<Vec<PathBuf>, StagedFilesError> {
        Ok(self.clone())
    }
}

/// Parse `--name-only` output: one path per line, blank lines dropped.
fn parse_name_only(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let files = parse_name_only("docs/a.md\nsrc/main.rs\n\n");
        assert_eq!(
            files,
            vec![PathBuf::from("docs/a.md"), PathBuf::from("src/main.rs")]
        );
    }

    #[test]
    fn test_parse_name_only_empty() {
        assert!(parse_name_only("").is_empty());
        assert!(parse_name_only("\n").is_empty());
    }

    #[test]
    fn test_fixed_list() {
        let list = vec![PathBuf::from("docs/a.md")];
        assert_eq!(list.staged_files().unwrap(), list);
    }

    fn git_in(dir: &Path, args: &[&str]) -> bool {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .is_ok_and(|out| out.status.success())
    }

    #[test]
    fn test_git_paths_are_relative_to_toplevel_from_subdirectory() {
        let tmp = tempfile::TempDir::new().unwrap();
        if !git_in(tmp.path(), &["init", "-q"]) {
            // git is not installed
            return;
        }
        std::fs::create_dir_all(tmp.path().join("docs")).unwrap();
        std::fs::write(tmp.path().join("docs/a.md"), "# A\n").unwrap();
        assert!(git_in(tmp.path(), &["add", "docs/a.md"]));

        let git = GitStagedFiles::new(&tmp.path().join("docs"));
        assert_eq!(git.staged_files().unwrap(), vec![PathBuf::from("docs/a.md")]);
        assert_eq!(
            git.toplevel().unwrap().canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }
}
