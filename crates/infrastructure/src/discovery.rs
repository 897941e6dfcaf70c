//! Test-file discovery.
//!
//! A tests path may be a single file or a directory; directories are
//! walked recursively and every regular file found is a candidate
//! definition. Discovery problems at the root are fatal (the run has
//! nothing to do); problems below it skip the entry and continue.

use std::path::{Path, PathBuf};

use argonaut_application::TestSource;
use thiserror::Error;
use tokio::fs;

/// Errors that make a run impossible before any dispatch.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The tests path does not exist.
    #[error("tests file/directory doesn't exist: {0}")]
    Missing(PathBuf),

    /// The walk found no files at all.
    #[error("no test files found under {0}")]
    NoFiles(PathBuf),

    /// The root of the walk could not be read.
    #[error("failed to read {path}: {source}")]
    Unreadable {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Collects the test files under `root`, sorted for determinism.
///
/// # Errors
///
/// Returns a [`DiscoveryError`] when the root is missing, unreadable, or
/// yields no files. Entries below the root that cannot be read are
/// skipped with a warning instead.
pub async fn discover(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let metadata = fs::metadata(root)
        .await
        .map_err(|_| DiscoveryError::Missing(root.to_path_buf()))?;

    if metadata.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    // Iterative walk; async recursion would need boxing for no gain.
    let mut pending = vec![root.to_path_buf()];
    let mut at_root = true;

    while let Some(dir) = pending.pop() {
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(source) if at_root => {
                return Err(DiscoveryError::Unreadable { path: dir, source });
            }
            Err(error) => {
                tracing::warn!(dir = %dir.display(), %error, "skipping unreadable directory");
                continue;
            }
        };
        at_root = false;

        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    match entry.file_type().await {
                        Ok(kind) if kind.is_dir() => pending.push(path),
                        Ok(kind) if kind.is_file() => files.push(path),
                        Ok(_) => {}
                        Err(error) => {
                            tracing::warn!(path = %path.display(), %error, "skipping entry");
                        }
                    }
                }
                Ok(None) => break,
                Err(error) => {
                    tracing::warn!(dir = %dir.display(), %error, "directory read interrupted");
                    break;
                }
            }
        }
    }

    files.sort();
    if files.is_empty() {
        return Err(DiscoveryError::NoFiles(root.to_path_buf()));
    }
    Ok(files)
}

/// Reads each discovered file into a [`TestSource`].
///
/// A file that cannot be read as UTF-8 text is skipped with a warning;
/// one unreadable file never stops the batch.
pub async fn read_sources(paths: Vec<PathBuf>) -> Vec<TestSource> {
    let mut sources = Vec::with_capacity(paths.len());

    for path in paths {
        match fs::read_to_string(&path).await {
            Ok(contents) => sources.push(TestSource { path, contents }),
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "skipping unreadable test file");
            }
        }
    }

    sources
}
