use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::error::{Error, Result};
use crate::core::normalize::normalize;

/// Suffix for the intermediate name used by case-only renames.
const TEMP_SUFFIX: &str = ".fnorm-tmp";

/// Result of processing a single path.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The basename was already normalized; nothing was touched.
    Unchanged { name: String },
    /// Dry-run: a rename is needed but was not performed.
    WouldRename { old: String, new: String },
    /// The entry was renamed.
    Renamed { old: String, new: String },
}

/// The decision half of the executor, separated from the mutation half so
/// dry-run and the real run share the same classification.
#[derive(Debug, Clone)]
enum RenamePlan {
    Unchanged {
        name: String,
    },
    Rename {
        source: PathBuf,
        target: PathBuf,
        old: String,
        new: String,
        case_only: bool,
    },
}

/// Normalize the basename of `path` and rename the entry on disk if needed.
///
/// Files and directories are handled identically; only the basename is
/// rewritten, never the directory component. With `dry_run` set, the
/// decision runs to completion but the filesystem is left untouched.
pub fn process_path(path: &Path, dry_run: bool) -> Result<Outcome> {
    match plan_rename(path)? {
        RenamePlan::Unchanged { name } => Ok(Outcome::Unchanged { name }),
        RenamePlan::Rename {
            source,
            target,
            old,
            new,
            case_only,
        } => {
            if dry_run {
                return Ok(Outcome::WouldRename { old, new });
            }

            if case_only {
                rename_case_only(&source, &target)?;
            } else {
                // symlink_metadata so a dangling symlink still counts as
                // occupying the target name.
                if fs::symlink_metadata(&target).is_ok() {
                    return Err(Error::TargetExists(new));
                }
                fs::rename(&source, &target).map_err(|e| Error::RenameFailed {
                    from: source.display().to_string(),
                    to: target.display().to_string(),
                    source: e,
                })?;
            }

            Ok(Outcome::Renamed { old, new })
        }
    }
}

fn plan_rename(path: &Path) -> Result<RenamePlan> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(Error::Io(e)),
    }

    let basename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let normalized = normalize(&basename);

    if normalized == basename {
        return Ok(RenamePlan::Unchanged { name: basename });
    }

    let target = match path.parent() {
        Some(dir) => dir.join(&normalized),
        None => PathBuf::from(&normalized),
    };

    let case_only = is_case_only_change(&path.to_string_lossy(), &target.to_string_lossy());

    Ok(RenamePlan::Rename {
        source: path.to_path_buf(),
        target,
        old: basename,
        new: normalized,
        case_only,
    })
}

/// True when old and new paths are equal under case folding but differ in
/// byte representation. Such renames look like identity operations to
/// case-insensitive filesystems and need the two-step treatment.
fn is_case_only_change(old_path: &str, new_path: &str) -> bool {
    old_path != new_path && old_path.to_lowercase() == new_path.to_lowercase()
}

/// Two-step rename for case-only changes: original -> temp -> target.
/// If the second step fails, the temp entry is moved back to the original
/// name; a rollback failure is reported alongside the original failure
/// rather than replacing it.
fn rename_case_only(source: &Path, target: &Path) -> Result<()> {
    let temp = temp_path(source);

    fs::rename(source, &temp).map_err(|e| Error::RenameFailed {
        from: source.display().to_string(),
        to: temp.display().to_string(),
        source: e,
    })?;

    if let Err(rename_error) = fs::rename(&temp, target) {
        return match fs::rename(&temp, source) {
            Ok(()) => Err(Error::RenameFailed {
                from: temp.display().to_string(),
                to: target.display().to_string(),
                source: rename_error,
            }),
            Err(restore_error) => Err(Error::RestoreFailed {
                original: source.display().to_string(),
                target: target.display().to_string(),
                rename_error,
                restore_error,
            }),
        };
    }

    Ok(())
}

fn temp_path(source: &Path) -> PathBuf {
    let mut os = source.as_os_str().to_os_string();
    os.push(TEMP_SUFFIX);
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_only_detection() {
        assert!(is_case_only_change("dir/Report.PDF", "dir/report.pdf"));
        assert!(!is_case_only_change("dir/report.pdf", "dir/report.pdf"));
        assert!(!is_case_only_change("dir/My File.txt", "dir/my-file.txt"));
    }

    #[test]
    fn temp_name_is_deterministic() {
        let temp = temp_path(Path::new("dir/Report.PDF"));
        assert_eq!(temp, PathBuf::from("dir/Report.PDF.fnorm-tmp"));
        assert_eq!(temp, temp_path(Path::new("dir/Report.PDF")));
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = process_path(Path::new("/nonexistent/No Such File.txt"), true)
            .expect_err("path should not resolve");
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.code(), "PATH_NOT_FOUND");
    }
}
