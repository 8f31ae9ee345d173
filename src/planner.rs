// src/planner.rs

//! Plans and executes the rename of individual candidates.
//!
//! Each candidate moves through the same steps: compute the prefix, apply the
//! skip policy, build and disambiguate the target, detect a no-op, and finally
//! rename. Preview stops after disambiguation; execute goes all the way.

use crate::config::TargetSpec;
use crate::constants::PREVIEW_LIMIT;
use crate::core_types::{display_name, FileCandidate, PreviewEntry, RenameOutcome, SkipReason};
use crate::naming::{build_candidate_name, compute_prefix, ensure_unique, should_skip};
use log::{debug, trace};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// The target chosen for a candidate that is not skipped by the prefix check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    /// The file as found by discovery.
    pub source: PathBuf,
    /// The first free target path.
    pub target: PathBuf,
    /// Whether `target` differs from the plain `<prefix>_<name>` path.
    pub collision: bool,
}

/// Result of planning a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// The candidate is left alone.
    Skip(SkipReason),
    /// The candidate would be renamed.
    Rename(PlannedRename),
}

/// Computes the prefix, applies the skip policy and resolves the target.
pub fn plan_candidate(candidate: &FileCandidate, spec: &TargetSpec) -> Plan {
    let prefix = compute_prefix(&candidate.original_path, &spec.pattern);
    trace!(
        "Prefix for '{}' is '{}'",
        candidate.original_path.display(),
        prefix
    );

    if spec.skip_already_prefixed && should_skip(&candidate.filename, &prefix) {
        return Plan::Skip(SkipReason::AlreadyPrefixed);
    }

    let desired = build_candidate_name(&candidate.original_path, &prefix);
    let target = ensure_unique(&desired);
    let collision = target != desired;
    Plan::Rename(PlannedRename {
        source: candidate.original_path.clone(),
        target,
        collision,
    })
}

/// Plans up to `PREVIEW_LIMIT` candidates without touching the filesystem.
///
/// Candidates skipped by the prefix check do not count towards the limit. The
/// input is consumed lazily and abandoned once the limit is reached.
pub fn preview_candidates<I>(candidates: I, spec: &TargetSpec) -> Vec<PreviewEntry>
where
    I: IntoIterator<Item = FileCandidate>,
{
    candidates
        .into_iter()
        .filter_map(|candidate| match plan_candidate(&candidate, spec) {
            Plan::Rename(planned) => Some(PreviewEntry {
                original_name: candidate.filename,
                resolved_name: display_name(&planned.target),
                collision: planned.collision,
            }),
            Plan::Skip(reason) => {
                debug!(
                    "Preview: skipping '{}' ({})",
                    candidate.original_path.display(),
                    reason
                );
                None
            }
        })
        .take(PREVIEW_LIMIT)
        .collect()
}

/// Runs every step for one candidate, renaming the file on disk.
///
/// Never fails: OS errors from the rename become `RenameOutcome::Errored`.
#[instrument(level = "debug", skip(spec), fields(path = %candidate.original_path.display()))]
pub fn process_candidate(candidate: &FileCandidate, spec: &TargetSpec) -> RenameOutcome {
    let planned = match plan_candidate(candidate, spec) {
        Plan::Rename(planned) => planned,
        Plan::Skip(reason) => {
            debug!("Skipping '{}' ({})", candidate.original_path.display(), reason);
            return RenameOutcome::Skipped {
                path: candidate.original_path.clone(),
                reason,
            };
        }
    };

    if is_same_path(&planned.source, &planned.target) {
        debug!(
            "Target equals source, skipping: {}",
            planned.source.display()
        );
        return RenameOutcome::Skipped {
            path: planned.source,
            reason: SkipReason::NoOpSamePath,
        };
    }

    match rename_file(&planned.source, &planned.target) {
        Ok(()) => RenameOutcome::Renamed {
            from: planned.source,
            to: planned.target,
        },
        Err(e) => {
            log::warn!("Failed to rename '{}': {}", planned.source.display(), e);
            RenameOutcome::Errored {
                path: planned.source,
                message: e.to_string(),
            }
        }
    }
}

/// Renames `from` to `to`, refusing to replace anything that appeared at `to`
/// since it was resolved.
fn rename_file(from: &Path, to: &Path) -> io::Result<()> {
    if fs::symlink_metadata(to).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("target already exists: {}", to.display()),
        ));
    }
    fs::rename(from, to)
}

/// Compares two paths after making their parent directories absolute and
/// canonical. The final component is not resolved, so a symlink is compared as
/// itself rather than as its target.
fn is_same_path(a: &Path, b: &Path) -> bool {
    normalize_path(a) == normalize_path(b)
}

fn normalize_path(path: &Path) -> PathBuf {
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return path.to_path_buf();
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    parent
        .canonicalize()
        .map(|dir| dir.join(name))
        .unwrap_or_else(|_| path.to_path_buf())
}
