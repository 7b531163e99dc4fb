//! Filesystem side of the download simulator.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::RowCounting;
use crate::error::MockError;

/// Sample payload written for every downloaded resource.
pub const SAMPLE_CSV: &str = include_str!("../resources/jdd-mock.csv");

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Filesystem utility functions.
pub struct FsUtils;

impl FsUtils {
    /// Longest stem kept by [`FsUtils::sanitize_stem`].
    const MAX_STEM_CHARS: usize = 200;

    /// Sanitize a filename stem for safe filesystem usage.
    ///
    /// Path separators become `_`, so ids that differ only in their
    /// folder part keep distinct stems.
    pub fn sanitize_stem(filename: &str) -> String {
        let sanitized: String = filename
            .chars()
            .filter_map(|c| {
                if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    Some(c)
                } else if c.is_whitespace() || matches!(c, '/' | '\\') {
                    Some('_')
                } else {
                    None
                }
            })
            .take(Self::MAX_STEM_CHARS)
            .collect();

        let sanitized = sanitized.trim_start_matches('.');
        if sanitized.is_empty() {
            "unnamed_file".to_string()
        } else {
            sanitized.to_string()
        }
    }

    /// File name used for a downloaded resource.
    pub fn download_file_name(resource_id: &str) -> String {
        format!("{}.csv", Self::sanitize_stem(resource_id))
    }

    /// Keep the first rows of a CSV payload.
    ///
    /// Under [`RowCounting::ExcludeHeader`] the header is always kept and
    /// `nb_rows` data lines follow it; under [`RowCounting::IncludeHeader`]
    /// the header is one of the `nb_rows` lines.
    pub fn truncate_rows(payload: &str, nb_rows: usize, counting: RowCounting) -> String {
        let keep = match counting {
            RowCounting::ExcludeHeader => nb_rows.saturating_add(1),
            RowCounting::IncludeHeader => nb_rows,
        };

        let mut out = String::with_capacity(payload.len().min(keep * 96));
        for line in payload.lines().filter(|l| !l.is_empty()).take(keep) {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Write `contents` as `dir/file_name`, via a temporary sibling that is
    /// renamed into place once fully written.
    ///
    /// `dir` must already exist.
    pub async fn write_atomic(
        dir: &Path,
        file_name: &str,
        contents: &str,
    ) -> Result<PathBuf, MockError> {
        match tokio::fs::metadata(dir).await {
            Ok(meta) if meta.is_dir() => {}
            _ => {
                return Err(MockError::TargetDirMissing {
                    path: dir.to_path_buf(),
                });
            }
        }

        let target = dir.join(file_name);
        let temp = dir.join(format!(
            ".{file_name}.{}.{}.part",
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(e) = tokio::fs::write(&temp, contents).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(MockError::Io(e));
        }
        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(MockError::Io(e));
        }

        Ok(target)
    }
}
