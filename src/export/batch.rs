//! All-or-nothing output for one run.
//!
//! Every file is first written to a hidden `.name.partial` sibling. Only
//! [`OutputBatch::commit`] renames them into place, and only once all of them
//! were written. A batch dropped without committing removes its staged files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::csv_export::TimeSeriesRecord;
use crate::state::PendulumTimeSeries;

pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_owned());
    path.with_file_name(format!(".{}.partial", name))
}

#[derive(Debug)]
struct StagedFile {
    staging: PathBuf,
    target: PathBuf,
}

/// Output files staged for a single atomic commit
#[derive(Debug, Default)]
pub struct OutputBatch {
    staged: Vec<StagedFile>,
}

impl OutputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files waiting for commit
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Register `target` and return the path its content goes to
    fn reserve(&mut self, target: &Path) -> PathBuf {
        let staging = staging_path(target);
        self.staged.push(StagedFile {
            staging: staging.clone(),
            target: target.to_path_buf(),
        });
        staging
    }

    /// Encode tightly packed 8-bit RGB pixels as PNG for `path`
    pub fn stage_png<P: AsRef<Path>>(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            anyhow::bail!(
                "failed to write {}: {} bytes for a {}x{} RGB image, expected {}",
                path.display(),
                pixels.len(),
                width,
                height,
                expected
            );
        }

        let staging = self.reserve(path);
        image::save_buffer_with_format(
            &staging,
            pixels,
            width,
            height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Serialize every sample of `series` as CSV for `path`
    pub fn stage_csv<P: AsRef<Path>>(&mut self, series: &PendulumTimeSeries, path: P) -> Result<()> {
        let path = path.as_ref();
        let staging = self.reserve(path);

        let write = || -> Result<()> {
            let mut writer = csv::Writer::from_path(&staging)?;
            for sample in series {
                writer.serialize(TimeSeriesRecord::from(sample))?;
            }
            writer.flush()?;
            Ok(())
        };
        write().with_context(|| format!("failed to write {}", path.display()))
    }

    /// Move every staged file onto its target
    pub fn commit(mut self) -> Result<()> {
        for file in std::mem::take(&mut self.staged) {
            let renamed = std::fs::rename(&file.staging, &file.target);
            if let Err(e) = renamed {
                let _ = std::fs::remove_file(&file.staging);
                return Err(e).with_context(|| format!("failed to write {}", file.target.display()));
            }
            log::info!("Output saved: {}", file.target.display());
        }
        Ok(())
    }
}

impl Drop for OutputBatch {
    fn drop(&mut self) {
        for file in self.staged.drain(..) {
            let _ = std::fs::remove_file(&file.staging);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_is_hidden_sibling() {
        let staging = staging_path(Path::new("/tmp/out/rings.png"));
        assert_eq!(staging, PathBuf::from("/tmp/out/.rings.png.partial"));
    }

    #[test]
    fn test_dropped_batch_removes_staged_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a.png");

        let mut batch = OutputBatch::new();
        batch.stage_png(&[1, 2, 3], 1, 1, &target).unwrap();
        assert!(staging_path(&target).exists());
        drop(batch);

        assert!(!staging_path(&target).exists());
        assert!(!target.exists());
    }

    #[test]
    fn test_commit_moves_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");

        let mut batch = OutputBatch::new();
        batch.stage_png(&[0; 3], 1, 1, &a).unwrap();
        batch.stage_png(&[0; 12], 2, 2, &b).unwrap();
        assert!(!a.exists() && !b.exists());
        assert_eq!(batch.len(), 2);
        batch.commit().unwrap();

        assert!(a.exists() && b.exists());
        assert!(!staging_path(&a).exists());
    }

    #[test]
    fn test_failed_csv_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("series.csv");
        let series = crate::physics::pendulums::simulate(&crate::config::PendulumParameters {
            max_time: 0.1,
            time_step: 0.05,
            ..Default::default()
        })
        .series;

        let mut batch = OutputBatch::new();
        let err = batch.stage_csv(&series, &target).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to write"));
        drop(batch);
        assert!(!target.exists());
        assert!(!staging_path(&target).exists());
    }

    #[test]
    fn test_csv_is_hidden_until_commit() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("series.csv");
        let series = crate::physics::pendulums::simulate(&crate::config::PendulumParameters {
            max_time: 0.1,
            time_step: 0.05,
            ..Default::default()
        })
        .series;

        let mut batch = OutputBatch::new();
        batch.stage_csv(&series, &target).unwrap();
        assert!(!target.exists());
        batch.commit().unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap().lines().count(), 4);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut batch = OutputBatch::new();
        assert!(batch.stage_png(&[0; 3], 4, 4, dir.path().join("x.png")).is_err());
        assert!(batch.is_empty());
    }
}
