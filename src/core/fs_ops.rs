// src/core/fs_ops.rs
//! File system helpers for the assembly pipeline

use crate::error::{CvError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct FsOps;

impl FsOps {
    /// Copy a template file, reporting failures against the template path
    pub fn copy_template(src: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            Self::ensure_dir_exists(parent).map_err(|source| CvError::TemplateIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::copy(src, dest).map_err(|source| CvError::TemplateIo {
            path: src.to_path_buf(),
            source,
        })?;

        debug!("Copied {} to {}", src.display(), dest.display());
        Ok(())
    }

    pub fn ensure_dir_exists(path: &Path) -> std::io::Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Remove a file if it is there; a missing file is not an error
    pub fn remove_file_if_exists(path: &Path) -> std::io::Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// A private copy of the template that is deleted when dropped.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Copy `template` to a uniquely named file in `scratch_dir`.
    pub fn copy_of(template: &Path, scratch_dir: &Path) -> Result<Self> {
        let scratch = Self {
            path: scratch_dir.join(format!("cv_base_{}.docx", Uuid::new_v4().simple())),
        };
        // a failed copy still drops the guard and removes any partial file
        FsOps::copy_template(template, &scratch.path)?;
        Ok(scratch)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match FsOps::remove_file_if_exists(&self.path) {
            Ok(_) => debug!("Removed scratch file {}", self.path.display()),
            Err(e) => warn!(
                "Failed to remove scratch file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
