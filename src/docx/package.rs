// src/docx/package.rs
//! The DOCX zip container: read one part, rewrite it, copy the rest untouched

use crate::error::{CvError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const DOCUMENT_PART: &str = "word/document.xml";

pub struct DocxPackage {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl DocxPackage {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| CvError::TemplateIo {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = ZipArchive::new(file).map_err(CvError::TemplateArchive)?;

        debug!("Opened {} ({} parts)", path.display(), archive.len());
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_part(&mut self, name: &str) -> Result<String> {
        let mut part = match self.archive.by_name(name) {
            Ok(part) => part,
            Err(ZipError::FileNotFound) => {
                return Err(CvError::TemplateStructure(format!("the {} part", name)))
            }
            Err(e) => return Err(CvError::TemplateArchive(e)),
        };

        let mut content = String::new();
        part.read_to_string(&mut content)
            .map_err(|source| CvError::TemplateIo {
                path: self.path.join(name),
                source,
            })?;
        Ok(content)
    }

    /// Write a copy of the package to `output` with `name` replaced by `content`.
    ///
    /// A file at `output` is only removed on failure once this call has opened it for writing.
    pub fn save_with_part(&mut self, name: &str, content: &str, output: &Path) -> Result<()> {
        let file = File::create(output).map_err(|source| CvError::Save {
            path: output.to_path_buf(),
            source,
        })?;

        let result = self.write_package(file, name, content, output);
        if result.is_err() {
            if let Err(e) = std::fs::remove_file(output) {
                warn!("Failed to remove partial output {}: {}", output.display(), e);
            }
        }
        result
    }

    fn write_package(&mut self, file: File, name: &str, content: &str, output: &Path) -> Result<()> {
        let save_err = |source: std::io::Error| CvError::Save {
            path: output.to_path_buf(),
            source,
        };
        let archive_err = |source: ZipError| CvError::SaveArchive {
            path: output.to_path_buf(),
            source,
        };

        let mut writer = ZipWriter::new(file);

        let mut replaced = false;
        for i in 0..self.archive.len() {
            let entry = self.archive.by_index_raw(i).map_err(archive_err)?;
            if entry.name() == name {
                drop(entry);
                writer.start_file(name, part_options()).map_err(archive_err)?;
                writer.write_all(content.as_bytes()).map_err(save_err)?;
                replaced = true;
            } else {
                writer.raw_copy_file(entry).map_err(archive_err)?;
            }
        }

        if !replaced {
            writer.start_file(name, part_options()).map_err(archive_err)?;
            writer.write_all(content.as_bytes()).map_err(save_err)?;
        }

        writer.finish().map_err(archive_err)?;
        Ok(())
    }
}

fn part_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}
