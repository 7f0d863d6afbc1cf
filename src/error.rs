// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a CV from being assembled.
#[derive(Debug, Error)]
pub enum CvError {
    #[error("Failed to read candidate data {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid candidate record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Failed to prepare template {path}: {source}")]
    TemplateIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Template is not a valid DOCX package: {0}")]
    TemplateArchive(zip::result::ZipError),

    #[error("Template XML is malformed: {0}")]
    TemplateXml(#[from] quick_xml::Error),

    #[error("Template is missing {0}")]
    TemplateStructure(String),

    #[error("Failed to save document to {path}: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write document package {path}: {source}")]
    SaveArchive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("Invalid style configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CvError>;
