// src/utils.rs
use std::path::{Path, PathBuf};

/// Normalize a candidate name for file system usage: `Łukasz Żółw` -> `lukasz_zolw`
pub fn normalize_candidate_name(name: &str) -> String {
    let normalized = slug::slugify(name).replace('-', "_");
    if normalized.is_empty() {
        "candidate".to_string()
    } else {
        normalized
    }
}

/// Default output file name for a candidate
pub fn output_file_name(name: &str) -> String {
    format!("CV_{}.docx", normalize_candidate_name(name))
}

/// An existing directory as output means "write the default file name inside it"
pub fn resolve_output_path(output: &Path, name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(output_file_name(name))
    } else {
        output.to_path_buf()
    }
}

/// Get file extension in lowercase
pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Word document or template extension
pub fn is_word_document(path: &Path) -> bool {
    matches!(get_file_extension(path).as_deref(), Some("docx") | Some("dotx"))
}
