pub mod anonymize;
pub mod assembler;
pub mod config;
pub mod core;
pub mod docx;
pub mod emitters;
pub mod error;
pub mod translations;
pub mod types;
pub mod utils;

pub use assembler::{AssemblyReport, DocumentAssembler};
pub use config::{AppConfig, StyleConfig};
pub use error::{CvError, Result};
pub use types::CandidateData;

use std::path::Path;
use tracing::warn;

/// Convenience function for one-shot CV generation from files on disk
pub fn generate_cv(
    data_path: &Path,
    template_path: &Path,
    output_path: &Path,
    config: &AppConfig,
) -> Result<AssemblyReport> {
    let candidate = CandidateData::from_file(data_path)?;

    if !utils::is_word_document(template_path) {
        warn!(
            "Template {} does not have a .docx extension",
            template_path.display()
        );
    }

    let display_name = if candidate.blind_cv {
        translations::Translation::for_code(&candidate.language).blind_name
    } else {
        candidate.name.as_str()
    };
    let output_path = utils::resolve_output_path(output_path, display_name);
    DocumentAssembler::new(config).assemble(&candidate, template_path, &output_path)
}
