// src/docx/mod.rs
//! Minimal WordprocessingML backend: open a template, clear its body, append blocks, save

pub mod body;
pub mod elements;
pub mod inspect;
pub mod package;
pub mod raw;

use crate::error::Result;
use body::DocumentXml;
use elements::Block;
use package::{DocxPackage, DOCUMENT_PART};
use std::path::Path;
use tracing::info;

pub use elements::{Paragraph, Run, Table, TableCell, TableRow};

/// A template whose body has been emptied, ready to receive new blocks.
pub struct Document {
    package: DocxPackage,
    xml: DocumentXml,
}

impl Document {
    /// Open `path` and remove everything from the body but the section properties.
    pub fn open_cleared(path: &Path) -> Result<Self> {
        let mut package = DocxPackage::open(path)?;
        let source = package.read_part(DOCUMENT_PART)?;
        let xml = DocumentXml::clear(&source)?;

        info!("Cleared template body of {}", path.display());
        Ok(Self { package, xml })
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        self.xml.push(block.into());
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        for block in blocks {
            self.xml.push(block);
        }
    }

    pub fn blocks(&self) -> &[Block] {
        self.xml.blocks()
    }

    pub fn save(&mut self, output: &Path) -> Result<()> {
        let rendered = self.xml.render();
        self.package
            .save_with_part(DOCUMENT_PART, &rendered, output)?;
        info!(
            "Saved {} blocks from {} to {}",
            self.xml.blocks().len(),
            self.package.path().display(),
            output.display()
        );
        Ok(())
    }
}
