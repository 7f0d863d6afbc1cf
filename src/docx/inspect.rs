// src/docx/inspect.rs
//! Read the body of a saved document back into a flat summary

use crate::docx::body::{scan_body, SECTION_PROPERTIES};
use crate::docx::package::{DocxPackage, DOCUMENT_PART};
use crate::error::{CvError, Result};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSnapshot {
    pub text: String,
    pub fill: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyNode {
    Paragraph { text: String, numbered: bool },
    Table { rows: Vec<Vec<CellSnapshot>> },
    SectionProperties { xml: String },
    Other { name: String },
}

impl BodyNode {
    pub fn text(&self) -> Option<&str> {
        match self {
            BodyNode::Paragraph { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Summarize every top-level element of a `.docx` body.
pub fn read_document(path: &Path) -> Result<Vec<BodyNode>> {
    let mut package = DocxPackage::open(path)?;
    let xml = package.read_part(DOCUMENT_PART)?;
    read_body(&xml)
}

pub fn read_body(xml: &str) -> Result<Vec<BodyNode>> {
    let layout = scan_body(xml)?;
    layout
        .children
        .iter()
        .map(|child| {
            let fragment = &xml[child.start..child.end];
            match child.local_name.as_str() {
                "p" => paragraph_node(fragment),
                "tbl" => table_node(fragment),
                SECTION_PROPERTIES => Ok(BodyNode::SectionProperties {
                    xml: fragment.to_string(),
                }),
                other => Ok(BodyNode::Other {
                    name: other.to_string(),
                }),
            }
        })
        .collect()
}

fn decode_text(raw: &[u8]) -> Result<String> {
    let raw = String::from_utf8_lossy(raw);
    let text = unescape(&raw).map_err(quick_xml::Error::from)?;
    Ok(text.into_owned())
}

fn is(e: &BytesStart<'_>, local: &[u8]) -> bool {
    e.local_name().as_ref() == local
}

fn paragraph_node(fragment: &str) -> Result<BodyNode> {
    let mut reader = Reader::from_str(fragment);
    let mut text = String::new();
    let mut numbered = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if is(&e, b"t") => in_text = true,
            Event::Start(e) | Event::Empty(e) if is(&e, b"numPr") => numbered = true,
            Event::Empty(e) if is(&e, b"br") => text.push('\n'),
            Event::End(e) if e.local_name().as_ref() == b"t" => in_text = false,
            Event::Text(e) if in_text => text.push_str(&decode_text(&e)?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(BodyNode::Paragraph { text, numbered })
}

fn table_node(fragment: &str) -> Result<BodyNode> {
    let mut reader = Reader::from_str(fragment);
    let mut rows: Vec<Vec<CellSnapshot>> = Vec::new();
    let mut in_text = false;
    let mut paragraphs_in_cell = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) if is(&e, b"tr") => rows.push(Vec::new()),
            Event::Start(e) if is(&e, b"tc") => {
                let row = rows.last_mut().ok_or_else(|| {
                    CvError::TemplateStructure("a w:tr around w:tc".to_string())
                })?;
                row.push(CellSnapshot {
                    text: String::new(),
                    fill: None,
                });
                paragraphs_in_cell = 0;
            }
            Event::Start(e) | Event::Empty(e) if is(&e, b"p") => {
                if let Some(cell) = current_cell(&mut rows) {
                    if paragraphs_in_cell > 0 {
                        cell.text.push('\n');
                    }
                }
                paragraphs_in_cell += 1;
            }
            Event::Empty(e) if is(&e, b"shd") => {
                if let Some(cell) = current_cell(&mut rows) {
                    cell.fill = e
                        .attributes()
                        .flatten()
                        .find(|attr| attr.key.as_ref() == b"w:fill")
                        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned());
                }
            }
            Event::Empty(e) if is(&e, b"br") => {
                if let Some(cell) = current_cell(&mut rows) {
                    cell.text.push('\n');
                }
            }
            Event::Start(e) if is(&e, b"t") => in_text = true,
            Event::End(e) if e.local_name().as_ref() == b"t" => in_text = false,
            Event::Text(e) if in_text => {
                if let Some(cell) = current_cell(&mut rows) {
                    cell.text.push_str(&decode_text(&e)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(BodyNode::Table { rows })
}

fn current_cell(rows: &mut [Vec<CellSnapshot>]) -> Option<&mut CellSnapshot> {
    rows.last_mut().and_then(|row| row.last_mut())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_body_summarizes_children() {
        let xml = concat!(
            r#"<w:document xmlns:w="w"><w:body>"#,
            r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr>"#,
            r#"<w:r><w:t xml:space="preserve">Rust &amp; C</w:t></w:r><w:r><w:t>.</w:t></w:r></w:p>"#,
            r#"<w:tbl><w:tr><w:tc><w:tcPr><w:shd w:val="clear" w:fill="E8E8E8"/></w:tcPr><w:p><w:r><w:t>Daty</w:t></w:r></w:p></w:tc>"#,
            r#"<w:tc><w:p><w:r><w:t>AGH</w:t><w:br/><w:t>MSc</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
            r#"<w:sectPr><w:pgSz w:w="11906"/></w:sectPr>"#,
            "</w:body></w:document>"
        );
        let nodes = read_body(xml).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(
            nodes[0],
            BodyNode::Paragraph {
                text: "Rust & C.".to_string(),
                numbered: true
            }
        );
        match &nodes[1] {
            BodyNode::Table { rows } => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0][0].text, "Daty");
                assert_eq!(rows[0][0].fill.as_deref(), Some("E8E8E8"));
                assert_eq!(rows[0][1].text, "AGH\nMSc");
                assert_eq!(rows[0][1].fill, None);
            }
            other => panic!("expected a table, got {:?}", other),
        }
        assert_eq!(
            nodes[2],
            BodyNode::SectionProperties {
                xml: r#"<w:sectPr><w:pgSz w:w="11906"/></w:sectPr>"#.to_string()
            }
        );
    }
}
