// src/docx/body.rs
//! Locating and clearing the top-level children of `w:body`

use crate::docx::elements::{Block, ToXml};
use crate::error::{CvError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Local name of the page geometry element (`w:sectPr`).
pub const SECTION_PROPERTIES: &str = "sectPr";

/// Local name of `w:body`, whatever prefix the template binds.
const BODY: &[u8] = b"body";

/// Byte range of one direct child of `w:body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildSpan {
    pub start: usize,
    pub end: usize,
    pub local_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLayout {
    /// Offset just past `<w:body>`.
    pub open_end: usize,
    /// Offset of `</w:body>`.
    pub close_start: usize,
    pub children: Vec<ChildSpan>,
}

impl BodyLayout {
    pub fn is_section_properties(child: &ChildSpan) -> bool {
        child.local_name == SECTION_PROPERTIES
    }
}

/// Find `w:body` in `word/document.xml` and record where each of its children lives.
pub fn scan_body(xml: &str) -> Result<BodyLayout> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut depth = 0usize;
    // (depth of body children, offset after <w:body>)
    let mut body: Option<(usize, usize)> = None;
    let mut current: Option<(usize, String)> = None;
    let mut children = Vec::new();

    loop {
        let before = reader.buffer_position() as usize;
        let event = reader.read_event()?;
        let after = reader.buffer_position() as usize;

        match event {
            Event::Start(e) => {
                match body {
                    None if e.local_name().as_ref() == BODY => body = Some((depth + 1, after)),
                    Some((inner, _)) if depth == inner => {
                        current = Some((before, local_name(e.local_name().as_ref())));
                    }
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(e) => match body {
                None if e.local_name().as_ref() == BODY => {
                    return Err(CvError::TemplateStructure(
                        "a body-level w:sectPr (w:body is empty)".to_string(),
                    ));
                }
                Some((inner, _)) if depth == inner => children.push(ChildSpan {
                    start: before,
                    end: after,
                    local_name: local_name(e.local_name().as_ref()),
                }),
                _ => {}
            },
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if let Some((inner, open_end)) = body {
                    if depth == inner {
                        if let Some((start, local_name)) = current.take() {
                            children.push(ChildSpan {
                                start,
                                end: after,
                                local_name,
                            });
                        }
                    } else if depth + 1 == inner {
                        return Ok(BodyLayout {
                            open_end,
                            close_start: before,
                            children,
                        });
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Err(CvError::TemplateStructure("a w:body element".to_string()))
}

fn local_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// `word/document.xml` with its body cleared down to the section properties.
#[derive(Debug, Clone)]
pub struct DocumentXml {
    prefix: String,
    section_properties: Vec<String>,
    suffix: String,
    blocks: Vec<Block>,
}

impl DocumentXml {
    /// Drop every body child except the section properties, which are kept byte for byte.
    pub fn clear(xml: &str) -> Result<Self> {
        let layout = scan_body(xml)?;

        let section_properties: Vec<String> = layout
            .children
            .iter()
            .filter(|child| BodyLayout::is_section_properties(child))
            .map(|child| xml[child.start..child.end].to_string())
            .collect();

        if section_properties.is_empty() {
            return Err(CvError::TemplateStructure(
                "a body-level w:sectPr".to_string(),
            ));
        }

        tracing::debug!(
            "Cleared {} body elements, kept {} section properties",
            layout.children.len() - section_properties.len(),
            section_properties.len()
        );

        Ok(Self {
            prefix: xml[..layout.open_end].to_string(),
            section_properties,
            suffix: xml[layout.close_start..].to_string(),
            blocks: Vec::new(),
        })
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn section_properties(&self) -> &[String] {
        &self.section_properties
    }

    /// New content goes before the section properties, which stay last in the body.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + 16 * 1024);
        out.push_str(&self.prefix);
        for block in &self.blocks {
            block.write_xml(&mut out);
        }
        for section in &self.section_properties {
            out.push_str(section);
        }
        out.push_str(&self.suffix);
        out
    }
}
