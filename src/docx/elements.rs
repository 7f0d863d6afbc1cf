// src/docx/elements.rs
//! Block elements appended to a document body and their WordprocessingML form

use crate::config::{half_points, twips, RgbColor};
use crate::docx::raw::RawXml;
use quick_xml::escape::escape;
use std::borrow::Cow;

/// Serialize into the `w:` namespace of `word/document.xml`.
pub trait ToXml {
    fn write_xml(&self, out: &mut String);

    fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl ToXml for Block {
    fn write_xml(&self, out: &mut String) {
        match self {
            Block::Paragraph(paragraph) => paragraph.write_xml(out),
            Block::Table(table) => table.write_xml(out),
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

// ===== Runs =====

fn is_xml_char(c: char) -> bool {
    !matches!(c, '\u{0}'..='\u{8}' | '\u{B}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Drop characters XML 1.0 cannot carry, such as the form feeds left by PDF text extraction.
pub fn xml_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStyle {
    pub font: Option<String>,
    pub size_pt: Option<f32>,
    pub bold: Option<bool>,
    pub color: Option<RgbColor>,
}

impl RunStyle {
    fn is_empty(&self) -> bool {
        self.font.is_none() && self.size_pt.is_none() && self.bold.is_none() && self.color.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub style: RunStyle,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    pub fn font(mut self, font: &str) -> Self {
        self.style.font = Some(font.to_string());
        self
    }

    pub fn size(mut self, pt: f32) -> Self {
        self.style.size_pt = Some(pt);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = Some(bold);
        self
    }

    pub fn color(mut self, color: RgbColor) -> Self {
        self.style.color = Some(color);
        self
    }
}

impl ToXml for Run {
    fn write_xml(&self, out: &mut String) {
        out.push_str("<w:r>");
        if !self.style.is_empty() {
            out.push_str("<w:rPr>");
            if let Some(font) = &self.style.font {
                let font = escape(font.as_str());
                out.push_str(&format!(
                    r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
                    font
                ));
            }
            match self.style.bold {
                Some(true) => out.push_str("<w:b/><w:bCs/>"),
                Some(false) => out.push_str(r#"<w:b w:val="0"/><w:bCs w:val="0"/>"#),
                None => {}
            }
            if let Some(color) = self.style.color {
                out.push_str(&format!(r#"<w:color w:val="{}"/>"#, color.hex()));
            }
            if let Some(size) = self.style.size_pt {
                let size = half_points(size);
                out.push_str(&format!(r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size));
            }
            out.push_str("</w:rPr>");
        }
        for (i, line) in self.text.split('\n').enumerate() {
            if i > 0 {
                out.push_str("<w:br/>");
            }
            let line = xml_text(line);
            if !line.is_empty() {
                out.push_str(&format!(r#"<w:t xml:space="preserve">{}</w:t>"#, escape(line.as_ref())));
            }
        }
        out.push_str("</w:r>");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Run(Run),
    Raw(RawXml),
}

// ===== Paragraphs =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numbering {
    pub num_id: u32,
    pub level: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphProps {
    pub numbering: Option<Numbering>,
    pub space_before_pt: Option<f32>,
    pub space_after_pt: Option<f32>,
    /// Multiple of single line spacing.
    pub line_spacing: Option<f32>,
}

impl ParagraphProps {
    fn is_empty(&self) -> bool {
        self.numbering.is_none()
            && self.space_before_pt.is_none()
            && self.space_after_pt.is_none()
            && self.line_spacing.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub props: ParagraphProps,
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(mut self, run: Run) -> Self {
        self.inlines.push(Inline::Run(run));
        self
    }

    pub fn with_raw(mut self, raw: RawXml) -> Self {
        self.inlines.push(Inline::Raw(raw));
        self
    }

    pub fn spacing(mut self, before_pt: f32, after_pt: f32) -> Self {
        self.props.space_before_pt = Some(before_pt);
        self.props.space_after_pt = Some(after_pt);
        self
    }

    pub fn line_spacing(mut self, multiple: f32) -> Self {
        self.props.line_spacing = Some(multiple);
        self
    }

    pub fn numbered(mut self, num_id: u32, level: u32) -> Self {
        self.props.numbering = Some(Numbering { num_id, level });
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs().map(|run| run.text.as_str()).collect()
    }

    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.inlines.iter().filter_map(|inline| match inline {
            Inline::Run(run) => Some(run),
            Inline::Raw(_) => None,
        })
    }
}

impl ToXml for Paragraph {
    fn write_xml(&self, out: &mut String) {
        if self.props.is_empty() && self.inlines.is_empty() {
            out.push_str("<w:p/>");
            return;
        }

        out.push_str("<w:p>");
        if !self.props.is_empty() {
            out.push_str("<w:pPr>");
            if let Some(numbering) = self.props.numbering {
                out.push_str(&format!(
                    r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr>"#,
                    numbering.level, numbering.num_id
                ));
            }
            let props = &self.props;
            if props.space_before_pt.is_some()
                || props.space_after_pt.is_some()
                || props.line_spacing.is_some()
            {
                out.push_str("<w:spacing");
                if let Some(before) = props.space_before_pt {
                    out.push_str(&format!(r#" w:before="{}""#, twips(before)));
                }
                if let Some(after) = props.space_after_pt {
                    out.push_str(&format!(r#" w:after="{}""#, twips(after)));
                }
                if let Some(multiple) = props.line_spacing {
                    // 240 = single spacing
                    let line = (multiple * 240.0).round() as u32;
                    out.push_str(&format!(r#" w:line="{}" w:lineRule="auto""#, line));
                }
                out.push_str("/>");
            }
            out.push_str("</w:pPr>");
        }
        for inline in &self.inlines {
            match inline {
                Inline::Run(run) => run.write_xml(out),
                Inline::Raw(raw) => out.push_str(raw.as_str()),
            }
        }
        out.push_str("</w:p>");
    }
}

// ===== Tables =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    /// Eighths of a point.
    pub size: u32,
    pub color: RgbColor,
}

/// Cell margins in twentieths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMargins {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub shading: Option<RgbColor>,
    pub vertical_center: bool,
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            shading: None,
            vertical_center: false,
            paragraphs: vec![paragraph],
        }
    }

    pub fn shaded(mut self, fill: Option<RgbColor>) -> Self {
        self.shading = fill;
        self
    }

    pub fn centered(mut self) -> Self {
        self.vertical_center = true;
        self
    }

    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub style_id: Option<String>,
    /// Fixed column widths in twentieths of a point.
    pub column_widths: Vec<u32>,
    pub border: Option<Border>,
    pub cell_margins: Option<CellMargins>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }
}

impl ToXml for Table {
    fn write_xml(&self, out: &mut String) {
        out.push_str("<w:tbl><w:tblPr>");
        if let Some(style) = &self.style_id {
            out.push_str(&format!(r#"<w:tblStyle w:val="{}"/>"#, escape(style.as_str())));
        }
        out.push_str(r#"<w:tblW w:w="0" w:type="auto"/><w:jc w:val="left"/>"#);
        if let Some(border) = self.border {
            out.push_str("<w:tblBorders>");
            for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
                out.push_str(&format!(
                    r#"<w:{} w:val="single" w:sz="{}" w:space="0" w:color="{}"/>"#,
                    edge,
                    border.size,
                    border.color.hex()
                ));
            }
            out.push_str("</w:tblBorders>");
        }
        out.push_str(r#"<w:tblLayout w:type="fixed"/>"#);
        if let Some(margins) = self.cell_margins {
            out.push_str(&format!(
                concat!(
                    "<w:tblCellMar>",
                    r#"<w:top w:w="{}" w:type="dxa"/>"#,
                    r#"<w:left w:w="{}" w:type="dxa"/>"#,
                    r#"<w:bottom w:w="{}" w:type="dxa"/>"#,
                    r#"<w:right w:w="{}" w:type="dxa"/>"#,
                    "</w:tblCellMar>"
                ),
                margins.top, margins.left, margins.bottom, margins.right
            ));
        }
        out.push_str("</w:tblPr><w:tblGrid>");
        for width in &self.column_widths {
            out.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, width));
        }
        out.push_str("</w:tblGrid>");

        for row in &self.rows {
            out.push_str("<w:tr>");
            for (column, cell) in row.cells.iter().enumerate() {
                out.push_str("<w:tc><w:tcPr>");
                if let Some(width) = self.column_widths.get(column) {
                    out.push_str(&format!(r#"<w:tcW w:w="{}" w:type="dxa"/>"#, width));
                }
                if let Some(fill) = cell.shading {
                    out.push_str(&format!(
                        r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                        fill.hex()
                    ));
                }
                if cell.vertical_center {
                    out.push_str(r#"<w:vAlign w:val="center"/>"#);
                }
                out.push_str("</w:tcPr>");
                // a cell must hold at least one paragraph
                if cell.paragraphs.is_empty() {
                    out.push_str("<w:p/>");
                }
                for paragraph in &cell.paragraphs {
                    paragraph.write_xml(out);
                }
                out.push_str("</w:tc>");
            }
            out.push_str("</w:tr>");
        }
        out.push_str("</w:tbl>");
    }
}
