// src/emitters.rs
//! Styled building blocks of the CV body

use crate::config::StyleConfig;
use crate::docx::elements::{Block, Border, CellMargins, Paragraph, Run, Table, TableCell, TableRow};
use crate::docx::raw;
use crate::translations::Translation;
use crate::types::Education;

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';'];

/// Which half of a key/value line is bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Label,
    Value,
}

/// Replace trailing `.`, `,` and `;` with `,` on every item but the last, which ends in `.`.
pub fn punctuate(items: &[String]) -> Vec<String> {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mark = if i == last { '.' } else { ',' };
            let mut text = item.trim_end_matches(TRAILING_PUNCTUATION).to_string();
            text.push(mark);
            text
        })
        .collect()
}

/// Appends blocks in document order.
pub struct BodyBuilder<'a> {
    style: &'a StyleConfig,
    blocks: Vec<Block>,
}

impl<'a> BodyBuilder<'a> {
    pub fn new(style: &'a StyleConfig) -> Self {
        Self {
            style,
            blocks: Vec::new(),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    fn body_run(&self, text: impl Into<String>) -> Run {
        Run::new(text)
            .font(&self.style.body_font)
            .color(self.style.text_color)
            .size(self.style.body_size_pt)
    }

    fn heading_run(&self, text: impl Into<String>, size_pt: f32) -> Run {
        Run::new(text)
            .font(&self.style.heading_font)
            .color(self.style.header_color)
            .bold(false)
            .size(size_pt)
    }

    /// Brand colored horizontal line.
    pub fn rule(&mut self) {
        let style = self.style;
        let line = raw::horizontal_rule(style.rule_width_pt, style.rule_height_pt, style.header_color);
        self.push(Paragraph::new().with_raw(line).spacing(4.0, 6.0));
    }

    pub fn title(&mut self, text: &str) {
        let run = self.heading_run(text, self.style.title_size_pt);
        self.push(Paragraph::new().with_run(run).spacing(2.0, 6.0));
    }

    /// Heading without a preceding rule.
    pub fn heading(&mut self, text: &str) {
        let run = self.heading_run(text, self.style.section_size_pt);
        self.push(Paragraph::new().with_run(run).spacing(0.0, 3.0));
    }

    pub fn section_header(&mut self, text: &str) {
        self.rule();
        let run = self.heading_run(text, self.style.section_size_pt);
        self.push(Paragraph::new().with_run(run).spacing(2.0, 3.0));
    }

    pub fn bullet_list(&mut self, items: &[String]) {
        for item in punctuate(items) {
            let run = self.body_run(item);
            self.push(
                Paragraph::new()
                    .numbered(self.style.bullet_num_id, 0)
                    .with_run(run)
                    .spacing(1.0, 1.0)
                    .line_spacing(1.5),
            );
        }
    }

    /// Numbered paragraph with a bold label followed by plain content.
    pub fn labelled_item(&mut self, label: &str, content: &str) {
        let label = self.body_run(format!("{} ", label)).bold(true);
        let content = self.body_run(content);
        self.push(
            Paragraph::new()
                .numbered(self.style.bullet_num_id, 0)
                .with_run(label)
                .with_run(content)
                .spacing(1.0, 1.0),
        );
    }

    pub fn bold_line(&mut self, text: &str, before_pt: f32, after_pt: f32) {
        let run = self.body_run(text).bold(true);
        self.push(Paragraph::new().with_run(run).spacing(before_pt, after_pt));
    }

    pub fn key_value(&mut self, label: &str, value: &str, emphasis: Emphasis, before_pt: f32, after_pt: f32) {
        let mut label = self.body_run(format!("{} ", label));
        let mut value = self.body_run(value);
        match emphasis {
            Emphasis::Label => label = label.bold(true),
            Emphasis::Value => value = value.bold(true),
        }
        self.push(
            Paragraph::new()
                .with_run(label)
                .with_run(value)
                .spacing(before_pt, after_pt),
        );
    }

    /// Two column table: dates | institution, degree and location.
    pub fn education_table(&mut self, entries: &[Education], translation: &Translation) {
        let style = self.style;

        let header_cell = |text: &str| {
            let run = Run::new(text)
                .font(&style.body_font)
                .bold(true)
                .color(style.text_color)
                .size(style.body_size_pt);
            TableCell::new(Paragraph::new().with_run(run).spacing(4.0, 4.0))
                .shaded(Some(style.table_header_fill))
                .centered()
        };

        let mut rows = vec![TableRow {
            cells: vec![
                header_cell(translation.dates),
                header_cell(translation.education_header),
            ],
        }];

        for (i, entry) in entries.iter().enumerate() {
            // zebra striping on every second data row
            let fill = ((i + 1) % 2 == 0).then_some(style.table_zebra_fill);
            let data_cell = |text: String| {
                let run = Run::new(text)
                    .font(&style.body_font)
                    .color(style.text_color)
                    .size(style.table_body_size_pt);
                TableCell::new(Paragraph::new().with_run(run).spacing(6.0, 6.0))
                    .shaded(fill)
                    .centered()
            };
            rows.push(TableRow {
                cells: vec![
                    data_cell(entry.dates.clone()),
                    data_cell(format!(
                        "{}\n{}\n{}",
                        entry.institution, entry.degree, entry.location
                    )),
                ],
            });
        }

        self.push(Table {
            style_id: Some("TableGrid".to_string()),
            column_widths: style.table_column_widths.to_vec(),
            border: Some(Border {
                size: 4,
                color: style.table_border_color,
            }),
            cell_margins: Some(CellMargins {
                top: 80,
                left: 120,
                bottom: 80,
                right: 120,
            }),
            rows,
        });
    }

    pub fn spacer(&mut self) {
        self.push(Paragraph::new());
    }

    pub fn disclaimer(&mut self, text: &str) {
        let run = self.body_run(text).size(self.style.disclaimer_size_pt);
        self.push(Paragraph::new().with_run(run));
    }
}
