// src/docx/raw.rs
//! Vendor-specific markup injected verbatim into a paragraph

use crate::config::RgbColor;

/// A pre-serialized inline fragment. Only this module builds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawXml(String);

impl RawXml {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A full-width VML horizontal rule run.
pub fn horizontal_rule(width_pt: f32, height_pt: f32, color: RgbColor) -> RawXml {
    RawXml(format!(
        concat!(
            "<w:r><w:rPr><w:noProof/></w:rPr><w:pict>",
            r#"<v:rect xmlns:v="urn:schemas-microsoft-com:vml" xmlns:o="urn:schemas-microsoft-com:office:office" "#,
            r##"style="width:{}pt;height:{}pt" fillcolor="#{}" stroked="f" "##,
            r#"o:hr="t" o:hrstd="t" o:hrnoshade="t" o:hrpct="989" o:hralign="center"/>"#,
            "</w:pict></w:r>"
        ),
        width_pt,
        height_pt,
        color.hex().to_lowercase()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_markup() {
        let rule = horizontal_rule(448.6, 2.0, RgbColor(225, 79, 79));
        assert!(rule.as_str().contains(r##"style="width:448.6pt;height:2pt""##));
        assert!(rule.as_str().contains(r##"fillcolor="#e14f4f""##));
        assert!(rule.as_str().starts_with("<w:r>"));
        assert!(rule.as_str().ends_with("</w:r>"));
    }
}
