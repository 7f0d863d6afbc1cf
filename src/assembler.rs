// src/assembler.rs
use crate::anonymize::anonymize;
use crate::config::AppConfig;
use crate::core::ScratchFile;
use crate::docx::elements::Block;
use crate::docx::Document;
use crate::emitters::{BodyBuilder, Emphasis};
use crate::error::Result;
use crate::translations::{Language, Translation};
use crate::types::CandidateData;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub output_path: PathBuf,
    pub language: Language,
    pub blind: bool,
    pub blocks: usize,
}

/// Fills a cleared template with a candidate's CV.
pub struct DocumentAssembler<'a> {
    config: &'a AppConfig,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Build the CV for `candidate` from `template` and save it to `output`.
    ///
    /// The template is never modified; a scratch copy is used and removed
    /// before returning, whether or not assembly succeeds.
    pub fn assemble(
        &self,
        candidate: &CandidateData,
        template: &Path,
        output: &Path,
    ) -> Result<AssemblyReport> {
        let language = Language::resolve(&candidate.language);
        if Language::from_code(&candidate.language).is_none() {
            warn!(
                "Unsupported language '{}', using {}",
                candidate.language,
                language.code()
            );
        }
        let translation = language.translation();

        let candidate = if candidate.blind_cv {
            Cow::Owned(anonymize(candidate, translation))
        } else {
            Cow::Borrowed(candidate)
        };

        println!(
            "Generating CV for {} (language: {}, blind: {})...",
            candidate.name,
            language.code(),
            candidate.blind_cv
        );

        let scratch = ScratchFile::copy_of(template, &self.config.scratch_dir)?;
        println!("  ✓ Copied template to scratch file");

        let mut document = Document::open_cleared(scratch.path())?;
        println!("  ✓ Cleared template content");

        document.extend(self.build_body(&candidate, translation));
        document.save(output)?;
        println!("  ✓ Saved CV: {}", output.display());

        info!(
            "Assembled CV for {} ({} blocks, language {}) into {}",
            candidate.name,
            document.blocks().len(),
            language.code(),
            output.display()
        );

        Ok(AssemblyReport {
            output_path: output.to_path_buf(),
            language,
            blind: candidate.blind_cv,
            blocks: document.blocks().len(),
        })
    }

    /// The full body of the CV, in document order.
    pub fn build_body(&self, candidate: &CandidateData, t: &Translation) -> Vec<Block> {
        let mut body = BodyBuilder::new(&self.config.style);

        body.title(&format!("{} – {}", candidate.position, candidate.name));
        body.rule();

        body.heading(&format!("{} {}", t.why, candidate.first_name.to_uppercase()));
        body.bullet_list(&candidate.why_points);

        body.section_header(t.education);
        body.education_table(&candidate.education, t);
        body.spacer();

        body.section_header(t.skills);
        for skill in &candidate.skills {
            body.labelled_item(&skill.label, &skill.content);
        }

        body.section_header(t.certifications);
        body.bullet_list(&candidate.certifications);

        body.section_header(t.languages);
        body.bullet_list(&candidate.languages);

        body.section_header(t.experience);
        for (i, job) in candidate.experience.iter().enumerate() {
            if i > 0 {
                body.rule();
            }
            body.bold_line(&job.dates, 1.0, 0.0);
            body.key_value(t.company_name, &job.company, Emphasis::Value, 0.0, 0.0);
            body.key_value(t.position, &job.position, Emphasis::Value, 0.0, 0.0);
            body.bold_line(t.responsibilities, 0.0, 1.0);
            body.bullet_list(&job.responsibilities);

            if let Some(technologies) = job.listed_technologies() {
                body.key_value(
                    t.technologies,
                    &technologies.join(", "),
                    Emphasis::Label,
                    4.0,
                    2.0,
                );
            }
        }

        body.spacer();
        body.spacer();
        body.disclaimer(t.rodo);

        body.into_blocks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::elements::Paragraph;
    use crate::translations::{ENGLISH, POLISH};
    use crate::types::{Education, Experience, SkillCategory};

    fn candidate() -> CandidateData {
        CandidateData {
            name: "Jan Kowalski".to_string(),
            first_name: "Jan".to_string(),
            position: "Developer".to_string(),
            language: "pl".to_string(),
            blind_cv: false,
            why_points: vec!["Dobry zespół".to_string()],
            education: vec![Education {
                dates: "2015-2019".to_string(),
                institution: "AGH".to_string(),
                degree: "MSc".to_string(),
                location: "Kraków".to_string(),
            }],
            skills: vec![],
            certifications: vec![],
            languages: vec![],
            experience: vec![],
        }
    }

    fn job(technologies: Option<Vec<&str>>) -> Experience {
        Experience {
            dates: "01.2020 – 12.2023".to_string(),
            company: "Acme".to_string(),
            position: "Backend Developer".to_string(),
            responsibilities: vec!["Code review".to_string(), "Mentoring".to_string()],
            technologies: technologies.map(|t| t.into_iter().map(str::to_string).collect()),
            industry: Some("Fintech".to_string()),
        }
    }

    fn texts(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(p) => p.text(),
                Block::Table(_) => "<table>".to_string(),
            })
            .collect()
    }

    fn paragraph(block: &Block) -> &Paragraph {
        match block {
            Block::Paragraph(p) => p,
            other => panic!("expected a paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_minimal_polish_body_order() {
        let config = AppConfig::default();
        let blocks = DocumentAssembler::new(&config).build_body(&candidate(), &POLISH);

        let expected = vec![
            "Developer – Jan Kowalski",
            "",
            "DLACZEGO JAN",
            "Dobry zespół.",
            "",
            "EDUKACJA",
            "<table>",
            "",
            "",
            "UMIEJĘTNOŚCI",
            "",
            "CERTYFIKATY",
            "",
            "JĘZYKI",
            "",
            "DOŚWIADCZENIE",
            "",
            "",
            POLISH.rodo,
        ];
        pretty_assertions::assert_eq!(texts(&blocks), expected);
    }

    #[test]
    fn test_disclaimer_is_small_body_text() {
        let config = AppConfig::default();
        let blocks = DocumentAssembler::new(&config).build_body(&candidate(), &ENGLISH);
        let disclaimer = paragraph(blocks.last().unwrap());
        let run = disclaimer.runs().next().unwrap();
        assert_eq!(run.text, ENGLISH.rodo);
        assert_eq!(run.style.size_pt, Some(5.0));
        assert_eq!(run.style.color, Some(config.style.text_color));
    }

    #[test]
    fn test_experience_entries() {
        let config = AppConfig::default();
        let mut data = candidate();
        data.experience = vec![job(Some(vec!["Rust", "PostgreSQL"])), job(Some(vec![])), job(None)];
        data.skills = vec![SkillCategory {
            label: "Języki:".to_string(),
            content: "Rust, Go".to_string(),
        }];

        let blocks = DocumentAssembler::new(&config).build_body(&data, &POLISH);
        let texts = texts(&blocks);

        let skills_at = texts.iter().position(|t| t == "UMIEJĘTNOŚCI").unwrap();
        assert_eq!(texts[skills_at + 1], "Języki: Rust, Go");
        assert!(paragraph(&blocks[skills_at + 1]).props.numbering.is_some());

        let start = texts.iter().position(|t| t == "DOŚWIADCZENIE").unwrap() + 1;
        let experience: Vec<&str> = texts[start..texts.len() - 3].iter().map(String::as_str).collect();
        pretty_assertions::assert_eq!(
            experience,
            vec![
                "01.2020 – 12.2023",
                "Nazwa firmy: Acme",
                "Stanowisko: Backend Developer",
                "Zakres obowiązków:",
                "Code review,",
                "Mentoring.",
                "Technologie: Rust, PostgreSQL",
                "",
                "01.2020 – 12.2023",
                "Nazwa firmy: Acme",
                "Stanowisko: Backend Developer",
                "Zakres obowiązków:",
                "Code review,",
                "Mentoring.",
                "",
                "01.2020 – 12.2023",
                "Nazwa firmy: Acme",
                "Stanowisko: Backend Developer",
                "Zakres obowiązków:",
                "Code review,",
                "Mentoring.",
            ]
        );
        assert_eq!(texts.iter().filter(|t| t.starts_with("Technologie:")).count(), 1);
    }

    #[test]
    fn test_unrecognized_language_matches_default_labels() {
        let config = AppConfig::default();
        let assembler = DocumentAssembler::new(&config);
        let mut data = candidate();
        data.language = "de".to_string();

        let fallback = assembler.build_body(&data, Translation::for_code(&data.language));
        let polish = assembler.build_body(&candidate(), &POLISH);
        assert_eq!(fallback, polish);
    }
}
