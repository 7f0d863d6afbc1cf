// src/types/cv_data.rs
//! Candidate record as produced by the CV extraction step

use crate::error::{CvError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_language() -> String {
    "pl".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateData {
    pub name: String,
    pub first_name: String,
    pub position: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub blind_cv: bool,
    #[serde(default)]
    pub why_points: Vec<String>,
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub dates: String,
    pub institution: String,
    pub degree: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub dates: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    pub technologies: Option<Vec<String>>,
    /// Kept apart from `company` so blind mode can always rebuild the company phrase.
    pub industry: Option<String>,
}

impl Experience {
    /// Technologies worth a line in the CV; `None` when absent or empty.
    pub fn listed_technologies(&self) -> Option<&[String]> {
        self.technologies
            .as_deref()
            .filter(|technologies| !technologies.is_empty())
    }
}

impl CandidateData {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a UTF-8 JSON record from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CvError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
