// src/anonymize.rs
//! Blind CV: hide the candidate's name and employer identities

use crate::translations::Translation;
use crate::types::CandidateData;

pub const DEFAULT_INDUSTRY: &str = "IT";

/// Return an anonymized copy of `data`.
///
/// Names become the language placeholder and every company is replaced by a
/// phrase built from that job's `industry`. The industry itself is left
/// untouched, so applying this twice gives the same result as applying it once.
pub fn anonymize(data: &CandidateData, translation: &Translation) -> CandidateData {
    let mut blind = data.clone();
    blind.name = translation.blind_name.to_string();
    blind.first_name = translation.blind_name.to_string();

    for job in &mut blind.experience {
        let industry = job
            .industry
            .as_deref()
            .filter(|industry| !industry.trim().is_empty())
            .unwrap_or(DEFAULT_INDUSTRY);
        job.company = translation.blind_company_for(industry);
    }

    blind
}
