// SPDX-License-Identifier: PMPL-1.0-or-later

//! Build report assembly

use super::{BuildAssessment, BuildReport, PageReport};
use crate::content::DocumentKind;
use std::path::Path;

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        data_dir: &Path,
        output_dir: &Path,
        pages: Vec<PageReport>,
        missing_documents: Vec<DocumentKind>,
        assets_copied: usize,
    ) -> BuildReport {
        let assessment = self.assess(&pages, &missing_documents);
        BuildReport {
            created_at: chrono::Utc::now().to_rfc3339(),
            data_dir: data_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            pages,
            missing_documents,
            assets_copied,
            assessment,
        }
    }

    fn assess(&self, pages: &[PageReport], missing: &[DocumentKind]) -> BuildAssessment {
        let mut warnings = Vec::new();
        let mut notes = Vec::new();

        for kind in missing {
            let effect = match kind {
                DocumentKind::Profile => {
                    "hero, about, skills, experience and education fall back or are omitted; \
                     the resume shows its load-failure message"
                }
                DocumentKind::Projects => "project sections are omitted",
                DocumentKind::Socials => "social and contact links are omitted",
                DocumentKind::TranslationsEn | DocumentKind::TranslationsFa => {
                    "labels fall back to the built-in catalog"
                }
            };
            warnings.push(format!("{} missing or unreadable: {}", kind.file_name(), effect));
        }

        for page in pages {
            if !page.skipped.is_empty() {
                notes.push(format!(
                    "{} ({}): {} mount point(s) not in skeleton: {}",
                    page.path.display(),
                    page.lang,
                    page.skipped.len(),
                    page.skipped.join(", ")
                ));
            }
        }

        if pages.is_empty() {
            warnings.push("no pages were written".to_string());
        }

        BuildAssessment { warnings, notes }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
