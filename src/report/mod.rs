// SPDX-License-Identifier: PMPL-1.0-or-later

//! Build reports

pub mod formatter;
pub mod generator;
pub mod output;

use crate::content::DocumentKind;
use crate::i18n::Lang;
use crate::switch::Page;
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use formatter::ReportFormatter;
pub use generator::ReportGenerator;
pub use output::ReportOutputFormat;

/// One written page
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub page: Page,
    pub lang: Lang,
    pub path: PathBuf,
    /// Slots written into the skeleton.
    pub applied: usize,
    /// Mount ids the skeleton lacks.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildAssessment {
    pub warnings: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub created_at: String,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub pages: Vec<PageReport>,
    pub missing_documents: Vec<DocumentKind>,
    pub assets_copied: usize,
    pub assessment: BuildAssessment,
}

/// Assemble a build report and assess it
pub fn generate_build_report(
    data_dir: &Path,
    output_dir: &Path,
    pages: Vec<PageReport>,
    missing_documents: Vec<DocumentKind>,
    assets_copied: usize,
) -> BuildReport {
    ReportGenerator::new().generate(data_dir, output_dir, pages, missing_documents, assets_copied)
}

/// Save report to file
pub fn save_report<P: AsRef<Path>>(
    report: &BuildReport,
    path: P,
    format: ReportOutputFormat,
) -> Result<()> {
    ReportFormatter::new().save(report, path, format)
}

/// Print report to console
pub fn print_report(report: &BuildReport) {
    ReportFormatter::new().print(report);
}
