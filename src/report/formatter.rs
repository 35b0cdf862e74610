// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use super::{BuildReport, ReportOutputFormat};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &BuildReport) {
        println!("\n{}", "=== FOLIO BUILD REPORT ===".bold().cyan());
        println!();

        println!("{}", "SOURCES".bold().yellow());
        println!("  Data: {}", report.data_dir.display());
        println!("  Output: {}", report.output_dir.display());
        if report.missing_documents.is_empty() {
            println!("  Documents: {}", "all present".green());
        } else {
            let names: Vec<&str> = report
                .missing_documents
                .iter()
                .map(|kind| kind.file_name())
                .collect();
            println!("  Missing documents: {}", names.join(", ").red());
        }
        println!();

        println!("{}", "PAGES".bold().yellow());
        for page in &report.pages {
            let status = if page.skipped.is_empty() {
                "OK".green()
            } else {
                "PARTIAL".yellow()
            };
            println!(
                "  {} [{}] {} ({} slots)",
                status,
                page.lang,
                page.path.display(),
                page.applied
            );
        }
        println!("  Assets copied: {}", report.assets_copied);
        println!();

        if !report.assessment.warnings.is_empty() {
            println!("{}", "WARNINGS".bold().red());
            for warning in &report.assessment.warnings {
                println!("    - {}", warning.red());
            }
            println!();
        }

        if !report.assessment.notes.is_empty() {
            println!("{}", "NOTES".bold().yellow());
            for note in &report.assessment.notes {
                println!("    - {}", note.dimmed());
            }
        }
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        report: &BuildReport,
        path: P,
        format: ReportOutputFormat,
    ) -> Result<()> {
        let content = format.serialize(report)?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("writing report {}", path.as_ref().display()))?;
        println!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
