// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site diagnostics: are the data documents, skeletons and translations
//! consistent with each other?

use crate::config::SiteConfig;
use crate::content::{DirectorySource, DocumentKind, DocumentSource};
use crate::dom::Document;
use crate::i18n::{has_key, Lang, Translations};
use crate::render::mounts;
use crate::types::parse_socials;
use anyhow::{anyhow, Result};
use colored::*;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;

pub fn run_site_diagnostics(config: &SiteConfig) -> Result<()> {
    println!("folio site diagnostics");
    println!();

    let checks = site_checks(config);
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("site diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Every check, in report order.
pub fn site_checks(config: &SiteConfig) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("folio {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(check_directory("data directory", &config.data_dir, Level::Error));
    checks.push(check_directory("assets directory", &config.assets_dir, Level::Warn));

    let source = DirectorySource::new(&config.data_dir);
    let mut documents = Vec::new();
    for &kind in DocumentKind::all() {
        let (diagnostic, value) = check_document(&source, kind);
        checks.push(diagnostic);
        documents.push((kind, value));
    }
    let doc = |kind: DocumentKind| {
        documents
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, v)| v.clone())
    };

    if let Some(socials) = doc(DocumentKind::Socials) {
        checks.push(check_socials(&socials));
    }

    let translations = Translations::new(
        doc(DocumentKind::TranslationsEn),
        doc(DocumentKind::TranslationsFa),
    );
    checks.push(check_translation_parity(&translations));

    for (label, path, expected) in [
        ("index skeleton", &config.index_skeleton, mounts::INDEX),
        ("resume skeleton", &config.resume_skeleton, mounts::RESUME),
    ] {
        match Document::load(path) {
            Ok(skeleton) => {
                checks.push(check_mounts(label, &skeleton, expected));
                checks.push(check_labels(label, &skeleton, &translations));
            }
            Err(err) => checks.push(Diagnostic::error(label, format!("{:#}", err))),
        }
    }

    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_directory(label: &'static str, path: &Path, missing_level: Level) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::warning(
            label,
            format!("{} exists but is not a directory", path.display()),
        )
    } else {
        Diagnostic::new(label, missing_level, format!("{} missing", path.display()))
    }
}

fn check_document(source: &DirectorySource, kind: DocumentKind) -> (Diagnostic, Option<Value>) {
    let label = kind.file_name();
    match source.fetch(kind) {
        Ok(value) => (
            Diagnostic::ok(label, format!("parsed {}", source.describe(kind))),
            Some(value),
        ),
        Err(err) => {
            // the profile drives most of both pages
            let level = if kind == DocumentKind::Profile {
                Level::Error
            } else {
                Level::Warn
            };
            (Diagnostic::new(label, level, format!("{:#}", err)), None)
        }
    }
}

fn check_socials(value: &Value) -> Diagnostic {
    let Some(socials) = parse_socials(value) else {
        return Diagnostic::warning("socials", "not a list of links".to_string());
    };
    let blank: Vec<&str> = socials
        .iter()
        .filter(|s| s.link().is_none())
        .map(|s| s.label.as_str())
        .collect();
    if blank.is_empty() {
        Diagnostic::ok("socials", format!("{} links", socials.len()))
    } else {
        Diagnostic::warning(
            "socials",
            format!("entries without a URL are never shown: {}", blank.join(", ")),
        )
    }
}

fn check_translation_parity(translations: &Translations) -> Diagnostic {
    let en: BTreeSet<String> = translations.keys(Lang::En).into_iter().collect();
    let fa: BTreeSet<String> = translations.keys(Lang::Fa).into_iter().collect();
    let only_en: Vec<&str> = en.difference(&fa).map(String::as_str).collect();
    let only_fa: Vec<&str> = fa.difference(&en).map(String::as_str).collect();
    if only_en.is_empty() && only_fa.is_empty() {
        return Diagnostic::ok("translation parity", format!("{} keys in both", en.len()));
    }
    let mut parts = Vec::new();
    if !only_en.is_empty() {
        parts.push(format!("only in en: {}", only_en.join(", ")));
    }
    if !only_fa.is_empty() {
        parts.push(format!("only in fa: {}", only_fa.join(", ")));
    }
    Diagnostic::warning("translation parity", parts.join("; "))
}

fn check_mounts(label: &'static str, skeleton: &Document, expected: &[&str]) -> Diagnostic {
    let missing = skeleton.missing_mounts(expected);
    if missing.is_empty() {
        Diagnostic::ok(label, format!("all {} mount points present", expected.len()))
    } else {
        Diagnostic::warning(
            label,
            format!("mount points missing (slots skipped): {}", missing.join(", ")),
        )
    }
}

fn check_labels(
    label: &'static str,
    skeleton: &Document,
    translations: &Translations,
) -> Diagnostic {
    let mut unknown: Vec<String> = skeleton
        .translation_keys()
        .into_iter()
        .filter(|key| {
            Lang::all()
                .iter()
                .any(|&lang| translations.lookup(lang, key).is_none())
                && !has_key(key)
        })
        .collect();
    unknown.dedup();
    if unknown.is_empty() {
        Diagnostic::ok(label, "every data-i18n key translated".to_string())
    } else {
        Diagnostic::warning(
            label,
            format!("keys shown verbatim in some language: {}", unknown.join(", ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn parity_lists_one_sided_keys() {
        let tr = Translations::new(
            Some(json!({ "nav": { "home": "Home", "blog": "Blog" } })),
            Some(json!({ "nav": { "home": "خانه" } })),
        );
        let d = check_translation_parity(&tr);
        assert_eq!(d.level, Level::Warn);
        assert!(d.detail.contains("only in en: nav.blog"));
    }

    #[test]
    fn missing_data_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config = SiteConfig::default().rooted_at(tmp.path());
        let checks = site_checks(&config);
        assert!(checks
            .iter()
            .any(|c| c.label == "data directory" && c.level == Level::Error));
        assert!(run_site_diagnostics(&config).is_err());
    }

    #[test]
    fn skeleton_mounts_are_checked() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("index.html"), r#"<div id="about-text"></div>"#).unwrap();
        let skeleton = Document::load(&tmp.path().join("index.html")).unwrap();
        let d = check_mounts("index skeleton", &skeleton, mounts::INDEX);
        assert_eq!(d.level, Level::Warn);
        assert!(d.detail.contains("hero-name"));
        assert!(!d.detail.contains("about-text"));
    }

    #[test]
    fn parsed_document_names_its_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("profile.json"), r#"{"about": "hi"}"#).unwrap();
        let source = DirectorySource::new(tmp.path());

        let (ok, value) = check_document(&source, DocumentKind::Profile);
        assert_eq!(ok.level, Level::Ok);
        assert!(ok.detail.contains(&tmp.path().join("profile.json").display().to_string()));
        assert!(value.is_some());

        let (missing, value) = check_document(&source, DocumentKind::Socials);
        assert_eq!(missing.level, Level::Warn);
        assert!(value.is_none());
    }

    #[test]
    fn blank_social_urls_are_flagged() {
        let d = check_socials(&json!([
            { "label": "GitHub", "url": "https://github.com/x" },
            { "label": "Telegram", "url": "  " }
        ]));
        assert_eq!(d.level, Level::Warn);
        assert!(d.detail.contains("Telegram"));
    }
}
