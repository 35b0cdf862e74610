// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content store: the JSON documents a page is rendered from
//!
//! All documents are read concurrently and joined before anything renders.
//! A document that cannot be read or parsed is simply absent; the failure is
//! logged and recorded, never propagated.

mod source;

pub use source::{DirectorySource, DocumentSource, MemorySource};

use crate::i18n::Translations;
use crate::types::{parse_socials, Profile, Projects, Social};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// The documents a site is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Profile,
    Projects,
    Socials,
    TranslationsEn,
    TranslationsFa,
}

impl DocumentKind {
    pub fn all() -> &'static [DocumentKind] {
        &[
            DocumentKind::Profile,
            DocumentKind::Projects,
            DocumentKind::Socials,
            DocumentKind::TranslationsEn,
            DocumentKind::TranslationsFa,
        ]
    }

    /// File name under the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentKind::Profile => "profile.json",
            DocumentKind::Projects => "projects.json",
            DocumentKind::Socials => "socials.json",
            DocumentKind::TranslationsEn => "lang-en.json",
            DocumentKind::TranslationsFa => "lang-fa.json",
        }
    }
}

/// In-memory holder of a site's documents for one session
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    profile: Option<Profile>,
    projects: Option<Projects>,
    socials: Option<Vec<Social>>,
    translations: Translations,
    missing: Vec<DocumentKind>,
}

impl ContentStore {
    /// Fetch every document from `source` in parallel and join the results.
    pub fn load<S: DocumentSource + ?Sized>(source: &S) -> Self {
        let fetched: Vec<(DocumentKind, Option<Value>)> = DocumentKind::all()
            .par_iter()
            .map(|kind| (*kind, fetch(source, *kind)))
            .collect();

        let mut docs = fetched.into_iter().collect::<std::collections::HashMap<_, _>>();
        let mut take = |kind: DocumentKind| docs.remove(&kind).flatten();

        let profile_doc = take(DocumentKind::Profile);
        let projects_doc = take(DocumentKind::Projects);
        let socials_doc = take(DocumentKind::Socials);
        let en = take(DocumentKind::TranslationsEn);
        let fa = take(DocumentKind::TranslationsFa);

        let mut missing = Vec::new();
        let profile = shaped(DocumentKind::Profile, profile_doc, Profile::from_value, &mut missing);
        let projects = shaped(
            DocumentKind::Projects,
            projects_doc,
            |v| Projects::from_value(&v),
            &mut missing,
        );
        let socials = shaped(
            DocumentKind::Socials,
            socials_doc,
            |v| parse_socials(&v),
            &mut missing,
        );
        if en.is_none() {
            missing.push(DocumentKind::TranslationsEn);
        }
        if fa.is_none() {
            missing.push(DocumentKind::TranslationsFa);
        }

        Self {
            profile,
            projects,
            socials,
            translations: Translations::new(en, fa),
            missing,
        }
    }

    /// Assemble a store from already-parsed parts.
    pub fn from_parts(
        profile: Option<Profile>,
        projects: Option<Projects>,
        socials: Option<Vec<Social>>,
        translations: Translations,
    ) -> Self {
        let mut missing = Vec::new();
        if profile.is_none() {
            missing.push(DocumentKind::Profile);
        }
        if projects.is_none() {
            missing.push(DocumentKind::Projects);
        }
        if socials.is_none() {
            missing.push(DocumentKind::Socials);
        }
        Self {
            profile,
            projects,
            socials,
            translations,
            missing,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn projects(&self) -> Option<&Projects> {
        self.projects.as_ref()
    }

    /// Socials in document order; empty when the document is absent.
    pub fn socials(&self) -> &[Social] {
        self.socials.as_deref().unwrap_or(&[])
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Documents that could not be loaded, in [`DocumentKind::all`] order.
    pub fn missing(&self) -> &[DocumentKind] {
        &self.missing
    }
}

fn fetch<S: DocumentSource + ?Sized>(source: &S, kind: DocumentKind) -> Option<Value> {
    match source.fetch(kind) {
        Ok(value) => {
            debug!(document = kind.file_name(), "loaded");
            Some(value)
        }
        Err(err) => {
            warn!(document = kind.file_name(), error = %err, "failed to load");
            None
        }
    }
}

fn shaped<T>(
    kind: DocumentKind,
    doc: Option<Value>,
    parse: impl FnOnce(Value) -> Option<T>,
    missing: &mut Vec<DocumentKind>,
) -> Option<T> {
    let parsed = doc.and_then(|value| {
        let parsed = parse(value);
        if parsed.is_none() {
            warn!(document = kind.file_name(), "unexpected document shape");
        }
        parsed
    });
    if parsed.is_none() {
        missing.push(kind);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_documents_are_recorded_not_fatal() {
        let source = MemorySource::new()
            .with(DocumentKind::Profile, r#"{"about": "hi"}"#)
            .with(DocumentKind::Socials, "not json");
        let store = ContentStore::load(&source);

        assert!(store.profile().is_some());
        assert!(store.projects().is_none());
        assert!(store.socials().is_empty());
        assert_eq!(
            store.missing(),
            &[
                DocumentKind::Projects,
                DocumentKind::Socials,
                DocumentKind::TranslationsEn,
                DocumentKind::TranslationsFa
            ]
        );
    }

    #[test]
    fn wrong_shape_counts_as_missing() {
        let source = MemorySource::new()
            .with(DocumentKind::Profile, "[1, 2]")
            .with(DocumentKind::Projects, "42");
        let store = ContentStore::load(&source);
        assert!(store.profile().is_none());
        assert!(store.projects().is_none());
        assert!(store.missing().contains(&DocumentKind::Profile));
    }

    #[test]
    fn translations_loaded_per_language() {
        let source = MemorySource::new()
            .with(DocumentKind::TranslationsEn, r#"{"footer": "EN {year}"}"#)
            .with(DocumentKind::TranslationsFa, r#"{"footer": "FA {year}"}"#);
        let store = ContentStore::load(&source);
        assert_eq!(
            store.translations().text(crate::i18n::Lang::Fa, "footer"),
            "FA {year}"
        );
    }
}
