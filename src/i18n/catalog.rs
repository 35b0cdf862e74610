// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in label catalog for folio.
//!
//! Holds the labels the renderer needs even when a site ships no translation
//! documents: resume section headings, toolbar labels, project link labels and
//! the load-failure message. Site translations (`lang-en.json`,
//! `lang-fa.json`) take precedence; this catalog is what they fall back to.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Persian entry to `FA` (missing keys fall back to English)

use serde::{Deserialize, Serialize};

/// The two page languages.
///
/// Persian is the page default and renders right-to-left. Unsuffixed content
/// fields are English; Persian content lives in `_fa` suffixed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Fa,
    En,
}

/// Text direction written to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Fa => "fa",
            Lang::En => "en",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Case-sensitive, like the `lang` query parameter it is read from.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "fa" => Some(Lang::Fa),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Fa, Lang::En]
    }

    pub fn direction(&self) -> Direction {
        match self {
            Lang::Fa => Direction::Rtl,
            Lang::En => Direction::Ltr,
        }
    }

    /// Field-name suffix of content overrides for this language.
    ///
    /// English is the language of the unsuffixed fields and has no override.
    pub fn override_suffix(&self) -> Option<&'static str> {
        match self {
            Lang::Fa => Some("_fa"),
            Lang::En => None,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Fa
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a built-in label in the specified language.
///
/// Falls back to English if the key is not found in Persian. Unknown keys
/// return an empty string; callers that want the key back use [`t_or_key`].
///
/// # Examples
///
/// ```
/// use folio::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "resume.about"), "About");
/// assert_eq!(t(Lang::Fa, "resume.about"), "درباره من");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Returns the label or the key itself if it is missing everywhere.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

/// Whether the catalog knows `key` in any language.
pub fn has_key(key: &str) -> bool {
    lookup(EN, key).is_some() || lookup(FA, key).is_some()
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Fa => FA,
    }
}

// ─── English (every key is defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Resume toolbar
    ("resume.back", "Back to site"),
    ("resume.print", "Save as PDF"),
    (
        "resume.printHint",
        "To remove the URL from the PDF, turn off \"Headers and footers\" in the print dialog.",
    ),
    ("resume.title", "Resume"),
    // Resume section headings
    ("resume.about", "About"),
    ("resume.skills", "Skills"),
    ("resume.experience", "Experience"),
    ("resume.projects", "Projects"),
    ("resume.otherProjects", "Other projects"),
    ("resume.education", "Education"),
    ("resume.certifications", "Certifications"),
    ("resume.languages", "Languages"),
    // Load states
    ("status.loading", "Loading…"),
    ("status.loadFailed", "Could not load resume."),
    // Site labels shared with lang-*.json
    ("hero.viewWork", "View my work"),
    ("hero.contactMe", "Contact me"),
    ("project.github", "GitHub"),
    ("project.demo", "Demo"),
    ("project.linksPlaceholder", "Links coming soon"),
    ("sections.educationTitle", "Education"),
    ("footer", "© {year}. All rights reserved."),
    // English-only defaults for missing profile fields
    ("fallback.title", "Full Stack Developer"),
    (
        "fallback.about",
        "Full Stack Developer. Backend & frontend development.",
    ),
];

// ─── Persian ────────────────────────────────────────────────────────

const FA: &[(&str, &str)] = &[
    ("resume.back", "بازگشت به سایت"),
    ("resume.print", "ذخیره به صورت PDF"),
    (
        "resume.printHint",
        "برای حذف آدرس از PDF، در پنجرهٔ چاپ گزینه «Headers and footers» را غیرفعال کنید.",
    ),
    ("resume.title", "رزومه"),
    ("resume.about", "درباره من"),
    ("resume.skills", "مهارت‌ها"),
    ("resume.experience", "سوابق کاری"),
    ("resume.projects", "پروژه‌ها"),
    ("resume.otherProjects", "سایر پروژه‌ها"),
    ("resume.education", "تحصیلات"),
    ("resume.certifications", "گواهینامه‌ها"),
    ("resume.languages", "زبان‌ها"),
    ("status.loading", "در حال بارگذاری…"),
    ("status.loadFailed", "امکان بارگذاری رزومه وجود نداشت."),
    ("hero.viewWork", "مشاهده نمونه‌کارها"),
    ("hero.contactMe", "تماس با من"),
    ("project.github", "گیت‌هاب"),
    ("project.demo", "دمو"),
    ("project.linksPlaceholder", "لینک‌ها به‌زودی"),
    ("sections.educationTitle", "تحصیلات"),
    ("footer", "© {year}. تمامی حقوق محفوظ است."),
];
