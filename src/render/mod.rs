// SPDX-License-Identifier: PMPL-1.0-or-later

//! Markup rendering
//!
//! Renderers are pure: `(content, language) -> slots`. They never touch a
//! document; [`crate::dom::Document::apply`] does that.

pub mod escape;
pub mod resume;
pub mod site;
pub mod slots;

pub use escape::{escape_attr, escape_html, unescape_html};
pub use resume::render_resume;
pub use site::render_site;
pub use slots::{mounts, ResumeSlots, SiteSlots, Slot, SlotEdit};

use crate::content::ContentStore;
use crate::i18n::Lang;
use serde::{Deserialize, Serialize};

/// Paths the rendered markup links to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteAssets {
    /// Image shown on project cards without an `image`.
    pub placeholder_image: String,
    /// Portrait at the top of the resume.
    pub resume_photo: String,
    pub index_page: String,
    pub resume_page: String,
}

impl Default for SiteAssets {
    fn default() -> Self {
        Self {
            placeholder_image: "assets/images/project-placeholder.svg".to_string(),
            resume_photo: "assets/images/resume-img.jpeg".to_string(),
            index_page: "index.html".to_string(),
            resume_page: "resume.html".to_string(),
        }
    }
}

/// Everything a renderer reads: the content, the language, and page-level
/// settings. Passed explicitly; renderers keep no state of their own.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub store: &'a ContentStore,
    pub lang: Lang,
    /// Substituted for `{year}` in the footer.
    pub year: i32,
    pub assets: &'a SiteAssets,
}

impl<'a> RenderContext<'a> {
    pub fn new(store: &'a ContentStore, lang: Lang, year: i32, assets: &'a SiteAssets) -> Self {
        Self {
            store,
            lang,
            year,
            assets,
        }
    }

    /// Label for `key` in the current language.
    pub fn t(&self, key: &str) -> String {
        self.store.translations().text(self.lang, key)
    }
}

/// Link to another page of the site that keeps the current language.
pub fn page_href(page: &str, lang: Lang) -> String {
    match lang {
        Lang::En => format!("{}?lang=en", page),
        Lang::Fa => page.to_string(),
    }
}
