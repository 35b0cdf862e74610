// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page view-models: rendered output as a set of optional slots
//!
//! A renderer fills the slots it has data for and leaves the rest `None`.
//! Applying the slots to a document is the only place mount ids appear.

/// What to do to a mount point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotEdit {
    /// Replace the element's content with pre-rendered markup.
    Html(String),
    /// Replace the element's content with text (escaped when applied).
    Text(String),
    /// Set an attribute on the element.
    Attr(&'static str, String),
    /// Add (`true`) or remove (`false`) a class.
    Class(&'static str, bool),
}

/// One edit addressed to a mount id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub mount: &'static str,
    pub edit: SlotEdit,
}

impl Slot {
    pub fn new(mount: &'static str, edit: SlotEdit) -> Self {
        Self { mount, edit }
    }
}

/// Mount ids of the index page
pub mod mounts {
    pub const HERO_STATUS: &str = "hero-status";
    pub const HERO_NAME: &str = "hero-name";
    pub const HERO_TITLE: &str = "hero-title";
    pub const HERO_TAGLINE: &str = "hero-tagline";
    pub const HERO_VIEW_WORK: &str = "hero-view-work";
    pub const HERO_CONTACT_ME: &str = "hero-contact-me";
    pub const HERO_SOCIALS: &str = "hero-socials";
    pub const ABOUT_TEXT: &str = "about-text";
    pub const SKILLS: &str = "skills-container";
    pub const EXPERIENCE: &str = "experience-container";
    pub const PROJECTS_GRID: &str = "projects-grid";
    pub const PROJECTS_OTHER_CONTAINER: &str = "projects-other-container";
    pub const PROJECTS_OTHER: &str = "projects-other";
    pub const EDUCATION: &str = "education-list";
    pub const CERTIFICATIONS: &str = "certifications-list";
    pub const LANGUAGES: &str = "languages-list";
    pub const CONTACT_LINKS: &str = "contact-links";
    pub const RESUME_DOWNLOAD: &str = "resume-download";
    pub const FOOTER_TEXT: &str = "footer-text";
    pub const APP_CONTENT: &str = "app-content";

    pub const RESUME_BODY: &str = "resume-body";
    pub const TOOLBAR_BACK: &str = "toolbar-back";
    pub const TOOLBAR_BACK_TEXT: &str = "toolbar-back-text";
    pub const TOOLBAR_BACK_ICON: &str = "toolbar-back-icon";
    pub const TOOLBAR_PRINT: &str = "toolbar-print";
    pub const TOOLBAR_PRINT_TEXT: &str = "toolbar-print-text";
    pub const PRINT_HINT: &str = "resume-print-hint";

    /// Language switch controls and the language each one selects
    pub const LANG_SWITCHES: &[(&str, crate::i18n::Lang)] = &[
        ("lang-switch-fa", crate::i18n::Lang::Fa),
        ("lang-switch-en", crate::i18n::Lang::En),
        ("lang-switch-fa-mobile", crate::i18n::Lang::Fa),
        ("lang-switch-en-mobile", crate::i18n::Lang::En),
    ];

    /// Mounts the index renderer writes into
    pub const INDEX: &[&str] = &[
        HERO_STATUS,
        HERO_NAME,
        HERO_TITLE,
        HERO_VIEW_WORK,
        HERO_CONTACT_ME,
        HERO_SOCIALS,
        ABOUT_TEXT,
        SKILLS,
        EXPERIENCE,
        PROJECTS_GRID,
        PROJECTS_OTHER_CONTAINER,
        PROJECTS_OTHER,
        EDUCATION,
        CERTIFICATIONS,
        LANGUAGES,
        CONTACT_LINKS,
        RESUME_DOWNLOAD,
        FOOTER_TEXT,
    ];

    /// Mounts the resume renderer writes into
    pub const RESUME: &[&str] = &[
        RESUME_BODY,
        TOOLBAR_BACK,
        TOOLBAR_BACK_TEXT,
        TOOLBAR_PRINT,
        TOOLBAR_PRINT_TEXT,
        PRINT_HINT,
    ];
}

/// Rendered index page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSlots {
    pub hero_status: Option<String>,
    pub hero_name: Option<String>,
    pub hero_title: Option<String>,
    pub hero_view_work: Option<String>,
    pub hero_contact_me: Option<String>,
    pub hero_socials: Option<String>,
    pub about: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub projects: Option<String>,
    pub other_projects: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<String>,
    pub languages: Option<String>,
    pub contact_links: Option<String>,
    pub resume_href: String,
    pub footer: String,
}

impl SiteSlots {
    /// Number of content sections that produced output.
    pub fn rendered_sections(&self) -> usize {
        [
            &self.hero_name,
            &self.about,
            &self.skills,
            &self.experience,
            &self.projects,
            &self.other_projects,
            &self.education,
            &self.certifications,
            &self.languages,
            &self.contact_links,
        ]
        .iter()
        .filter(|slot| slot.is_some())
        .count()
    }

    pub fn into_slots(self) -> Vec<Slot> {
        use mounts::*;
        let mut out = Vec::new();
        if let Some(badge) = self.hero_status {
            out.push(Slot::new(HERO_STATUS, SlotEdit::Html(badge)));
            out.push(Slot::new(HERO_STATUS, SlotEdit::Class("hidden", false)));
        }
        push_text(&mut out, HERO_NAME, self.hero_name);
        push_text(&mut out, HERO_TITLE, self.hero_title);
        push_text(&mut out, HERO_VIEW_WORK, self.hero_view_work);
        push_text(&mut out, HERO_CONTACT_ME, self.hero_contact_me);
        push_html(&mut out, HERO_SOCIALS, self.hero_socials);
        push_text(&mut out, ABOUT_TEXT, self.about);
        push_html(&mut out, SKILLS, self.skills);
        push_html(&mut out, EXPERIENCE, self.experience);
        push_html(&mut out, PROJECTS_GRID, self.projects);
        out.push(Slot::new(
            PROJECTS_OTHER_CONTAINER,
            SlotEdit::Class("hidden", self.other_projects.is_none()),
        ));
        push_html(&mut out, PROJECTS_OTHER, self.other_projects);
        push_html(&mut out, EDUCATION, self.education);
        push_html(&mut out, CERTIFICATIONS, self.certifications);
        push_html(&mut out, LANGUAGES, self.languages);
        push_html(&mut out, CONTACT_LINKS, self.contact_links);
        out.push(Slot::new(
            RESUME_DOWNLOAD,
            SlotEdit::Attr("href", self.resume_href),
        ));
        out.push(Slot::new(FOOTER_TEXT, SlotEdit::Text(self.footer)));
        out
    }
}

/// Rendered resume page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeSlots {
    pub title: String,
    pub body: String,
    pub back_href: String,
    pub back_text: String,
    pub back_icon_class: String,
    pub print_text: String,
    pub print_hint: String,
}

impl ResumeSlots {
    pub fn into_slots(self) -> Vec<Slot> {
        use mounts::*;
        vec![
            Slot::new(RESUME_BODY, SlotEdit::Html(self.body)),
            Slot::new(TOOLBAR_BACK, SlotEdit::Attr("href", self.back_href)),
            Slot::new(TOOLBAR_BACK_TEXT, SlotEdit::Text(self.back_text)),
            Slot::new(
                TOOLBAR_BACK_ICON,
                SlotEdit::Attr("class", self.back_icon_class),
            ),
            Slot::new(
                TOOLBAR_PRINT,
                SlotEdit::Attr("onclick", "window.print()".to_string()),
            ),
            Slot::new(TOOLBAR_PRINT_TEXT, SlotEdit::Text(self.print_text)),
            Slot::new(PRINT_HINT, SlotEdit::Text(self.print_hint)),
            Slot::new(PRINT_HINT, SlotEdit::Attr("aria-hidden", "false".to_string())),
        ]
    }
}

fn push_text(out: &mut Vec<Slot>, mount: &'static str, value: Option<String>) {
    if let Some(text) = value {
        out.push(Slot::new(mount, SlotEdit::Text(text)));
    }
}

fn push_html(out: &mut Vec<Slot>, mount: &'static str, value: Option<String>) {
    if let Some(html) = value {
        out.push(Slot::new(mount, SlotEdit::Html(html)));
    }
}
