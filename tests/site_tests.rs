// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end site builds against an on-disk site

use folio::build::{build_site, render_to_string};
use folio::config::SiteConfig;
use folio::content::{ContentStore, DirectorySource, DocumentKind};
use folio::dom::Document;
use folio::i18n::Lang;
use folio::switch::Page;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INDEX: &str = r##"<!DOCTYPE html>
<html lang="fa" dir="rtl">
<head><title>Portfolio</title></head>
<body>
<nav><a id="lang-switch-fa" class="px-2">FA</a><a id="lang-switch-en" class="px-2">EN</a>
<a href="#about" data-i18n="nav.about">About</a></nav>
<main id="app-content">
<div id="hero-status" class="hidden"></div>
<h1 id="hero-name"></h1><p id="hero-title"></p><p id="hero-tagline"></p>
<a id="hero-view-work" href="#projects"></a><a id="hero-contact-me" href="#contact"></a>
<div id="hero-socials"></div>
<p id="about-text"></p>
<div id="skills-container"></div>
<div id="experience-container"></div>
<div id="projects-grid"></div>
<div id="projects-other-container" class="hidden"><div id="projects-other"></div></div>
<div id="education-list"></div><ul id="certifications-list"></ul><ul id="languages-list"></ul>
<div id="contact-links"></div>
<input id="contact-name" data-i18n-placeholder="contact.name" placeholder="">
<a id="resume-download" href="resume.html">CV</a>
<footer><p id="footer-text"></p></footer>
</main>
</body>
</html>
"##;

const RESUME: &str = r#"<!DOCTYPE html>
<html lang="fa" dir="rtl">
<head><title>Resume</title></head>
<body>
<div class="toolbar">
<a id="toolbar-back" href="index.html"><i id="toolbar-back-icon" class="fas"></i><span id="toolbar-back-text"></span></a>
<button id="toolbar-print"><span id="toolbar-print-text"></span></button>
<p id="resume-print-hint" aria-hidden="true"></p>
</div>
<main id="resume-body"></main>
</body>
</html>
"#;

const PROFILE: &str = r#"{
  "personal": {
    "name": "Sara Ahmadi",
    "name_fa": "سارا احمدی",
    "title": "Backend Engineer",
    "title_fa": "مهندس بک‌اند",
    "email": "sara@example.com",
    "phone": "+98 912 000 0000",
    "location": "Tehran",
    "availability": "Open to work"
  },
  "about": "I build <fast> services & tools.",
  "about_fa": "سرویس‌های سریع می‌سازم.",
  "skills": {
    "Backend": [{"name": "Rust", "level": "Advanced"}, "Go"],
    "Frontend": ["TypeScript"]
  },
  "experience": [
    {"role": "Engineer", "company": "Acme", "period": "2021-2024", "points": ["Shipped things"]}
  ],
  "education": [{"degree": "BSc", "institution": "Sharif", "period": "2016-2020"}],
  "certifications": [{"name": "CKA", "issuer": "CNCF", "date": "2023", "url": "https://cncf.io"}],
  "languages": [{"name": "English", "level": "Fluent", "name_fa": "انگلیسی", "level_fa": "مسلط"}]
}"#;

const PROJECTS: &str = r#"{
  "featured": [
    {"title": "Queue", "description": "A job queue", "technologies": ["Rust"], "links": {"github": "https://github.com/x/queue"}},
    {"title": "Notes", "description": "Notes app", "technologies": [], "links": {"github": "  ", "demo": ""}}
  ],
  "other": [{"title": "Dotfiles", "links": {"github": "https://github.com/x/dotfiles"}}]
}"#;

const SOCIALS: &str = r#"[
  {"label": "GitHub", "url": "https://github.com/x", "icon": "github", "showInHero": true, "showInContact": true},
  {"label": "Email", "url": "mailto:sara@example.com", "icon": "envelope", "showInHero": false, "showInContact": true},
  {"label": "Blank", "url": "", "icon": "link", "showInHero": true, "showInContact": true}
]"#;

const LANG_EN: &str = r#"{
  "nav": {"about": "About"},
  "contact": {"name": "Your name"},
  "footer": "© {year} Sara. All rights reserved.",
  "typingPhrases": ["Rust developer", "API designer"]
}"#;

const LANG_FA: &str = r#"{
  "nav": {"about": "درباره من"},
  "contact": {"name": "نام شما"},
  "footer": "© {year} سارا",
  "typingPhrases": ["توسعه‌دهنده راست"]
}"#;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn create_site(dir: &TempDir) -> SiteConfig {
    let root = dir.path();
    write(root, "index.html", INDEX);
    write(root, "resume.html", RESUME);
    write(root, "data/profile.json", PROFILE);
    write(root, "data/projects.json", PROJECTS);
    write(root, "data/socials.json", SOCIALS);
    write(root, "data/lang-en.json", LANG_EN);
    write(root, "data/lang-fa.json", LANG_FA);
    write(root, "assets/images/project-placeholder.svg", "<svg/>");
    write(root, "assets/css/site.css", "body{}");
    SiteConfig::discover(root, None).unwrap()
}

fn read(path: &Path) -> Document {
    Document::new(fs::read_to_string(path).unwrap())
}

#[test]
fn test_build_writes_both_languages() {
    let dir = TempDir::new().unwrap();
    let config = create_site(&dir);
    let report = build_site(&config, &[Page::Index, Page::Resume], 2026).unwrap();

    assert_eq!(report.pages.len(), 4);
    assert!(report.missing_documents.is_empty());
    assert_eq!(report.assets_copied, 2);
    assert!(config.output_dir.join("assets/css/site.css").is_file());

    let fa = read(&config.output_dir.join("index.html"));
    assert_eq!(fa.root_attr("lang").as_deref(), Some("fa"));
    assert_eq!(fa.root_attr("dir").as_deref(), Some("rtl"));
    assert_eq!(fa.inner_html("hero-name"), Some("سارا احمدی"));
    assert_eq!(fa.attr("resume-download", "href").as_deref(), Some("resume.html"));
    assert!(fa.html().contains(r##"<a href="#about" data-i18n="nav.about">درباره من</a>"##));

    let en = read(&config.output_dir.join("index.en.html"));
    assert_eq!(en.root_attr("dir").as_deref(), Some("ltr"));
    assert_eq!(en.inner_html("hero-name"), Some("Sara Ahmadi"));
    assert_eq!(en.inner_html("hero-tagline"), Some("Rust developer"));
    assert_eq!(en.attr("contact-name", "placeholder").as_deref(), Some("Your name"));
    assert_eq!(
        en.attr("resume-download", "href").as_deref(),
        Some("resume.html?lang=en")
    );
    assert_eq!(
        en.inner_html("footer-text"),
        Some("© 2026 Sara. All rights reserved.")
    );
    assert!(en.has_class("lang-switch-en", "text-accent"));
    assert!(en.has_class("lang-switch-fa", "text-gray-400"));
}

#[test]
fn test_about_text_is_escaped() {
    let dir = TempDir::new().unwrap();
    let config = create_site(&dir);
    let store = ContentStore::load(&DirectorySource::new(&config.data_dir));
    let html = render_to_string(&store, &config, Page::Index, Lang::En, 2026).unwrap();
    let doc = Document::new(html);
    assert_eq!(
        doc.inner_html("about-text"),
        Some("I build &lt;fast&gt; services &amp; tools.")
    );
}

#[test]
fn test_project_links_and_placeholder() {
    let dir = TempDir::new().unwrap();
    let config = create_site(&dir);
    let store = ContentStore::load(&DirectorySource::new(&config.data_dir));
    let html = render_to_string(&store, &config, Page::Index, Lang::En, 2026).unwrap();
    let doc = Document::new(html);
    let grid = doc.inner_html("projects-grid").unwrap();

    let cards: Vec<&str> = grid.split("<article").skip(1).collect();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].matches("<a ").count(), 1);
    assert!(!cards[0].contains("Links coming soon"));
    assert_eq!(cards[1].matches("<a ").count(), 0);
    assert!(cards[1].contains("Links coming soon"));
    assert!(cards[1].contains("assets/images/project-placeholder.svg"));

    assert!(!doc.has_class("projects-other-container", "hidden"));
    assert!(doc
        .inner_html("projects-other")
        .unwrap()
        .contains("https://github.com/x/dotfiles"));
}

#[test]
fn test_blank_social_urls_are_not_rendered() {
    let dir = TempDir::new().unwrap();
    let config = create_site(&dir);
    let store = ContentStore::load(&DirectorySource::new(&config.data_dir));
    let html = render_to_string(&store, &config, Page::Index, Lang::En, 2026).unwrap();
    let doc = Document::new(html);
    let hero = doc.inner_html("hero-socials").unwrap();
    assert_eq!(hero.matches("<a ").count(), 1);
    assert!(hero.contains("fa-brands fa-github"));
    let contact = doc.inner_html("contact-links").unwrap();
    assert_eq!(contact.matches("<a ").count(), 2);
    assert!(contact.contains("fa-solid fa-envelope"));
}

#[test]
fn test_empty_skills_leave_skeleton_untouched() {
    let dir = TempDir::new().unwrap();
    let config = create_site(&dir);
    write(
        dir.path(),
        "data/profile.json",
        r#"{"personal": {"name": "Sara"}, "skills": {}}"#,
    );
    let store = ContentStore::load(&DirectorySource::new(&config.data_dir));
    let html = render_to_string(&store, &config, Page::Index, Lang::En, 2026).unwrap();
    let doc = Document::new(html);
    assert_eq!(doc.inner_html("skills-container"), Some(""));
    assert_eq!(
        doc.inner_html("about-text"),
        Some("Full Stack Developer. Backend &amp; frontend development.")
    );
    assert_eq!(doc.inner_html("hero-title"), Some("Full Stack Developer"));
}

#[test]
fn test_resume_pages() {
    let dir = TempDir::new().unwrap();
    let config = create_site(&dir);
    build_site(&config, &[Page::Resume], 2026).unwrap();

    let en = read(&config.output_dir.join("resume.en.html"));
    assert_eq!(en.title(), Some("Resume | Sara Ahmadi"));
    assert_eq!(en.attr("toolbar-back", "href").as_deref(), Some("index.html?lang=en"));
    assert_eq!(
        en.attr("toolbar-back-icon", "class").as_deref(),
        Some("fas fa-arrow-left")
    );
    assert_eq!(en.attr("toolbar-print", "onclick").as_deref(), Some("window.print()"));
    let body = en.inner_html("resume-body").unwrap();
    assert!(body.contains("tel:+989120000000"));
    assert!(body.contains("https://github.com/x"));
    assert!(!body.contains("mailto:sara@example.com\" target"));

    let fa = read(&config.output_dir.join("resume.html"));
    assert_eq!(fa.attr("toolbar-back", "href").as_deref(), Some("index.html"));
    assert_eq!(
        fa.attr("toolbar-back-icon", "class").as_deref(),
        Some("fas fa-arrow-right")
    );
    assert!(fa.inner_html("resume-body").unwrap().contains("انگلیسی"));
}

#[test]
fn test_missing_profile_degrades() {
    let dir = TempDir::new().unwrap();
    let config = create_site(&dir);
    fs::remove_file(config.data_dir.join("profile.json")).unwrap();
    write(dir.path(), "data/projects.json", "{ not json");

    let report = build_site(&config, &[Page::Index, Page::Resume], 2026).unwrap();
    assert_eq!(
        report.missing_documents,
        vec![DocumentKind::Profile, DocumentKind::Projects]
    );
    assert_eq!(report.assessment.warnings.len(), 2);

    let resume = read(&config.output_dir.join("resume.en.html"));
    assert!(resume
        .inner_html("resume-body")
        .unwrap()
        .contains("Could not load resume."));

    let index = read(&config.output_dir.join("index.en.html"));
    assert_eq!(index.inner_html("hero-name"), Some(""));
    assert!(index.inner_html("hero-socials").unwrap().contains("github"));
}

#[test]
fn test_missing_data_dir_fails_build() {
    let dir = TempDir::new().unwrap();
    let config = SiteConfig::discover(dir.path(), None).unwrap();
    let err = build_site(&config, &[Page::Index], 2026).unwrap_err();
    assert!(err.to_string().contains("data directory not found"));
}

#[test]
fn test_skeleton_without_mounts_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let config = create_site(&dir);
    write(
        dir.path(),
        "index.html",
        r#"<html><body><p id="about-text"></p></body></html>"#,
    );
    let report = build_site(&config, &[Page::Index], 2026).unwrap();
    let fa = &report.pages[0];
    assert!(fa.skipped.contains(&"hero-name".to_string()));
    assert!(!fa.skipped.contains(&"about-text".to_string()));
    assert!(!report.assessment.notes.is_empty());
}
