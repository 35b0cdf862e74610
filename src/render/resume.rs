// SPDX-License-Identifier: PMPL-1.0-or-later

//! Printable resume page
//!
//! Headings and toolbar labels come from the built-in catalog so the page
//! renders the same whether or not the site ships translation documents.

use super::escape::{escape_attr, escape_html, escape_opt};
use super::slots::ResumeSlots;
use super::{page_href, RenderContext};
use crate::i18n::{resolve_list, resolve_str, resolve_str_or, t, Lang};
use crate::types::{Profile, ProjectLinks, Social};
use serde_json::Value;

const SEP: &str = " · ";

/// Render the resume page for the context's language.
pub fn render_resume(ctx: &RenderContext<'_>) -> ResumeSlots {
    let lang = ctx.lang;
    let name = ctx
        .store
        .profile()
        .and_then(Profile::personal)
        .and_then(|p| resolve_str_or(p, "name", "shortName", lang));
    let title = match name {
        Some(name) => format!("{} | {}", t(lang, "resume.title"), name),
        None => t(lang, "resume.title").to_string(),
    };
    let body = match ctx.store.profile() {
        Some(profile) => render_body(ctx, profile),
        None => format!(
            r#"<p class="text-center text-gray-500">{}</p>"#,
            escape_html(t(lang, "status.loadFailed"))
        ),
    };

    ResumeSlots {
        title,
        body,
        back_href: page_href(&ctx.assets.index_page, lang),
        back_text: t(lang, "resume.back").to_string(),
        back_icon_class: match lang {
            Lang::En => "fas fa-arrow-left".to_string(),
            Lang::Fa => "fas fa-arrow-right".to_string(),
        },
        print_text: t(lang, "resume.print").to_string(),
        print_hint: t(lang, "resume.printHint").to_string(),
    }
}

fn render_body(ctx: &RenderContext<'_>, profile: &Profile) -> String {
    let lang = ctx.lang;
    let mut html = render_header(ctx, profile);

    if let Some(about) = resolve_str(profile.record(), "about", lang) {
        html.push_str(&section(lang, "resume.about", &format!("<p>{}</p>", escape_html(about))));
    }

    let skills = profile.skills(lang);
    if !skills.is_empty() {
        let mut inner = String::new();
        for category in &skills {
            inner.push_str(&format!(
                r#"<div class="skill-cat">{}</div><div class="skill-tags">"#,
                escape_html(category.name)
            ));
            for skill in &category.skills {
                let level = skill
                    .level
                    .map(|l| format!(r#" <span class="skill-level">({})</span>"#, escape_html(l)))
                    .unwrap_or_default();
                inner.push_str(&format!("<span>{}{}</span>", escape_html(skill.name), level));
            }
            inner.push_str("</div>");
        }
        html.push_str(&section(lang, "resume.skills", &inner));
    }

    let jobs = profile.entries("experience");
    if !jobs.is_empty() {
        let inner: String = jobs
            .iter()
            .map(|job| {
                let points: String = resolve_list(job, "points", lang)
                    .into_iter()
                    .map(|pt| format!("<li>{}</li>", escape_html(pt)))
                    .collect();
                format!(
                    r#"<div class="job"><div class="job-title">{}</div><div class="job-meta">{}{}{}</div><ul class="points">{}</ul></div>"#,
                    escape_opt(resolve_str(job, "role", lang)),
                    escape_opt(resolve_str(job, "company", lang)),
                    SEP,
                    escape_opt(resolve_str(job, "period", lang)),
                    points
                )
            })
            .collect();
        html.push_str(&section(lang, "resume.experience", &inner));
    }

    if let Some(projects) = ctx.store.projects() {
        if !projects.featured.is_empty() {
            let inner: String = projects
                .featured
                .iter()
                .map(|project| render_project(lang, project))
                .collect();
            html.push_str(&section(lang, "resume.projects", &inner));
        }
        if !projects.other.is_empty() {
            let items: Vec<String> = projects
                .other
                .iter()
                .map(|project| {
                    let title = escape_opt(resolve_str(project, "title", lang));
                    match ProjectLinks::of(project).github {
                        Some(url) => external_link(&url, &title),
                        None => title,
                    }
                })
                .collect();
            html.push_str(&section(
                lang,
                "resume.otherProjects",
                &format!(r#"<p class="job-meta">{}</p>"#, items.join(SEP)),
            ));
        }
    }

    let education = profile.entries("education");
    if !education.is_empty() {
        let inner: String = education
            .iter()
            .map(|ed| {
                format!(
                    r#"<div class="edu-item"><div class="edu-degree">{}</div><div class="edu-meta">{}{}{}</div></div>"#,
                    escape_opt(resolve_str(ed, "degree", lang)),
                    escape_opt(resolve_str(ed, "institution", lang)),
                    SEP,
                    escape_opt(resolve_str(ed, "period", lang))
                )
            })
            .collect();
        html.push_str(&section(lang, "resume.education", &inner));
    }

    let certs = profile.entries("certifications");
    if !certs.is_empty() {
        let items: String = certs
            .iter()
            .map(|c| {
                let name = escape_opt(resolve_str(c, "name", lang));
                let name = match c.get("url").and_then(Value::as_str).filter(|u| !u.is_empty()) {
                    Some(url) => external_link(url, &name),
                    None => name,
                };
                format!(
                    "<li>{} – {} ({})</li>",
                    name,
                    escape_opt(resolve_str(c, "issuer", lang)),
                    escape_opt(resolve_str(c, "date", lang))
                )
            })
            .collect();
        html.push_str(&section(
            lang,
            "resume.certifications",
            &format!(r#"<ul class="cert-list">{}</ul>"#, items),
        ));
    }

    let languages = profile.entries("languages");
    if !languages.is_empty() {
        let items: String = languages
            .iter()
            .map(|l| {
                let details = resolve_str(l, "details", lang)
                    .map(|d| format!(" – {}", escape_html(d)))
                    .unwrap_or_default();
                format!(
                    "<li><strong>{}</strong>: {}{}</li>",
                    escape_opt(resolve_str(l, "name", lang)),
                    escape_opt(resolve_str(l, "level", lang)),
                    details
                )
            })
            .collect();
        html.push_str(&section(
            lang,
            "resume.languages",
            &format!(r#"<ul class="lang-list">{}</ul>"#, items),
        ));
    }

    html
}

fn render_header(ctx: &RenderContext<'_>, profile: &Profile) -> String {
    let lang = ctx.lang;
    let empty = Value::Null;
    let personal = profile.personal().unwrap_or(&empty);

    let mut html = String::from(r#"<header class="resume-header">"#);
    html.push_str(&format!(
        r#"<img src="{}" alt="" class="resume-photo" width="140" height="140" />"#,
        escape_attr(&ctx.assets.resume_photo)
    ));
    html.push_str(&format!(
        "<h1>{}</h1>",
        escape_opt(resolve_str_or(personal, "name", "shortName", lang))
    ));
    html.push_str(&format!(
        r#"<p class="subtitle">{}</p>"#,
        escape_opt(resolve_str(personal, "title", lang))
    ));

    let mut contact = Vec::new();
    if let Some(email) = resolve_str(personal, "email", Lang::En) {
        contact.push(format!(
            r#"<a href="mailto:{}">{}</a>"#,
            escape_attr(email),
            escape_html(email)
        ));
    }
    if let Some(phone) = resolve_str(personal, "phone", Lang::En) {
        let dial: String = resolve_str(personal, "phoneRaw", Lang::En)
            .unwrap_or(phone)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        contact.push(format!(
            r#"<a href="tel:{}">{}</a>"#,
            escape_attr(&dial),
            escape_html(phone)
        ));
    }
    if let Some(location) = resolve_str(personal, "location", lang) {
        contact.push(escape_html(location));
    }
    if !contact.is_empty() {
        html.push_str(&format!(
            r#"<p class="contact-line">{}</p>"#,
            contact.join(SEP)
        ));
    }

    let socials = header_socials(ctx.store.socials());
    if !socials.is_empty() {
        html.push_str(&format!(
            r#"<p class="contact-line contact-socials">{}</p>"#,
            socials.join(SEP)
        ));
    }
    html.push_str("</header>");
    html
}

/// Social links with a URL, minus the ones the contact line already shows.
fn header_socials(socials: &[Social]) -> Vec<String> {
    socials
        .iter()
        .filter(|s| s.label != "Email" && s.label != "Phone")
        .filter_map(|s| s.link().map(|url| external_link(url, &escape_html(&s.label))))
        .collect()
}

fn render_project(lang: Lang, project: &Value) -> String {
    let mut html = format!(
        r#"<div class="job"><div class="job-title">{}</div>"#,
        escape_opt(resolve_str(project, "title", lang))
    );
    if let Some(desc) = resolve_str(project, "description", lang) {
        html.push_str(&format!(r#"<p class="job-meta">{}</p>"#, escape_html(desc)));
    }
    let techs: Vec<&str> = project
        .get("technologies")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    if !techs.is_empty() {
        let tags: String = techs
            .iter()
            .map(|tech| format!("<span>{}</span>", escape_html(tech)))
            .collect();
        html.push_str(&format!(
            r#"<div class="skill-tags" style="margin-top:0.35rem">{}</div>"#,
            tags
        ));
    }
    let links = ProjectLinks::of(project);
    let anchors: Vec<String> = [
        links.github.as_deref().map(|url| external_link(url, &escape_html(t(lang, "project.github")))),
        links.demo.as_deref().map(|url| external_link(url, &escape_html(t(lang, "project.demo")))),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !anchors.is_empty() {
        html.push_str(&format!(
            r#"<p class="job-meta" style="margin-top:0.35rem">{}</p>"#,
            anchors.join(SEP)
        ));
    }
    html.push_str("</div>");
    html
}

/// `label_html` must already be escaped.
fn external_link(url: &str, label_html: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
        escape_attr(url),
        label_html
    )
}

fn section(lang: Lang, heading_key: &str, inner: &str) -> String {
    format!(
        "<section><h2>{}</h2>{}</section>",
        escape_html(t(lang, heading_key)),
        inner
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::i18n::Translations;
    use crate::render::SiteAssets;
    use crate::types::Projects;
    use serde_json::json;

    fn store(profile: Value) -> ContentStore {
        ContentStore::from_parts(
            Profile::from_value(profile),
            Projects::from_value(&json!([
                { "title": "Folio", "links": { "github": "https://github.com/x/folio" } }
            ])),
            Some(vec![
                Social {
                    label: "Email".into(),
                    url: "mailto:x@y.z".into(),
                    ..Social::default()
                },
                Social {
                    label: "LinkedIn".into(),
                    url: "https://linkedin.com/in/x".into(),
                    ..Social::default()
                },
            ]),
            Translations::default(),
        )
    }

    #[test]
    fn missing_profile_shows_load_failure() {
        let store = ContentStore::default();
        let assets = SiteAssets::default();
        let slots = render_resume(&RenderContext::new(&store, Lang::En, 2026, &assets));
        assert!(slots.body.contains("Could not load resume."));
        assert_eq!(slots.title, "Resume");
    }

    #[test]
    fn persian_resume_labels_and_navigation() {
        let store = store(json!({ "personal": { "name": "Hesam", "name_fa": "حسام" } }));
        let assets = SiteAssets::default();
        let slots = render_resume(&RenderContext::new(&store, Lang::Fa, 2026, &assets));
        assert_eq!(slots.title, "رزومه | حسام");
        assert_eq!(slots.back_href, "index.html");
        assert_eq!(slots.back_icon_class, "fas fa-arrow-right");
        assert!(slots.body.contains("<h2>پروژه‌ها</h2>"));
        assert!(slots.body.contains("گیت‌هاب"));
    }

    #[test]
    fn english_resume_links_back_with_lang() {
        let store = store(json!({ "personal": { "name": "Hesam" } }));
        let assets = SiteAssets::default();
        let slots = render_resume(&RenderContext::new(&store, Lang::En, 2026, &assets));
        assert_eq!(slots.back_href, "index.html?lang=en");
        assert_eq!(slots.back_icon_class, "fas fa-arrow-left");
    }

    #[test]
    fn header_skips_email_social_and_blank_fields() {
        let store = store(json!({
            "personal": { "name": "Hesam", "phone": "+98 912 000", "email": "a@b.c" }
        }));
        let assets = SiteAssets::default();
        let slots = render_resume(&RenderContext::new(&store, Lang::En, 2026, &assets));
        assert!(slots.body.contains(r#"href="tel:+98912000""#));
        assert!(slots.body.contains("LinkedIn"));
        assert!(!slots.body.contains("mailto:x@y.z"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let store = store(json!({ "skills": {}, "experience": [], "education": [] }));
        let assets = SiteAssets::default();
        let slots = render_resume(&RenderContext::new(&store, Lang::En, 2026, &assets));
        assert!(!slots.body.contains("<h2>Skills</h2>"));
        assert!(!slots.body.contains("<h2>Experience</h2>"));
        assert!(!slots.body.contains("<h2>Education</h2>"));
        assert!(!slots.body.contains("<h2>About</h2>"));
    }
}
