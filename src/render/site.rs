// SPDX-License-Identifier: PMPL-1.0-or-later

//! Index page sections
//!
//! One function per section. Each returns `None` when its data is absent or
//! empty so the mount point is left as the skeleton has it.

use super::escape::{escape_attr, escape_html, escape_opt};
use super::slots::SiteSlots;
use super::{page_href, RenderContext};
use crate::i18n::{resolve_list, resolve_str, resolve_str_or, Lang};
use crate::types::{Profile, ProjectLinks, Social};
use serde_json::Value;

const BRAND_ICONS: &[&str] = &["github", "linkedin", "twitter", "instagram", "telegram", "whatsapp"];

/// Render every section of the index page.
pub fn render_site(ctx: &RenderContext<'_>) -> SiteSlots {
    let lang = ctx.lang;
    let mut slots = SiteSlots {
        resume_href: page_href(&ctx.assets.resume_page, lang),
        footer: footer_text(ctx),
        hero_socials: render_hero_socials(ctx.store.socials()),
        ..SiteSlots::default()
    };

    if let Some(profile) = ctx.store.profile() {
        if let Some(personal) = profile.personal() {
            slots.hero_status = render_hero_status(personal, lang);
            slots.hero_name = resolve_str_or(personal, "name", "shortName", lang).map(str::to_string);
            slots.hero_title = Some(
                resolve_str(personal, "title", lang)
                    .map(str::to_string)
                    .unwrap_or_else(|| ctx.t("fallback.title")),
            );
            slots.hero_view_work = Some(ctx.t("hero.viewWork"));
            slots.hero_contact_me = Some(ctx.t("hero.contactMe"));
        }
        slots.about = Some(
            resolve_str(profile.record(), "about", lang)
                .map(str::to_string)
                .unwrap_or_else(|| ctx.t("fallback.about")),
        );
        slots.skills = render_skills(profile, lang);
        slots.experience = render_experience(profile, lang);
        slots.education = render_education(ctx, profile);
        slots.certifications = render_certifications(profile, lang);
        slots.languages = render_languages(profile, lang);
        slots.contact_links = render_contact(ctx.store.socials());
    }

    if let Some(projects) = ctx.store.projects() {
        slots.projects = render_projects(ctx, &projects.featured);
        slots.other_projects = render_other_projects(&projects.other, lang);
    }

    slots
}

/// Font Awesome classes for a social icon name.
pub fn icon_class(icon: &str) -> String {
    let prefix = if BRAND_ICONS.contains(&icon) {
        "fa-brands"
    } else {
        "fa-solid"
    };
    format!("{} fa-{}", prefix, icon)
}

pub fn render_hero_status(personal: &Value, lang: Lang) -> Option<String> {
    let availability = resolve_str(personal, "availability", lang)?;
    Some(format!(
        r#"<span class="status-badge"><span class="status-dot" aria-hidden="true"></span>{}</span>"#,
        escape_html(availability)
    ))
}

pub fn render_hero_socials(socials: &[Social]) -> Option<String> {
    if socials.is_empty() {
        return None;
    }
    let items: String = socials
        .iter()
        .filter(|s| s.show_in_hero)
        .filter_map(|s| {
            let url = s.link()?;
            Some(format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-gray-400 hover:text-accent transition" aria-label="{}"><i class="{} fa-lg" aria-hidden="true"></i></a>"#,
                escape_attr(url),
                escape_attr(&s.label),
                escape_attr(&icon_class(&s.icon))
            ))
        })
        .collect();
    Some(items)
}

pub fn render_skills(profile: &Profile, lang: Lang) -> Option<String> {
    let categories = profile.skills(lang);
    if categories.is_empty() {
        return None;
    }
    let html = categories
        .iter()
        .map(|category| {
            let tags: String = category
                .skills
                .iter()
                .map(|skill| {
                    let level = skill
                        .level
                        .map(|l| {
                            format!(
                                r#"<span class="skill-level text-accent/80 text-xs font-medium ml-1">({})</span>"#,
                                escape_html(l)
                            )
                        })
                        .unwrap_or_default();
                    format!(
                        r#"<span class="skill-tag px-3 py-1 rounded-full bg-dark-card border border-gray-700 text-gray-300 text-sm inline-flex items-center">{}{}</span>"#,
                        escape_html(skill.name),
                        level
                    )
                })
                .collect();
            format!(
                r#"<div><h3 class="text-sm font-semibold text-accent uppercase tracking-wider mb-3">{}</h3><div class="flex flex-wrap gap-2">{}</div></div>"#,
                escape_html(category.name),
                tags
            )
        })
        .collect();
    Some(html)
}

pub fn render_experience(profile: &Profile, lang: Lang) -> Option<String> {
    let jobs = profile.entries("experience");
    if jobs.is_empty() {
        return None;
    }
    let mut html = String::from(r#"<div class="timeline-line" aria-hidden="true"></div>"#);
    for job in jobs {
        let points: String = resolve_list(job, "points", lang)
            .into_iter()
            .map(|pt| format!("<li>{}</li>", escape_html(pt)))
            .collect();
        html.push_str(&format!(
            concat!(
                r#"<div class="relative pl-6 sm:pl-8 rtl:pl-0 rtl:pr-6 rtl:sm:pr-8">"#,
                r#"<div class="absolute left-0 rtl:left-auto rtl:right-0 w-3 h-3 rounded-full bg-accent -translate-x-[7px] rtl:translate-x-[7px] top-1.5" aria-hidden="true"></div>"#,
                r#"<div class="bg-dark-card border border-gray-700 rounded-lg p-4 sm:p-5 card-hover">"#,
                r#"<p class="text-white font-semibold">{}</p>"#,
                r#"<p class="text-accent text-sm">{} · {}</p>"#,
                r#"<ul class="mt-3 space-y-1 text-gray-400 text-sm list-disc list-inside">{}</ul>"#,
                "</div></div>"
            ),
            escape_opt(resolve_str(job, "role", lang)),
            escape_opt(resolve_str(job, "company", lang)),
            escape_opt(resolve_str(job, "period", lang)),
            points
        ));
    }
    Some(html)
}

pub fn render_projects(ctx: &RenderContext<'_>, featured: &[Value]) -> Option<String> {
    if featured.is_empty() {
        return None;
    }
    let lang = ctx.lang;
    let html = featured
        .iter()
        .map(|project| {
            let image = project
                .get("image")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(ctx.assets.placeholder_image.as_str());
            let techs: String = project
                .get("technologies")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(|tech| {
                            format!(
                                r#"<span class="px-2 py-0.5 rounded bg-accent-muted text-accent text-xs font-mono">{}</span>"#,
                                escape_html(tech)
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            format!(
                concat!(
                    r#"<article class="bg-dark-card border border-gray-700 rounded-xl overflow-hidden card-hover flex flex-col">"#,
                    r#"<div class="aspect-video bg-dark-secondary flex items-center justify-center text-accent/60">"#,
                    r#"<img src="{}" alt="" class="w-full h-full object-cover" width="400" height="240" loading="lazy" />"#,
                    "</div>",
                    r#"<div class="p-4 flex-1 flex flex-col">"#,
                    r#"<h3 class="text-lg font-semibold text-white mb-2">{}</h3>"#,
                    r#"<p class="text-gray-400 text-sm flex-1 mb-3">{}</p>"#,
                    r#"<div class="flex flex-wrap gap-2 mb-4">{}</div>"#,
                    r#"<div class="flex flex-wrap gap-3">{}</div>"#,
                    "</div></article>"
                ),
                escape_attr(image),
                escape_opt(resolve_str(project, "title", lang)),
                escape_opt(resolve_str(project, "description", lang)),
                techs,
                render_project_links(ctx, &ProjectLinks::of(project))
            )
        })
        .collect();
    Some(html)
}

/// GitHub link, demo link, both (with a separator), or the placeholder.
pub fn render_project_links(ctx: &RenderContext<'_>, links: &ProjectLinks) -> String {
    let anchor = |url: &str, label: String| {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-2 px-4 py-2 rounded-lg border border-accent text-accent text-sm font-medium hover:bg-accent hover:text-white transition-colors">{}</a>"#,
            escape_attr(url),
            escape_html(&label)
        )
    };
    let rendered: Vec<String> = [
        links.github.as_deref().map(|url| anchor(url, ctx.t("project.github"))),
        links.demo.as_deref().map(|url| anchor(url, ctx.t("project.demo"))),
    ]
    .into_iter()
    .flatten()
    .collect();

    if rendered.is_empty() {
        format!(
            r#"<span class="text-gray-500 text-sm">{}</span>"#,
            escape_html(&ctx.t("project.linksPlaceholder"))
        )
    } else {
        rendered.join(r#"<span class="link-sep text-gray-600" aria-hidden="true">·</span>"#)
    }
}

pub fn render_other_projects(other: &[Value], lang: Lang) -> Option<String> {
    if other.is_empty() {
        return None;
    }
    let html = other
        .iter()
        .map(|project| {
            let title = escape_opt(resolve_str(project, "title", lang));
            match ProjectLinks::of(project).github {
                Some(url) => format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-accent hover:underline">{}</a>"#,
                    escape_attr(&url),
                    title
                ),
                None => format!(r#"<span class="text-gray-500">{}</span>"#, title),
            }
        })
        .collect();
    Some(html)
}

pub fn render_education(ctx: &RenderContext<'_>, profile: &Profile) -> Option<String> {
    let entries = profile.entries("education");
    if entries.is_empty() {
        return None;
    }
    let lang = ctx.lang;
    let items: String = entries
        .iter()
        .map(|ed| {
            format!(
                r#"<li><strong class="text-gray-300">{}</strong> – {} ({})</li>"#,
                escape_opt(resolve_str(ed, "degree", lang)),
                escape_opt(resolve_str(ed, "institution", lang)),
                escape_opt(resolve_str(ed, "period", lang))
            )
        })
        .collect();
    Some(format!(
        r#"<h3 class="text-lg font-semibold text-white mb-4">{}</h3><ul class="space-y-3 text-gray-400">{}</ul>"#,
        escape_html(&ctx.t("sections.educationTitle")),
        items
    ))
}

pub fn render_certifications(profile: &Profile, lang: Lang) -> Option<String> {
    let certs = profile.entries("certifications");
    if certs.is_empty() {
        return None;
    }
    let html = certs
        .iter()
        .map(|c| {
            let name = escape_opt(resolve_str(c, "name", lang));
            let name = match c.get("url").and_then(Value::as_str).filter(|u| !u.is_empty()) {
                Some(url) => format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-accent hover:underline">{}</a>"#,
                    escape_attr(url),
                    name
                ),
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
    Some(html)
}

pub fn render_languages(profile: &Profile, lang: Lang) -> Option<String> {
    let langs = profile.entries("languages");
    if langs.is_empty() {
        return None;
    }
    let html = langs
        .iter()
        .map(|l| {
            let details = resolve_str(l, "details", lang)
                .map(|d| format!(" – {}", escape_html(d)))
                .unwrap_or_default();
            format!(
                r#"<li><strong class="text-gray-300">{}</strong>: {}{}</li>"#,
                escape_opt(resolve_str(l, "name", lang)),
                escape_opt(resolve_str(l, "level", lang)),
                details
            )
        })
        .collect();
    Some(html)
}

pub fn render_contact(socials: &[Social]) -> Option<String> {
    if socials.is_empty() {
        return None;
    }
    let html = socials
        .iter()
        .filter(|s| s.show_in_contact)
        .filter_map(|s| {
            let url = s.link()?;
            Some(format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="flex items-center gap-2 text-gray-400 hover:text-accent transition"><i class="{} w-5" aria-hidden="true"></i><span>{}</span></a>"#,
                escape_attr(url),
                escape_attr(&icon_class(&s.icon)),
                escape_html(&s.label)
            ))
        })
        .collect();
    Some(html)
}

pub fn footer_text(ctx: &RenderContext<'_>) -> String {
    ctx.t("footer").replace("{year}", &ctx.year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::i18n::Translations;
    use crate::render::SiteAssets;
    use serde_json::json;

    fn with_ctx<R>(lang: Lang, f: impl FnOnce(&RenderContext<'_>) -> R) -> R {
        let store = ContentStore::default();
        let assets = SiteAssets::default();
        let ctx = RenderContext::new(&store, lang, 2026, &assets);
        f(&ctx)
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn github_only_renders_one_link_and_no_placeholder() {
        with_ctx(Lang::En, |ctx| {
            let links = ProjectLinks::of(&json!({ "links": { "github": "https://github.com/x/y" } }));
            let html = render_project_links(ctx, &links);
            assert_eq!(count(&html, "<a "), 1);
            assert!(!html.contains("Links coming soon"));
            assert!(!html.contains("link-sep"));
        });
    }

    #[test]
    fn no_links_renders_placeholder_only() {
        with_ctx(Lang::En, |ctx| {
            let html = render_project_links(ctx, &ProjectLinks::default());
            assert_eq!(count(&html, "<a "), 0);
            assert!(html.contains("Links coming soon"));
        });
    }

    #[test]
    fn both_links_are_separated() {
        with_ctx(Lang::Fa, |ctx| {
            let links = ProjectLinks {
                github: Some("https://g".into()),
                demo: Some("https://d".into()),
            };
            let html = render_project_links(ctx, &links);
            assert_eq!(count(&html, "<a "), 2);
            assert_eq!(count(&html, "link-sep"), 1);
            assert!(html.contains("گیت‌هاب"));
        });
    }

    #[test]
    fn empty_skills_render_nothing() {
        let profile = Profile::from_value(json!({ "skills": {} })).unwrap();
        assert_eq!(render_skills(&profile, Lang::En), None);
    }

    #[test]
    fn skill_levels_are_shown() {
        let profile =
            Profile::from_value(json!({ "skills": { "Lang": [{ "name": "Rust", "level": "Expert" }] } }))
                .unwrap();
        let html = render_skills(&profile, Lang::En).unwrap();
        assert!(html.contains("Rust<span class=\"skill-level"));
        assert!(html.contains("(Expert)"));
    }

    #[test]
    fn experience_uses_persian_overrides_per_field() {
        let profile = Profile::from_value(json!({
            "experience": [{
                "role": "Developer", "role_fa": "توسعه‌دهنده",
                "company": "Acme", "period": "2020",
                "points": ["Built <things>"]
            }]
        }))
        .unwrap();
        let html = render_experience(&profile, Lang::Fa).unwrap();
        assert!(html.contains("توسعه‌دهنده"));
        assert!(html.contains("Acme · 2020"));
        assert!(html.contains("<li>Built &lt;things&gt;</li>"));
    }

    #[test]
    fn socials_filtered_by_context() {
        let socials = vec![
            Social {
                label: "GitHub".into(),
                url: "https://github.com/x".into(),
                icon: "github".into(),
                show_in_hero: true,
                show_in_contact: false,
            },
            Social {
                label: "Email".into(),
                url: "mailto:a@b.c".into(),
                icon: "envelope".into(),
                show_in_hero: false,
                show_in_contact: true,
            },
        ];
        let hero = render_hero_socials(&socials).unwrap();
        assert!(hero.contains("fa-brands fa-github"));
        assert!(!hero.contains("mailto:"));
        let contact = render_contact(&socials).unwrap();
        assert!(contact.contains("fa-solid fa-envelope"));
        assert!(!contact.contains("github.com"));
    }

    #[test]
    fn footer_year_substituted() {
        let store = ContentStore::from_parts(
            None,
            None,
            None,
            Translations::new(Some(json!({ "footer": "© {year} Me" })), None),
        );
        let assets = SiteAssets::default();
        let ctx = RenderContext::new(&store, Lang::En, 2031, &assets);
        assert_eq!(footer_text(&ctx), "© 2031 Me");
    }

    #[test]
    fn other_projects_link_title_when_github_present() {
        let html = render_other_projects(
            &[json!({ "title": "A", "links": { "github": "https://g/a" } }), json!({ "title": "B" })],
            Lang::En,
        )
        .unwrap();
        assert!(html.contains(r#"href="https://g/a""#));
        assert!(html.contains(r#"<span class="text-gray-500">B</span>"#));
    }
}
