// SPDX-License-Identifier: PMPL-1.0-or-later

//! A page session: current language, document and pending transitions

use super::controller::{LanguageSwitch, SwitchEvent, SwitchRequest};
use super::location::{resume_lang, History, Location};
use crate::content::ContentStore;
use crate::dom::{ApplyOutcome, Document};
use crate::i18n::Lang;
use crate::render::{mounts, render_resume, render_site, RenderContext, SiteAssets};
use crate::typing::TypingEffect;
use clap::ValueEnum;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

pub const SWITCHING_CLASS: &str = "lang-switching";
pub const ACTIVE_CLASS: &str = "text-accent";
pub const INACTIVE_CLASS: &str = "text-gray-400";
pub const TYPING_PHRASES_KEY: &str = "typingPhrases";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Index,
    Resume,
}

/// A fully rendered page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub document: Document,
    pub outcome: ApplyOutcome,
}

/// Render `page` in `lang` onto a copy of `skeleton`.
pub fn render_page(
    skeleton: &Document,
    page: Page,
    ctx: &RenderContext<'_>,
) -> RenderedPage {
    let lang = ctx.lang;
    let mut document = skeleton.clone();
    document.set_root_lang(lang);
    document.apply_translations(ctx.store.translations(), lang);

    let outcome = match page {
        Page::Index => {
            let outcome = document.apply(render_site(ctx).into_slots());
            let phrases = ctx.store.translations().list(lang, TYPING_PHRASES_KEY);
            if let Some(first) = phrases.first() {
                document.set_text(mounts::HERO_TAGLINE, first);
            }
            outcome
        }
        Page::Resume => {
            let slots = render_resume(ctx);
            document.set_title(&slots.title);
            document.apply(slots.into_slots())
        }
    };
    set_indicators(&mut document, lang);
    RenderedPage { document, outcome }
}

fn set_indicators(document: &mut Document, active: Lang) {
    for (id, lang) in mounts::LANG_SWITCHES {
        document.toggle_class(id, ACTIVE_CLASS, *lang == active);
        document.toggle_class(id, INACTIVE_CLASS, *lang != active);
    }
}

/// One open page. Owns the document; every mutation goes through here.
#[derive(Debug, Clone)]
pub struct Session {
    store: ContentStore,
    assets: SiteAssets,
    year: i32,
    page: Page,
    skeleton: Document,
    document: Document,
    history: History,
    switch: LanguageSwitch,
    typing: TypingEffect,
}

impl Session {
    /// Open `page` at `location`. The language comes from the location, or
    /// for the resume page also from `referrer`.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        store: ContentStore,
        skeleton: Document,
        page: Page,
        location: Location,
        referrer: Option<&str>,
        year: i32,
        assets: SiteAssets,
        now: Duration,
    ) -> Self {
        let lang = match page {
            Page::Index => location.lang(),
            Page::Resume => resume_lang(&location, referrer),
        };
        let mut session = Self {
            store,
            assets,
            year,
            page,
            document: skeleton.clone(),
            skeleton,
            history: History::new(location),
            switch: LanguageSwitch::new(lang),
            typing: TypingEffect::new(),
        };
        session.show(lang, now);
        session
    }

    pub fn lang(&self) -> Lang {
        self.switch.current()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_switching(&self) -> bool {
        self.switch.is_switching()
    }

    pub fn typing(&self) -> &TypingEffect {
        &self.typing
    }

    /// A click on a language control.
    pub fn request_switch(&mut self, target: Lang, now: Duration) -> SwitchRequest {
        let outcome = self.switch.request(target, now);
        match outcome {
            SwitchRequest::Started => {
                self.document
                    .toggle_class(mounts::APP_CONTENT, SWITCHING_CLASS, true);
                set_indicators(&mut self.document, self.switch.indicator());
            }
            SwitchRequest::Ignored(reason) => {
                debug!(?target, ?reason, "language switch ignored");
            }
        }
        outcome
    }

    /// One frame: advance the switch transition and the typing effect.
    pub fn tick(&mut self, now: Duration) -> Option<SwitchEvent> {
        let event = self.switch.tick(now);
        match event {
            Some(SwitchEvent::Swap(lang)) => {
                self.show(lang, now);
                self.document
                    .toggle_class(mounts::APP_CONTENT, SWITCHING_CLASS, true);
            }
            Some(SwitchEvent::Settled) => {
                self.document
                    .toggle_class(mounts::APP_CONTENT, SWITCHING_CLASS, false);
            }
            None => {}
        }
        if let Some(text) = self.typing.poll(now) {
            self.document.set_text(mounts::HERO_TAGLINE, &text);
        }
        event
    }

    /// Re-render everything in `lang` from the pristine skeleton.
    fn show(&mut self, lang: Lang, now: Duration) {
        let ctx = RenderContext::new(&self.store, lang, self.year, &self.assets);
        let rendered = render_page(&self.skeleton, self.page, &ctx);
        if !rendered.outcome.skipped.is_empty() {
            debug!(skipped = ?rendered.outcome.skipped, "mount points not in skeleton");
        }
        self.document = rendered.document;

        if self.page == Page::Index {
            let next = self.history.current().with_lang(lang);
            self.history.replace_state(next);
            let phrases = self.store.translations().list(lang, TYPING_PHRASES_KEY);
            self.typing.restart(phrases, now);
            if self.typing.is_active() {
                self.document
                    .set_text(mounts::HERO_TAGLINE, &self.typing.text());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DocumentKind, MemorySource};

    const SKELETON: &str = r#"<html lang="fa" dir="rtl"><head><title>x</title></head><body>
<a id="lang-switch-fa" class="px-2">FA</a><a id="lang-switch-en" class="px-2">EN</a>
<main id="app-content"><h1 id="hero-name"></h1><p id="hero-tagline"></p>
<p id="about-text"></p><footer id="footer-text"></footer></main></body></html>"#;

    fn store() -> ContentStore {
        let source = MemorySource::new()
            .with(
                DocumentKind::Profile,
                r#"{"personal":{"name":"Sam","name_fa":"سام"},"about":"Hi","about_fa":"سلام"}"#,
            )
            .with(
                DocumentKind::TranslationsEn,
                r#"{"typingPhrases":["Builder"],"footer":"© {year}"}"#,
            )
            .with(DocumentKind::TranslationsFa, r#"{"typingPhrases":["سازنده"]}"#);
        ContentStore::load(&source)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn open(url: &str) -> Session {
        Session::open(
            store(),
            Document::new(SKELETON),
            Page::Index,
            Location::parse(url),
            None,
            2026,
            SiteAssets::default(),
            ms(0),
        )
    }

    #[test]
    fn opens_in_url_language() {
        let session = open("index.html?lang=en");
        assert_eq!(session.lang(), Lang::En);
        assert_eq!(session.document().root_attr("dir").as_deref(), Some("ltr"));
        assert_eq!(session.document().inner_html("hero-name"), Some("Sam"));
        assert!(session.document().has_class("lang-switch-en", ACTIVE_CLASS));
        assert!(session.document().has_class("lang-switch-fa", INACTIVE_CLASS));
    }

    #[test]
    fn switch_swaps_after_fade_and_rewrites_url() {
        let mut session = open("index.html");
        assert_eq!(session.lang(), Lang::Fa);
        assert_eq!(session.request_switch(Lang::En, ms(1000)), SwitchRequest::Started);
        assert!(session.document().has_class("app-content", SWITCHING_CLASS));
        assert!(session.document().has_class("lang-switch-en", ACTIVE_CLASS));
        assert_eq!(session.document().inner_html("about-text"), Some("سلام"));

        session.tick(ms(1280));
        assert_eq!(session.lang(), Lang::En);
        assert_eq!(session.document().inner_html("about-text"), Some("Hi"));
        assert!(session.document().has_class("app-content", SWITCHING_CLASS));
        assert_eq!(session.location().to_string(), "index.html?lang=en");
        assert_eq!(session.history().len(), 1);

        session.tick(ms(1296));
        session.tick(ms(1312));
        assert!(!session.is_switching());
        assert!(!session.document().has_class("app-content", SWITCHING_CLASS));
    }

    #[test]
    fn en_then_fa_before_delay_ends_in_en() {
        let mut session = open("index.html");
        session.request_switch(Lang::En, ms(0));
        session.request_switch(Lang::Fa, ms(100));
        for frame in 1..=40 {
            session.tick(ms(frame * 16));
        }
        assert_eq!(session.lang(), Lang::En);
        assert!(!session.is_switching());
    }

    #[test]
    fn typing_restarts_in_new_language() {
        let mut session = open("index.html");
        session.tick(ms(80));
        assert_eq!(session.document().inner_html("hero-tagline"), Some("س"));
        session.request_switch(Lang::En, ms(100));
        session.tick(ms(380));
        let generation = session.typing().generation();
        session.tick(ms(460));
        assert_eq!(session.typing().generation(), generation);
        assert_eq!(session.document().inner_html("hero-tagline"), Some("B"));
    }
}
