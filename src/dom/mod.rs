// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page skeleton document
//!
//! A thin, string-backed model of an HTML page. Elements are addressed by
//! `id` (mount points) or by translation marker attributes (`data-i18n`,
//! `data-i18n-placeholder`). Tags are located with regexes and matching close
//! tags by depth counting. Quoted attribute values may contain `>`, and
//! markup inside comments is ignored.

use crate::i18n::{Lang, Translations};
use crate::render::{escape_attr, escape_html, Slot, SlotEdit};
use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Open-tag interior: quoted values may contain `>`.
const TAG_BODY: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;
const LAZY_TAG_BODY: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*?"#;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Byte ranges of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    open_start: usize,
    open_end: usize,
    /// Content range; `None` for void or unterminated elements.
    inner: Option<(usize, usize)>,
}

/// Result of applying a set of slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub applied: usize,
    /// Mount ids the document does not have, in slot order, deduplicated.
    pub skipped: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}

impl Document {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let html = fs::read_to_string(path)
            .with_context(|| format!("reading skeleton {}", path.display()))?;
        Ok(Self::new(html))
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    pub fn has_mount(&self, id: &str) -> bool {
        self.find_by_attr("id", id).is_some()
    }

    /// The subset of `ids` that this document lacks.
    pub fn missing_mounts<'a>(&self, ids: &[&'a str]) -> Vec<&'a str> {
        ids.iter().copied().filter(|id| !self.has_mount(id)).collect()
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        let (start, end) = self.find_by_attr("id", id)?.inner?;
        Some(&self.html[start..end])
    }

    /// Replace the content of element `id`. Returns `false` when there is no
    /// such element or it cannot have content.
    pub fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match self.find_by_attr("id", id).and_then(|span| span.inner) {
            Some((start, end)) => {
                self.html.replace_range(start..end, html);
                true
            }
            None => false,
        }
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.set_inner_html(id, &escape_html(text))
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<String> {
        let span = self.find_by_attr("id", id)?;
        read_attr(&self.html[span.open_start..span.open_end], name)
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.find_by_attr("id", id) {
            Some(span) => {
                self.edit_open_tag(span, |tag| write_attr(tag, name, value));
                true
            }
            None => false,
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.attr(id, "class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Add (`on`) or remove a class on element `id`.
    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) -> bool {
        let Some(current) = self.find_by_attr("id", id).map(|span| {
            read_attr(&self.html[span.open_start..span.open_end], "class").unwrap_or_default()
        }) else {
            return false;
        };
        let mut classes: Vec<&str> = current.split_whitespace().filter(|c| *c != class).collect();
        if on {
            classes.push(class);
        }
        let joined = classes.join(" ");
        self.set_attr(id, "class", &joined)
    }

    /// Write `lang` and `dir` on the `<html>` element.
    pub fn set_root_lang(&mut self, lang: Lang) -> bool {
        let Some(span) = self.find_tag("html") else {
            return false;
        };
        self.edit_open_tag(span, |tag| {
            let tag = write_attr(tag, "lang", lang.code());
            write_attr(&tag, "dir", lang.direction().as_str())
        });
        true
    }

    pub fn root_attr(&self, name: &str) -> Option<String> {
        let span = self.find_tag("html")?;
        read_attr(&self.html[span.open_start..span.open_end], name)
    }

    pub fn set_title(&mut self, title: &str) -> bool {
        match self.find_tag("title").and_then(|span| span.inner) {
            Some((start, end)) => {
                self.html.replace_range(start..end, &escape_html(title));
                true
            }
            None => false,
        }
    }

    pub fn title(&self) -> Option<&str> {
        let (start, end) = self.find_tag("title")?.inner?;
        Some(&self.html[start..end])
    }

    /// Apply slots in order. Slots whose mount is missing are skipped.
    pub fn apply(&mut self, slots: impl IntoIterator<Item = Slot>) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::default();
        for slot in slots {
            let done = match &slot.edit {
                SlotEdit::Html(html) => self.set_inner_html(slot.mount, html),
                SlotEdit::Text(text) => self.set_text(slot.mount, text),
                SlotEdit::Attr(name, value) => self.set_attr(slot.mount, name, value),
                SlotEdit::Class(class, on) => self.toggle_class(slot.mount, class, *on),
            };
            if done {
                outcome.applied += 1;
            } else {
                debug!(mount = slot.mount, "mount point missing, slot skipped");
                if !outcome.skipped.contains(&slot.mount) {
                    outcome.skipped.push(slot.mount);
                }
            }
        }
        outcome
    }

    /// Fill `data-i18n` elements with translated text and set `placeholder`
    /// on `data-i18n-placeholder` elements. Returns the number of elements
    /// updated.
    pub fn apply_translations(&mut self, translations: &Translations, lang: Lang) -> usize {
        let mut updated = 0;

        let mut targets: Vec<((usize, usize), String)> = self
            .marked_elements("data-i18n")
            .into_iter()
            .filter_map(|(span, key)| span.inner.map(|inner| (inner, key)))
            .collect();
        // an element nested in another marked element is overwritten anyway
        let ranges: Vec<(usize, usize)> = targets.iter().map(|(r, _)| *r).collect();
        targets.retain(|((s, e), _)| !ranges.iter().any(|(os, oe)| os < s && e <= oe));
        for ((start, end), key) in targets.into_iter().rev() {
            let text = escape_html(&translations.text(lang, &key));
            self.html.replace_range(start..end, &text);
            updated += 1;
        }

        let placeholders = self.marked_elements("data-i18n-placeholder");
        for (span, key) in placeholders.into_iter().rev() {
            let text = translations.text(lang, &key);
            self.edit_open_tag(span, |tag| write_attr(tag, "placeholder", &text));
            updated += 1;
        }

        updated
    }

    /// Keys referenced by `data-i18n` and `data-i18n-placeholder`, in
    /// document order.
    pub fn translation_keys(&self) -> Vec<String> {
        let mut keys: Vec<(usize, String)> = self
            .marked_elements("data-i18n")
            .into_iter()
            .chain(self.marked_elements("data-i18n-placeholder"))
            .map(|(span, key)| (span.open_start, key))
            .collect();
        keys.sort_by_key(|(pos, _)| *pos);
        keys.into_iter().map(|(_, key)| key).collect()
    }

    fn find_by_attr(&self, attr: &str, value: &str) -> Option<Span> {
        let pattern = format!(
            r#"<([A-Za-z][A-Za-z0-9-]*)\b{}\s{}\s*=\s*["']{}["']{}>"#,
            LAZY_TAG_BODY,
            regex::escape(attr),
            regex::escape(value),
            TAG_BODY
        );
        let re = Regex::new(&pattern).ok()?;
        let haystack = without_comments(&self.html);
        let caps = re.captures(&haystack)?;
        let whole = caps.get(0)?;
        let name = caps.get(1)?.as_str();
        Some(span_at(&haystack, name, whole.start(), whole.end()))
    }

    fn find_tag(&self, name: &str) -> Option<Span> {
        let re = Regex::new(&format!(r"(?i)<{}\b{}>", regex::escape(name), TAG_BODY)).ok()?;
        let haystack = without_comments(&self.html);
        let m = re.find(&haystack)?;
        Some(span_at(&haystack, name, m.start(), m.end()))
    }

    /// Elements carrying `attr="key"`, with their keys.
    fn marked_elements(&self, attr: &str) -> Vec<(Span, String)> {
        let pattern = format!(
            r#"<([A-Za-z][A-Za-z0-9-]*)\b{}\s{}\s*=\s*["']([^"']*)["']{}>"#,
            LAZY_TAG_BODY,
            regex::escape(attr),
            TAG_BODY
        );
        let Ok(re) = Regex::new(&pattern) else {
            return Vec::new();
        };
        let haystack = without_comments(&self.html);
        re.captures_iter(&haystack)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str();
                let key = caps.get(2)?.as_str().trim();
                if key.is_empty() {
                    return None;
                }
                Some((span_at(&haystack, name, whole.start(), whole.end()), key.to_string()))
            })
            .collect()
    }

    fn edit_open_tag(&mut self, span: Span, edit: impl FnOnce(&str) -> String) {
        let tag = self.html[span.open_start..span.open_end].to_string();
        let edited = edit(&tag);
        self.html.replace_range(span.open_start..span.open_end, &edited);
    }
}

/// `html` with every `<!-- ... -->` blanked to spaces. Byte offsets are kept,
/// so spans found in the result index the original.
fn without_comments(html: &str) -> Cow<'_, str> {
    let Ok(re) = Regex::new(r"(?s)<!--.*?-->") else {
        return Cow::Borrowed(html);
    };
    if !re.is_match(html) {
        return Cow::Borrowed(html);
    }
    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    for m in re.find_iter(html) {
        out.push_str(&html[last..m.start()]);
        out.extend(std::iter::repeat(' ').take(m.len()));
        last = m.end();
    }
    out.push_str(&html[last..]);
    Cow::Owned(out)
}

fn span_at(html: &str, name: &str, open_start: usize, open_end: usize) -> Span {
    let self_closing = html[open_start..open_end].ends_with("/>");
    let is_void = VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str());
    let inner = if self_closing || is_void {
        None
    } else {
        find_close(html, name, open_end).map(|close_start| (open_end, close_start))
    };
    Span {
        open_start,
        open_end,
        inner,
    }
}

/// Start of the close tag matching an element opened just before `from`.
/// `html` must already have its comments blanked.
fn find_close(html: &str, name: &str, from: usize) -> Option<usize> {
    let re = Regex::new(&format!(r"(?i)</?{}\b{}>", regex::escape(name), TAG_BODY)).ok()?;
    let mut depth = 1usize;
    for m in re.find_iter(&html[from..]) {
        let tag = m.as_str();
        if tag.starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return Some(from + m.start());
            }
        } else if !tag.ends_with("/>") {
            depth += 1;
        }
    }
    None
}

fn attr_regex(name: &str) -> Option<Regex> {
    Regex::new(&format!(
        r#"(\s){}\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
        regex::escape(name)
    ))
    .ok()
}

fn read_attr(tag: &str, name: &str) -> Option<String> {
    let caps = attr_regex(name)?.captures(tag)?;
    caps.get(2)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
}

fn write_attr(tag: &str, name: &str, value: &str) -> String {
    let rendered = format!(r#"{}="{}""#, name, escape_attr(value));
    if let Some(re) = attr_regex(name) {
        if let Some(caps) = re.captures(tag) {
            if let (Some(whole), Some(lead)) = (caps.get(0), caps.get(1)) {
                return format!(
                    "{}{}{}{}",
                    &tag[..whole.start()],
                    lead.as_str(),
                    rendered,
                    &tag[whole.end()..]
                );
            }
        }
    }
    let insert_at = if tag.ends_with("/>") {
        tag.len() - 2
    } else {
        tag.len() - 1
    };
    let head = tag[..insert_at].trim_end();
    format!("{} {}{}", head, rendered, &tag[insert_at..])
}
