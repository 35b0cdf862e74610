// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page location and history
//!
//! Only the pieces of a URL the language switch touches: path, query pairs
//! (kept in order) and fragment.

use crate::i18n::Lang;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Location {
    pub fn parse(url: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, frag)) => (rest, Some(frag.to_string())),
            None => (url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };
        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_param(&mut self, key: &str, value: &str) {
        match self.query.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => self.query.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove_param(&mut self, key: &str) {
        self.query.retain(|(k, _)| k != key);
    }

    /// `lang=en` selects English; anything else, or nothing, selects Persian.
    pub fn lang(&self) -> Lang {
        match self.param("lang") {
            Some("en") => Lang::En,
            _ => Lang::Fa,
        }
    }

    /// This location with the language parameter written for `lang`.
    pub fn with_lang(&self, lang: Lang) -> Self {
        let mut next = self.clone();
        match lang {
            Lang::En => next.set_param("lang", "en"),
            Lang::Fa => next.remove_param("lang"),
        }
        next
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            if v.is_empty() {
                write!(f, "{}{}", sep, k)?;
            } else {
                write!(f, "{}{}={}", sep, k, v)?;
            }
        }
        if let Some(frag) = &self.fragment {
            write!(f, "#{}", frag)?;
        }
        Ok(())
    }
}

/// Language of the resume page: its own query first, then the page that
/// linked to it.
pub fn resume_lang(location: &Location, referrer: Option<&str>) -> Lang {
    if location.lang() == Lang::En {
        return Lang::En;
    }
    match referrer {
        Some(r) if r.contains("lang=en") => Lang::En,
        _ => Lang::Fa,
    }
}

/// Session history. Language changes replace the current entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Location>,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub fn current(&self) -> &Location {
        // never empty: constructed with one entry and only ever replaced
        &self.entries[self.entries.len() - 1]
    }

    pub fn replace_state(&mut self, location: Location) {
        if let Some(last) = self.entries.last_mut() {
            *last = location;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_from_query() {
        assert_eq!(Location::parse("index.html?lang=en").lang(), Lang::En);
        assert_eq!(Location::parse("index.html?lang=fa").lang(), Lang::Fa);
        assert_eq!(Location::parse("index.html?lang=EN").lang(), Lang::Fa);
        assert_eq!(Location::parse("index.html").lang(), Lang::Fa);
    }

    #[test]
    fn with_lang_keeps_other_parts() {
        let loc = Location::parse("/index.html?ref=cv&lang=en#projects");
        assert_eq!(loc.with_lang(Lang::Fa).to_string(), "/index.html?ref=cv#projects");
        let fa = Location::parse("/index.html#about");
        assert_eq!(fa.with_lang(Lang::En).to_string(), "/index.html?lang=en#about");
    }

    #[test]
    fn resume_falls_back_to_referrer() {
        let loc = Location::parse("resume.html");
        assert_eq!(resume_lang(&loc, Some("https://x.dev/index.html?lang=en")), Lang::En);
        assert_eq!(resume_lang(&loc, Some("https://x.dev/index.html")), Lang::Fa);
        assert_eq!(resume_lang(&loc, None), Lang::Fa);
    }

    #[test]
    fn replace_state_does_not_grow_history() {
        let mut history = History::new(Location::parse("index.html"));
        history.replace_state(Location::parse("index.html?lang=en"));
        history.replace_state(Location::parse("index.html"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().to_string(), "index.html");
    }
}
