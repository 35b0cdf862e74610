// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site translation documents (`lang-en.json`, `lang-fa.json`).
//!
//! Keys are dotted paths into nested objects: `"hero.viewWork"` reads
//! `{"hero": {"viewWork": ...}}`. A missing key falls back to the built-in
//! catalog and then to the key itself, so a label never renders empty.

use super::catalog::{self, Lang};
use super::resolve::scalar_text;
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct Translations {
    en: Value,
    fa: Value,
}

impl Default for Translations {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Translations {
    /// Absent documents behave as empty objects.
    pub fn new(en: Option<Value>, fa: Option<Value>) -> Self {
        Self {
            en: en.unwrap_or_else(|| Value::Object(Map::new())),
            fa: fa.unwrap_or_else(|| Value::Object(Map::new())),
        }
    }

    fn document(&self, lang: Lang) -> &Value {
        match lang {
            Lang::En => &self.en,
            Lang::Fa => &self.fa,
        }
    }

    /// Raw value at a dotted path, if any.
    pub fn lookup(&self, lang: Lang, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(self.document(lang), |node, key| node.get(key))
            .filter(|v| !v.is_null())
    }

    /// Label text for `path`: site document, then built-in catalog, then the
    /// key itself.
    pub fn text(&self, lang: Lang, path: &str) -> String {
        self.lookup(lang, path)
            .and_then(scalar_text)
            .unwrap_or_else(|| catalog::t_or_key(lang, path).to_string())
    }

    /// String list at `path`; anything else is an empty list.
    pub fn list(&self, lang: Lang, path: &str) -> Vec<String> {
        self.lookup(lang, path)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(scalar_text).collect())
            .unwrap_or_default()
    }

    /// Every leaf key of the document for `lang`, as dotted paths in source
    /// order.
    pub fn keys(&self, lang: Lang) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(self.document(lang), String::new(), &mut keys);
        keys
    }
}

fn collect_keys(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_keys(child, path, out);
            }
        }
        _ if !prefix.is_empty() => out.push(prefix),
        _ => {}
    }
}
