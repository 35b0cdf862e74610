// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core content types for folio
//!
//! Documents that carry `_fa` overrides (profile, projects) stay as JSON
//! records so fields can be resolved one at a time. Socials carry no
//! overrides and deserialize into a plain struct.

use crate::i18n::{resolve, Lang};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `socials.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Social {
    pub label: String,
    pub url: String,
    pub icon: String,
    pub show_in_hero: bool,
    pub show_in_contact: bool,
}

impl Social {
    /// Trimmed URL, `None` when blank.
    pub fn link(&self) -> Option<&str> {
        let url = self.url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

/// Parse a socials document. Entries that are not objects are dropped.
pub fn parse_socials(value: &Value) -> Option<Vec<Social>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
    )
}

/// The profile document
#[derive(Debug, Clone)]
pub struct Profile(Value);

impl Profile {
    /// Only JSON objects are profiles.
    pub fn from_value(value: Value) -> Option<Self> {
        if value.is_object() {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn record(&self) -> &Value {
        &self.0
    }

    /// The `personal` record, when it is an object.
    pub fn personal(&self) -> Option<&Value> {
        self.0.get("personal").filter(|v| v.is_object())
    }

    /// Records of a list-valued section (`experience`, `education`,
    /// `certifications`, `languages`). Non-object items are skipped.
    pub fn entries(&self, section: &str) -> Vec<&Value> {
        self.0
            .get(section)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter(|v| v.is_object()).collect())
            .unwrap_or_default()
    }

    /// Skill categories for `lang`, in document order. Categories whose value
    /// is not a list are skipped.
    pub fn skills(&self, lang: Lang) -> Vec<SkillCategory<'_>> {
        let Some(map) = resolve(&self.0, "skills", lang).and_then(Value::as_object) else {
            return Vec::new();
        };
        map.iter()
            .filter_map(|(name, list)| {
                let list = list.as_array()?;
                Some(SkillCategory {
                    name: name.as_str(),
                    skills: list.iter().filter_map(Skill::from_value).collect(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory<'a> {
    pub name: &'a str,
    pub skills: Vec<Skill<'a>>,
}

/// A skill is either a bare string or `{ "name": .., "level": .. }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill<'a> {
    pub name: &'a str,
    pub level: Option<&'a str>,
}

impl<'a> Skill<'a> {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Skill { name, level: None }),
            Value::Object(map) => Some(Skill {
                name: map.get("name").and_then(Value::as_str).unwrap_or(""),
                level: map
                    .get("level")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty()),
            }),
            _ => None,
        }
    }
}

/// The projects document: a flat list (all featured) or `{featured, other}`
#[derive(Debug, Clone, Default)]
pub struct Projects {
    pub featured: Vec<Value>,
    pub other: Vec<Value>,
}

impl Projects {
    pub fn from_value(value: &Value) -> Option<Self> {
        let records = |v: Option<&Value>| -> Vec<Value> {
            v.and_then(Value::as_array)
                .map(|items| items.iter().filter(|p| p.is_object()).cloned().collect())
                .unwrap_or_default()
        };
        match value {
            Value::Array(_) => Some(Projects {
                featured: records(Some(value)),
                other: Vec::new(),
            }),
            Value::Object(map) => Some(Projects {
                featured: records(map.get("featured")),
                other: records(map.get("other")),
            }),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.other.is_empty()
    }
}

/// Trimmed `links.github` / `links.demo` of a project record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl ProjectLinks {
    pub fn of(project: &Value) -> Self {
        let link = |name: &str| {
            project
                .get("links")
                .and_then(|links| links.get(name))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            github: link("github"),
            demo: link("demo"),
        }
    }
}
