// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-field language resolution over content records.
//!
//! A record is any JSON object from the profile or projects documents. Each
//! field is resolved on its own: `title` under Persian reads `title_fa` when
//! that is present, otherwise `title`. Two fields of one record can therefore
//! come from different languages when the data is only partly translated.

use super::catalog::Lang;
use serde_json::Value;

/// Resolve `field` of `record` for `lang`.
///
/// The suffixed override wins when it exists and is neither `null` nor an
/// empty string. Under English the base field is returned unconditionally.
pub fn resolve<'a>(record: &'a Value, field: &str, lang: Lang) -> Option<&'a Value> {
    if let Some(suffix) = lang.override_suffix() {
        let key = format!("{}{}", field, suffix);
        if let Some(value) = record.get(&key).filter(|v| is_present(v)) {
            return Some(value);
        }
    }
    record.get(field).filter(|v| !v.is_null())
}

/// Resolve a field and read it as non-empty text.
pub fn resolve_str<'a>(record: &'a Value, field: &str, lang: Lang) -> Option<&'a str> {
    resolve(record, field, lang)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Resolve `field`, falling back to `secondary` (base only) when neither the
/// override nor the base field is usable, e.g. `name` then `shortName`.
pub fn resolve_str_or<'a>(
    record: &'a Value,
    field: &str,
    secondary: &str,
    lang: Lang,
) -> Option<&'a str> {
    resolve_str(record, field, lang).or_else(|| {
        record
            .get(secondary)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    })
}

/// Resolve a list-of-strings field. Non-string items are skipped and a
/// missing field yields an empty list.
pub fn resolve_list<'a>(record: &'a Value, field: &str, lang: Lang) -> Vec<&'a str> {
    resolve(record, field, lang)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Text form of a scalar value; objects and arrays have none.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
