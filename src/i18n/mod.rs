// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for folio.
//!
//! | Code | Language | Direction | Role                              |
//! |------|----------|-----------|-----------------------------------|
//! | fa   | Persian  | rtl       | page default, `_fa` field overrides |
//! | en   | English  | ltr       | unsuffixed content fields         |
//!
//! ## Design
//!
//! Three layers, consulted in order:
//!
//! - content records resolve per field through [`resolve`];
//! - UI labels come from the site's translation documents ([`Translations`]);
//! - anything the site does not translate falls back to the embedded
//!   [`catalog`](t), and finally to the key itself.

mod catalog;
mod resolve;
mod translations;

pub use catalog::{has_key, t, t_or_key, Direction, Lang};
pub use resolve::{resolve, resolve_list, resolve_str, resolve_str_or, scalar_text};
pub use translations::Translations;
