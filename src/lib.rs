// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: a bilingual (Persian/English) portfolio and resume renderer.
//!
//! Site content lives in a handful of JSON documents. Records carry English
//! fields plus optional `_fa` overrides; the renderer resolves each field for
//! the active language and fills the mount points of an HTML skeleton.
//!
//! PIECES:
//! 1. **Content**: concurrent document loading into a read-only store.
//! 2. **Render**: pure `(content, language) -> slots` functions for the index
//!    and resume pages, applied to a skeleton [`dom::Document`].
//! 3. **Switch**: the language toggle with its fade/swap/settle transition.
//! 4. **Background**: the animated wave field and its render loop.

pub mod background;
pub mod build;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod dom;
pub mod i18n;
pub mod render;
pub mod report;
pub mod storage;
pub mod switch;
pub mod types;
pub mod typing;
