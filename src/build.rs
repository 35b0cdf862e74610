// SPDX-License-Identifier: PMPL-1.0-or-later

//! Build: render every page in both languages into the output directory
//!
//! Loads the content store once, renders the index and resume skeletons for
//! each language, copies the assets tree and returns a build report.

use crate::config::SiteConfig;
use crate::content::{ContentStore, DirectorySource};
use crate::dom::Document;
use crate::i18n::Lang;
use crate::render::RenderContext;
use crate::report::{generate_build_report, BuildReport, PageReport};
use crate::storage::{copy_assets, page_file_name, write_page};
use crate::switch::{render_page, Page};
use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

/// Render one page to HTML.
pub fn render_to_string(
    store: &ContentStore,
    config: &SiteConfig,
    page: Page,
    lang: Lang,
    year: i32,
) -> Result<String> {
    let skeleton = Document::load(skeleton_path(config, page))?;
    let ctx = RenderContext::new(store, lang, year, &config.assets);
    Ok(render_page(&skeleton, page, &ctx).document.into_html())
}

pub fn skeleton_path(config: &SiteConfig, page: Page) -> &Path {
    match page {
        Page::Index => &config.index_skeleton,
        Page::Resume => &config.resume_skeleton,
    }
}

/// Output file name of a page, as configured in the site assets.
pub fn output_name(config: &SiteConfig, page: Page, lang: Lang) -> String {
    let base = match page {
        Page::Index => &config.assets.index_page,
        Page::Resume => &config.assets.resume_page,
    };
    page_file_name(base, lang)
}

pub fn build_site(config: &SiteConfig, pages: &[Page], year: i32) -> Result<BuildReport> {
    if !config.data_dir.is_dir() {
        bail!("data directory not found: {}", config.data_dir.display());
    }
    info!(data = %config.data_dir.display(), "loading content");
    let store = ContentStore::load(&DirectorySource::new(&config.data_dir));

    let mut written = Vec::new();
    for &page in pages {
        let skeleton = Document::load(skeleton_path(config, page))?;
        for &lang in Lang::all() {
            let ctx = RenderContext::new(&store, lang, year, &config.assets);
            let rendered = render_page(&skeleton, page, &ctx);
            let name = output_name(config, page, lang);
            let path = write_page(&config.output_dir, &name, rendered.document.html())?;
            info!(path = %path.display(), "rendered {:?} ({})", page, lang);
            written.push(PageReport {
                page,
                lang,
                path,
                applied: rendered.outcome.applied,
                skipped: rendered
                    .outcome
                    .skipped
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            });
        }
    }

    let assets_dest = config.output_dir.join(
        config
            .assets_dir
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("assets")),
    );
    let assets_copied = copy_assets(&config.assets_dir, &assets_dest)?;
    info!(files = assets_copied, "assets copied");

    Ok(generate_build_report(
        &config.data_dir,
        &config.output_dir,
        written,
        store.missing().to_vec(),
        assets_copied,
    ))
}
