// SPDX-License-Identifier: PMPL-1.0-or-later

//! Writing built pages, assets and build reports to disk

use crate::i18n::Lang;
use crate::report::{BuildReport, ReportOutputFormat};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File name of a page in `lang`: Persian keeps the page's own name,
/// English gets an `.en` infix (`index.html` -> `index.en.html`).
pub fn page_file_name(page: &str, lang: Lang) -> String {
    let name = Path::new(page)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(page);
    match lang {
        Lang::Fa => name.to_string(),
        Lang::En => match name.rsplit_once('.') {
            Some((stem, ext)) => format!("{}.en.{}", stem, ext),
            None => format!("{}.en", name),
        },
    }
}

pub fn write_page(dir: &Path, name: &str, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(name);
    fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), bytes = html.len(), "page written");
    Ok(path)
}

/// Copy every file under `src` to `dest`, keeping the relative layout.
/// Returns the number of files copied; a missing `src` copies nothing.
pub fn copy_assets(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.with_context(|| format!("walking {}", src.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| anyhow!("{} is outside {}", entry.path().display(), src.display()))?;
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target).with_context(|| {
            format!("copying {} to {}", entry.path().display(), target.display())
        })?;
        copied += 1;
    }
    Ok(copied)
}

/// Write `report` once per format into `dir` with a timestamped name.
pub fn persist_report(
    report: &BuildReport,
    dir: &Path,
    formats: &[ReportOutputFormat],
) -> Result<Vec<PathBuf>> {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S").to_string();
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut stored = Vec::new();
    for format in formats {
        let path = dir.join(format!("folio-build-{}.{}", timestamp, format.extension()));
        let content = format.serialize(report)?;
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        stored.push(path);
    }
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_pages_get_an_infix() {
        assert_eq!(page_file_name("index.html", Lang::Fa), "index.html");
        assert_eq!(page_file_name("index.html", Lang::En), "index.en.html");
        assert_eq!(page_file_name("pages/resume.html", Lang::En), "resume.en.html");
    }

    #[test]
    fn copies_nested_assets() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("images")).unwrap();
        fs::write(src.path().join("images/a.svg"), "<svg/>").unwrap();
        fs::write(src.path().join("style.css"), "body{}").unwrap();
        let copied = copy_assets(src.path(), &dest.path().join("assets")).unwrap();
        assert_eq!(copied, 2);
        assert!(dest.path().join("assets/images/a.svg").is_file());
    }

    #[test]
    fn missing_assets_dir_copies_nothing() {
        let dest = tempfile::tempdir().unwrap();
        assert_eq!(copy_assets(&dest.path().join("nope"), dest.path()).unwrap(), 0);
    }

    #[test]
    fn persists_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let report = crate::report::generate_build_report(
            Path::new("data"),
            Path::new("dist"),
            vec![],
            vec![],
            0,
        );
        let stored = persist_report(
            &report,
            dir.path(),
            &[ReportOutputFormat::Json, ReportOutputFormat::Yaml],
        )
        .unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|p| p.is_file()));
    }
}
