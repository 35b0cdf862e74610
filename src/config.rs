// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration (`folio.yaml` or `folio.json`)

use crate::background::WaveConfig;
use crate::render::SiteAssets;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names looked for in the site root, in order.
pub const CONFIG_FILES: &[&str] = &["folio.yaml", "folio.yml", "folio.json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Directory holding `profile.json` and friends.
    pub data_dir: PathBuf,
    pub index_skeleton: PathBuf,
    pub resume_skeleton: PathBuf,
    pub output_dir: PathBuf,
    /// Copied into the output directory as-is.
    pub assets_dir: PathBuf,
    pub assets: SiteAssets,
    pub background: WaveConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            index_skeleton: PathBuf::from("index.html"),
            resume_skeleton: PathBuf::from("resume.html"),
            output_dir: PathBuf::from("dist"),
            assets_dir: PathBuf::from("assets"),
            assets: SiteAssets::default(),
            background: WaveConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let ext = path.extension().and_then(|s| s.to_str());
        let config: SiteConfig = if ext == Some("yaml") || ext == Some("yml") {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?
        };
        Ok(config)
    }

    /// Load `explicit` if given, else the first config file found in `root`,
    /// else defaults. Relative paths are taken against `root`.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let found = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => CONFIG_FILES
                .iter()
                .map(|name| root.join(name))
                .find(|path| path.is_file()),
        };
        let config = match found {
            Some(path) => {
                debug!(path = %path.display(), "loading site config");
                Self::load(&path)?
            }
            None => Self::default(),
        };
        Ok(config.rooted_at(root))
    }

    /// Resolve relative paths against `root`.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        for path in [
            &mut self.data_dir,
            &mut self.index_skeleton,
            &mut self.resume_skeleton,
            &mut self.output_dir,
            &mut self.assets_dir,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("folio.yaml");
        fs::write(
            &path,
            "data-dir: content\nbackground:\n  line-count: 40\nassets:\n  placeholder-image: img/p.svg\n",
        )
        .unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("content"));
        assert_eq!(config.background.line_count, 40);
        assert_eq!(config.background.segments, 24);
        assert_eq!(config.assets.placeholder_image, "img/p.svg");
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn discover_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = SiteConfig::discover(tmp.path(), None).unwrap();
        assert_eq!(config.data_dir, tmp.path().join("data"));
    }

    #[test]
    fn discover_finds_json() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("folio.json"), r#"{"output-dir": "/srv/site"}"#).unwrap();
        let config = SiteConfig::discover(tmp.path(), None).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("folio.json");
        fs::write(&path, "{ nope").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing json config"));
    }
}
