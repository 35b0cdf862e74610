// SPDX-License-Identifier: PMPL-1.0-or-later

//! Drawing surfaces for the wave field

use super::Point;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: [u8; 3],
    pub opacity: f64,
    pub width: f64,
}

impl StrokeStyle {
    /// CSS colour, e.g. `rgba(45, 212, 191, 0.08)`.
    pub fn rgba(&self) -> String {
        let [r, g, b] = self.color;
        format!("rgba({}, {}, {}, {})", r, g, b, self.opacity)
    }
}

/// Something a frame can be drawn onto
pub trait Surface: Send {
    /// Start a new frame of the given size.
    fn clear(&mut self, width: f64, height: f64) -> Result<()>;
    fn stroke(&mut self, points: &[Point], style: &StrokeStyle) -> Result<()>;
    /// Finish the current frame.
    fn present(&mut self) -> Result<()>;
}

/// Renders frames as SVG documents, kept in memory or written to a directory
/// as `frame-00001.svg`, `frame-00002.svg`, ...
#[derive(Debug, Default)]
pub struct SvgSurface {
    out_dir: Option<PathBuf>,
    current: String,
    frames: Vec<String>,
    presented: u64,
}

impl SvgSurface {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn to_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating frame directory {}", dir.display()))?;
        Ok(Self {
            out_dir: Some(dir),
            ..Self::default()
        })
    }

    /// Frames kept in memory (none when writing to a directory).
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.current.clear();
        write!(
            self.current,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        )?;
        Ok(())
    }

    fn stroke(&mut self, points: &[Point], style: &StrokeStyle) -> Result<()> {
        let [r, g, b] = style.color;
        write!(
            self.current,
            r#"<polyline fill="none" stroke="rgb({},{},{})" stroke-opacity="{}" stroke-width="{}" points=""#,
            r, g, b, style.opacity, style.width
        )?;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.current.push(' ');
            }
            write!(self.current, "{:.2},{:.2}", p.x, p.y)?;
        }
        self.current.push_str(r#""/>"#);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.current.push_str("</svg>\n");
        self.presented += 1;
        let frame = std::mem::take(&mut self.current);
        match &self.out_dir {
            Some(dir) => {
                let path = dir.join(format!("frame-{:05}.svg", self.presented));
                fs::write(&path, frame)
                    .with_context(|| format!("writing frame {}", path.display()))?;
            }
            None => self.frames.push(frame),
        }
        Ok(())
    }
}
