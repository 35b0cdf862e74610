// SPDX-License-Identifier: PMPL-1.0-or-later

//! Background wave animation
//!
//! A fixed set of randomly placed line segments, each drawn as a polyline
//! bent by a travelling sine field and pushed away from the pointer.

mod render_loop;
mod surface;

pub use render_loop::{LoopHandle, LoopReport, RenderLoop};
pub use surface::{StrokeStyle, Surface, SvgSurface};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tunables of the wave field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WaveConfig {
    pub amplitude: f64,
    /// Added to the time accumulator every frame.
    pub speed: f64,
    pub frequency: f64,
    /// Second, vertical wave: frequency over y, time factor and amplitude.
    pub cross_frequency: f64,
    pub cross_speed: f64,
    pub cross_amplitude: f64,
    pub pointer_radius: f64,
    pub pointer_strength: f64,
    pub color: [u8; 3],
    pub opacity: f64,
    pub line_width: f64,
    pub line_count: usize,
    pub min_length: f64,
    pub max_length: f64,
    pub segments: usize,
    /// How far outside the surface a line may start.
    pub margin: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: 10.0,
            speed: 0.025,
            frequency: 0.012,
            cross_frequency: 0.008,
            cross_speed: 0.6,
            cross_amplitude: 5.0,
            pointer_radius: 200.0,
            pointer_strength: 14.0,
            color: [45, 212, 191],
            opacity: 0.08,
            line_width: 1.0,
            line_count: 120,
            min_length: 80.0,
            max_length: 280.0,
            segments: 24,
            margin: 50.0,
        }
    }
}

impl WaveConfig {
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            opacity: self.opacity,
            width: self.line_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Point at fraction `t` along the line.
    pub fn at(&self, t: f64) -> Point {
        Point::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }
}

/// Vertical displacement from the sine field at `p`.
pub fn wave_offset(config: &WaveConfig, p: Point, time: f64) -> f64 {
    (p.x * config.frequency + time).sin() * config.amplitude
        + (p.y * config.cross_frequency + time * config.cross_speed).sin() * config.cross_amplitude
}

/// Repulsion from the pointer at `p`: zero outside the radius, growing
/// linearly towards the pointer.
pub fn pointer_influence(config: &WaveConfig, p: Point, pointer: Option<Point>) -> Point {
    let Some(pointer) = pointer else {
        return Point::default();
    };
    let dx = p.x - pointer.x;
    let dy = p.y - pointer.y;
    let dist = dx.hypot(dy);
    if dist >= config.pointer_radius {
        return Point::default();
    }
    let magnitude = (1.0 - dist / config.pointer_radius) * config.pointer_strength;
    let angle = dy.atan2(dx);
    Point::new(angle.cos() * magnitude, angle.sin() * magnitude)
}

pub struct WaveField {
    config: WaveConfig,
    width: f64,
    height: f64,
    lines: Vec<Line>,
    time: f64,
    pointer: Option<Point>,
    rng: StdRng,
}

impl std::fmt::Debug for WaveField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaveField")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("lines", &self.lines.len())
            .field("time", &self.time)
            .field("pointer", &self.pointer)
            .finish()
    }
}

impl WaveField {
    /// A field for a `width`×`height` surface. With a seed the line set is
    /// reproducible.
    pub fn new(config: WaveConfig, width: f64, height: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut field = Self {
            config,
            width,
            height,
            lines: Vec::new(),
            time: 0.0,
            pointer: None,
            rng,
        };
        field.generate_lines();
        field
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// New surface size; the whole line set is regenerated.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.generate_lines();
    }

    /// `None` when the pointer leaves the surface.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    pub fn advance(&mut self) {
        self.time += self.config.speed;
    }

    /// Total displacement at `p` for the current time and pointer.
    pub fn offset_at(&self, p: Point) -> Point {
        let push = pointer_influence(&self.config, p, self.pointer);
        Point::new(push.x, wave_offset(&self.config, p, self.time) + push.y)
    }

    /// The displaced points of `line`, `segments + 1` of them.
    pub fn polyline(&self, line: &Line) -> Vec<Point> {
        let segments = self.config.segments.max(1);
        (0..=segments)
            .map(|s| {
                let p = line.at(s as f64 / segments as f64);
                let o = self.offset_at(p);
                Point::new(p.x + o.x, p.y + o.y)
            })
            .collect()
    }

    /// Clear `surface`, stroke every line and present the frame.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.clear(self.width, self.height)?;
        let style = self.config.stroke_style();
        for line in &self.lines {
            surface.stroke(&self.polyline(line), &style)?;
        }
        surface.present()
    }

    fn generate_lines(&mut self) {
        let c = self.config;
        let mut lines = Vec::with_capacity(c.line_count);
        for _ in 0..c.line_count {
            let start = Point::new(
                between(&mut self.rng, -c.margin, self.width + c.margin),
                between(&mut self.rng, -c.margin, self.height + c.margin),
            );
            let angle = self.rng.gen::<f64>() * PI * 2.0;
            let length = between(&mut self.rng, c.min_length, c.max_length);
            let end = Point::new(
                start.x + angle.cos() * length,
                start.y + angle.sin() * length,
            );
            lines.push(Line { start, end });
        }
        self.lines = lines;
    }
}

fn between(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_respect_bounds() {
        let config = WaveConfig::default();
        let field = WaveField::new(config, 800.0, 600.0, Some(7));
        assert_eq!(field.lines().len(), 120);
        for line in field.lines() {
            assert!(line.start.x >= -50.0 && line.start.x < 850.0);
            assert!(line.start.y >= -50.0 && line.start.y < 650.0);
            let dx = line.end.x - line.start.x;
            let dy = line.end.y - line.start.y;
            let len = dx.hypot(dy);
            assert!((80.0 - 1e-9..280.0).contains(&len), "length {}", len);
        }
    }

    #[test]
    fn seeded_fields_match() {
        let a = WaveField::new(WaveConfig::default(), 400.0, 300.0, Some(42));
        let b = WaveField::new(WaveConfig::default(), 400.0, 300.0, Some(42));
        assert_eq!(a.lines(), b.lines());
    }

    #[test]
    fn resize_regenerates() {
        let mut field = WaveField::new(WaveConfig::default(), 400.0, 300.0, Some(1));
        let before = field.lines().to_vec();
        field.resize(1200.0, 900.0);
        assert_eq!(field.size(), (1200.0, 900.0));
        assert_ne!(field.lines(), &before[..]);
    }

    #[test]
    fn influence_is_stronger_inside_the_radius() {
        let config = WaveConfig::default();
        let pointer = Some(Point::new(0.0, 0.0));
        let inside = pointer_influence(&config, Point::new(50.0, 0.0), pointer);
        let outside = pointer_influence(&config, Point::new(250.0, 0.0), pointer);
        assert!(inside.length() > outside.length());
        assert_eq!(outside.length(), 0.0);
        // points away from the pointer
        assert!(inside.x > 0.0);
    }

    #[test]
    fn influence_decays_to_zero_at_radius() {
        let config = WaveConfig::default();
        let pointer = Some(Point::new(100.0, 100.0));
        let mut last = f64::INFINITY;
        for step in 1..=20 {
            let d = step as f64 * 10.0;
            let m = pointer_influence(&config, Point::new(100.0, 100.0 + d), pointer).length();
            assert!(m < last, "not decreasing at {}", d);
            last = m;
        }
        assert_eq!(last, 0.0);
        let near = pointer_influence(&config, Point::new(100.0, 110.0), pointer).length();
        assert!((near - 0.95 * 14.0).abs() < 1e-9);
    }

    #[test]
    fn no_pointer_no_influence() {
        let config = WaveConfig::default();
        assert_eq!(pointer_influence(&config, Point::new(1.0, 1.0), None), Point::default());
    }

    #[test]
    fn wave_offset_matches_formula() {
        let config = WaveConfig::default();
        let p = Point::new(100.0, 50.0);
        let t = 0.5;
        let expected = (100.0f64 * 0.012 + t).sin() * 10.0 + (50.0f64 * 0.008 + t * 0.6).sin() * 5.0;
        assert!((wave_offset(&config, p, t) - expected).abs() < 1e-12);
    }

    #[test]
    fn polyline_has_segment_points() {
        let field = WaveField::new(WaveConfig::default(), 400.0, 300.0, Some(3));
        let line = field.lines()[0];
        assert_eq!(field.polyline(&line).len(), 25);
    }

    #[test]
    fn advance_accumulates_time() {
        let mut field = WaveField::new(WaveConfig::default(), 10.0, 10.0, Some(0));
        field.advance();
        field.advance();
        assert!((field.time() - 0.05).abs() < 1e-12);
    }
}
