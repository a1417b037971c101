//! Scatter plot rendering.
//!
//! Renders sentiment vs. return points straight into an RGB image:
//! plot frame, gridlines, zero lines, tick labels, axis labels and title.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::ReportError;
use crate::glyphs::{GLYPH_HEIGHT, draw_text, text_width};

/// Common color definitions.
pub mod colors {
    use image::Rgb;

    /// Plot background.
    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    /// Frame, tick and label color.
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    /// Gridline color.
    pub const LIGHT_GRAY: Rgb<u8> = Rgb([210, 210, 210]);
    /// Zero-line color.
    pub const GRAY: Rgb<u8> = Rgb([150, 150, 150]);
    /// Data point color.
    pub const BLUE: Rgb<u8> = Rgb([33, 150, 243]);
}

/// Scatter plot geometry and colors.
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Margin reserved on the left and bottom for tick and axis labels.
    pub label_margin: u32,
    /// Margin on the top and right edges.
    pub margin: u32,
    /// Background color.
    pub background: Rgb<u8>,
    /// Frame and text color.
    pub foreground: Rgb<u8>,
    /// Gridline color.
    pub grid: Rgb<u8>,
    /// Zero-line color.
    pub zero_line: Rgb<u8>,
    /// Data point color.
    pub point: Rgb<u8>,
    /// Half-width of each square data point marker.
    pub point_size: u32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            label_margin: 70,
            margin: 30,
            background: colors::WHITE,
            foreground: colors::BLACK,
            grid: colors::LIGHT_GRAY,
            zero_line: colors::GRAY,
            point: colors::BLUE,
            point_size: 2,
        }
    }
}

/// Sentiment vs. return scatter renderer.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    config: ScatterConfig,
    title: String,
    x_label: String,
    y_label: String,
}

/// Number of tick intervals per axis.
const TICKS: u32 = 4;

impl ScatterPlot {
    /// Create a renderer with fixed title and axis labels.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self::with_config(ScatterConfig::default(), title, x_label, y_label)
    }

    /// Create a renderer with custom geometry.
    #[must_use]
    pub fn with_config(
        config: ScatterConfig,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self { config, title: title.into(), x_label: x_label.into(), y_label: y_label.into() }
    }

    /// Render the points into an image.
    ///
    /// Non-finite pairs are skipped; an empty series renders the empty
    /// frame.
    #[must_use]
    pub fn render(&self, xs: &[f64], ys: &[f64]) -> RgbImage {
        let cfg = &self.config;
        let mut img = RgbImage::from_pixel(cfg.width, cfg.height, cfg.background);

        let points: Vec<(f64, f64)> = xs
            .iter()
            .zip(ys.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y))
            .collect();

        let (x_min, x_max) = padded_bounds(points.iter().map(|p| p.0));
        let (y_min, y_max) = padded_bounds(points.iter().map(|p| p.1));

        // Plot area bounds in pixel space
        let left = cfg.label_margin;
        let right = cfg.width.saturating_sub(cfg.margin);
        let top = cfg.margin;
        let bottom = cfg.height.saturating_sub(cfg.label_margin);

        let to_px = |x: f64| {
            let frac = (x - x_min) / (x_max - x_min);
            left + (frac * f64::from(right - left)) as u32
        };
        let to_py = |y: f64| {
            let frac = (y - y_min) / (y_max - y_min);
            bottom - (frac * f64::from(bottom - top)) as u32
        };

        // Gridlines and tick labels
        for i in 0..=TICKS {
            let fx = x_min + (x_max - x_min) * f64::from(i) / f64::from(TICKS);
            let px = to_px(fx);
            draw_vertical_line(&mut img, px, top, bottom, cfg.grid);
            let label = format!("{fx:.3}");
            let lx = px.saturating_sub(text_width(&label) / 2);
            draw_text(&mut img, lx, bottom + 8, &label, cfg.foreground);

            let fy = y_min + (y_max - y_min) * f64::from(i) / f64::from(TICKS);
            let py = to_py(fy);
            draw_horizontal_line(&mut img, py, left, right, cfg.grid);
            let label = format!("{fy:.3}");
            let lx = left.saturating_sub(text_width(&label) + 6);
            draw_text(&mut img, lx, py.saturating_sub(GLYPH_HEIGHT / 2), &label, cfg.foreground);
        }

        // Zero lines, when zero is inside the range
        if x_min < 0.0 && x_max > 0.0 {
            draw_vertical_line(&mut img, to_px(0.0), top, bottom, cfg.zero_line);
        }
        if y_min < 0.0 && y_max > 0.0 {
            draw_horizontal_line(&mut img, to_py(0.0), left, right, cfg.zero_line);
        }

        // Frame
        draw_horizontal_line(&mut img, top, left, right, cfg.foreground);
        draw_horizontal_line(&mut img, bottom, left, right, cfg.foreground);
        draw_vertical_line(&mut img, left, top, bottom, cfg.foreground);
        draw_vertical_line(&mut img, right, top, bottom, cfg.foreground);

        // Data points
        for &(x, y) in &points {
            draw_point(&mut img, to_px(x), to_py(y), cfg.point_size, cfg.point);
        }

        // Title centered on the top margin, y label left-aligned beside it
        let header_y = top.saturating_sub(GLYPH_HEIGHT + 6);
        let title_x = cfg.width.saturating_sub(text_width(&self.title)) / 2;
        draw_text(&mut img, title_x, header_y, &self.title, cfg.foreground);
        draw_text(&mut img, 4, header_y, &self.y_label, cfg.foreground);

        let x_label_x = left + (right - left).saturating_sub(text_width(&self.x_label)) / 2;
        let x_label_y = bottom + 10 + GLYPH_HEIGHT + 6;
        draw_text(&mut img, x_label_x, x_label_y, &self.x_label, cfg.foreground);

        img
    }

    /// Render and write the image to `path`.
    ///
    /// # Errors
    /// Returns an error if encoding or writing fails.
    pub fn save(&self, xs: &[f64], ys: &[f64], path: impl AsRef<Path>) -> Result<(), ReportError> {
        let img = self.render(xs, ys);
        img.save(path)?;
        Ok(())
    }
}

/// Value bounds with 5% padding; degenerate input falls back to a unit span.
fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }

    if min > max {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }

    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

fn draw_point(img: &mut RgbImage, x: u32, y: u32, half: u32, color: Rgb<u8>) {
    let (w, h) = (img.width(), img.height());
    let x0 = x.saturating_sub(half);
    let y0 = y.saturating_sub(half);
    for py in y0..=(y + half).min(h.saturating_sub(1)) {
        for px in x0..=(x + half).min(w.saturating_sub(1)) {
            img.put_pixel(px, py, color);
        }
    }
}

fn draw_vertical_line(img: &mut RgbImage, x: u32, y1: u32, y2: u32, color: Rgb<u8>) {
    let (start, end) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
    let (w, h) = (img.width(), img.height());

    if x < w {
        for y in start..=end.min(h - 1) {
            img.put_pixel(x, y, color);
        }
    }
}

fn draw_horizontal_line(img: &mut RgbImage, y: u32, x1: u32, x2: u32, color: Rgb<u8>) {
    let (start, end) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    let (w, h) = (img.width(), img.height());

    if y < h {
        for x in start..=end.min(w - 1) {
            img.put_pixel(x, y, color);
        }
    }
}
