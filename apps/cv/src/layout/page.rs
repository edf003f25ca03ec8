//! Fixed-size A4 page as a display list.
//!
//! Coordinates are millimetres with the origin at the top-left corner and y
//! growing downward. Text is placed on its baseline. The page keeps a small
//! amount of drawing state (font, colours, line width) so callers can set a
//! style once and draw several runs with it; every recorded operation carries
//! its resolved style, so serialization never depends on call order.

use serde::Serialize;

use crate::layout::font_metrics::{measure_mm, StandardFont, PT_TO_MM};
use crate::layout::wrap::wrap_text;

pub const A4_WIDTH: f32 = 210.0;
pub const A4_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 14.0;
pub const CONTENT_WIDTH: f32 = A4_WIDTH - MARGIN * 2.0;

/// Line height factor used by [`Page::text_box`], relative to the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// How far a link region extends below the baseline it annotates.
pub const LINK_DESCENDER_MM: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Components scaled to 0.0..=1.0 for PDF colour operators.
    pub fn unit(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Font, size (pt) and colour for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub font: StandardFont,
    pub size: f32,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn new(font: StandardFont, size: f32, color: Rgb) -> Self {
        Self { font, size, color }
    }

    pub fn with_color(self, color: Rgb) -> Self {
        Self { color, ..self }
    }

    pub fn width(&self, text: &str) -> f32 {
        measure_mm(self.font, self.size, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaintMode {
    Fill,
    Stroke,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    Text(TextRun),
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb,
        width: f32,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    RoundedRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        mode: PaintMode,
        color: Rgb,
        line_width: f32,
    },
}

/// An invisible clickable rectangle. `y` is the top edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub url: String,
}

impl LinkRegion {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    ops: Vec<DrawOp>,
    links: Vec<LinkRegion>,
    text_style: TextStyle,
    fill_color: Rgb,
    draw_color: Rgb,
    line_width: f32,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ops: Vec::new(),
            links: Vec::new(),
            text_style: TextStyle::new(StandardFont::Helvetica, 16.0, Rgb::BLACK),
            fill_color: Rgb::BLACK,
            draw_color: Rgb::BLACK,
            line_width: 0.2,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn links(&self) -> &[LinkRegion] {
        &self.links
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    // ── drawing state ───────────────────────────────────────────────────────

    pub fn text_style(&self) -> TextStyle {
        self.text_style
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.text_style = style;
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.text_style.color = color;
    }

    pub fn set_fill_color(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    pub fn set_draw_color(&mut self, color: Rgb) {
        self.draw_color = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    // ── text ────────────────────────────────────────────────────────────────

    /// Width of `text` in the current font, in mm.
    pub fn text_width(&self, text: &str) -> f32 {
        self.text_style.width(text)
    }

    /// Draws `text` with its baseline at `y`. Empty strings are skipped.
    pub fn text(&mut self, text: &str, x: f32, y: f32) {
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text(TextRun {
            text: text.to_string(),
            x,
            y,
            style: self.text_style,
        }));
    }

    /// Draws pre-wrapped lines starting at baseline `y`, `line_height` mm apart.
    pub fn text_lines(&mut self, lines: &[String], x: f32, y: f32, line_height: f32) {
        for (i, line) in lines.iter().enumerate() {
            self.text(line, x, y + i as f32 * line_height);
        }
    }

    /// Wraps `text` to `max_width` in the current font and draws it at the
    /// font's natural line height. Returns the number of lines drawn.
    pub fn text_box(&mut self, text: &str, x: f32, y: f32, max_width: f32) -> usize {
        let lines = self.wrap(text, max_width);
        let line_height = self.text_style.size * LINE_HEIGHT_FACTOR * PT_TO_MM;
        self.text_lines(&lines, x, y, line_height);
        lines.len()
    }

    /// Wraps `text` to `max_width` in the current font.
    pub fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        wrap_text(text, self.text_style.font, self.text_style.size, max_width)
    }

    // ── links ───────────────────────────────────────────────────────────────

    /// Registers a clickable region over text drawn at baseline `y`.
    ///
    /// The region spans from `height - LINK_DESCENDER_MM` above the baseline
    /// to `LINK_DESCENDER_MM` below it. Zero-width regions and empty URLs are ignored.
    pub fn link(&mut self, x: f32, y: f32, width: f32, height: f32, url: &str) {
        if width <= 0.0 || url.is_empty() {
            return;
        }
        self.links.push(LinkRegion {
            x,
            y: y - height + LINK_DESCENDER_MM,
            width,
            height,
            url: url.to_string(),
        });
    }

    // ── shapes ──────────────────────────────────────────────────────────────

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: self.draw_color,
            width: self.line_width,
        });
    }

    /// Filled rectangle with its top-left corner at (x, y).
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            w,
            h,
            color: self.fill_color,
        });
    }

    /// Rounded rectangle, filled with the fill colour or stroked with the draw colour.
    pub fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, mode: PaintMode) {
        let radius = radius.min(w / 2.0).min(h / 2.0).max(0.0);
        let color = match mode {
            PaintMode::Fill => self.fill_color,
            PaintMode::Stroke => self.draw_color,
        };
        self.ops.push(DrawOp::RoundedRect {
            x,
            y,
            w,
            h,
            radius,
            mode,
            color,
            line_width: self.line_width,
        });
    }
}
