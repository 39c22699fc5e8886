//! Font loading and text measurement, backed by fontdue.
//!
//! The rendering half lives in `render::shapes::text`; this module owns the
//! parsed typefaces and the layout-matched measurement the face code uses to
//! center its labels.

use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error from [`Fonts::load`]. fontdue reports parse failures as static
/// strings, so that is what this carries.
#[derive(Debug, Clone, Copy)]
pub struct FontError(&'static str);

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font parse failed: {}", self.0)
    }
}

impl std::error::Error for FontError {}

/// Opaque handle to a loaded font, carried by text draw commands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// The loaded typefaces, immutable once parsed.
///
/// The app owns this and lends it to the text renderer each frame so new
/// glyphs can be rasterized on demand.
#[derive(Default)]
pub struct Fonts {
    faces: Vec<fontdue::Font>,
}

impl Fonts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font and returns its handle.
    pub fn load(&mut self, bytes: &[u8]) -> Result<FontId, FontError> {
        let face = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(FontError)?;
        self.faces.push(face);
        Ok(FontId(self.faces.len() - 1))
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.faces.get(id.0)
    }

    /// Width and height of one laid-out line, in logical pixels.
    ///
    /// Runs the same layout the renderer runs, so centering math done on the
    /// result lands on the rendered pixels. An unknown `id` measures as an
    /// empty string one line tall.
    #[must_use]
    pub fn measure(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let empty = Vec2::new(0.0, size * 1.2);
        let Some(face) = self.get(id) else { return empty };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[face], &TextStyle::new(text, size, 0));

        if layout.glyphs().is_empty() {
            return empty;
        }

        // Width is the pen position after each glyph (x - xmin + advance),
        // not the bitmap right edge, so a trailing thin glyph still counts
        // its full advance.
        let mut extent = Vec2::new(0.0, size);
        for glyph in layout.glyphs() {
            let metrics = face.metrics_indexed(glyph.key.glyph_index, size);
            let pen = glyph.x - metrics.xmin as f32 + metrics.advance_width;
            extent.x = extent.x.max(pen.max(0.0));
            extent.y = extent.y.max(glyph.y + glyph.height as f32);
        }
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_measures_as_an_empty_line() {
        let fonts = Fonts::new();
        let size = fonts.measure("10", FontId(0), 20.0);
        assert_eq!(size.x, 0.0);
        assert!((size.y - 24.0).abs() < 1e-6);
    }
}
