//! Fixed layout numbers and the two color palettes.
//!
//! Everything visual that never animates lives here: window and face
//! geometry, hand proportions, glass-layer opacities, and the light/dark
//! [`Palette`] pair the theme toggle switches between. The painter reads
//! these; nothing here is mutable at runtime.

use widdershins_clock::{ClockFace, Theme};
use widdershins_engine::{Color, Rect, Vec2};

// ── Window & face layout ─────────────────────────────────────────────────────

/// Window client size in logical pixels. The window is not resizable, so the
/// whole layout is absolute.
pub const WINDOW_WIDTH: f64 = 460.0;
pub const WINDOW_HEIGHT: f64 = 560.0;

/// Dial center in window coordinates.
pub const FACE_CENTER: Vec2 = Vec2::new(230.0, 205.0);

/// Face radius; the face itself is 350 logical pixels across.
pub const FACE_RADIUS: f32 = (widdershins_clock::DEFAULT_FACE_DIAMETER as f32) / 2.0;

/// Width of the rim ring drawn along the face's outer edge.
pub const RIM_WIDTH: f32 = 6.0;

// ── Dial markers ─────────────────────────────────────────────────────────────

/// Minute ticks: radial capsules near the face edge, face-local radii.
pub const TICK_INNER: f32 = 158.0;
pub const TICK_OUTER: f32 = 167.0;
pub const TICK_WIDTH: f32 = 2.0;

pub const NUMERAL_SIZE: f32 = 22.0;

/// Half extents of the text box the dial builder subtracts when placing a
/// numeral. The painter adds them back to recover the ring point, then
/// centers the measured glyph run on it.
pub const NUMERAL_BOX_HALF: Vec2 = Vec2::new(12.0, 9.0);

// ── Hands ────────────────────────────────────────────────────────────────────
//
// Lengths are distances from the dial center along the hand's angle; tails
// reach past the pivot in the opposite direction. Widths are full capsule
// thicknesses.

pub const HOUR_TAIL: f32 = -18.0;
pub const HOUR_LENGTH: f32 = 92.0;
pub const HOUR_WIDTH: f32 = 9.0;

pub const MINUTE_TAIL: f32 = -24.0;
pub const MINUTE_LENGTH: f32 = 136.0;
pub const MINUTE_WIDTH: f32 = 6.0;

pub const SECOND_TAIL: f32 = -32.0;
pub const SECOND_LENGTH: f32 = 150.0;
pub const SECOND_WIDTH: f32 = 2.5;

/// Center cap over the hand pivots, and the pin on top of it.
pub const HUB_RADIUS: f32 = 8.0;
pub const HUB_PIN_RADIUS: f32 = 3.5;

// ── Labels & toggle ──────────────────────────────────────────────────────────

pub const LABEL_SIZE: f32 = 15.0;

/// Date and timezone lines, centered below the face.
pub const DATE_CENTER_Y: f32 = 410.0;
pub const ZONE_CENTER_Y: f32 = 436.0;

pub const TOGGLE_CENTER: Vec2 = Vec2::new(230.0, 500.0);
pub const TOGGLE_SIZE: Vec2 = Vec2::new(46.0, 24.0);

/// Hit/paint rect of the theme toggle.
pub fn toggle_rect() -> Rect {
    Rect::from_center(TOGGLE_CENTER, TOGGLE_SIZE)
}

// ── Glass layers ─────────────────────────────────────────────────────────────
//
// The glass illusion is three translucent layers over the dial: a dark ring
// hugging the rim from inside, a white gradient wash across the whole disc,
// and a tilted highlight band. Their opacities are fixed.

pub const INNER_SHADOW_OPACITY: f32 = 0.15;
pub const INNER_SHADOW_WIDTH: f32 = 14.0;

/// Gradient wash: white fading along the top-left → bottom-right diagonal.
pub const GLOSS_OPACITY: f64 = 0.3;
pub const GLOSS_ALPHA_NEAR: f32 = 0.9;
pub const GLOSS_ALPHA_FAR: f32 = 0.1;

/// Highlight band tilted 15° counter-clockwise off horizontal, crossing the
/// upper half of the face.
pub const REFLECTION_OPACITY: f64 = 0.5;
pub const REFLECTION_ANGLE_DEG: f32 = 75.0;
pub const REFLECTION_LIFT: f32 = 78.0;
pub const REFLECTION_REACH: f32 = 140.0;
pub const REFLECTION_WIDTH: f32 = 62.0;
pub const REFLECTION_ALPHA: f32 = 0.4;

/// Writes the fixed glass opacities into the face's overlay slots. Absent
/// slots are skipped; the painter then leaves that layer out entirely.
pub fn apply_glass(face: &mut ClockFace) {
    if let Some(overlay) = face.glass_overlay.as_mut() {
        overlay.opacity = GLOSS_OPACITY;
    }
    if let Some(overlay) = face.reflection_overlay.as_mut() {
        overlay.opacity = REFLECTION_OPACITY;
    }
}

// ── Palettes ─────────────────────────────────────────────────────────────────

/// One theme's worth of colors. All values are premultiplied, as the
/// renderers require; translucent entries are written out pre-scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window clear color behind everything.
    pub backdrop: Color,
    pub face: Color,
    pub rim: Color,
    pub tick: Color,
    pub numeral: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    pub second_shadow: Color,
    pub hub: Color,
    pub hub_pin: Color,
    pub label: Color,
    pub toggle_track_off: Color,
    pub toggle_track_on: Color,
    pub toggle_thumb: Color,
}

pub const LIGHT: Palette = Palette {
    backdrop: Color::from_premul(0.89, 0.91, 0.94, 1.0),
    face: Color::from_premul(0.97, 0.97, 0.98, 1.0),
    rim: Color::from_premul(0.78, 0.81, 0.86, 1.0),
    tick: Color::from_premul(0.55, 0.58, 0.64, 1.0),
    numeral: Color::from_premul(0.18, 0.20, 0.25, 1.0),
    hour_hand: Color::from_premul(0.13, 0.15, 0.20, 1.0),
    minute_hand: Color::from_premul(0.13, 0.15, 0.20, 1.0),
    second_hand: Color::from_premul(0.85, 0.25, 0.20, 1.0),
    second_shadow: Color::from_premul(0.0, 0.0, 0.0, 0.25),
    hub: Color::from_premul(0.13, 0.15, 0.20, 1.0),
    hub_pin: Color::from_premul(0.85, 0.25, 0.20, 1.0),
    label: Color::from_premul(0.35, 0.38, 0.45, 1.0),
    toggle_track_off: Color::from_premul(0.72, 0.75, 0.81, 1.0),
    toggle_track_on: Color::from_premul(0.10, 0.70, 0.45, 1.0),
    toggle_thumb: Color::from_premul(1.0, 1.0, 1.0, 1.0),
};

pub const DARK: Palette = Palette {
    backdrop: Color::from_premul(0.07, 0.08, 0.10, 1.0),
    face: Color::from_premul(0.12, 0.13, 0.17, 1.0),
    rim: Color::from_premul(0.25, 0.27, 0.33, 1.0),
    tick: Color::from_premul(0.45, 0.48, 0.55, 1.0),
    numeral: Color::from_premul(0.88, 0.90, 0.94, 1.0),
    hour_hand: Color::from_premul(0.92, 0.93, 0.96, 1.0),
    minute_hand: Color::from_premul(0.92, 0.93, 0.96, 1.0),
    second_hand: Color::from_premul(0.95, 0.45, 0.35, 1.0),
    second_shadow: Color::from_premul(0.0, 0.0, 0.0, 0.45),
    hub: Color::from_premul(0.92, 0.93, 0.96, 1.0),
    hub_pin: Color::from_premul(0.95, 0.45, 0.35, 1.0),
    label: Color::from_premul(0.60, 0.63, 0.70, 1.0),
    toggle_track_off: Color::from_premul(0.30, 0.33, 0.40, 1.0),
    toggle_track_on: Color::from_premul(0.10, 0.70, 0.45, 1.0),
    toggle_thumb: Color::from_premul(1.0, 1.0, 1.0, 1.0),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette_colors(p: &Palette) -> [Color; 15] {
        [
            p.backdrop,
            p.face,
            p.rim,
            p.tick,
            p.numeral,
            p.hour_hand,
            p.minute_hand,
            p.second_hand,
            p.second_shadow,
            p.hub,
            p.hub_pin,
            p.label,
            p.toggle_track_off,
            p.toggle_track_on,
            p.toggle_thumb,
        ]
    }

    // ── palettes ─────────────────────────────────────────────────────────────

    #[test]
    fn palette_selects_by_theme() {
        assert_eq!(*palette(Theme::Light), LIGHT);
        assert_eq!(*palette(Theme::Dark), DARK);
        assert_ne!(LIGHT.face, DARK.face);
    }

    #[test]
    fn palette_colors_are_premultiplied() {
        for p in [&LIGHT, &DARK] {
            for c in palette_colors(p) {
                assert!(c.r <= c.a && c.g <= c.a && c.b <= c.a, "straight alpha: {c:?}");
            }
        }
    }

    // ── geometry ─────────────────────────────────────────────────────────────

    #[test]
    fn toggle_rect_is_centered_on_its_anchor() {
        let rect = toggle_rect();
        assert_eq!(rect.center(), TOGGLE_CENTER);
        assert_eq!(rect.size, TOGGLE_SIZE);
    }

    #[test]
    fn face_fits_inside_the_window() {
        assert!(FACE_CENTER.x - FACE_RADIUS > 0.0);
        assert!(FACE_CENTER.x + FACE_RADIUS < WINDOW_WIDTH as f32);
        assert!(FACE_CENTER.y - FACE_RADIUS > 0.0);
        assert!(FACE_CENTER.y + FACE_RADIUS < WINDOW_HEIGHT as f32);
    }

    // ── glass ────────────────────────────────────────────────────────────────

    #[test]
    fn apply_glass_sets_the_fixed_overlay_opacities() {
        let mut face = ClockFace::standard(350.0);
        apply_glass(&mut face);
        assert_eq!(face.glass_overlay.unwrap().opacity, GLOSS_OPACITY);
        assert_eq!(face.reflection_overlay.unwrap().opacity, REFLECTION_OPACITY);
    }

    #[test]
    fn apply_glass_tolerates_missing_overlays() {
        let mut face = ClockFace::new();
        apply_glass(&mut face);
        assert!(face.glass_overlay.is_none());
        assert!(face.reflection_overlay.is_none());
    }
}
