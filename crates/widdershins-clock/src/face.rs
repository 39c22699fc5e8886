//! The retained clock-face model.
//!
//! A [`ClockFace`] is the widget's boundary with its host: a set of named
//! attachment slots the animator writes to and the host paints from. Every
//! slot is optional; writers check presence and skip absent slots rather
//! than fail (see the crate docs on degraded operation).

use crate::dial::DialMarker;
use crate::theme::Theme;

/// A rotatable hand attachment. Angles are degrees, negative-going.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hand {
    pub angle_deg: f64,
}

/// A one-line text attachment with a one-time-write marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    pub text:        String,
    pub initialized: bool,
}

/// The dial container. Owns the markers appended by the dial builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dial {
    pub markers: Vec<DialMarker>,
}

/// A static decorative layer. Never animated; opacity is set once when the
/// host applies its visual style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub opacity: f64,
}

impl Default for Overlay {
    fn default() -> Self {
        Self { opacity: 1.0 }
    }
}

/// The theme-toggle control. `dark` mirrors the active theme so the host can
/// pick the matching glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    pub dark: bool,
}

/// Named attachment points of one clock widget.
///
/// The seconds hand is a two-part assembly: the `second_hand` slot is the
/// rotating container, and `second_shadow` trails it by a fixed offset for
/// the drop-shadow illusion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockFace {
    pub dial:               Option<Dial>,
    /// Measured face extent in layout units; `None` means unmeasured.
    pub face_diameter:      Option<f64>,
    pub hour_hand:          Option<Hand>,
    pub minute_hand:        Option<Hand>,
    /// The rotating seconds-hand container; required for animation start.
    pub second_hand:        Option<Hand>,
    pub second_shadow:      Option<Hand>,
    pub date_label:         Option<Label>,
    pub zone_label:         Option<Label>,
    pub glass_overlay:      Option<Overlay>,
    pub reflection_overlay: Option<Overlay>,
    pub theme_toggle:       Option<Toggle>,
    /// Root visual context; palettes key off this.
    pub theme:              Theme,
}

impl ClockFace {
    /// An empty face: no slots attached, Light theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// A face with every slot attached and the given measured diameter.
    pub fn standard(diameter: f64) -> Self {
        Self {
            dial:               Some(Dial::default()),
            face_diameter:      Some(diameter),
            hour_hand:          Some(Hand::default()),
            minute_hand:        Some(Hand::default()),
            second_hand:        Some(Hand::default()),
            second_shadow:      Some(Hand::default()),
            date_label:         Some(Label::default()),
            zone_label:         Some(Label::default()),
            glass_overlay:      Some(Overlay::default()),
            reflection_overlay: Some(Overlay::default()),
            theme_toggle:       Some(Toggle::default()),
            theme:              Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_face_has_no_attachments() {
        let face = ClockFace::new();
        assert!(face.dial.is_none());
        assert!(face.hour_hand.is_none());
        assert!(face.second_hand.is_none());
        assert_eq!(face.theme, Theme::Light);
    }

    #[test]
    fn standard_face_attaches_every_slot() {
        let face = ClockFace::standard(350.0);
        assert!(face.dial.is_some());
        assert_eq!(face.face_diameter, Some(350.0));
        assert!(face.hour_hand.is_some());
        assert!(face.minute_hand.is_some());
        assert!(face.second_hand.is_some());
        assert!(face.second_shadow.is_some());
        assert!(face.date_label.is_some());
        assert!(face.zone_label.is_some());
        assert!(face.glass_overlay.is_some());
        assert!(face.reflection_overlay.is_some());
        assert!(face.theme_toggle.is_some());
    }

    #[test]
    fn labels_start_unwritten() {
        let face = ClockFace::standard(350.0);
        let date = face.date_label.unwrap();
        assert!(date.text.is_empty());
        assert!(!face.zone_label.unwrap().initialized);
    }
}
