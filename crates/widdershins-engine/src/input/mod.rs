//! Pointer input for the clock window.
//!
//! The face has exactly one interactive element, the theme toggle, so the
//! engine tracks one pointer and one button: position (logical pixels) for
//! hover feedback, and the primary-button release edge for activation.
//! Everything else the window system reports is ignored. No winit types
//! leak out of this module; the runtime feeds it already-translated calls.

use crate::coords::Vec2;

/// Pointer state for the window, updated by the runtime between frames.
///
/// Edge flags (`clicked`) accumulate until [`Pointer::end_frame`], which the
/// runtime calls after the app has seen the frame.
#[derive(Debug, Clone, Default)]
pub struct Pointer {
    /// Position in logical pixels; `None` while the cursor is outside the
    /// window.
    pub pos: Option<Vec2>,
    down: bool,
    released: bool,
}

impl Pointer {
    /// The primary button came back up since the last frame.
    ///
    /// Click controls activate on this edge, so a press-drag-away never
    /// fires and a held button fires exactly once.
    pub fn clicked(&self) -> bool {
        self.released
    }

    /// The primary button is currently held.
    pub fn primary_down(&self) -> bool {
        self.down
    }

    /// Cursor moved to `pos`.
    pub fn moved_to(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    /// Cursor left the window.
    pub fn left_window(&mut self) {
        self.pos = None;
    }

    /// Window focus changed.
    ///
    /// Losing focus forgets a held button, so the release that lands in
    /// some other window cannot register as a click here.
    pub fn focus_changed(&mut self, focused: bool) {
        if !focused {
            self.down = false;
        }
    }

    /// Primary button went down or came up.
    ///
    /// A release only counts as a click edge if this pointer saw the press;
    /// stray releases (press started outside the window) are dropped.
    pub fn primary_changed(&mut self, down: bool) {
        if !down && self.down {
            self.released = true;
        }
        self.down = down;
    }

    /// Clears the per-frame edge flags. State (`pos`, held button) persists.
    pub fn end_frame(&mut self) {
        self.released = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_release_is_one_click() {
        let mut p = Pointer::default();
        p.primary_changed(true);
        assert!(p.primary_down());
        assert!(!p.clicked());

        p.primary_changed(false);
        assert!(p.clicked());

        p.end_frame();
        assert!(!p.clicked());
        assert!(!p.primary_down());
    }

    #[test]
    fn stray_release_is_not_a_click() {
        let mut p = Pointer::default();
        p.primary_changed(false);
        assert!(!p.clicked());
    }

    #[test]
    fn focus_loss_swallows_the_release() {
        let mut p = Pointer::default();
        p.primary_changed(true);
        p.focus_changed(false);
        p.primary_changed(false);
        assert!(!p.clicked());
    }

    #[test]
    fn leaving_the_window_clears_position() {
        let mut p = Pointer::default();
        p.moved_to(Vec2::new(5.0, 6.0));
        assert_eq!(p.pos, Some(Vec2::new(5.0, 6.0)));

        p.left_window();
        assert_eq!(p.pos, None);
    }

    #[test]
    fn click_edge_survives_until_end_frame() {
        let mut p = Pointer::default();
        p.primary_changed(true);
        p.primary_changed(false);
        p.moved_to(Vec2::new(1.0, 1.0));
        assert!(p.clicked(), "later motion must not eat the click");
    }
}
