//! Theme preference and its persistence.
//!
//! One binary choice, stored as a single word in a plain file under the user
//! config directory. Storage failures degrade to in-memory state; they never
//! stop the clock.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::face::ClockFace;

/// The two visual palettes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the exact word `"dark"` selects Dark;
    /// anything else, including absence, is Light.
    pub fn from_saved(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Set the face's theme and mirror it on the toggle control.
pub fn apply_theme(face: &mut ClockFace, theme: Theme) {
    face.theme = theme;
    if let Some(toggle) = face.theme_toggle.as_mut() {
        toggle.dark = theme == Theme::Dark;
    }
}

/// Flip the face's theme, re-apply it, and persist the new value.
/// Returns the theme now in effect.
pub fn toggle_theme(face: &mut ClockFace, store: &PrefStore) -> Theme {
    let next = face.theme.toggled();
    apply_theme(face, next);
    store.save(next);
    next
}

/// Plain-file storage for the theme preference.
///
/// A store without a resolvable path still satisfies reads (Light) and
/// swallows writes, so hosts on odd platforms keep a working toggle.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: Option<PathBuf>,
}

impl PrefStore {
    /// Store under the user config directory:
    /// `<config>/widdershins/theme`, falling back to `~/.config` when the
    /// platform reports no config directory.
    pub fn user_default() -> Self {
        let base = dirs::config_dir().or_else(|| dirs::home_dir().map(|home| home.join(".config")));
        let path = base.map(|base| base.join("widdershins").join("theme"));
        if path.is_none() {
            log::warn!("no config directory found; theme preference will not persist");
        }
        Self { path }
    }

    /// Store at an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Read the persisted theme. Absent or unreadable → Light.
    pub fn load(&self) -> Theme {
        let Some(path) = &self.path else {
            return Theme::Light;
        };
        match fs::read_to_string(path) {
            Ok(raw) => Theme::from_saved(Some(raw.trim())),
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    log::warn!("could not read {}: {err}", path.display());
                }
                Theme::Light
            }
        }
    }

    /// Persist the theme, creating parent directories as needed. Failures
    /// are logged and otherwise ignored.
    pub fn save(&self, theme: Theme) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("could not create {}: {err}", parent.display());
                return;
            }
        }
        if let Err(err) = fs::write(path, theme.as_str()) {
            log::warn!("could not persist theme to {}: {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Toggle;

    // ── parsing ──────────────────────────────────────────────────────────────

    #[test]
    fn only_the_exact_dark_word_selects_dark() {
        assert_eq!(Theme::from_saved(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_saved(Some("light")), Theme::Light);
        assert_eq!(Theme::from_saved(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_saved(Some("")), Theme::Light);
        assert_eq!(Theme::from_saved(None), Theme::Light);
    }

    #[test]
    fn spellings_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_saved(Some(theme.as_str())), theme);
        }
    }

    // ── toggling ─────────────────────────────────────────────────────────────

    #[test]
    fn toggling_twice_restores_theme_and_control_state() {
        let mut face = ClockFace::standard(350.0);
        let store = PrefStore { path: None };
        apply_theme(&mut face, Theme::Light);
        let original_toggle = face.theme_toggle;

        toggle_theme(&mut face, &store);
        assert_eq!(face.theme, Theme::Dark);
        assert_eq!(face.theme_toggle, Some(Toggle { dark: true }));

        toggle_theme(&mut face, &store);
        assert_eq!(face.theme, Theme::Light);
        assert_eq!(face.theme_toggle, original_toggle);
    }

    #[test]
    fn apply_theme_tolerates_missing_toggle_control() {
        let mut face = ClockFace::new();
        apply_theme(&mut face, Theme::Dark);
        assert_eq!(face.theme, Theme::Dark);
        assert!(face.theme_toggle.is_none());
    }

    // ── persistence ──────────────────────────────────────────────────────────

    #[test]
    fn pathless_store_reads_light_and_swallows_writes() {
        let store = PrefStore { path: None };
        store.save(Theme::Dark);
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn persisted_round_trip_through_a_real_file() {
        let dir = std::env::temp_dir().join(format!("widdershins-theme-{}", std::process::id()));
        let store = PrefStore::at_path(dir.join("theme"));

        assert_eq!(store.load(), Theme::Light); // nothing persisted yet

        store.save(Theme::Dark);
        assert_eq!(store.load(), Theme::Dark);
        store.save(Theme::Light);
        assert_eq!(store.load(), Theme::Light);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
