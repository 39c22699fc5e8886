//! Dial construction.
//!
//! Sixty markers around the face: a numeral every five indices, a plain tick
//! elsewhere. Built once at startup; markers are immutable afterwards.

use crate::face::ClockFace;

/// Fallback face extent when the host never measured one.
pub const DEFAULT_FACE_DIAMETER: f64 = 350.0;

/// Markers per dial.
pub const MARKER_COUNT: usize = 60;

/// Marker ring radius as a fraction of the face diameter.
const RADIUS_RATIO: f64 = 0.414;

/// Half extents of a numeral's text box, used to center it on its ring point.
const NUMERAL_HALF_WIDTH:  f64 = 12.0;
const NUMERAL_HALF_HEIGHT: f64 = 9.0;

/// One dial marker, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum DialMarker {
    /// An hour numeral, positioned by its top-left corner.
    Numeral { left: f64, top: f64, label: String },
    /// A minute tick, rotated in place about the dial center.
    Tick { angle_deg: f64 },
}

/// Append the 60 dial markers to the face's dial container.
///
/// Markers are appended unconditionally: running this twice on the same dial
/// leaves it with duplicates. Hosts run it exactly once at startup.
///
/// Absent dial container: no-op. Unmeasured face: positions fall back to
/// [`DEFAULT_FACE_DIAMETER`].
///
/// Numeral labels run 12, 11, 10, … 1 with increasing index — the labels
/// wind counter-clockwise, matching the hands' reverse travel.
pub fn build_dial(face: &mut ClockFace) {
    let Some(dial) = face.dial.as_mut() else {
        return;
    };
    let diameter = face.face_diameter.unwrap_or(DEFAULT_FACE_DIAMETER);
    let radius = diameter * RADIUS_RATIO;
    let center = diameter / 2.0;

    for i in 0..MARKER_COUNT {
        let angle_deg = i as f64 * 6.0;
        if i % 5 == 0 {
            let rad = angle_deg.to_radians();
            let label = if i == 0 { "12".to_string() } else { (12 - i / 5).to_string() };
            dial.markers.push(DialMarker::Numeral {
                left: center + rad.sin() * radius - NUMERAL_HALF_WIDTH,
                top:  center - rad.cos() * radius - NUMERAL_HALF_HEIGHT,
                label,
            });
        } else {
            dial.markers.push(DialMarker::Tick { angle_deg });
        }
    }
}
