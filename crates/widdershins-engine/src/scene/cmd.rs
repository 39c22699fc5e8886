use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::spoke::SpokeCmd;
use crate::scene::shapes::text::TextCmd;

/// One recordable shape.
///
/// Three shapes cover the whole clock: circles (face, hub, toggle thumb),
/// spokes (hands, tick marks, anything capsule-shaped radiating from a
/// pivot), and text (numerals, date, location). A new shape needs a payload
/// module under `scene::shapes`, a variant here, and a renderer under
/// `render::shapes` that knows how to batch it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Spoke(SpokeCmd),
    Text(TextCmd),
}
