//! What the app wants drawn this frame, as renderer-agnostic commands.
//!
//! [`DrawList`] records, [`ZIndex`] plus insertion order decides paint
//! order, and each shape under `scene::shapes` owns its payload type and
//! push helpers.

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
