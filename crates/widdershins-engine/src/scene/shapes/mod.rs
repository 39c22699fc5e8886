//! Shape payloads and their `DrawList` push helpers, one file per shape.

pub(crate) mod circle;
pub(crate) mod spoke;
pub(crate) mod text;

pub use circle::Border;
