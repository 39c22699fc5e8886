//! Shape renderers, one per `DrawCmd` variant.

mod pass;

pub mod circle;
pub mod spoke;
pub mod text;
