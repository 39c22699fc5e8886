/// Z-layer for draw items. Higher layers paint over lower ones.
///
/// The inner value is public so callers can lay out their layer tables as
/// plain consts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

/// Paint-order key: z-layer first, then insertion order within the layer.
///
/// Field order matters here: the derived `Ord` compares `z` before `order`,
/// which gives the back-to-front, insertion-stable ordering the draw list
/// relies on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}
