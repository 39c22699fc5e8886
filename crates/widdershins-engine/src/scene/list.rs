use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// One recorded command plus the state it was recorded under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels; `None` draws everywhere.
    pub clip: Option<Rect>,
}

/// The frame's draw stream: commands with z-layers and scissor state,
/// replayable back-to-front.
///
/// Recording is append-only and O(1); the back-to-front permutation is
/// computed lazily and cached, so the several renderers that replay the same
/// list each frame sort it once. `clear` keeps every allocation warm.
///
/// Scissor regions nest via [`push_clip`](Self::push_clip) /
/// [`pop_clip`](Self::pop_clip); an inner region is intersected with its
/// parent and can only shrink. The face uses one region, to confine the
/// glass reflection band to the dial.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    /// Insertion counter; breaks ties within a z-layer.
    seq: u32,

    paint_order: Vec<usize>,
    order_stale: bool,

    /// Active scissor rects. The top is the current effective clip, already
    /// intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets recorded items and scissor state; keeps capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.paint_order.clear();
        self.clip_stack.clear();
        self.seq = 0;
        self.order_stale = true;
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Records `cmd` on layer `z`, under the current scissor region.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let key = SortKey { z, order: self.seq };
        self.seq = self.seq.wrapping_add(1);

        self.items.push(DrawItem {
            key,
            cmd,
            clip: self.clip_stack.last().copied(),
        });
        self.order_stale = true;
    }

    /// Opens a scissor region; commands recorded until the matching
    /// [`pop_clip`](Self::pop_clip) are confined to `rect` (intersected
    /// with any enclosing region).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        // A region disjoint from its parent degenerates to a zero-area
        // rect, which the renderers skip wholesale.
        let clip = match self.clip_stack.last() {
            Some(outer) => outer.intersect(&rect).unwrap_or_default(),
            None => rect,
        };
        self.clip_stack.push(clip);
    }

    /// Closes the innermost scissor region.
    ///
    /// Debug builds panic when there is no open region.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip without push_clip");
        self.clip_stack.pop();
    }

    /// Replays the recorded items back-to-front: z-layer first, insertion
    /// order within a layer.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.order_stale {
            self.paint_order.clear();
            self.paint_order.extend(0..self.items.len());

            let items = &self.items;
            self.paint_order.sort_by_key(|&i| items[i].key);
            self.order_stale = false;
        }

        self.paint_order.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn solid(list: &mut DrawList, z: i32, tag: f32) {
        list.push_solid_circle(ZIndex(z), Vec2::new(tag, 0.0), 1.0, Color::TRANSPARENT);
    }

    fn tags_in_paint_order(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center.x,
                _ => panic!("unexpected command"),
            })
            .collect()
    }

    // ── ordering ──

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        solid(&mut list, 5, 1.0);
        solid(&mut list, 0, 2.0);
        solid(&mut list, 5, 3.0);
        solid(&mut list, -1, 4.0);
        assert_eq!(tags_in_paint_order(&mut list), vec![4.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn clear_resets_ordering_state() {
        let mut list = DrawList::new();
        solid(&mut list, 1, 1.0);
        list.clear();
        solid(&mut list, 0, 2.0);
        assert_eq!(tags_in_paint_order(&mut list), vec![2.0]);
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn pushes_after_iteration_are_picked_up() {
        let mut list = DrawList::new();
        solid(&mut list, 0, 1.0);
        assert_eq!(tags_in_paint_order(&mut list), vec![1.0]);

        solid(&mut list, -1, 2.0);
        assert_eq!(tags_in_paint_order(&mut list), vec![2.0, 1.0]);
    }

    // ── clipping ──

    #[test]
    fn items_inherit_the_active_clip() {
        let mut list = DrawList::new();
        solid(&mut list, 0, 1.0);
        list.push_clip(rect(10.0, 10.0, 50.0, 50.0));
        solid(&mut list, 0, 2.0);
        list.pop_clip();
        solid(&mut list, 0, 3.0);

        let clips: Vec<_> = list.items().iter().map(|i| i.clip).collect();
        assert_eq!(clips[0], None);
        assert_eq!(clips[1], Some(rect(10.0, 10.0, 50.0, 50.0)));
        assert_eq!(clips[2], None);
    }

    #[test]
    fn nested_clips_intersect_with_parent() {
        let mut list = DrawList::new();
        list.push_clip(rect(0.0, 0.0, 100.0, 100.0));
        list.push_clip(rect(50.0, 50.0, 100.0, 100.0));
        solid(&mut list, 0, 1.0);
        list.pop_clip();
        list.pop_clip();

        assert_eq!(list.items()[0].clip, Some(rect(50.0, 50.0, 50.0, 50.0)));
    }

    #[test]
    fn disjoint_nested_clip_becomes_zero_area() {
        let mut list = DrawList::new();
        list.push_clip(rect(0.0, 0.0, 10.0, 10.0));
        list.push_clip(rect(50.0, 50.0, 10.0, 10.0));
        solid(&mut list, 0, 1.0);
        list.pop_clip();
        list.pop_clip();

        let clip = list.items()[0].clip.unwrap();
        assert!(clip.is_empty());
    }
}
