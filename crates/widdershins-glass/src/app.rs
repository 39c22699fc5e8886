//! The windowed application: face model, animator, renderers, input.

use std::time::Instant;

use anyhow::{Context, Result};

use widdershins_clock::{
    AnimationMode, Animator, ClockFace, DEFAULT_FACE_DIAMETER, LocalSample, PollOutcome,
    PollSchedule, PrefStore, apply_theme, build_dial, toggle_theme,
};
use widdershins_engine::window::CursorIcon;
use widdershins_engine::{
    App, AppControl, CircleRenderer, DrawList, FontId, Fonts, FrameCtx, SpokeRenderer,
    TextRenderer,
};

use crate::paint;
use crate::style;

/// The glass clock.
///
/// Owns the retained [`ClockFace`] the animator writes into, the preference
/// store behind the theme toggle, and the GPU-side renderers. Frames
/// re-sample the wall clock, advance the animator, repaint the draw lists,
/// and render; tick-mode seconds polling rides the runtime's timer wakes.
pub struct GlassApp {
    face: ClockFace,
    animator: Animator,
    store: PrefStore,

    fonts: Fonts,
    font: FontId,

    // One frame is four passes: base circles, spokes, overlay circles, text.
    // Each renderer draws once per frame, so the layers a pass cannot
    // express live on the second list.
    base: DrawList,
    overlay: DrawList,
    under_circles: CircleRenderer,
    spokes: SpokeRenderer,
    over_circles: CircleRenderer,
    text: TextRenderer,

    /// Deadline of the scheduled seconds poll and the token it was armed
    /// with. `None` while the seconds hand is frame-driven.
    pending_poll: Option<(Instant, PollSchedule)>,
}

impl GlassApp {
    /// Wires the face and starts the clock: persisted theme first, then the
    /// dial markers, the glass opacities, and the animator's first update.
    pub fn new(font_data: &[u8], mode: AnimationMode) -> Result<Self> {
        let mut fonts = Fonts::new();
        let font = fonts.load(font_data).context("parsing the clock font")?;

        let store = PrefStore::user_default();
        let mut face = ClockFace::standard(DEFAULT_FACE_DIAMETER);
        apply_theme(&mut face, store.load());
        build_dial(&mut face);
        style::apply_glass(&mut face);

        let mut animator = Animator::new(mode);
        animator.start(&mut face, &LocalSample::now());

        let mut app = Self {
            face,
            animator,
            store,
            fonts,
            font,
            base: DrawList::new(),
            overlay: DrawList::new(),
            under_circles: CircleRenderer::new(),
            spokes: SpokeRenderer::new(),
            over_circles: CircleRenderer::new(),
            text: TextRenderer::new(),
            pending_poll: None,
        };
        app.arm_poll(Instant::now());
        Ok(app)
    }

    /// Schedules the next seconds poll from the animator's live task.
    fn arm_poll(&mut self, now: Instant) {
        self.pending_poll = self
            .animator
            .next_poll()
            .map(|schedule| (now + schedule.interval, schedule));
    }
}

impl App for GlassApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let sample = LocalSample::now();
        self.animator.on_frame(&mut self.face, &sample);

        // Theme toggle: hover feedback, flip on release.
        let toggle_rect = style::toggle_rect();
        let hover = ctx.pointer.pos.is_some_and(|pos| toggle_rect.contains(pos));
        ctx.window.set_cursor(if hover {
            CursorIcon::Pointer
        } else {
            CursorIcon::Default
        });
        if hover && ctx.pointer.clicked() {
            let theme = toggle_theme(&mut self.face, &self.store);
            log::debug!("theme toggled to {theme:?}");
        }

        self.base.clear();
        self.overlay.clear();
        paint::paint_clock(
            &mut self.base,
            &mut self.overlay,
            &self.fonts,
            self.font,
            &self.face,
        );

        let backdrop = style::palette(self.face.theme).backdrop;
        let base = &mut self.base;
        let overlay = &mut self.overlay;
        let fonts = &self.fonts;
        let under_circles = &mut self.under_circles;
        let spokes = &mut self.spokes;
        let over_circles = &mut self.over_circles;
        let text = &mut self.text;

        ctx.render(backdrop, |rctx, target| {
            under_circles.render(rctx, target, base);
            spokes.render(rctx, target, base);
            over_circles.render(rctx, target, overlay);
            text.render(rctx, target, base, fonts);
        })
    }

    fn next_wake(&mut self) -> Option<Instant> {
        self.pending_poll.as_ref().map(|(due, _)| *due)
    }

    fn on_wake(&mut self, now: Instant) -> AppControl {
        if let Some((_, schedule)) = self.pending_poll {
            let outcome = self
                .animator
                .poll(&mut self.face, &LocalSample::now(), schedule.token);
            if outcome == PollOutcome::Stale {
                log::debug!("seconds poll carried a stale token; rescheduling");
            }
        }
        self.arm_poll(now);
        AppControl::Continue
    }
}
