//! Turns the [`ClockFace`] model into draw commands.
//!
//! The frame is four GPU passes in a fixed order: base-list circles, then
//! all spokes, then overlay-list circles, then text. Z-indices order items
//! within a pass; anything that must cover the spoke pass (the glass wash,
//! the hub cap, the toggle thumb) goes on the overlay list instead.
//!
//! Every slot on the face is optional. A painter that finds its slot absent
//! draws nothing and the rest of the clock is unaffected.

use widdershins_clock::{ClockFace, DialMarker};
use widdershins_engine::{
    Border, Color, DrawList, FontId, Fonts, LinearGradient, Paint, Rect, Vec2, ZIndex,
};

use crate::style::{self, Palette};

// Base list layers.
const Z_FACE: ZIndex = ZIndex(0);
const Z_INNER_SHADOW: ZIndex = ZIndex(1);
const Z_DIAL: ZIndex = ZIndex(2);
const Z_HANDS: ZIndex = ZIndex(3);
const Z_REFLECTION: ZIndex = ZIndex(4);
const Z_TOGGLE: ZIndex = ZIndex(5);
const Z_LABELS: ZIndex = ZIndex(6);

// Overlay list layers.
const Z_GLASS: ZIndex = ZIndex(0);
const Z_HUB: ZIndex = ZIndex(1);
const Z_THUMB: ZIndex = ZIndex(2);

/// Records one frame of the clock into `base` and `overlay`.
///
/// The caller clears both lists first and hands `base` to the under-circle,
/// spoke, and text renderers and `overlay` to the over-circle renderer.
pub fn paint_clock(
    base: &mut DrawList,
    overlay: &mut DrawList,
    fonts: &Fonts,
    font: FontId,
    face: &ClockFace,
) {
    let palette = style::palette(face.theme);
    paint_face(base, palette);
    paint_dial(base, fonts, font, face, palette);
    paint_hands(base, face, palette);
    paint_glass(base, overlay, face);
    paint_hub(overlay, palette);
    paint_labels(base, fonts, font, face, palette);
    paint_toggle(base, overlay, face, palette);
}

fn paint_face(list: &mut DrawList, palette: &Palette) {
    list.push_circle(
        Z_FACE,
        style::FACE_CENTER,
        style::FACE_RADIUS,
        Paint::Solid(palette.face),
        Some(Border::new(style::RIM_WIDTH, palette.rim)),
    );
    // Inner shadow: a dark ring hugging the rim from inside.
    list.push_ring(
        Z_INNER_SHADOW,
        style::FACE_CENTER,
        style::FACE_RADIUS - style::RIM_WIDTH,
        style::INNER_SHADOW_WIDTH,
        Color::from_straight(0.0, 0.0, 0.0, style::INNER_SHADOW_OPACITY),
    );
}

fn paint_dial(
    list: &mut DrawList,
    fonts: &Fonts,
    font: FontId,
    face: &ClockFace,
    palette: &Palette,
) {
    let Some(dial) = face.dial.as_ref() else {
        return;
    };
    // Markers are positioned in face-local coordinates (top-left of the
    // face square at the origin).
    let face_origin = style::FACE_CENTER - Vec2::new(style::FACE_RADIUS, style::FACE_RADIUS);

    for marker in &dial.markers {
        match marker {
            DialMarker::Tick { angle_deg } => {
                list.push_solid_spoke(
                    Z_DIAL,
                    style::FACE_CENTER,
                    *angle_deg as f32,
                    style::TICK_INNER,
                    style::TICK_OUTER,
                    style::TICK_WIDTH,
                    palette.tick,
                );
            }
            DialMarker::Numeral { left, top, label } => {
                let ring_point =
                    face_origin + Vec2::new(*left as f32, *top as f32) + style::NUMERAL_BOX_HALF;
                let measured = fonts.measure(label, font, style::NUMERAL_SIZE);
                list.push_text(
                    Z_DIAL,
                    label.as_str(),
                    font,
                    style::NUMERAL_SIZE,
                    palette.numeral,
                    ring_point - measured / 2.0,
                );
            }
        }
    }
}

fn paint_hands(list: &mut DrawList, face: &ClockFace, palette: &Palette) {
    let pivot = style::FACE_CENTER;

    if let Some(hand) = face.hour_hand {
        list.push_solid_spoke(
            Z_HANDS,
            pivot,
            hand.angle_deg as f32,
            style::HOUR_TAIL,
            style::HOUR_LENGTH,
            style::HOUR_WIDTH,
            palette.hour_hand,
        );
    }
    if let Some(hand) = face.minute_hand {
        list.push_solid_spoke(
            Z_HANDS,
            pivot,
            hand.angle_deg as f32,
            style::MINUTE_TAIL,
            style::MINUTE_LENGTH,
            style::MINUTE_WIDTH,
            palette.minute_hand,
        );
    }
    // Shadow before hand, so the hand covers its own shadow near the pivot.
    if let Some(shadow) = face.second_shadow {
        list.push_solid_spoke(
            Z_HANDS,
            pivot,
            shadow.angle_deg as f32,
            style::SECOND_TAIL,
            style::SECOND_LENGTH,
            style::SECOND_WIDTH,
            palette.second_shadow,
        );
    }
    if let Some(hand) = face.second_hand {
        list.push_solid_spoke(
            Z_HANDS,
            pivot,
            hand.angle_deg as f32,
            style::SECOND_TAIL,
            style::SECOND_LENGTH,
            style::SECOND_WIDTH,
            palette.second_hand,
        );
    }
}

fn paint_glass(base: &mut DrawList, overlay: &mut DrawList, face: &ClockFace) {
    let center = style::FACE_CENTER;
    let inner_radius = style::FACE_RADIUS - style::RIM_WIDTH;

    if let Some(layer) = face.glass_overlay {
        // White wash along the lit diagonal, faded by the layer's opacity.
        let reach = style::FACE_RADIUS * std::f32::consts::FRAC_1_SQRT_2;
        let wash = LinearGradient::new(
            center - Vec2::new(reach, reach),
            center + Vec2::new(reach, reach),
            Color::from_straight(1.0, 1.0, 1.0, style::GLOSS_ALPHA_NEAR)
                .scale_alpha(layer.opacity as f32),
            Color::from_straight(1.0, 1.0, 1.0, style::GLOSS_ALPHA_FAR)
                .scale_alpha(layer.opacity as f32),
        );
        overlay.push_circle(
            Z_GLASS,
            center,
            inner_radius,
            Paint::LinearGradient(wash),
            None,
        );
    }

    if let Some(layer) = face.reflection_overlay {
        let band = Color::from_straight(1.0, 1.0, 1.0, style::REFLECTION_ALPHA)
            .scale_alpha(layer.opacity as f32);
        // The band's caps would poke outside the dial; confine it to the
        // face square.
        let face_square = Rect::from_center(center, Vec2::new(2.0, 2.0) * inner_radius);
        base.push_clip(face_square);
        base.push_solid_spoke(
            Z_REFLECTION,
            center - Vec2::new(0.0, style::REFLECTION_LIFT),
            style::REFLECTION_ANGLE_DEG,
            -style::REFLECTION_REACH,
            style::REFLECTION_REACH,
            style::REFLECTION_WIDTH,
            band,
        );
        base.pop_clip();
    }
}

fn paint_hub(overlay: &mut DrawList, palette: &Palette) {
    overlay.push_solid_circle(Z_HUB, style::FACE_CENTER, style::HUB_RADIUS, palette.hub);
    overlay.push_solid_circle(Z_HUB, style::FACE_CENTER, style::HUB_PIN_RADIUS, palette.hub_pin);
}

fn paint_labels(
    list: &mut DrawList,
    fonts: &Fonts,
    font: FontId,
    face: &ClockFace,
    palette: &Palette,
) {
    if let Some(label) = face.date_label.as_ref() {
        if !label.text.is_empty() {
            centered_line(list, fonts, font, &label.text, style::DATE_CENTER_Y, palette.label);
        }
    }
    if let Some(label) = face.zone_label.as_ref() {
        if label.initialized {
            centered_line(list, fonts, font, &label.text, style::ZONE_CENTER_Y, palette.label);
        }
    }
}

fn centered_line(
    list: &mut DrawList,
    fonts: &Fonts,
    font: FontId,
    text: &str,
    center_y: f32,
    color: Color,
) {
    let measured = fonts.measure(text, font, style::LABEL_SIZE);
    let origin = Vec2::new(
        style::FACE_CENTER.x - measured.x / 2.0,
        center_y - measured.y / 2.0,
    );
    list.push_text(Z_LABELS, text, font, style::LABEL_SIZE, color, origin);
}

fn paint_toggle(
    base: &mut DrawList,
    overlay: &mut DrawList,
    face: &ClockFace,
    palette: &Palette,
) {
    let Some(toggle) = face.theme_toggle else {
        return;
    };
    let rect = style::toggle_rect();
    let track = if toggle.dark {
        palette.toggle_track_on
    } else {
        palette.toggle_track_off
    };

    // Pill track: a horizontal capsule through the rect center.
    let half_span = (rect.size.x - rect.size.y) / 2.0;
    base.push_solid_spoke(
        Z_TOGGLE,
        rect.center(),
        90.0,
        -half_span,
        half_span,
        rect.size.y,
        track,
    );

    // Thumb rides the active side.
    let margin = rect.size.y * 0.13;
    let thumb_r = rect.size.y * 0.5 - margin;
    let thumb_x = if toggle.dark {
        rect.max().x - margin - thumb_r
    } else {
        rect.min().x + margin + thumb_r
    };
    overlay.push_solid_circle(
        Z_THUMB,
        Vec2::new(thumb_x, rect.center().y),
        thumb_r,
        palette.toggle_thumb,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use widdershins_clock::{Hand, Theme};
    use widdershins_engine::scene::DrawCmd;

    fn spoke_angles(list: &DrawList) -> Vec<f32> {
        list.items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Spoke(cmd) => Some(cmd.angle_deg),
                _ => None,
            })
            .collect()
    }

    fn circle_centers(list: &DrawList) -> Vec<Vec2> {
        list.items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Circle(cmd) => Some(cmd.center),
                _ => None,
            })
            .collect()
    }

    // ── face disc ────────────────────────────────────────────────────────────

    #[test]
    fn face_disc_carries_rim_and_inner_shadow() {
        let mut list = DrawList::new();
        paint_face(&mut list, style::palette(Theme::Light));

        let borders: Vec<_> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Circle(cmd) => cmd.border.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(borders.len(), 2);
        assert_eq!(borders[0].width, style::RIM_WIDTH);
        assert_eq!(borders[1].width, style::INNER_SHADOW_WIDTH);
        assert!(borders[1].color.a < 1.0);
    }

    // ── hands ────────────────────────────────────────────────────────────────

    #[test]
    fn hands_paint_as_spokes_at_the_model_angles() {
        let mut face = ClockFace::standard(350.0);
        face.hour_hand = Some(Hand { angle_deg: -300.0 });
        face.minute_hand = Some(Hand { angle_deg: -48.0 });
        face.second_hand = Some(Hand { angle_deg: -183.0 });
        face.second_shadow = Some(Hand { angle_deg: -183.5 });

        let mut list = DrawList::new();
        paint_hands(&mut list, &face, style::palette(Theme::Light));

        assert_eq!(spoke_angles(&list), vec![-300.0, -48.0, -183.5, -183.0]);
    }

    #[test]
    fn absent_hand_slots_are_skipped() {
        let mut list = DrawList::new();
        paint_hands(&mut list, &ClockFace::new(), style::palette(Theme::Light));
        assert!(list.items().is_empty());

        // Shadowless face still paints the three hands.
        let mut face = ClockFace::standard(350.0);
        face.second_shadow = None;
        paint_hands(&mut list, &face, style::palette(Theme::Light));
        assert_eq!(spoke_angles(&list).len(), 3);
    }

    #[test]
    fn shadow_is_recorded_before_the_second_hand() {
        let mut face = ClockFace::standard(350.0);
        face.second_hand = Some(Hand { angle_deg: -60.0 });
        face.second_shadow = Some(Hand { angle_deg: -60.5 });

        let mut list = DrawList::new();
        paint_hands(&mut list, &face, style::palette(Theme::Light));

        let angles = spoke_angles(&list);
        let shadow = angles.iter().position(|a| *a == -60.5).unwrap();
        let hand = angles.iter().position(|a| *a == -60.0).unwrap();
        assert!(shadow < hand);
    }

    // ── glass ────────────────────────────────────────────────────────────────

    #[test]
    fn glass_layers_follow_their_slots() {
        let face = ClockFace::standard(350.0);
        let mut base = DrawList::new();
        let mut overlay = DrawList::new();
        paint_glass(&mut base, &mut overlay, &face);

        // Gradient wash on the overlay list, clipped band on the base list.
        assert!(overlay.items().iter().any(|item| matches!(
            &item.cmd,
            DrawCmd::Circle(cmd) if matches!(cmd.paint, Paint::LinearGradient(_))
        )));
        let band = base
            .items()
            .iter()
            .find(|item| matches!(item.cmd, DrawCmd::Spoke(_)))
            .unwrap();
        assert!(band.clip.is_some());
    }

    #[test]
    fn missing_overlay_slots_paint_no_glass() {
        let mut base = DrawList::new();
        let mut overlay = DrawList::new();
        paint_glass(&mut base, &mut overlay, &ClockFace::new());
        assert!(base.items().is_empty());
        assert!(overlay.items().is_empty());
    }

    #[test]
    fn wash_alpha_is_scaled_by_the_overlay_opacity() {
        let mut face = ClockFace::standard(350.0);
        style::apply_glass(&mut face);

        let mut base = DrawList::new();
        let mut overlay = DrawList::new();
        paint_glass(&mut base, &mut overlay, &face);

        let DrawCmd::Circle(cmd) = &overlay.items()[0].cmd else {
            panic!("expected the wash circle");
        };
        let Paint::LinearGradient(wash) = &cmd.paint else {
            panic!("expected a gradient fill");
        };
        let expected = style::GLOSS_ALPHA_NEAR * style::GLOSS_OPACITY as f32;
        assert!((wash.from.a - expected).abs() < 1e-6);
    }

    // ── toggle ───────────────────────────────────────────────────────────────

    #[test]
    fn toggle_thumb_rides_the_active_side() {
        let mut face = ClockFace::standard(350.0);
        let palette = style::palette(Theme::Light);

        let mut base = DrawList::new();
        let mut overlay = DrawList::new();
        face.theme_toggle = Some(widdershins_clock::Toggle { dark: false });
        paint_toggle(&mut base, &mut overlay, &face, palette);
        let off_x = circle_centers(&overlay)[0].x;

        let mut base = DrawList::new();
        let mut overlay = DrawList::new();
        face.theme_toggle = Some(widdershins_clock::Toggle { dark: true });
        paint_toggle(&mut base, &mut overlay, &face, palette);
        let on_x = circle_centers(&overlay)[0].x;

        assert!(off_x < style::TOGGLE_CENTER.x);
        assert!(on_x > style::TOGGLE_CENTER.x);
        // Thumb rest positions mirror around the track center.
        let left_inset = off_x - style::toggle_rect().min().x;
        let right_inset = style::toggle_rect().max().x - on_x;
        assert!((left_inset - right_inset).abs() < 1e-4);
    }

    #[test]
    fn absent_toggle_slot_paints_nothing() {
        let mut face = ClockFace::standard(350.0);
        face.theme_toggle = None;
        let mut base = DrawList::new();
        let mut overlay = DrawList::new();
        paint_toggle(&mut base, &mut overlay, &face, style::palette(Theme::Light));
        assert!(base.items().is_empty());
        assert!(overlay.items().is_empty());
    }
}
