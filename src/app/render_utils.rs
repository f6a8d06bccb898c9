use eframe::egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::layout::Point;

pub(super) const SEGMENT_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 106, 128, 128);

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn depth_color(depth: usize) -> Color32 {
    match depth {
        0 => Color32::from_rgb(122, 64, 214),
        1 => Color32::from_rgb(28, 110, 196),
        _ => Color32::from_rgb(18, 138, 150),
    }
}

/// Layout coordinates are relative to the viewport's top-left corner.
pub(super) fn to_screen(rect: Rect, point: Point) -> Pos2 {
    rect.min + Vec2::new(point.x, point.y)
}

pub(super) fn to_layout(rect: Rect, position: Pos2) -> Point {
    let offset = position - rect.min;
    Point::new(offset.x, offset.y)
}

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(8, 11, 26));

    let mut state = 0x9e37_79b9_u32;
    for _ in 0..160 {
        let x = next_unit(&mut state) * rect.width();
        let y = next_unit(&mut state) * rect.height();
        let brightness = 90 + (next_unit(&mut state) * 140.0) as u8;
        let radius = 0.6 + next_unit(&mut state) * 0.9;
        painter.circle_filled(
            rect.min + Vec2::new(x, y),
            radius,
            Color32::from_rgba_unmultiplied(brightness, brightness, 255, brightness),
        );
    }
}

fn next_unit(state: &mut u32) -> f32 {
    *state ^= *state << 13;
    *state ^= *state >> 17;
    *state ^= *state << 5;
    (*state as f64 / u32::MAX as f64) as f32
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    #[test]
    fn screen_and_layout_coordinates_round_trip() {
        let rect = Rect::from_min_size(pos2(40.0, 30.0), Vec2::new(800.0, 600.0));
        let point = Point::new(125.5, 310.0);

        let screen = to_screen(rect, point);
        assert_eq!(screen, pos2(165.5, 340.0));
        assert_eq!(to_layout(rect, screen), point);
    }

    #[test]
    fn blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);

        assert_eq!(blend_color(a, b, 0.0), a);
        assert_eq!(blend_color(a, b, 1.0), b);
    }

    #[test]
    fn star_sequence_stays_in_unit_range() {
        let mut state = 0x9e37_79b9_u32;
        for _ in 0..1000 {
            let value = next_unit(&mut state);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
