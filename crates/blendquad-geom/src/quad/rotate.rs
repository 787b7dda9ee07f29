use crate::coords::{Point, PxRect, Surface};

use super::Quad;

/// `(sin, cos)` of an angle in degrees. Positive turns counter-clockwise in NDC.
#[inline]
fn sin_cos_deg(degrees: f32) -> (f32, f32) {
    degrees.to_radians().sin_cos()
}

/// UV corner offsets from the texture center, in quad order.
const UV_CORNER_OFFSETS: [Point; 4] = [
    Point::new(-0.5, -0.5),
    Point::new(-0.5, 0.5),
    Point::new(0.5, 0.5),
    Point::new(0.5, -0.5),
];

impl Quad {
    /// Rotates the current positions by `degrees` about the cached center.
    ///
    /// This is relative to whatever the positions are now: two calls with 10°
    /// leave the quad at 20°. For an absolute angle, call
    /// [`Quad::set_display_area`] first. No aspect correction is applied, so a
    /// rotated quad looks sheared on non-square surfaces.
    pub fn rotate_about_center(&mut self, degrees: f32) {
        let (sin, cos) = sin_cos_deg(degrees);
        let pivot = self.center();
        let rotated = self.positions().map(|p| p.rotated_about(pivot, sin, cos));
        self.write_positions(rotated);
    }

    /// Places the quad over `display` rotated by `degrees` about `pivot`
    /// (surface pixels).
    ///
    /// Corners are rebuilt from `display` on every call, so the angle is
    /// absolute and repeated calls are idempotent. Rotated offsets are scaled by
    /// [`Surface::aspect_correction`]. The cached center is not touched.
    pub fn rotate_about_pivot(
        &mut self,
        display: PxRect,
        surface: Surface,
        degrees: f32,
        pivot: Point,
    ) {
        debug_assert!(surface.is_valid(), "rotation on zero-sized surface {surface:?}");
        let (sin, cos) = sin_cos_deg(degrees);
        let k = surface.aspect_correction();
        let c = surface.point_to_ndc(pivot);

        let rotated = surface.rect_to_ndc(display).corners().map(|p| {
            let d = p - c;
            Point::new(
                (d.x * cos - d.y * sin) * k.x + c.x,
                (d.x * sin + d.y * cos) * k.y + c.y,
            )
        });
        self.write_positions(rotated);
    }

    /// Rotates the full-texture UV square by `degrees` about `(0.5, 0.5)`.
    ///
    /// Starts from the canonical `[0, 1]²` corners on every call, so any clip
    /// area is discarded and the angle is absolute.
    pub fn rotate_texcoords(&mut self, degrees: f32) {
        let (sin, cos) = sin_cos_deg(degrees);
        let center = Point::new(0.5, 0.5);
        let uvs = UV_CORNER_OFFSETS.map(|o| (o + center).rotated_about(center, sin, cos));
        self.write_uvs(uvs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::TexSize;
    use crate::quad::Corner;

    const HD: Surface = Surface::new(1280, 720);
    const EPS: f32 = 1e-5;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn all_close(a: [Point; 4], b: [Point; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(&p, &q)| close(p, q))
    }

    fn placed(rect: PxRect, surface: Surface) -> Quad {
        let mut q = Quad::new();
        q.set_display_area(rect, surface);
        q
    }

    // ── rotate_about_center ───────────────────────────────────────────────

    #[test]
    fn center_rotation_by_zero_is_identity() {
        let mut q = placed(PxRect::new(200, 180, 200, 128), HD);
        let base = q.positions();
        q.rotate_about_center(0.0);
        assert!(all_close(q.positions(), base));
    }

    #[test]
    fn center_rotation_by_full_turn_returns_to_start() {
        let rect = PxRect::new(200, 180, 200, 128);
        let mut q = placed(rect, HD);
        let base = q.positions();
        q.set_display_area(rect, HD);
        q.rotate_about_center(360.0);
        assert!(all_close(q.positions(), base));
    }

    #[test]
    fn center_rotation_compounds() {
        let rect = PxRect::new(100, 100, 400, 300);
        let mut twice = placed(rect, HD);
        twice.rotate_about_center(30.0);
        twice.rotate_about_center(30.0);

        let mut once = placed(rect, HD);
        once.rotate_about_center(60.0);

        assert!(all_close(twice.positions(), once.positions()));
    }

    #[test]
    fn center_rotation_quarter_turn_on_square_surface() {
        let s = Surface::new(100, 100);
        let mut q = placed(PxRect::new(0, 0, 100, 100), s);
        q.rotate_about_center(90.0);
        // LT (-1, 1) turns counter-clockwise onto (-1, -1).
        assert!(close(q.position(Corner::LeftTop), Point::new(-1.0, -1.0)));
        assert!(close(q.position(Corner::RightTop), Point::new(-1.0, 1.0)));
        assert!(close(q.center(), Point::zero()));
    }

    #[test]
    fn center_rotation_negative_angle_turns_clockwise() {
        let s = Surface::new(100, 100);
        let mut q = placed(PxRect::new(0, 0, 100, 100), s);
        q.rotate_about_center(-90.0);
        assert!(close(q.position(Corner::LeftTop), Point::new(1.0, 1.0)));
        assert!(close(q.position(Corner::LeftBottom), Point::new(-1.0, 1.0)));
    }

    #[test]
    fn center_rotation_keeps_uvs() {
        let mut q = placed(PxRect::new(10, 10, 50, 50), HD);
        q.set_clip_area(PxRect::new(64, 64, 128, 128), TexSize::new(256, 256));
        let uv = q.uv(Corner::LeftTop);
        q.rotate_about_center(45.0);
        assert_eq!(q.uv(Corner::LeftTop), uv);
    }

    // ── rotate_about_pivot ────────────────────────────────────────────────

    #[test]
    fn pivot_rotation_is_idempotent() {
        let rect = PxRect::new(931, 391, 160, 40);
        let pivot = Point::new(931.0, 411.0);
        let mut q = placed(rect, HD);

        q.rotate_about_pivot(rect, HD, 33.5, pivot);
        let first = *q.vertices();
        q.rotate_about_pivot(rect, HD, 33.5, pivot);
        assert_eq!(*q.vertices(), first);
    }

    #[test]
    fn pivot_rotation_by_zero_on_square_surface_is_placement() {
        let s = Surface::new(512, 512);
        let rect = PxRect::new(64, 32, 128, 256);
        let mut q = placed(rect, s);
        let base = q.positions();
        q.rotate_about_pivot(rect, s, 0.0, Point::new(10.0, 400.0));
        assert!(all_close(q.positions(), base));
    }

    #[test]
    fn pivot_rotation_scales_only_y_offset_on_wide_surface() {
        let rect = PxRect::new(640, 360, 320, 0);
        let mut q = placed(rect, HD);
        // Pivot at the surface center: NDC (0, 0).
        q.rotate_about_pivot(rect, HD, 90.0, Point::new(640.0, 360.0));

        // RT starts at NDC (0.5, 0): a quarter turn gives (0, 0.5), then Y is
        // stretched by 1280/720.
        let rt = q.position(Corner::RightTop);
        assert!(close(rt, Point::new(0.0, 0.5 * 1280.0 / 720.0)), "{rt:?}");
    }

    #[test]
    fn pivot_rotation_scales_only_x_offset_on_tall_surface() {
        let s = Surface::new(720, 1280);
        let rect = PxRect::new(360, 640, 0, 320);
        let mut q = placed(rect, s);
        q.rotate_about_pivot(rect, s, 90.0, Point::new(360.0, 640.0));

        // LB starts at NDC (0, -0.5): a quarter turn gives (0.5, 0), then X is
        // stretched by 1280/720.
        let lb = q.position(Corner::LeftBottom);
        assert!(close(lb, Point::new(0.5 * 1280.0 / 720.0, 0.0)), "{lb:?}");
    }

    #[test]
    fn pivot_rotation_wraps_past_full_turn() {
        let rect = PxRect::new(931, 391, 160, 40);
        let pivot = Point::new(931.0, 411.0);
        let mut wrapped = placed(rect, HD);
        wrapped.rotate_about_pivot(rect, HD, 450.0, pivot);
        let mut plain = placed(rect, HD);
        plain.rotate_about_pivot(rect, HD, 90.0, pivot);
        assert!(all_close(wrapped.positions(), plain.positions()));

        wrapped.rotate_about_pivot(rect, HD, -270.0, pivot);
        assert!(all_close(wrapped.positions(), plain.positions()));
    }

    #[test]
    fn pivot_rotation_keeps_cached_center() {
        let rect = PxRect::new(200, 180, 200, 128);
        let mut q = placed(rect, HD);
        let c = q.center();
        q.rotate_about_pivot(rect, HD, 72.0, Point::new(0.0, 0.0));
        assert_eq!(q.center(), c);
    }

    // ── rotate_texcoords ──────────────────────────────────────────────────

    #[test]
    fn texcoord_rotation_by_zero_is_full_texture() {
        let mut q = Quad::new();
        q.set_clip_area(PxRect::new(64, 64, 128, 128), TexSize::new(256, 256));
        q.rotate_texcoords(0.0);
        for c in Corner::ALL {
            assert!(close(q.uv(c), Quad::new().uv(c)));
        }
    }

    #[test]
    fn texcoord_rotation_quarter_turn_cycles_corners() {
        let mut q = Quad::new();
        q.rotate_texcoords(90.0);
        assert!(close(q.uv(Corner::LeftTop), Point::new(1.0, 0.0)));
        assert!(close(q.uv(Corner::LeftBottom), Point::new(0.0, 0.0)));
        assert!(close(q.uv(Corner::RightBottom), Point::new(0.0, 1.0)));
        assert!(close(q.uv(Corner::RightTop), Point::new(1.0, 1.0)));
    }

    #[test]
    fn texcoord_rotation_negative_quarter_turn_inverts_positive() {
        let mut q = Quad::new();
        q.rotate_texcoords(-90.0);
        // Each corner takes the unrotated uv of the next corner.
        assert!(close(q.uv(Corner::LeftTop), Point::new(0.0, 1.0)));
        assert!(close(q.uv(Corner::LeftBottom), Point::new(1.0, 1.0)));
        assert!(close(q.uv(Corner::RightBottom), Point::new(1.0, 0.0)));
        assert!(close(q.uv(Corner::RightTop), Point::new(0.0, 0.0)));

        let mut turned = Quad::new();
        turned.rotate_texcoords(90.0);
        let uvs = Corner::ALL.map(|c| turned.uv(c));
        let center = Point::new(0.5, 0.5);
        let (sin, cos) = (-90f32).to_radians().sin_cos();
        for (c, uv) in Corner::ALL.into_iter().zip(uvs) {
            assert!(close(uv.rotated_about(center, sin, cos), Quad::new().uv(c)));
        }
    }

    #[test]
    fn texcoord_rotation_is_absolute() {
        let mut q = Quad::new();
        q.rotate_texcoords(90.0);
        let once = *q.vertices();
        q.rotate_texcoords(90.0);
        assert_eq!(*q.vertices(), once);
    }
}
