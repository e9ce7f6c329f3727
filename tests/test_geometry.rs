use as2d::geometry::*;
use glam::Vec2;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn contained_rect_intersects() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!a.intersects(&right));
    assert!(!a.intersects(&below));
}

#[test]
fn overlap_on_one_axis_only_is_not_a_hit() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 50.0, 10.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    assert_eq!(Rect::at(r.position(), r.size()), r);
}

// ── Angles ──────────────────────────────────────────────────────────

#[test]
fn heading_is_screen_space_unit_vector() {
    let right = heading(0.0);
    assert!(close(right.x, 1.0) && close(right.y, 0.0));
    let down = heading(90.0);
    assert!(close(down.x, 0.0) && close(down.y, 1.0));
    let diagonal = heading(45.0);
    assert!(close(diagonal.x * diagonal.x + diagonal.y * diagonal.y, 1.0));
}

#[test]
fn normalize_wraps_into_range() {
    assert!(close(normalize_degrees(370.0), 10.0));
    assert!(close(normalize_degrees(-30.0), 330.0));
    assert!(close(normalize_degrees(720.0), 0.0));
    assert!(normalize_degrees(-1e-7) < 360.0);
}

#[test]
fn side_reflection_is_180_minus_angle() {
    assert!(close(reflect_off_side(30.0), 150.0));
    assert!(close(reflect_off_side(150.0), 30.0));
    assert!(close(reflect_off_side(300.0), 240.0));
}

#[test]
fn floor_reflection_is_360_minus_angle() {
    assert!(close(reflect_off_floor(60.0), 300.0));
    assert!(close(reflect_off_floor(300.0), 60.0));
    assert!(close(reflect_off_floor(0.0), 0.0));
}
