#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::geometry::Rect;

#[test]
fn derived_accessors() {
    let b = Bounds::new(50.0, 50.0, 350.0, 350.0);
    assert_eq!(b.width(), 300.0);
    assert_eq!(b.height(), 300.0);
    assert_eq!(b.center_x(), 200.0);
    assert_eq!(b.center_y(), 200.0);
}

#[test]
fn from_dimensions_builds_edges() {
    let b = Bounds::from_dimensions(10.0, 20.0, 100.0, 50.0);
    assert_eq!(b.left, 10.0);
    assert_eq!(b.top, 20.0);
    assert_eq!(b.right, 110.0);
    assert_eq!(b.bottom, 70.0);
}

#[test]
fn contains_requires_full_inclusion() {
    let b = Bounds::new(0.0, 0.0, 100.0, 100.0);
    assert!(b.contains(10.0, 10.0, 50.0, 50.0));
    // Partially outside on each edge.
    assert!(!b.contains(-1.0, 10.0, 50.0, 50.0));
    assert!(!b.contains(10.0, -1.0, 50.0, 50.0));
    assert!(!b.contains(60.0, 10.0, 50.0, 50.0));
    assert!(!b.contains(10.0, 60.0, 50.0, 50.0));
}

#[test]
fn contains_accepts_boxes_touching_the_edge() {
    let b = Bounds::new(0.0, 0.0, 100.0, 100.0);
    assert!(b.contains(0.0, 0.0, 100.0, 100.0));
    assert!(b.contains(50.0, 50.0, 50.0, 50.0));
}

#[test]
fn contains_rect_matches_contains_for_unrotated() {
    let b = Bounds::new(50.0, 50.0, 350.0, 350.0);
    assert!(b.contains_rect(&Rect::new(50.0, 50.0, 100.0, 100.0)));
    assert!(!b.contains_rect(&Rect::new(49.0, 50.0, 100.0, 100.0)));
}

#[test]
fn contains_rect_checks_rotated_corners() {
    let b = Bounds::new(50.0, 50.0, 350.0, 350.0);
    // A 10×10 square at the corner fits unrotated, but as a diamond its
    // vertices poke past the left and top edges.
    assert!(b.contains_rect(&Rect::new(50.0, 50.0, 10.0, 10.0)));
    assert!(!b.contains_rect(&Rect::with_rotation(50.0, 50.0, 10.0, 10.0, 45.0)));
    // Centered, the same diamond is fine.
    assert!(b.contains_rect(&Rect::with_rotation(195.0, 195.0, 10.0, 10.0, 45.0)));
}

#[test]
fn serde_roundtrip() {
    let b = Bounds::new(32.5, 82.5, 367.5, 417.5);
    let json = serde_json::to_string(&b).unwrap();
    let back: Bounds = serde_json::from_str(&json).unwrap();
    assert_eq!(b, back);
}
