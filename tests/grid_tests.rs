// Host-side tests for the lattice model and its top-extension search.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/core/mod.rs"]
mod core;
#[path = "../src/error.rs"]
mod error;

use crate::core::*;
use constants::*;
use glam::{Vec2, Vec3};

fn hd() -> (ViewportState, GridSpec) {
    let vp = ViewportState::new(1920.0, 1080.0);
    let spec = GridSpec::for_viewport(&vp, 50.0, 20);
    (vp, spec)
}

fn camera(rotation_deg: f32, tilt_deg: f32) -> CameraParams {
    let mut cam = CameraParams::default();
    cam.set_rotation(rotation_deg.to_radians());
    cam.set_tilt(tilt_deg.to_radians());
    cam
}

#[test]
fn grid_dimensions_follow_viewport_plus_margin() {
    let (vp, spec) = hd();
    assert_eq!(spec.cols, 81);
    assert_eq!(spec.rows, 64);
    assert_eq!(spec.origin, Vec2::new(-2025.0, -1600.0));
    assert_eq!(vp.max_distance, (1920.0f32 * 1920.0 + 1080.0 * 1080.0).sqrt() / 2.0);
}

#[test]
fn build_grid_vertices_spans_origin_to_far_corner() {
    let (_, spec) = hd();
    let verts = build_grid_vertices(&spec);
    assert_eq!(verts.len(), 82 * 65);
    assert_eq!(verts.len(), spec.vertex_count());
    assert_eq!(verts[0], Vec3::new(-2025.0, -1600.0, 0.0));
    assert_eq!(*verts.last().unwrap(), Vec3::new(2025.0, 1600.0, 0.0));
    assert!(verts.iter().all(|v| v.z == 0.0));
    assert_eq!(verts[spec.vertex_index(3, 2)], spec.vertex(3, 2));
}

#[test]
fn cell_corners_are_adjacent_lattice_points() {
    let (_, spec) = hd();
    let [a, b, c, d] = spec.cell_corners(3, -2);
    assert_eq!(a, Vec3::new(-2025.0 + 150.0, -1600.0 - 100.0, 0.0));
    assert_eq!(b - a, Vec3::new(50.0, 0.0, 0.0));
    assert_eq!(c - b, Vec3::new(0.0, 50.0, 0.0));
    assert_eq!(d - c, Vec3::new(-50.0, 0.0, 0.0));
}

#[test]
fn cell_at_is_centered_like_the_lattice() {
    let (vp, spec) = hd();
    assert_eq!(spec.cell_at(&vp, 960.0, 540.0), (40, 32));
    assert_eq!(spec.cell_at(&vp, 0.0, 0.0), (21, 21));
    assert_eq!(spec.cell_at(&vp, -890.0, -1135.0), (3, -2));
}

#[test]
fn grid_covers_viewport_at_rotation_extremes() {
    let (vp, spec) = hd();
    let verts = build_grid_vertices(&spec);
    for rotation in [MIN_ANGLE_DEG, MAX_ANGLE_DEG] {
        for tilt in [MIN_ANGLE_DEG, DEFAULT_TILT_DEG, 0.0] {
            let cam = camera(rotation, tilt);
            let projection = Projection::new(&cam, &vp).unwrap();
            let mut pts: Vec<Vec2> = project_vertices(&verts, &projection)
                .into_iter()
                .flatten()
                .collect();
            for row in extension_rows(&spec, &projection, MAX_EXTENSION_ROWS) {
                pts.extend(row.into_iter().flatten());
            }
            let min = pts.iter().fold(Vec2::splat(f32::MAX), |m, p| m.min(*p));
            let max = pts.iter().fold(Vec2::splat(f32::MIN), |m, p| m.max(*p));
            for corner in [
                Vec2::new(0.0, 0.0),
                Vec2::new(vp.width, 0.0),
                Vec2::new(0.0, vp.height),
                Vec2::new(vp.width, vp.height),
            ] {
                assert!(
                    corner.cmpge(min).all() && corner.cmple(max).all(),
                    "rotation={rotation} tilt={tilt} corner={corner:?} bbox={min:?}..{max:?}"
                );
            }
        }
    }
}

#[test]
fn extension_stops_once_a_row_is_above_the_top_edge() {
    let (vp, spec) = hd();
    let projection = Projection::new(&CameraParams::default(), &vp).unwrap();
    let rows = extension_rows(&spec, &projection, MAX_EXTENSION_ROWS);
    assert!(!rows.is_empty());
    assert!(rows.len() < MAX_EXTENSION_ROWS as usize);
    let last = rows.last().unwrap();
    assert_eq!(last.len(), spec.cols as usize + 1);
    assert!(last.iter().all(|p| matches!(p, Some(p) if p.y < 0.0)));
    for row in &rows[..rows.len() - 1] {
        assert!(!row.iter().all(|p| matches!(p, Some(p) if p.y < 0.0)));
    }
}

#[test]
fn extension_is_bounded_when_plane_is_edge_on() {
    let (vp, spec) = hd();
    // base tilt 45 + tilt 45: plane seen edge-on, no row ever clears the top
    let cam = camera(0.0, MAX_ANGLE_DEG);
    let projection = Projection::new(&cam, &vp).unwrap();
    let rows = extension_rows(&spec, &projection, MAX_EXTENSION_ROWS);
    assert_eq!(rows.len(), MAX_EXTENSION_ROWS as usize);
}

#[test]
fn resize_to_small_viewport_still_adds_margin() {
    let vp = ViewportState::new(0.0, 0.0);
    let spec = GridSpec::for_viewport(&vp, 50.0, 20);
    assert_eq!((spec.cols, spec.rows), (42, 42));
}

#[test]
fn cell_at_clamps_far_coordinates() {
    let (vp, spec) = hd();
    assert_eq!(spec.cell_at(&vp, 1e30, 540.0), (162, 32));
    assert_eq!(spec.cell_at(&vp, 960.0, -1e30), (40, -64));
    assert_eq!(spec.cell_at(&vp, f32::MAX, f32::MIN), (162, -64));
}

#[test]
fn cell_corners_saturate_at_index_limit() {
    let (_, spec) = hd();
    let [a, b, c, d] = spec.cell_corners(i32::MAX, i32::MAX);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
}

#[test]
fn oversized_viewport_is_clamped() {
    let vp = ViewportState::new(1e30, f32::MAX);
    assert_eq!((vp.width, vp.height), (MAX_VIEWPORT_PX, MAX_VIEWPORT_PX));
    let spec = GridSpec::for_viewport(&vp, 50.0, 20);
    assert_eq!((spec.cols, spec.rows), (370, 370));
    assert_eq!(GridSpec::for_viewport(&vp, 1e-30, u32::MAX).cols, u32::MAX);
}
