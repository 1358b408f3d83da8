use super::camera::{CameraParams, ViewportState};
use crate::constants::DEPTH_EPSILON;
use crate::error::GridError;
use glam::{Vec2, Vec3};

/// Rotate in the x/y plane; z is unchanged.
#[inline]
pub fn rotate_about_vertical(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Rotate in the y/z plane; x is unchanged.
#[inline]
pub fn rotate_about_horizontal(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Project an already-rotated point to screen space.
///
/// Returns `None` when the viewport is degenerate or the point sits at the
/// camera's depth, where the perspective divide has no finite answer. Points
/// behind the camera are not clipped and come back sign-flipped.
pub fn project(point: Vec3, camera: &CameraParams, viewport: &ViewportState) -> Option<Vec2> {
    Projection::new(camera, viewport).ok()?.project(point)
}

/// Per-frame projection state, computed once and shared by every vertex.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    focal: f32,
    aspect: f32,
    camera_z: f32,
    center: Vec2,
    half_extent: Vec2,
    rotation: f32,
    tilt: f32,
}

impl Projection {
    pub fn new(camera: &CameraParams, viewport: &ViewportState) -> Result<Self, GridError> {
        let aspect = viewport.aspect();
        if viewport.is_degenerate() || !aspect.is_finite() || aspect.abs() < f32::EPSILON {
            return Err(GridError::DegenerateViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            focal: 1.0 / (CameraParams::fov() / 2.0).tan(),
            aspect,
            camera_z: camera.camera_z(),
            center: Vec2::new(
                viewport.width / 2.0 + camera.offset_x(),
                viewport.height / 2.0 + camera.offset_y(),
            ),
            half_extent: Vec2::new(viewport.width / 2.0, viewport.height / 2.0),
            rotation: camera.rotation(),
            tilt: camera.total_tilt(),
        })
    }

    #[inline]
    pub fn project(&self, p: Vec3) -> Option<Vec2> {
        // camera sits at (0, 0, camera_z) looking down -z
        let depth = -(p.z - self.camera_z);
        if !depth.is_finite() || depth.abs() < DEPTH_EPSILON {
            return None;
        }
        let px = self.focal * (p.x / self.aspect) / depth;
        let py = self.focal * p.y / depth;
        let screen = self.center + Vec2::new(px, py) * self.half_extent;
        screen.is_finite().then_some(screen)
    }

    /// Rotate a lattice point (vertical axis first, then horizontal) and project it.
    #[inline]
    pub fn transform(&self, p: Vec3) -> Option<Vec2> {
        let p = rotate_about_vertical(p, self.rotation);
        let p = rotate_about_horizontal(p, self.tilt);
        self.project(p)
    }
}
