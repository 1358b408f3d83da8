use crate::constants::*;

#[inline]
fn clamp_finite(current: f32, value: f32, min: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        current
    }
}

/// Tunable camera state. Angles are radians; every setter clamps to the
/// documented range and ignores non-finite input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    rotation: f32,
    tilt: f32,
    offset_x: f32,
    offset_y: f32,
    camera_z: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            rotation: DEFAULT_ROTATION_DEG.to_radians(),
            tilt: DEFAULT_TILT_DEG.to_radians(),
            offset_x: DEFAULT_OFFSET_X_PX,
            offset_y: DEFAULT_OFFSET_Y_PX,
            camera_z: DEFAULT_CAMERA_Z,
        }
    }
}

impl CameraParams {
    #[inline]
    pub fn min_angle() -> f32 {
        MIN_ANGLE_DEG.to_radians()
    }

    #[inline]
    pub fn max_angle() -> f32 {
        MAX_ANGLE_DEG.to_radians()
    }

    #[inline]
    pub fn base_tilt() -> f32 {
        BASE_TILT_DEG.to_radians()
    }

    #[inline]
    pub fn fov() -> f32 {
        FOV_DEG.to_radians()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    /// Angle actually applied about the horizontal axis.
    pub fn total_tilt(&self) -> f32 {
        Self::base_tilt() + self.tilt
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn camera_z(&self) -> f32 {
        self.camera_z
    }

    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = clamp_finite(self.rotation, radians, Self::min_angle(), Self::max_angle());
    }

    pub fn set_tilt(&mut self, radians: f32) {
        self.tilt = clamp_finite(self.tilt, radians, Self::min_angle(), Self::max_angle());
    }

    pub fn set_offset_x(&mut self, px: f32) {
        self.offset_x = clamp_finite(self.offset_x, px, MIN_OFFSET_PX, MAX_OFFSET_PX);
    }

    pub fn set_offset_y(&mut self, px: f32) {
        self.offset_y = clamp_finite(self.offset_y, px, MIN_OFFSET_PX, MAX_OFFSET_PX);
    }

    pub fn set_camera_z(&mut self, z: f32) {
        self.camera_z = clamp_finite(self.camera_z, z, MIN_CAMERA_Z, MAX_CAMERA_Z);
    }

    /// Restore the reset pose for rotation and tilt. Offsets and zoom are left alone.
    pub fn reset_angles(&mut self) {
        self.rotation = RESET_ROTATION_DEG.to_radians();
        self.tilt = RESET_TILT_DEG.to_radians();
    }

    pub fn apply(&mut self, patch: &CameraPatch) {
        if let Some(r) = patch.rotation {
            self.set_rotation(r);
        }
        if let Some(t) = patch.tilt {
            self.set_tilt(t);
        }
        if let Some(x) = patch.offset_x {
            self.set_offset_x(x);
        }
        if let Some(y) = patch.offset_y {
            self.set_offset_y(y);
        }
        if let Some(z) = patch.camera_z {
            self.set_camera_z(z);
        }
    }
}

/// Partial camera update; `None` fields are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraPatch {
    pub rotation: Option<f32>,
    pub tilt: Option<f32>,
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub camera_z: Option<f32>,
}

impl CameraPatch {
    pub fn touches_offsets(&self) -> bool {
        self.offset_x.is_some() || self.offset_y.is_some()
    }
}

/// Viewport size in CSS pixels, clamped to `0..=MAX_VIEWPORT_PX` per edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    /// Half the viewport diagonal.
    pub max_distance: f32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        let width = if width.is_finite() { width.clamp(0.0, MAX_VIEWPORT_PX) } else { 0.0 };
        let height = if height.is_finite() { height.clamp(0.0, MAX_VIEWPORT_PX) } else { 0.0 };
        Self {
            width,
            height,
            max_distance: (width * width + height * height).sqrt() / 2.0,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}
