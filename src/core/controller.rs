use super::camera::{CameraParams, ViewportState};
use super::grid::GridSpec;

/// Range controls that write straight into [`CameraParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Rotation,
    Tilt,
    OffsetX,
    OffsetY,
    Zoom,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Rotation,
        Control::Tilt,
        Control::OffsetX,
        Control::OffsetY,
        Control::Zoom,
    ];

    #[inline]
    pub fn element_id(self) -> &'static str {
        match self {
            Control::Rotation => "grid-rotation",
            Control::Tilt => "grid-tilt",
            Control::OffsetX => "camera-offset-x",
            Control::OffsetY => "camera-offset-y",
            Control::Zoom => "camera-zoom",
        }
    }

    /// Slider value as currently held by the camera (degrees for angles).
    pub fn read(self, camera: &CameraParams) -> f32 {
        match self {
            Control::Rotation => camera.rotation().to_degrees(),
            Control::Tilt => camera.tilt().to_degrees(),
            Control::OffsetX => camera.offset_x(),
            Control::OffsetY => camera.offset_y(),
            Control::Zoom => camera.camera_z(),
        }
    }

    pub fn is_offset(self) -> bool {
        matches!(self, Control::OffsetX | Control::OffsetY)
    }
}

/// Apply a raw slider value; angle controls take degrees. Clamping happens
/// in the camera setters.
pub fn apply_control(camera: &mut CameraParams, control: Control, value: f32) {
    match control {
        Control::Rotation => camera.set_rotation(value.to_radians()),
        Control::Tilt => camera.set_tilt(value.to_radians()),
        Control::OffsetX => camera.set_offset_x(value),
        Control::OffsetY => camera.set_offset_y(value),
        Control::Zoom => camera.set_camera_z(value),
    }
}

/// Grid cell under a pointer position in client pixels, or `None` when the
/// coordinates are not finite.
#[inline]
pub fn pointer_cell(grid: &GridSpec, viewport: &ViewportState, x: f32, y: f32) -> Option<(i32, i32)> {
    (x.is_finite() && y.is_finite()).then(|| grid.cell_at(viewport, x, y))
}
