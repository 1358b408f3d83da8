/// Grid, trail and camera tuning constants.
///
/// Angles are stored in degrees here and converted at the point of use so the
/// values read the same as the range controls that drive them.
// Lattice
pub const CELL_SIZE_PX: f32 = 50.0;
pub const GRID_MARGIN_CELLS: u32 = 20; // extra cells beyond each viewport edge
pub const MAX_EXTENSION_ROWS: u32 = 200; // bound on the top-extension search

// Camera
pub const FOV_DEG: f32 = 45.0;
pub const BASE_TILT_DEG: f32 = 45.0;
pub const MIN_ANGLE_DEG: f32 = -45.0;
pub const MAX_ANGLE_DEG: f32 = 45.0;
pub const DEFAULT_ROTATION_DEG: f32 = 35.0;
pub const DEFAULT_TILT_DEG: f32 = -8.0;
// Reset button angles; the rotation differs from the start-up pose
pub const RESET_ROTATION_DEG: f32 = 27.0;
pub const RESET_TILT_DEG: f32 = -8.0;
pub const DEFAULT_OFFSET_X_PX: f32 = 94.0;
pub const DEFAULT_OFFSET_Y_PX: f32 = 0.0;
pub const MIN_OFFSET_PX: f32 = -500.0;
pub const MAX_OFFSET_PX: f32 = 500.0;
pub const DEFAULT_CAMERA_Z: f32 = 1073.0;
pub const MIN_CAMERA_Z: f32 = 400.0;
pub const MAX_CAMERA_Z: f32 = 2000.0;
// Largest viewport edge accepted; bigger sizes are clamped
pub const MAX_VIEWPORT_PX: f32 = 16384.0;
// Perspective divide guard; smaller depths are treated as unprojectable
pub const DEPTH_EPSILON: f32 = 1e-3;

// Highlight trail
pub const HIGHLIGHT_FADE_MS: f64 = 1000.0;
pub const HIGHLIGHT_TRAIL_CAP: usize = 20;
pub const HIGHLIGHT_SIZE: f32 = 2.0; // outline stroke width of a lit cell
pub const HIGHLIGHT_STROKE: &str = "white";

// Color cycling
pub const COLOR_CYCLE_INTERVAL_MS: f64 = 200.0;
pub const HIGHLIGHT_PALETTE: [&str; 6] = [
    "rgba(0,255,255,0.85)", // cyan
    "rgba(255,0,255,0.85)", // magenta
    "rgba(0,255,128,0.85)", // green
    "rgba(255,255,0,0.85)", // yellow
    "rgba(128,0,255,0.85)", // purple
    "rgba(255,128,0,0.85)", // orange
];

// Line and dot styling
pub const GRID_LINE_COLOR: &str = "rgba(0,0,0,0.13)";
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const DOT_COLOR: &str = "rgba(0,0,0,0.10)";
pub const DOT_RADIUS: f32 = 1.5;

// DOM hooks
pub const CANVAS_ELEMENT_ID: &str = "background-canvas";
pub const RESET_BUTTON_ID: &str = "grid-reset";
