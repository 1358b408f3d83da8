use super::camera::{CameraParams, CameraPatch, ViewportState};
use super::color::ColorCycler;
use super::controller::{apply_control, pointer_cell, Control};
use super::grid::{build_grid_vertices, extension_rows, project_vertices, GridSpec};
use super::projector::Projection;
use super::trail::HighlightTrail;
use crate::constants::*;
use crate::error::GridError;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// 2D drawing primitives the frame step needs. Implemented over the browser
/// canvas in `render.rs`; tests use a recording implementation.
pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn stroke_polyline(&mut self, points: &[Vec2], color: &str, line_width: f32);
    fn fill_polygon(&mut self, points: &[Vec2], fill: &str, stroke: &str, line_width: f32, alpha: f32);
    fn fill_dot(&mut self, center: Vec2, radius: f32, color: &str);
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub cell_size: f32,
    pub margin: u32,
    pub max_extension_rows: u32,
    pub fade_ms: f64,
    pub trail_cap: usize,
    pub highlight_size: f32,
    pub color_interval_ms: f64,
    pub palette: &'static [&'static str],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE_PX,
            margin: GRID_MARGIN_CELLS,
            max_extension_rows: MAX_EXTENSION_ROWS,
            fade_ms: HIGHLIGHT_FADE_MS,
            trail_cap: HIGHLIGHT_TRAIL_CAP,
            highlight_size: HIGHLIGHT_SIZE,
            color_interval_ms: COLOR_CYCLE_INTERVAL_MS,
            palette: &HIGHLIGHT_PALETTE,
        }
    }
}

/// What one frame put on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub polylines: usize,
    pub extension_rows: usize,
    pub highlights: usize,
    pub dots: usize,
}

/// All mutable state behind the background: camera, viewport, lattice,
/// highlight trail and colour cycle. Input handlers and the frame loop share
/// one instance; every camera write goes through the clamped setters.
pub struct Scene {
    config: SceneConfig,
    camera: CameraParams,
    viewport: ViewportState,
    grid: GridSpec,
    vertices: Vec<Vec3>,
    trail: HighlightTrail,
    colors: ColorCycler,
}

impl Scene {
    /// Fails when the palette is empty or the cell size is not a positive
    /// finite number.
    pub fn new(config: SceneConfig, width: f32, height: f32, now: f64) -> Result<Self, GridError> {
        if config.palette.is_empty() {
            return Err(GridError::InvalidConfig("palette is empty"));
        }
        if !(config.cell_size.is_finite() && config.cell_size > 0.0) {
            return Err(GridError::InvalidConfig("cell size must be positive"));
        }
        let viewport = ViewportState::new(width, height);
        let grid = GridSpec::for_viewport(&viewport, config.cell_size, config.margin);
        let vertices = build_grid_vertices(&grid);
        let trail = HighlightTrail::new(config.fade_ms, config.trail_cap, config.highlight_size);
        let colors = ColorCycler::new(config.palette.len(), config.color_interval_ms, now);
        Ok(Self {
            config,
            camera: CameraParams::default(),
            viewport,
            grid,
            vertices,
            trail,
            colors,
        })
    }

    pub fn camera(&self) -> &CameraParams {
        &self.camera
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn trail(&self) -> &HighlightTrail {
        &self.trail
    }

    pub fn color_index(&self) -> usize {
        self.colors.index()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = ViewportState::new(width, height);
        self.grid = GridSpec::for_viewport(&self.viewport, self.config.cell_size, self.config.margin);
        self.vertices = build_grid_vertices(&self.grid);
        log::debug!(
            "[scene] resize {}x{} -> grid {}x{}",
            self.viewport.width,
            self.viewport.height,
            self.grid.cols,
            self.grid.rows
        );
    }

    /// Light the cell under the pointer. Returns the cell when a new
    /// highlight was recorded.
    pub fn pointer_move(&mut self, x: f32, y: f32, now: f64) -> Option<(i32, i32)> {
        let (cx, cy) = pointer_cell(&self.grid, &self.viewport, x, y)?;
        self.trail
            .record(cx, cy, self.colors.index(), now)
            .then_some((cx, cy))
    }

    pub fn pointer_leave(&mut self) {
        self.trail.forget_last_cell();
    }

    pub fn set_control(&mut self, control: Control, value: f32) {
        apply_control(&mut self.camera, control, value);
    }

    pub fn set_camera(&mut self, patch: &CameraPatch) {
        self.camera.apply(patch);
    }

    pub fn reset_angles(&mut self) {
        self.camera.reset_angles();
    }

    /// One running step of the render loop: colour tick, trail prune, then
    /// clear and redraw lines, highlights (oldest first) and dots. A
    /// degenerate viewport skips all drawing.
    pub fn step<S: DrawSurface>(&mut self, now: f64, surface: &mut S) -> Result<FrameStats, GridError> {
        self.colors.tick(now);
        self.trail.prune(now);

        let projection = Projection::new(&self.camera, &self.viewport)?;
        let mut stats = FrameStats::default();
        surface.clear(self.viewport.width, self.viewport.height);

        let grid = self.grid;
        let projected = project_vertices(&self.vertices, &projection);
        let mut run: Vec<Vec2> = Vec::with_capacity(grid.cols.max(grid.rows) as usize + 1);

        for i in 0..=grid.cols {
            let column = (0..=grid.rows).map(|j| projected[grid.vertex_index(i, j)]);
            stats.polylines += stroke_runs(surface, column, &mut run);
        }
        for j in 0..=grid.rows {
            let row = (0..=grid.cols).map(|i| projected[grid.vertex_index(i, j)]);
            stats.polylines += stroke_runs(surface, row, &mut run);
        }
        let extra = extension_rows(&grid, &projection, self.config.max_extension_rows);
        stats.extension_rows = extra.len();
        for row in extra {
            stats.polylines += stroke_runs(surface, row.into_iter(), &mut run);
        }

        let palette = self.config.palette;
        for event in self.trail.iter() {
            let corners: Option<SmallVec<[Vec2; 4]>> = grid
                .cell_corners(event.x, event.y)
                .iter()
                .map(|c| projection.transform(*c))
                .collect();
            let Some(corners) = corners else { continue };
            let fill = palette[event.color_index % palette.len()];
            let alpha = self.trail.alpha(event, now);
            surface.fill_polygon(&corners, fill, HIGHLIGHT_STROKE, event.size, alpha);
            stats.highlights += 1;
        }

        for p in projected.iter().flatten() {
            surface.fill_dot(*p, DOT_RADIUS, DOT_COLOR);
            stats.dots += 1;
        }
        Ok(stats)
    }
}

/// Stroke a sequence of projected points, breaking the line wherever a point
/// failed to project. Returns the number of polylines drawn.
fn stroke_runs<S, I>(surface: &mut S, points: I, run: &mut Vec<Vec2>) -> usize
where
    S: DrawSurface,
    I: Iterator<Item = Option<Vec2>>,
{
    let mut drawn = 0;
    run.clear();
    for p in points {
        match p {
            Some(p) => run.push(p),
            None => {
                drawn += flush_run(surface, run);
            }
        }
    }
    drawn + flush_run(surface, run)
}

#[inline]
fn flush_run<S: DrawSurface>(surface: &mut S, run: &mut Vec<Vec2>) -> usize {
    let drawn = if run.len() >= 2 {
        surface.stroke_polyline(run, GRID_LINE_COLOR, GRID_LINE_WIDTH);
        1
    } else {
        0
    };
    run.clear();
    drawn
}
