use super::camera::ViewportState;
use super::projector::Projection;
use glam::{Vec2, Vec3};

/// Lattice dimensions for one viewport. Cell `(0, 0)` is the top-left cell,
/// which lies `margin` cells beyond the visible area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub cell_size: f32,
    pub cols: u32,
    pub rows: u32,
    pub origin: Vec2,
}

impl GridSpec {
    pub fn for_viewport(viewport: &ViewportState, cell_size: f32, margin: u32) -> Self {
        let cols = cells_along(viewport.width, cell_size, margin);
        let rows = cells_along(viewport.height, cell_size, margin);
        Self {
            cell_size,
            cols,
            rows,
            origin: Vec2::new(
                -(cols as f32 / 2.0) * cell_size,
                -(rows as f32 / 2.0) * cell_size,
            ),
        }
    }

    /// Lattice point `(i, j)` on the z = 0 plane. Indices outside
    /// `0..=cols` / `0..=rows` are valid and extend the lattice.
    #[inline]
    pub fn vertex(&self, i: i32, j: i32) -> Vec3 {
        Vec3::new(
            self.origin.x + i as f32 * self.cell_size,
            self.origin.y + j as f32 * self.cell_size,
            0.0,
        )
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.cols as usize + 1) * (self.rows as usize + 1)
    }

    /// Index into the row-major output of [`build_grid_vertices`].
    #[inline]
    pub fn vertex_index(&self, i: u32, j: u32) -> usize {
        j as usize * (self.cols as usize + 1) + i as usize
    }

    /// Corners of cell `(x, y)` in winding order.
    pub fn cell_corners(&self, x: i32, y: i32) -> [Vec3; 4] {
        [
            self.vertex(x, y),
            self.vertex(x.saturating_add(1), y),
            self.vertex(x.saturating_add(1), y.saturating_add(1)),
            self.vertex(x, y.saturating_add(1)),
        ]
    }

    /// Cell under a client coordinate, using the same centring as the lattice
    /// origin so the index lines up with [`GridSpec::vertex`]. Indices are
    /// clamped to one lattice width/height beyond either side.
    pub fn cell_at(&self, viewport: &ViewportState, x: f32, y: f32) -> (i32, i32) {
        let cx = ((x - viewport.width / 2.0) / self.cell_size + self.cols as f32 / 2.0).floor();
        let cy = ((y - viewport.height / 2.0) / self.cell_size + self.rows as f32 / 2.0).floor();
        (clamp_index(cx, self.cols), clamp_index(cy, self.rows))
    }
}

#[inline]
fn clamp_index(cell: f32, extent: u32) -> i32 {
    let extent = extent.min(i32::MAX as u32 / 2) as i32;
    // float-to-int `as` saturates, so huge coordinates land on the bound
    (cell as i32).clamp(-extent, 2 * extent)
}

#[inline]
fn cells_along(extent: f32, cell_size: f32, margin: u32) -> u32 {
    let visible = if cell_size > 0.0 {
        (extent / cell_size).ceil().max(0.0) as u32
    } else {
        0
    };
    visible.saturating_add(margin.saturating_mul(2)).saturating_add(2)
}

/// All lattice points from `origin` to `origin + (cols, rows) * cell_size`,
/// row-major, z = 0.
pub fn build_grid_vertices(spec: &GridSpec) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(spec.vertex_count());
    for j in 0..=spec.rows as i32 {
        for i in 0..=spec.cols as i32 {
            out.push(spec.vertex(i, j));
        }
    }
    out
}

/// Project every lattice vertex; entries that fail the depth guard are `None`.
pub fn project_vertices(vertices: &[Vec3], projection: &Projection) -> Vec<Option<Vec2>> {
    vertices.iter().map(|v| projection.transform(*v)).collect()
}

/// Extra rows past `rows`, added one at a time until a whole row projects
/// above the top edge of the viewport. Stops after `max_rows` if the
/// condition is never met (e.g. the plane is edge-on to the camera).
pub fn extension_rows(
    spec: &GridSpec,
    projection: &Projection,
    max_rows: u32,
) -> Vec<Vec<Option<Vec2>>> {
    let mut rows = Vec::new();
    for k in 1..=max_rows as i32 {
        let j = spec.rows as i32 + k;
        let row: Vec<Option<Vec2>> = (0..=spec.cols as i32)
            .map(|i| projection.transform(spec.vertex(i, j)))
            .collect();
        let all_above = row.iter().all(|p| matches!(p, Some(p) if p.y < 0.0));
        rows.push(row);
        if all_above {
            return rows;
        }
    }
    log::debug!("[grid] extension search hit bound of {} rows", max_rows);
    rows
}
