use crate::core::DrawSurface;
use crate::error::GridError;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`DrawSurface`] over a browser 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Result<Self, GridError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GridError::MissingSurface(format!("{:?}", e)))?
            .ok_or_else(|| GridError::MissingSurface("2d context not supported".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| GridError::MissingSurface("context is not CanvasRenderingContext2d".into()))?;
        Ok(Self { ctx })
    }

    #[inline]
    fn trace(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(p.x as f64, p.y as f64);
            } else {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: &str, line_width: f32) {
        self.trace(points);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vec2], fill: &str, stroke: &str, line_width: f32, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(fill);
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.set_line_width(line_width as f64);
        self.trace(points);
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn fill_dot(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }
}
