#![cfg(target_arch = "wasm32")]
use crate::core::{CameraPatch, Scene, SceneConfig};
use crate::error::GridError;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod constants;
pub mod core;
mod dom;
pub mod error;
mod events;
mod frame;
mod render;

thread_local! {
    // Instance attached to #background-canvas for the lifetime of the page
    static PAGE_BACKGROUND: RefCell<Option<GridBackground>> = RefCell::new(None);
}

/// Animated perspective grid bound to one canvas.
#[wasm_bindgen]
pub struct GridBackground {
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    frame_loop: frame::FrameLoop,
}

impl GridBackground {
    fn init(canvas: &web::HtmlCanvasElement, width: f32, height: f32) -> Result<Self, GridError> {
        let surface = render::CanvasSurface::from_canvas(canvas)?;
        dom::sync_canvas_backing_size(canvas, width, height);
        let scene = Rc::new(RefCell::new(Scene::new(
            SceneConfig::default(),
            width,
            height,
            instant::now(),
        )?));
        let frame_loop = frame::FrameLoop::new(frame::FrameContext {
            scene: scene.clone(),
            surface,
        });
        Ok(Self {
            canvas: canvas.clone(),
            scene,
            frame_loop,
        })
    }
}

#[wasm_bindgen]
impl GridBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement, width: f32, height: f32) -> Result<GridBackground, JsValue> {
        Self::init(&canvas, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn on_resize(&self, width: f32, height: f32) {
        dom::sync_canvas_backing_size(&self.canvas, width, height);
        self.scene.borrow_mut().resize(width, height);
    }

    pub fn on_pointer_move(&self, x: f32, y: f32) {
        self.scene.borrow_mut().pointer_move(x, y, instant::now());
    }

    pub fn on_pointer_leave(&self) {
        self.scene.borrow_mut().pointer_leave();
    }

    /// Partial camera update; omitted arguments keep their current value.
    /// Angles are in degrees.
    pub fn set_camera_params(
        &self,
        rotation_deg: Option<f32>,
        tilt_deg: Option<f32>,
        offset_x: Option<f32>,
        offset_y: Option<f32>,
        zoom: Option<f32>,
    ) {
        let patch = CameraPatch {
            rotation: rotation_deg.map(f32::to_radians),
            tilt: tilt_deg.map(f32::to_radians),
            offset_x,
            offset_y,
            camera_z: zoom,
        };
        let mut scene = self.scene.borrow_mut();
        scene.set_camera(&patch);
        if patch.touches_offsets() {
            let cam = scene.camera();
            dom::publish_camera_offsets(cam.offset_x(), cam.offset_y());
        }
    }

    pub fn reset_angles(&self) {
        self.scene.borrow_mut().reset_angles();
    }

    pub fn start(&self) {
        self.frame_loop.start();
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("grid-backdrop starting");

    if let Err(e) = attach_to_page() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn attach_to_page() -> anyhow::Result<()> {
    // Listeners and the page loop are wired at most once per page
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::debug!("page background already attached");
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::canvas_by_id(&document, constants::CANVAS_ELEMENT_ID) else {
        log::warn!(
            "{}",
            GridError::MissingSurface(format!("#{} not found", constants::CANVAS_ELEMENT_ID))
        );
        return Ok(());
    };
    let (width, height) =
        dom::window_inner_size().ok_or_else(|| anyhow::anyhow!("window size unavailable"))?;

    let background = match GridBackground::init(&canvas, width, height) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("{}", e);
            return Ok(());
        }
    };

    events::wire_pointer_handlers(events::pointer::InputWiring {
        canvas: canvas.clone(),
        scene: background.scene.clone(),
    });
    events::wire_controls(&document, &background.scene);
    {
        let scene = background.scene.borrow();
        let cam = scene.camera();
        dom::publish_camera_offsets(cam.offset_x(), cam.offset_y());
    }

    background.start();
    PAGE_BACKGROUND.with(|slot| *slot.borrow_mut() = Some(background));
    Ok(())
}
