use crate::core::Scene;
use crate::error::GridError;
use crate::render::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a running frame touches.
pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();
        match self.scene.borrow_mut().step(now, &mut self.surface) {
            Ok(_) => {}
            Err(GridError::DegenerateViewport { width, height }) => {
                log::debug!("[frame] skipped: viewport {}x{}", width, height);
            }
            Err(e) => log::error!("[frame] {}", e),
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that can be stopped. `handle` holds the id of
/// the pending request while running; `None` means idle.
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        Self {
            ctx: Rc::new(RefCell::new(ctx)),
            handle: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        if self.tick.borrow().is_none() {
            let ctx = self.ctx.clone();
            let handle = self.handle.clone();
            let tick = self.tick.clone();
            *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                // stop() clears the handle; a callback that was already queued bails out
                if handle.take().is_none() {
                    return;
                }
                ctx.borrow_mut().frame();
                handle.set(request_frame(&tick));
            }) as Box<dyn FnMut()>));
        }
        self.handle.set(request_frame(&self.tick));
        log::info!("[frame] loop started");
    }

    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // breaks the closure -> tick Rc cycle
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let cb = tick.borrow();
    let cb = cb.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
