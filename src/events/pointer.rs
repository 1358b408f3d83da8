use crate::core::Scene;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_pointer_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointer_enter_leave(&w);
    wire_resize(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        if let Some((cx, cy)) = w.scene.borrow_mut().pointer_move(x, y, instant::now()) {
            log::trace!("[pointer] lit cell ({}, {})", cx, cy);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointer_enter_leave(w: &InputWiring) {
    let enter = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        log::trace!("[pointer] enter");
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
    enter.forget();

    let scene = w.scene.clone();
    let leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        scene.borrow_mut().pointer_leave();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
    leave.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some((width, height)) = dom::window_inner_size() else {
            return;
        };
        dom::sync_canvas_backing_size(&w.canvas, width, height);
        let mut scene = w.scene.borrow_mut();
        scene.resize(width, height);
        let cam = scene.camera();
        dom::publish_camera_offsets(cam.offset_x(), cam.offset_y());
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
