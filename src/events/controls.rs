use crate::constants::RESET_BUTTON_ID;
use crate::core::{Control, Scene};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn control_input(document: &web::Document, control: Control) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(control.element_id())?
        .dyn_into::<web::HtmlInputElement>()
        .ok()
}

/// Bind any range inputs present on the page to the camera. Missing controls
/// are skipped; the grid renders with defaults either way.
pub fn wire_controls(document: &web::Document, scene: &Rc<RefCell<Scene>>) {
    let mut wired = 0;
    for control in Control::ALL {
        let Some(input) = control_input(document, control) else {
            continue;
        };
        input.set_value(&format!("{:.0}", control.read(scene.borrow().camera())));

        let scene = scene.clone();
        let target = input.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let Ok(value) = target.value().trim().parse::<f32>() else {
                return;
            };
            let mut scene = scene.borrow_mut();
            scene.set_control(control, value);
            if control.is_offset() {
                let cam = scene.camera();
                dom::publish_camera_offsets(cam.offset_x(), cam.offset_y());
            }
        }) as Box<dyn FnMut(_)>);
        _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
        wired += 1;
    }

    let scene_reset = scene.clone();
    let doc = document.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        let mut scene = scene_reset.borrow_mut();
        scene.reset_angles();
        for control in [Control::Rotation, Control::Tilt] {
            if let Some(input) = control_input(&doc, control) {
                input.set_value(&format!("{:.0}", control.read(scene.camera())));
            }
        }
        log::info!("[controls] grid angles reset");
    });

    if wired > 0 {
        log::info!("[controls] {} camera controls wired", wired);
    }
}
