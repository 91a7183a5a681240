use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

const RIPPLE_LIFETIME_MS: u32 = 600;

/// Spawns the expanding click ripple on the button that received the
/// event. Anything unexpected about the target is silently ignored.
pub fn splash(event: &MouseEvent) {
    let target = match event
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
    {
        Some(element) => element,
        None => return,
    };
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let rect = target.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = event.client_x() as f64 - rect.left() - size / 2.0;
    let y = event.client_y() as f64 - rect.top() - size / 2.0;

    let ripple: HtmlElement = match document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(element) => element,
        None => return,
    };
    ripple.set_class_name("ripple");
    let style = ripple.style();
    let _ = style.set_property("width", &format!("{}px", size));
    let _ = style.set_property("height", &format!("{}px", size));
    let _ = style.set_property("left", &format!("{}px", x));
    let _ = style.set_property("top", &format!("{}px", y));

    if target.append_child(&ripple).is_ok() {
        Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    }
}
