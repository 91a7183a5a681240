use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

const SHADOW_THRESHOLD: f64 = 10.0;
const HIDE_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderMotion {
    Pinned,
    Hidden,
}

/// Tracks the previous scroll offset so the header can slide away while
/// the visitor scrolls down and return as soon as they scroll up.
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self { last_offset: 0.0 }
    }

    pub fn observe(&mut self, offset: f64) -> HeaderMotion {
        let motion = if offset > self.last_offset && offset > HIDE_THRESHOLD {
            HeaderMotion::Hidden
        } else {
            HeaderMotion::Pinned
        };
        self.last_offset = offset;
        motion
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn shadowed(offset: f64) -> bool {
    offset > SHADOW_THRESHOLD
}

/// Scrolls the section with the given id into view. A section missing
/// from the current page is silently ignored.
pub fn scroll_to_section(id: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(target) = document.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

const SECTIONS: [(&str, &str); 5] = [
    ("process", "Process"),
    ("services", "Services"),
    ("cases", "Case Study"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);
    let hidden = use_state(|| false);
    let tracker = use_mut_ref(ScrollTracker::new);

    {
        let scrolled = scrolled.clone();
        let hidden = hidden.clone();
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(offset) = win.scroll_y() {
                                scrolled.set(shadowed(offset));
                                let motion = tracker.borrow_mut().observe(offset);
                                hidden.set(motion == HeaderMotion::Hidden);
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let header_style = if *hidden {
        "transform: translateY(-100%);"
    } else {
        "transform: translateY(0);"
    };

    html! {
        <header
            class={classes!("header", (*scrolled).then(|| "scrolled"))}
            style={header_style}
        >
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"swiftsite"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|(id, label)| {
                        let menu_open = menu_open.clone();
                        let id = *id;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            menu_open.set(false);
                            scroll_to_section(id);
                        });
                        html! {
                            <a href={format!("#{}", id)} class="nav-link" {onclick}>
                                { *label }
                            </a>
                        }
                    }) }
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_hides_only_while_scrolling_down_past_threshold() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.observe(50.0), HeaderMotion::Pinned);
        assert_eq!(tracker.observe(150.0), HeaderMotion::Hidden);
        assert_eq!(tracker.observe(400.0), HeaderMotion::Hidden);
        // Scrolling back up pins it again immediately.
        assert_eq!(tracker.observe(380.0), HeaderMotion::Pinned);
        assert_eq!(tracker.observe(5.0), HeaderMotion::Pinned);
    }

    #[test]
    fn shallow_scrolling_never_hides_the_header() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.observe(40.0), HeaderMotion::Pinned);
        assert_eq!(tracker.observe(80.0), HeaderMotion::Pinned);
        assert_eq!(tracker.observe(100.0), HeaderMotion::Pinned);
    }

    #[test]
    fn shadow_appears_just_past_the_top() {
        assert!(!shadowed(0.0));
        assert!(!shadowed(10.0));
        assert!(shadowed(10.5));
        assert!(shadowed(600.0));
    }
}
