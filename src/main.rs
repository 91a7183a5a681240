use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod header;
    pub mod notification;
    pub mod reveal;
    pub mod ripple;
}
mod forms {
    pub mod callback;
    pub mod contact;
    pub mod controller;
    pub mod gateway;
    pub mod newsletter;
    pub mod validator;
}
mod pages {
    pub mod home;
}

use components::header::Header;
use components::notification::NotificationProvider;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{GLOBAL_CSS}</style>
            <NotificationProvider>
                <Header />
                <Switch<Route> render={switch} />
            </NotificationProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

const GLOBAL_CSS: &str = r#"
    * {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        background: #1a1a1a;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    button {
        position: relative;
        overflow: hidden;
        font-family: inherit;
    }
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.6);
        transform: scale(0);
        animation: ripple-animation 0.6s linear;
        pointer-events: none;
    }
    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal.fade-in-up {
        opacity: 1;
        transform: translateY(0);
    }
    .header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 1000;
        background: rgba(26, 26, 26, 0.9);
        backdrop-filter: blur(10px);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .header.scrolled {
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.3);
    }
    .nav-content {
        max-width: 1100px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.3rem;
        font-weight: bold;
        color: #7EB2FF;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        gap: 1.5rem;
        align-items: center;
    }
    .nav-link {
        color: rgba(255, 255, 255, 0.8);
        text-decoration: none;
        transition: color 0.2s ease;
    }
    .nav-link:hover {
        color: #7EB2FF;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.5rem;
    }
    .burger-menu span {
        width: 22px;
        height: 2px;
        background: #fff;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            background: rgba(26, 26, 26, 0.98);
            padding: 1.5rem 2rem;
        }
        .nav-right.mobile-menu-open {
            display: flex;
        }
    }
"#;
