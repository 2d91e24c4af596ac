use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod lead;
mod pages {
    pub mod contact;
    pub mod home;
}

use pages::{
    contact::ContactPage,
    home::{Home, NotFound},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new({
                let window = window.clone();
                move || {
                    if let Some(window) = &window {
                        if let Ok(scroll_y) = window.scroll_y() {
                            is_scrolled.set(scroll_y > 80.0);
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 100;
                    padding: 1.5rem 2rem;
                    transition: background 0.3s ease, padding 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(13, 13, 13, 0.9);
                    backdrop-filter: blur(10px);
                    padding: 1rem 2rem;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo, .nav-link {
                    color: #f5f1e8;
                    text-decoration: none;
                }
                .nav-logo { font-size: 1.2rem; letter-spacing: 0.1em; }
                .nav-right { display: flex; gap: 2rem; align-items: center; }
                .nav-cta {
                    color: #0d0d0d;
                    background: #c9a961;
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    text-decoration: none;
                }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    margin: 4px 0;
                    background: #f5f1e8;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: block; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 2rem;
                        background: rgba(13, 13, 13, 0.97);
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Capital Advisory"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Talk to an Advisor"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
