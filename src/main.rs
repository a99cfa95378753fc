use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod scroll;
mod contact {
    pub mod error;
    pub mod form;
    pub mod relay;
    pub mod validator;
}
mod components {
    pub mod contact_form;
    pub mod typewriter;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

const SCROLLED_THRESHOLD: i32 = 80;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Início"),
    ("#services", "Serviços"),
    ("#about", "Sobre"),
    ("#contact", "Contato"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: &'static str,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_top = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_top as i32 > SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

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

    // Anchor clicks themselves are handled by the page's smooth scroll listeners.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{ props.brand }</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(href, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <a href={*href} class="nav-link">{ *label }</a>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let variant = config::get_site_variant();
    let content = use_memo(|variant| variant.content(), variant);
    info!("Rendering {:?} variant", variant);

    html! {
        <>
            <Nav brand={content.brand} />
            <Home content={(*content).clone()} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
