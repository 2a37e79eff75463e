use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod theme;
mod qr;
mod vcard;
mod clipboard;
mod router;
mod tilt;

mod content {
    pub mod contact;
    pub mod collections;
    pub mod press;
    pub mod pathways;
}
mod inquiry {
    pub mod model;
    pub mod flow;
    pub mod endpoint;
    pub mod dialog;
}
mod components {
    pub mod glass_card;
    pub mod vcf_button;
    pub mod info_overlay;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod id_card;
    pub mod collections;
    pub mod contact;
    pub mod press;
}

use pages::{
    home::Home,
    id_card::IdCard,
    collections::Collections,
    contact::Contact,
    press::Press,
};
use components::{footer::Footer, info_overlay::InfoOverlay};
use router::{PageId, PageRouter, WindowViewport};
use theme::ThemeMode;

fn switch(page: PageId, theme: ThemeMode, on_navigate: Callback<PageId>) -> Html {
    match page {
        PageId::Home => {
            info!("Rendering Home page");
            html! { <Home theme={theme} on_navigate={on_navigate} /> }
        },
        PageId::Id => {
            info!("Rendering ID page");
            html! { <IdCard theme={theme} /> }
        },
        PageId::Collections => {
            info!("Rendering Collections page");
            html! { <Collections theme={theme} /> }
        },
        PageId::Contact => {
            info!("Rendering Contact page");
            html! { <Contact theme={theme} on_navigate={on_navigate} /> }
        },
        PageId::Press => {
            info!("Rendering Press page");
            html! { <Press theme={theme} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub router: PageRouter,
    pub on_navigate: Callback<PageId>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { router, on_navigate } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(scroll_y > 40.0);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
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

    let go = |page: PageId| {
        let on_navigate = on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_navigate.emit(page);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo serif" onclick={go(PageId::Home)}>
                    {"Jane West"}
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for PageId::ALL.into_iter().map(|page| html! {
                        <button
                            class={classes!("nav-link", router.is_active(page).then(|| "active"))}
                            onclick={go(page)}
                        >
                            {page.nav_label()}
                        </button>
                    }) }
                </div>
                <div class="nav-live">
                    <div class="nav-live-dot"></div>
                    <span>{"Live Experience"}</span>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let router = use_state(PageRouter::default);
    let theme = use_state(ThemeMode::default);

    let on_navigate = {
        let router = router.clone();
        Callback::from(move |page: PageId| {
            let mut next = (*router).clone();
            next.navigate(page.slug(), &WindowViewport);
            info!("Navigated to {}", next.raw());
            router.set(next);
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            info!("Switching to {}", next.interface_label());
            theme.set(next);
        })
    };

    let palette = theme.palette();

    html! {
        <div
            class={classes!("app-root", theme.as_str())}
            style={format!("{} background: var(--bg); color: var(--text);", palette.css_vars())}
        >
            <Nav router={(*router).clone()} on_navigate={on_navigate.clone()} />
            <main>
                { switch(router.current(), *theme, on_navigate.clone()) }
            </main>
            <Footer theme={*theme} on_navigate={on_navigate} on_toggle_theme={on_toggle_theme} />
            <InfoOverlay theme={*theme} />
            <style>{APP_CSS}</style>
        </div>
    }
}

const APP_CSS: &str = r#"
body { margin: 0; font-family: 'Montserrat', 'Helvetica Neue', sans-serif; }
.app-root { min-height: 100vh; overflow-x: hidden; transition: background 1s, color 0.7s; }
.serif { font-family: 'Playfair Display', Georgia, serif; }
.accent { color: var(--accent); }
::selection { background: var(--accent); color: #fff; }
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 50;
    background: var(--surface);
    backdrop-filter: blur(24px);
    border-bottom: 1px solid var(--border);
    transition: box-shadow 0.5s;
}
.top-nav.scrolled { box-shadow: 0 10px 40px rgba(0, 0, 0, 0.08); }
.nav-content { max-width: 80rem; margin: 0 auto; padding: 1.25rem 1.5rem; display: flex; justify-content: space-between; align-items: center; }
.nav-logo { background: none; border: none; padding: 0; color: var(--text); font-size: 1.9rem; font-weight: 900; font-style: italic; letter-spacing: -0.04em; cursor: pointer; }
.nav-right { display: flex; gap: 2.5rem; }
.nav-link { background: none; border: none; padding: 0; color: var(--text); opacity: 0.6; font-size: 10px; font-weight: 900; letter-spacing: 0.3em; cursor: pointer; transition: all 0.3s; }
.nav-link:hover { opacity: 1; }
.nav-link.active { opacity: 1; color: var(--accent); }
.nav-live { display: flex; align-items: center; gap: 1rem; }
.nav-live-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--accent); animation: pulse 2s infinite; }
.nav-live span { font-size: 8px; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: var(--accent); }
.burger-menu { display: none; flex-direction: column; gap: 4px; background: none; border: none; cursor: pointer; }
.burger-menu span { width: 22px; height: 2px; background: var(--text); }
.copied-badge {
    position: absolute;
    top: -2.5rem;
    left: 50%;
    transform: translateX(-50%);
    padding: 0.25rem 0.75rem;
    border-radius: 4px;
    background: #000;
    color: #fff;
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    white-space: nowrap;
}
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.4; } }
@media (max-width: 768px) {
    .burger-menu { display: flex; }
    .nav-live { display: none; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 2rem 1.5rem;
        gap: 1.5rem;
        background: var(--bg);
        border-bottom: 1px solid var(--border);
    }
}
"#;


fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {e}").into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
