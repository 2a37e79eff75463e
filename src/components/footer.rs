use chrono::Datelike;
use yew::prelude::*;

use crate::clipboard::use_copy_to_clipboard;
use crate::config;
use crate::content::contact::JANE_WEST;
use crate::router::PageId;
use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub theme: ThemeMode,
    pub on_navigate: Callback<PageId>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let (copied, copy) = use_copy_to_clipboard();

    let nav_to = |page: PageId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };
    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };
    let copy_email = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        copy.emit(JANE_WEST.email.to_string());
    });

    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer-grid">
                <div class="site-footer-col">
                    <h2 class="serif">{JANE_WEST.name}</h2>
                    <p class="site-footer-blurb">
                        {"Founder of Women Grow. Architect of the modern cannabis lifestyle. Combining Art Deco elegance with functional design."}
                    </p>
                </div>
                <div class="site-footer-col">
                    <h3>{"Navigation"}</h3>
                    <ul>
                        <li><button onclick={nav_to(PageId::Home)}>{"Home"}</button></li>
                        <li><button onclick={nav_to(PageId::Collections)}>{"Collections"}</button></li>
                        <li><a href={config::STORE_URL} target="_blank" rel="noreferrer">{"Official Store"}</a></li>
                        <li><button onclick={nav_to(PageId::Press)}>{"Press Kit"}</button></li>
                    </ul>
                </div>
                <div class="site-footer-col">
                    <button class="theme-toggle" onclick={toggle_theme}>
                        <span>{props.theme.interface_label()}</span>
                        <div class="theme-toggle-dot"></div>
                    </button>
                    <div class="site-footer-social">
                        <button class="social-icon" onclick={copy_email} title="Copy Jane's Email">
                            {"✉"}
                            if copied {
                                <span class="copied-badge">{"Copied"}</span>
                            }
                        </button>
                        <a class="social-icon" href={config::INSTAGRAM_URL} target="_blank" rel="noreferrer" title="Instagram">{"◎"}</a>
                        <a class="social-icon" href={config::LINKEDIN_URL} target="_blank" rel="noreferrer" title="LinkedIn">{"in"}</a>
                    </div>
                    <div class="site-footer-copy">{format!("© {} JANE WEST GLOBAL.", year)}</div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 8rem 2.5rem;
                    background: var(--footer);
                    color: #fff;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .site-footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 6rem;
                }
                .site-footer-col { display: flex; flex-direction: column; gap: 2.5rem; }
                .site-footer-col h2 { font-size: 3.75rem; font-style: italic; font-weight: 900; letter-spacing: -0.04em; margin: 0; }
                .site-footer-col h3 { font-size: 11px; font-weight: 900; letter-spacing: 0.5em; text-transform: uppercase; color: var(--accent); margin: 0; }
                .site-footer-blurb { font-size: 0.85rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; line-height: 2; opacity: 0.4; max-width: 20rem; }
                .site-footer-col ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1.5rem; }
                .site-footer-col li button, .site-footer-col li a {
                    background: none;
                    border: none;
                    padding: 0;
                    color: inherit;
                    text-decoration: none;
                    font-size: 0.85rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    opacity: 0.6;
                    cursor: pointer;
                    transition: opacity 0.3s;
                }
                .site-footer-col li button:hover, .site-footer-col li a:hover { opacity: 1; }
                .theme-toggle {
                    align-self: flex-start;
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    padding: 1.25rem 2.5rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: var(--bg);
                    color: var(--accent);
                    font-size: 11px;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 1s;
                }
                .theme-toggle-dot { width: 1rem; height: 1rem; border-radius: 50%; background: var(--accent); box-shadow: 0 0 15px var(--accent); }
                .site-footer-social { display: flex; gap: 2rem; }
                .social-icon {
                    position: relative;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: none;
                    color: inherit;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-decoration: none;
                    font-weight: 900;
                    cursor: pointer;
                }
                .social-icon:hover { background: rgba(255, 255, 255, 0.1); }
                .site-footer-copy { font-size: 9px; font-weight: 900; letter-spacing: 0.4em; opacity: 0.2; }
                @media (max-width: 900px) {
                    .site-footer-grid { grid-template-columns: 1fr; text-align: center; }
                    .site-footer-col { align-items: center; }
                    .theme-toggle { align-self: center; }
                }
                "#}
            </style>
        </footer>
    }
}
