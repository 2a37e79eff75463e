use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::vcf_button::VcfButton;
use crate::content::contact::JANE_WEST;
use crate::router::PageId;
use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub theme: ThemeMode,
    pub on_navigate: Callback<PageId>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let to_id = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(PageId::Id))
    };
    let to_catalog = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(PageId::Collections))
    };

    html! {
        <section class="home-hero">
            <div class="home-blob home-blob-a"></div>
            <div class="home-blob home-blob-b"></div>
            <div class="home-inner">
                <div class="home-title">
                    <h1 class="serif">
                        {"Life is better "}<br class="desktop-only" />{"with "}<span class="accent">{"Jane."}</span>
                    </h1>
                    <p>{JANE_WEST.tagline}</p>
                </div>
                <div class="home-actions">
                    <div class="home-card" onclick={to_id}>
                        <GlassCard theme={props.theme} />
                    </div>
                    <VcfButton />
                    <button class="home-catalog" onclick={to_catalog}>{"View Catalog"}</button>
                </div>
            </div>
            <style>
                {r#"
                .home-hero {
                    min-height: 100vh;
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1.5rem;
                }
                .home-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(150px);
                    opacity: 0.2;
                    transition: background 1s;
                }
                .home-blob-a { top: -10%; left: -10%; width: 70vw; height: 70vw; background: var(--accent); }
                .home-blob-b { bottom: -10%; right: -10%; width: 60vw; height: 60vw; background: var(--highlight); }
                .home-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 64rem;
                    width: 100%;
                    padding: 11rem 0 5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                    text-align: center;
                }
                .home-title h1 {
                    font-size: 10rem;
                    font-weight: 700;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    line-height: 0.9;
                    margin: 0 0 1.5rem;
                }
                .home-title p {
                    font-size: 0.85rem;
                    font-weight: 900;
                    letter-spacing: 0.8em;
                    text-transform: uppercase;
                    opacity: 0.4;
                }
                .home-actions {
                    width: 100%;
                    max-width: 500px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .home-card { width: 100%; cursor: pointer; }
                .home-catalog {
                    padding: 1.5rem 3rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: transparent;
                    color: var(--text);
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .home-catalog:hover { background: var(--highlight); }
                @media (max-width: 768px) {
                    .home-title h1 { font-size: 3.75rem; }
                    .desktop-only { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
