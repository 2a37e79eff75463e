use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::content::collections::{Collection, COLLECTIONS};
use crate::theme::ThemeMode;

/// Clearance left above a section for the sticky category bar.
const SECTION_OFFSET: f64 = 140.0;

fn scroll_target(element_top: f64, body_top: f64, offset: f64) -> f64 {
    element_top - body_top - offset
}

fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let (Some(element), Some(body)) = (document.get_element_by_id(id), document.body()) else {
        return;
    };
    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        body.get_bounding_client_rect().top(),
        SECTION_OFFSET,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct CollectionsProps {
    pub theme: ThemeMode,
}

#[function_component(Collections)]
pub fn collections(props: &CollectionsProps) -> Html {
    html! {
        <div class={classes!("collections-page", props.theme.as_str())}>
            <section class="collections-inner">
                <header class="collections-header">
                    <div class="eyebrow-row">
                        <div class="eyebrow-line"></div>
                        <span class="eyebrow">{"Architectural Archive"}</span>
                    </div>
                    <h1 class="serif">{"Curating the "}<br />
                        <span class="accent">{"Modern Ritual."}</span>
                    </h1>
                    <p class="collections-lede">
                        {"A decade of industrial precision. Jane West harmonizes the rugged durability of scientific borosilicate with the immortal elegance of Art Deco architecture."}
                    </p>
                </header>

                <div class="category-bar-wrap">
                    <div class="category-bar">
                        { for COLLECTIONS.iter().map(|col| {
                            let id = col.id;
                            html! {
                                <button onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}>
                                    {col.category}
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class="collection-list">
                    { for COLLECTIONS.iter().enumerate().map(|(idx, col)| render_collection(idx, col)) }
                </div>

                <div class="credo">
                    <h3>{"The Jane West Credo"}</h3>
                    <h4 class="serif">{"Architected to be "}<br />{"timeless."}</h4>
                    <p>
                        {"Every Jane West piece undergoes rigorous quality control to ensure that the intersection of form and function is never compromised. Our borosilicate glass is hand-blown and machine-finished for mathematical precision."}
                    </p>
                    <div class="credo-stats">
                        { for [("10+", "Years of Design"), ("3.3", "Expansion Grade"), ("01", "Jane West")].iter().map(|(value, label)| html! {
                            <div>
                                <div class="credo-value serif">{*value}</div>
                                <div class="credo-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>
            <style>{COLLECTIONS_CSS}</style>
        </div>
    }
}

fn render_collection(idx: usize, col: &Collection) -> Html {
    let side = if idx % 2 == 0 { "left" } else { "right" };
    let title = html! { <h2 class="serif">{col.title}</h2> };

    html! {
        <article id={col.id} class={classes!("collection", side)}>
            <div class="collection-swatch" style={format!("background: {};", col.color_theme)}></div>
            <div class="collection-meta">
                <span class="collection-category">{col.category}</span>
                <div class="collection-rule"></div>
                <span class="collection-series">{Collection::series_label(idx)}</span>
                if let Some(status) = col.status {
                    <span class="collection-status">{status.label()}</span>
                }
            </div>
            {
                match col.main_link {
                    Some(href) => html! { <a class="collection-title" href={href} target="_blank" rel="noreferrer">{title}</a> },
                    None => html! { <div class="collection-title">{title}</div> },
                }
            }
            <p class="collection-subtitle">{col.subtitle}</p>
            <div class="collection-specs">
                <div>
                    <span>{"Material Engineering"}</span>
                    <p>{"Lab-Grade Borosilicate 3.3"}</p>
                </div>
                <div>
                    <span>{"Design Philosophy"}</span>
                    <p>{"Architectural Art Deco"}</p>
                </div>
            </div>
            <p class="collection-description">{col.description}</p>
            <div class="collection-items">
                { for col.featured_items.iter().map(|item| match col.item_link(item) {
                    Some(href) => html! { <a class="collection-item" href={href} target="_blank" rel="noreferrer">{*item}</a> },
                    None => html! { <span class="collection-item">{*item}</span> },
                }) }
            </div>
            <div class="manifesto">
                <div class="manifesto-head">
                    <div class="collection-rule"></div>
                    <span>{"The Designer's Manifesto"}</span>
                </div>
                <p>{col.seo_cluster}</p>
            </div>
        </article>
    }
}

const COLLECTIONS_CSS: &str = r#"
.collections-page { min-height: 100vh; }
.collections-inner { max-width: 80rem; margin: 0 auto; padding: 11rem 3rem 8rem; }
.collections-header { margin-bottom: 6rem; max-width: 56rem; }
.eyebrow-row { display: flex; align-items: center; gap: 2rem; margin-bottom: 3rem; }
.eyebrow-line { width: 5rem; height: 2px; background: var(--accent); }
.eyebrow { font-size: 11px; font-weight: 900; letter-spacing: 1em; text-transform: uppercase; color: var(--accent); }
.collections-header h1 { font-size: 10.5rem; font-weight: 900; font-style: italic; line-height: 0.8; letter-spacing: -0.05em; margin: 0 0 3.5rem; }
.collections-lede { font-size: 1.9rem; font-weight: 700; line-height: 1.6; opacity: 0.6; max-width: 42rem; }
.category-bar-wrap { position: sticky; top: 7rem; z-index: 40; margin-bottom: 9rem; }
.category-bar {
    display: flex;
    gap: 0.75rem;
    overflow-x: auto;
    scrollbar-width: none;
    padding: 0.6rem;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: var(--surface);
    backdrop-filter: blur(30px);
}
.category-bar::-webkit-scrollbar { display: none; }
.category-bar button {
    flex-shrink: 0;
    padding: 1.25rem 2.5rem;
    border: none;
    border-radius: 999px;
    background: transparent;
    color: var(--text);
    opacity: 0.6;
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.4em;
    white-space: nowrap;
    cursor: pointer;
    transition: all 0.5s;
}
.category-bar button:hover { opacity: 1; color: var(--accent); }
.collection-list { display: flex; flex-direction: column; gap: 18rem; }
.collection { position: relative; display: flex; flex-direction: column; }
.collection.left { align-items: flex-start; text-align: left; }
.collection.right { align-items: flex-end; text-align: right; }
.collection-swatch { position: absolute; top: 0; bottom: 0; width: 50%; opacity: 0.08; border-radius: 64px; pointer-events: none; }
.collection.left .collection-swatch { left: -6rem; }
.collection.right .collection-swatch { right: -6rem; }
.collection-meta { display: flex; align-items: center; gap: 2rem; margin-bottom: 3.5rem; }
.collection.right .collection-meta { flex-direction: row-reverse; }
.collection-category { font-size: 12px; font-weight: 900; letter-spacing: 0.8em; color: var(--accent); }
.collection-rule { width: 7rem; height: 1px; background: var(--accent); opacity: 0.3; }
.collection-series { font-size: 11px; font-weight: 700; letter-spacing: 0.5em; opacity: 0.3; }
.collection-status {
    font-size: 9px;
    font-weight: 900;
    letter-spacing: 0.3em;
    padding: 0.4rem 1rem;
    border-radius: 999px;
    border: 1px solid var(--border);
}
.collection-title { color: inherit; text-decoration: none; }
.collection-title h2 { font-size: 9rem; font-weight: 900; font-style: italic; line-height: 1; letter-spacing: -0.05em; margin: 0 0 3.5rem; transition: color 1s; }
.collection-title:hover h2 { color: var(--highlight); }
.collection-subtitle { font-size: 3.5rem; font-weight: 700; font-style: italic; line-height: 1.15; max-width: 56rem; margin: 0 0 6rem; opacity: 0.9; }
.collection-specs {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 5rem;
    max-width: 56rem;
    width: 100%;
    padding: 5rem 0;
    margin-bottom: 6rem;
    border-top: 1px solid var(--border);
    border-bottom: 1px solid var(--border);
}
.collection-specs span { font-size: 10px; font-weight: 900; letter-spacing: 0.3em; text-transform: uppercase; color: var(--accent); }
.collection-specs p { font-size: 1rem; font-weight: 900; letter-spacing: 0.3em; text-transform: uppercase; }
.collection-description { font-size: 1.5rem; font-weight: 700; line-height: 1.6; opacity: 0.5; max-width: 56rem; margin: 0 0 6rem; }
.collection-items { display: flex; flex-wrap: wrap; gap: 1.5rem; margin-bottom: 7rem; max-width: 56rem; }
.collection.right .collection-items { justify-content: flex-end; }
.collection-item {
    padding: 1.5rem 3rem;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: var(--surface);
    color: var(--text);
    text-decoration: none;
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.4em;
    transition: all 0.7s;
}
.collection-item:hover { border-color: var(--accent); }
.manifesto {
    width: 100%;
    text-align: left;
    padding: 6rem;
    border-radius: 64px;
    border: 1px solid var(--border);
    background: var(--surface);
    backdrop-filter: blur(30px);
    transition: transform 1s;
}
.manifesto:hover { transform: scale(1.015); }
.manifesto-head { display: flex; align-items: center; gap: 1.5rem; margin-bottom: 3rem; }
.manifesto-head .collection-rule { width: 3rem; opacity: 1; }
.manifesto-head span { font-size: 11px; font-weight: 900; letter-spacing: 0.8em; text-transform: uppercase; color: var(--accent); }
.manifesto p { font-size: 1.1rem; font-weight: 700; font-style: italic; letter-spacing: 0.25em; line-height: 2.2; text-transform: uppercase; opacity: 0.3; }
.credo {
    margin-top: 18rem;
    padding: 12rem;
    border-radius: 100px;
    border: 1px solid var(--border);
    background: var(--surface);
    backdrop-filter: blur(30px);
    text-align: center;
}
.credo h3 { font-size: 12px; font-weight: 900; letter-spacing: 1.2em; text-transform: uppercase; color: var(--accent); }
.credo h4 { font-size: 11rem; font-weight: 900; font-style: italic; line-height: 0.75; letter-spacing: -0.05em; margin: 5rem 0; }
.credo p { font-size: 1.9rem; font-weight: 700; line-height: 1.6; opacity: 0.6; max-width: 64rem; margin: 0 auto; }
.credo-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 4rem; padding-top: 6rem; margin-top: 6rem; border-top: 1px solid var(--border); }
.credo-value { font-size: 6rem; font-weight: 900; font-style: italic; letter-spacing: -0.05em; }
.credo-label { font-size: 12px; font-weight: 900; letter-spacing: 0.6em; text-transform: uppercase; opacity: 0.4; }
@media (max-width: 900px) {
    .collections-inner { padding: 11rem 1.5rem 8rem; }
    .collections-header h1 { font-size: 3.75rem; }
    .collections-lede { font-size: 1.25rem; }
    .category-bar-wrap { top: 6rem; margin-bottom: 5rem; }
    .category-bar button { padding: 1rem 1.5rem; font-size: 9px; letter-spacing: 0.3em; }
    .collection-list { gap: 12rem; }
    .collection-title h2 { font-size: 2.25rem; margin-bottom: 2rem; }
    .collection-subtitle { font-size: 1.5rem; margin-bottom: 3rem; }
    .collection-specs { grid-template-columns: 1fr; gap: 2.5rem; padding: 3rem 0; margin-bottom: 3rem; }
    .collection-description { font-size: 1.1rem; margin-bottom: 3rem; }
    .collection-items { margin-bottom: 5rem; }
    .collection-item { padding: 1rem 2rem; }
    .manifesto { padding: 2.5rem; border-radius: 40px; }
    .manifesto p { font-size: 0.75rem; }
    .credo { margin-top: 12rem; padding: 2.5rem; border-radius: 60px; }
    .credo h4 { font-size: 2.25rem; margin: 2.5rem 0; }
    .credo p { font-size: 1.1rem; }
    .credo-stats { grid-template-columns: 1fr; gap: 3rem; }
    .credo-value { font-size: 3rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_lands_below_sticky_bar() {
        // Body scrolled 500px down, section 300px below the viewport top.
        assert_eq!(scroll_target(300.0, -500.0, SECTION_OFFSET), 660.0);
    }

    #[test]
    fn section_ids_match_anchors() {
        for col in COLLECTIONS {
            assert!(!col.id.contains(' '), "{} is not a valid element id", col.id);
        }
    }
}
