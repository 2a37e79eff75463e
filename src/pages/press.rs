use yew::prelude::*;

use crate::content::contact::JANE_WEST;
use crate::content::press::{PressDetail, PressSection, PRESS_HEADLINE, PRESS_SECTIONS};
use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct PressProps {
    pub theme: ThemeMode,
}

#[function_component(Press)]
pub fn press(props: &PressProps) -> Html {
    html! {
        <div class={classes!("press-page", props.theme.as_str())}>
            <section class="press-inner">
                <header class="press-header">
                    <span class="press-eyebrow">{"Official Media Resources"}</span>
                    <h1 class="serif">{"Press Kit "}<span class="accent">{"2026"}</span></h1>
                    <p class="press-headline">{PRESS_HEADLINE}</p>
                    <a class="press-contact" href={format!("mailto:{}", JANE_WEST.email)}>
                        {"Media Contact: "}{JANE_WEST.email}
                    </a>
                </header>
                { for PRESS_SECTIONS.iter().map(render_section) }
            </section>
            <style>{PRESS_CSS}</style>
        </div>
    }
}

fn render_section(section: &PressSection) -> Html {
    html! {
        <article class="press-section">
            <div class="press-number serif">{section.number}</div>
            <div class="press-body">
                <h2>{section.title}</h2>
                if let Some(content) = section.content {
                    <p class="press-lead">{content}</p>
                }
                if let Some(extra) = section.extra {
                    <p class="press-lead">{extra}</p>
                }
                {render_detail(&section.detail)}
            </div>
        </article>
    }
}

fn render_detail(detail: &PressDetail) -> Html {
    match *detail {
        PressDetail::Labeled(rows) => html! {
            <ul class="press-labeled">
                { for rows.iter().map(|(label, text)| html! {
                    <li><strong>{*label}{": "}</strong>{*text}</li>
                }) }
            </ul>
        },
        PressDetail::Milestones(rows) => html! {
            <div class="press-milestones">
                <h3>{"Key Milestones"}</h3>
                { for rows.iter().map(|(year, text)| html! {
                    <div class="milestone">
                        <span class="milestone-year serif">{*year}</span>
                        <span>{*text}</span>
                    </div>
                }) }
            </div>
        },
        PressDetail::Verticals(rows) => html! {
            <div class="press-verticals">
                { for rows.iter().map(|(name, text)| html! {
                    <div class="vertical">
                        <h3 class="serif">{*name}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </div>
        },
        PressDetail::Stats(rows) => html! {
            <div class="press-stats">
                { for rows.iter().map(|(label, value)| html! {
                    <div class="stat">
                        <span>{*label}</span>
                        <strong class="serif">{*value}</strong>
                    </div>
                }) }
            </div>
        },
        PressDetail::Quotes(rows) => html! {
            <div class="press-quotes">
                { for rows.iter().map(|(outlet, quote)| html! {
                    <blockquote>
                        <p class="serif">{format!("\u{201c}{quote}\u{201d}")}</p>
                        <cite>{*outlet}</cite>
                    </blockquote>
                }) }
            </div>
        },
        PressDetail::Topics(topics) => html! {
            <ol class="press-topics">
                { for topics.iter().map(|topic| html! { <li>{*topic}</li> }) }
            </ol>
        },
    }
}

const PRESS_CSS: &str = r#"
.press-page { min-height: 100vh; }
.press-inner { max-width: 64rem; margin: 0 auto; padding: 11rem 3rem 8rem; }
.press-header { margin-bottom: 7rem; }
.press-eyebrow { font-size: 11px; font-weight: 900; letter-spacing: 0.8em; text-transform: uppercase; color: var(--accent); }
.press-header h1 { font-size: 7rem; font-weight: 900; font-style: italic; letter-spacing: -0.05em; line-height: 0.9; margin: 2rem 0; }
.press-headline { font-size: 1.1rem; font-weight: 900; letter-spacing: 0.3em; text-transform: uppercase; opacity: 0.6; }
.press-contact { display: inline-block; margin-top: 2rem; color: var(--accent); font-weight: 800; text-decoration: none; }
.press-section { display: grid; grid-template-columns: 6rem 1fr; gap: 2rem; padding: 4rem 0; border-top: 1px solid var(--border); }
.press-number { font-size: 3rem; font-weight: 900; font-style: italic; color: var(--accent); opacity: 0.6; }
.press-body h2 { font-size: 12px; font-weight: 900; letter-spacing: 0.5em; margin: 0 0 2rem; }
.press-lead { font-size: 1.2rem; font-weight: 600; line-height: 1.8; opacity: 0.75; margin: 0 0 1.5rem; }
.press-labeled { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1rem; }
.press-labeled strong { color: var(--accent); }
.press-milestones h3 { font-size: 10px; font-weight: 900; letter-spacing: 0.5em; text-transform: uppercase; opacity: 0.5; }
.milestone { display: flex; gap: 2rem; align-items: baseline; padding: 1rem 0; }
.milestone-year { min-width: 6rem; font-size: 1.5rem; font-weight: 900; font-style: italic; color: var(--accent); }
.press-verticals, .press-stats { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
.vertical, .stat { padding: 2rem; border-radius: 32px; border: 1px solid var(--border); background: var(--surface); }
.vertical h3 { font-size: 1.5rem; font-style: italic; margin: 0 0 1rem; }
.vertical p { opacity: 0.7; line-height: 1.6; }
.stat { display: flex; flex-direction: column; gap: 0.75rem; }
.stat span { font-size: 10px; font-weight: 900; letter-spacing: 0.4em; text-transform: uppercase; opacity: 0.5; }
.stat strong { font-size: 1.5rem; font-style: italic; }
.press-quotes { display: flex; flex-direction: column; gap: 2rem; }
.press-quotes blockquote { margin: 0; padding-left: 2rem; border-left: 2px solid var(--accent); }
.press-quotes p { font-size: 2rem; font-style: italic; margin: 0 0 0.5rem; }
.press-quotes cite { font-size: 10px; font-weight: 900; letter-spacing: 0.4em; text-transform: uppercase; font-style: normal; opacity: 0.5; }
.press-topics { padding-left: 1.5rem; display: flex; flex-direction: column; gap: 1rem; font-size: 1.1rem; line-height: 1.6; }
@media (max-width: 900px) {
    .press-inner { padding: 9rem 1.5rem 6rem; }
    .press-header h1 { font-size: 3.5rem; }
    .press-section { grid-template-columns: 1fr; gap: 1rem; }
    .press-verticals, .press-stats { grid-template-columns: 1fr; }
}
"#;
