use yew::prelude::*;

use crate::content::contact::JANE_WEST;
use crate::content::pathways::{InquiryPathway, GENERAL_PATHWAY, PATHWAYS};
use crate::inquiry::dialog::InquiryDialog;
use crate::router::PageId;
use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub theme: ThemeMode,
    pub on_navigate: Callback<PageId>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let dialog_open = use_state(|| false);
    let chosen = use_state(|| None::<&'static str>);

    let open_with = {
        let dialog_open = dialog_open.clone();
        let chosen = chosen.clone();
        move |pathway: Option<&'static str>| {
            let dialog_open = dialog_open.clone();
            let chosen = chosen.clone();
            Callback::from(move |_: MouseEvent| {
                chosen.set(pathway);
                dialog_open.set(true);
            })
        }
    };

    let on_close = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_| dialog_open.set(false))
    };

    let browse = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(PageId::Collections))
    };

    let render_pathway = |pathway: &'static InquiryPathway| {
        html! {
            <button class="pathway-card" onclick={open_with(Some(pathway.id))}>
                <span class="pathway-category">{pathway.category()}</span>
                <h3 class="serif">{pathway.title}</h3>
                <p>{pathway.desc}</p>
                <span class="pathway-cta">{"Begin Inquiry →"}</span>
            </button>
        }
    };

    html! {
        <div class={classes!("contact-page", props.theme.as_str())}>
            <section class="contact-inner">
                <header class="contact-header">
                    <span class="contact-eyebrow">{"Direct Line"}</span>
                    <h1 class="serif">{"Let's build "}<span class="accent">{"something."}</span></h1>
                    <p>{"Wholesale, collaborations, press or a simple hello. Pick the pathway that fits and the right person will read it."}</p>
                </header>

                <div class="contact-direct">
                    <a href={format!("mailto:{}", JANE_WEST.email)}>
                        <span>{"Email"}</span>
                        <strong>{JANE_WEST.email}</strong>
                    </a>
                    <a href={JANE_WEST.website} target="_blank" rel="noreferrer">
                        <span>{"Website"}</span>
                        <strong>{JANE_WEST.website_label}</strong>
                    </a>
                </div>

                <div class="pathway-grid">
                    { for PATHWAYS.iter().map(render_pathway) }
                </div>

                <div class="contact-actions">
                    <button class="contact-general" onclick={open_with(Some(GENERAL_PATHWAY))}>
                        {"Start a General Inquiry"}
                    </button>
                    <button class="contact-browse" onclick={browse}>
                        {"Browse the Collections"}
                    </button>
                </div>
            </section>

            <InquiryDialog
                open={*dialog_open}
                pathway={*chosen}
                theme={props.theme}
                on_close={on_close}
            />
            <style>{CONTACT_CSS}</style>
        </div>
    }
}

const CONTACT_CSS: &str = r#"
.contact-page { min-height: 100vh; }
.contact-inner { max-width: 72rem; margin: 0 auto; padding: 11rem 3rem 8rem; }
.contact-header { max-width: 48rem; margin-bottom: 5rem; }
.contact-eyebrow { font-size: 11px; font-weight: 900; letter-spacing: 0.8em; text-transform: uppercase; color: var(--accent); }
.contact-header h1 { font-size: 6rem; font-weight: 900; font-style: italic; letter-spacing: -0.04em; line-height: 0.9; margin: 2rem 0; }
.contact-header p { font-size: 1.4rem; font-weight: 700; line-height: 1.6; opacity: 0.6; }
.contact-direct { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-bottom: 5rem; }
.contact-direct a {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 2.5rem;
    border-radius: 40px;
    border: 1px solid var(--border);
    background: var(--surface);
    color: var(--text);
    text-decoration: none;
    transition: border-color 0.5s;
}
.contact-direct a:hover { border-color: var(--accent); }
.contact-direct span { font-size: 10px; font-weight: 900; letter-spacing: 0.5em; text-transform: uppercase; opacity: 0.5; }
.contact-direct strong { font-size: 1.5rem; font-weight: 900; }
.pathway-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; margin-bottom: 4rem; }
.pathway-card {
    text-align: left;
    padding: 3rem;
    border-radius: 48px;
    border: 1px solid var(--border);
    background: var(--surface);
    color: var(--text);
    backdrop-filter: blur(30px);
    cursor: pointer;
    transition: transform 0.5s, border-color 0.5s;
}
.pathway-card:hover { transform: translateY(-4px); border-color: var(--accent); }
.pathway-category { font-size: 10px; font-weight: 900; letter-spacing: 0.6em; color: var(--accent); }
.pathway-card h3 { font-size: 2.25rem; font-weight: 900; font-style: italic; margin: 1.25rem 0; }
.pathway-card p { font-size: 1rem; font-weight: 600; line-height: 1.6; opacity: 0.6; }
.pathway-cta { display: inline-block; margin-top: 1.5rem; font-size: 10px; font-weight: 900; letter-spacing: 0.4em; text-transform: uppercase; }
.contact-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
.contact-actions button {
    padding: 1.5rem 3rem;
    border-radius: 999px;
    font-size: 11px;
    font-weight: 900;
    letter-spacing: 0.4em;
    text-transform: uppercase;
    cursor: pointer;
}
.contact-general { border: none; background: var(--accent); color: #fff; }
.contact-browse { border: 1px solid var(--border); background: transparent; color: var(--text); }
@media (max-width: 900px) {
    .contact-inner { padding: 9rem 1.5rem 6rem; }
    .contact-header h1 { font-size: 3rem; }
    .contact-direct, .pathway-grid { grid-template-columns: 1fr; }
    .pathway-card { padding: 2rem; border-radius: 36px; }
}
"#;
