use web_sys::Element;
use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::vcf_button::VcfButton;
use crate::theme::ThemeMode;
use crate::tilt::{Bounds, Tilt};

#[derive(Properties, PartialEq)]
pub struct IdCardProps {
    pub theme: ThemeMode,
}

const FEATURES: [(&str, &str); 3] = [
    ("Phantom Effect", "Transparent from reverse, information-rich from front. A dual-plane borosilicate marvel."),
    ("Metallic Etch", "Rose gold laser etching at 1200 DPI ensures crisp readability and luxury aesthetic."),
    ("VCF Integrated", "Universal contact card deployment optimized for both iOS and Android ecosystems."),
];

/// The card on its own, tilting toward the pointer.
#[function_component(IdCard)]
pub fn id_card(props: &IdCardProps) -> Html {
    let tilt = use_state(|| Tilt::FLAT);
    let stage = use_node_ref();

    let on_move = {
        let tilt = tilt.clone();
        let stage = stage.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = stage.cast::<Element>() {
                let bounds = Bounds::from(&el.get_bounding_client_rect());
                tilt.set(Tilt::from_pointer(e.client_x() as f64, e.client_y() as f64, bounds));
            }
        })
    };
    let on_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::FLAT))
    };

    html! {
        <section class="id-page">
            <div class="id-heading">
                <h2>{"The Artifact"}</h2>
                <h1 class="serif">{"Digital Identity"}</h1>
                <p>{"Interact with the future of Jane West networking"}</p>
            </div>

            <div class="id-stage" ref={stage} onmousemove={on_move} onmouseleave={on_leave}>
                <div class="id-tilt" style={tilt.transform()}>
                    <GlassCard theme={props.theme} />
                </div>
                <div class="id-glow"></div>
            </div>

            <VcfButton />

            <div class="id-features">
                { for FEATURES.iter().map(|(title, body)| html! {
                    <div class="id-feature">
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .id-page {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 3rem;
                    overflow: hidden;
                }
                .id-heading { text-align: center; max-width: 56rem; }
                .id-heading h2 { font-size: 0.85rem; font-weight: 900; letter-spacing: 0.5em; text-transform: uppercase; color: var(--accent); }
                .id-heading h1 { font-size: 4.5rem; font-weight: 700; font-style: italic; margin: 1rem 0; }
                .id-heading p { font-size: 10px; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; opacity: 0.4; }
                .id-stage {
                    position: relative;
                    width: 100%;
                    max-width: 600px;
                    height: 400px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    perspective: 2000px;
                }
                .id-tilt { width: 100%; transition: transform 0.2s ease-out; }
                .id-glow {
                    position: absolute;
                    z-index: -1;
                    width: 150%;
                    height: 150%;
                    border-radius: 50%;
                    background: var(--accent);
                    opacity: 0.1;
                    filter: blur(120px);
                    pointer-events: none;
                }
                .id-features {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 56rem;
                    width: 100%;
                    text-align: center;
                }
                .id-feature { padding: 1.5rem; }
                .id-feature h3 { font-size: 10px; font-weight: 900; letter-spacing: 0.2em; text-transform: uppercase; margin-bottom: 0.5rem; }
                .id-feature p { font-size: 0.75rem; font-weight: 500; line-height: 1.7; opacity: 0.5; }
                @media (max-width: 768px) {
                    .id-heading h1 { font-size: 3rem; }
                    .id-features { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
