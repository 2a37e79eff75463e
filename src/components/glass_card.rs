use yew::prelude::*;

use crate::content::contact::JANE_WEST;
use crate::qr::{build_qr_url, CARD_QR_MARGIN, CARD_QR_SIZE};
use crate::theme::ThemeMode;
use crate::tilt::FlipState;

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    pub theme: ThemeMode,
}

/// Two-sided identity card. Click flips it; the back carries the credo.
#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let flip = use_state(FlipState::default);
    let palette = props.theme.palette();

    let toggle_flip = {
        let flip = flip.clone();
        Callback::from(move |_: MouseEvent| flip.set(flip.toggled()))
    };

    let qr_url = build_qr_url(JANE_WEST.website, CARD_QR_SIZE, palette.qr, CARD_QR_MARGIN);

    html! {
        <div class="glass-card-wrap">
            <div class="glass-card-stage" onclick={toggle_flip} aria-label="Interactive 3D Luxury Glass Card">
                <div class="glass-card-aura"></div>
                <div class={classes!("glass-card-inner", flip.is_flipped().then_some("flipped"))}>
                    <div class="glass-card-face glass-card-front">
                        <div class="glass-card-row">
                            <div class="serif glass-card-name">{JANE_WEST.name}</div>
                            <div class="glass-card-mark">
                                <span>{"Identity"}</span>
                                <div class="glass-card-rule"></div>
                            </div>
                        </div>
                        <div class="glass-card-center">
                            <div class="glass-card-qr">
                                <img src={qr_url} alt="Jane West Website QR" loading="lazy" />
                            </div>
                            <div class="glass-card-site">{JANE_WEST.website_label}</div>
                            <div class="glass-card-email">{JANE_WEST.email}</div>
                        </div>
                        <div class="glass-card-foot serif">{JANE_WEST.tagline}</div>
                        <div class="glass-card-sweep"></div>
                    </div>
                    <div class="glass-card-face glass-card-back">
                        <div class="glass-card-back-block">
                            <div class="serif glass-card-back-name">{JANE_WEST.name}</div>
                            <div class="glass-card-back-sub">{format!("{} | EST. 2014", JANE_WEST.title)}</div>
                        </div>
                        <div class="glass-card-credo">{"THE END OF THE ORDINARY"}</div>
                        <div class="glass-card-back-block">
                            <div class="serif glass-card-back-name">{JANE_WEST.name}</div>
                            <div class="glass-card-back-sub">{"Innovation in Utility"}</div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .glass-card-wrap {
                    width: 100%;
                    max-width: 500px;
                    margin: 0 auto;
                    padding: 1rem 0;
                    user-select: none;
                }
                .glass-card-stage {
                    position: relative;
                    height: 340px;
                    perspective: 2000px;
                    cursor: pointer;
                }
                .glass-card-aura {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: var(--accent);
                    opacity: 0.2;
                    filter: blur(130px);
                    transform: scale(0.9);
                    transition: transform 1s;
                }
                .glass-card-stage:hover .glass-card-aura { transform: scale(1.1); }
                .glass-card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transform-style: preserve-3d;
                    transition: transform 1s ease-in-out;
                }
                .glass-card-inner.flipped { transform: rotateY(180deg); }
                .glass-card-face {
                    position: absolute;
                    inset: 0;
                    backface-visibility: hidden;
                    -webkit-backface-visibility: hidden;
                    border-radius: 40px;
                    overflow: hidden;
                    backdrop-filter: blur(30px);
                    border: 1px solid var(--border);
                    background: var(--surface);
                    color: var(--text);
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.2);
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    padding: 2.5rem;
                }
                .glass-card-back {
                    transform: rotateY(180deg);
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    gap: 2.5rem;
                }
                .glass-card-row { display: flex; justify-content: space-between; align-items: flex-start; }
                .glass-card-name { font-size: 2.75rem; font-weight: 900; font-style: italic; letter-spacing: -0.04em; }
                .glass-card-mark { display: flex; flex-direction: column; align-items: flex-end; gap: 0.25rem; }
                .glass-card-mark span { font-size: 10px; letter-spacing: 0.5em; text-transform: uppercase; font-weight: 900; opacity: 0.3; }
                .glass-card-rule { width: 40px; height: 2px; background: var(--accent); }
                .glass-card-center { display: flex; flex-direction: column; align-items: center; gap: 0.4rem; }
                .glass-card-qr {
                    width: 120px;
                    height: 120px;
                    padding: 0.9rem;
                    border-radius: 32px;
                    background: rgba(255, 255, 255, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    margin-bottom: 1rem;
                    transition: transform 1s;
                }
                .glass-card-stage:hover .glass-card-qr { transform: scale(1.05); }
                .glass-card-qr img { width: 100%; height: 100%; object-fit: contain; }
                .glass-card-site { font-size: 0.9rem; letter-spacing: 0.5em; font-weight: 900; text-transform: uppercase; color: var(--accent); }
                .glass-card-email { font-size: 10px; letter-spacing: 0.3em; font-weight: 700; text-transform: uppercase; opacity: 0.4; }
                .glass-card-foot {
                    border-top: 1px solid var(--border);
                    padding-top: 1.25rem;
                    font-size: 9px;
                    letter-spacing: 0.4em;
                    font-weight: 900;
                    font-style: italic;
                    opacity: 0.5;
                }
                .glass-card-sweep {
                    position: absolute;
                    top: 0;
                    left: -120%;
                    width: 50%;
                    height: 100%;
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.4), transparent);
                    transform: skewX(-40deg);
                    transition: left 2.5s ease-in-out;
                    pointer-events: none;
                }
                .glass-card-stage:hover .glass-card-sweep { left: 280%; }
                .glass-card-back-name { font-size: 1.5rem; font-weight: 900; font-style: italic; }
                .glass-card-back-sub { font-size: 10px; font-weight: 900; letter-spacing: 0.4em; text-transform: uppercase; opacity: 0.4; }
                .glass-card-credo {
                    width: 100%;
                    padding: 2.5rem 0;
                    border-top: 1px solid var(--border);
                    border-bottom: 1px solid var(--border);
                    font-size: 0.85rem;
                    font-weight: 900;
                    letter-spacing: 0.8em;
                    color: var(--accent);
                }
                @media (max-width: 640px) {
                    .glass-card-stage { height: 320px; }
                    .glass-card-face { padding: 1.75rem; }
                    .glass-card-name { font-size: 1.9rem; }
                    .glass-card-qr { width: 96px; height: 96px; }
                }
                "#}
            </style>
        </div>
    }
}
