use yew::prelude::*;

use crate::clipboard::use_copy_to_clipboard;
use crate::config;
use crate::qr::{build_qr_url, mailto, CARD_QR_MARGIN, CARD_QR_SIZE};
use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct InfoOverlayProps {
    pub theme: ThemeMode,
}

/// Floating "i" button advertising the studio behind the card.
#[function_component(InfoOverlay)]
pub fn info_overlay(props: &InfoOverlayProps) -> Html {
    let is_open = use_state(|| false);
    let (copied, copy) = use_copy_to_clipboard();
    let palette = props.theme.palette();

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };
    let close_x = close.clone();
    let close_return = close.clone();
    let on_copy = Callback::from(move |_: MouseEvent| copy.emit(config::STUDIO_EMAIL.to_string()));

    let qr_url = build_qr_url(&mailto(config::STUDIO_EMAIL), CARD_QR_SIZE, palette.qr, CARD_QR_MARGIN);

    html! {
        <>
            <button class="info-fab" onclick={open} title="Collaborate with the Architect">
                <span class="serif">{"i"}</span>
            </button>
            if *is_open {
                <div class="info-backdrop" onclick={close}>
                    <div class="info-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button class="info-x" onclick={close_x} aria-label="Close">{"✕"}</button>
                        <span class="info-eyebrow">{"Digital Architecture"}</span>
                        <h3 class="serif">{"Elevate your"}<br />{"Digital Identity."}</h3>
                        <div class="info-rule"></div>
                        <p class="info-pitch">
                            {"Captivated by this experience? Whether you require a high-prestige glass card or a bespoke digital gallery, we architect premium landscapes for modern visionaries."}
                        </p>
                        <div class="info-qr">
                            <img src={qr_url} alt="Contact QR" />
                        </div>
                        <p class="info-label">{"Direct Inquiry Channel"}</p>
                        <button class="info-email" onclick={on_copy}>
                            {config::STUDIO_EMAIL}
                            if copied {
                                <span class="copied-badge">{"Copied"}</span>
                            }
                        </button>
                        <button class="info-return" onclick={close_return}>{"Return to the Gallery"}</button>
                    </div>
                </div>
            }
            <style>
                {r#"
                .info-fab {
                    position: fixed;
                    bottom: 2.5rem;
                    left: 2.5rem;
                    z-index: 100;
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    background: var(--accent);
                    color: #fff;
                    font-size: 1.75rem;
                    font-weight: 900;
                    font-style: italic;
                    cursor: pointer;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s;
                }
                .info-fab:hover { transform: scale(1.15) rotate(5deg); }
                .info-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 110;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(12px);
                }
                .info-modal {
                    position: relative;
                    width: 100%;
                    max-width: 32rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 4rem 3rem;
                    border-radius: 40px;
                    background: var(--bg);
                    color: var(--text);
                    border: 1px solid var(--border);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 2rem;
                }
                .info-x {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    background: none;
                    border: none;
                    color: inherit;
                    opacity: 0.4;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .info-eyebrow { font-size: 10px; font-weight: 900; letter-spacing: 0.8em; text-transform: uppercase; color: var(--accent); }
                .info-modal h3 { font-size: 2.75rem; font-style: italic; font-weight: 900; line-height: 1.1; letter-spacing: -0.04em; margin: 0; }
                .info-rule { width: 4rem; height: 1px; background: var(--accent); opacity: 0.2; }
                .info-pitch { font-size: 1.1rem; font-weight: 700; opacity: 0.7; max-width: 24rem; }
                .info-qr { padding: 1.5rem; background: #fff; border-radius: 48px; box-shadow: 0 16px 32px rgba(0, 0, 0, 0.2); }
                .info-qr img { width: 160px; height: 160px; object-fit: contain; }
                .info-label { font-size: 10px; font-weight: 900; letter-spacing: 0.4em; text-transform: uppercase; opacity: 0.4; margin: 0; }
                .info-email {
                    position: relative;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.4rem;
                    font-weight: 900;
                    word-break: break-all;
                    cursor: pointer;
                }
                .info-email:hover { color: var(--highlight); }
                .info-return {
                    width: 100%;
                    padding: 1.4rem;
                    border: none;
                    border-radius: 999px;
                    background: var(--text);
                    color: var(--bg);
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.5em;
                    text-transform: uppercase;
                    cursor: pointer;
                }
                .info-return:hover { background: var(--highlight); }
                @media (max-width: 640px) {
                    .info-fab { bottom: 1.5rem; left: 1.5rem; width: 56px; height: 56px; }
                    .info-modal { padding: 3rem 1.75rem; }
                    .info-modal h3 { font-size: 2rem; }
                }
                "#}
            </style>
        </>
    }
}
