use yew::prelude::*;

use crate::content::contact::JANE_WEST;
use crate::vcard::export_vcard;

#[function_component(VcfButton)]
pub fn vcf_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| export_vcard(&JANE_WEST));

    html! {
        <>
            <button class="vcf-button" {onclick}>{"Save Contact"}</button>
            <style>
                {r#"
                .vcf-button {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 999px;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    background: var(--text);
                    color: var(--bg);
                    cursor: pointer;
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.15);
                    transition: all 0.7s;
                }
                .vcf-button:hover { background: var(--highlight); color: var(--text); }
                .vcf-button:active { transform: scale(0.95); }
                "#}
            </style>
        </>
    }
}
