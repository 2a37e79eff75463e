use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

use crate::config;

/// Copy text to the clipboard and raise a flag for [`config::COPY_BADGE_MS`].
/// A rejected write never raises the flag.
#[hook]
pub fn use_copy_to_clipboard() -> (bool, Callback<String>) {
    let copied = use_state(|| false);

    let copy = {
        let copied = copied.clone();
        Callback::from(move |text: String| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            let copied = copied.clone();
            spawn_local(async move {
                if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
                    copied.set(true);
                    TimeoutFuture::new(config::COPY_BADGE_MS).await;
                    copied.set(false);
                }
            });
        })
    };

    (*copied, copy)
}
