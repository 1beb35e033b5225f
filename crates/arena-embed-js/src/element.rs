//! Mounting an embed into a live `<arena-embed>` element.

use arena_embed_renderer::BlockEmbed;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ShadowRootInit, ShadowRootMode};

/// Attach an open shadow root to `host` and fill it from the host's text.
///
/// Runs once per element: a host that already has a shadow root is left
/// alone. The fetch runs on the page's event loop; if the host has been
/// removed from the document by the time it resolves, nothing is mounted.
#[wasm_bindgen(js_name = mountEmbed)]
pub fn mount_embed(host: HtmlElement) -> Result<(), JsValue> {
    if host.shadow_root().is_some() {
        tracing::debug!("embed already mounted");
        return Ok(());
    }

    let shadow = host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?;
    let text = host.text_content().unwrap_or_default();
    let embed = BlockEmbed::default();

    wasm_bindgen_futures::spawn_local(async move {
        let state = embed.load(&text).await;
        if !host.is_connected() {
            tracing::debug!("embed host detached before the response arrived, dropping it");
            return;
        }
        shadow.set_inner_html(&state.boundary_html());
    });

    Ok(())
}
