//! WASM bindings for arena-embed-renderer.
//!
//! `mountEmbed` drives a live `<arena-embed>` element (see `js/arena-embed.js`
//! for the custom element definition). The sync helpers render records the
//! host page already has.

use arena_embed_renderer::{Block, BlockRecord, EMBED_CSS, SiteLinks};
use wasm_bindgen::prelude::*;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod element;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use element::mount_embed;

/// Initialize panic hook and console logging.
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
#[wasm_bindgen(start)]
pub fn init() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    console_error_panic_hook::set_once();

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}

/// Block id from embed text, or `undefined` if there is none.
#[wasm_bindgen(js_name = parseBlockId)]
pub fn parse_block_id(text: &str) -> Option<String> {
    arena_embed_renderer::parse_block_id(text).map(|id| id.to_string())
}

/// Render an already-fetched block record (the API's JSON object) as card
/// markup, without the stylesheet.
#[wasm_bindgen(js_name = renderBlock)]
pub fn render_block(record: JsValue) -> Result<String, JsError> {
    let record: BlockRecord = serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsError::new(&format!("Invalid block JSON: {}", e)))?;
    let block = Block::try_from(record).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(arena_embed_renderer::render_block(
        &block,
        &SiteLinks::default(),
    ))
}

/// The stylesheet every embed mounts next to its card.
#[wasm_bindgen(js_name = embedStylesheet)]
pub fn embed_stylesheet() -> String {
    EMBED_CSS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_binding_returns_digits() {
        assert_eq!(
            parse_block_id("https://www.are.na/block/12345"),
            Some("12345".to_string())
        );
        assert_eq!(parse_block_id("https://www.are.na/"), None);
    }

    #[test]
    fn stylesheet_binding_matches_renderer() {
        assert_eq!(embed_stylesheet(), *EMBED_CSS);
    }
}
