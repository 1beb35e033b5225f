//! The single-shot embed lifecycle: parse, fetch, then render or fail.
//!
//! ```text
//! Loading ──┬──> Rendered(stylesheet + fragment)
//!           └──> Failed(InvalidInput | RemoteFailure | TransportFailure)
//! ```

use crate::block::Block;
use crate::client::BlockClient;
use crate::css::EMBED_CSS;
use crate::embed_renderer::{SiteLinks, render_block};
use crate::parse::parse_block_id;
use arena_embed_common::{EmbedConfig, EmbedError, FailureKind};

/// Custom element name the embed is mounted under.
pub const ELEMENT_NAME: &str = "arena-embed";

/// Markup ready to mount inside a rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmbed {
    pub stylesheet: &'static str,
    pub fragment: String,
}

impl RenderedEmbed {
    pub fn new(block: &Block, links: &SiteLinks) -> Self {
        Self {
            stylesheet: EMBED_CSS.as_str(),
            fragment: render_block(block, links),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedState {
    Loading,
    Rendered(RenderedEmbed),
    Failed(FailureKind),
}

impl EmbedState {
    /// Map a fetch outcome onto a terminal state, logging transport failures.
    pub fn from_result(result: Result<Block, EmbedError>, links: &SiteLinks) -> Self {
        match result {
            Ok(block) => EmbedState::Rendered(RenderedEmbed::new(&block, links)),
            Err(e) => {
                let kind = e.kind();
                match kind {
                    FailureKind::TransportFailure => {
                        tracing::error!(error = %e, "Error fetching data");
                    }
                    _ => tracing::debug!(error = %e, "embed failed"),
                }
                EmbedState::Failed(kind)
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, EmbedState::Loading)
    }

    /// Contents of the rendering boundary for this state.
    ///
    /// A rendered embed is the stylesheet followed by its fragment; a failure
    /// is a single paragraph with the fixed message; loading is empty.
    pub fn boundary_html(&self) -> String {
        match self {
            EmbedState::Loading => String::new(),
            EmbedState::Rendered(embed) => {
                let mut html = String::new();
                html.push_str("<style>");
                html.push_str(embed.stylesheet);
                html.push_str("</style>");
                html.push_str(&embed.fragment);
                html
            }
            EmbedState::Failed(kind) => format!("<p>{}</p>", kind.message()),
        }
    }

    /// The whole host element for server-side output, with the boundary as a
    /// declarative shadow root and the original text as light-DOM content.
    pub fn host_html(&self, source_text: &str) -> String {
        let mut html = String::new();
        html.push('<');
        html.push_str(ELEMENT_NAME);
        html.push_str("><template shadowrootmode=\"open\">");
        html.push_str(&self.boundary_html());
        html.push_str("</template>");
        html.push_str(&html_escape::encode_text(source_text.trim()));
        html.push_str("</");
        html.push_str(ELEMENT_NAME);
        html.push('>');
        html
    }
}

/// Runs the lifecycle for one piece of host text.
#[derive(Debug, Clone, Default)]
pub struct BlockEmbed {
    client: BlockClient,
    links: SiteLinks,
}

impl BlockEmbed {
    pub fn new(client: BlockClient, links: SiteLinks) -> Self {
        Self { client, links }
    }

    pub fn from_config(config: &EmbedConfig) -> Self {
        Self::new(BlockClient::new(config), SiteLinks::from_config(config))
    }

    /// Parse, fetch and render. Never errors: failures come back as
    /// [`EmbedState::Failed`]. Invalid text makes no network request.
    pub async fn load(&self, text: &str) -> EmbedState {
        let Some(id) = parse_block_id(text) else {
            tracing::debug!(text, "no block id in embed text");
            return EmbedState::Failed(FailureKind::InvalidInput);
        };
        EmbedState::from_result(self.client.fetch_block(&id).await, &self.links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_boundary_is_one_message() {
        assert_eq!(
            EmbedState::Failed(FailureKind::RemoteFailure).boundary_html(),
            "<p>Failed to fetch data.</p>"
        );
        assert_eq!(
            EmbedState::Failed(FailureKind::InvalidInput).boundary_html(),
            "<p>Invalid URL.</p>"
        );
        assert_eq!(
            EmbedState::Failed(FailureKind::TransportFailure).boundary_html(),
            "<p>Error fetching data.</p>"
        );
    }

    #[test]
    fn loading_is_empty_and_not_terminal() {
        assert_eq!(EmbedState::Loading.boundary_html(), "");
        assert!(!EmbedState::Loading.is_terminal());
        assert!(EmbedState::Failed(FailureKind::InvalidInput).is_terminal());
    }

    #[test]
    fn host_html_wraps_declarative_shadow_root() {
        let html = EmbedState::Failed(FailureKind::InvalidInput).host_html("  not a link  ");
        insta::assert_snapshot!(html);
    }

    #[test]
    fn rendered_boundary_puts_style_first() {
        let block = Block::from_json(
            br#"{"id": 1, "class": "Text", "content_html": "<p>hi</p>", "user": {"slug": "a", "username": "A"}}"#,
        )
        .unwrap();
        let state = EmbedState::from_result(Ok(block), &SiteLinks::default());
        let html = state.boundary_html();
        assert!(html.starts_with("<style>"));
        let style_end = html.find("</style>").unwrap();
        assert!(html[style_end..].starts_with("</style><div class=\"research-item text\">"));
    }

    #[tokio::test]
    async fn invalid_text_fails_without_fetching() {
        // Unroutable api base: a request would surface as a transport failure.
        let config =
            EmbedConfig::from_toml_str(r#"api_base = "http://127.0.0.1:1/v2""#)
                .unwrap();
        let embed = BlockEmbed::from_config(&config);
        let state = embed.load("https://www.are.na/ada-l/reading-list").await;
        assert_eq!(state, EmbedState::Failed(FailureKind::InvalidInput));
    }
}
