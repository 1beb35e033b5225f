//! Arena embed renderer
//!
//! Turns host text like `https://www.are.na/block/12345` into an isolated
//! embed card: find the block id, fetch the block once, and render it with
//! the per-class template and the fixed stylesheet.
//!
//! [`BlockEmbed::load`] runs the whole thing and always lands in a terminal
//! [`EmbedState`]; the pieces are public for callers that already hold a
//! record or only need one step.

pub mod block;
pub mod client;
pub mod css;
pub mod embed_renderer;
pub mod lifecycle;
pub mod parse;

pub use arena_embed_common::{EmbedConfig, EmbedError, FailureKind};
pub use block::{AttachmentContent, Block, BlockContent, BlockId, BlockMeta, BlockRecord, Owner};
pub use client::BlockClient;
pub use css::EMBED_CSS;
pub use embed_renderer::{SiteLinks, render_block};
pub use lifecycle::{BlockEmbed, ELEMENT_NAME, EmbedState, RenderedEmbed};
pub use parse::parse_block_id;
