//! Finding the block id in embed text.

use crate::block::BlockId;
use std::sync::LazyLock;

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
use regex::Regex;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
use regex_lite::Regex;

pub static BLOCK_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/block/(?P<id>[0-9]+)").unwrap());

/// Extract the digits after the first `/block/` in `text`.
///
/// Anything around the match is ignored, so full URLs, bare paths and
/// surrounding prose all work. Returns `None` when there is no match.
pub fn parse_block_id(text: &str) -> Option<BlockId> {
    BLOCK_PATH_RE
        .captures(text.trim())
        .and_then(|caps| caps.name("id"))
        .and_then(|id| BlockId::new(id.as_str()))
}
