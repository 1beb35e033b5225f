//! One-shot fetch of a block record from the content-metadata endpoint.

use crate::block::{Block, BlockId};
use arena_embed_common::{EmbedConfig, EmbedError};

/// Thin HTTP client for `GET <api_base>/blocks/<id>`.
///
/// No auth, no extra headers, no retries: one request per call.
#[derive(Debug, Clone)]
pub struct BlockClient {
    http: reqwest::Client,
    api_root: String,
}

impl BlockClient {
    pub fn new(config: &EmbedConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &EmbedConfig) -> Self {
        Self {
            http,
            api_root: config.api_root().to_string(),
        }
    }

    pub fn endpoint(&self, id: &BlockId) -> String {
        format!("{}/blocks/{}", self.api_root, id)
    }

    /// Fetch and decode one block.
    ///
    /// Non-success statuses become [`EmbedError::RemoteStatus`]; connection
    /// problems and undecodable bodies become transport/decode errors.
    pub async fn fetch_block(&self, id: &BlockId) -> Result<Block, EmbedError> {
        let url = self.endpoint(id);
        tracing::debug!(block_id = %id, %url, "fetching block");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EmbedError::RemoteStatus {
                block_id: id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Block::from_json(&body)
    }
}

impl Default for BlockClient {
    fn default() -> Self {
        Self::new(&EmbedConfig::default())
    }
}
