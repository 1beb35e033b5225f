//! Error types for arena-embed

use miette::Diagnostic;

/// Main error type for fetching and rendering a block embed
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum EmbedError {
    /// No `/block/<digits>` segment in the host text
    #[error("no block id found in {input:?}")]
    #[diagnostic(
        code(arena_embed::invalid_url),
        help("embed text must contain a block link like https://www.are.na/block/12345")
    )]
    InvalidUrl { input: String },

    /// The content-metadata endpoint answered with a non-success status
    #[error("block {block_id} request failed with status {status}")]
    #[diagnostic(code(arena_embed::remote_status))]
    RemoteStatus { block_id: String, status: u16 },

    /// Connection, DNS, TLS or body read failure
    #[error("transport error fetching block: {0}")]
    #[diagnostic(code(arena_embed::transport))]
    Transport(#[from] reqwest::Error),

    /// Response body was not a block record
    #[error("could not decode block record: {0}")]
    #[diagnostic(code(arena_embed::decode))]
    Decode(#[from] serde_json::Error),

    /// Record decoded but lacks a field its class template needs
    #[error("{class} block is missing `{field}`")]
    #[diagnostic(code(arena_embed::malformed_record))]
    MalformedRecord { class: String, field: &'static str },
}

impl EmbedError {
    /// Which of the three user-visible failure messages this error surfaces as.
    pub fn kind(&self) -> FailureKind {
        match self {
            EmbedError::InvalidUrl { .. } => FailureKind::InvalidInput,
            EmbedError::RemoteStatus { .. } => FailureKind::RemoteFailure,
            EmbedError::Transport(_)
            | EmbedError::Decode(_)
            | EmbedError::MalformedRecord { .. } => FailureKind::TransportFailure,
        }
    }
}

/// User-facing failure classes. Each maps to one fixed inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidInput,
    RemoteFailure,
    TransportFailure,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "Invalid URL.",
            FailureKind::RemoteFailure => "Failed to fetch data.",
            FailureKind::TransportFailure => "Error fetching data.",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors loading an [`EmbedConfig`](crate::config::EmbedConfig)
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("error reading config file {path}")]
    #[diagnostic(code(arena_embed::config::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing config file")]
    #[diagnostic(code(arena_embed::config::toml))]
    Toml(#[from] toml::de::Error),

    #[error("{key} must be an http or https url, got {url}")]
    #[diagnostic(code(arena_embed::config::scheme))]
    UnsupportedScheme { key: &'static str, url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_fixed_messages() {
        let invalid = EmbedError::InvalidUrl {
            input: "hello".into(),
        };
        assert_eq!(invalid.kind(), FailureKind::InvalidInput);
        assert_eq!(invalid.kind().message(), "Invalid URL.");

        let status = EmbedError::RemoteStatus {
            block_id: "1".into(),
            status: 404,
        };
        assert_eq!(status.kind().to_string(), "Failed to fetch data.");

        let malformed = EmbedError::MalformedRecord {
            class: "Image".into(),
            field: "image.display.url",
        };
        assert_eq!(malformed.kind(), FailureKind::TransportFailure);
        assert_eq!(malformed.to_string(), "Image block is missing `image.display.url`");
    }

    #[test]
    fn decode_errors_are_transport_failures() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = EmbedError::from(err);
        assert_eq!(err.kind(), FailureKind::TransportFailure);
        assert_eq!(err.kind().message(), "Error fetching data.");
    }
}
