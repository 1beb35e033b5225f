//! Block records as the content-graph service sends them, and the typed
//! [`Block`] the renderer dispatches on.

use arena_embed_common::EmbedError;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Numeric block identifier, kept as its decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    /// Accepts a non-empty run of ASCII digits.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(id))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BlockId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The API sends numbers; strings show up in hand-written fixtures.
        // JS callers may hand us every number as a float.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Float(f64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(BlockId(n.to_string())),
            RawId::Float(f) if f >= 0.0 && f.fract() == 0.0 && f < 9.0e15 => {
                Ok(BlockId((f as u64).to_string()))
            }
            RawId::Float(f) => Err(serde::de::Error::custom(format!(
                "block id must be a whole number, got {f}"
            ))),
            RawId::Text(s) => BlockId::new(s.clone()).ok_or_else(|| {
                serde::de::Error::custom(format!("block id must be numeric, got {s:?}"))
            }),
        }
    }
}

/// Wire shape of `GET /v2/blocks/<id>`. Only the fields the embed reads.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockRecord {
    pub id: BlockId,
    pub class: String,
    #[serde(default)]
    pub title: Option<String>,
    pub user: UserRecord,
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRecord>,
    #[serde(default)]
    pub source: Option<SourceRecord>,
    #[serde(default)]
    pub attachment: Option<AttachmentRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub slug: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub display: Option<ImageVersion>,
    #[serde(default)]
    pub thumb: Option<ImageVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageVersion {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub provider: Option<ProviderRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderRecord {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
}

/// Block owner, used for the credit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub slug: String,
    pub username: String,
}

/// Fields every template shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMeta {
    pub id: BlockId,
    /// `None` when the record had no title or an empty one.
    pub title: Option<String>,
    pub user: Owner,
}

impl BlockMeta {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("No title")
    }
}

/// A block with exactly the fields its template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub meta: BlockMeta,
    pub content: BlockContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// Trusted HTML from the service, inserted verbatim.
    Text { content_html: String },
    Image { display_url: String },
    Link { display_url: String, source_url: String },
    Media {
        display_url: String,
        source_url: String,
        provider_name: String,
    },
    Attachment(AttachmentContent),
    /// A class this renderer has no card for (e.g. "Channel"). The service
    /// adds classes over time, so this stays an open branch.
    Unknown { class: String },
}

/// Attachment layouts, in the order they are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentContent {
    /// `content_type` mentions mp4
    Video { url: String, content_type: String },
    /// `content_type` mentions pdf
    Pdf { url: String },
    /// Any other file that has a thumbnail
    Thumbnail { thumb_url: String },
    /// Nothing to preview; a placeholder plus a download badge
    NoCover { url: String, extension: String },
}

impl BlockContent {
    /// CSS class on the outer `.research-item`.
    pub fn css_class(&self) -> &'static str {
        match self {
            BlockContent::Text { .. } | BlockContent::Unknown { .. } => "text",
            BlockContent::Image { .. } => "image",
            BlockContent::Link { .. } => "link",
            BlockContent::Media { .. } => "media",
            BlockContent::Attachment(_) => "attachment",
        }
    }
}

impl TryFrom<BlockRecord> for Block {
    type Error = EmbedError;

    fn try_from(record: BlockRecord) -> Result<Self, Self::Error> {
        let BlockRecord {
            id,
            class,
            title,
            user,
            content_html,
            image,
            source,
            attachment,
        } = record;

        let missing = |field: &'static str| EmbedError::MalformedRecord {
            class: class.clone(),
            field,
        };

        let display_url = || {
            image
                .as_ref()
                .and_then(|i| i.display.as_ref())
                .map(|d| d.url.clone())
                .ok_or_else(|| missing("image.display.url"))
        };
        let source_url = || {
            source
                .as_ref()
                .and_then(|s| s.url.clone())
                .ok_or_else(|| missing("source.url"))
        };

        let content = match class.as_str() {
            "Text" => BlockContent::Text {
                content_html: content_html.unwrap_or_default(),
            },
            "Image" => BlockContent::Image {
                display_url: display_url()?,
            },
            "Link" => BlockContent::Link {
                display_url: display_url()?,
                source_url: source_url()?,
            },
            "Media" => BlockContent::Media {
                display_url: display_url()?,
                source_url: source_url()?,
                provider_name: source
                    .as_ref()
                    .and_then(|s| s.provider.as_ref())
                    .map(|p| p.name.clone())
                    .ok_or_else(|| missing("source.provider.name"))?,
            },
            "Attachment" => {
                let attachment = attachment.ok_or_else(|| missing("attachment"))?;
                let url = attachment.url.ok_or_else(|| missing("attachment.url"))?;
                let content_type = attachment.content_type.unwrap_or_default();
                let thumb_url = image.as_ref().and_then(|i| i.thumb.as_ref());

                let content = if content_type.contains("mp4") {
                    AttachmentContent::Video { url, content_type }
                } else if content_type.contains("pdf") {
                    AttachmentContent::Pdf { url }
                } else if let Some(thumb) = thumb_url {
                    AttachmentContent::Thumbnail {
                        thumb_url: thumb.url.clone(),
                    }
                } else {
                    AttachmentContent::NoCover {
                        url,
                        extension: attachment.extension.unwrap_or_default(),
                    }
                };
                BlockContent::Attachment(content)
            }
            _ => BlockContent::Unknown {
                class: class.clone(),
            },
        };

        Ok(Block {
            meta: BlockMeta {
                id,
                title: title.filter(|t| !t.is_empty()),
                user: Owner {
                    slug: user.slug,
                    username: user.username,
                },
            },
            content,
        })
    }
}

impl Block {
    /// Decode a response body straight into a typed block.
    pub fn from_json(body: &[u8]) -> Result<Self, EmbedError> {
        let record: BlockRecord = serde_json::from_slice(body)?;
        Block::try_from(record)
    }
}
