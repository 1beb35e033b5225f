//! Render typed blocks as embed cards
//!
//! Every card is a `div.research-item.<kind>` holding an `.item-content`
//! area and the shared `.item-meta` footer. Blocks of a class we don't know
//! get a bare two-line fallback instead of a card.
//!
//! # Reusable render functions
//!
//! - `render_block` - dispatch on the block content
//! - `render_footer` - title link + "added by" credit line
//! - `render_extension_badge` - the corner badge on link/media/file cards

use crate::block::{AttachmentContent, Block, BlockContent, BlockMeta};
use arena_embed_common::EmbedConfig;

const ARROW_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M7 17l9.2-9.2M17 17V7H7"/></svg>"#;

const DOWNLOAD_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 15v4c0 1.1.9 2 2 2h14a2 2 0 0 0 2-2v-4M17 9l-5 5-5-5M12 12.8V2.5"/></svg>"#;

const NO_COVER_ICON: &str = r##"<svg width="99" height="99" viewBox="0 0 99 99" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M49.5 97C62.0978 97 74.1796 91.9956 83.0876 83.0876C91.9956 74.1796 97 62.0978 97 49.5C97 36.9022 91.9956 24.8204 83.0876 15.9124C74.1796 7.00445 62.0978 2 49.5 2C36.9022 2 24.8204 7.00445 15.9124 15.9124C7.00445 24.8204 2 36.9022 2 49.5C2 62.0978 7.00445 74.1796 15.9124 83.0876C24.8204 91.9956 36.9022 97 49.5 97Z" stroke="#D2D2D2" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/><path d="M25.386 56.8075C29.0398 69.9614 43.6552 77.9998 56.8091 74.346C64.8475 71.4229 71.4245 64.846 73.6168 56.8075M33.4244 38.1729C32.9399 38.1729 32.4752 37.9804 32.1326 37.6378C31.79 37.2952 31.5975 36.8305 31.5975 36.346C31.5975 35.8614 31.79 35.3968 32.1326 35.0541C32.4752 34.7115 32.9399 34.519 33.4244 34.519C33.909 34.519 34.3737 34.7115 34.7163 35.0541C35.0589 35.3968 35.2514 35.8614 35.2514 36.346C35.2514 36.8305 35.0589 37.2952 34.7163 37.6378C34.3737 37.9804 33.909 38.1729 33.4244 38.1729ZM65.5783 38.1729C65.0938 38.1729 64.6291 37.9804 64.2865 37.6378C63.9438 37.2952 63.7514 36.8305 63.7514 36.346C63.7514 35.8614 63.9438 35.3968 64.2865 35.0541C64.6291 34.7115 65.0938 34.519 65.5783 34.519C66.0628 34.519 66.5275 34.7115 66.8701 35.0541C67.2127 35.3968 67.4052 35.8614 67.4052 36.346C67.4052 36.8305 67.2127 37.2952 66.8701 37.6378C66.5275 37.9804 66.0628 38.1729 65.5783 38.1729Z" stroke="#D2D2D2" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Builds canonical block and profile links on the content site.
#[derive(Debug, Clone)]
pub struct SiteLinks {
    root: String,
}

impl SiteLinks {
    pub fn new(site_root: impl Into<String>) -> Self {
        Self {
            root: site_root.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &EmbedConfig) -> Self {
        Self::new(config.site_root())
    }

    pub fn block(&self, meta: &BlockMeta) -> String {
        format!("{}/block/{}/", self.root, meta.id)
    }

    pub fn profile(&self, meta: &BlockMeta) -> String {
        format!("{}/{}/", self.root, meta.user.slug)
    }
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self::from_config(&EmbedConfig::default())
    }
}

/// Render a block as its card markup.
///
/// `content_html` on text blocks goes in as-is; every other value is escaped.
pub fn render_block(block: &Block, links: &SiteLinks) -> String {
    let meta = &block.meta;
    let mut html = String::new();

    html.push_str("<div class=\"research-item ");
    html.push_str(block.content.css_class());
    html.push_str("\">");

    match &block.content {
        BlockContent::Text { content_html } => {
            html.push_str("<div class=\"item-content\">");
            html.push_str(content_html);
            html.push_str("</div>");
        }
        BlockContent::Image { display_url } => {
            html.push_str("<div class=\"item-content\">");
            push_image(&mut html, display_url);
            html.push_str("</div>");
        }
        BlockContent::Link {
            display_url,
            source_url,
        } => {
            html.push_str("<div class=\"item-content\">");
            push_image(&mut html, display_url);
            html.push_str(&render_extension_badge(source_url, ARROW_ICON, "www"));
            html.push_str("</div>");
        }
        BlockContent::Media {
            display_url,
            source_url,
            provider_name,
        } => {
            html.push_str("<div class=\"item-content\">");
            push_image(&mut html, display_url);
            html.push_str(&render_extension_badge(
                source_url,
                ARROW_ICON,
                provider_name,
            ));
            html.push_str("</div>");
        }
        BlockContent::Attachment(attachment) => {
            html.push_str(&render_attachment(attachment));
        }
        BlockContent::Unknown { class } => {
            // No card and no footer, just what we know about it.
            html.push_str("<p>");
            html.push_str(&escape_text(class));
            html.push_str("</p><p>added by ");
            html.push_str(&escape_text(&meta.user.username));
            html.push_str("</p></div>");
            return html;
        }
    }

    html.push_str(&render_footer(meta, links));
    html.push_str("</div>");
    html
}

fn render_attachment(attachment: &AttachmentContent) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"item-content\">");

    match attachment {
        AttachmentContent::Video { url, content_type } => {
            html.push_str("<video controls><source src=\"");
            html.push_str(&escape_attr(url));
            html.push_str("\" type=\"");
            html.push_str(&escape_attr(content_type));
            html.push_str("\">Your browser does not support the video tag.</video>");
        }
        AttachmentContent::Pdf { url } => {
            html.push_str("<iframe src=\"");
            html.push_str(&escape_attr(url));
            html.push_str("\" width=\"100%\" frameborder=\"0\"></iframe>");
        }
        AttachmentContent::Thumbnail { thumb_url } => {
            push_image(&mut html, thumb_url);
        }
        AttachmentContent::NoCover { url, extension } => {
            html.push_str("<div class=\"no-cover-container\">");
            html.push_str("<p class=\"cover\">no cover</p>");
            html.push_str(NO_COVER_ICON);
            html.push_str("<p class=\"cover\">available</p>");
            html.push_str("</div>");
            html.push_str(&render_extension_badge(url, DOWNLOAD_ICON, extension));
        }
    }

    html.push_str("</div>");
    html
}

/// Corner badge linking out of the card, e.g. "www", "YouTube" or "PDF".
pub fn render_extension_badge(href: &str, icon: &str, label: &str) -> String {
    let mut html = String::new();
    html.push_str("<a href=\"");
    html.push_str(&escape_attr(href));
    html.push_str("\" target=\"_blank\" rel=\"noopener\" class=\"extension\">");
    html.push_str(icon);
    html.push(' ');
    html.push_str(&escape_text(label));
    html.push_str("</a>");
    html
}

/// Title link to the block page plus the owner credit.
pub fn render_footer(meta: &BlockMeta, links: &SiteLinks) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"item-meta\">");

    html.push_str("<a target=\"_blank\" rel=\"noopener\" href=\"");
    html.push_str(&escape_attr(&links.block(meta)));
    html.push_str("\" class=\"meta-title\">");
    html.push_str(&escape_text(meta.display_title()));
    html.push_str("</a>");

    html.push_str("<span>added by <a target=\"_blank\" rel=\"noopener\" href=\"");
    html.push_str(&escape_attr(&links.profile(meta)));
    html.push_str("\" class=\"meta-so\">");
    html.push_str(&escape_text(&meta.user.username));
    html.push_str("</a></span>");

    html.push_str("</div>");
    html
}

fn push_image(html: &mut String, src: &str) {
    html.push_str("<img src=\"");
    html.push_str(&escape_attr(src));
    html.push_str("\" loading=\"lazy\" alt=\"\">");
}

fn escape_text(s: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_text(s)
}

fn escape_attr(s: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

#[cfg(test)]
mod tests;
