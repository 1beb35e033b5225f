//! The embed stylesheet.
//!
//! It is scoped by the rendering boundary, so bare element selectors here
//! never reach the host page and host rules never reach the card.

use std::sync::LazyLock;

/// Colours the stylesheet is generated from.
#[derive(Debug, Clone, Copy)]
pub struct EmbedPalette {
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub surface: &'static str,
    pub rule: &'static str,
    pub highlight: &'static str,
}

pub const DEFAULT_PALETTE: EmbedPalette = EmbedPalette {
    text: "#414141",
    muted: "#767676",
    border: "#ccc",
    surface: "#eee",
    rule: "#767676",
    highlight: "#e3fcdc",
};

/// Fixed stylesheet mounted next to every rendered card.
pub static EMBED_CSS: LazyLock<String> = LazyLock::new(|| generate_embed_css(&DEFAULT_PALETTE));

pub fn generate_embed_css(palette: &EmbedPalette) -> String {
    let EmbedPalette {
        text,
        muted,
        border,
        surface,
        rule,
        highlight,
    } = palette;

    format!(
        r#"
img,
picture,
video,
canvas,
svg {{
    display: block;
    max-width: 100%;
    width: 100%;
    object-fit: cover;
    -o-object-fit: cover;
    object-position: center;
}}

a {{
    color: inherit;
    text-decoration: none;
}}

a:hover {{
    color: {border};
}}

mark {{
    background-color: {highlight};
}}

hr {{
    height: 1px;
    background-color: {rule};
    border: none;
}}

p,
h1,
h2,
h3,
h4,
h5,
h6 {{
    font-size: 1rem;
    font-weight: 400;
    overflow-wrap: break-word;
}}

ul {{
    list-style-type: none;
    margin-left: 1rem;
}}

ul li:before,
ol ul li:before {{
    position: absolute;
    margin-left: -1rem;
    content: "\2022";
    margin-right: 0.5rem;
}}

ol {{
    list-style-type: none;
    margin-left: 1rem;
    counter-reset: list;
}}

ol li:before {{
    position: absolute;
    margin-left: -1rem;
    margin-right: 0.5rem;
    content: counter(list) ".";
    counter-increment: list;
}}

code {{
    font-family: monospace;
    background-color: {surface};
}}

.research-item {{
    width: 100%;
    max-width: 600px;
    border: 1px solid {border};
    border-radius: 0.25rem;
    margin-bottom: 1rem;
    color: {text};
}}

.research-item:last-of-type {{
    margin-bottom: 2rem;
}}

.item-content,
.item-content img {{
    border-top-right-radius: 0.25rem;
    border-top-left-radius: 0.25rem;
}}

.attachment .item-content,
.media .item-content {{
    display: flex;
    aspect-ratio: 3/2;
    justify-content: center;
    background-color: {surface};
    position: relative;
}}

.link .item-content {{
    display: flex;
    aspect-ratio: 1/1;
    justify-content: center;
    background-color: {surface};
    position: relative;
}}

.item-content:hover a.extension {{
    display: inline-flex;
}}

.extension {{
    background-color: {border};
    color: {muted};
    padding: 0.25rem;
    border-radius: 0.25rem;
    line-height: 100%;
    position: absolute;
    text-transform: uppercase;
    display: flex;
    gap: 0.25rem;
    align-items: center;
    top: 1rem;
    right: 1rem;
    z-index: 40;
    font-family: monospace;
    font-size: 0.8rem;
}}

.extension svg {{
    width: 14px;
}}

.extension:hover {{
    color: {text};
}}

.no-cover-container {{
    color: {muted};
    align-items: center;
    display: flex;
    justify-content: center;
    flex-direction: column;
    gap: 1rem;
}}

.no-cover-container svg {{
    width: 99px;
}}

.item-content .no-cover-container p {{
    margin-bottom: 0;
}}

.text .item-content {{
    padding: 1rem;
}}

.item-content h1,
.item-content h2,
.item-content h3,
.item-content h4,
.item-content a,
.item-content ul,
.item-content ol,
.item-content hr,
.item-content p {{
    margin-bottom: 1rem;
    margin-top: 0;
}}

.item-content :last-child {{
    margin-bottom: 0;
}}

.item-meta {{
    display: flex;
    justify-content: space-between;
    gap: 1rem;
    padding: 0.5rem;
    color: {muted};
    border-top: 1px solid {border};
}}

.item-meta .meta-title {{
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}}

.item-meta span {{
    text-align: right;
    white-space: nowrap;
}}

iframe {{
    border-radius: 0.25rem;
}}
"#
    )
}
