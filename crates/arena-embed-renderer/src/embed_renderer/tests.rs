//! Tests for the per-class embed templates

use super::*;
use crate::block::Block;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn block(value: Value) -> Block {
    Block::from_json(value.to_string().as_bytes()).unwrap()
}

fn render(value: Value) -> String {
    render_block(&block(value), &SiteLinks::default())
}

fn record(class: &str) -> Value {
    json!({
        "id": 12345,
        "class": class,
        "title": "Field notes",
        "user": { "slug": "ada-l", "username": "Ada L" }
    })
}

// =============================================================================
// Per-class layouts
// =============================================================================

#[test]
fn test_text_block() {
    let mut r = record("Text");
    r["content_html"] = json!("<p>Hello <em>there</em></p>");
    let html = render(r);

    assert!(html.starts_with("<div class=\"research-item text\">"));
    assert!(html.contains("<div class=\"item-content\"><p>Hello <em>there</em></p></div>"));
    assert!(html.contains("href=\"https://www.are.na/block/12345/\""));
    assert!(html.contains("href=\"https://www.are.na/ada-l/\""));
    assert!(html.contains(">Field notes</a>"));
    assert!(html.contains(">Ada L</a>"));
}

#[test]
fn test_image_block() {
    let mut r = record("Image");
    r["image"] = json!({ "display": { "url": "https://images.are.na/d.jpg" } });
    let html = render(r);

    assert!(html.starts_with("<div class=\"research-item image\">"));
    assert!(html.contains("<img src=\"https://images.are.na/d.jpg\" loading=\"lazy\""));
    assert!(!html.contains("class=\"extension\""));
}

#[test]
fn test_link_block_has_www_badge() {
    let mut r = record("Link");
    r["image"] = json!({ "display": { "url": "https://images.are.na/d.jpg" } });
    r["source"] = json!({ "url": "https://example.com/post" });
    let html = render(r);

    assert!(html.starts_with("<div class=\"research-item link\">"));
    assert!(html.contains(
        "<a href=\"https://example.com/post\" target=\"_blank\" rel=\"noopener\" class=\"extension\">"
    ));
    assert!(html.contains("</svg> www</a>"));
}

#[test]
fn test_media_block_shows_provider() {
    let mut r = record("Media");
    r["image"] = json!({ "display": { "url": "https://images.are.na/d.jpg" } });
    r["source"] = json!({
        "url": "https://www.youtube.com/watch?v=abc",
        "provider": { "name": "YouTube" }
    });
    let html = render(r);

    assert!(html.starts_with("<div class=\"research-item media\">"));
    assert!(html.contains("</svg> YouTube</a>"));
    assert!(html.contains("href=\"https://www.youtube.com/watch?v=abc\""));
}

#[test]
fn test_attachment_mp4_is_video() {
    let mut r = record("Attachment");
    r["attachment"] = json!({
        "url": "https://attachments.are.na/clip.mp4",
        "content_type": "video/mp4",
        "extension": "mp4"
    });
    let html = render(r);

    assert!(html.starts_with("<div class=\"research-item attachment\">"));
    assert!(html.contains(
        "<video controls><source src=\"https://attachments.are.na/clip.mp4\" type=\"video/mp4\">"
    ));
}

#[test]
fn test_attachment_pdf_is_iframe() {
    let mut r = record("Attachment");
    r["attachment"] = json!({
        "url": "https://attachments.are.na/paper.pdf",
        "content_type": "application/pdf",
        "extension": "pdf"
    });
    let html = render(r);

    assert!(html.contains(
        "<iframe src=\"https://attachments.are.na/paper.pdf\" width=\"100%\" frameborder=\"0\"></iframe>"
    ));
    assert!(!html.contains("<video"));
}

#[test]
fn test_attachment_with_thumbnail() {
    let mut r = record("Attachment");
    r["attachment"] = json!({
        "url": "https://attachments.are.na/deck.key",
        "content_type": "application/x-iwork-keynote",
        "extension": "key"
    });
    r["image"] = json!({
        "display": { "url": "https://images.are.na/d.jpg" },
        "thumb": { "url": "https://images.are.na/t.jpg" }
    });
    let html = render(r);

    assert!(html.contains("<img src=\"https://images.are.na/t.jpg\" loading=\"lazy\""));
    assert!(!html.contains("d.jpg"));
}

#[test]
fn test_attachment_without_cover() {
    let mut r = record("Attachment");
    r["attachment"] = json!({
        "url": "https://attachments.are.na/archive.zip",
        "content_type": "application/zip",
        "extension": "zip"
    });
    let html = render(r);

    assert!(html.contains("<p class=\"cover\">no cover</p>"));
    assert!(html.contains("<p class=\"cover\">available</p>"));
    assert!(html.contains("href=\"https://attachments.are.na/archive.zip\""));
    assert!(html.contains("</svg> zip</a>"));
    assert!(html.contains("<div class=\"item-meta\">"));
}

#[test]
fn test_unknown_class_fallback() {
    let html = render(record("Channel"));
    insta::assert_snapshot!(html);
}

#[test]
fn test_unknown_class_has_no_card_parts() {
    let html = render(record("Channel"));
    assert!(!html.contains("item-content"));
    assert!(!html.contains("item-meta"));
    assert!(!html.contains("<a "));
}

// =============================================================================
// Footer and escaping
// =============================================================================

#[test]
fn test_missing_title_falls_back() {
    let mut r = record("Text");
    r["title"] = Value::Null;
    let html = render(r);
    assert!(html.contains("class=\"meta-title\">No title</a>"));
}

#[test]
fn test_every_link_opens_new_context() {
    let mut r = record("Link");
    r["image"] = json!({ "display": { "url": "https://images.are.na/d.jpg" } });
    r["source"] = json!({ "url": "https://example.com/post" });
    let html = render(r);

    let anchors = html.matches("<a ").count();
    assert_eq!(anchors, 3);
    assert_eq!(html.matches("target=\"_blank\"").count(), anchors);
}

#[test]
fn test_values_are_escaped_but_content_html_is_not() {
    let mut r = record("Text");
    r["title"] = json!("<script>alert(1)</script>");
    r["user"] = json!({ "slug": "x\"onmouseover=\"y", "username": "a & b" });
    r["content_html"] = json!("<blockquote>kept</blockquote>");
    let html = render(r);

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("x\"onmouseover"));
    assert!(html.contains(">a &amp; b</a>"));
    assert!(html.contains("<blockquote>kept</blockquote>"));
}

#[test]
fn test_custom_site_root() {
    let links = SiteLinks::new("http://localhost:3000/");
    let html = render_block(&block(record("Text")), &links);
    assert!(html.contains("href=\"http://localhost:3000/block/12345/\""));
    assert!(html.contains("href=\"http://localhost:3000/ada-l/\""));
}
