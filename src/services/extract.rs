// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Readable-content extraction from crawled HTML.
//!
//! The document is segmented into text blocks (one per block-level element,
//! inline markup merged into the surrounding run) and each block is scored
//! in `[0, 1]` from its tag, text length, link density and class/id hints.
//! Blocks scoring below the configured threshold are discarded; the rest
//! join with `\n` in document order.

use scraper::{ElementRef, Html, Selector};

/// Tags whose whole subtree never contains readable content.
const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "noscript", "img", "header", "footer", "iframe", "nav", "aside", "form",
    "button", "svg", "canvas", "select", "template",
];

/// Tags that continue the surrounding text run instead of opening a block.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "em", "i", "kbd", "mark",
    "q", "rp", "rt", "ruby", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u",
    "var", "wbr",
];

/// class/id fragments that mark boilerplate blocks.
const JUNK_HINTS: &[&str] = &[
    "comment",
    "sidebar",
    "footer",
    "header",
    "menu",
    "nav",
    "banner",
    "breadcrumb",
    "cookie",
    "share",
    "social",
    "advert",
    "sponsor",
    "promo",
    "related",
    "widget",
    "popup",
    "masthead",
];

/// class/id fragments that mark main-content containers.
const CONTENT_HINTS: &[&str] = &[
    "article", "content", "main", "post", "entry", "story", "text", "body",
];

/// Word count at which the length factor saturates to 1.0.
const LENGTH_SATURATION_WORDS: f64 = 20.0;

/// One scored unit of page text.
struct Block {
    tag: String,
    text: String,
    /// Non-whitespace characters contributed from inside `<a>` elements.
    link_chars: usize,
    /// Lowercased class and id attributes of the owning element.
    hints: String,
}

impl Block {
    fn open(element: ElementRef) -> Self {
        Self {
            tag: element.value().name().to_string(),
            text: String::new(),
            link_chars: 0,
            hints: element_hints(element),
        }
    }

    fn push_text(&mut self, text: &str, inside_link: bool) {
        if inside_link {
            self.link_chars += text.chars().filter(|c| !c.is_whitespace()).count();
        }
        self.text.push_str(text);
    }

    /// Move the accumulated run into `blocks` and reset for the next run
    /// under the same element.
    fn flush_into(&mut self, blocks: &mut Vec<Block>) {
        let normalized = normalize_whitespace(&self.text);
        if !normalized.is_empty() {
            blocks.push(Block {
                tag: self.tag.clone(),
                text: normalized,
                link_chars: self.link_chars,
                hints: self.hints.clone(),
            });
        }
        self.text.clear();
        self.link_chars = 0;
    }
}

/// Extract readable text from `html`, keeping blocks scoring at least
/// `threshold`. Returns an empty string when nothing qualifies.
pub fn extract_content(html: &str, threshold: f64) -> String {
    let document = Html::parse_document(html);
    let body_selector = Selector::parse("body").ok();
    let root = body_selector
        .as_ref()
        .and_then(|sel| document.select(sel).next())
        .unwrap_or_else(|| document.root_element());

    let mut blocks = Vec::new();
    collect_blocks(root, &mut blocks);

    blocks
        .iter()
        .filter(|block| score_block(block) >= threshold)
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Walk a block-level element: direct text and inline children accumulate
/// into one run, each block-level child flushes the run and recurses.
fn collect_blocks(element: ElementRef, blocks: &mut Vec<Block>) {
    let mut run = Block::open(element);
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let tag = child_el.value().name();
            if EXCLUDED_TAGS.contains(&tag) {
                continue;
            }
            if INLINE_TAGS.contains(&tag) {
                append_inline(child_el, &mut run, tag == "a");
            } else {
                run.flush_into(blocks);
                collect_blocks(child_el, blocks);
            }
        } else if let Some(text) = child.value().as_text() {
            run.push_text(text, false);
        }
    }
    run.flush_into(blocks);
}

/// Append an inline element's text to the current run. Block-level markup
/// nested inside inline elements is rare enough to treat as the same run.
fn append_inline(element: ElementRef, run: &mut Block, inside_link: bool) {
    if element.value().name() == "br" {
        run.text.push(' ');
        return;
    }
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let tag = child_el.value().name();
            if EXCLUDED_TAGS.contains(&tag) {
                continue;
            }
            append_inline(child_el, run, inside_link || tag == "a");
        } else if let Some(text) = child.value().as_text() {
            run.push_text(text, inside_link);
        }
    }
}

/// Score a block in `[0, 1]`. Headings skip the length factor so short
/// titles survive alongside the paragraphs they introduce.
fn score_block(block: &Block) -> f64 {
    let words = block.text.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }

    let heading = matches!(block.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6");
    let length_factor = if heading {
        1.0
    } else {
        (words as f64 / LENGTH_SATURATION_WORDS).min(1.0).sqrt()
    };

    let solid_chars = block.text.chars().filter(|c| !c.is_whitespace()).count();
    let link_density = if solid_chars == 0 {
        0.0
    } else {
        (block.link_chars as f64 / solid_chars as f64).min(1.0)
    };

    let score = tag_weight(&block.tag) * length_factor * (1.0 - link_density)
        * hint_factor(&block.hints);
    score.clamp(0.0, 1.0)
}

fn tag_weight(tag: &str) -> f64 {
    match tag {
        "p" | "blockquote" | "pre" | "td" | "th" | "dd" | "figcaption" | "caption" => 1.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => 0.9,
        "li" | "dt" | "summary" => 0.75,
        _ => 0.7,
    }
}

fn hint_factor(hints: &str) -> f64 {
    if hints.is_empty() {
        return 1.0;
    }
    if JUNK_HINTS.iter().any(|h| hints.contains(h)) {
        return 0.3;
    }
    if CONTENT_HINTS.iter().any(|h| hints.contains(h)) {
        return 1.15;
    }
    1.0
}

/// Lowercased `class` and `id` attribute values, space-joined.
fn element_hints(element: ElementRef) -> String {
    let mut hints = String::new();
    for attr in ["class", "id"] {
        if let Some(value) = element.value().attr(attr) {
            if !hints.is_empty() {
                hints.push(' ');
            }
            hints.push_str(&value.to_lowercase());
        }
    }
    hints
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
