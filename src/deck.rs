//! Deck files.
//!
//! A deck is a JSON description of the slides. [`Deck::build`] turns it into
//! the markup the view logic expects: panels with the `slide` class,
//! variant-annotated text units and the fixed control elements.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::dom::{
    DECK_TITLE, LOADER, NEXT_BUTTON, PREV_BUTTON, PROGRESS_BAR, PROMPT_OUTPUT, SLIDE_CLASS,
    SRC_ATTR, SWIPE_HINT, TRANSLATE_BUTTON, VALUE_ATTR,
};
use crate::document::{Document, MemoryDocument, NodeId};
use crate::error::{Error, Result};
use crate::prompt::{PromptField, PromptOptions};
use crate::types::Language;

/// Text in both languages. The Chinese variant is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variants {
    /// English text.
    pub en: String,
    /// Chinese text.
    #[serde(default)]
    pub zh: Option<String>,
}

/// Piece of a compound text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inline {
    /// Untranslated text.
    Plain(String),
    /// Translated span.
    Unit(Variants),
}

/// Text of a heading, paragraph or list item.
///
/// Either `en` (with optional `zh`) or `parts` must be given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpec {
    /// English text of a simple unit.
    #[serde(default)]
    pub en: Option<String>,
    /// Chinese text of a simple unit.
    #[serde(default)]
    pub zh: Option<String>,
    /// Decorative icon shown before the text.
    #[serde(default)]
    pub icon: Option<String>,
    /// Pieces of a compound block.
    #[serde(default)]
    pub parts: Vec<Inline>,
    /// Whole-block text used when a compound block is translated.
    #[serde(default)]
    pub full: Option<Variants>,
}

/// One block of slide content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Slide heading.
    Heading(TextSpec),
    /// Paragraph.
    Paragraph(TextSpec),
    /// Bulleted list.
    List {
        /// List items.
        items: Vec<TextSpec>,
    },
    /// Code sample, translated through the phrase table.
    Code {
        /// Literal code text.
        text: String,
    },
    /// Image with an optional caption.
    Image {
        /// Path relative to the deck file.
        src: String,
        /// Caption below the image.
        #[serde(default)]
        caption: Option<Variants>,
    },
    /// The interactive prompt builder.
    PromptBuilder,
}

/// One slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Optional element id for the panel.
    #[serde(default)]
    pub id: Option<String>,
    /// Content blocks, top to bottom.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A whole deck file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title.
    pub title: Variants,
    /// Slides in presentation order.
    pub slides: Vec<SlideSpec>,
    /// Option lists for the prompt builder.
    #[serde(default)]
    pub prompt: PromptOptions,
}

impl Deck {
    /// Read and parse a deck file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs_err::read_to_string(path)?;
        let deck: Self =
            serde_json::from_str(&raw).map_err(|e| Error::parse(e.to_string(), path.to_path_buf()))?;
        info!("Loaded deck \"{}\" with {} slides from {}", deck.title.en, deck.slides.len(), path.display());
        Ok(deck)
    }

    /// Parse a deck from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::parse(e.to_string(), None))
    }

    /// Build the document for this deck.
    pub fn build(&self) -> Result<MemoryDocument> {
        if self.slides.is_empty() {
            return Err(Error::deck("deck has no slides"));
        }
        let builders = self
            .slides
            .iter()
            .flat_map(|s| &s.blocks)
            .filter(|b| matches!(b, Block::PromptBuilder))
            .count();
        if builders > 1 {
            return Err(Error::deck(format!("deck has {builders} prompt builders, at most one is supported")));
        }

        let mut doc = MemoryDocument::new();
        let root = doc.root();

        let header = doc.append_element(root, "header");
        let title = emit_variants(&mut doc, header, "h1", &self.title);
        doc.set_id(title, DECK_TITLE);
        let translate = doc.append_element(header, "button");
        doc.set_id(translate, TRANSLATE_BUTTON);
        doc.append_text(translate, Language::Chinese.name());

        let loader = doc.append_element(root, "div");
        doc.set_id(loader, LOADER);
        doc.append_text(loader, "Loading…");

        let main = doc.append_element(root, "main");
        for (n, slide) in self.slides.iter().enumerate() {
            let panel = doc.append_element(main, "section");
            doc.add_class(panel, SLIDE_CLASS);
            doc.set_active(panel, n == 0);
            if let Some(id) = &slide.id {
                doc.set_id(panel, id);
            }
            for block in &slide.blocks {
                self.emit_block(&mut doc, panel, block)
                    .map_err(|e| Error::deck(format!("{e} on slide {}", n + 1)))?;
            }
        }

        let nav = doc.append_element(root, "nav");
        let prev = doc.append_element(nav, "button");
        doc.set_id(prev, PREV_BUTTON);
        doc.append_text(prev, "◀ Prev");
        let next = doc.append_element(nav, "button");
        doc.set_id(next, NEXT_BUTTON);
        doc.append_text(next, "Next ▶");

        let track = doc.append_element(root, "div");
        let bar = doc.append_element(track, "div");
        doc.set_id(bar, PROGRESS_BAR);

        let hint = emit_variants(
            &mut doc,
            root,
            "div",
            &Variants {
                en: "Swipe or use ← → to navigate".to_string(),
                zh: Some("滑动或使用 ← → 切换".to_string()),
            },
        );
        doc.set_id(hint, SWIPE_HINT);

        Ok(doc)
    }

    fn emit_block(&self, doc: &mut MemoryDocument, panel: NodeId, block: &Block) -> std::result::Result<(), String> {
        match block {
            Block::Heading(text) => {
                emit_text(doc, panel, "h2", text)?;
            }
            Block::Paragraph(text) => {
                emit_text(doc, panel, "p", text)?;
            }
            Block::List { items } => {
                let list = doc.append_element(panel, "ul");
                for item in items {
                    emit_text(doc, list, "li", item)?;
                }
            }
            Block::Code { text } => {
                let pre = doc.append_element(panel, "pre");
                let code = doc.append_element(pre, "code");
                doc.append_text(code, text);
            }
            Block::Image { src, caption } => {
                let figure = doc.append_element(panel, "figure");
                let img = doc.append_element(figure, "img");
                doc.set_attribute(img, SRC_ATTR, src);
                if let Some(caption) = caption {
                    emit_variants(doc, figure, "figcaption", caption);
                }
            }
            Block::PromptBuilder => self.emit_prompt_builder(doc, panel),
        }
        Ok(())
    }

    fn emit_prompt_builder(&self, doc: &mut MemoryDocument, panel: NodeId) {
        let form = doc.append_element(panel, "form");
        for field in PromptField::ALL {
            let row = doc.append_element(form, "div");
            emit_variants(
                doc,
                row,
                "label",
                &Variants {
                    en: field.label().to_string(),
                    zh: Some(field.label_zh().to_string()),
                },
            );
            let select = doc.append_element(row, "select");
            doc.set_id(select, field.select_id());
            doc.set_attribute(select, VALUE_ATTR, "");
            let blank = doc.append_element(select, "option");
            doc.set_attribute(blank, VALUE_ATTR, "");
            doc.append_text(blank, "—");
            for value in self.prompt.for_field(field) {
                let option = doc.append_element(select, "option");
                doc.set_attribute(option, VALUE_ATTR, value);
                doc.append_text(option, value);
            }
        }
        let output = doc.append_element(panel, "p");
        doc.set_id(output, PROMPT_OUTPUT);
    }
}

/// Emit a simple unit carrying `data-en`/`data-zh`.
fn emit_variants(doc: &mut MemoryDocument, parent: NodeId, tag: &str, variants: &Variants) -> NodeId {
    let node = doc.append_element(parent, tag);
    doc.set_attribute(node, Language::English.attribute(), &variants.en);
    if let Some(zh) = &variants.zh {
        doc.set_attribute(node, Language::Chinese.attribute(), zh);
    }
    doc.append_text(node, &variants.en);
    node
}

fn emit_text(
    doc: &mut MemoryDocument,
    parent: NodeId,
    tag: &str,
    spec: &TextSpec,
) -> std::result::Result<NodeId, String> {
    if let Some(en) = &spec.en {
        let node = doc.append_element(parent, tag);
        doc.set_attribute(node, Language::English.attribute(), en);
        if let Some(zh) = &spec.zh {
            doc.set_attribute(node, Language::Chinese.attribute(), zh);
        }
        if let Some(icon) = &spec.icon {
            doc.append_icon(node, icon);
        }
        doc.append_text(node, en);
        return Ok(node);
    }

    if spec.parts.is_empty() {
        return Err(format!("empty block <{tag}>"));
    }

    let node = doc.append_element(parent, tag);
    if let Some(full) = &spec.full {
        doc.set_attribute(node, Language::English.full_attribute(), &full.en);
        if let Some(zh) = &full.zh {
            doc.set_attribute(node, Language::Chinese.full_attribute(), zh);
        }
    }
    if let Some(icon) = &spec.icon {
        doc.append_icon(node, icon);
    }
    for part in &spec.parts {
        match part {
            Inline::Plain(text) => doc.append_text(node, text),
            Inline::Unit(variants) => {
                emit_variants(doc, node, "span", variants);
            }
        }
    }
    Ok(node)
}
