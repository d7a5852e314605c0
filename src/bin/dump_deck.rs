//! Debug tool that prints every slide of a deck in both languages.
//!
//! Usage:
//!   `cargo run --bin dump_deck -- <deck.json>`
//!
//! Drives the same controller as the viewer, without a terminal, so it also
//! shows exactly what the translator produces for each slide.

use std::env;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use slideview::controller::{ViewController, ViewSettings};
use slideview::deck::Deck;
use slideview::document::{Document, MemoryDocument, NodeId};
use slideview::types::Language;

fn main() -> Result<()> {
    let Some(path) = env::args().nth(1) else {
        bail!("Usage: dump_deck <deck.json>");
    };
    let path = Path::new(&path);

    let deck = Deck::load(path).with_context(|| format!("loading {}", path.display()))?;
    let mut doc = deck.build().context("building deck")?;
    let settings = ViewSettings {
        start_language: Language::English,
        loader_delay: Duration::ZERO,
        hint_delay: Duration::ZERO,
    };
    let mut view = ViewController::mount(&mut doc, &settings, Instant::now());

    for language in [Language::English, Language::Chinese] {
        if view.language() != language {
            view.on_toggle_language(&mut doc);
        }
        println!("=== {language} ===");
        for _ in 0..view.slide_count() {
            print_slide(&doc, &view);
            view.on_advance(&mut doc);
        }
    }
    Ok(())
}

fn print_slide(doc: &MemoryDocument, view: &ViewController<NodeId>) {
    println!("--- slide {}/{} ---", view.slide_index() + 1, view.slide_count());
    let Some(slide) = view.current_slide() else {
        return;
    };
    for line in doc.text(slide).lines().map(str::trim).filter(|l| !l.is_empty()) {
        println!("{line}");
    }
}
