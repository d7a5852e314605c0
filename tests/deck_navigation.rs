//! End-to-end tests: deck file to document to controller.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use slideview::constants::dom::{LOADER, NEXT_BUTTON, PREV_BUTTON, PROGRESS_BAR, PROMPT_OUTPUT, SWIPE_HINT, TRANSLATE_BUTTON};
use slideview::controller::{ViewController, ViewSettings};
use slideview::deck::Deck;
use slideview::document::{Document, MemoryDocument, NodeId, Selector};
use slideview::preload::preload_images;
use slideview::prompt::PLACEHOLDER;
use slideview::types::{Language, NavCommand};

const DECK: &str = r#"{
    "title": { "en": "Prompt Engineering for Images", "zh": "图像提示词工程" },
    "slides": [
        { "blocks": [
            { "kind": "heading", "en": "Welcome", "zh": "欢迎", "icon": "sparkles" },
            { "kind": "paragraph", "parts": [ { "en": "Tip", "zh": "提示" }, ": be specific" ],
              "full": { "en": "Tip: be specific", "zh": "提示：要具体" } }
        ]},
        { "blocks": [
            { "kind": "code", "text": "Style: a watercolor painting" }
        ]},
        { "blocks": [
            { "kind": "heading", "en": "Try it", "zh": "试一试" },
            { "kind": "prompt_builder" }
        ]}
    ]
}"#;

fn settings() -> ViewSettings {
    ViewSettings {
        start_language: Language::English,
        loader_delay: Duration::from_millis(600),
        hint_delay: Duration::from_millis(3000),
    }
}

fn mount(start: Instant) -> (MemoryDocument, ViewController<NodeId>) {
    let mut doc = Deck::from_json(DECK).unwrap().build().unwrap();
    let view = ViewController::mount(&mut doc, &settings(), start);
    (doc, view)
}

fn text_of(doc: &MemoryDocument, id: &str) -> String {
    doc.text(doc.find_by_id(id).unwrap())
}

fn active_slides(doc: &MemoryDocument) -> usize {
    doc.find_all(Selector::Class("slide"))
        .into_iter()
        .filter(|&s| doc.has_class(s, "active"))
        .count()
}

#[test]
fn loads_deck_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DECK.as_bytes()).unwrap();

    let deck = Deck::load(file.path()).unwrap();
    assert_eq!(deck.slides.len(), 3);
    assert_eq!(deck.title.zh.as_deref(), Some("图像提示词工程"));
}

#[test]
fn malformed_deck_reports_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ \"title\": ").unwrap();

    let err = Deck::load(file.path()).unwrap_err();
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn navigation_wraps_and_updates_controls() {
    let (mut doc, mut view) = mount(Instant::now());
    let prev = doc.find_by_id(PREV_BUTTON).unwrap();
    let next = doc.find_by_id(NEXT_BUTTON).unwrap();
    let bar = doc.find_by_id(PROGRESS_BAR).unwrap();

    assert_eq!(view.slide_index(), 0);
    assert_eq!(active_slides(&doc), 1);
    assert!(!doc.is_visible(prev));
    assert!(doc.is_visible(next));

    view.on_retreat(&mut doc);
    assert_eq!(view.slide_index(), 2);
    assert!(doc.is_visible(prev));
    assert!(!doc.is_visible(next));
    assert_eq!(doc.element(bar).unwrap().progress(), Some(100.0));

    view.dispatch(NavCommand::Advance, &mut doc);
    assert_eq!(view.slide_index(), 0);
    assert_eq!(active_slides(&doc), 1);
    let first = doc.element(bar).unwrap().progress().unwrap();
    assert!((first - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn language_round_trip_restores_every_text() {
    let (mut doc, mut view) = mount(Instant::now());
    let slides = doc.find_all(Selector::Class("slide"));
    let before: Vec<String> = slides.iter().map(|&s| doc.text(s)).collect();

    view.on_toggle_language(&mut doc);
    assert_eq!(view.language(), Language::Chinese);
    assert_eq!(text_of(&doc, TRANSLATE_BUTTON), "English");
    assert_eq!(text_of(&doc, "deckTitle"), "图像提示词工程");

    let h2 = doc.find_all(Selector::Tags(&["h2"]))[0];
    assert_eq!(doc.text(h2), "欢迎");
    assert_eq!(doc.icon(h2).as_deref(), Some("sparkles"));

    let p = doc.find_all(Selector::Tags(&["p"]))[0];
    assert_eq!(doc.text(p), "提示：要具体");

    let code = doc.find_all(Selector::Tags(&["pre"]))[0];
    assert_eq!(doc.text(code), "风格: 一幅水彩画");

    view.on_toggle_language(&mut doc);
    assert_eq!(text_of(&doc, TRANSLATE_BUTTON), "中文");
    let after: Vec<String> = slides.iter().map(|&s| doc.text(s)).collect();
    assert_eq!(before, after);
}

#[test]
fn starting_in_chinese_translates_on_mount() {
    let mut doc = Deck::from_json(DECK).unwrap().build().unwrap();
    let settings = ViewSettings { start_language: Language::Chinese, ..settings() };
    let view = ViewController::mount(&mut doc, &settings, Instant::now());

    assert_eq!(view.language(), Language::Chinese);
    assert_eq!(text_of(&doc, SWIPE_HINT), "滑动或使用 ← → 切换");
}

#[test]
fn timers_remove_loader_then_hide_hint() {
    let start = Instant::now();
    let (mut doc, mut view) = mount(start);
    assert!(doc.find_by_id(LOADER).is_some());

    view.tick(&mut doc, start + Duration::from_millis(599));
    assert!(doc.find_by_id(LOADER).is_some());

    view.tick(&mut doc, start + Duration::from_millis(600));
    assert!(doc.find_by_id(LOADER).is_none());
    let hint = doc.find_by_id(SWIPE_HINT).unwrap();
    assert!(doc.is_visible(hint));

    view.tick(&mut doc, start + Duration::from_secs(3));
    assert!(!doc.is_visible(hint));

    // Fired timers do not fire again.
    view.tick(&mut doc, start + Duration::from_secs(10));
    assert!(doc.find_by_id(LOADER).is_none());
}

#[test]
fn swipes_navigate_only_past_the_threshold() {
    let (mut doc, mut view) = mount(Instant::now());

    view.on_pointer_down(200.0, 100.0);
    assert!(view.on_pointer_move(185.0, 102.0));
    assert_eq!(view.on_pointer_up(140.0, 105.0, &mut doc), Some(NavCommand::Advance));
    assert_eq!(view.slide_index(), 1);

    view.on_pointer_down(100.0, 100.0);
    assert_eq!(view.on_pointer_up(150.0, 100.0, &mut doc), None);
    assert_eq!(view.slide_index(), 1);

    view.on_pointer_down(100.0, 100.0);
    assert!(!view.on_pointer_move(105.0, 160.0));
    assert_eq!(view.on_pointer_up(160.0, 200.0, &mut doc), None);
    assert_eq!(view.slide_index(), 1);

    view.on_pointer_down(100.0, 100.0);
    assert_eq!(view.on_pointer_up(170.0, 110.0, &mut doc), Some(NavCommand::Retreat));
    assert_eq!(view.slide_index(), 0);
}

#[test]
fn prompt_output_follows_the_selects() {
    let (mut doc, mut view) = mount(Instant::now());
    assert_eq!(text_of(&doc, PROMPT_OUTPUT), PLACEHOLDER);

    let style = doc.find_by_id("styleSelect").unwrap();
    let subject = doc.find_by_id("subjectSelect").unwrap();
    doc.set_attribute(style, "value", "a watercolor painting");
    doc.set_attribute(subject, "value", "a red fox");
    view.on_prompt_change(&mut doc);
    assert_eq!(text_of(&doc, PROMPT_OUTPUT), "A a watercolor painting of a red fox.");

    doc.set_attribute(style, "value", "");
    doc.set_attribute(subject, "value", "");
    view.on_prompt_change(&mut doc);
    assert_eq!(text_of(&doc, PROMPT_OUTPUT), PLACEHOLDER);
}

#[test]
fn demo_deck_builds_with_all_images_present() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let deck = Deck::load(&demos.join("prompting.json")).unwrap();
    let mut doc = deck.build().unwrap();

    let report = preload_images(&mut doc, &demos);
    assert!(report.missing.is_empty(), "missing: {:?}", report.missing);
    assert_eq!(report.loaded.len(), 1);
}
