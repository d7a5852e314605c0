//! Bilingual content toggle.
//!
//! Three passes run on every toggle:
//! 1. units carrying both `data-en` and `data-zh` get the variant for the new
//!    language, keeping their icon in front;
//! 2. `li`/`p` containers without direct variants but with `data-*-full`
//!    attributes are rebuilt from those;
//! 3. code samples go through the phrase table.

use tracing::debug;

use crate::constants::dom::{CODE_TAGS, COMPOUND_TAGS, TRANSLATE_BUTTON};
use crate::document::{Document, Selector};
use crate::phrases::translate_code;
use crate::types::Language;

/// Owns the document language and rewrites text when it changes.
#[derive(Debug)]
pub struct Translator<N> {
    language: Language,
    button: Option<N>,
}

impl<N: Copy + Eq + std::fmt::Debug> Translator<N> {
    /// Bind to the translate button of `doc`. The markup is assumed to be
    /// authored in the primary language.
    pub fn attach<D: Document<Node = N>>(doc: &D) -> Self {
        Self {
            language: Language::English,
            button: doc.find_by_id(TRANSLATE_BUTTON),
        }
    }

    /// Current language.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Switch to the other language and rewrite the document.
    pub fn toggle<D: Document<Node = N>>(&mut self, doc: &mut D) {
        self.language = self.language.toggled();
        debug!(language = %self.language, "toggling language");

        if let Some(button) = self.button {
            doc.set_text(button, self.language.toggled().name());
        }

        let swapped = swap_units(doc, self.language);
        let rebuilt = rebuild_containers(doc, self.language);
        let code = translate_code_samples(doc, self.language);
        debug!(swapped, rebuilt, code, "language applied");
    }
}

/// Replace `node`'s text, keeping its decorative icon as first child.
fn replace_text_keeping_icon<D: Document>(doc: &mut D, node: D::Node, text: &str) {
    let icon = doc.icon(node);
    doc.set_text(node, text);
    if let Some(icon) = icon {
        doc.prepend_icon(node, &icon);
    }
}

fn swap_units<D: Document>(doc: &mut D, target: Language) -> usize {
    let mut count = 0;
    for node in doc.find_all(Selector::Attribute(Language::English.attribute())) {
        // A unit from an earlier iteration may have replaced this one.
        let variants = (
            doc.attribute(node, Language::English.attribute()).map(str::to_owned),
            doc.attribute(node, Language::Chinese.attribute()).map(str::to_owned),
        );
        let text = match (variants, target) {
            ((Some(en), Some(_)), Language::English) => en,
            ((Some(_), Some(zh)), Language::Chinese) => zh,
            _ => continue,
        };
        replace_text_keeping_icon(doc, node, &text);
        count += 1;
    }
    count
}

fn rebuild_containers<D: Document>(doc: &mut D, target: Language) -> usize {
    let mut count = 0;
    for node in doc.find_all(Selector::Tags(COMPOUND_TAGS)) {
        // Already handled as a unit.
        if doc.attribute(node, Language::English.attribute()).is_some()
            && doc.attribute(node, Language::Chinese.attribute()).is_some()
        {
            continue;
        }
        let Some(text) = doc.attribute(node, target.full_attribute()).map(str::to_owned) else {
            continue;
        };
        replace_text_keeping_icon(doc, node, &text);
        count += 1;
    }
    count
}

fn translate_code_samples<D: Document>(doc: &mut D, target: Language) -> usize {
    let mut count = 0;
    for node in doc.find_all(Selector::Tags(CODE_TAGS)) {
        let before = doc.text(node);
        let after = translate_code(&before, target);
        if after != before {
            doc.set_text(node, &after);
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::document::{Child, MemoryDocument, NodeId};

    fn unit(doc: &mut MemoryDocument, parent: NodeId, tag: &str, en: &str, zh: Option<&str>) -> NodeId {
        let node = doc.append_element(parent, tag);
        doc.set_attribute(node, "data-en", en);
        if let Some(zh) = zh {
            doc.set_attribute(node, "data-zh", zh);
        }
        doc.append_text(node, en);
        node
    }

    fn with_button() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let button = doc.append_element(root, "button");
        doc.set_id(button, TRANSLATE_BUTTON);
        doc.append_text(button, "中文");
        doc
    }

    #[test]
    fn button_names_the_language_to_switch_to() {
        let mut doc = with_button();
        let mut translator = Translator::attach(&doc);
        let button = doc.find_by_id(TRANSLATE_BUTTON).unwrap();

        translator.toggle(&mut doc);
        assert_eq!(translator.language(), Language::Chinese);
        assert_eq!(doc.text(button), "English");

        translator.toggle(&mut doc);
        assert_eq!(doc.text(button), "中文");
    }

    #[test]
    fn toggling_twice_restores_text() {
        let mut doc = with_button();
        let root = doc.root();
        let heading = unit(&mut doc, root, "h1", "Welcome", Some("欢迎"));
        let mut translator = Translator::attach(&doc);

        translator.toggle(&mut doc);
        assert_eq!(doc.text(heading), "欢迎");
        translator.toggle(&mut doc);
        assert_eq!(doc.text(heading), "Welcome");
    }

    #[test]
    fn icon_stays_first_child_across_toggles() {
        let mut doc = with_button();
        let root = doc.root();
        let heading = doc.append_element(root, "h2");
        doc.set_attribute(heading, "data-en", "Ideas");
        doc.set_attribute(heading, "data-zh", "想法");
        doc.append_icon(heading, "lightbulb");
        doc.append_text(heading, "Ideas");
        let mut translator = Translator::attach(&doc);

        for expected in ["想法", "Ideas", "想法"] {
            translator.toggle(&mut doc);
            let el = doc.element(heading).unwrap();
            assert_eq!(el.children()[0], Child::Icon("lightbulb".to_string()));
            assert_eq!(el.children().len(), 2);
            assert_eq!(doc.text(heading), expected);
        }
    }

    #[test]
    fn units_without_secondary_variant_are_untouched() {
        let mut doc = with_button();
        let root = doc.root();
        let lone = unit(&mut doc, root, "p", "Only English", None);
        doc.set_text(lone, "edited by hand");
        let mut translator = Translator::attach(&doc);

        translator.toggle(&mut doc);
        assert_eq!(doc.text(lone), "edited by hand");
    }

    #[test]
    fn containers_are_rebuilt_from_full_variants() {
        let mut doc = with_button();
        let root = doc.root();
        let item = doc.append_element(root, "li");
        doc.set_attribute(item, "data-en-full", "Tip: be specific");
        doc.set_attribute(item, "data-zh-full", "提示：要具体");
        doc.append_icon(item, "check");
        unit(&mut doc, item, "strong", "Tip", Some("提示"));
        doc.append_text(item, ": be specific");
        let mut translator = Translator::attach(&doc);

        translator.toggle(&mut doc);
        assert_eq!(doc.text(item), "提示：要具体");
        assert_eq!(doc.icon(item).as_deref(), Some("check"));

        translator.toggle(&mut doc);
        assert_eq!(doc.text(item), "Tip: be specific");
    }

    #[test]
    fn container_with_direct_variants_is_not_rebuilt() {
        let mut doc = with_button();
        let root = doc.root();
        let para = unit(&mut doc, root, "p", "Hello", Some("你好"));
        // A stale full variant must not win over the direct one.
        doc.set_attribute(para, "data-zh-full", "WRONG");
        let mut translator = Translator::attach(&doc);

        translator.toggle(&mut doc);
        assert_eq!(doc.text(para), "你好");
    }

    #[test]
    fn code_samples_use_phrase_table() {
        let mut doc = with_button();
        let root = doc.root();
        let pre = doc.append_element(root, "pre");
        let code = doc.append_element(pre, "code");
        doc.append_text(code, "slide.title = \"Thank You & Q&A\"");
        let mut translator = Translator::attach(&doc);

        translator.toggle(&mut doc);
        assert_eq!(doc.text(pre), "slide.title = \"谢谢 & 问答\"");
        translator.toggle(&mut doc);
        assert_eq!(doc.text(pre), "slide.title = \"Thank You & Q&A\"");
    }

    #[test]
    fn code_element_survives_translation() {
        let mut doc = with_button();
        let root = doc.root();
        let pre = doc.append_element(root, "pre");
        let code = doc.append_element(pre, "code");
        doc.append_text(code, "Style: a pencil sketch");
        let mut translator = Translator::attach(&doc);

        translator.toggle(&mut doc);
        assert_eq!(doc.child_elements(pre), vec![code]);
        assert_eq!(doc.text(code), "风格: 一幅铅笔素描");
    }

    #[test]
    fn missing_button_is_tolerated() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let h = unit(&mut doc, root, "h1", "Hi", Some("嗨"));
        let mut translator = Translator::attach(&doc);
        translator.toggle(&mut doc);
        assert_eq!(doc.text(h), "嗨");
    }
}
