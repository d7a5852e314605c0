//! Image prompt builder.
//!
//! Four selects (style, subject, details, setting) are combined into one
//! sentence. Empty selections are skipped; no grammar fixes are applied.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::dom::{
    DETAILS_SELECT, PROMPT_OUTPUT, SETTING_SELECT, STYLE_SELECT, SUBJECT_SELECT, VALUE_ATTR,
};
use crate::document::Document;

/// Shown while every select is empty.
pub const PLACEHOLDER: &str = "A [style] of [subject] [details] [setting].";

/// The four prompt fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    /// Art style, e.g. "a watercolor painting".
    Style,
    /// What is depicted.
    Subject,
    /// Extra qualities.
    Details,
    /// Where it takes place.
    Setting,
}

impl PromptField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [Self::Style, Self::Subject, Self::Details, Self::Setting];

    /// Id of the select element bound to this field.
    pub const fn select_id(self) -> &'static str {
        match self {
            Self::Style => STYLE_SELECT,
            Self::Subject => SUBJECT_SELECT,
            Self::Details => DETAILS_SELECT,
            Self::Setting => SETTING_SELECT,
        }
    }

    /// Label shown next to the select.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Style => "Style",
            Self::Subject => "Subject",
            Self::Details => "Details",
            Self::Setting => "Setting",
        }
    }

    /// Chinese variant of [`PromptField::label`].
    pub const fn label_zh(self) -> &'static str {
        match self {
            Self::Style => "风格",
            Self::Subject => "主体",
            Self::Details => "细节",
            Self::Setting => "场景",
        }
    }
}

/// Option lists offered by the four selects. The empty option is implicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOptions {
    /// Style options.
    #[serde(default = "default_styles")]
    pub style: Vec<String>,
    /// Subject options.
    #[serde(default = "default_subjects")]
    pub subject: Vec<String>,
    /// Details options.
    #[serde(default = "default_details")]
    pub details: Vec<String>,
    /// Setting options.
    #[serde(default = "default_settings")]
    pub setting: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_styles() -> Vec<String> {
    owned(&[
        "a watercolor painting",
        "an oil painting",
        "a pencil sketch",
        "a digital illustration",
        "a cinematic photograph",
    ])
}

fn default_subjects() -> Vec<String> {
    owned(&["a red fox", "a lighthouse", "an astronaut", "a steaming cup of tea"])
}

fn default_details() -> Vec<String> {
    owned(&["with dramatic lighting", "in soft pastel colors", "with intricate details"])
}

fn default_settings() -> Vec<String> {
    owned(&[
        "at golden hour",
        "on a rainy street",
        "in a misty forest",
        "on the surface of the moon",
    ])
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            style: default_styles(),
            subject: default_subjects(),
            details: default_details(),
            setting: default_settings(),
        }
    }
}

impl PromptOptions {
    /// Options for one field.
    pub fn for_field(&self, field: PromptField) -> &[String] {
        match field {
            PromptField::Style => &self.style,
            PromptField::Subject => &self.subject,
            PromptField::Details => &self.details,
            PromptField::Setting => &self.setting,
        }
    }
}

/// Current values of the four selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSelection {
    /// Selected style.
    pub style: String,
    /// Selected subject.
    pub subject: String,
    /// Selected details.
    pub details: String,
    /// Selected setting.
    pub setting: String,
}

impl PromptSelection {
    /// Build the prompt sentence, or [`PLACEHOLDER`] if nothing is selected.
    pub fn compose(&self) -> String {
        let parts = [&self.style, &self.subject, &self.details, &self.setting];
        if parts.iter().all(|p| p.trim().is_empty()) {
            return PLACEHOLDER.to_string();
        }

        let mut prompt = String::from("A");
        if !self.style.trim().is_empty() {
            prompt.push(' ');
            prompt.push_str(self.style.trim());
        }
        if !self.subject.trim().is_empty() {
            prompt.push_str(" of ");
            prompt.push_str(self.subject.trim());
        }
        for extra in [&self.details, &self.setting] {
            if !extra.trim().is_empty() {
                prompt.push(' ');
                prompt.push_str(extra.trim());
            }
        }
        prompt.push('.');
        prompt
    }

    fn field_mut(&mut self, field: PromptField) -> &mut String {
        match field {
            PromptField::Style => &mut self.style,
            PromptField::Subject => &mut self.subject,
            PromptField::Details => &mut self.details,
            PromptField::Setting => &mut self.setting,
        }
    }
}

/// Binds the prompt builder to its elements.
#[derive(Debug)]
pub struct PromptForm<N> {
    selects: [(PromptField, Option<N>); 4],
    output: Option<N>,
}

impl<N: Copy + Eq + std::fmt::Debug> PromptForm<N> {
    /// Look up the selects and the output element of `doc`.
    pub fn attach<D: Document<Node = N>>(doc: &D) -> Self {
        Self {
            selects: PromptField::ALL.map(|f| (f, doc.find_by_id(f.select_id()))),
            output: doc.find_by_id(PROMPT_OUTPUT),
        }
    }

    /// Read the current select values. Missing selects read as empty.
    pub fn selection<D: Document<Node = N>>(&self, doc: &D) -> PromptSelection {
        let mut selection = PromptSelection::default();
        for (field, node) in &self.selects {
            if let Some(value) = (*node).and_then(|n| doc.attribute(n, VALUE_ATTR)) {
                *selection.field_mut(*field) = value.to_string();
            }
        }
        selection
    }

    /// Recompose the prompt into the output element.
    pub fn refresh<D: Document<Node = N>>(&self, doc: &mut D) {
        let Some(output) = self.output else {
            return;
        };
        let prompt = self.selection(doc).compose();
        trace!(%prompt, "prompt refreshed");
        doc.set_text(output, &prompt);
    }
}
