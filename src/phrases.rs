//! Phrase table for code-sample text.
//!
//! Code samples are not annotated with variants, so their text is translated
//! by literal find-and-replace. Entries are applied in declaration order, one
//! global replace per entry; the output of an earlier entry is visible to
//! later ones.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use crate::types::Language;

/// English phrase to Chinese phrase, in application order.
pub const PHRASES: &[(&str, &str)] = &[
    ("Thank You & Q&A", "谢谢 & 问答"),
    ("Prompt Engineering for Images", "图像提示词工程"),
    ("a watercolor painting", "一幅水彩画"),
    ("an oil painting", "一幅油画"),
    ("a pencil sketch", "一幅铅笔素描"),
    ("a digital illustration", "一幅数字插画"),
    ("a cinematic photograph", "一张电影感照片"),
    ("a red fox", "一只红狐狸"),
    ("a lighthouse", "一座灯塔"),
    ("an astronaut", "一名宇航员"),
    ("a steaming cup of tea", "一杯冒着热气的茶"),
    ("with dramatic lighting", "带有戏剧性的光线"),
    ("in soft pastel colors", "采用柔和的粉彩色调"),
    ("with intricate details", "细节丰富"),
    ("at golden hour", "在黄金时刻"),
    ("on a rainy street", "在雨中的街道上"),
    ("in a misty forest", "在雾气弥漫的森林里"),
    ("on the surface of the moon", "在月球表面"),
    ("Style", "风格"),
    ("Subject", "主体"),
    ("Details", "细节"),
    ("Setting", "场景"),
    ("Negative prompt", "反向提示词"),
    ("Aspect ratio", "宽高比"),
];

/// Compiled search patterns for one direction.
struct Pass {
    rules: Vec<(Regex, &'static str)>,
}

impl Pass {
    /// Compile `table` for rewriting into `target`. Chinese searches the
    /// English side, English searches the Chinese side.
    fn compile(table: &[(&'static str, &'static str)], target: Language) -> Self {
        let rules = table
            .iter()
            .map(|&(en, zh)| match target {
                Language::Chinese => (en, zh),
                Language::English => (zh, en),
            })
            .filter_map(|(from, to)| Regex::new(&regex::escape(from)).ok().map(|re| (re, to)))
            .collect();
        Self { rules }
    }

    fn apply(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |acc, (re, to)| {
            re.replace_all(&acc, NoExpand(to)).into_owned()
        })
    }
}

lazy_static! {
    static ref TO_CHINESE: Pass = Pass::compile(PHRASES, Language::Chinese);
    static ref TO_ENGLISH: Pass = Pass::compile(PHRASES, Language::English);
}

/// Rewrite code-sample text for display in `target`.
///
/// Switching to Chinese replaces English keys with their values; switching
/// back replaces values with keys. Both directions walk the table in
/// declaration order.
pub fn translate_code(text: &str, target: Language) -> String {
    match target {
        Language::Chinese => TO_CHINESE.apply(text),
        Language::English => TO_ENGLISH.apply(text),
    }
}
