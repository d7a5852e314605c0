//! Application constants.
//!
//! Centralizes magic numbers, element ids and attribute names.

/// Swipe gesture thresholds, in gesture units.
pub mod gesture {
    /// Horizontal displacement a drag must exceed to navigate.
    pub const SWIPE_THRESHOLD: f64 = 50.0;

    /// Horizontal displacement after which default scrolling is suppressed.
    pub const MOTION_THRESHOLD: f64 = 10.0;

    /// Default gesture units per terminal column.
    pub const DEFAULT_UNITS_PER_CELL: f64 = 8.0;
}

/// Fire-once timer defaults.
pub mod timing {
    /// Delay before the loading indicator is removed, in milliseconds.
    pub const DEFAULT_LOADER_MS: u64 = 600;

    /// Delay before the swipe hint fades out, in milliseconds.
    pub const DEFAULT_HINT_MS: u64 = 3000;

    /// Event poll interval of the terminal loop, in milliseconds.
    pub const POLL_MS: u64 = 50;
}

/// Element ids, classes and attribute names of the deck markup.
pub mod dom {
    /// Class carried by every slide panel.
    pub const SLIDE_CLASS: &str = "slide";
    /// Class toggled on the visible panel.
    pub const ACTIVE_CLASS: &str = "active";

    /// Deck title heading.
    pub const DECK_TITLE: &str = "deckTitle";
    /// Previous-slide button.
    pub const PREV_BUTTON: &str = "prevBtn";
    /// Next-slide button.
    pub const NEXT_BUTTON: &str = "nextBtn";
    /// Progress bar fill element.
    pub const PROGRESS_BAR: &str = "progressBar";
    /// Language toggle button.
    pub const TRANSLATE_BUTTON: &str = "translateBtn";
    /// Loading indicator overlay.
    pub const LOADER: &str = "loader";
    /// Swipe hint overlay.
    pub const SWIPE_HINT: &str = "swipeHint";

    /// Prompt builder style select.
    pub const STYLE_SELECT: &str = "styleSelect";
    /// Prompt builder subject select.
    pub const SUBJECT_SELECT: &str = "subjectSelect";
    /// Prompt builder details select.
    pub const DETAILS_SELECT: &str = "detailsSelect";
    /// Prompt builder setting select.
    pub const SETTING_SELECT: &str = "settingSelect";
    /// Prompt builder output element.
    pub const PROMPT_OUTPUT: &str = "promptOutput";

    /// Attribute holding a select's current value.
    pub const VALUE_ATTR: &str = "value";
    /// Attribute holding an image source path.
    pub const SRC_ATTR: &str = "src";
    /// Attribute set on images that were found on disk.
    pub const PRELOADED_ATTR: &str = "data-preloaded";

    /// Elements whose text is swapped by the code-sample pass. Deck code
    /// blocks are `pre > code`, so only the inner element is matched.
    pub const CODE_TAGS: &[&str] = &["code"];
    /// Compound containers visited by the translator's second pass.
    pub const COMPOUND_TAGS: &[&str] = &["li", "p"];
}

/// UI layout constants.
pub mod ui {
    /// Width of the previous/next buttons in the navigation bar.
    pub const NAV_BUTTON_WIDTH: u16 = 12;
}
