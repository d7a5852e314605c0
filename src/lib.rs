//! `slideview` - bilingual slide deck viewer.
//!
//! Loads a JSON deck into an in-memory document, then drives navigation,
//! English/Chinese translation, swipe gestures and the prompt builder
//! against it. The terminal front end lives in [`app`] and [`ui`].

// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod config;
pub mod constants;
pub mod controller;
pub mod deck;
pub mod document;
pub mod error;
pub mod gesture;
pub mod input;
pub mod navigator;
pub mod phrases;
pub mod preload;
pub mod prompt;
pub mod timers;
pub mod translator;
pub mod types;
pub mod ui;
