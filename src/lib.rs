//! ROG Omni-Tool Suite - a terminal toolkit for inspecting files and chatting
//! with Gemini personas.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod encoding;
pub mod error;
pub mod gems;
pub mod genai;
pub mod input;
pub mod library;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
