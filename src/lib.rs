//! xflconv - Library for converting XFL-style animation projects to JSON
//!
//! This library provides functionality to:
//! - Load a root `DOMDocument.xml` and its per-symbol library sub-documents
//! - Classify symbols into images, composed sprites and timed animations
//! - Reduce each symbol to normalized transform/color/timing records
//! - Assemble a single `AnimationDocument` ready for JSON serialization

pub mod assemble;
pub mod classify;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod xml;
