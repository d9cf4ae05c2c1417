//! The conversion pipeline.
//!
//! Loads the root document, fans extraction out across the symbol list,
//! merges the per-symbol outputs into three keyed stores and assembles the
//! final `AnimationDocument`. Per-symbol failures become diagnostics; only
//! root-document problems fail the whole batch.

use std::collections::BTreeMap;

use crate::assemble::{assemble, entity_name};
use crate::config::Config;
use crate::diagnostics::{has_errors, Diagnostic};
use crate::document::load_project;
use crate::error::ConvertError;
use crate::extract::{default_jobs, process_symbols, SymbolOutput};
use crate::models::{AnimationDocument, RawImage, SpriteAnimationMap, SpriteTexture};

/// Everything a conversion run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    /// The assembled document, possibly partial when diagnostics are present
    pub document: AnimationDocument,
    /// Output name derived from the first media entry
    pub entity_name: String,
    /// Collected per-symbol diagnostics; empty means a clean run
    pub diagnostics: Vec<Diagnostic>,
}

impl ConversionOutcome {
    /// Whether the run completed without any error-severity diagnostics.
    pub fn is_clean(&self) -> bool {
        !has_errors(&self.diagnostics)
    }
}

/// Convert the project the config points at.
pub fn convert_project(config: &Config) -> Result<ConversionOutcome, ConvertError> {
    convert_project_with(config, false)
}

/// Convert with optional per-symbol progress output.
pub fn convert_project_with(
    config: &Config,
    verbose: bool,
) -> Result<ConversionOutcome, ConvertError> {
    let root_path = config.root_document_path();
    let text = std::fs::read_to_string(&root_path)
        .map_err(|e| ConvertError::Io(format!("{}: {}", root_path.display(), e)))?;
    let doc = roxmltree::Document::parse(&text)?;
    let project = load_project(&doc)?;

    let first_media = project.media.first().ok_or_else(|| {
        ConvertError::structural("media section has no entries to derive the entity name from")
    })?;
    let entity = entity_name(&first_media.name)?;

    let jobs = config.convert.jobs.unwrap_or_else(default_jobs);
    let results = process_symbols(&config.library_dir(), &project.symbols, jobs, verbose);

    let mut images: BTreeMap<String, RawImage> = BTreeMap::new();
    let mut sprites: BTreeMap<String, SpriteTexture> = BTreeMap::new();
    let mut animations: SpriteAnimationMap = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for result in results {
        diagnostics.extend(result.diagnostics);
        match result.output {
            Some(SymbolOutput::Image { name, image }) => {
                images.insert(name, image);
            }
            Some(SymbolOutput::Sprite { name, texture }) => {
                sprites.insert(name, texture);
            }
            Some(SymbolOutput::Animation { name, layers }) => {
                animations.insert(name, layers);
            }
            None => {}
        }
    }

    let document = assemble(project.header, images, sprites, animations);
    Ok(ConversionOutcome { document, entity_name: entity, diagnostics })
}
