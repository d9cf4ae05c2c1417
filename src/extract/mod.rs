//! Per-symbol extraction.
//!
//! Each symbol reference is classified and reduced to one `SymbolOutput`
//! independently of every other symbol, which makes the whole step
//! data-parallel: a scoped worker pool pulls symbols off a shared index and
//! the per-symbol results are merged sequentially afterwards.

mod animation;
mod image;
mod sprite;

pub use animation::{extract_animation, AnimationExtraction};
pub use image::extract_image;
pub use sprite::extract_sprite;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use roxmltree::{Document, Node};

use crate::classify::{classify, SymbolKind};
use crate::diagnostics::Diagnostic;
use crate::error::ConvertError;
use crate::models::{LayerAnimations, RawImage, SpriteTexture, SymbolReference};
use crate::xml::{element_children, find_child, required_attr, required_child};

/// Default number of parallel jobs (uses available parallelism).
pub fn default_jobs() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// The normalized record one symbol reduces to.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutput {
    Image { name: String, image: RawImage },
    Sprite { name: String, texture: SpriteTexture },
    Animation { name: String, layers: LayerAnimations },
}

/// Result of processing one symbol: an optional output plus any diagnostics.
#[derive(Debug, Clone, Default)]
pub struct SymbolResult {
    pub output: Option<SymbolOutput>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Classify and extract one symbol from its library sub-document.
///
/// Failures abort this symbol only: they come back as diagnostics, never as
/// a hard error for the batch.
pub fn process_symbol(library_dir: &Path, href: &str) -> SymbolResult {
    let mut result = SymbolResult::default();

    let kind = classify(href);
    if kind == SymbolKind::Ignored {
        return result;
    }
    if kind == SymbolKind::Unknown {
        let err = ConvertError::Classification { href: href.to_string() };
        result.diagnostics.push(Diagnostic::error(href, &err));
        return result;
    }

    let text = match std::fs::read_to_string(library_dir.join(href)) {
        Ok(text) => text,
        Err(e) => {
            let err = ConvertError::Io(format!("{}: {}", href, e));
            result.diagnostics.push(Diagnostic::error(href, &err));
            return result;
        }
    };
    let doc = match Document::parse(&text) {
        Ok(doc) => doc,
        Err(e) => {
            result.diagnostics.push(Diagnostic::error(href, &ConvertError::from(e)));
            return result;
        }
    };

    let extracted = match kind {
        SymbolKind::Image => extract_image(&doc).map(|(name, image)| SymbolOutput::Image { name, image }),
        SymbolKind::Sprite => {
            extract_sprite(&doc).map(|(name, texture)| SymbolOutput::Sprite { name, texture })
        }
        SymbolKind::Animation => extract_animation(&doc).map(|extraction| {
            for warning in &extraction.warnings {
                result.diagnostics.push(Diagnostic::warning(href, "layer_count", warning.clone()));
            }
            SymbolOutput::Animation { name: extraction.name, layers: extraction.layers }
        }),
        SymbolKind::Ignored | SymbolKind::Unknown => unreachable!("handled above"),
    };

    match extracted {
        Ok(output) => result.output = Some(output),
        Err(err) => result.diagnostics.push(Diagnostic::error(href, &err)),
    }
    result
}

/// Process every symbol, fanning out across a scoped worker pool.
///
/// Results come back in input order regardless of worker scheduling, so the
/// merged stores are deterministic across runs.
pub fn process_symbols(
    library_dir: &Path,
    symbols: &[SymbolReference],
    jobs: usize,
    verbose: bool,
) -> Vec<SymbolResult> {
    if jobs <= 1 || symbols.len() <= 1 {
        return symbols
            .iter()
            .map(|symbol| {
                if verbose {
                    println!("Converting: {} ...", symbol.href);
                }
                process_symbol(library_dir, &symbol.href)
            })
            .collect();
    }

    let results = Mutex::new(Vec::with_capacity(symbols.len()));
    let next_idx = AtomicUsize::new(0);

    std::thread::scope(|s| {
        let num_workers = jobs.min(symbols.len());
        for _ in 0..num_workers {
            let results = &results;
            let next_idx = &next_idx;
            s.spawn(move || loop {
                let idx = next_idx.fetch_add(1, Ordering::SeqCst);
                if idx >= symbols.len() {
                    break;
                }
                let symbol = &symbols[idx];
                if verbose {
                    println!("Converting: {} ...", symbol.href);
                }
                let result = process_symbol(library_dir, &symbol.href);
                results.lock().unwrap().push((idx, result));
            });
        }
    });

    // Restore input order for deterministic merging
    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(idx, _)| *idx);
    results.into_iter().map(|(_, r)| r).collect()
}

/// Locate a sub-document's timeline: its declared name plus layer entities.
///
/// Sub-documents share the shape `<DOMSymbolItem><timeline><DOMTimeline
/// name=".."><layers>...`, reached here by named lookup.
pub(crate) fn symbol_timeline<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<(String, Vec<Node<'a, 'input>>), ConvertError> {
    let timeline = required_child(doc.root_element(), "timeline", "symbol document")?;
    let timeline = required_child(timeline, "DOMTimeline", "timeline section")?;
    let name = required_attr(timeline, "name", "DOMTimeline")?;
    let layers = required_child(timeline, "layers", "DOMTimeline")?;
    let layers = element_children(layers)
        .filter(|n| n.tag_name().name() == "DOMLayer")
        .collect();
    Ok((name, layers))
}

/// Collect a layer's frame entities in document order.
pub(crate) fn layer_frames<'a, 'input>(
    layer: Node<'a, 'input>,
    context: &str,
) -> Result<Vec<Node<'a, 'input>>, ConvertError> {
    let frames = required_child(layer, "frames", context)?;
    Ok(element_children(frames).filter(|n| n.tag_name().name() == "DOMFrame").collect())
}

/// Collect a frame's placed elements; an absent elements record reads empty.
pub(crate) fn frame_elements<'a, 'input>(frame: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    find_child(frame, "elements")
        .map(|elements| element_children(elements).collect())
        .unwrap_or_default()
}
