//! Inspect command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::document::load_project;

use super::{load_with_overrides, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the inspect command: load the root document and print a summary.
pub fn run_inspect(input: Option<&Path>, config_path: Option<&Path>) -> ExitCode {
    let overrides =
        CliOverrides { input: input.map(Path::to_path_buf), ..Default::default() };
    let config = match load_with_overrides(config_path, overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let root_path = config.root_document_path();
    let text = match std::fs::read_to_string(&root_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: Cannot open '{}': {}", root_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let doc = match roxmltree::Document::parse(&text) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}: {}", root_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let project = match load_project(&doc) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    println!(
        "Header: {}x{} @ {} fps",
        project.header.width, project.header.height, project.header.frame_rate
    );
    println!("Folders:  {}", project.folders.len());
    println!("Media:    {}", project.media.len());
    println!("Symbols:  {}", project.symbols.len());
    println!("Timeline: {} label frame(s)", project.timeline_frames.len());

    for frame in &project.timeline_frames {
        if let (Some(name), Some(index), Some(duration)) = (
            frame.animation_name.as_deref(),
            frame.animation_index.as_deref(),
            frame.animation_duration.as_deref(),
        ) {
            println!("  {} (index {}, duration {})", name, index, duration);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
