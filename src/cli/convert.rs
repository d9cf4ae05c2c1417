//! Convert command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::diagnostics::Severity;
use crate::output::{clean_dir_contents, copy_media, write_document};
use crate::pipeline::convert_project_with;

use super::{load_with_overrides, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the convert command
#[allow(clippy::too_many_arguments)]
pub fn run_convert(
    input: Option<&Path>,
    output: Option<&Path>,
    config_path: Option<&Path>,
    pretty: bool,
    jobs: Option<usize>,
    no_media: bool,
    verbose: bool,
) -> ExitCode {
    let overrides = CliOverrides {
        input: input.map(Path::to_path_buf),
        output: output.map(Path::to_path_buf),
        pretty_json: if pretty { Some(true) } else { None },
        copy_media: if no_media { Some(false) } else { None },
        jobs,
    };
    let config = match load_with_overrides(config_path, overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };

    // Run the pipeline
    let outcome = match convert_project_with(&config, verbose) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Report collected diagnostics before touching the filesystem
    for diagnostic in &outcome.diagnostics {
        match diagnostic.severity {
            Severity::Error => eprintln!("Error: {}", diagnostic),
            Severity::Warning => eprintln!("Warning: {}", diagnostic),
        }
    }

    // Clear stale outputs, then write the descriptor
    if let Err(e) = clean_dir_contents(&config.project.output) {
        eprintln!("Error: Failed to clean '{}': {}", config.project.output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    let descriptor_path = config.descriptor_path(&outcome.entity_name);
    if let Err(e) = write_document(&outcome.document, &descriptor_path, config.convert.pretty_json)
    {
        eprintln!("Error: Failed to write '{}': {}", descriptor_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Saved: {}", descriptor_path.display());

    if config.convert.copy_media {
        match copy_media(&config.input_media_dir(), &config.output_media_dir()) {
            Ok(copied) => println!("Copied {} media file(s)", copied),
            Err(e) => {
                eprintln!("Error: Failed to copy media: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    // The batch succeeds only when no error diagnostics were recorded
    if outcome.is_clean() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
