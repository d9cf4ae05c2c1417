//! Error types for the conversion pipeline

use thiserror::Error;

/// Error raised while reducing a project or one of its symbols.
///
/// Structural, classification, frame and image-shape errors abort only the
/// symbol they occurred in and are collected as diagnostics; errors raised
/// while loading the root document are fatal to the whole batch.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// An expected document section or record is missing or has the wrong shape
    #[error("missing or malformed document structure: {context}")]
    Structural { context: String },

    /// A symbol reference's href matches no known naming convention
    #[error("symbol '{href}' matches no known naming convention")]
    Classification { href: String },

    /// A frame entity lacks required timing attributes
    #[error("animation '{animation}' layer {layer} frame {frame}: missing or invalid index/duration attributes")]
    MalformedFrame { animation: String, layer: usize, frame: usize },

    /// An image sub-document has more than one layer/frame where exactly one is required
    #[error("image '{name}' has {layers} layer(s) and {frames} frame(s), expected exactly 1 of each")]
    UnexpectedStructure { name: String, layers: usize, frames: usize },

    /// A media entry's name does not match the `media/<word><digits>?_x` shape
    #[error("media entry '{name}' does not match the expected media/<word><digits>_x naming shape")]
    Naming { name: String },

    /// File I/O failure (message keeps the offending path)
    #[error("I/O error: {0}")]
    Io(String),

    /// XML parse failure
    #[error("XML parse error: {0}")]
    Xml(String),
}

impl ConvertError {
    /// Build a structural error from any displayable context.
    pub fn structural(context: impl Into<String>) -> Self {
        ConvertError::Structural { context: context.into() }
    }

    /// Short machine-readable tag for this error kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Structural { .. } => "structural",
            ConvertError::Classification { .. } => "classification",
            ConvertError::MalformedFrame { .. } => "malformed_frame",
            ConvertError::UnexpectedStructure { .. } => "unexpected_structure",
            ConvertError::Naming { .. } => "naming",
            ConvertError::Io(_) => "io",
            ConvertError::Xml(_) => "xml",
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(e: std::io::Error) -> Self {
        ConvertError::Io(e.to_string())
    }
}

impl From<roxmltree::Error> for ConvertError {
    fn from(e: roxmltree::Error) -> Self {
        ConvertError::Xml(e.to_string())
    }
}
