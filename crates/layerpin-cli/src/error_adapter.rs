//! Error adapter for converting LayerPinError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's diagnostic formatting used in the CLI.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use layerpin::LayerPinError;

/// Adapter rendering a [`LayerPinError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a LayerPinError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            LayerPinError::Io(_) => "layerpin::io",
            LayerPinError::Snapshot(_) => "layerpin::snapshot",
            LayerPinError::Config(_) => "layerpin::config",
            LayerPinError::UnknownNode(_) => "layerpin::unknown_node",
            LayerPinError::DuplicateNode(_) => "layerpin::duplicate_node",
            LayerPinError::SparseLayers { .. } => "layerpin::sparse_layers",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            LayerPinError::UnknownNode(_) => "node ids are case-sensitive and must match the snapshot",
            LayerPinError::DuplicateNode(_) => "every node id must be unique across all levels",
            LayerPinError::SparseLayers { .. } => {
                "re-run the layout engine so every level numbers its layers from zero without gaps"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
