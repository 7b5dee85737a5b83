//! Error types for LayerPin operations.
//!
//! Only building a [`LayeredGraph`](crate::graph::LayeredGraph) from outside
//! data can fail. The classification and resolver functions are infallible:
//! a missing match is a normal outcome during a drag and is expressed through
//! `Option` or the "new trailing layer/position" index.

use std::io;

use thiserror::Error;

use layerpin_core::identifier::Id;

/// The main error type for LayerPin operations.
#[derive(Debug, Error)]
pub enum LayerPinError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown node `{0}`")]
    UnknownNode(Id),

    #[error("Duplicate node `{0}`")]
    DuplicateNode(Id),

    #[error(
        "Layer ids of scope `{scope}` are not dense: expected layer {expected}, found {found}"
    )]
    SparseLayers {
        scope: String,
        expected: usize,
        found: usize,
    },
}
