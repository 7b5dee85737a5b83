//! CLI logic for the LayerPin constraint inspector.
//!
//! The CLI loads a laid-out diagram snapshot, runs one query of the
//! constraint engine against it and prints the result as JSON.

pub mod error_adapter;

mod args;
mod config;
mod output;

pub use args::{Args, Command};

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use layerpin::{
    DragSession, LayerPinError, LayeredGraph, NodeIndex, geometry::Point, identifier::Id,
    layers::compute_layers, snapshot::Snapshot,
};

use output::{JsonRelayout, write_json};

/// Run the LayerPin CLI application, printing to standard output.
///
/// # Errors
///
/// Returns `LayerPinError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed or inconsistent snapshots
/// - Node ids missing from the snapshot
pub fn run(args: &Args) -> Result<(), LayerPinError> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Run the LayerPin CLI application, printing to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output(args: &Args, out: &mut impl Write) -> Result<(), LayerPinError> {
    info!(input_path = args.input; "Loading snapshot");

    let config = config::load_config(args.config.as_ref())?;
    let json = fs::read_to_string(&args.input)?;
    let snapshot = Snapshot::from_json(&json)?;
    let mut graph = LayeredGraph::from_snapshot(&snapshot)?;

    match &args.command {
        Command::Layers { scope } => {
            let level = match scope {
                Some(id) => graph.children_level(lookup(&graph, id)?),
                None => Some(graph.root_level()),
            };
            let layers = level
                .map(|level| compute_layers(&level.nodes(), config.layers().padding()))
                .unwrap_or_default();

            info!(layers_count = layers.len(); "Layers calculated");
            write_json(out, &layers)?;
        }
        Command::Classify { id, x, y } => {
            let idx = lookup(&graph, id)?;
            let current = graph.node(idx).position();
            let pointer = Point::new(x.unwrap_or(current.x()), y.unwrap_or(current.y()));

            let mut session = DragSession::begin(&mut graph, idx).with_config(&config);
            let preview = session.preview(&mut graph, pointer);
            session.cancel(&mut graph);

            write_json(out, &preview)?;
        }
        Command::Drop { id, x, y } => {
            let idx = lookup(&graph, id)?;

            let mut session = DragSession::begin(&mut graph, idx).with_config(&config);
            session.preview(&mut graph, Point::new(*x, *y));

            let mut relayout = JsonRelayout::new(&mut *out);
            match session.commit(&mut graph, &mut relayout)? {
                Some(action) => info!(kind = action.kind(); "Constraint committed"),
                None => warn!(node = id.as_str(); "Drop produced no constraint"),
            }
        }
    }

    Ok(())
}

fn lookup(graph: &LayeredGraph, id: &str) -> Result<NodeIndex, LayerPinError> {
    let id = Id::new(id);
    graph.node_index(id).ok_or(LayerPinError::UnknownNode(id))
}
