//! Command-line argument definitions for the LayerPin CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the snapshot to inspect, the
//! configuration file, the logging verbosity and the query to run.

use clap::{Parser, Subcommand};

/// Command-line arguments for the LayerPin inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input snapshot (JSON)
    #[arg(help = "Path to the laid-out diagram snapshot")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Query to run against the snapshot
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the layer bands of a hierarchical level
    Layers {
        /// Container whose children form the level; the top level if omitted
        #[arg(long)]
        scope: Option<String>,
    },

    /// Print where a node would land if dropped, without committing
    Classify {
        /// Node to classify
        id: String,

        /// Pointer x; the node's own x if omitted
        #[arg(long, requires = "y", allow_negative_numbers = true)]
        x: Option<f32>,

        /// Pointer y; the node's own y if omitted
        #[arg(long, requires = "x", allow_negative_numbers = true)]
        y: Option<f32>,
    },

    /// Drag a node to a position, commit the drop and print the constraint
    Drop {
        /// Node to drag
        id: String,

        /// Pointer x at the drop
        #[arg(long, allow_negative_numbers = true)]
        x: f32,

        /// Pointer y at the drop
        #[arg(long, allow_negative_numbers = true)]
        y: f32,
    },
}
