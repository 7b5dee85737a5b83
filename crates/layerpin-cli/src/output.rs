//! JSON output of query results and committed constraints.

use std::io::{self, Write};

use serde::Serialize;

use layerpin::{ConstraintAction, LayerPinError, RelayoutRequest};

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), LayerPinError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

/// Forwards committed constraints to the layout engine by printing them,
/// one JSON object per line.
pub struct JsonRelayout<W> {
    out: W,
}

impl<W: Write> JsonRelayout<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RelayoutRequest for JsonRelayout<W> {
    fn request_relayout(&mut self, action: &ConstraintAction) -> Result<(), LayerPinError> {
        serde_json::to_writer(&mut self.out, action).map_err(io::Error::from)?;
        writeln!(self.out)?;
        Ok(())
    }
}
