use serde::Serialize;

/// A raster image drawn at fixed bounds in a pane.
#[derive(Debug, PartialEq, Serialize)]
pub struct OverlayLayer {
    /// Sequence number of construction, unique per controller.
    pub id: u64,
    pub url: String,
    pub bounds: [[f64; 2]; 2],
    pub pane: &'static str,
}
