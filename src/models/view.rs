use serde::{Deserialize, Serialize};

pub const BACKGROUND_PANE: Pane = Pane {
    name: "bg",
    z_index: 300,
};
pub const SUBSTRATES_PANE: Pane = Pane {
    name: "substrates",
    z_index: 500,
};
pub const OUTLINE_PANE: Pane = Pane {
    name: "outline",
    z_index: 1000,
};

/// Pixel size of the map container element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// False before the element has been laid out; the zoom is degenerate then.
    pub fn is_laid_out(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A named rendering layer with a fixed stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pane {
    pub name: &'static str,
    #[serde(rename = "zIndex")]
    pub z_index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Crs {
    /// Flat, non-geodetic coordinates (Leaflet `L.CRS.Simple`).
    Simple,
}

/// Everything the browser needs to construct the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub min_zoom: f64,
    pub zoom: f64,
    pub center: [f64; 2],
    pub crs: Crs,
    pub max_bounds: [[f64; 2]; 2],
    pub panes: Vec<Pane>,
}
