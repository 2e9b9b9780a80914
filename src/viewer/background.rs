use crate::models::style::PathStyle;
use crate::models::view::{BACKGROUND_PANE, OUTLINE_PANE};
use geojson::GeoJson;
use serde::Serialize;
use std::sync::Arc;

/// A GeoJSON document drawn with one style into one pane.
#[derive(Debug, Clone, Serialize)]
pub struct VectorLayer {
    pub pane: &'static str,
    pub style: PathStyle,
    pub data: Arc<GeoJson>,
}

/// The land outline, drawn twice: filled below the substrates and
/// stroked above them.
#[derive(Debug, Clone, Serialize)]
pub struct BackgroundLayers {
    pub fill: VectorLayer,
    pub outline: VectorLayer,
}

impl BackgroundLayers {
    pub fn new(data: GeoJson) -> Self {
        let data = Arc::new(data);
        BackgroundLayers {
            fill: VectorLayer {
                pane: BACKGROUND_PANE.name,
                style: PathStyle::land_fill(),
                data: data.clone(),
            },
            outline: VectorLayer {
                pane: OUTLINE_PANE.name,
                style: PathStyle::outline(),
                data,
            },
        }
    }
}
