use serde::Serialize;

/// Leaflet path options for a GeoJSON layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<&'static str>,
    pub weight: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    pub fill_opacity: f32,
}

impl PathStyle {
    /// Uniform grey land fill without stroke.
    pub fn land_fill() -> Self {
        PathStyle {
            color: None,
            fill_color: Some("#cccccc"),
            weight: 0.0,
            opacity: None,
            fill_opacity: 1.0,
        }
    }

    /// Thin dark stroke without fill.
    pub fn outline() -> Self {
        PathStyle {
            color: Some("#333333"),
            fill_color: None,
            weight: 1.0,
            opacity: Some(1.0),
            fill_opacity: 0.0,
        }
    }
}
