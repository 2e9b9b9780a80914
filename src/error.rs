use thiserror::Error;

/// Errors raised while loading or serving viewer assets.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid GeoJSON in '{path}': {source}")]
    GeoJson {
        path: String,
        #[source]
        source: Box<geojson::Error>,
    },

    #[error("invalid substrate manifest: {0}")]
    InvalidManifest(String),

    #[error("unknown substrate '{0}'")]
    UnknownSubstrate(String),

    #[error("asset path '{0}' is outside the site root")]
    AssetPath(String),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

impl ViewerError {
    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewerError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
