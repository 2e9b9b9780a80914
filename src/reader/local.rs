use crate::error::{Result, ViewerError};
use crate::models::substrate::{MANIFEST_PATH, Manifest};
use crate::traits::AssetSource;
use async_trait::async_trait;
use geojson::GeoJson;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const BACKGROUND_PATH: &str = "assets/ne_bbox.geojson";

/// Reads viewer assets from a directory on disk.
pub struct LocalAssetSource {
    root: PathBuf,
}

impl LocalAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Joins a relative asset path onto the root, refusing anything that
    /// could leave it.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !safe || path.is_empty() {
            return Err(ViewerError::AssetPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.resolve(path)?;
        debug!(path = %full.display(), "Reading asset");
        tokio::fs::read(&full).await.map_err(|source| ViewerError::Io {
            path: full.display().to_string(),
            source,
        })
    }
}

#[async_trait]
impl AssetSource for LocalAssetSource {
    async fn load_background(&self) -> Result<GeoJson> {
        let bytes = self.read(BACKGROUND_PATH).await?;
        String::from_utf8_lossy(&bytes)
            .parse::<GeoJson>()
            .map_err(|e| ViewerError::GeoJson {
                path: BACKGROUND_PATH.to_string(),
                source: Box::new(e),
            })
    }

    async fn load_manifest(&self) -> Result<Manifest> {
        let bytes = self.read(MANIFEST_PATH).await?;
        Manifest::from_json(MANIFEST_PATH, &bytes)
    }

    async fn read_asset(&self, path: &str) -> Result<Vec<u8>> {
        self.read(path).await
    }
}
