use crate::error::Result;
use crate::models::substrate::Manifest;
use async_trait::async_trait;
use geojson::GeoJson;

/// Where the viewer's static inputs come from.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn load_background(&self) -> Result<GeoJson>;
    async fn load_manifest(&self) -> Result<Manifest>;
    /// Raw bytes of a file below the site root, e.g. `assets/substrates/x.png`.
    async fn read_asset(&self, path: &str) -> Result<Vec<u8>>;
}
