use crate::error::{Result, ViewerError};
use crate::utils::style::is_builtin_palette;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SUBSTRATES_DIR: &str = "assets/substrates";
pub const MANIFEST_PATH: &str = "assets/substrates/substrates.json";

/// One selectable data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    pub key: String,
    pub label: String,
    /// Unit markup, rendered as HTML by the viewer.
    pub unit: String,
    /// Built-in colour ramp used when the colour-bar image has to be generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

impl Substrate {
    pub fn overlay_url(&self) -> String {
        format!("{}/{}.png", SUBSTRATES_DIR, self.key)
    }

    pub fn colorbar_url(&self) -> String {
        format!("{}/cbar_{}.png", SUBSTRATES_DIR, self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstrateHeading {
    pub heading: String,
    pub items: Vec<Substrate>,
}

/// The ordered substrate list. Display order is file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub headings: Vec<SubstrateHeading>,
}

impl Manifest {
    pub fn from_json(path: &str, bytes: &[u8]) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_slice(bytes).map_err(|source| ViewerError::Json {
                path: path.to_string(),
                source,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Keys must be non-empty, unique and usable as a file name stem.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for substrate in self.substrates() {
            let key = substrate.key.as_str();
            if key.is_empty() {
                return Err(ViewerError::InvalidManifest(format!(
                    "substrate '{}' has an empty key",
                    substrate.label
                )));
            }
            if !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
                || key.starts_with('.')
            {
                return Err(ViewerError::InvalidManifest(format!(
                    "key '{}' is not a valid file name",
                    key
                )));
            }
            if !seen.insert(key) {
                return Err(ViewerError::InvalidManifest(format!(
                    "duplicate key '{}'",
                    key
                )));
            }
            if let Some(palette) = substrate.palette.as_deref() {
                if !is_builtin_palette(palette) {
                    return Err(ViewerError::InvalidManifest(format!(
                        "substrate '{}' names unknown palette '{}'",
                        key, palette
                    )));
                }
            }
        }
        Ok(())
    }

    /// Every substrate across all headings, in display order.
    pub fn substrates(&self) -> impl Iterator<Item = &Substrate> {
        self.headings.iter().flat_map(|h| h.items.iter())
    }

    pub fn first(&self) -> Option<&Substrate> {
        self.substrates().next()
    }

    pub fn find(&self, key: &str) -> Option<&Substrate> {
        self.substrates().find(|s| s.key == key)
    }

    pub fn len(&self) -> usize {
        self.substrates().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }
}
