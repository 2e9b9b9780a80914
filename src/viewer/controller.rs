use crate::models::bounds::GeoBounds;
use crate::models::overlay::OverlayLayer;
use crate::models::substrate::Substrate;
use crate::models::view::SUBSTRATES_PANE;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// What the map and legend must do after a selection.
#[derive(Debug, Clone, Serialize)]
pub struct SwapOutcome {
    pub key: String,
    pub attached: Arc<OverlayLayer>,
    /// Layers to remove from the map before attaching.
    pub detached: Vec<Arc<OverlayLayer>>,
    /// True when `attached` was constructed by this selection.
    pub created: bool,
    pub colorbar_url: String,
    pub caption: String,
    pub unit_html: String,
}

/// Owns the overlay cache and tracks which overlay is on the map.
///
/// Overlays are created on first selection and kept for the lifetime of
/// the controller. At most one of them is attached at any time.
#[derive(Debug)]
pub struct SubstrateController {
    bounds: GeoBounds,
    escape_units: bool,
    overlays: HashMap<String, Arc<OverlayLayer>>,
    attached: Option<String>,
    next_id: u64,
}

impl SubstrateController {
    pub fn new(bounds: GeoBounds) -> Self {
        Self {
            bounds,
            escape_units: false,
            overlays: HashMap::new(),
            attached: None,
            next_id: 0,
        }
    }

    /// Render unit markup as text instead of trusting it.
    pub fn with_escaped_units(mut self, escape: bool) -> Self {
        self.escape_units = escape;
        self
    }

    pub fn select(&mut self, substrate: &Substrate) -> SwapOutcome {
        let url = substrate.overlay_url();

        let mut created = false;
        let overlay = self
            .overlays
            .entry(url.clone())
            .or_insert_with(|| {
                created = true;
                let id = self.next_id;
                self.next_id += 1;
                Arc::new(OverlayLayer {
                    id,
                    url: url.clone(),
                    bounds: self.bounds.corners(),
                    pane: SUBSTRATES_PANE.name,
                })
            })
            .clone();

        let detached = self
            .attached
            .replace(url)
            .and_then(|previous| self.overlays.get(&previous).cloned())
            .into_iter()
            .collect();

        debug!(
            key = %substrate.key,
            overlay_id = overlay.id,
            created,
            "Swapped substrate overlay"
        );

        SwapOutcome {
            key: substrate.key.clone(),
            attached: overlay,
            detached,
            created,
            colorbar_url: substrate.colorbar_url(),
            caption: substrate.label.clone(),
            unit_html: if self.escape_units {
                escape_html(&substrate.unit)
            } else {
                substrate.unit.clone()
            },
        }
    }

    /// The overlays currently on the map.
    pub fn attached_overlays(&self) -> Vec<Arc<OverlayLayer>> {
        self.attached
            .as_ref()
            .and_then(|url| self.overlays.get(url))
            .cloned()
            .into_iter()
            .collect()
    }

    pub fn cache_len(&self) -> usize {
        self.overlays.len()
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
