use crate::error::{Result, ViewerError};
use crate::models::bounds::GeoBounds;
use crate::models::substrate::Manifest;
use crate::models::view::{ContainerSize, MapView};
use crate::traits::AssetSource;
use crate::viewer::background::BackgroundLayers;
use crate::viewer::controller::{SubstrateController, SwapOutcome};
use crate::viewer::picker::Picker;
use crate::viewer::zoom::init_map_view;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ViewerOptions {
    pub bounds: GeoBounds,
    pub escape_units: bool,
}

/// A viewer whose background and substrate list have both been loaded.
///
/// Both loads run concurrently and fail independently: a missing
/// background leaves the map bare, a missing manifest leaves the picker
/// empty. Construction is the only way to obtain one, so a value of this
/// type is always in the ready state. It holds no selection; every page
/// load opens its own [`ViewerSession`].
#[derive(Debug)]
pub struct SubstrateViewer {
    options: ViewerOptions,
    background: Result<BackgroundLayers>,
    manifest: Arc<Manifest>,
    manifest_error: Option<ViewerError>,
    picker: Picker,
}

impl SubstrateViewer {
    pub async fn initialize(source: &dyn AssetSource, options: ViewerOptions) -> Self {
        let (background, manifest) =
            tokio::join!(source.load_background(), source.load_manifest());

        let background = background.map(BackgroundLayers::new);
        if let Err(e) = &background {
            warn!(error = %e, "Background outline unavailable, map will have no land shapes");
        }

        let (manifest, manifest_error) = match manifest {
            Ok(m) => (m, None),
            Err(e) => {
                warn!(error = %e, "Substrate manifest unavailable, picker will be empty");
                (Manifest::default(), Some(e))
            }
        };

        let picker = Picker::from_manifest(&manifest);
        info!(
            substrates = manifest.len(),
            default = picker.checked_key().unwrap_or("<none>"),
            "Substrate viewer ready"
        );

        Self {
            options,
            background,
            manifest: Arc::new(manifest),
            manifest_error,
            picker,
        }
    }

    pub fn map_view(&self, container: ContainerSize) -> MapView {
        init_map_view(&self.options.bounds, container)
    }

    pub fn bounds(&self) -> &GeoBounds {
        &self.options.bounds
    }

    pub fn background(&self) -> std::result::Result<&BackgroundLayers, &ViewerError> {
        self.background.as_ref()
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn manifest_error(&self) -> Option<&ViewerError> {
        self.manifest_error.as_ref()
    }

    /// Fresh selection state with the first substrate already swapped in.
    pub fn open_session(&self) -> ViewerSession {
        let mut controller = SubstrateController::new(self.options.bounds)
            .with_escaped_units(self.options.escape_units);
        let current = self.manifest.first().map(|first| controller.select(first));
        ViewerSession {
            manifest: self.manifest.clone(),
            picker: self.picker.clone(),
            controller,
            current,
        }
    }
}

/// Selection state of one page load: its own overlay cache, check mark
/// and current substrate.
#[derive(Debug)]
pub struct ViewerSession {
    manifest: Arc<Manifest>,
    picker: Picker,
    controller: SubstrateController,
    current: Option<SwapOutcome>,
}

impl ViewerSession {
    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn current(&self) -> Option<&SwapOutcome> {
        self.current.as_ref()
    }

    pub fn controller(&self) -> &SubstrateController {
        &self.controller
    }

    /// Runs the overlay swap for `key` and checks its control.
    pub fn select(&mut self, key: &str) -> Result<SwapOutcome> {
        let substrate = self
            .manifest
            .find(key)
            .ok_or_else(|| ViewerError::UnknownSubstrate(key.to_string()))?;
        let outcome = self.controller.select(substrate);
        self.picker.check(key);
        self.current = Some(outcome.clone());
        Ok(outcome)
    }
}
