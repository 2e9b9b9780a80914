use crate::config::Config;
use crate::endpoints::handlers::{
    background_handler, script_handler, select_handler, substrate_asset_handler,
    substrates_handler, view_handler, webmap_handler,
};
use crate::reader::LocalAssetSource;
use crate::traits::AssetSource;
use crate::utils::geometry::feature_bounds;
use crate::utils::status::{AssetReport, print_asset_summary};
use crate::viewer::{SubstrateViewer, ViewerOptions, ViewerSession};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Selection sessions idle longer than this are dropped; the page opens a
/// new one on reload.
const SESSION_IDLE: Duration = Duration::from_secs(60 * 60);

pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn AssetSource>,
    pub viewer: SubstrateViewer,
    pub sessions: moka::future::Cache<String, Arc<Mutex<ViewerSession>>>,
    pub colorbars: moka::future::Cache<String, Arc<Vec<u8>>>,
}

impl AppState {
    pub async fn new(config: Config, source: Arc<dyn AssetSource>) -> Self {
        let options = ViewerOptions {
            bounds: config.bounds,
            escape_units: config.escape_units,
        };
        let viewer = SubstrateViewer::initialize(source.as_ref(), options).await;
        Self {
            config,
            source,
            viewer,
            sessions: moka::future::Cache::builder()
                .max_capacity(10_000)
                .time_to_idle(SESSION_IDLE)
                .build(),
            colorbars: moka::future::Cache::builder().max_capacity(1024).build(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(state.config.root.clone());
    Router::new()
        .route("/", get(webmap_handler))
        .route("/script.js", get(script_handler))
        .route("/api/view", get(view_handler))
        .route("/api/background", get(background_handler))
        .route("/api/substrates", get(substrates_handler))
        .route("/api/select/{session}/{key}", post(select_handler))
        .route("/assets/substrates/{file}", get(substrate_asset_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct ViewerServer {
    state: Arc<AppState>,
}

impl ViewerServer {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        if !config.root.is_dir() {
            anyhow::bail!("Site root {} is not a directory", config.root.display());
        }
        let source = Arc::new(LocalAssetSource::new(config.root.clone()));
        let state = AppState::new(config, source).await;

        if let Ok(background) = state.viewer.background() {
            match feature_bounds(&background.fill.data, None) {
                Some(extent) if !state.config.bounds.contains(&extent) => warn!(
                    background = %extent,
                    map = %state.config.bounds,
                    "Background outline extends beyond the map bounds"
                ),
                _ => {}
            }
        }
        let report = AssetReport::scan(&state.config.root, state.viewer.manifest());
        print_asset_summary(&report, state.config.default_palette.as_deref());

        Ok(Self {
            state: Arc::new(state),
        })
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.state.config.port));
        let app = router(self.state.clone());
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!(%addr, root = %self.state.config.root.display(), "Substrate map serving");
        println!(
            r#"
    🗺️ Substrate map viewer
       → http://{}/

    📚 Substrate picker (JSON)
       → http://{}/api/substrates
            "#,
            addr, addr
        );

        axum::serve(listener, app).await?;
        Ok(())
    }
}
