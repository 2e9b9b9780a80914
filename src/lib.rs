pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod reader;
pub mod traits;
pub mod utils;
pub mod viewer;

pub use config::Config;
pub use endpoints::ViewerServer;
pub use error::ViewerError;
pub use viewer::{SubstrateController, SubstrateViewer, SwapOutcome, ViewerOptions, ViewerSession};
