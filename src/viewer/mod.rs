pub mod background;
pub mod controller;
pub mod picker;
pub mod session;
pub mod zoom;

pub use controller::{SubstrateController, SwapOutcome};
pub use session::{SubstrateViewer, ViewerOptions, ViewerSession};
