pub mod local;

pub use local::{BACKGROUND_PATH, LocalAssetSource};
