pub mod source;

pub use source::AssetSource;
