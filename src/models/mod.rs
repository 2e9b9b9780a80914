pub mod bounds;
pub mod overlay;
pub mod style;
pub mod substrate;
pub mod view;
