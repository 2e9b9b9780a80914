pub mod handlers;
mod map;
pub mod server;

pub use server::{AppState, ViewerServer, router};
