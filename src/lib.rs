pub mod api;
pub mod components;
pub mod constants;
pub mod loader;
pub mod logging;
pub mod models;
pub mod render;
pub mod search;
pub mod sidebar;
pub mod state;

pub use components::app::App;
