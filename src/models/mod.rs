mod catalog;
mod directory;
mod focus;
mod line_display;
mod route;

pub use catalog::LineCatalog;
pub use directory::StationDirectory;
pub use focus::{InputSlot, StationInputs};
pub use line_display::{line_display, LineDisplayInfo, LineStyle};
pub use route::{RouteResult, RouteStep};
