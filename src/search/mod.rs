mod controller;
mod error;

pub use controller::{run_search, DirectoryStatus, ResultsState, SearchController, SearchRequest};
pub use error::SearchError;
