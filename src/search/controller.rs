use super::error::SearchError;
use crate::api::{ApiError, TransitBackend};
use crate::constants::{PLACEHOLDER_END, PLACEHOLDER_ERROR, PLACEHOLDER_LOADING, PLACEHOLDER_START};
use crate::models::{InputSlot, RouteResult, StationDirectory};
use crate::render::{render_route, RouteView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Visible state of the results region
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    pub visible: bool,
    pub loading: bool,
    pub error: Option<SearchError>,
    pub route: Option<RouteView>,
    pub content_visible: bool,
}

/// An accepted search, tagged with the generation it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub start: String,
    pub end: String,
}

/// Owns the station directory and drives the results region
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    directory: StationDirectory,
    status: DirectoryStatus,
    panel: ResultsState,
    generation: u64,
}

impl SearchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    #[must_use]
    pub fn panel(&self) -> &ResultsState {
        &self.panel
    }

    /// Search is only offered once the directory has loaded
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status == DirectoryStatus::Ready
    }

    #[must_use]
    pub fn placeholder(&self, slot: InputSlot) -> &'static str {
        match (self.status, slot) {
            (DirectoryStatus::Loading, _) => PLACEHOLDER_LOADING,
            (DirectoryStatus::Failed, _) => PLACEHOLDER_ERROR,
            (DirectoryStatus::Ready, InputSlot::Start) => PLACEHOLDER_START,
            (DirectoryStatus::Ready, InputSlot::End) => PLACEHOLDER_END,
        }
    }

    /// Mark a (re)load as in flight; search stays blocked until it lands
    pub fn begin_directory_load(&mut self) {
        self.status = DirectoryStatus::Loading;
    }

    pub fn apply_directory(&mut self, result: Result<StationDirectory, ApiError>) {
        match result {
            Ok(directory) => {
                self.directory = directory;
                self.status = DirectoryStatus::Ready;
                if self.panel.error == Some(SearchError::LoadFailure) {
                    self.panel.error = None;
                    self.panel.visible = self.panel.loading || self.panel.route.is_some();
                }
            }
            Err(_) => {
                self.directory = StationDirectory::default();
                self.status = DirectoryStatus::Failed;
                self.panel.error = Some(SearchError::LoadFailure);
                self.panel.visible = true;
            }
        }
    }

    /// Check a start/end pair without touching any state
    ///
    /// # Errors
    ///
    /// `LoadFailure` when no directory is loaded, `UnknownStation` when
    /// either name is not in the directory, then `SameStation`.
    pub fn validate(&self, start: &str, end: &str) -> Result<(), SearchError> {
        if !self.can_submit() {
            return Err(SearchError::LoadFailure);
        }
        if !self.directory.contains(start) || !self.directory.contains(end) {
            return Err(SearchError::UnknownStation);
        }
        if start == end {
            return Err(SearchError::SameStation);
        }
        Ok(())
    }

    /// Validate and, if accepted, switch the panel into its loading state
    ///
    /// On rejection the error is shown and any earlier route is left as is.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; no request should be issued.
    pub fn begin_search(&mut self, start: &str, end: &str) -> Result<SearchRequest, SearchError> {
        if let Err(err) = self.validate(start, end) {
            self.panel.error = Some(err.clone());
            self.panel.visible = true;
            return Err(err);
        }

        self.generation += 1;
        self.panel.error = None;
        self.panel.content_visible = false;
        self.panel.loading = true;
        self.panel.visible = true;

        Ok(SearchRequest {
            generation: self.generation,
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// Apply the outcome of a request started by [`Self::begin_search`]
    ///
    /// Returns `false` (and changes nothing) when a newer search has been
    /// issued since `request`.
    pub fn complete_search(
        &mut self,
        request: &SearchRequest,
        outcome: Result<RouteResult, SearchError>,
    ) -> bool {
        if request.generation != self.generation {
            return false;
        }

        match outcome {
            Ok(route) => {
                self.panel.route = Some(render_route(&route));
                self.panel.content_visible = true;
            }
            Err(err) => self.panel.error = Some(err),
        }
        self.panel.loading = false;
        true
    }
}

/// Send the routing request for an accepted search
///
/// # Errors
///
/// Maps any service failure onto the matching [`SearchError`].
pub async fn run_search<B: TransitBackend>(
    backend: &B,
    request: &SearchRequest,
) -> Result<RouteResult, SearchError> {
    backend
        .find_path(&request.start, &request.end)
        .await
        .map_err(SearchError::from)
}
