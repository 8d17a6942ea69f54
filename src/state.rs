use leptos::{
    create_rw_signal, spawn_local, RwSignal, SignalUpdate, SignalWith, SignalWithUntracked,
};

use crate::api::TransitBackend;
use crate::loader::{load_line_catalog, load_station_directory};
use crate::models::{InputSlot, StationInputs};
use crate::search::{run_search, SearchController};
use crate::sidebar::{SidebarEntry, SidebarNavigator};

/// Reactive handles to everything the page mutates
///
/// Provided once as context by `App`; every component reads and writes
/// through these signals on the single UI task.
#[derive(Clone, Copy)]
pub struct AppState {
    pub search: RwSignal<SearchController>,
    pub sidebar: RwSignal<SidebarNavigator>,
    pub inputs: RwSignal<StationInputs>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: create_rw_signal(SearchController::new()),
            sidebar: create_rw_signal(SidebarNavigator::new()),
            inputs: create_rw_signal(StationInputs::default()),
        }
    }

    pub fn load_station_directory<B: TransitBackend + 'static>(self, backend: B) {
        self.search.update(SearchController::begin_directory_load);
        let search = self.search;
        spawn_local(async move {
            let result = load_station_directory(&backend).await;
            search.update(|controller| controller.apply_directory(result));
        });
    }

    pub fn load_line_catalog<B: TransitBackend + 'static>(self, backend: B) {
        self.sidebar.update(SidebarNavigator::begin_catalog_load);
        let sidebar = self.sidebar;
        spawn_local(async move {
            let result = load_line_catalog(&backend).await;
            sidebar.update(|navigator| navigator.apply_catalog(result));
        });
    }

    /// Validate the current inputs and, if accepted, start the route request
    pub fn submit_search<B: TransitBackend + 'static>(self, backend: B) {
        let (start, end) = self.inputs.with_untracked(|inputs| {
            (
                inputs.value(InputSlot::Start).to_string(),
                inputs.value(InputSlot::End).to_string(),
            )
        });

        let Some(Ok(request)) = self
            .search
            .try_update(|controller| controller.begin_search(&start, &end))
        else {
            return;
        };

        let search = self.search;
        spawn_local(async move {
            let outcome = run_search(&backend, &request).await;
            if let Err(err) = &outcome {
                crate::log_error!("Error finding path: {err}");
            }
            let applied = search.try_update(|controller| controller.complete_search(&request, outcome));
            if applied == Some(false) {
                crate::log!("Dropped stale result for search #{}", request.generation);
            }
        });
    }

    pub fn focus_input(self, slot: InputSlot) {
        self.inputs.update(|inputs| inputs.focus(slot));
    }

    pub fn set_input(self, slot: InputSlot, value: String) {
        self.inputs.update(|inputs| inputs.set(slot, value));
    }

    #[must_use]
    pub fn placeholder(self, slot: InputSlot) -> &'static str {
        self.search.with(|controller| controller.placeholder(slot))
    }

    /// Click handler shared by every sidebar row
    pub fn activate_sidebar_entry(self, entry: &SidebarEntry) {
        let picked = self
            .sidebar
            .try_update(|navigator| navigator.activate(entry))
            .flatten();
        if let Some(station) = picked {
            self.inputs.update(|inputs| inputs.fill_focused(station));
        }
    }
}
