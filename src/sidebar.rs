use crate::api::ApiError;
use crate::constants::{SIDEBAR_BACK, SIDEBAR_FAILED, SIDEBAR_LOADING};
use crate::models::LineCatalog;

/// Which page of the sidebar is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SidebarView {
    #[default]
    LinesList,
    StationsOfLine(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// One rendered row of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    Loading,
    Failed,
    Line(String),
    Back,
    Header(String),
    Station(String),
}

impl SidebarEntry {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Loading => SIDEBAR_LOADING,
            Self::Failed => SIDEBAR_FAILED,
            Self::Back => SIDEBAR_BACK,
            Self::Line(name) | Self::Header(name) | Self::Station(name) => name,
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Line(_) | Self::Back | Self::Station(_))
    }
}

/// Two-level line/station browser backed by the line catalog
#[derive(Debug, Clone, Default)]
pub struct SidebarNavigator {
    catalog: LineCatalog,
    status: CatalogStatus,
    view: SidebarView,
}

impl SidebarNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn catalog(&self) -> &LineCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn view(&self) -> &SidebarView {
        &self.view
    }

    pub fn begin_catalog_load(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    pub fn apply_catalog(&mut self, result: Result<LineCatalog, ApiError>) {
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.status = CatalogStatus::Ready;
                self.show_lines_list();
            }
            Err(_) => {
                self.catalog = LineCatalog::default();
                self.status = CatalogStatus::Failed;
            }
        }
    }

    pub fn show_lines_list(&mut self) {
        self.view = SidebarView::LinesList;
    }

    /// Open a line's station list; names not in the catalog are ignored
    pub fn show_stations_for_line(&mut self, line: &str) -> bool {
        if !self.catalog.contains_line(line) {
            return false;
        }
        self.view = SidebarView::StationsOfLine(line.to_string());
        true
    }

    /// Rows for the current state, top to bottom
    #[must_use]
    pub fn entries(&self) -> Vec<SidebarEntry> {
        match self.status {
            CatalogStatus::Loading => return vec![SidebarEntry::Loading],
            CatalogStatus::Failed => return vec![SidebarEntry::Failed],
            CatalogStatus::Ready => {}
        }

        match &self.view {
            SidebarView::LinesList => self
                .catalog
                .line_names()
                .map(|name| SidebarEntry::Line(name.to_string()))
                .collect(),
            SidebarView::StationsOfLine(line) => {
                let stations = self.catalog.stations_of(line).unwrap_or_default();
                let mut entries = Vec::with_capacity(stations.len() + 2);
                entries.push(SidebarEntry::Back);
                entries.push(SidebarEntry::Header(line.clone()));
                entries.extend(stations.iter().cloned().map(SidebarEntry::Station));
                entries
            }
        }
    }

    /// Handle a click on `entry`
    ///
    /// Returns the station name to write into the focused input when a
    /// station row was clicked; the view does not change in that case.
    pub fn activate(&mut self, entry: &SidebarEntry) -> Option<String> {
        match entry {
            SidebarEntry::Line(line) => {
                self.show_stations_for_line(line);
                None
            }
            SidebarEntry::Back => {
                self.show_lines_list();
                None
            }
            SidebarEntry::Station(station) => Some(station.clone()),
            SidebarEntry::Loading | SidebarEntry::Failed | SidebarEntry::Header(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeBackend;
    use crate::api::TransitBackend;
    use crate::models::{InputSlot, StationInputs};
    use futures::executor::block_on;

    fn catalog() -> LineCatalog {
        [
            ("MRT Blue Line", vec!["Tha Phra", "Sam Yan", "Sukhumvit"]),
            ("BTS Sukhumvit Line", vec!["Mo Chit", "Siam", "Asok"]),
            ("Gold Line", vec!["Krung Thon Buri", "Charoen Nakhon"]),
        ]
        .into_iter()
        .map(|(line, stations)| {
            (line.to_string(), stations.into_iter().map(ToString::to_string).collect::<Vec<_>>())
        })
        .collect()
    }

    fn ready_navigator() -> SidebarNavigator {
        let mut navigator = SidebarNavigator::new();
        navigator.apply_catalog(Ok(catalog()));
        navigator
    }

    fn line_entries() -> Vec<SidebarEntry> {
        ["MRT Blue Line", "BTS Sukhumvit Line", "Gold Line"]
            .into_iter()
            .map(|name| SidebarEntry::Line(name.to_string()))
            .collect()
    }

    #[test]
    fn test_loading_before_catalog_arrives() {
        let navigator = SidebarNavigator::new();
        assert_eq!(navigator.entries(), vec![SidebarEntry::Loading]);
        assert_eq!(navigator.entries()[0].label(), SIDEBAR_LOADING);
    }

    #[test]
    fn test_lines_list_keeps_catalog_order() {
        let navigator = ready_navigator();

        assert_eq!(navigator.view(), &SidebarView::LinesList);
        assert_eq!(navigator.entries(), line_entries());
    }

    #[test]
    fn test_clicking_line_lists_its_stations() {
        let mut navigator = ready_navigator();

        let picked = navigator.activate(&SidebarEntry::Line("BTS Sukhumvit Line".to_string()));

        assert_eq!(picked, None);
        assert_eq!(
            navigator.view(),
            &SidebarView::StationsOfLine("BTS Sukhumvit Line".to_string())
        );
        assert_eq!(
            navigator.entries(),
            vec![
                SidebarEntry::Back,
                SidebarEntry::Header("BTS Sukhumvit Line".to_string()),
                SidebarEntry::Station("Mo Chit".to_string()),
                SidebarEntry::Station("Siam".to_string()),
                SidebarEntry::Station("Asok".to_string()),
            ]
        );
        assert!(!navigator.entries()[1].is_interactive());
    }

    #[test]
    fn test_back_restores_full_lines_list() {
        let mut navigator = ready_navigator();

        for line in ["Gold Line", "MRT Blue Line"] {
            navigator.activate(&SidebarEntry::Line(line.to_string()));
            navigator.activate(&SidebarEntry::Back);
            assert_eq!(navigator.view(), &SidebarView::LinesList);
            assert_eq!(navigator.entries(), line_entries());
        }
    }

    #[test]
    fn test_station_click_keeps_view_and_fills_focused_input() {
        let mut navigator = ready_navigator();
        let mut inputs = StationInputs::default();
        inputs.set(InputSlot::Start, "Mo Chit".to_string());
        inputs.focus(InputSlot::End);

        navigator.activate(&SidebarEntry::Line("MRT Blue Line".to_string()));
        let view_before = navigator.view().clone();
        if let Some(station) = navigator.activate(&SidebarEntry::Station("Sam Yan".to_string())) {
            inputs.fill_focused(station);
        }

        assert_eq!(navigator.view(), &view_before);
        assert_eq!(inputs.value(InputSlot::End), "Sam Yan");
        assert_eq!(inputs.value(InputSlot::Start), "Mo Chit");
    }

    #[test]
    fn test_header_and_unknown_line_are_ignored() {
        let mut navigator = ready_navigator();

        assert_eq!(navigator.activate(&SidebarEntry::Line("Grey Line".to_string())), None);
        assert_eq!(navigator.view(), &SidebarView::LinesList);

        navigator.activate(&SidebarEntry::Line("Gold Line".to_string()));
        assert_eq!(navigator.activate(&SidebarEntry::Header("Gold Line".to_string())), None);
        assert_eq!(navigator.view(), &SidebarView::StationsOfLine("Gold Line".to_string()));
    }

    #[test]
    fn test_failed_catalog_load() {
        let mut navigator = SidebarNavigator::new();
        navigator.apply_catalog(block_on(FakeBackend::unreachable().lines_and_stations()));

        assert!(navigator.catalog().is_empty());
        assert_eq!(navigator.entries(), vec![SidebarEntry::Failed]);
        assert_eq!(navigator.entries()[0].label(), SIDEBAR_FAILED);
    }

    #[test]
    fn test_catalog_from_backend() {
        let backend = FakeBackend::new(&[]).with_catalog(Some(catalog()));
        let mut navigator = SidebarNavigator::new();
        navigator.apply_catalog(block_on(backend.lines_and_stations()));

        assert_eq!(backend.catalog_calls.get(), 1);
        assert_eq!(navigator.entries().len(), 3);
    }
}
