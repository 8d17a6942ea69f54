use serde::{Deserialize, Serialize};

/// Every station name the routing service knows, in the order it was served
///
/// Built once per successful load and replaced wholesale on reload; never
/// edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationDirectory {
    stations: Vec<String>,
}

impl StationDirectory {
    #[must_use]
    pub fn new(stations: Vec<String>) -> Self {
        Self { stations }
    }

    /// Exact, case-sensitive membership test
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.stations.iter().any(|station| station == name)
    }

    #[must_use]
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
