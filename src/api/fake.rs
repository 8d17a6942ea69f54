use std::cell::{Cell, RefCell};

use super::{ApiError, TransitBackend};
use crate::models::{LineCatalog, RouteResult, StationDirectory};

/// What the fake answers to `find_path`
#[derive(Debug, Clone)]
pub enum FakeReply {
    Route(RouteResult),
    Status(u16, Option<String>),
    Malformed,
}

impl FakeReply {
    fn to_result(&self) -> Result<RouteResult, ApiError> {
        match self {
            Self::Route(route) => Ok(route.clone()),
            Self::Status(status, detail) => Err(ApiError::Status {
                status: *status,
                detail: detail.clone(),
            }),
            Self::Malformed => Err(ApiError::Decode("missing field `steps`".to_string())),
        }
    }
}

/// In-memory backend that records every request it receives
#[derive(Debug)]
pub struct FakeBackend {
    /// `None` makes the directory fetch fail with a 500
    pub stations: Option<Vec<String>>,
    /// `None` makes the catalog fetch fail with a 500
    pub catalog: Option<LineCatalog>,
    pub reply: FakeReply,
    pub directory_calls: Cell<usize>,
    pub catalog_calls: Cell<usize>,
    pub find_path_calls: RefCell<Vec<(String, String)>>,
}

impl FakeBackend {
    pub fn new(stations: &[&str]) -> Self {
        Self {
            stations: Some(stations.iter().map(ToString::to_string).collect()),
            catalog: Some(LineCatalog::default()),
            reply: FakeReply::Status(404, None),
            directory_calls: Cell::new(0),
            catalog_calls: Cell::new(0),
            find_path_calls: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_reply(mut self, reply: FakeReply) -> Self {
        self.reply = reply;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Option<LineCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            stations: None,
            catalog: None,
            ..Self::new(&[])
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.find_path_calls.borrow().clone()
    }
}

impl TransitBackend for FakeBackend {
    async fn all_stations(&self) -> Result<StationDirectory, ApiError> {
        self.directory_calls.set(self.directory_calls.get() + 1);
        self.stations
            .clone()
            .map(StationDirectory::new)
            .ok_or(ApiError::Status { status: 500, detail: None })
    }

    async fn lines_and_stations(&self) -> Result<LineCatalog, ApiError> {
        self.catalog_calls.set(self.catalog_calls.get() + 1);
        self.catalog
            .clone()
            .ok_or(ApiError::Status { status: 500, detail: None })
    }

    async fn find_path(&self, start: &str, end: &str) -> Result<RouteResult, ApiError> {
        self.find_path_calls
            .borrow_mut()
            .push((start.to_string(), end.to_string()));
        self.reply.to_result()
    }
}
